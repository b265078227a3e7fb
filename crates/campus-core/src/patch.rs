//! Tri-state field values for partial updates.

use serde::{Deserialize, Deserializer};

/// One field of a partial-update payload.
///
/// Distinguishes a key that was left out of the JSON object from one that was
/// explicitly set to `null`. Fields of this type must be marked
/// `#[serde(default)]` so that a missing key becomes [`Patch::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
  Absent,
  Null,
  Set(T),
}

impl<T> Default for Patch<T> {
  fn default() -> Self { Self::Absent }
}

impl<T> Patch<T> {
  pub fn is_absent(&self) -> bool { matches!(self, Self::Absent) }

  pub fn is_null(&self) -> bool { matches!(self, Self::Null) }

  pub fn as_set(&self) -> Option<&T> {
    match self {
      Self::Set(v) => Some(v),
      _ => None,
    }
  }

  /// Overwrite a required field. `Null` is rejected during validation, so
  /// here it leaves the field untouched.
  pub fn apply(self, target: &mut T) {
    if let Self::Set(v) = self {
      *target = v;
    }
  }

  /// Overwrite an optional field; `Null` clears it.
  pub fn apply_optional(self, target: &mut Option<T>) {
    match self {
      Self::Absent => {}
      Self::Null => *target = None,
      Self::Set(v) => *target = Some(v),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
  fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
    Ok(match Option::<T>::deserialize(de)? {
      Some(v) => Self::Set(v),
      None => Self::Null,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Deserialize)]
  struct Body {
    #[serde(default)]
    grade: Patch<String>,
  }

  #[test]
  fn missing_null_and_value_are_distinct() {
    let absent: Body = serde_json::from_str("{}").unwrap();
    let null: Body = serde_json::from_str(r#"{"grade":null}"#).unwrap();
    let set: Body = serde_json::from_str(r#"{"grade":"A"}"#).unwrap();
    assert!(absent.grade.is_absent());
    assert!(null.grade.is_null());
    assert_eq!(set.grade.as_set().map(String::as_str), Some("A"));
  }

  #[test]
  fn apply_optional_clears_on_null() {
    let mut grade = Some("B".to_string());
    Patch::Absent.apply_optional(&mut grade);
    assert_eq!(grade.as_deref(), Some("B"));
    Patch::Null.apply_optional(&mut grade);
    assert_eq!(grade, None);
    Patch::Set("A".to_string()).apply_optional(&mut grade);
    assert_eq!(grade.as_deref(), Some("A"));
  }
}
