//! Query-parameter filtering over stored records.
//!
//! A filter is a struct of optional fields. A record matches when every
//! supplied field matches; an absent field places no constraint.

/// A predicate over one resource type.
pub trait RecordFilter<R> {
  fn matches(&self, record: &R) -> bool;

  /// Keep the matching records, preserving order.
  fn apply<I>(&self, records: I) -> Vec<R>
  where
    I: IntoIterator<Item = R>,
    Self: Sized,
  {
    records.into_iter().filter(|r| self.matches(r)).collect()
  }
}

/// Exact equality against a required field.
pub fn exact<T>(wanted: Option<&T>, actual: &T) -> bool
where
  T: PartialEq + ?Sized,
{
  wanted.is_none_or(|w| w == actual)
}

/// Exact equality against an optional field. A missing value never matches a
/// supplied one.
pub fn exact_optional<T>(wanted: Option<&T>, actual: Option<&T>) -> bool
where
  T: PartialEq + ?Sized,
{
  match wanted {
    None => true,
    Some(w) => actual.is_some_and(|a| w == a),
  }
}

/// Compare against a value's display form, e.g. a date as `YYYY-MM-DD`.
pub fn exact_display<T>(wanted: Option<&str>, actual: Option<&T>) -> bool
where
  T: ToString,
{
  match wanted {
    None => true,
    Some(w) => actual.is_some_and(|a| a.to_string() == w),
  }
}

/// Case-insensitive substring containment.
pub fn contains_ignore_case(wanted: Option<&str>, actual: &str) -> bool {
  wanted.is_none_or(|w| actual.to_lowercase().contains(&w.to_lowercase()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absent_parameter_matches_anything() {
    assert!(exact::<str>(None, "x"));
    assert!(exact_optional::<str>(None, None));
    assert!(exact_display::<u8>(None, None));
    assert!(contains_ignore_case(None, ""));
  }

  #[test]
  fn null_field_never_matches_a_value() {
    assert!(!exact_optional(Some("NY"), None));
    assert!(exact_optional(Some("NY"), Some("NY")));
  }

  #[test]
  fn exact_is_case_sensitive() {
    assert!(!exact(Some("new york"), "New York"));
    assert!(!exact(Some("New"), "New York"));
  }

  #[test]
  fn substring_ignores_case() {
    assert!(contains_ignore_case(
      Some("intro"),
      "Introduction to Computer Science"
    ));
    assert!(contains_ignore_case(Some("SCIENCE"), "Computer Science"));
    assert!(!contains_ignore_case(Some("calculus"), "Computer Science"));
  }
}
