//! Field-level validation for create and update payloads.
//!
//! Payloads are first shaped by serde (types, required fields); the
//! [`Validate`] pass then checks formats and ranges and collects every
//! violation into a [`ValidationErrors`] list instead of stopping at the first.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::patch::Patch;

// ─── Patterns ────────────────────────────────────────────────────────────────

/// Department prefix plus four digits, e.g. `CS1234` or `MATH1001`.
pub static COURSE_ID: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Z]{2,4}\d{4}$").expect("valid course id pattern")
});

/// Institutional login handle, e.g. `abc1234`.
pub static UNI: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[a-z]{2,3}\d{1,4}$").expect("valid uni pattern")
});

pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern")
});

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A single constraint violation on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:   String,
  pub message: String,
}

/// Every violation found in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
  pub fn new() -> Self { Self::default() }

  pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
    let mut errors = Self::new();
    errors.push(field, message);
    errors
  }

  pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
    self.0.push(FieldError {
      field:   field.into(),
      message: message.into(),
    });
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn errors(&self) -> &[FieldError] { &self.0 }

  /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
  pub fn into_result(self) -> Result<(), Self> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }

  /// Check `value` against `pattern`.
  pub fn pattern(&mut self, field: &str, value: &str, pattern: &Regex) {
    if !pattern.is_match(value) {
      self.push(
        field,
        format!("{value:?} does not match pattern {}", pattern.as_str()),
      );
    }
  }

  /// Check that `value` lies in `min..=max`.
  pub fn range<T>(&mut self, field: &str, value: T, min: T, max: Option<T>)
  where
    T: PartialOrd + fmt::Display + Copy,
  {
    let too_big = max.is_some_and(|max| value > max);
    if value < min || too_big {
      let message = match max {
        Some(max) => format!("must be between {min} and {max}, got {value}"),
        None => format!("must be at least {min}, got {value}"),
      };
      self.push(field, message);
    }
  }

  /// A required field may be omitted from a patch but never set to `null`.
  pub fn not_null<T>(&mut self, field: &str, value: &Patch<T>) {
    if value.is_null() {
      self.push(field, "may not be null");
    }
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "validation failed")?;
    for (i, e) in self.0.iter().enumerate() {
      let sep = if i == 0 { ": " } else { "; " };
      write!(f, "{sep}{}: {}", e.field, e.message)?;
    }
    Ok(())
  }
}

impl std::error::Error for ValidationErrors {}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Format and range checks that serde cannot express.
pub trait Validate {
  fn validate(&self) -> Result<(), ValidationErrors>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn course_id_pattern() {
    assert!(COURSE_ID.is_match("CS1234"));
    assert!(COURSE_ID.is_match("MATH1001"));
    assert!(!COURSE_ID.is_match("cs123"));
    assert!(!COURSE_ID.is_match("C1234"));
    assert!(!COURSE_ID.is_match("COMPS1234"));
    assert!(!COURSE_ID.is_match("CS12345"));
  }

  #[test]
  fn uni_pattern() {
    assert!(UNI.is_match("pr123"));
    assert!(UNI.is_match("abc1234"));
    assert!(!UNI.is_match("ABC123"));
    assert!(!UNI.is_match("abcd1"));
    assert!(!UNI.is_match("ab12345"));
  }

  #[test]
  fn range_reports_bounds() {
    let mut errors = ValidationErrors::new();
    errors.range("credits", 7u8, 1, Some(6));
    errors.range("credits", 3u8, 1, Some(6));
    errors.range("max_enrollment", 0u32, 1, None);
    assert_eq!(errors.errors().len(), 2);
    assert_eq!(errors.errors()[0].field, "credits");
    assert!(errors.errors()[1].message.contains("at least 1"));
  }

  #[test]
  fn display_lists_every_field() {
    let mut errors = ValidationErrors::single("a", "bad");
    errors.push("b", "worse");
    assert_eq!(errors.to_string(), "validation failed: a: bad; b: worse");
    assert!(errors.into_result().is_err());
    assert!(ValidationErrors::new().into_result().is_ok());
  }
}
