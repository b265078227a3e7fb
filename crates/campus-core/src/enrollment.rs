//! Enrollments of students in courses.
//!
//! `course_id` is a catalogue code and is not checked against the course
//! store; an enrollment may name a course that does not exist.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::{
  filter::{RecordFilter, exact, exact_display, exact_optional},
  patch::Patch,
  resource::{Replaceable, Resource, ResourceKind},
  validate::{COURSE_ID, UNI, Validate, ValidationErrors},
};

/// Where an enrollment stands. Any status may move to any other.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EnrollmentStatus {
  #[default]
  Active,
  Dropped,
  Completed,
  Withdrawn,
}

/// A stored enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
  pub id:              Uuid,
  pub student_uni:     String,
  pub course_id:       String,
  pub enrollment_date: NaiveDate,
  pub status:          EnrollmentStatus,
  /// Letter grade such as `A-` or `P`; not checked against a scale.
  pub grade:           Option<String>,
  pub credits_earned:  Option<u32>,
  pub created_at:      DateTime<Utc>,
  pub updated_at:      DateTime<Utc>,
}

/// Creation and full-replace payload.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentCreate {
  pub student_uni:     String,
  pub course_id:       String,
  pub enrollment_date: NaiveDate,
  #[serde(default)]
  pub status:          EnrollmentStatus,
  #[serde(default)]
  pub grade:           Option<String>,
  #[serde(default)]
  pub credits_earned:  Option<u32>,
}

impl Validate for EnrollmentCreate {
  fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.pattern("student_uni", &self.student_uni, &UNI);
    errors.pattern("course_id", &self.course_id, &COURSE_ID);
    errors.into_result()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentUpdate {
  #[serde(default)]
  pub student_uni:     Patch<String>,
  #[serde(default)]
  pub course_id:       Patch<String>,
  #[serde(default)]
  pub enrollment_date: Patch<NaiveDate>,
  #[serde(default)]
  pub status:          Patch<EnrollmentStatus>,
  #[serde(default)]
  pub grade:           Patch<String>,
  #[serde(default)]
  pub credits_earned:  Patch<u32>,
}

impl EnrollmentUpdate {
  pub fn is_empty(&self) -> bool {
    self.student_uni.is_absent()
      && self.course_id.is_absent()
      && self.enrollment_date.is_absent()
      && self.status.is_absent()
      && self.grade.is_absent()
      && self.credits_earned.is_absent()
  }
}

impl Validate for EnrollmentUpdate {
  fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.not_null("student_uni", &self.student_uni);
    errors.not_null("course_id", &self.course_id);
    errors.not_null("enrollment_date", &self.enrollment_date);
    errors.not_null("status", &self.status);
    if let Some(uni) = self.student_uni.as_set() {
      errors.pattern("student_uni", uni, &UNI);
    }
    if let Some(course_id) = self.course_id.as_set() {
      errors.pattern("course_id", course_id, &COURSE_ID);
    }
    errors.into_result()
  }
}

/// `GET /enrollments` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentFilter {
  pub student_uni:     Option<String>,
  pub course_id:       Option<String>,
  pub status:          Option<EnrollmentStatus>,
  /// `YYYY-MM-DD`.
  pub enrollment_date: Option<String>,
  pub grade:           Option<String>,
}

impl RecordFilter<Enrollment> for EnrollmentFilter {
  fn matches(&self, e: &Enrollment) -> bool {
    exact(self.student_uni.as_deref(), e.student_uni.as_str())
      && exact(self.course_id.as_deref(), e.course_id.as_str())
      && exact(self.status.as_ref(), &e.status)
      && exact_display(self.enrollment_date.as_deref(), Some(&e.enrollment_date))
      && exact_optional(self.grade.as_deref(), e.grade.as_deref())
  }
}

impl Resource for Enrollment {
  const KIND: ResourceKind = ResourceKind::Enrollment;

  type Create = EnrollmentCreate;
  type Update = EnrollmentUpdate;
  type Filter = EnrollmentFilter;

  fn id(&self) -> Uuid { self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

  fn from_create(input: EnrollmentCreate, now: DateTime<Utc>) -> Self {
    Self {
      id:              Uuid::new_v4(),
      student_uni:     input.student_uni,
      course_id:       input.course_id,
      enrollment_date: input.enrollment_date,
      status:          input.status,
      grade:           input.grade,
      credits_earned:  input.credits_earned,
      created_at:      now,
      updated_at:      now,
    }
  }

  fn apply_update(&mut self, patch: EnrollmentUpdate, now: DateTime<Utc>) {
    if patch.is_empty() {
      return;
    }
    patch.student_uni.apply(&mut self.student_uni);
    patch.course_id.apply(&mut self.course_id);
    patch.enrollment_date.apply(&mut self.enrollment_date);
    patch.status.apply(&mut self.status);
    patch.grade.apply_optional(&mut self.grade);
    patch.credits_earned.apply_optional(&mut self.credits_earned);
    self.updated_at = now;
  }
}

impl Replaceable for Enrollment {
  fn replace_with(&mut self, input: EnrollmentCreate, now: DateTime<Utc>) {
    let Self { id, created_at, .. } = *self;
    *self = Self::from_create(input, now);
    self.id = id;
    self.created_at = created_at;
  }
}
