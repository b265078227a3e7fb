//! Courses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  filter::{RecordFilter, contains_ignore_case, exact},
  patch::Patch,
  resource::{Replaceable, Resource, ResourceKind},
  validate::{COURSE_ID, UNI, Validate, ValidationErrors},
};

pub const MIN_CREDITS: u8 = 1;
pub const MAX_CREDITS: u8 = 6;

/// A stored course. `id` is the opaque record key; `course_id` is the
/// catalogue code such as `CS1234`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
  pub id:             Uuid,
  pub course_id:      String,
  pub name:           String,
  pub department:     String,
  pub credits:        u8,
  pub description:    Option<String>,
  pub instructor_uni: String,
  /// Free-form label, e.g. "Fall 2024".
  pub semester:       String,
  pub max_enrollment: Option<u32>,
  pub created_at:     DateTime<Utc>,
  pub updated_at:     DateTime<Utc>,
}

/// Creation and full-replace payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseCreate {
  pub course_id:      String,
  pub name:           String,
  pub department:     String,
  pub credits:        u8,
  #[serde(default)]
  pub description:    Option<String>,
  pub instructor_uni: String,
  pub semester:       String,
  #[serde(default)]
  pub max_enrollment: Option<u32>,
}

impl Validate for CourseCreate {
  fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.pattern("course_id", &self.course_id, &COURSE_ID);
    errors.range("credits", self.credits, MIN_CREDITS, Some(MAX_CREDITS));
    errors.pattern("instructor_uni", &self.instructor_uni, &UNI);
    if let Some(max) = self.max_enrollment {
      errors.range("max_enrollment", max, 1, None);
    }
    errors.into_result()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseUpdate {
  #[serde(default)]
  pub course_id:      Patch<String>,
  #[serde(default)]
  pub name:           Patch<String>,
  #[serde(default)]
  pub department:     Patch<String>,
  #[serde(default)]
  pub credits:        Patch<u8>,
  #[serde(default)]
  pub description:    Patch<String>,
  #[serde(default)]
  pub instructor_uni: Patch<String>,
  #[serde(default)]
  pub semester:       Patch<String>,
  #[serde(default)]
  pub max_enrollment: Patch<u32>,
}

impl CourseUpdate {
  pub fn is_empty(&self) -> bool {
    self.course_id.is_absent()
      && self.name.is_absent()
      && self.department.is_absent()
      && self.credits.is_absent()
      && self.description.is_absent()
      && self.instructor_uni.is_absent()
      && self.semester.is_absent()
      && self.max_enrollment.is_absent()
  }
}

impl Validate for CourseUpdate {
  fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.not_null("course_id", &self.course_id);
    errors.not_null("name", &self.name);
    errors.not_null("department", &self.department);
    errors.not_null("credits", &self.credits);
    errors.not_null("instructor_uni", &self.instructor_uni);
    errors.not_null("semester", &self.semester);
    if let Some(course_id) = self.course_id.as_set() {
      errors.pattern("course_id", course_id, &COURSE_ID);
    }
    if let Some(&credits) = self.credits.as_set() {
      errors.range("credits", credits, MIN_CREDITS, Some(MAX_CREDITS));
    }
    if let Some(uni) = self.instructor_uni.as_set() {
      errors.pattern("instructor_uni", uni, &UNI);
    }
    if let Some(&max) = self.max_enrollment.as_set() {
      errors.range("max_enrollment", max, 1, None);
    }
    errors.into_result()
  }
}

/// `GET /courses` query parameters. `name` is a case-insensitive substring
/// search; everything else is exact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
  pub course_id:      Option<String>,
  pub name:           Option<String>,
  pub department:     Option<String>,
  pub instructor_uni: Option<String>,
  pub semester:       Option<String>,
  pub credits:        Option<u8>,
}

impl RecordFilter<Course> for CourseFilter {
  fn matches(&self, c: &Course) -> bool {
    exact(self.course_id.as_deref(), c.course_id.as_str())
      && contains_ignore_case(self.name.as_deref(), &c.name)
      && exact(self.department.as_deref(), c.department.as_str())
      && exact(self.instructor_uni.as_deref(), c.instructor_uni.as_str())
      && exact(self.semester.as_deref(), c.semester.as_str())
      && exact(self.credits.as_ref(), &c.credits)
  }
}

impl Resource for Course {
  const KIND: ResourceKind = ResourceKind::Course;

  type Create = CourseCreate;
  type Update = CourseUpdate;
  type Filter = CourseFilter;

  fn id(&self) -> Uuid { self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

  fn from_create(input: CourseCreate, now: DateTime<Utc>) -> Self {
    Self {
      id:             Uuid::new_v4(),
      course_id:      input.course_id,
      name:           input.name,
      department:     input.department,
      credits:        input.credits,
      description:    input.description,
      instructor_uni: input.instructor_uni,
      semester:       input.semester,
      max_enrollment: input.max_enrollment,
      created_at:     now,
      updated_at:     now,
    }
  }

  fn apply_update(&mut self, patch: CourseUpdate, now: DateTime<Utc>) {
    if patch.is_empty() {
      return;
    }
    patch.course_id.apply(&mut self.course_id);
    patch.name.apply(&mut self.name);
    patch.department.apply(&mut self.department);
    patch.credits.apply(&mut self.credits);
    patch.description.apply_optional(&mut self.description);
    patch.instructor_uni.apply(&mut self.instructor_uni);
    patch.semester.apply(&mut self.semester);
    patch.max_enrollment.apply_optional(&mut self.max_enrollment);
    self.updated_at = now;
  }
}

impl Replaceable for Course {
  fn replace_with(&mut self, input: CourseCreate, now: DateTime<Utc>) {
    let Self { id, created_at, .. } = *self;
    *self = Self::from_create(input, now);
    self.id = id;
    self.created_at = created_at;
  }
}

#[cfg(test)]
mod tests {
  use chrono::Duration;
  use serde_json::json;

  use super::*;

  fn create(course_id: &str) -> CourseCreate {
    serde_json::from_value(json!({
      "course_id": course_id,
      "name": "Introduction to Computer Science",
      "department": "Computer Science",
      "credits": 3,
      "instructor_uni": "pr123",
      "semester": "Fall 2024",
      "max_enrollment": 30,
    }))
    .unwrap()
  }

  #[test]
  fn lowercase_course_id_is_rejected() {
    let errors = create("cs123").validate().unwrap_err();
    assert_eq!(errors.errors()[0].field, "course_id");
    assert!(create("CS1234").validate().is_ok());
  }

  #[test]
  fn credits_and_max_enrollment_bounds() {
    let mut input = create("CS1234");
    input.credits = 7;
    input.max_enrollment = Some(0);
    let errors = input.validate().unwrap_err();
    let fields: Vec<_> = errors.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["credits", "max_enrollment"]);
  }

  #[test]
  fn replace_keeps_id_and_created_at() {
    let t0 = Utc::now();
    let mut course = Course::from_create(create("CS1234"), t0);
    let id = course.id;

    let mut next = create("MATH1001");
    next.name = "Calculus I".into();
    next.max_enrollment = None;
    let t1 = t0 + Duration::seconds(5);
    course.replace_with(next, t1);

    assert_eq!(course.id, id);
    assert_eq!(course.created_at, t0);
    assert_eq!(course.updated_at, t1);
    assert_eq!(course.course_id, "MATH1001");
    assert_eq!(course.max_enrollment, None);
  }

  #[test]
  fn empty_patch_keeps_updated_at() {
    let t0 = Utc::now();
    let mut course = Course::from_create(create("CS1234"), t0);
    let before = course.clone();
    course.apply_update(CourseUpdate::default(), t0 + Duration::seconds(1));
    assert_eq!(course, before);
  }

  #[test]
  fn name_filter_is_case_insensitive_substring() {
    let course = Course::from_create(create("CS1234"), Utc::now());
    let filter = CourseFilter {
      name: Some("intro".into()),
      ..Default::default()
    };
    assert!(filter.matches(&course));

    let by_dept = CourseFilter {
      department: Some("computer science".into()),
      ..Default::default()
    };
    assert!(!by_dept.matches(&course));
  }
}
