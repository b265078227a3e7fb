//! Persons and their embedded addresses.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  address::PostalAddress,
  filter::{RecordFilter, exact, exact_display, exact_optional},
  patch::Patch,
  resource::{Resource, ResourceKind},
  validate::{EMAIL, UNI, Validate, ValidationErrors},
};

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:         Uuid,
  pub uni:        String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      Option<String>,
  pub birth_date: Option<NaiveDate>,
  /// Owned copies; not linked to records in the address store.
  pub addresses:  Vec<PostalAddress>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonCreate {
  pub uni:        String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  #[serde(default)]
  pub phone:      Option<String>,
  #[serde(default)]
  pub birth_date: Option<NaiveDate>,
  #[serde(default)]
  pub addresses:  Vec<PostalAddress>,
}

impl Validate for PersonCreate {
  fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.pattern("uni", &self.uni, &UNI);
    errors.pattern("email", &self.email, &EMAIL);
    errors.into_result()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonUpdate {
  #[serde(default)]
  pub uni:        Patch<String>,
  #[serde(default)]
  pub first_name: Patch<String>,
  #[serde(default)]
  pub last_name:  Patch<String>,
  #[serde(default)]
  pub email:      Patch<String>,
  #[serde(default)]
  pub phone:      Patch<String>,
  #[serde(default)]
  pub birth_date: Patch<NaiveDate>,
  /// Replaces the whole embedded list when present.
  #[serde(default)]
  pub addresses:  Patch<Vec<PostalAddress>>,
}

impl PersonUpdate {
  pub fn is_empty(&self) -> bool {
    self.uni.is_absent()
      && self.first_name.is_absent()
      && self.last_name.is_absent()
      && self.email.is_absent()
      && self.phone.is_absent()
      && self.birth_date.is_absent()
      && self.addresses.is_absent()
  }
}

impl Validate for PersonUpdate {
  fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.not_null("uni", &self.uni);
    errors.not_null("first_name", &self.first_name);
    errors.not_null("last_name", &self.last_name);
    errors.not_null("email", &self.email);
    errors.not_null("addresses", &self.addresses);
    if let Some(uni) = self.uni.as_set() {
      errors.pattern("uni", uni, &UNI);
    }
    if let Some(email) = self.email.as_set() {
      errors.pattern("email", email, &EMAIL);
    }
    errors.into_result()
  }
}

/// `GET /persons` query parameters.
///
/// `city` and `country` match when any embedded address has that value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonFilter {
  pub uni:        Option<String>,
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  /// `YYYY-MM-DD`.
  pub birth_date: Option<String>,
  pub city:       Option<String>,
  pub country:    Option<String>,
}

impl RecordFilter<Person> for PersonFilter {
  fn matches(&self, p: &Person) -> bool {
    exact(self.uni.as_deref(), p.uni.as_str())
      && exact(self.first_name.as_deref(), p.first_name.as_str())
      && exact(self.last_name.as_deref(), p.last_name.as_str())
      && exact(self.email.as_deref(), p.email.as_str())
      && exact_optional(self.phone.as_deref(), p.phone.as_deref())
      && exact_display(self.birth_date.as_deref(), p.birth_date.as_ref())
      && self
        .city
        .as_deref()
        .is_none_or(|w| p.addresses.iter().any(|a| a.city == w))
      && self
        .country
        .as_deref()
        .is_none_or(|w| p.addresses.iter().any(|a| a.country == w))
  }
}

impl Resource for Person {
  const KIND: ResourceKind = ResourceKind::Person;

  type Create = PersonCreate;
  type Update = PersonUpdate;
  type Filter = PersonFilter;

  fn id(&self) -> Uuid { self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

  fn from_create(input: PersonCreate, now: DateTime<Utc>) -> Self {
    Self {
      id:         Uuid::new_v4(),
      uni:        input.uni,
      first_name: input.first_name,
      last_name:  input.last_name,
      email:      input.email,
      phone:      input.phone,
      birth_date: input.birth_date,
      addresses:  input.addresses,
      created_at: now,
      updated_at: now,
    }
  }

  fn apply_update(&mut self, patch: PersonUpdate, now: DateTime<Utc>) {
    if patch.is_empty() {
      return;
    }
    patch.uni.apply(&mut self.uni);
    patch.first_name.apply(&mut self.first_name);
    patch.last_name.apply(&mut self.last_name);
    patch.email.apply(&mut self.email);
    patch.phone.apply_optional(&mut self.phone);
    patch.birth_date.apply_optional(&mut self.birth_date);
    patch.addresses.apply(&mut self.addresses);
    self.updated_at = now;
  }
}
