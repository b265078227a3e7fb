//! Postal addresses, stored on their own and embedded in persons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  filter::{RecordFilter, exact, exact_optional},
  patch::Patch,
  resource::{Resource, ResourceKind},
  validate::{Validate, ValidationErrors},
};

/// The postal fields of an address, with its identifier.
///
/// This is both the creation payload for `/addresses` and the shape of each
/// entry in [`Person::addresses`](crate::person::Person::addresses). The
/// identifier is chosen by the client; if it is left out a fresh one is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
  #[serde(default = "Uuid::new_v4")]
  pub id:          Uuid,
  pub street:      String,
  pub city:        String,
  /// State, province, or region.
  #[serde(default)]
  pub state:       Option<String>,
  #[serde(default)]
  pub postal_code: Option<String>,
  pub country:     String,
}

pub type AddressCreate = PostalAddress;

impl Validate for PostalAddress {
  fn validate(&self) -> Result<(), ValidationErrors> { Ok(()) }
}

/// A stored address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  pub id:          Uuid,
  pub street:      String,
  pub city:        String,
  pub state:       Option<String>,
  pub postal_code: Option<String>,
  pub country:     String,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

/// Partial update for an [`Address`]. The identifier cannot be changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressUpdate {
  #[serde(default)]
  pub street:      Patch<String>,
  #[serde(default)]
  pub city:        Patch<String>,
  #[serde(default)]
  pub state:       Patch<String>,
  #[serde(default)]
  pub postal_code: Patch<String>,
  #[serde(default)]
  pub country:     Patch<String>,
}

impl AddressUpdate {
  pub fn is_empty(&self) -> bool {
    self.street.is_absent()
      && self.city.is_absent()
      && self.state.is_absent()
      && self.postal_code.is_absent()
      && self.country.is_absent()
  }
}

impl Validate for AddressUpdate {
  fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.not_null("street", &self.street);
    errors.not_null("city", &self.city);
    errors.not_null("country", &self.country);
    errors.into_result()
  }
}

/// `GET /addresses` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressFilter {
  pub street:      Option<String>,
  pub city:        Option<String>,
  pub state:       Option<String>,
  pub postal_code: Option<String>,
  pub country:     Option<String>,
}

impl RecordFilter<Address> for AddressFilter {
  fn matches(&self, a: &Address) -> bool {
    exact(self.street.as_deref(), a.street.as_str())
      && exact(self.city.as_deref(), a.city.as_str())
      && exact_optional(self.state.as_deref(), a.state.as_deref())
      && exact_optional(self.postal_code.as_deref(), a.postal_code.as_deref())
      && exact(self.country.as_deref(), a.country.as_str())
  }
}

impl Resource for Address {
  const KIND: ResourceKind = ResourceKind::Address;

  type Create = AddressCreate;
  type Update = AddressUpdate;
  type Filter = AddressFilter;

  fn id(&self) -> Uuid { self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

  fn from_create(input: AddressCreate, now: DateTime<Utc>) -> Self {
    Self {
      id:          input.id,
      street:      input.street,
      city:        input.city,
      state:       input.state,
      postal_code: input.postal_code,
      country:     input.country,
      created_at:  now,
      updated_at:  now,
    }
  }

  fn apply_update(&mut self, patch: AddressUpdate, now: DateTime<Utc>) {
    if patch.is_empty() {
      return;
    }
    patch.street.apply(&mut self.street);
    patch.city.apply(&mut self.city);
    patch.state.apply_optional(&mut self.state);
    patch.postal_code.apply_optional(&mut self.postal_code);
    patch.country.apply(&mut self.country);
    self.updated_at = now;
  }
}
