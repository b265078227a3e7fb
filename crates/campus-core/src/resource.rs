//! The [`Resource`] trait tying each record type to its payload shapes.

use chrono::{DateTime, Utc};
use strum::Display;
use uuid::Uuid;

use crate::{filter::RecordFilter, validate::Validate};

/// The four record types held by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ResourceKind {
  Address,
  Person,
  Course,
  Enrollment,
}

/// A stored record type together with its create, update, and filter shapes.
pub trait Resource: Clone + Send + Sync + 'static {
  const KIND: ResourceKind;

  /// Full creation payload. Also the body of a full replace.
  type Create: Validate + Send;
  /// Partial-update payload; every field is optional.
  type Update: Validate + Send;
  /// List filter; `Default` matches every record.
  type Filter: RecordFilter<Self> + Default + Send + Sync;

  fn id(&self) -> Uuid;

  fn created_at(&self) -> DateTime<Utc>;

  fn updated_at(&self) -> DateTime<Utc>;

  /// Build a new record. Server-generated identifiers are minted here.
  fn from_create(input: Self::Create, now: DateTime<Utc>) -> Self;

  /// Merge the supplied fields into `self`. `updated_at` moves to `now` only
  /// when the patch sets at least one field.
  fn apply_update(&mut self, patch: Self::Update, now: DateTime<Utc>);
}

/// Resources that support full replacement and deletion.
pub trait Replaceable: Resource {
  /// Swap every field for those in `input`, keeping `id` and `created_at`
  /// and setting `updated_at` to `now`.
  fn replace_with(&mut self, input: Self::Create, now: DateTime<Utc>);
}
