//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `campus-store-memory`).
//! `campus-api` depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  Result,
  address::Address,
  course::Course,
  enrollment::Enrollment,
  person::Person,
  resource::{Replaceable, Resource},
};

/// Keyed storage for one resource type.
///
/// Each call is atomic with respect to every other call on the same resource
/// type. Misses are reported as [`Error::NotFound`](crate::Error::NotFound),
/// never as an empty record.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RecordStore<R: Resource>: Send + Sync {
  /// Store a new record. Fails with
  /// [`Error::DuplicateKey`](crate::Error::DuplicateKey) if its id is taken.
  fn insert(&self, record: R) -> impl Future<Output = Result<R>> + Send + '_;

  fn get(&self, id: Uuid) -> impl Future<Output = Result<R>> + Send + '_;

  /// Every record matching `filter`, in insertion order.
  fn list<'a>(
    &'a self,
    filter: &'a R::Filter,
  ) -> impl Future<Output = Result<Vec<R>>> + Send + 'a;

  /// Merge a partial update into an existing record.
  fn update(
    &self,
    id: Uuid,
    patch: R::Update,
  ) -> impl Future<Output = Result<R>> + Send + '_;

  fn count(&self) -> impl Future<Output = Result<usize>> + Send + '_;
}

/// Replace and delete, for resources with a full lifecycle.
pub trait LifecycleStore<R: Replaceable>: RecordStore<R> {
  /// Swap in a new body, keeping `id` and `created_at`.
  fn replace(
    &self,
    id: Uuid,
    input: R::Create,
  ) -> impl Future<Output = Result<R>> + Send + '_;

  /// Remove a record and return it.
  fn delete(&self, id: Uuid) -> impl Future<Output = Result<R>> + Send + '_;
}

/// A backend holding every resource type the service exposes.
pub trait CampusStore:
  RecordStore<Address>
  + RecordStore<Person>
  + LifecycleStore<Course>
  + LifecycleStore<Enrollment>
  + 'static
{
}

impl<S> CampusStore for S where
  S: RecordStore<Address>
    + RecordStore<Person>
    + LifecycleStore<Course>
    + LifecycleStore<Enrollment>
    + 'static
{
}
