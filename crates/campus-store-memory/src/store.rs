//! [`MemoryStore`] — the in-memory implementation of [`RecordStore`].

use campus_core::{
  Result,
  address::Address,
  course::Course,
  enrollment::Enrollment,
  person::Person,
  store::{LifecycleStore, RecordStore},
};
use uuid::Uuid;

use crate::table::Table;

// ─── Store ───────────────────────────────────────────────────────────────────

/// Process-local storage for every campus resource type.
///
/// Construct one at startup and share it behind an `Arc`; dropping it
/// discards all records.
#[derive(Default)]
pub struct MemoryStore {
  addresses:   Table<Address>,
  persons:     Table<Person>,
  courses:     Table<Course>,
  enrollments: Table<Enrollment>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }
}

// ─── Trait impls ─────────────────────────────────────────────────────────────

macro_rules! record_store {
  ($record:ty, $table:ident) => {
    impl RecordStore<$record> for MemoryStore {
      async fn insert(&self, record: $record) -> Result<$record> {
        self.$table.insert(record).await
      }

      async fn get(&self, id: Uuid) -> Result<$record> {
        self.$table.get(id).await
      }

      async fn list(
        &self,
        filter: &<$record as campus_core::Resource>::Filter,
      ) -> Result<Vec<$record>> {
        self.$table.list(filter).await
      }

      async fn update(
        &self,
        id: Uuid,
        patch: <$record as campus_core::Resource>::Update,
      ) -> Result<$record> {
        self.$table.update(id, patch).await
      }

      async fn count(&self) -> Result<usize> { self.$table.count().await }
    }
  };
}

macro_rules! lifecycle_store {
  ($record:ty, $table:ident) => {
    impl LifecycleStore<$record> for MemoryStore {
      async fn replace(
        &self,
        id: Uuid,
        input: <$record as campus_core::Resource>::Create,
      ) -> Result<$record> {
        self.$table.replace(id, input).await
      }

      async fn delete(&self, id: Uuid) -> Result<$record> {
        self.$table.delete(id).await
      }
    }
  };
}

record_store!(Address, addresses);
record_store!(Person, persons);
record_store!(Course, courses);
record_store!(Enrollment, enrollments);

lifecycle_store!(Course, courses);
lifecycle_store!(Enrollment, enrollments);
