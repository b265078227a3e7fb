//! A single keyed table.

use std::collections::HashMap;

use campus_core::{
  Error, Replaceable, Resource, Result, filter::RecordFilter,
};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Records of one type, keyed by id, remembering insertion order.
pub(crate) struct Table<R> {
  rows: RwLock<Rows<R>>,
}

struct Rows<R> {
  by_id: HashMap<Uuid, R>,
  order: Vec<Uuid>,
}

impl<R> Default for Table<R> {
  fn default() -> Self {
    Self {
      rows: RwLock::new(Rows {
        by_id: HashMap::new(),
        order: Vec::new(),
      }),
    }
  }
}

/// The current time, never earlier than `floor`.
fn now_after(floor: DateTime<Utc>) -> DateTime<Utc> { Utc::now().max(floor) }

impl<R: Resource> Table<R> {
  pub(crate) async fn insert(&self, record: R) -> Result<R> {
    let id = record.id();
    let mut rows = self.rows.write().await;
    if rows.by_id.contains_key(&id) {
      tracing::debug!(kind = %R::KIND, %id, "rejected duplicate id");
      return Err(Error::duplicate(R::KIND, id));
    }
    rows.order.push(id);
    rows.by_id.insert(id, record.clone());
    tracing::debug!(kind = %R::KIND, %id, "inserted record");
    Ok(record)
  }

  pub(crate) async fn get(&self, id: Uuid) -> Result<R> {
    let rows = self.rows.read().await;
    rows
      .by_id
      .get(&id)
      .cloned()
      .ok_or_else(|| Error::not_found(R::KIND, id))
  }

  pub(crate) async fn list(&self, filter: &R::Filter) -> Result<Vec<R>> {
    let rows = self.rows.read().await;
    Ok(
      rows
        .order
        .iter()
        .filter_map(|id| rows.by_id.get(id))
        .filter(|r| filter.matches(r))
        .cloned()
        .collect(),
    )
  }

  pub(crate) async fn update(&self, id: Uuid, patch: R::Update) -> Result<R> {
    let mut rows = self.rows.write().await;
    let record = rows
      .by_id
      .get_mut(&id)
      .ok_or_else(|| Error::not_found(R::KIND, id))?;
    record.apply_update(patch, now_after(record.updated_at()));
    tracing::debug!(kind = %R::KIND, %id, "updated record");
    Ok(record.clone())
  }

  pub(crate) async fn count(&self) -> Result<usize> {
    Ok(self.rows.read().await.by_id.len())
  }
}

impl<R: Replaceable> Table<R> {
  pub(crate) async fn replace(&self, id: Uuid, input: R::Create) -> Result<R> {
    let mut rows = self.rows.write().await;
    let record = rows
      .by_id
      .get_mut(&id)
      .ok_or_else(|| Error::not_found(R::KIND, id))?;
    record.replace_with(input, now_after(record.updated_at()));
    tracing::debug!(kind = %R::KIND, %id, "replaced record");
    Ok(record.clone())
  }

  pub(crate) async fn delete(&self, id: Uuid) -> Result<R> {
    let mut rows = self.rows.write().await;
    let record = rows
      .by_id
      .remove(&id)
      .ok_or_else(|| Error::not_found(R::KIND, id))?;
    rows.order.retain(|k| *k != id);
    tracing::debug!(kind = %R::KIND, %id, "deleted record");
    Ok(record)
  }
}
