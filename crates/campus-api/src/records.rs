//! Handlers shared by every record route.
//!
//! | Method   | Path              | Notes |
//! |----------|-------------------|-------|
//! | `POST`   | `/{records}`      | Body: create payload; returns 201 + stored record |
//! | `GET`    | `/{records}`      | Query: resource filter; returns every match |
//! | `GET`    | `/{records}/{id}` | 404 if not found |
//! | `PATCH`  | `/{records}/{id}` | Body: partial update; omitted fields are untouched |
//! | `PUT`    | `/{records}/{id}` | Body: create payload; courses and enrollments only |
//! | `DELETE` | `/{records}/{id}` | Courses and enrollments only |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use campus_core::{
  Replaceable, Resource,
  store::{LifecycleStore, RecordStore},
};
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::{
  error::ApiError,
  extract::{ListQuery, RecordId, ValidJson},
};

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /{records}` — returns 201 + the stored record.
pub async fn create<R, S>(
  State(store): State<Arc<S>>,
  ValidJson(body): ValidJson<R::Create>,
) -> Result<impl IntoResponse, ApiError>
where
  R: Resource + Serialize,
  R::Create: DeserializeOwned,
  S: RecordStore<R>,
{
  let record = store.insert(R::from_create(body, Utc::now())).await?;
  tracing::info!(kind = %R::KIND, id = %record.id(), "created record");
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /{records}[?field=value...]`
pub async fn list<R, S>(
  State(store): State<Arc<S>>,
  ListQuery(filter): ListQuery<R::Filter>,
) -> Result<Json<Vec<R>>, ApiError>
where
  R: Resource + Serialize,
  R::Filter: DeserializeOwned,
  S: RecordStore<R>,
{
  let records = store.list(&filter).await?;
  Ok(Json(records))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /{records}/{id}`
pub async fn get_one<R, S>(
  State(store): State<Arc<S>>,
  RecordId(id): RecordId,
) -> Result<Json<R>, ApiError>
where
  R: Resource + Serialize,
  S: RecordStore<R>,
{
  Ok(Json(store.get(id).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /{records}/{id}` — merges the supplied fields.
pub async fn update<R, S>(
  State(store): State<Arc<S>>,
  RecordId(id): RecordId,
  ValidJson(patch): ValidJson<R::Update>,
) -> Result<Json<R>, ApiError>
where
  R: Resource + Serialize,
  R::Update: DeserializeOwned,
  S: RecordStore<R>,
{
  Ok(Json(store.update(id, patch).await?))
}

// ─── Replace ──────────────────────────────────────────────────────────────────

/// `PUT /{records}/{id}` — swaps in a full body, keeping `id` and
/// `created_at`.
pub async fn replace<R, S>(
  State(store): State<Arc<S>>,
  RecordId(id): RecordId,
  ValidJson(body): ValidJson<R::Create>,
) -> Result<Json<R>, ApiError>
where
  R: Replaceable + Serialize,
  R::Create: DeserializeOwned,
  S: LifecycleStore<R>,
{
  Ok(Json(store.replace(id, body).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /{records}/{id}` — body: `{"message": "Course deleted successfully"}`.
pub async fn delete<R, S>(
  State(store): State<Arc<S>>,
  RecordId(id): RecordId,
) -> Result<Json<Value>, ApiError>
where
  R: Replaceable,
  S: LifecycleStore<R>,
{
  store.delete(id).await?;
  tracing::info!(kind = %R::KIND, %id, "deleted record");
  Ok(Json(json!({
    "message": format!("{} deleted successfully", R::KIND),
  })))
}
