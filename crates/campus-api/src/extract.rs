//! Extractors that reject malformed input with [`ApiError::Validation`].

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, Path, Query, Request},
  http::request::Parts,
};
use campus_core::validate::{Validate, ValidationErrors};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;

/// A JSON body that has been deserialised and passed [`Validate`].
///
/// Shape errors (wrong type, missing field, out-of-range number) name the
/// offending field.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
  S: Send + Sync,
  T: DeserializeOwned + Validate + Send,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    // Syntax and content-type failures surface here as `body` errors.
    let Json(raw) = Json::<Value>::from_request(req, state).await?;
    let value: T = serde_path_to_error::deserialize(raw).map_err(|e| {
      let field = error_field(e.path(), &e.inner().to_string());
      ValidationErrors::single(field, e.into_inner().to_string())
    })?;
    value.validate()?;
    Ok(Self(value))
  }
}

/// The field a shape error belongs to, e.g. `credits` or `addresses[0].city`.
///
/// A missing field is reported against its parent, so its name is recovered
/// from the message. Errors with no location fall back to `body`.
fn error_field(path: &serde_path_to_error::Path, message: &str) -> String {
  let missing = message
    .strip_prefix("missing field `")
    .and_then(|rest| rest.split_once('`'))
    .map(|(name, _)| name);
  let path = path.to_string();
  match (path.as_str(), missing) {
    (".", Some(name)) => name.to_string(),
    (".", None) => "body".to_string(),
    (parent, Some(name)) => format!("{parent}.{name}"),
    (parent, None) => parent.to_string(),
  }
}

/// Query-string filter parameters.
#[derive(Debug)]
pub struct ListQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ListQuery<T>
where
  S: Send + Sync,
  T: DeserializeOwned + Send,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
    Ok(Self(value))
  }
}

/// The `{id}` path segment of a record route.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub Uuid);

impl<S> FromRequestParts<S> for RecordId
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Path(id) = Path::<Uuid>::from_request_parts(parts, state).await?;
    Ok(Self(id))
  }
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;
  use serde_json::json;

  use super::*;

  #[derive(Debug, Deserialize)]
  #[allow(dead_code)]
  struct Inner {
    city: String,
  }

  #[derive(Debug, Deserialize)]
  #[allow(dead_code)]
  struct Outer {
    credits: u8,
    #[serde(default)]
    places:  Vec<Inner>,
  }

  fn field_for(value: Value) -> String {
    let err = serde_path_to_error::deserialize::<_, Outer>(value).unwrap_err();
    error_field(err.path(), &err.inner().to_string())
  }

  #[test]
  fn names_the_failing_field() {
    assert_eq!(field_for(json!({ "credits": 300 })), "credits");
    assert_eq!(field_for(json!({ "credits": "three" })), "credits");
    assert_eq!(field_for(json!({})), "credits");
  }

  #[test]
  fn names_nested_fields_with_indices() {
    let missing = json!({ "credits": 3, "places": [{ "city": "Rome" }, {}] });
    assert_eq!(field_for(missing), "places[1].city");
    let wrong = json!({ "credits": 3, "places": [{ "city": 5 }] });
    assert_eq!(field_for(wrong), "places[0].city");
  }

  #[test]
  fn unlocated_errors_fall_back_to_body() {
    assert_eq!(field_for(json!("credits")), "body");
  }
}
