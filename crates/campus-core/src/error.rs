//! Error types for `campus-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::{resource::ResourceKind, validate::ValidationErrors};

#[derive(Debug, Error)]
pub enum Error {
  #[error("{kind} not found: {id}")]
  NotFound { kind: ResourceKind, id: Uuid },

  #[error("{kind} with id {id} already exists")]
  DuplicateKey { kind: ResourceKind, id: Uuid },

  #[error(transparent)]
  Validation(#[from] ValidationErrors),

  /// Failure inside a storage backend that is not one of the above.
  #[error("backend error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn not_found(kind: ResourceKind, id: Uuid) -> Self {
    Self::NotFound { kind, id }
  }

  pub fn duplicate(kind: ResourceKind, id: Uuid) -> Self {
    Self::DuplicateKey { kind, id }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
