//! Error type for `campus-store`.

use campus_core::storage::StorageScope;
use thiserror::Error;

/// Failures the store can surface. A missing place id is never one of them:
/// lookups return `None` and mutations on unknown ids do nothing.
#[derive(Debug, Error)]
pub enum Error {
  #[error("{scope} storage error: {source}")]
  Storage {
    scope:  StorageScope,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn storage<E>(scope: StorageScope, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage { scope, source: Box::new(source) }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
