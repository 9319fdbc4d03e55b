//! Error types for `campus-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

/// A user-input problem caught before anything reaches the store. The
/// display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Please fill in all required fields")]
  MissingRequiredField(&'static str),

  #[error("Please select a rating")]
  MissingRating,

  #[error("Rating must be between 1 and 5, got {0}")]
  RatingOutOfRange(u8),

  #[error("Please write a comment")]
  EmptyComment,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
