//! Error types for `pledge-core`.

use thiserror::Error;

use crate::promise::PromiseId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("promise not found: {0}")]
  PromiseNotFound(PromiseId),

  /// Updates are refused once a promise is marked abandoned.
  #[error("cannot update: status is ABANDONED")]
  PromiseAbandoned(PromiseId),
}

impl Error {
  /// The referenced record does not exist.
  pub fn is_not_found(&self) -> bool { matches!(self, Self::PromiseNotFound(_)) }

  /// The mutation was blocked by a business rule.
  pub fn is_invalid_state(&self) -> bool {
    matches!(self, Self::PromiseAbandoned(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
