//! Error type for `pledge-store-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] pledge_core::Error),

  #[error("cannot access {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("date parse error: {0}")]
  DateParse(String),
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Core(e) if e.is_not_found())
  }

  pub fn is_invalid_state(&self) -> bool {
    matches!(self, Self::Core(e) if e.is_invalid_state())
  }

  /// The backing file could not be read, written or decoded.
  pub fn is_storage(&self) -> bool {
    matches!(self, Self::Io { .. } | Self::Json(_) | Self::DateParse(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
