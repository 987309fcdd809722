//! Update — an append-only progress note attached to a promise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::promise::PromiseId;

pub type UpdateId = i64;

/// A progress note. Updates are never edited or deleted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
  pub id:         UpdateId,
  pub promise_id: PromiseId,
  /// Local calendar date on which the update was recorded.
  pub date:       NaiveDate,
  pub detail:     String,
}
