//! Promise — a tracked campaign commitment.
//!
//! A promise's status is authored outside this system. Nothing in the core
//! changes it; the store only reads it to decide whether updates may be
//! appended.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  politician::{Politician, PoliticianId},
  update::Update,
};

pub type PromiseId = String;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Progress status of a promise.
///
/// Serializes as its [`label`](Self::label), so unknown statuses read the same
/// as known ones in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PromiseStatus {
  NotStarted,
  InProgress,
  /// Terminal as far as the store is concerned: no further updates.
  Abandoned,
  /// A status literal outside the known set, kept verbatim.
  Other(String),
}

impl PromiseStatus {
  pub fn is_abandoned(&self) -> bool { matches!(self, Self::Abandoned) }

  /// Upper-case label used in messages and listings.
  pub fn label(&self) -> &str {
    match self {
      Self::NotStarted => "NOT_STARTED",
      Self::InProgress => "IN_PROGRESS",
      Self::Abandoned => "ABANDONED",
      Self::Other(raw) => raw,
    }
  }
}

impl From<String> for PromiseStatus {
  fn from(label: String) -> Self {
    match label.as_str() {
      "NOT_STARTED" => Self::NotStarted,
      "IN_PROGRESS" => Self::InProgress,
      "ABANDONED" => Self::Abandoned,
      _ => Self::Other(label),
    }
  }
}

impl From<PromiseStatus> for String {
  fn from(status: PromiseStatus) -> Self {
    match status {
      PromiseStatus::Other(raw) => raw,
      known => known.label().to_owned(),
    }
  }
}

// ─── Promise ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promise {
  pub id:             PromiseId,
  pub politician_id:  PoliticianId,
  pub description:    String,
  pub announced_date: NaiveDate,
  pub status:         PromiseStatus,
}

impl Promise {
  /// Whether the update gate is open for this promise.
  pub fn accepts_updates(&self) -> bool { !self.status.is_abandoned() }

  /// Fails with [`Error::PromiseAbandoned`] when updates are not allowed.
  pub fn ensure_accepts_updates(&self) -> Result<()> {
    if self.accepts_updates() {
      Ok(())
    } else {
      Err(Error::PromiseAbandoned(self.id.clone()))
    }
  }
}

/// Stable sort by announced date, oldest first. Equal dates keep their
/// relative order.
pub fn sort_by_announced_date(promises: &mut [Promise]) {
  promises.sort_by(|a, b| a.announced_date.cmp(&b.announced_date));
}

// ─── Detail view ─────────────────────────────────────────────────────────────

/// The joined read model behind the promise detail screen. Never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromiseDetail {
  pub promise:    Promise,
  /// `None` when the promise references a politician that does not exist.
  pub politician: Option<Politician>,
  /// Updates for the promise, in insertion order.
  pub updates:    Vec<Update>,
}
