//! Politician — the author of one or more promises.

use serde::{Deserialize, Serialize};

pub type PoliticianId = i64;

/// A politician. Never modified once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Politician {
  pub id:    PoliticianId,
  pub name:  String,
  pub party: String,
}
