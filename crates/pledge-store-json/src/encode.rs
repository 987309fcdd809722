//! Encoding and decoding between domain types and the on-disk JSON shape.
//!
//! Field names follow the established file format (`pol_id`, `desc`, `u_id`,
//! `p_id`) so existing data files stay readable. Dates are `YYYY-MM-DD`
//! strings; statuses are the literal Thai labels. Keys this crate does not
//! model are carried along in `extra` and written back unchanged.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use pledge_core::{
  politician::{Politician, PoliticianId},
  promise::{Promise, PromiseStatus},
  update::{Update, UpdateId},
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Unmodelled keys of a JSON object.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// A decoded record together with the keys it was stored with but that the
/// domain type has no field for.
#[derive(Debug, Clone)]
pub struct Stored<T> {
  pub record: T,
  pub extra:  Extra,
}

impl<T> Stored<T> {
  pub fn new(record: T) -> Self { Self { record, extra: Extra::new() } }
}

// ─── Dates ───────────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

/// Only exact, zero-padded `YYYY-MM-DD` is accepted, so that re-encoding
/// reproduces the stored text and date order matches string order.
pub fn decode_date(s: &str) -> Result<NaiveDate> {
  let well_formed = s.len() == 10
    && s.bytes().enumerate().all(|(i, b)| match i {
      4 | 7 => b == b'-',
      _ => b.is_ascii_digit(),
    });
  if !well_formed {
    return Err(Error::DateParse(format!("{s:?}: expected YYYY-MM-DD")));
  }
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── PromiseStatus ───────────────────────────────────────────────────────────

pub const STATUS_NOT_STARTED: &str = "ยังไม่เริ่ม";
pub const STATUS_IN_PROGRESS: &str = "กำลังดำเนินการ";
pub const STATUS_ABANDONED: &str = "เงียบหาย";

pub fn encode_status(s: &PromiseStatus) -> &str {
  match s {
    PromiseStatus::NotStarted => STATUS_NOT_STARTED,
    PromiseStatus::InProgress => STATUS_IN_PROGRESS,
    PromiseStatus::Abandoned => STATUS_ABANDONED,
    PromiseStatus::Other(raw) => raw,
  }
}

/// Unknown literals are accepted and kept as [`PromiseStatus::Other`].
pub fn decode_status(s: String) -> PromiseStatus {
  match s.as_str() {
    STATUS_NOT_STARTED => PromiseStatus::NotStarted,
    STATUS_IN_PROGRESS => PromiseStatus::InProgress,
    STATUS_ABANDONED => PromiseStatus::Abandoned,
    _ => PromiseStatus::Other(s),
  }
}

// ─── Record types ────────────────────────────────────────────────────────────

/// One element of the `politicians` array.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawPolitician {
  pub id:    PoliticianId,
  pub name:  String,
  pub party: String,
  #[serde(flatten)]
  pub extra: Extra,
}

impl RawPolitician {
  pub fn into_stored(self) -> Stored<Politician> {
    Stored {
      record: Politician { id: self.id, name: self.name, party: self.party },
      extra:  self.extra,
    }
  }
}

impl From<&Stored<Politician>> for RawPolitician {
  fn from(s: &Stored<Politician>) -> Self {
    let p = &s.record;
    Self {
      id:    p.id,
      name:  p.name.clone(),
      party: p.party.clone(),
      extra: s.extra.clone(),
    }
  }
}

/// One element of the `promises` array.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawPromise {
  pub id:     String,
  pub pol_id: PoliticianId,
  pub desc:   String,
  pub date:   String,
  pub status: String,
  #[serde(flatten)]
  pub extra:  Extra,
}

impl RawPromise {
  pub fn into_stored(self) -> Result<Stored<Promise>> {
    let record = Promise {
      id:             self.id,
      politician_id:  self.pol_id,
      description:    self.desc,
      announced_date: decode_date(&self.date)?,
      status:         decode_status(self.status),
    };
    Ok(Stored { record, extra: self.extra })
  }
}

impl From<&Stored<Promise>> for RawPromise {
  fn from(s: &Stored<Promise>) -> Self {
    let p = &s.record;
    Self {
      id:     p.id.clone(),
      pol_id: p.politician_id,
      desc:   p.description.clone(),
      date:   encode_date(p.announced_date),
      status: encode_status(&p.status).to_owned(),
      extra:  s.extra.clone(),
    }
  }
}

/// One element of the `updates` array.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawUpdate {
  pub u_id:   UpdateId,
  pub p_id:   String,
  pub date:   String,
  pub detail: String,
  #[serde(flatten)]
  pub extra:  Extra,
}

impl RawUpdate {
  pub fn into_stored(self) -> Result<Stored<Update>> {
    let record = Update {
      id:         self.u_id,
      promise_id: self.p_id,
      date:       decode_date(&self.date)?,
      detail:     self.detail,
    };
    Ok(Stored { record, extra: self.extra })
  }
}

impl From<&Stored<Update>> for RawUpdate {
  fn from(s: &Stored<Update>) -> Self {
    let u = &s.record;
    Self {
      u_id:   u.id,
      p_id:   u.promise_id.clone(),
      date:   encode_date(u.date),
      detail: u.detail.clone(),
      extra:  s.extra.clone(),
    }
  }
}

/// The whole backing file. Field order matches the established layout.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawDocument {
  pub politicians: Vec<RawPolitician>,
  /// Reserved; kept verbatim.
  #[serde(default)]
  pub campaigns:   Vec<serde_json::Value>,
  pub promises:    Vec<RawPromise>,
  pub updates:     Vec<RawUpdate>,
  #[serde(default)]
  pub users:       BTreeMap<String, String>,
  #[serde(flatten)]
  pub extra:       Extra,
}
