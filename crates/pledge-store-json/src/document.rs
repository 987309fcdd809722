//! The in-memory document and its file I/O.

use std::{collections::BTreeMap, fs, path::Path};

use pledge_core::{politician::Politician, promise::Promise, update::Update};
use serde::Serialize as _;
use serde_json::ser::PrettyFormatter;

use crate::{
  Error, Result,
  encode::{Extra, RawDocument, RawPolitician, RawPromise, RawUpdate, Stored},
};

/// All collections of the backing file, decoded.
#[derive(Debug, Clone)]
pub struct Document {
  pub politicians: Vec<Stored<Politician>>,
  pub campaigns:   Vec<serde_json::Value>,
  pub promises:    Vec<Stored<Promise>>,
  pub updates:     Vec<Stored<Update>>,
  /// username → plaintext password
  pub users:       BTreeMap<String, String>,
  /// Unmodelled top-level keys.
  pub extra:       Extra,
}

impl Document {
  pub fn politicians(&self) -> impl Iterator<Item = &Politician> {
    self.politicians.iter().map(|s| &s.record)
  }

  pub fn promises(&self) -> impl Iterator<Item = &Promise> {
    self.promises.iter().map(|s| &s.record)
  }

  pub fn updates(&self) -> impl Iterator<Item = &Update> {
    self.updates.iter().map(|s| &s.record)
  }

  pub fn decode(raw: RawDocument) -> Result<Self> {
    let promises = raw
      .promises
      .into_iter()
      .map(RawPromise::into_stored)
      .collect::<Result<Vec<_>>>()?;
    let updates = raw
      .updates
      .into_iter()
      .map(RawUpdate::into_stored)
      .collect::<Result<Vec<_>>>()?;

    Ok(Self {
      politicians: raw.politicians.into_iter().map(RawPolitician::into_stored).collect(),
      campaigns: raw.campaigns,
      promises,
      updates,
      users: raw.users,
      extra: raw.extra,
    })
  }

  pub fn encode(&self) -> RawDocument {
    RawDocument {
      politicians: self.politicians.iter().map(RawPolitician::from).collect(),
      campaigns:   self.campaigns.clone(),
      promises:    self.promises.iter().map(RawPromise::from).collect(),
      updates:     self.updates.iter().map(RawUpdate::from).collect(),
      users:       self.users.clone(),
      extra:       self.extra.clone(),
    }
  }

  /// Pretty-printed JSON with a four-space indent. Non-ASCII text is
  /// written as-is.
  pub fn to_json(&self) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser =
      serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    self.encode().serialize(&mut ser)?;
    Ok(buf)
  }

  pub fn read(path: &Path) -> Result<Self> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let raw: RawDocument = serde_json::from_slice(&bytes)?;
    Self::decode(raw)
  }

  /// Replace the file at `path` with this document.
  ///
  /// The document is serialized before the file is opened, so an encoding
  /// failure leaves the old file intact. A failure during the write itself
  /// can still leave a truncated file.
  pub fn write(&self, path: &Path) -> Result<()> {
    let bytes = self.to_json()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| Error::io(path, e))
  }
}
