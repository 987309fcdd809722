//! [`JsonStore`] — the JSON-file implementation of [`PromiseStore`].

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use pledge_core::{
  politician::{Politician, PoliticianId},
  promise::{Promise, PromiseDetail, sort_by_announced_date},
  session::Session,
  store::PromiseStore,
  update::{Update, UpdateId},
};

use crate::{Error, Result, document::Document, encode::Stored, seed::seed_document};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A promise store backed by a single JSON file.
///
/// The file is read once at [`open`](Self::open). Reads are served from
/// memory; each successful mutation rewrites the whole file before
/// returning.
#[derive(Debug)]
pub struct JsonStore {
  path: PathBuf,
  doc:  Document,
}

impl JsonStore {
  /// Open the store at `path`, seeding it with the demonstration dataset if
  /// no file exists yet.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();

    let doc = if path.exists() {
      let doc = Document::read(&path)?;
      tracing::debug!(
        path = %path.display(),
        politicians = doc.politicians.len(),
        promises = doc.promises.len(),
        updates = doc.updates.len(),
        "loaded store"
      );
      doc
    } else {
      tracing::info!(path = %path.display(), "no store found, writing seed data");
      let doc = seed_document();
      doc.write(&path)?;
      doc
    };

    Ok(Self { path, doc })
  }

  /// Location of the backing file.
  pub fn path(&self) -> &Path { &self.path }

  fn persist(&self) -> Result<()> {
    self.doc.write(&self.path)?;
    tracing::debug!(path = %self.path.display(), "store written");
    Ok(())
  }

  fn find_promise(&self, promise_id: &str) -> Option<&Promise> {
    self.doc.promises().find(|p| p.id == promise_id)
  }

  /// One past the largest id in use, so ids never repeat even if updates
  /// were removed from the file by hand.
  fn next_update_id(&self) -> UpdateId {
    self.doc.updates().map(|u| u.id).max().map_or(1, |max| max + 1)
  }
}

fn today() -> NaiveDate { Local::now().date_naive() }

// ─── PromiseStore impl ───────────────────────────────────────────────────────

impl PromiseStore for JsonStore {
  type Error = Error;

  fn login(&self, username: &str, password: &str) -> Result<Option<Session>> {
    let ok = self
      .doc
      .users
      .get(username)
      .is_some_and(|stored| stored == password);
    Ok(ok.then(|| Session::new(username)))
  }

  fn list_politicians(&self) -> Result<Vec<Politician>> {
    Ok(self.doc.politicians().cloned().collect())
  }

  fn get_politician(&self, id: PoliticianId) -> Result<Option<Politician>> {
    Ok(self.doc.politicians().find(|p| p.id == id).cloned())
  }

  fn list_promises(&self) -> Result<Vec<Promise>> {
    let mut promises: Vec<_> = self.doc.promises().cloned().collect();
    sort_by_announced_date(&mut promises);
    Ok(promises)
  }

  fn list_promises_by_politician(&self, politician_id: PoliticianId) -> Result<Vec<Promise>> {
    Ok(
      self
        .doc
        .promises()
        .filter(|p| p.politician_id == politician_id)
        .cloned()
        .collect(),
    )
  }

  fn get_promise(&self, promise_id: &str) -> Result<Option<Promise>> {
    Ok(self.find_promise(promise_id).cloned())
  }

  fn get_promise_detail(&self, promise_id: &str) -> Result<Option<PromiseDetail>> {
    let Some(promise) = self.get_promise(promise_id)? else {
      return Ok(None);
    };

    let politician = self.get_politician(promise.politician_id)?;
    let updates = self
      .doc
      .updates()
      .filter(|u| u.promise_id == promise_id)
      .cloned()
      .collect();

    Ok(Some(PromiseDetail { promise, politician, updates }))
  }

  fn add_update(&mut self, promise_id: &str, detail: &str) -> Result<Update> {
    let promise = self
      .find_promise(promise_id)
      .ok_or_else(|| pledge_core::Error::PromiseNotFound(promise_id.to_owned()))?;

    if let Err(e) = promise.ensure_accepts_updates() {
      tracing::warn!(promise_id, "update rejected: promise is abandoned");
      return Err(e.into());
    }

    let update = Update {
      id:         self.next_update_id(),
      promise_id: promise_id.to_owned(),
      date:       today(),
      detail:     detail.to_owned(),
    };

    self.doc.updates.push(Stored::new(update.clone()));
    if let Err(e) = self.persist() {
      // Keep memory in step with the file.
      self.doc.updates.pop();
      return Err(e);
    }

    tracing::info!(promise_id, update_id = update.id, "update recorded");
    Ok(update)
  }
}
