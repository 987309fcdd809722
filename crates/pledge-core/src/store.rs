//! The `PromiseStore` trait.
//!
//! Implemented by storage backends (e.g. `pledge-store-json`). Front ends
//! depend on this abstraction, not on any concrete backend.
//!
//! The trait is synchronous. Reads borrow the store shared; the single
//! mutation takes `&mut self`, so callers get exclusive access to the
//! read-modify-persist sequence without any locking inside the store.

use crate::{
  politician::{Politician, PoliticianId},
  promise::{Promise, PromiseDetail},
  session::Session,
  update::Update,
};

pub trait PromiseStore {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Authentication ────────────────────────────────────────────────────

  /// Check `password` against the stored credential for `username`.
  ///
  /// Returns `None` on unknown user or wrong password. Has no side effects;
  /// the returned session belongs to the caller.
  fn login(&self, username: &str, password: &str) -> Result<Option<Session>, Self::Error>;

  // ── Politicians ───────────────────────────────────────────────────────

  /// All politicians in stored order.
  fn list_politicians(&self) -> Result<Vec<Politician>, Self::Error>;

  /// Look up a politician. Returns `None` if not found.
  fn get_politician(&self, id: PoliticianId) -> Result<Option<Politician>, Self::Error>;

  // ── Promises ──────────────────────────────────────────────────────────

  /// All promises, oldest announcement first. Ties keep stored order.
  fn list_promises(&self) -> Result<Vec<Promise>, Self::Error>;

  /// Promises made by one politician, in stored order (not date-sorted).
  fn list_promises_by_politician(
    &self,
    politician_id: PoliticianId,
  ) -> Result<Vec<Promise>, Self::Error>;

  /// Look up a promise. Returns `None` if not found.
  fn get_promise(&self, promise_id: &str) -> Result<Option<Promise>, Self::Error>;

  /// Join a promise with its politician and its updates.
  /// Returns `None` if the promise does not exist.
  fn get_promise_detail(&self, promise_id: &str) -> Result<Option<PromiseDetail>, Self::Error>;

  // ── Updates — append-only writes ──────────────────────────────────────

  /// Append a progress update dated today and persist it.
  ///
  /// Fails if the promise does not exist or is abandoned; in both cases
  /// nothing is written. `detail` is stored verbatim. Rejecting blank input
  /// is the caller's job.
  fn add_update(&mut self, promise_id: &str, detail: &str) -> Result<Update, Self::Error>;
}
