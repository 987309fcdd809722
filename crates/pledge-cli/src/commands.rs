//! Command handlers.
//!
//! Each handler takes the store, the caller's [`Session`] where it matters,
//! and a writer. Permission and input checks happen here, before the store
//! is called; the store itself trusts its input.

use std::io::Write;

use anyhow::{Result, bail};
use pledge_core::{politician::PoliticianId, session::Session, store::PromiseStore};

use crate::render::{self, Format};

/// Log in, or fail with a user-facing message.
pub fn login<S: PromiseStore>(store: &S, username: &str, password: &str) -> Result<Session> {
  match store.login(username, password)? {
    Some(session) => {
      tracing::debug!(username, role = session.role.as_str(), "logged in");
      Ok(session)
    }
    None => bail!("invalid username or password"),
  }
}

pub fn whoami<W: Write>(out: &mut W, session: &Session, format: Format) -> Result<()> {
  match format {
    Format::Json => render::json(out, session),
    Format::Text => {
      writeln!(out, "welcome {} ({})", session.username, session.role.as_str())?;
      Ok(())
    }
  }
}

pub fn list_promises<S: PromiseStore, W: Write>(
  store: &S,
  out: &mut W,
  format: Format,
) -> Result<()> {
  let promises = store.list_promises()?;
  match format {
    Format::Json => render::json(out, &promises),
    Format::Text => render::promise_table(out, &promises),
  }
}

pub fn show_promise<S: PromiseStore, W: Write>(
  store: &S,
  session: &Session,
  promise_id: &str,
  out: &mut W,
  format: Format,
) -> Result<()> {
  let Some(detail) = store.get_promise_detail(promise_id)? else {
    bail!("promise {promise_id} not found");
  };
  match format {
    Format::Json => render::json(out, &detail),
    Format::Text => render::promise_detail(out, &detail, session),
  }
}

pub fn list_politicians<S: PromiseStore, W: Write>(
  store: &S,
  out: &mut W,
  format: Format,
) -> Result<()> {
  let politicians = store.list_politicians()?;
  match format {
    Format::Json => render::json(out, &politicians),
    Format::Text => render::politician_table(out, &politicians),
  }
}

/// One politician's promises, in the order they were recorded.
pub fn show_politician<S: PromiseStore, W: Write>(
  store: &S,
  politician_id: PoliticianId,
  out: &mut W,
  format: Format,
) -> Result<()> {
  let promises = store.list_promises_by_politician(politician_id)?;
  if format == Format::Json {
    return render::json(out, &promises);
  }

  if let Some(pol) = store.get_politician(politician_id)? {
    writeln!(out, "{} ({})", pol.name, pol.party)?;
  }
  if promises.is_empty() {
    writeln!(out, "no promises found for this politician")?;
    return Ok(());
  }
  render::promise_table(out, &promises)
}

/// Record a progress update. Admin only; blank details are rejected here
/// because the store stores whatever it is given.
pub fn add_update<S: PromiseStore, W: Write>(
  store: &mut S,
  session: &Session,
  promise_id: &str,
  detail: &str,
  out: &mut W,
  format: Format,
) -> Result<()> {
  if !session.can_add_updates() {
    bail!("only administrators can add updates");
  }
  if detail.trim().is_empty() {
    bail!("detail must not be blank");
  }

  let update = store.add_update(promise_id, detail)?;
  match format {
    Format::Json => render::json(out, &update),
    Format::Text => {
      writeln!(out, "update saved (#{} on {})", update.id, update.date)?;
      Ok(())
    }
  }
}
