//! Text and JSON rendering of store results.

use std::io::Write;

use anyhow::Result;
use pledge_core::{
  politician::Politician,
  promise::{Promise, PromiseDetail},
  session::Session,
};
use serde::Serialize;

/// How command results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Text,
  Json,
}

pub fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
  serde_json::to_writer_pretty(&mut *out, value)?;
  writeln!(out)?;
  Ok(())
}

pub fn promise_table<W: Write>(out: &mut W, promises: &[Promise]) -> Result<()> {
  writeln!(out, "{:<6} {:<10} {:<12} DESCRIPTION", "ID", "DATE", "STATUS")?;
  for p in promises {
    writeln!(
      out,
      "{:<6} {:<10} {:<12} {}",
      p.id,
      p.announced_date,
      p.status.label(),
      p.description
    )?;
  }
  Ok(())
}

pub fn politician_table<W: Write>(out: &mut W, politicians: &[Politician]) -> Result<()> {
  writeln!(out, "{:<6} {:<30} PARTY", "ID", "NAME")?;
  for p in politicians {
    writeln!(out, "{:<6} {:<30} {}", p.id, p.name, p.party)?;
  }
  Ok(())
}

/// The promise detail screen. Admins also see whether progress can be
/// recorded.
pub fn promise_detail<W: Write>(
  out: &mut W,
  detail: &PromiseDetail,
  session: &Session,
) -> Result<()> {
  let p = &detail.promise;
  writeln!(out, "Promise {}", p.id)?;
  writeln!(out, "  policy:      {}", p.description)?;
  match &detail.politician {
    Some(pol) => writeln!(out, "  proposed by: {} ({})", pol.name, pol.party)?,
    None => writeln!(out, "  proposed by: unknown politician #{}", p.politician_id)?,
  }
  writeln!(out, "  announced:   {} | status: {}", p.announced_date, p.status.label())?;

  writeln!(out)?;
  writeln!(out, "Progress timeline:")?;
  if detail.updates.is_empty() {
    writeln!(out, "  (no updates yet)")?;
  }
  for u in &detail.updates {
    writeln!(out, "  {}  {}", u.date, u.detail)?;
  }

  if session.can_add_updates() {
    writeln!(out)?;
    if p.accepts_updates() {
      writeln!(out, "Record progress with: pledge add-update {} <DETAIL>", p.id)?;
    } else {
      writeln!(out, "* updates cannot be added: status is {}", p.status.label())?;
    }
  }
  Ok(())
}
