//! JSON-file backend for the Pledge promise tracker.
//!
//! The whole document is read into memory once on [`JsonStore::open`] and
//! rewritten in full after every successful mutation.

mod document;
mod encode;
mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonStore;

#[cfg(test)]
mod tests;
