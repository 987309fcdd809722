//! Core types and trait definitions for the Pledge promise tracker.
//!
//! This crate has no storage or I/O dependencies. Backends implement
//! [`store::PromiseStore`]; front ends depend on the trait, not on a backend.

pub mod error;
pub mod politician;
pub mod promise;
pub mod session;
pub mod store;
pub mod update;

pub use error::{Error, Result};
