//! Login sessions and roles.
//!
//! A [`Session`] is produced by [`PromiseStore::login`] and held by the
//! caller. The store keeps no notion of a current user.
//!
//! [`PromiseStore::login`]: crate::store::PromiseStore::login

use serde::{Deserialize, Serialize};

/// The one username that maps to [`Role::Admin`].
pub const ADMIN_USERNAME: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  Viewer,
}

impl Role {
  /// Roles are derived from the username, never stored.
  pub fn for_username(username: &str) -> Self {
    if username == ADMIN_USERNAME { Self::Admin } else { Self::Viewer }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Admin => "admin",
      Self::Viewer => "viewer",
    }
  }
}

/// The result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub username: String,
  pub role:     Role,
}

impl Session {
  pub fn new(username: impl Into<String>) -> Self {
    let username = username.into();
    let role = Role::for_username(&username);
    Self { username, role }
  }

  /// Only administrators may record progress updates.
  pub fn can_add_updates(&self) -> bool { self.role == Role::Admin }
}
