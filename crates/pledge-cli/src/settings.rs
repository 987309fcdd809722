//! Layered configuration: defaults, then an optional TOML file, then
//! `PLEDGE_*` environment variables. Command-line flags are applied on top
//! by the caller.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Deserialize;

/// File name used when neither the config file nor the environment names a
/// store.
pub const DEFAULT_STORE_PATH: &str = "politics_gui_db.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Location of the JSON backing file.
  pub store_path: PathBuf,
}

impl Settings {
  pub fn load(config_path: &Path) -> Result<Self> {
    config::Config::builder()
      .set_default("store_path", DEFAULT_STORE_PATH)?
      .add_source(config::File::from(config_path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("PLEDGE"))
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}
