//! `pledge` — command-line front end for the Pledge promise tracker.
//!
//! # Usage
//!
//! ```
//! pledge --user admin --password 1234 promises
//! pledge --user admin --password 1234 add-update P01 "Cabinet approved the budget"
//! PLEDGE_USER=user PLEDGE_PASSWORD=1234 pledge --json promise P02
//! ```

mod commands;
mod render;
mod settings;

use std::{io, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use pledge_store_json::JsonStore;
use render::Format;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "pledge", version, about = "Track campaign promises and their progress")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "pledge.toml")]
  config: PathBuf,

  /// JSON store file; overrides `store_path` from the configuration.
  #[arg(long, value_name = "FILE")]
  store: Option<PathBuf>,

  /// Username to log in as.
  #[arg(short, long, env = "PLEDGE_USER")]
  user: String,

  /// Password (plaintext).
  #[arg(long, env = "PLEDGE_PASSWORD", hide_env_values = true)]
  password: String,

  /// Print results as JSON.
  #[arg(long)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Check credentials and show the resulting role.
  Login,
  /// List all promises, oldest first.
  Promises,
  /// Show one promise with its politician and progress timeline.
  Promise { id: String },
  /// List all politicians.
  Politicians,
  /// List the promises of one politician.
  Politician { id: i64 },
  /// Record a progress update on a promise (admin only).
  AddUpdate { id: String, detail: String },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = Settings::load(&cli.config)?;
  let store_path = cli.store.unwrap_or(settings.store_path);

  let mut store = JsonStore::open(&store_path)
    .with_context(|| format!("failed to open store at {}", store_path.display()))?;
  tracing::debug!(path = %store.path().display(), "store ready");

  let session = commands::login(&store, &cli.user, &cli.password)?;
  let format = if cli.json { Format::Json } else { Format::Text };
  let mut out = io::stdout().lock();

  match cli.command {
    Command::Login => commands::whoami(&mut out, &session, format),
    Command::Promises => commands::list_promises(&store, &mut out, format),
    Command::Promise { id } => commands::show_promise(&store, &session, &id, &mut out, format),
    Command::Politicians => commands::list_politicians(&store, &mut out, format),
    Command::Politician { id } => commands::show_politician(&store, id, &mut out, format),
    Command::AddUpdate { id, detail } => {
      commands::add_update(&mut store, &session, &id, &detail, &mut out, format)
    }
  }
}
