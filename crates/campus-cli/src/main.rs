//! `campus`: browse, search, and review campus study places.
//!
//! # Usage
//!
//! ```text
//! campus list --category quiet
//! campus search library --outlets
//! campus review 1 --rating 5 --comment "Silent and bright"
//! campus            # interactive shell; the session lasts until exit
//! ```

mod app;
mod render;
mod seed;
mod settings;

use std::{
  io::{self, IsTerminal as _},
  path::PathBuf,
};

use anyhow::{Context, Result};
use app::{App, Command};
use campus_store::{AppStore, ProfileSettings};
use campus_store_sqlite::SqliteStorage;
use clap::Parser;
use settings::CliConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "campus",
  version,
  about = "Find, filter, and review campus study places"
)]
struct Args {
  /// Path to a TOML config file (local_path, session_path, seed_path).
  #[arg(short, long, value_name = "FILE", default_value = "campus.toml")]
  config: PathBuf,

  /// Run one command. Without a command, read commands from stdin.
  #[command(subcommand)]
  command: Option<Command>,
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

  let args = Args::parse();
  let cfg = CliConfig::load(&args.config)?;

  if let Some(parent) = cfg.local_path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating {}", parent.display()))?;
  }

  // The store and the profile screen share the long-lived file through
  // separate connections.
  let local = open_storage(&cfg.local_path)?;
  let profile = ProfileSettings::new(open_storage(&cfg.local_path)?);
  let session = match &cfg.session_path {
    Some(path) => open_storage(path)?,
    None => SqliteStorage::open_in_memory()
      .context("opening in-memory session storage")?,
  };

  let seed = seed::load(cfg.seed_path.as_deref())?;
  let store = AppStore::open(local, session, &seed).context("opening store")?;
  let mut app = App::new(store, profile, seed);

  let stdout = io::stdout();
  let mut out = stdout.lock();
  match args.command {
    Some(command) => app.execute(command, &mut out),
    None => {
      let interactive = io::stdin().is_terminal();
      app.run_shell(io::stdin().lock(), &mut out, interactive)
    }
  }
}

fn open_storage(path: &std::path::Path) -> Result<SqliteStorage> {
  SqliteStorage::open(path)
    .with_context(|| format!("failed to open storage at {}", path.display()))
}
