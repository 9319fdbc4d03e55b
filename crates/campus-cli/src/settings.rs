//! Runtime configuration, layered from an optional TOML file and `CAMPUS_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
  /// SQLite file for the long-lived scope (favourites, visited,
  /// notification preferences).
  #[serde(default = "default_local_path")]
  pub local_path:   PathBuf,
  /// SQLite file for the short-lived scope. When unset, the session lives in
  /// memory and ends with the process.
  #[serde(default)]
  pub session_path: Option<PathBuf>,
  /// JSON seed list. When unset, the bundled sample places are used.
  #[serde(default)]
  pub seed_path:    Option<PathBuf>,
}

fn default_local_path() -> PathBuf { PathBuf::from("~/.campus/local.db") }

impl Default for CliConfig {
  fn default() -> Self {
    Self {
      local_path:   default_local_path(),
      session_path: None,
      seed_path:    None,
    }
  }
}

impl CliConfig {
  /// Read `file` (if it exists) and overlay the environment.
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("CAMPUS"))
      .build()
      .context("failed to read config file")?;

    let mut cfg: CliConfig = settings
      .try_deserialize()
      .context("failed to deserialise CliConfig")?;

    cfg.local_path = expand_tilde(&cfg.local_path);
    cfg.session_path = cfg.session_path.as_deref().map(expand_tilde);
    cfg.seed_path = cfg.seed_path.as_deref().map(expand_tilde);
    Ok(cfg)
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
