//! Seed list selection: a configured JSON file, or the bundled samples.

use std::path::Path;

use anyhow::Context as _;
use campus_core::{place::PlaceRecord, seed::seed_from_json};

const BUNDLED_SEED: &str = include_str!("../data/seed.json");

pub fn bundled() -> anyhow::Result<Vec<PlaceRecord>> {
  seed_from_json(BUNDLED_SEED).context("parsing bundled seed list")
}

pub fn load(path: Option<&Path>) -> anyhow::Result<Vec<PlaceRecord>> {
  let Some(path) = path else {
    return bundled();
  };
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading seed file {}", path.display()))?;
  seed_from_json(&raw)
    .with_context(|| format!("parsing seed file {}", path.display()))
}
