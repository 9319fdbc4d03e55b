//! Place records: the study locations everything else hangs off.
//!
//! The JSON shape produced here is the persisted shape of the short-lived
//! `studyPlaces` key, so field names are camelCase and enum values keep the
//! spelling shown to users.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::review::ReviewRecord;

/// Shown in place of a missing or unloadable photo.
pub const PLACEHOLDER_PHOTO: &str =
  "https://via.placeholder.com/400x300?text=Study+Place";

// ─── Enumerations ────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum NoiseLevel {
  Quiet,
  Moderate,
  Loud,
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Crowdedness {
  Low,
  Medium,
  High,
}

/// Browse category. A place may carry several.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
  Indoor,
  Outdoor,
  Quiet,
  Cafe,
  Library,
}

// ─── Amenities ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenities {
  pub wifi:        bool,
  pub outlets:     bool,
  pub food_nearby: bool,
}

impl Default for Amenities {
  /// Wifi is assumed; everything else has to be claimed.
  fn default() -> Self {
    Self { wifi: true, outlets: false, food_nearby: false }
  }
}

// ─── PlaceRecord ─────────────────────────────────────────────────────────────

/// A study location.
///
/// `rating` and `review_count` are derived from `reviews`; use
/// [`PlaceRecord::with_review`] rather than editing them by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
  pub id:                String,
  pub name:              String,
  pub location:          String,
  pub description:       String,
  #[serde(rename = "photo")]
  pub photo_url:         String,
  pub rating:            f64,
  pub review_count:      u32,
  pub noise_level:       NoiseLevel,
  pub crowdedness:       Crowdedness,
  pub seating_available: bool,
  pub amenities:         Amenities,
  /// Display order is preserved; duplicates are not allowed.
  pub categories:        Vec<Category>,
  /// Oldest first.
  #[serde(default)]
  pub reviews:           Vec<ReviewRecord>,
}

impl PlaceRecord {
  /// The photo to display, falling back to [`PLACEHOLDER_PHOTO`].
  pub fn display_photo(&self) -> &str {
    if self.photo_url.trim().is_empty() {
      PLACEHOLDER_PHOTO
    } else {
      &self.photo_url
    }
  }

  pub fn has_category(&self, category: Category) -> bool {
    self.categories.contains(&category)
  }
}
