//! The seed source: the static dataset used when a session starts empty.

use crate::place::PlaceRecord;

/// Supplies the initial place collection. Read once, at store start-up, and
/// only when the short-lived scope holds no usable collection.
pub trait SeedSource {
  fn seed_places(&self) -> Vec<PlaceRecord>;
}

impl SeedSource for Vec<PlaceRecord> {
  fn seed_places(&self) -> Vec<PlaceRecord> { self.clone() }
}

impl SeedSource for [PlaceRecord] {
  fn seed_places(&self) -> Vec<PlaceRecord> { self.to_vec() }
}

impl<S: SeedSource + ?Sized> SeedSource for &S {
  fn seed_places(&self) -> Vec<PlaceRecord> { (**self).seed_places() }
}

/// Parse a seed list from its JSON representation (the same shape as the
/// persisted `studyPlaces` value).
pub fn seed_from_json(json: &str) -> crate::Result<Vec<PlaceRecord>> {
  Ok(serde_json::from_str(json)?)
}
