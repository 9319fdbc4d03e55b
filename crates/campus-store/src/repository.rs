//! Repositories, one per storage scope.
//!
//! [`PlaceRepository`] owns the short-lived scope and the `studyPlaces` key.
//! [`MembershipRepository`] owns the long-lived scope and the `favorites` and
//! `visited` keys. The two save independently: one scope may be written
//! while the other is not, which is harmless because identity sets and place
//! content never refer to each other's stored form.

use std::sync::Arc;

use campus_core::{
  place::PlaceRecord,
  storage::{KEY_FAVORITES, KEY_PLACES, KEY_VISITED, KeyValueStorage, StorageScope},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{Error, Result};

// ─── Raw JSON access ─────────────────────────────────────────────────────────

/// The outcome of reading one JSON value from storage.
#[derive(Debug)]
pub(crate) enum Stored<T> {
  Found(T),
  Absent,
  /// The key holds text that does not parse as `T`.
  Malformed(serde_json::Error),
}

pub(crate) fn read_json<T, K>(
  storage: &K,
  scope: StorageScope,
  key: &str,
) -> Result<Stored<T>>
where
  T: DeserializeOwned,
  K: KeyValueStorage,
{
  let raw = storage.get(key).map_err(|e| Error::storage(scope, e))?;
  Ok(match raw {
    None => Stored::Absent,
    Some(text) => match serde_json::from_str(&text) {
      Ok(value) => Stored::Found(value),
      Err(e) => Stored::Malformed(e),
    },
  })
}

pub(crate) fn write_json<T, K>(
  storage: &mut K,
  scope: StorageScope,
  key: &str,
  value: &T,
) -> Result<()>
where
  T: Serialize + ?Sized,
  K: KeyValueStorage,
{
  let text = serde_json::to_string(value)?;
  debug!(%scope, key, bytes = text.len(), "persisting");
  storage.set(key, &text).map_err(|e| Error::storage(scope, e))
}

// ─── Places ──────────────────────────────────────────────────────────────────

/// The working place collection in the short-lived scope.
#[derive(Debug)]
pub struct PlaceRepository<S> {
  storage: S,
}

impl<S: KeyValueStorage> PlaceRepository<S> {
  pub fn new(storage: S) -> Self { Self { storage } }

  pub(crate) fn load(&self) -> Result<Stored<Vec<PlaceRecord>>> {
    read_json(&self.storage, StorageScope::ShortLived, KEY_PLACES)
  }

  /// Overwrite the stored collection with `places`.
  pub fn save(&mut self, places: &[Arc<PlaceRecord>]) -> Result<()> {
    write_json(&mut self.storage, StorageScope::ShortLived, KEY_PLACES, places)
  }

  /// Drop every value in the short-lived scope.
  pub fn clear(&mut self) -> Result<()> {
    self
      .storage
      .clear()
      .map_err(|e| Error::storage(StorageScope::ShortLived, e))
  }

  pub fn storage(&self) -> &S { &self.storage }

  pub fn into_inner(self) -> S { self.storage }
}

// ─── Favourites and visited ──────────────────────────────────────────────────

/// Which id set a membership operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
  Favorite,
  Visited,
}

impl Membership {
  pub fn key(self) -> &'static str {
    match self {
      Self::Favorite => KEY_FAVORITES,
      Self::Visited => KEY_VISITED,
    }
  }
}

/// The favourite and visited id sets in the long-lived scope.
#[derive(Debug)]
pub struct MembershipRepository<L> {
  storage: L,
}

impl<L: KeyValueStorage> MembershipRepository<L> {
  pub fn new(storage: L) -> Self { Self { storage } }

  pub(crate) fn load(&self, set: Membership) -> Result<Stored<Vec<String>>> {
    read_json(&self.storage, StorageScope::LongLived, set.key())
  }

  /// Overwrite one id set. The other set is not touched.
  pub fn save(&mut self, set: Membership, ids: &[String]) -> Result<()> {
    write_json(&mut self.storage, StorageScope::LongLived, set.key(), ids)
  }

  pub fn storage(&self) -> &L { &self.storage }

  pub fn into_inner(self) -> L { self.storage }
}
