//! The `KeyValueStorage` trait and the persisted key layout.
//!
//! A storage scope is a flat map from string keys to JSON strings. The store
//! works against two of them: a long-lived scope that survives across
//! sessions and a short-lived scope that lives only as long as the current
//! session. Backends (in-memory, SQLite) implement this trait; the store
//! depends on the abstraction only.

use std::fmt;

// ─── Keys ────────────────────────────────────────────────────────────────────

/// Long-lived: JSON array of favourite place ids.
pub const KEY_FAVORITES: &str = "favorites";
/// Long-lived: JSON array of visited place ids.
pub const KEY_VISITED: &str = "visited";
/// Long-lived: JSON object of notification preferences.
pub const KEY_NOTIFICATIONS: &str = "notifications";
/// Short-lived: JSON array of every place record, reviews included.
pub const KEY_PLACES: &str = "studyPlaces";

// ─── Scope ───────────────────────────────────────────────────────────────────

/// Which of the two storage scopes a value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
  /// Survives across sessions.
  LongLived,
  /// Cleared when the session ends.
  ShortLived,
}

impl fmt::Display for StorageScope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::LongLived => "long-lived",
      Self::ShortLived => "short-lived",
    })
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// A synchronous string key-value map.
///
/// Writes are whole-value overwrites. There is no transaction spanning
/// several keys, and none spanning two storages.
pub trait KeyValueStorage {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the value stored under `key`. Returns `None` if absent.
  fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

  /// Store `value` under `key`, replacing anything already there.
  fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

  /// Remove `key`. Removing an absent key is not an error.
  fn remove(&mut self, key: &str) -> Result<(), Self::Error>;

  /// Remove every key.
  fn clear(&mut self) -> Result<(), Self::Error>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
  type Error = S::Error;

  fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
    (**self).get(key)
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
    (**self).set(key, value)
  }

  fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
    (**self).remove(key)
  }

  fn clear(&mut self) -> Result<(), Self::Error> { (**self).clear() }
}
