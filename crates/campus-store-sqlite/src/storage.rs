//! [`SqliteStorage`]: the SQLite implementation of [`KeyValueStorage`].

use std::path::Path;

use campus_core::storage::KeyValueStorage;
use rusqlite::{Connection, OptionalExtension as _};
use tracing::debug;

use crate::{
  Error, Result,
  schema::{SCHEMA, SCHEMA_VERSION},
};

/// One storage scope backed by a SQLite database.
#[derive(Debug)]
pub struct SqliteStorage {
  conn: Connection,
}

impl SqliteStorage {
  /// Open (or create) a scope at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening sqlite storage");
    Self::init(Connection::open(path)?)
  }

  /// Open a scope that lives only as long as this value.
  pub fn open_in_memory() -> Result<Self> {
    Self::init(Connection::open_in_memory()?)
  }

  fn init(conn: Connection) -> Result<Self> {
    let version: i64 =
      conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    if version > SCHEMA_VERSION {
      return Err(Error::SchemaVersion(version));
    }
    conn.execute_batch(SCHEMA)?;
    Ok(Self { conn })
  }

  /// Every key currently stored, in key order.
  pub fn keys(&self) -> Result<Vec<String>> {
    let mut stmt = self.conn.prepare("SELECT key FROM entries ORDER BY key")?;
    let keys = stmt
      .query_map([], |r| r.get(0))?
      .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(keys)
  }
}

// ─── KeyValueStorage impl ────────────────────────────────────────────────────

impl KeyValueStorage for SqliteStorage {
  type Error = Error;

  fn get(&self, key: &str) -> Result<Option<String>> {
    let value = self
      .conn
      .query_row(
        "SELECT value FROM entries WHERE key = ?1",
        rusqlite::params![key],
        |r| r.get(0),
      )
      .optional()?;
    Ok(value)
  }

  fn set(&mut self, key: &str, value: &str) -> Result<()> {
    self.conn.execute(
      "INSERT INTO entries (key, value) VALUES (?1, ?2)
       ON CONFLICT(key) DO UPDATE SET value = excluded.value",
      rusqlite::params![key, value],
    )?;
    Ok(())
  }

  fn remove(&mut self, key: &str) -> Result<()> {
    self
      .conn
      .execute("DELETE FROM entries WHERE key = ?1", rusqlite::params![key])?;
    Ok(())
  }

  fn clear(&mut self) -> Result<()> {
    let removed = self.conn.execute("DELETE FROM entries", [])?;
    debug!(removed, "cleared sqlite storage");
    Ok(())
  }
}
