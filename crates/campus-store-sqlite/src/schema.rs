//! SQL schema for a storage scope.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout so a future change can be detected.

pub const SCHEMA_VERSION: i64 = 1;

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per key; values are JSON text written whole on every save.
CREATE TABLE IF NOT EXISTS entries (
    key    TEXT PRIMARY KEY,
    value  TEXT NOT NULL
);

PRAGMA user_version = 1;
";
