//! SQLite backend for campus storage scopes.
//!
//! Each [`SqliteStorage`] is one scope: a database holding a single
//! key-value table. A file-backed database serves as the long-lived scope;
//! an in-memory one ends with the process and serves as a short-lived scope.

mod schema;
mod storage;

pub mod error;

pub use error::{Error, Result};
pub use storage::SqliteStorage;

#[cfg(test)]
mod tests;
