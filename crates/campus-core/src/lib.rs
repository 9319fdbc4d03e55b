//! Core types and trait definitions for the campus study-place store.
//!
//! This crate is free of storage and terminal dependencies. All other crates
//! depend on it; it performs no I/O of its own.

pub mod draft;
pub mod error;
pub mod place;
pub mod query;
pub mod rating;
pub mod review;
pub mod seed;
pub mod storage;

pub use error::{Error, Result, ValidationError};

#[cfg(test)]
mod tests;
