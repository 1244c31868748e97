//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of [`PatientRepository`]
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.
//!
//! [`PatientRepository`]: medicare_core::storage::PatientRepository

mod conversions;
mod error;
mod repository;
mod schema;
mod target;

pub use repository::SqliteRepository;
