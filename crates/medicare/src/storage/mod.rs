//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `medicare_core::storage`. SQLite is the only backend; the connection
//! string comes from `DATABASE_URL` (see [`crate::config::Config`]).

pub mod sqlite;

pub use sqlite::SqliteRepository;
