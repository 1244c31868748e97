//! Functional core of the medicare service.
//!
//! Pure data types, input validation and the storage contract. Nothing in this
//! crate performs I/O; storage backends live in the `medicare` binary crate.

pub mod patient;
pub mod storage;
