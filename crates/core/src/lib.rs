//! Functional core for holocron.
//!
//! Pure data types, request payloads and storage contracts. Nothing in this
//! crate performs I/O; the `holocron` binary provides the SQLite backend.

pub mod profile;
pub mod serde;
pub mod storage;
