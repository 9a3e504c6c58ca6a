//! Persistence boundary abstractions and implementations.
//!
//! # Responsibility
//! - Define the key-value blob contract the company store writes through.
//! - Isolate SQLite query details from store/session orchestration.

pub mod blob_store;
