//! Company record model.
//!
//! # Responsibility
//! - Define the typed record tree persisted by the company store.
//! - Define catalogs, nested list semantics and field addressing shared by
//!   the form layer.
//!
//! # Invariants
//! - Records are addressed by position at every level, never by identity.
//! - Deleting a parent discards all of its descendants.

pub mod catalog;
pub mod company;
pub mod entry_list;
pub mod field_path;
