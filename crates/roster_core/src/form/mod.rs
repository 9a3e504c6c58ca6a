//! Company form session: working copy, nested edits and finalize.
//!
//! # Responsibility
//! - Keep unvalidated edit state apart from stored records.
//! - Defer all validation to one finalize boundary.

pub mod controller;
pub mod draft;
