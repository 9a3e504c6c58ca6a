//! Flutter bridge crate for the roster core.

pub mod api;
