//! Core use-case services.
//!
//! # Responsibility
//! - Own the saved company list and its write-through persistence.
//! - Orchestrate routing, form sessions and prompts into user actions.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod company_store;
pub mod prompt;
pub mod router;
pub mod session;
