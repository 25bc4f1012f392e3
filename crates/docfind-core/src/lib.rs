//! docfind Core — shared error types and the immutable state container.
//!
//! This crate provides the foundational types used across all docfind
//! crates. It has no internal docfind dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`state`]: Immutable shared-value container

pub mod error;
pub mod state;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use state::Shared;
