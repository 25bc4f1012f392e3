//! Schema, loader, and emitter for Documenter-style search indexes.
//!
//! A documentation generator emits a search index as a JavaScript binding:
//!
//! ```text
//! var documenterSearchIndex = {"docs":
//! [{"location":"parametric/#X","page":"...","title":"...","text":"...","category":"section"}, ...]
//! }
//! ```
//!
//! This crate deserializes that payload into a [`SearchIndex`], an
//! immutable ordered sequence of [`SearchRecord`], with fail-fast
//! validation at the load boundary, and re-emits it in the same form.
//!
//! # Modules
//!
//! - [`schema`]: `SearchRecord` and the closed `Category` enumeration
//! - [`index`]: `SearchIndex` with lookup accessors and statistics
//! - [`loader`]: deserialization and validation
//! - [`emitter`]: serialization back to the JavaScript binding form

pub mod emitter;
pub mod index;
pub mod loader;
pub mod schema;

// Re-export key types at crate root for convenience
pub use index::{IndexHandle, IndexStats, SearchIndex};
pub use schema::{Category, SearchRecord};
