//! Deserialization and validation of search index payloads.
//!
//! The externally observable format is a JavaScript binding:
//!
//! ```text
//! var documenterSearchIndex = {"docs": [...]}
//! ```
//!
//! The loader accepts that form (with or without a trailing semicolon) as
//! well as the bare `{"docs": [...]}` object. Validation is all-or-nothing:
//! a single malformed record (missing field, unknown field, unknown
//! `category` tag, empty `location`) fails the whole load with a schema
//! violation naming the record position. A corrupted index would silently
//! degrade search results in the consuming widget, so failing visibly at
//! load time is the contract.

use std::path::Path;

use docfind_core::{Error, Result};
use serde::Deserialize;

use crate::index::SearchIndex;
use crate::schema::SearchRecord;

/// The variable name the generator binds the payload to.
pub const BINDING_NAME: &str = "documenterSearchIndex";

/// Top-level payload shape: a single `docs` key holding the record array.
///
/// Records are held as raw JSON values here so each can be decoded
/// individually and failures reported with a record position.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPayload {
    docs: Vec<serde_json::Value>,
}

impl SearchIndex {
    /// Load an index from payload text.
    ///
    /// Accepts the `var documenterSearchIndex = {...}` binding form and the
    /// bare JSON object form. Preserves record order and count.
    pub fn load(raw: &str) -> Result<Self> {
        let json = strip_js_binding(raw)?;

        let payload: RawPayload = serde_json::from_str(json)
            .map_err(|e| Error::schema(format!("payload is not a search index object: {e}")))?;

        let mut records = Vec::with_capacity(payload.docs.len());
        for (i, value) in payload.docs.into_iter().enumerate() {
            let record: SearchRecord = serde_json::from_value(value)
                .map_err(|e| Error::schema_at(i, e.to_string()))?;
            records.push(record);
        }

        let index = Self::from_records(records)?;
        if index.is_empty() {
            log::warn!("search index payload contains no records");
        } else {
            log::debug!("loaded {} search records", index.len());
        }
        Ok(index)
    }

    /// Load an index from a file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::not_found(format!(
                "index file {}",
                path.display()
            )));
        }
        let raw =
            std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::load(&raw)
    }
}

/// Strip the JavaScript variable binding, leaving the JSON object.
///
/// Bare JSON input (starting with `{`) passes through unchanged.
fn strip_js_binding(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();

    if trimmed.starts_with('{') {
        return Ok(trimmed);
    }

    let rest = trimmed
        .strip_prefix("var")
        .map(str::trim_start)
        .and_then(|r| r.strip_prefix(BINDING_NAME))
        .map(str::trim_start)
        .and_then(|r| r.strip_prefix('='))
        .ok_or_else(|| {
            Error::schema(format!(
                "input is neither a JSON object nor a `var {BINDING_NAME} = ...` binding"
            ))
        })?;

    Ok(rest.trim().trim_end_matches(';').trim_end())
}

// ============================================================================
// Tests
// ============================================================================
