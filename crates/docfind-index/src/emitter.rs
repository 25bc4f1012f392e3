//! Serialization back to the JavaScript binding form.
//!
//! The emitter reproduces the generator's output shape:
//!
//! ```text
//! var documenterSearchIndex = {"docs":
//! [ ...records... ]
//! }
//! ```
//!
//! so that an emitted index reloads field-for-field equal to its source.

use std::path::Path;

use docfind_core::{Error, Result};

use crate::index::SearchIndex;
use crate::loader::BINDING_NAME;

impl SearchIndex {
    /// Emit the `var documenterSearchIndex = {"docs": [...]}` form.
    ///
    /// Records keep their order; the array is serialized compactly on one
    /// line, matching the generator's own layout.
    pub fn to_search_index_js(&self) -> Result<String> {
        let docs = serde_json::to_string(self.records())
            .map_err(|e| Error::serialization(e.to_string()))?;
        Ok(format!(
            "var {BINDING_NAME} = {{\"docs\":\n{docs}\n}}\n"
        ))
    }

    /// Emit the bare `{"docs": [...]}` object, pretty-printed.
    ///
    /// For human inspection; not the on-site wire form.
    pub fn to_docs_json_pretty(&self) -> Result<String> {
        #[derive(serde::Serialize)]
        struct Payload<'a> {
            docs: &'a [crate::schema::SearchRecord],
        }

        serde_json::to_string_pretty(&Payload {
            docs: self.records(),
        })
        .map_err(|e| Error::serialization(e.to_string()))
    }

    /// Write the JavaScript binding form to a file.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let js = self.to_search_index_js()?;
        std::fs::write(path, js).map_err(|e| Error::io_with_path(e, path))
    }
}

// ============================================================================
// Tests
// ============================================================================
