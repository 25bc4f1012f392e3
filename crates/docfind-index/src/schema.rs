//! Record schema for the search index.
//!
//! The schema is deliberately closed: [`Category`] is a fixed enumeration
//! and [`SearchRecord`] rejects unknown fields. The generator emits exactly
//! these five fields per record, so anything else indicates a foreign or
//! corrupted payload and fails the load.

use docfind_core::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// How the consuming search widget groups and renders a record.
///
/// Serialized in lowercase (`"page"`, `"section"`, ...). Any tag outside
/// this set is a schema violation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Whole-page prose entry.
    Page,
    /// Section heading within a page.
    Section,
    /// Documented method or function.
    Method,
    /// Documented type.
    Type,
    /// Documented module.
    Module,
}

impl Category {
    /// All category tags, in rendering order.
    pub const ALL: [Category; 5] = [
        Category::Page,
        Category::Section,
        Category::Method,
        Category::Type,
        Category::Module,
    ];

    /// The lowercase wire tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
            Category::Method => "method",
            Category::Type => "type",
            Category::Module => "module",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SearchRecord
// ============================================================================

/// One entry in the search index.
///
/// `location` keys a documentation anchor (page path plus optional
/// `#fragment`) and must be non-empty. `title` and `text` may legitimately
/// be empty strings; pure navigation entries carry no excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchRecord {
    /// Page path with optional `#fragment` anchor.
    pub location: String,
    /// Display name of the containing page.
    pub page: String,
    /// Display name of the indexed symbol or section.
    pub title: String,
    /// Free-form excerpt (docstring body, prose, or empty).
    pub text: String,
    /// Rendering category.
    pub category: Category,
}

impl SearchRecord {
    /// Check the record-level invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.location.is_empty() {
            return Err(Error::schema("location must be non-empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location: &str, category: Category) -> SearchRecord {
        SearchRecord {
            location: location.to_string(),
            page: "Parametric item banks".to_string(),
            title: "X".to_string(),
            text: String::new(),
            category,
        }
    }

    #[test]
    fn test_category_wire_tags() {
        assert_eq!(Category::Page.as_str(), "page");
        assert_eq!(Category::Section.as_str(), "section");
        assert_eq!(Category::Method.as_str(), "method");
        assert_eq!(Category::Type.as_str(), "type");
        assert_eq!(Category::Module.as_str(), "module");
    }

    #[test]
    fn test_category_serde_lowercase() {
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));

            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn test_category_unknown_tag_rejected() {
        let result: std::result::Result<Category, _> = serde_json::from_str("\"bogus\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Method.to_string(), "method");
    }

    #[test]
    fn test_record_deserialize() {
        let json = r#"{"location":"parametric/#X","page":"Parametric item banks","title":"X","text":"","category":"section"}"#;
        let rec: SearchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.location, "parametric/#X");
        assert_eq!(rec.category, Category::Section);
        assert_eq!(rec.text, "");
    }

    #[test]
    fn test_record_missing_field_rejected() {
        // No location field at all.
        let json = r#"{"page":"Home","title":"Home","text":"","category":"page"}"#;
        let result: std::result::Result<SearchRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_unknown_field_rejected() {
        let json = r#"{"location":"x/","page":"X","title":"X","text":"","category":"page","rank":3}"#;
        let result: std::result::Result<SearchRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_validate_ok() {
        assert!(record("parametric/#X", Category::Section).validate().is_ok());
    }

    #[test]
    fn test_record_validate_empty_location() {
        let err = record("", Category::Page).validate().unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn test_record_round_trip() {
        let rec = SearchRecord {
            location: "interface/#FittedItemBanks.ItemResponse".to_string(),
            page: "Generic interface".to_string(),
            title: "FittedItemBanks.ItemResponse".to_string(),
            text: "The response function of a single item.".to_string(),
            category: Category::Type,
        };
        let json = serde_json::to_string(&rec).unwrap();
        let back: SearchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }
}
