//! The in-memory search index and its lookup accessors.
//!
//! [`SearchIndex`] is an immutable ordered sequence of [`SearchRecord`].
//! It is produced in one batch by [`loader`](crate::loader), preserves the
//! generator's emission order, and is never mutated afterwards; the next
//! documentation build replaces it wholesale. Share it across threads via
//! [`IndexHandle`].
//!
//! Text matching, ranking, and fuzzy search belong to the browser-side
//! widget that consumes the payload; this type exposes only the groupings
//! that widget keys on (`page`, `category`) plus exact lookup and counts.

use std::collections::{BTreeMap, HashSet};

use docfind_core::{Result, Shared};

use crate::schema::{Category, SearchRecord};

/// Thread-safe, immutable handle to a loaded index.
pub type IndexHandle = Shared<SearchIndex>;

// ============================================================================
// SearchIndex
// ============================================================================

/// An ordered, immutable sequence of search records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
}

impl SearchIndex {
    /// Build an index from validated records.
    ///
    /// Fails with a schema violation if any record breaks an invariant
    /// (currently: empty `location`). All-or-nothing: the first bad record
    /// aborts construction.
    pub fn from_records(records: Vec<SearchRecord>) -> Result<Self> {
        for (i, record) in records.iter().enumerate() {
            record.validate().map_err(|e| match e {
                docfind_core::Error::Schema(msg) => docfind_core::Error::schema_at(i, msg),
                other => other,
            })?;
        }
        Ok(Self { records })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in emission order.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Iterate over records in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchRecord> {
        self.records.iter()
    }

    /// Record at a position, if in bounds.
    pub fn get(&self, index: usize) -> Option<&SearchRecord> {
        self.records.get(index)
    }

    /// First record matching an exact `(location, category)` key.
    ///
    /// The generator assigns each logical symbol a stable location, so this
    /// pair identifies one entry; locations alone may repeat across
    /// categories on the same page.
    pub fn find(&self, location: &str, category: Category) -> Option<&SearchRecord> {
        self.records
            .iter()
            .find(|r| r.location == location && r.category == category)
    }

    /// All records belonging to a page, in emission order.
    pub fn records_for_page(&self, page: &str) -> Vec<&SearchRecord> {
        self.records.iter().filter(|r| r.page == page).collect()
    }

    /// All records with a given category, in emission order.
    pub fn by_category(&self, category: Category) -> Vec<&SearchRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Distinct page names, in first-seen order.
    pub fn pages(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut pages = Vec::new();
        for record in &self.records {
            if seen.insert(record.page.as_str()) {
                pages.push(record.page.as_str());
            }
        }
        pages
    }

    /// Summary statistics over the index.
    pub fn stats(&self) -> IndexStats {
        let mut by_category = BTreeMap::new();
        let mut by_page = BTreeMap::new();
        let mut locations = HashSet::new();
        let mut empty_text = 0;

        for record in &self.records {
            *by_category.entry(record.category).or_insert(0) += 1;
            *by_page.entry(record.page.clone()).or_insert(0) += 1;
            locations.insert(record.location.as_str());
            if record.text.is_empty() {
                empty_text += 1;
            }
        }

        IndexStats {
            records: self.records.len(),
            by_category,
            by_page,
            distinct_locations: locations.len(),
            empty_text,
        }
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a SearchRecord;
    type IntoIter = std::slice::Iter<'a, SearchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ============================================================================
// IndexStats
// ============================================================================

/// Counts summarizing a loaded index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    /// Total record count.
    pub records: usize,
    /// Records per category.
    pub by_category: BTreeMap<Category, usize>,
    /// Records per page name.
    pub by_page: BTreeMap<String, usize>,
    /// Number of distinct `location` values.
    pub distinct_locations: usize,
    /// Records whose `text` is the empty string.
    pub empty_text: usize,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location: &str, page: &str, category: Category) -> SearchRecord {
        SearchRecord {
            location: location.to_string(),
            page: page.to_string(),
            title: "T".to_string(),
            text: String::new(),
            category,
        }
    }

    fn sample_index() -> SearchIndex {
        SearchIndex::from_records(vec![
            record("parametric/#A", "Parametric item banks", Category::Section),
            record("parametric/", "Parametric item banks", Category::Page),
            record("interface/#B", "Generic interface", Category::Type),
            record("interface/#C", "Generic interface", Category::Method),
            record("interface/#B", "Generic interface", Category::Section),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_records_preserves_order_and_count() {
        let index = sample_index();
        assert_eq!(index.len(), 5);
        assert_eq!(index.get(0).unwrap().location, "parametric/#A");
        assert_eq!(index.get(4).unwrap().location, "interface/#B");
    }

    #[test]
    fn test_from_records_rejects_empty_location() {
        let result = SearchIndex::from_records(vec![
            record("ok/", "P", Category::Page),
            record("", "P", Category::Page),
        ]);
        let err = result.unwrap_err();
        assert!(err.is_schema());
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_empty_index() {
        let index = SearchIndex::from_records(vec![]).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.pages().is_empty());
    }

    #[test]
    fn test_find_exact_key() {
        let index = sample_index();

        let hit = index.find("interface/#B", Category::Type).unwrap();
        assert_eq!(hit.category, Category::Type);

        // Same location, different category: distinct entry.
        let other = index.find("interface/#B", Category::Section).unwrap();
        assert_eq!(other.category, Category::Section);

        assert!(index.find("interface/#B", Category::Module).is_none());
        assert!(index.find("missing/", Category::Page).is_none());
    }

    #[test]
    fn test_records_for_page() {
        let index = sample_index();
        let records = index.records_for_page("Generic interface");
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.page == "Generic interface"));
        assert!(index.records_for_page("No such page").is_empty());
    }

    #[test]
    fn test_by_category() {
        let index = sample_index();
        assert_eq!(index.by_category(Category::Section).len(), 2);
        assert_eq!(index.by_category(Category::Module).len(), 0);
    }

    #[test]
    fn test_pages_first_seen_order() {
        let index = sample_index();
        assert_eq!(
            index.pages(),
            vec!["Parametric item banks", "Generic interface"]
        );
    }

    #[test]
    fn test_stats() {
        let index = sample_index();
        let stats = index.stats();

        assert_eq!(stats.records, 5);
        assert_eq!(stats.by_category[&Category::Section], 2);
        assert_eq!(stats.by_category[&Category::Page], 1);
        assert_eq!(stats.by_page["Generic interface"], 3);
        // "interface/#B" repeats, so 5 records map to 4 locations.
        assert_eq!(stats.distinct_locations, 4);
        assert_eq!(stats.empty_text, 5);
    }

    #[test]
    fn test_iter_matches_records() {
        let index = sample_index();
        let collected: Vec<_> = index.iter().collect();
        assert_eq!(collected.len(), index.len());

        let via_into: Vec<_> = (&index).into_iter().collect();
        assert_eq!(via_into.len(), index.len());
    }

    #[test]
    fn test_index_handle_shares_one_value() {
        let handle = IndexHandle::new(sample_index());
        let clone = handle.clone();
        assert_eq!(clone.get().len(), 5);
        assert!(std::sync::Arc::ptr_eq(&handle.as_arc(), &clone.as_arc()));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(sample_index(), sample_index());
    }
}
