//! Per-command implementations.
//!
//! Each handler loads the index fresh from disk; the file is small and the
//! load is the thing being exercised, so there is no cached state between
//! commands.

use std::path::Path;

use docfind_core::Result;
use docfind_index::SearchIndex;

/// Load the index and report the outcome.
///
/// A schema violation propagates to the caller, which exits nonzero.
pub fn handle_validate(path: &Path) -> Result<()> {
    tracing::debug!("validating {}", path.display());
    let index = SearchIndex::load_file(path)?;
    println!("{}: ok ({} records)", path.display(), index.len());
    Ok(())
}

/// Print summary statistics for the index.
pub fn handle_stats(path: &Path) -> Result<()> {
    let index = SearchIndex::load_file(path)?;
    let stats = index.stats();

    println!("records:            {}", stats.records);
    println!("distinct locations: {}", stats.distinct_locations);
    println!("empty text:         {}", stats.empty_text);

    println!("by category:");
    for (category, count) in &stats.by_category {
        println!("  {category:<10} {count}");
    }

    println!("by page:");
    for (page, count) in &stats.by_page {
        println!("  {page}: {count}");
    }

    Ok(())
}

/// List pages in traversal order with their record counts.
pub fn handle_pages(path: &Path) -> Result<()> {
    let index = SearchIndex::load_file(path)?;
    for page in index.pages() {
        println!("{page}: {}", index.records_for_page(page).len());
    }
    Ok(())
}

/// Load the index and re-emit it on stdout.
pub fn handle_dump(path: &Path, pretty: bool) -> Result<()> {
    let index = SearchIndex::load_file(path)?;
    let out = if pretty {
        index.to_docs_json_pretty()?
    } else {
        index.to_search_index_js()?
    };
    println!("{out}");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
