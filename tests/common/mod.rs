//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsift::{Document, MemoryStore, SearchEngine, TagStore};

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_doc, make_docs, make_tag};

// ============================================================================
// FIXTURES
// ============================================================================

/// The two-document collection used throughout the search tests.
pub fn fruit_docs() -> Vec<Document> {
    vec![
        make_doc("1", "a", "apple banana apple"),
        make_doc("2", "b", "banana"),
    ]
}

/// A handful of finance/legal notes for the tag filter tests.
pub fn office_docs() -> Vec<Document> {
    vec![
        make_doc("q1", "q1-report.txt", "Quarterly revenue grew while costs held flat."),
        make_doc("q2", "q2-report.txt", "Revenue dipped in the second quarter."),
        make_doc("nda", "nda.txt", "This agreement covers revenue sharing terms."),
        make_doc("memo", "memo.txt", "Lunch is at noon on Friday."),
    ]
}

/// A search engine over an empty in-memory tag store.
pub fn engine() -> SearchEngine<MemoryStore> {
    SearchEngine::new(TagStore::new(MemoryStore::new()))
}

/// Count non-overlapping occurrences the way the matcher does: resume right
/// after the end of each hit.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
