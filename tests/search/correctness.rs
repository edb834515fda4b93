//! Match counts, scores and snippets on small hand-checked collections.

use crate::common::{fruit_docs, make_doc, make_docs};
use docsift::{search_documents, SearchConfig};

#[test]
fn test_single_term_counts_and_scores() {
    let results = search_documents(&fruit_docs(), "apple", &SearchConfig::default());

    assert_eq!(results.len(), 1, "doc 2 has no apple and must be absent");
    assert_eq!(results[0].doc_id, "1");
    assert_eq!(results[0].doc_name, "a");
    assert_eq!(results[0].match_count, 2);
    assert_eq!(results[0].relevance_score, 50.0);
}

#[test]
fn test_two_terms_sum_matches_and_divide_by_term_count() {
    let results = search_documents(&fruit_docs(), "apple banana", &SearchConfig::default());

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc_id, "1");
    assert_eq!(results[0].match_count, 3);
    assert_eq!(results[0].relevance_score, 37.5);
    assert_eq!(results[1].doc_id, "2");
    assert_eq!(results[1].match_count, 1);
    assert_eq!(results[1].relevance_score, 12.5);
}

#[test]
fn test_score_caps_at_100() {
    let docs = make_docs(&["go go go go go go go"]);
    let results = search_documents(&docs, "go", &SearchConfig::default());
    assert_eq!(results[0].match_count, 7);
    assert_eq!(results[0].relevance_score, 100.0);

    let docs = make_docs(&["go go go go"]);
    let results = search_documents(&docs, "go", &SearchConfig::default());
    assert_eq!(results[0].relevance_score, 100.0);
}

#[test]
fn test_case_insensitive_both_ways() {
    let docs = make_docs(&["Rust RUST rust rUsT"]);
    let lower = search_documents(&docs, "rust", &SearchConfig::default());
    let upper = search_documents(&docs, "RUST", &SearchConfig::default());

    assert_eq!(lower[0].match_count, 4);
    assert_eq!(lower, upper);
}

#[test]
fn test_substring_matches_inside_words() {
    let docs = make_docs(&["cathedral concatenate cat"]);
    let results = search_documents(&docs, "cat", &SearchConfig::default());
    assert_eq!(results[0].match_count, 3);
}

#[test]
fn test_non_overlapping_scan() {
    // "aa" in "aaaa" is two matches, not three: scanning resumes after each hit.
    let docs = make_docs(&["aaaa", "aaa"]);
    let results = search_documents(&docs, "aa", &SearchConfig::default());
    assert_eq!(results[0].match_count, 2);
    assert_eq!(results[1].match_count, 1);
}

#[test]
fn test_snippets_carry_ellipses_and_match() {
    let docs = vec![make_doc("1", "a", "hello world")];
    let results = search_documents(&docs, "world", &SearchConfig::default());

    assert_eq!(results[0].snippets, vec!["...hello world...".to_string()]);
}

#[test]
fn test_long_document_snippets_are_bounded() {
    let filler = "lorem ipsum dolor sit amet ".repeat(40);
    let content = format!("{}needle ONE {}needle TWO {}", filler, filler, filler);
    let docs = make_docs(&[&content]);
    let config = SearchConfig::default();

    let results = search_documents(&docs, "needle", &config);
    let snippets = &results[0].snippets;

    assert_eq!(results[0].match_count, 2);
    assert_eq!(snippets.len(), 2);
    assert!(snippets[0].contains("needle ONE"));
    assert!(snippets[1].contains("needle TWO"));
    let max = config.snippet_length + 2 * config.snippet_padding + 6;
    for snippet in snippets {
        assert!(snippet.starts_with("...") && snippet.ends_with("..."));
        assert!(snippet.chars().count() <= max, "snippet too long: {}", snippet);
    }
}

#[test]
fn test_periodic_filler_collapses_identical_windows() {
    // Same text around both matches: the windows trim to one string.
    let filler = "lorem ipsum dolor sit amet ".repeat(40);
    let content = format!("{}needle{}needle{}", filler, filler, filler);
    let docs = make_docs(&[&content]);

    let results = search_documents(&docs, "needle", &SearchConfig::default());
    assert_eq!(results[0].match_count, 2);
    assert_eq!(results[0].snippets.len(), 1);
}

#[test]
fn test_snippets_at_most_three() {
    let filler = "x".repeat(400);
    let content = (0..6).map(|i| format!("{}key{}", filler, i)).collect::<String>();
    let docs = make_docs(&[&content]);

    let results = search_documents(&docs, "key", &SearchConfig::default());
    assert_eq!(results[0].match_count, 6);
    assert_eq!(results[0].snippets.len(), 3);
}

#[test]
fn test_configured_snippet_count() {
    let filler = "x".repeat(400);
    let content = (0..6).map(|i| format!("{}key{}", filler, i)).collect::<String>();
    let docs = make_docs(&[&content]);
    let config = SearchConfig {
        max_snippets: 5,
        ..SearchConfig::default()
    };

    let results = search_documents(&docs, "key", &config);
    assert_eq!(results[0].snippets.len(), 5);
}

#[test]
fn test_repeated_query_term_counted_once() {
    let plain = search_documents(&fruit_docs(), "apple", &SearchConfig::default());
    let doubled = search_documents(&fruit_docs(), "apple apple", &SearchConfig::default());
    assert_eq!(plain, doubled);

    assert_eq!(doubled.len(), 1);
    assert_eq!(doubled[0].match_count, 2);
    assert_eq!(doubled[0].relevance_score, 50.0);

    let mixed = search_documents(&fruit_docs(), "apple APPLE banana", &SearchConfig::default());
    assert_eq!(mixed[0].match_count, 3);
    assert_eq!(mixed[0].relevance_score, 37.5);
}

#[test]
fn test_unicode_content() {
    let docs = make_docs(&["Ünïcödé text: ÜNÏCÖDÉ and über"]);
    let results = search_documents(&docs, "ünïcödé", &SearchConfig::default());
    assert_eq!(results[0].match_count, 2);
    assert!(results[0].snippets[0].contains("Ünïcödé"));
}
