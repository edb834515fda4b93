//! Result ordering: descending score, ties in collection order.

use crate::common::make_docs;
use docsift::scoring::ranking::rank_results;
use docsift::{search_documents, SearchConfig, SearchResult};

fn result(doc_id: &str, score: f64) -> SearchResult {
    SearchResult {
        doc_id: doc_id.to_string(),
        doc_name: doc_id.to_string(),
        match_count: 1,
        snippets: Vec::new(),
        relevance_score: score,
    }
}

#[test]
fn test_scores_non_increasing() {
    let docs = make_docs(&["fox", "fox fox fox", "fox fox", "no match", "fox fox fox fox fox"]);
    let results = search_documents(&docs, "fox", &SearchConfig::default());

    assert_eq!(results.len(), 4);
    for pair in results.windows(2) {
        assert!(
            pair[0].relevance_score >= pair[1].relevance_score,
            "{} ({}) ranked above {} ({})",
            pair[0].doc_id,
            pair[0].relevance_score,
            pair[1].doc_id,
            pair[1].relevance_score
        );
    }
}

#[test]
fn test_ties_keep_collection_order() {
    // Every document scores 100, so ranking must not reorder them.
    let docs = make_docs(&[
        "cat cat cat cat",
        "cat cat cat cat cat",
        "cat cat cat cat cat cat",
        "cat cat cat cat",
    ]);
    let results = search_documents(&docs, "cat", &SearchConfig::default());

    let ids: Vec<&str> = results.iter().map(|r| r.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3"]);
}

#[test]
fn test_equal_scores_below_cap_keep_order() {
    let docs = make_docs(&["one dog", "no match", "dog two", "dog dog", "a dog"]);
    let results = search_documents(&docs, "dog", &SearchConfig::default());

    let ids: Vec<&str> = results.iter().map(|r| r.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["3", "0", "2", "4"]);
}

#[test]
fn test_rank_results_is_stable() {
    let mut results = vec![
        result("a", 25.0),
        result("b", 50.0),
        result("c", 25.0),
        result("d", 100.0),
        result("e", 50.0),
    ];
    rank_results(&mut results);

    let ids: Vec<&str> = results.iter().map(|r| r.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["d", "b", "e", "a", "c"]);
}

#[test]
fn test_multi_term_density_ranks_higher() {
    let docs = make_docs(&["red", "red blue", "red blue red blue"]);
    let results = search_documents(&docs, "red blue", &SearchConfig::default());

    assert_eq!(results[0].doc_id, "2");
    assert_eq!(results[0].relevance_score, 50.0);
    assert_eq!(results[1].doc_id, "1");
    assert_eq!(results[1].relevance_score, 25.0);
    assert_eq!(results[2].doc_id, "0");
    assert_eq!(results[2].relevance_score, 12.5);
}
