//! Narrowing a search by tag names.

use crate::common::{engine, make_tag, office_docs};

fn ids(results: &[docsift::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.doc_id.as_str()).collect()
}

#[test]
fn test_empty_filter_searches_everything() {
    let engine = engine();
    let results = engine.search(&office_docs(), "revenue", &[]).unwrap();
    assert_eq!(ids(&results), vec!["q1", "q2", "nda"]);
}

#[test]
fn test_untagged_document_excluded() {
    let engine = engine();
    let finance = engine.tags().create_tag("finance", None);
    engine.tags().tag("q1", finance).unwrap();

    let results = engine
        .search(&office_docs(), "revenue", &["finance".to_string()])
        .unwrap();
    assert_eq!(ids(&results), vec!["q1"], "q2 and nda match but carry no tags");
}

#[test]
fn test_filter_is_or_across_names() {
    let engine = engine();
    let tags = engine.tags();
    tags.tag("q2", tags.create_tag("finance", None)).unwrap();
    tags.tag("nda", tags.create_tag("legal", Some("#ef4444"))).unwrap();
    tags.tag("memo", tags.create_tag("legal", None)).unwrap();

    let filter = vec!["finance".to_string(), "legal".to_string()];
    let results = engine.search(&office_docs(), "revenue", &filter).unwrap();
    assert_eq!(ids(&results), vec!["q2", "nda"]);
}

#[test]
fn test_filter_matches_names_not_ids() {
    let engine = engine();
    engine.tags().tag("q1", make_tag("finance", "reports")).unwrap();

    let by_id = engine
        .search(&office_docs(), "revenue", &["finance".to_string()])
        .unwrap();
    assert!(by_id.is_empty());

    let by_name = engine
        .search(&office_docs(), "revenue", &["reports".to_string()])
        .unwrap();
    assert_eq!(ids(&by_name), vec!["q1"]);
}

#[test]
fn test_filter_names_are_case_sensitive() {
    let engine = engine();
    engine.tags().tag("q1", make_tag("t1", "Finance")).unwrap();

    let results = engine
        .search(&office_docs(), "revenue", &["finance".to_string()])
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_tagged_document_still_needs_a_match() {
    let engine = engine();
    engine.tags().tag("memo", make_tag("t1", "finance")).unwrap();

    let results = engine
        .search(&office_docs(), "revenue", &["finance".to_string()])
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_untag_removes_from_filtered_results() {
    let engine = engine();
    let tag = make_tag("t1", "finance");
    engine.tags().tag("q1", tag.clone()).unwrap();
    engine.tags().tag("q2", tag).unwrap();
    assert!(engine.tags().untag("q1", "t1").unwrap());

    let results = engine
        .search(&office_docs(), "revenue", &["finance".to_string()])
        .unwrap();
    assert_eq!(ids(&results), vec!["q2"]);
}
