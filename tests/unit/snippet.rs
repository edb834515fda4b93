//! Snippet extraction through the public API.

use docsift::search::snippet::snippet_window;
use docsift::{extract_snippets, scan_document, SearchConfig};

fn terms(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_window_is_centered() {
    let config = SearchConfig::default();
    let (start, end) = snippet_window(1000, 5000, &config);
    assert_eq!(end - start, config.snippet_length + 2 * config.snippet_padding);
    assert_eq!(1000 - start, config.snippet_length / 2 + config.snippet_padding);
}

#[test]
fn test_offsets_from_first_term_come_first() {
    let gap = "-".repeat(300);
    let content = format!("{}beta{}alpha{}alpha", gap, gap, gap);
    let matches = scan_document(&content, &terms(&["alpha", "beta"]));
    let config = SearchConfig {
        max_snippets: 1,
        ..SearchConfig::default()
    };

    let snippets = extract_snippets(&content, &matches.offsets, &config);
    assert_eq!(snippets.len(), 1);
    assert!(snippets[0].contains("alpha"));
    assert!(!snippets[0].contains("beta"));
}

#[test]
fn test_snippets_unique() {
    let content = "spam spam spam spam";
    let matches = scan_document(content, &terms(&["spam"]));
    assert_eq!(matches.match_count, 4);

    let snippets = extract_snippets(content, &matches.offsets, &SearchConfig::default());
    assert_eq!(snippets, vec!["...spam spam spam spam..."]);
}

#[test]
fn test_trimmed_inside_ellipses() {
    let content = "\n\n   padded   \n";
    let matches = scan_document(content, &terms(&["padded"]));
    let snippets = extract_snippets(content, &matches.offsets, &SearchConfig::default());
    assert_eq!(snippets, vec!["...padded..."]);
}

#[test]
fn test_underfill_is_kept() {
    let config = SearchConfig {
        snippet_length: 2,
        snippet_padding: 0,
        ..SearchConfig::default()
    };
    // The second offset sits in blank space and is dropped; the fourth is
    // never considered.
    let content = "a          b          c";
    let snippets = extract_snippets(content, &[0, 5, 11, 22], &config);
    assert_eq!(snippets, vec!["...a...", "...b..."]);
}

#[test]
fn test_oversized_padding_in_config() {
    let config: SearchConfig =
        serde_json::from_str(r#"{"snippetPadding": 18446744073709551615}"#).unwrap();
    assert_eq!(config.snippet_padding, usize::MAX);

    let docs = docsift::testing::make_docs(&["alpha beta gamma"]);
    let results = docsift::search_documents(&docs, "beta", &config);
    assert_eq!(results[0].snippets, vec!["...alpha beta gamma..."]);
}
