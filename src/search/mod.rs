// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: tag filter, match, score, snip, rank.
//!
//! For each document in collection order: drop it if a tag filter is given
//! and none of its tags is named in the filter, count matches for every query
//! term, drop it if there are none, otherwise score it and cut snippets. The
//! survivors are sorted by score, ties staying in collection order.
//!
//! A query with no terms returns nothing at all, before the tag store or
//! the matcher is touched. It does not mean "match everything".
//!
//! With the `parallel` feature, matching fans out across documents with
//! rayon. The tag filter still runs first and sequentially, and rayon's
//! ordered collect keeps results in collection order, so both paths return
//! identical output.

pub mod highlight;
pub mod matcher;
pub mod query;
pub mod snippet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::error::StoreError;
use crate::scoring::ranking::rank_results;
use crate::scoring::relevance_score;
use crate::tags::{KeyValueStore, TagStore};
use crate::types::{Document, SearchResult};

use highlight::Highlighter;
use matcher::scan_document;
use query::query_terms;
use snippet::extract_snippets;

/// Match, score and snip one document. `None` if nothing matched.
fn score_document(doc: &Document, terms: &[String], config: &SearchConfig) -> Option<SearchResult> {
    let matches = scan_document(&doc.content, terms);
    if matches.match_count == 0 {
        tracing::trace!(doc_id = %doc.id, "no matches");
        return None;
    }

    Some(SearchResult {
        doc_id: doc.id.clone(),
        doc_name: doc.name.clone(),
        match_count: matches.match_count,
        snippets: extract_snippets(&doc.content, &matches.offsets, config),
        relevance_score: relevance_score(matches.match_count, terms.len()),
    })
}

#[cfg(feature = "parallel")]
fn score_candidates(
    candidates: &[&Document],
    terms: &[String],
    config: &SearchConfig,
) -> Vec<SearchResult> {
    candidates
        .par_iter()
        .filter_map(|doc| score_document(doc, terms, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_candidates(
    candidates: &[&Document],
    terms: &[String],
    config: &SearchConfig,
) -> Vec<SearchResult> {
    candidates
        .iter()
        .filter_map(|doc| score_document(doc, terms, config))
        .collect()
}

fn rank(candidates: &[&Document], terms: &[String], config: &SearchConfig) -> Vec<SearchResult> {
    let mut results = score_candidates(candidates, terms, config);
    rank_results(&mut results);
    tracing::debug!(
        terms = terms.len(),
        candidates = candidates.len(),
        results = results.len(),
        "search complete"
    );
    results
}

/// Search a collection without a tag filter.
///
/// # Example
///
/// ```ignore
/// let docs = vec![Document::new("1", "a", "apple banana apple")];
/// let results = search_documents(&docs, "apple", &SearchConfig::default());
/// assert_eq!(results[0].relevance_score, 50.0);
/// ```
pub fn search_documents(
    documents: &[Document],
    query: &str,
    config: &SearchConfig,
) -> Vec<SearchResult> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<&Document> = documents.iter().collect();
    rank(&candidates, &terms, config)
}

/// The search engine: a tag store plus the config for snippets and markup.
pub struct SearchEngine<S> {
    tags: TagStore<S>,
    config: SearchConfig,
}

impl<S: KeyValueStore> SearchEngine<S> {
    pub fn new(tags: TagStore<S>) -> Self {
        Self::with_config(tags, SearchConfig::default())
    }

    pub fn with_config(tags: TagStore<S>, config: SearchConfig) -> Self {
        Self { tags, config }
    }

    pub fn tags(&self) -> &TagStore<S> {
        &self.tags
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// A highlighter using this engine's markup.
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(self.config.markup.clone())
    }

    /// Search `documents` for `query`, keeping only documents that carry at
    /// least one tag named in `tag_filter` (if it's non-empty).
    ///
    /// Fails only if tag records can't be read.
    pub fn search(
        &self,
        documents: &[Document],
        query: &str,
        tag_filter: &[String],
    ) -> Result<Vec<SearchResult>, StoreError> {
        let terms = query_terms(query);
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut candidates: Vec<&Document> = Vec::with_capacity(documents.len());
        for doc in documents {
            if !tag_filter.is_empty() && !self.tags.has_any_tag_named(&doc.id, tag_filter)? {
                tracing::trace!(doc_id = %doc.id, "excluded by tag filter");
                continue;
            }
            candidates.push(doc);
        }

        Ok(rank(&candidates, &terms, &self.config))
    }
}
