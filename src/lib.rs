// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory document search with snippets, highlighting and tag filters.
//!
//! Give it a collection of plain-text documents and a query; get back the
//! documents that contain the query terms, ranked by match density, each with
//! a few preview snippets. Tags attached through the [`TagStore`] can narrow
//! the search to documents carrying at least one of a set of tag names.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌──────────────┐   ┌─────────────┐
//! │   query     │──▶│   matcher    │──▶│   scoring    │──▶│   ranking   │
//! │ (tokenize)  │   │ (offsets,    │   │ (min(100,    │   │ (stable     │
//! │             │   │  counts)     │   │  m/t * 25))  │   │  desc sort) │
//! └─────────────┘   └──────┬───────┘   └──────────────┘   └─────────────┘
//!                          │
//!                          ▼
//!                   ┌──────────────┐       ┌──────────────┐
//!                   │   snippet    │       │  highlight   │ (called by
//!                   │ (≤3 windows) │       │  (markup)    │  renderers)
//!                   └──────────────┘       └──────────────┘
//!
//! ┌─────────────┐   ┌────────────────────────────┐
//! │  TagStore   │──▶│ KeyValueStore (Memory/File)│
//! └─────────────┘   └────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use docsift::{Document, MemoryStore, SearchEngine, TagStore};
//!
//! let docs = vec![Document::new("1", "a.txt", "apple banana apple")];
//! let engine = SearchEngine::new(TagStore::new(MemoryStore::new()));
//!
//! let results = engine.search(&docs, "apple", &[])?;
//! assert_eq!(results[0].match_count, 2);
//!
//! let marked = engine.highlighter().highlight(&results[0].snippets[0], "apple");
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod scoring;
pub mod search;
pub mod tags;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::{HighlightMarkup, SearchConfig};
pub use error::{ConfigError, CorpusError, StoreError};
pub use scoring::relevance_score;
pub use search::highlight::{highlight, highlight_spans, HighlightSpan, Highlighter};
pub use search::matcher::{match_all, scan_document, DocumentMatches};
pub use search::query::parse_query;
pub use search::snippet::extract_snippets;
pub use search::{search_documents, SearchEngine};
pub use tags::{FileStore, KeyValueStore, MemoryStore, TagStore};
pub use types::{Document, SearchResult, Tag};
