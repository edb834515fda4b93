// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types that flow through a search.
//!
//! Documents come in from whoever ingested them, tags come out of the tag
//! store, and search results are built fresh on every call. None of these
//! are mutated by the engine - it reads documents and produces results.
//!
//! # Invariants
//!
//! - **Document**: `id` is unique within a collection. `content` is plain text.
//! - **Tag**: `id` is unique. Within one document's tag list no id repeats.
//! - **SearchResult**: `match_count >= 1` and `0.0 <= relevance_score <= 100.0`.
//!   A document with zero matches never becomes a result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document in the searchable collection.
///
/// The caller owns the collection. `content` is already-extracted plain text;
/// the engine never looks at `size`, `doc_type` or `upload_date`, they ride
/// along so result renderers don't need a second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub content: String,
    /// Size of the original upload in bytes.
    #[serde(default)]
    pub size: u64,
    /// MIME type or file extension.
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default = "Utc::now")]
    pub upload_date: DateTime<Utc>,
}

impl Document {
    /// Build a plain-text document, deriving `size` from the content.
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            id: id.into(),
            name: name.into(),
            size: content.len() as u64,
            content,
            doc_type: "text/plain".to_string(),
            upload_date: Utc::now(),
        }
    }
}

/// A user-defined label attachable to any number of documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// Hex (`#3b82f6`) or symbolic (`blue`) color.
    pub color: String,
}

/// One ranked hit: a document with at least one match.
///
/// Snippets are in discovery order and never repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub doc_id: String,
    pub doc_name: String,
    pub match_count: usize,
    pub snippets: Vec<String>,
    pub relevance_score: f64,
}
