// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{TimeZone, Utc};

use crate::types::{Document, Tag};

/// Create a plain-text document with a fixed upload date.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, name: &str, content: &str) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        content: content.to_string(),
        size: content.len() as u64,
        doc_type: "text/plain".to_string(),
        upload_date: Utc.timestamp_opt(1_704_067_200, 0).single().unwrap_or_default(),
    }
}

/// Create documents named after their ids from a list of contents.
pub fn make_docs(contents: &[&str]) -> Vec<Document> {
    contents
        .iter()
        .enumerate()
        .map(|(i, content)| {
            let id = i.to_string();
            make_doc(&id, &format!("Doc {}", i), content)
        })
        .collect()
}

/// Create a tag with a fixed id, for tests that need predictable ids.
pub fn make_tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
        color: "#3b82f6".to_string(),
    }
}
