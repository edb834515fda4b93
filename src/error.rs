// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Searching itself can't fail: bad queries give empty results, empty documents
//! give zero matches. What can fail is everything touching the outside world -
//! the key-value medium behind the tag store, corpus files, config files.
//! Those errors are surfaced to the caller as-is. No retries happen here.

use std::path::PathBuf;
use thiserror::Error;

/// Failure in the key-value medium backing the tag store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt record under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("store quota exceeded: {requested} bytes requested, limit is {limit}")]
    QuotaExceeded { limit: usize, requested: usize },
}

/// Failure loading a document collection.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate document id '{0}'")]
    DuplicateId(String),
}

/// Failure loading or validating a search configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
