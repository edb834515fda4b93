// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! The defaults are what result previews have always looked like: 150-character
//! snippets, 20 characters of padding on each side, at most 3 snippets per
//! result. Change them and result previews change; scores never do.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Default target snippet length in characters.
pub const DEFAULT_SNIPPET_LENGTH: usize = 150;

/// Extra context added on both sides of a snippet window.
pub const DEFAULT_SNIPPET_PADDING: usize = 20;

/// Maximum number of match offsets considered for snippets.
pub const DEFAULT_MAX_SNIPPETS: usize = 3;

/// Opening and closing markup wrapped around highlighted terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightMarkup {
    pub open: String,
    pub close: String,
}

impl HighlightMarkup {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Bold yellow-background ANSI sequences for terminal output.
    pub fn ansi() -> Self {
        Self::new("\x1b[1;30;43m", "\x1b[0m")
    }
}

impl Default for HighlightMarkup {
    fn default() -> Self {
        Self::new(
            r#"<mark style="background-color: #fef08a; padding: 0 2px; border-radius: 2px;">"#,
            "</mark>",
        )
    }
}

/// Tunables for snippet extraction and highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub snippet_length: usize,
    pub snippet_padding: usize,
    pub max_snippets: usize,
    pub markup: HighlightMarkup,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            snippet_length: DEFAULT_SNIPPET_LENGTH,
            snippet_padding: DEFAULT_SNIPPET_PADDING,
            max_snippets: DEFAULT_MAX_SNIPPETS,
            markup: HighlightMarkup::default(),
        }
    }
}

impl SearchConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snippet_length == 0 {
            return Err(ConfigError::Invalid(
                "snippetLength must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_snippet_length(mut self, snippet_length: usize) -> Self {
        self.snippet_length = snippet_length;
        self
    }

    pub fn with_markup(mut self, markup: HighlightMarkup) -> Self {
        self.markup = markup;
        self
    }
}
