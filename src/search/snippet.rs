// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction: turning match offsets into preview text.
//!
//! Only the first few offsets are looked at, in the order the matcher found
//! them (grouped by term, then left to right). Each one gets a window of
//! `snippet_length` chars centered on it, widened by `snippet_padding` on
//! both sides and clamped to the document. The window is trimmed and wrapped
//! in ellipses.
//!
//! Two windows that trim to the same text collapse into one snippet. A window
//! that trims to nothing is dropped, and the slot it used is not refilled from
//! later offsets - so a result can carry fewer snippets than it has matches
//! even when there are plenty of matches.

use crate::config::SearchConfig;

/// Char range `[start, end)` of the snippet window around `offset`.
pub fn snippet_window(offset: usize, text_len: usize, config: &SearchConfig) -> (usize, usize) {
    let half = config.snippet_length / 2;
    let before = half.saturating_add(config.snippet_padding);
    let after = (config.snippet_length - half).saturating_add(config.snippet_padding);
    let start = offset.saturating_sub(before).min(text_len);
    let end = offset.saturating_add(after).min(text_len);
    (start, end)
}

/// Build the preview snippets for one document.
///
/// `offsets` are char offsets into `content`, as produced by
/// [`scan_document`](super::matcher::scan_document).
pub fn extract_snippets(content: &str, offsets: &[usize], config: &SearchConfig) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    let mut snippets: Vec<String> = Vec::new();

    for &offset in offsets.iter().take(config.max_snippets) {
        let (start, end) = snippet_window(offset, chars.len(), config);
        let window: String = chars[start..end].iter().collect();
        let trimmed = window.trim();
        if trimmed.is_empty() {
            continue;
        }

        let snippet = format!("...{}...", trimmed);
        if !snippets.contains(&snippet) {
            snippets.push(snippet);
        }
    }

    snippets
}
