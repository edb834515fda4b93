// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword highlighting for snippets and other display text.
//!
//! Terms are applied one after another, each pass scanning the output of the
//! previous one. That means a later term can match inside markup inserted by
//! an earlier term, or re-wrap text that's already wrapped. Query `ab a`
//! against `ab` gives `[[a]b]` with `[`/`]` markup, and a repeated term gets
//! a pass per occurrence in the query. The output is a string
//! for markup renderers; anything that needs structured runs should use
//! [`highlight_spans`] instead of parsing the markup back out.

use crate::config::HighlightMarkup;

use super::matcher::FoldedText;
use super::query::{parse_query, query_terms};

/// A highlighted char range `[start, end)` in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// Wraps query-term occurrences in configurable markup.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    markup: HighlightMarkup,
}

impl Highlighter {
    pub fn new(markup: HighlightMarkup) -> Self {
        Self { markup }
    }

    pub fn markup(&self) -> &HighlightMarkup {
        &self.markup
    }

    /// Wrap every case-insensitive occurrence of every query term, one pass
    /// per term as written (`cat cat` wraps twice).
    ///
    /// An empty query returns `text` unchanged.
    pub fn highlight(&self, text: &str, query: &str) -> String {
        let terms = parse_query(query);
        if terms.is_empty() {
            return text.to_string();
        }

        terms
            .iter()
            .fold(text.to_string(), |current, term| self.wrap_term(&current, term))
    }

    /// One pass: wrap all occurrences of a single folded term, keeping the
    /// original casing of the matched text.
    fn wrap_term(&self, text: &str, term: &str) -> String {
        let offsets = FoldedText::new(text).find_all(term);
        if offsets.is_empty() {
            return text.to_string();
        }

        let term_len = term.chars().count();
        let chars: Vec<char> = text.chars().collect();
        let extra = offsets.len() * (self.markup.open.len() + self.markup.close.len());
        let mut output = String::with_capacity(text.len() + extra);

        let mut cursor = 0;
        for offset in offsets {
            output.extend(&chars[cursor..offset]);
            output.push_str(&self.markup.open);
            output.extend(&chars[offset..offset + term_len]);
            output.push_str(&self.markup.close);
            cursor = offset + term_len;
        }
        output.extend(&chars[cursor..]);
        output
    }
}

/// Highlight with the default inline-style `<mark>` markup.
pub fn highlight(text: &str, query: &str) -> String {
    Highlighter::default().highlight(text, query)
}

/// Char ranges of query-term occurrences in `text`, sorted and merged.
///
/// Unlike [`Highlighter::highlight`] this looks at the original text only,
/// so overlapping terms produce one merged span rather than nested markup.
pub fn highlight_spans(text: &str, query: &str) -> Vec<HighlightSpan> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let folded = FoldedText::new(text);
    let mut spans: Vec<HighlightSpan> = terms
        .iter()
        .flat_map(|term| {
            let len = term.chars().count();
            folded
                .find_all(term)
                .into_iter()
                .map(move |start| HighlightSpan {
                    start,
                    end: start + len,
                })
        })
        .collect();
    spans.sort_unstable();

    let mut merged: Vec<HighlightSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}
