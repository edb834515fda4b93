// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive substring matching.
//!
//! Matching is plain substring search over case-folded text: `cat` matches
//! inside `category`. Offsets are char offsets, and because folding never
//! changes the char count they index the original text directly.
//!
//! After a match the scan resumes right after the match end, not one char
//! past the match start. So `aa` in `aaaa` is two matches, not three. This is
//! the same thing a global regex scan does, and the easy one to get wrong.

use super::query::fold_char;

/// Case-folded text, stored as chars so offsets are char offsets.
#[derive(Debug, Clone)]
pub struct FoldedText {
    chars: Vec<char>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().map(fold_char).collect(),
        }
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Char offsets of every non-overlapping occurrence of `term`.
    ///
    /// `term` must already be folded. An empty term matches nothing.
    pub fn find_all(&self, term: &str) -> Vec<usize> {
        let needle: Vec<char> = term.chars().collect();
        let m = needle.len();
        let n = self.chars.len();
        let mut offsets = Vec::new();

        if m == 0 || m > n {
            return offsets;
        }

        let mut i = 0;
        while i + m <= n {
            if self.chars[i] == needle[0] && self.chars[i..i + m] == needle[..] {
                offsets.push(i);
                i += m;
            } else {
                i += 1;
            }
        }
        offsets
    }
}

/// Every case-insensitive occurrence of `term` in `content`, as char offsets.
pub fn match_all(content: &str, term: &str) -> Vec<usize> {
    FoldedText::new(content).find_all(&super::query::fold_case(term))
}

/// Matches for all query terms against one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMatches {
    /// Sum of occurrence counts over all terms.
    pub match_count: usize,
    /// Offsets grouped by term (query order), left to right within a term.
    pub offsets: Vec<usize>,
}

/// Run every term against `content`.
///
/// Terms are expected to be folded already (as `parse_query` returns them).
pub fn scan_document(content: &str, terms: &[String]) -> DocumentMatches {
    let folded = FoldedText::new(content);
    let mut matches = DocumentMatches::default();

    for term in terms {
        let found = folded.find_all(term);
        matches.match_count += found.len();
        matches.offsets.extend(found);
    }

    matches
}
