// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization and case folding.
//!
//! A query is split on runs of whitespace and each piece is lower-cased.
//! That's it: no stemming, no punctuation stripping. `"invoice,"` is a term
//! and only matches text that literally contains `invoice,`.
//!
//! Case folding is per code point. A character whose lowercase form is more
//! than one code point (`İ` → `i̇`) is left alone, so a folded string always
//! has exactly as many chars as the original and char offsets computed on
//! one are valid on the other.

/// Fold a single character, keeping the char count stable.
#[inline]
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold a string to lowercase without changing its char count.
pub fn fold_case(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Parse a query string into lowercase, whitespace-separated terms.
///
/// Repeats are kept. An empty or whitespace-only query gives no terms,
/// which callers treat as "no search".
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("  Invoice   PAYMENT ");
/// assert_eq!(terms, vec!["invoice", "payment"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .filter(|p| !p.is_empty())
        .map(fold_case)
        .collect()
}

/// Drop repeated terms, keeping the first occurrence order.
pub fn distinct_terms(terms: Vec<String>) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        if !distinct.contains(&term) {
            distinct.push(term);
        }
    }
    distinct
}

/// Parse a query and de-duplicate its terms in one go.
pub fn query_terms(query: &str) -> Vec<String> {
    distinct_terms(parse_query(query))
}
