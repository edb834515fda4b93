// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance formula.
//!
//! ```text
//! score = min(100, (match_count / term_count) * 25)
//! ```
//!
//! Four matches per query term saturates the score. Both constants are part
//! of the observable behavior: result order and displayed scores depend on
//! them, so they stay exactly as they are.

/// Points awarded per match, per query term.
pub const POINTS_PER_MATCH: f64 = 25.0;

/// Upper bound of the relevance score.
pub const MAX_RELEVANCE: f64 = 100.0;

/// Relevance for a document with `match_count` matches over `term_count`
/// distinct query terms.
///
/// Monotonically non-decreasing in `match_count` and clamped to
/// [`MAX_RELEVANCE`]. A `term_count` of zero scores zero; the engine never
/// gets that far with an empty query.
pub fn relevance_score(match_count: usize, term_count: usize) -> f64 {
    if term_count == 0 {
        return 0.0;
    }
    let density = match_count as f64 / term_count as f64;
    (density * POINTS_PER_MATCH).min(MAX_RELEVANCE)
}
