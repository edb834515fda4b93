// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: descending score, collection order on ties.
//!
//! `sort_by` is stable, so the tie-break is free as long as results arrive in
//! collection order. Both the sequential and the parallel search paths
//! guarantee that before calling [`rank_results`].

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two results for ranking. Higher score sorts first.
///
/// Uses `total_cmp` so the order is total even for NaN, which the scorer
/// never produces but a hand-built result could.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.relevance_score.total_cmp(&a.relevance_score)
}

/// Sort results in place, best first, stable on ties.
pub fn rank_results(results: &mut [SearchResult]) {
    results.sort_by(compare_results);
}
