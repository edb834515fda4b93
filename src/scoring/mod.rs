// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! The score is deliberately crude - match density per query term, scaled and
//! capped. No TF-IDF, no length normalization. Ranking sorts by that score and
//! falls back to collection order, so equal scores never shuffle.

mod core;
pub mod ranking;

pub use self::core::*;
