//! Top-level module for the n-gram frequency system.
//!
//! This module provides an order-preserving frequency index over the
//! n-grams of a token sequence, including:
//! - The public frequency index and its queries (`NGramIndex`)
//! - Internal occurrence counting (`OrderedCounts`)
//! - Internal per-prefix state management (`State`)

/// Frequency index of a fixed order (`n >= 1`).
///
/// Handles construction from token sequences or raw text, and the query
/// operations: enumeration, frequency filtering, most-common lookup
/// and grouping by count.
pub mod ngram_index;

/// Internal order-preserving occurrence counter.
///
/// Pairs a hash-based lookup with an insertion-ordered key list.
/// This module is not exposed publicly.
mod counts;

/// Internal representation of a single prefix state.
///
/// Tracks continuation tokens and their occurrence counts.
/// This module is not exposed publicly.
mod state;
