//! N-gram frequency analysis library.
//!
//! This crate provides a modular n-gram frequency system including:
//! - A tokenizer with configurable case and punctuation policies
//! - Order-preserving frequency indexes for n-grams of any order
//! - Query operations over an index (enumeration, frequency filtering,
//!   most-common lookup, grouping by count)
//! - Internal utilities for I/O and path handling
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core frequency index and query operations.
///
/// This module exposes the high-level index interface while keeping
/// internal counting structures private.
pub mod index;

/// Text tokenization (word boundaries, case and punctuation policies).
pub mod tokenizer;

/// I/O utilities (corpus loading, path helpers).
///
/// Exposed for the surrounding binaries.
pub mod io;
