// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate plaintext scoring.
//!
//! Two independent statistics drive the two crackers:
//! - [`frequency_score`]: weighted letter-frequency correlation, higher is
//!   more English-like. Used by the Caesar search.
//! - [`chi_square`]: goodness-of-fit against the expected distribution,
//!   lower is more English-like. Used by the Vigenère search, memoized
//!   through [`ScoreCache`].

pub mod cache;
pub mod scorer;

pub use cache::{ScoreCache, MAX_CACHE_ENTRIES};
pub use scorer::{chi_square, frequency_score};
