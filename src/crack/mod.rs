// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The codebreaking engine.
//!
//! Both crackers share the same shape: enumerate candidate keys in a
//! deterministic order, decode the ciphertext with each via the cipher
//! transforms, score the decode, and keep the single best candidate seen so
//! far. Replacement requires strict improvement, so on exact ties the
//! earliest-enumerated key wins.
//!
//! A [`SearchContext`] owns the mutable state of exactly one cracking run:
//! the chi-square score cache and the call-count statistics. Nothing is
//! shared across runs, and nothing crosses thread boundaries.

pub mod caesar;
pub mod statistics;
pub mod vigenere;

pub use caesar::CaesarCrack;
pub use statistics::{Counters, Statistics};
pub use vigenere::{VigenereCrack, GOOD_ENOUGH_THRESHOLD, MAX_KEY_LENGTH};

use crate::error::CrackError;
use crate::score::ScoreCache;

/// Per-run mutable search state (Tier 2: DYNAMIC).
///
/// Created at the start of one cracking invocation and discarded at the end.
/// The Caesar search uses only the statistics; the Vigenère search also uses
/// the score cache.
#[derive(Debug, Default)]
pub struct SearchContext {
    /// Call-count statistics (decodes, scores, cache hits).
    pub statistics: Statistics,
    /// Chi-square memo for repeated candidate plaintexts.
    pub cache: ScoreCache,
}

impl SearchContext {
    pub fn new() -> Self {
        SearchContext::default()
    }
}

/// Crack a Caesar ciphertext with a fresh [`SearchContext`].
///
/// See [`caesar::crack`] for the algorithm and conventions.
pub fn crack_caesar(cipher_text: &str) -> CaesarCrack {
    let mut ctx = SearchContext::new();
    caesar::crack(&mut ctx, cipher_text)
}

/// Crack a Vigenère ciphertext with a fresh [`SearchContext`], searching key
/// lengths `1..=max_key_length`.
///
/// See [`vigenere::crack`] for the algorithm and conventions.
pub fn crack_vigenere(
    cipher_text: &str,
    max_key_length: usize,
) -> Result<VigenereCrack, CrackError> {
    let mut ctx = SearchContext::new();
    vigenere::crack(&mut ctx, cipher_text, max_key_length)
}
