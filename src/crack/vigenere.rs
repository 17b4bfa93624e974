// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vigenère exhaustive key search with memoized scoring.
//!
//! # Algorithm
//!
//! Key lengths are tried ascending from 1 to `max_key_length`. Within one
//! length, every key over the 26-letter alphabet is enumerated in
//! lexicographic order (`A..Z` at each position) by a fixed-size odometer —
//! a full Cartesian enumeration, not a pruned backtracking search.
//!
//! Each candidate key decodes the ciphertext; the decode's chi-square is
//! answered from the score cache when the same plaintext has been seen
//! before (keys like `AA` decode identically to `A`), otherwise computed
//! fresh and inserted. A strictly lower chi-square replaces the running
//! best.
//!
//! A chi-square below [`GOOD_ENOUGH_THRESHOLD`] stops the whole search at
//! that key, signalled by [`SearchOutcome::Stop`] returned up the loop.
//! Exploration order therefore matters: the accepted key is the first one
//! under the threshold in enumeration order, not necessarily the best of
//! its length. If the threshold never triggers, the enumeration exhausts
//! `26^1 + 26^2 + … + 26^max_key_length` keys and the global best wins.

use crate::cipher::{self, VigenereKey};
use crate::crack::{Counters, SearchContext};
use crate::error::CrackError;
use crate::language::ALPHABET_SIZE;
use crate::score;
use tracing::debug;

/// Longest key length the search will enumerate.
pub const MAX_KEY_LENGTH: usize = 10;

/// Shortest key length the search will enumerate.
pub const MIN_KEY_LENGTH: usize = 1;

/// Chi-square cutoff below which a decode is accepted as correct and the
/// search stops early.
pub const GOOD_ENOUGH_THRESHOLD: f64 = 100.0;

/// Result of one Vigenère cracking run.
#[derive(Debug, Clone, PartialEq)]
pub struct VigenereCrack {
    /// The winning key.
    pub key: VigenereKey,
    /// The winning decode.
    pub plaintext: String,
    /// Chi-square of the winning decode (lower is better).
    pub chi_square: f64,
}

/// Outcome of scoring one candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchOutcome {
    /// Keep enumerating.
    Continue,
    /// A good-enough decode was found; unwind the whole search.
    Stop,
}

/// Fixed-size odometer enumerating all keys of one length in lexicographic
/// order, starting at `AA…A`.
///
/// Replaces per-position recursion with an explicit digit array: advancing
/// increments the rightmost digit and carries leftward, so the enumeration
/// order matches building keys left-to-right with `A..Z` at each position.
#[derive(Debug)]
struct KeyOdometer {
    digits: [u8; MAX_KEY_LENGTH],
    length: usize,
}

impl KeyOdometer {
    fn new(length: usize) -> Self {
        debug_assert!((MIN_KEY_LENGTH..=MAX_KEY_LENGTH).contains(&length));
        KeyOdometer {
            digits: [0; MAX_KEY_LENGTH],
            length,
        }
    }

    /// The key at the current odometer position.
    fn key(&self) -> VigenereKey {
        VigenereKey::from_shifts(&self.digits[..self.length])
    }

    /// Advance to the lexicographic successor.
    ///
    /// Returns false when the odometer wraps past `ZZ…Z`, meaning the
    /// length is exhausted.
    fn advance(&mut self) -> bool {
        for position in (0..self.length).rev() {
            if self.digits[position] + 1 < ALPHABET_SIZE as u8 {
                self.digits[position] += 1;
                return true;
            }
            self.digits[position] = 0;
        }
        false
    }
}

/// Exhaustively search keys of length `1..=max_key_length` for the decode
/// with the lowest chi-square, stopping early at the first decode under
/// [`GOOD_ENOUGH_THRESHOLD`].
///
/// `max_key_length` must lie in `1..=`[`MAX_KEY_LENGTH`].
///
/// Ciphertext with no alphabetic characters decodes to itself under every
/// key; the search is skipped and the result reports key `A`, the input
/// unchanged, and chi-square `+∞`.
pub fn crack(
    ctx: &mut SearchContext,
    cipher_text: &str,
    max_key_length: usize,
) -> Result<VigenereCrack, CrackError> {
    if !(MIN_KEY_LENGTH..=MAX_KEY_LENGTH).contains(&max_key_length) {
        return Err(CrackError::KeyLengthOutOfRange {
            requested: max_key_length,
            limit: MAX_KEY_LENGTH,
        });
    }

    if !cipher_text.chars().any(|c| c.is_ascii_alphabetic()) {
        return Ok(VigenereCrack {
            key: VigenereKey::new("A")?,
            plaintext: cipher_text.to_owned(),
            chi_square: f64::INFINITY,
        });
    }

    let mut best: Option<VigenereCrack> = None;
    let mut best_chi_square = f64::INFINITY;

    'lengths: for key_length in MIN_KEY_LENGTH..=max_key_length {
        debug!(key_length, "enumerating keys");
        let mut odometer = KeyOdometer::new(key_length);
        loop {
            let key = odometer.key();
            let outcome = score_candidate(ctx, cipher_text, key, &mut best, &mut best_chi_square);
            if outcome == SearchOutcome::Stop {
                break 'lengths;
            }
            if !odometer.advance() {
                break;
            }
        }
    }

    // The first candidate's chi-square is finite (the ciphertext has
    // letters), so it always beats the initial +infinity.
    let result = best.expect("at least one candidate key is always scored");
    debug!(key = %result.key, chi_square = result.chi_square, "vigenere search complete");
    Ok(result)
}

/// Decode and score one candidate key, updating the running best.
///
/// The strict-improvement update happens before the threshold check, so the
/// stopping key is also recorded as best unless an earlier key already
/// scored strictly lower.
fn score_candidate(
    ctx: &mut SearchContext,
    cipher_text: &str,
    key: VigenereKey,
    best: &mut Option<VigenereCrack>,
    best_chi_square: &mut f64,
) -> SearchOutcome {
    let plaintext = cipher::vigenere_decrypt(&key, cipher_text);
    ctx.statistics.increment(Counters::Decodes);

    let chi_square = match ctx.cache.lookup(&plaintext) {
        Some(cached) => {
            ctx.statistics.increment(Counters::CacheHits);
            cached
        }
        None => {
            let fresh = score::chi_square(&plaintext);
            ctx.statistics.increment(Counters::ChiSquareScores);
            ctx.cache.insert(&plaintext, fresh);
            fresh
        }
    };

    if chi_square < *best_chi_square {
        *best_chi_square = chi_square;
        *best = Some(VigenereCrack {
            key,
            plaintext,
            chi_square,
        });
    }

    if chi_square < GOOD_ENOUGH_THRESHOLD {
        SearchOutcome::Stop
    } else {
        SearchOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odometer_enumerates_lexicographically() {
        let mut odometer = KeyOdometer::new(2);
        assert_eq!(odometer.key().as_str(), "AA");
        assert!(odometer.advance());
        assert_eq!(odometer.key().as_str(), "AB");
        for _ in 0..24 {
            assert!(odometer.advance());
        }
        assert_eq!(odometer.key().as_str(), "AZ");
        assert!(odometer.advance());
        assert_eq!(odometer.key().as_str(), "BA");
    }

    #[test]
    fn test_odometer_wraps_after_last_key() {
        let mut odometer = KeyOdometer::new(1);
        let mut seen = 1;
        while odometer.advance() {
            seen += 1;
        }
        assert_eq!(seen, ALPHABET_SIZE);
        assert_eq!(odometer.key().as_str(), "A");
    }

    #[test]
    fn test_rejects_out_of_range_max_key_length() {
        let mut ctx = SearchContext::new();
        assert_eq!(
            crack(&mut ctx, "ABC", 0),
            Err(CrackError::KeyLengthOutOfRange {
                requested: 0,
                limit: MAX_KEY_LENGTH
            })
        );
        assert!(crack(&mut ctx, "ABC", 11).is_err());
    }

    #[test]
    fn test_degenerate_input_skips_the_search() {
        let mut ctx = SearchContext::new();
        let result = crack(&mut ctx, "123 !? 456", 10).unwrap();
        assert_eq!(result.key.as_str(), "A");
        assert_eq!(result.plaintext, "123 !? 456");
        assert_eq!(result.chi_square, f64::INFINITY);
        assert_eq!(ctx.statistics.get(Counters::Decodes), 0);
    }

    #[test]
    fn test_repeated_plaintexts_hit_the_cache() {
        // 40 Z's: no decode of length 1 or 2 gets near the threshold, so
        // both lengths are fully enumerated. The 26 doubled keys ("AA",
        // "BB", ..) decode identically to their length-1 counterparts and
        // must be answered from the cache.
        let text = "Z".repeat(40);
        let mut ctx = SearchContext::new();
        let _ = crack(&mut ctx, &text, 2).unwrap();
        assert_eq!(ctx.statistics.get(Counters::Decodes), 26 + 26 * 26);
        assert_eq!(ctx.statistics.get(Counters::CacheHits), 26);
        assert_eq!(
            ctx.statistics.get(Counters::ChiSquareScores)
                + ctx.statistics.get(Counters::CacheHits),
            ctx.statistics.get(Counters::Decodes)
        );
    }
}
