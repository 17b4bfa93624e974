// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Caesar brute-force search.
//!
//! All 26 shift keys are tried in ascending order; each decode is scored
//! with the frequency-correlation score and the highest score wins. The
//! search is deterministic, runs in time proportional to
//! `26 × |ciphertext|`, and never exits early.

use crate::cipher::{self, CaesarKey};
use crate::crack::{Counters, SearchContext};
use crate::language::ALPHABET_SIZE;
use crate::score;
use tracing::debug;

/// Result of one Caesar cracking run.
#[derive(Debug, Clone, PartialEq)]
pub struct CaesarCrack {
    /// The winning shift.
    pub key: CaesarKey,
    /// Frequency-correlation score of the winning decode (higher is better).
    pub score: f64,
    /// The winning decode.
    pub plaintext: String,
}

/// Try every shift key `0..=25` and keep the decode with the highest
/// frequency score.
///
/// Replacement requires strict improvement over a best initialized to score
/// `0.0`, so on exact ties the lowest shift wins. Ciphertext with no
/// alphabetic characters scores `0.0` under every key and reports shift 0
/// with the input unchanged.
pub fn crack(ctx: &mut SearchContext, cipher_text: &str) -> CaesarCrack {
    let mut best_key = CaesarKey::new(0);
    let mut best_score = 0.0;
    // Shift 0 leaves the text unchanged, so this is the key-0 decode.
    let mut best_plaintext = cipher_text.to_owned();

    for shift in 0..ALPHABET_SIZE as u8 {
        let key = CaesarKey::new(shift);
        let plaintext = cipher::caesar_decrypt(key, cipher_text);
        ctx.statistics.increment(Counters::Decodes);
        let score = score::frequency_score(&plaintext);
        ctx.statistics.increment(Counters::FrequencyScores);

        if score > best_score {
            best_score = score;
            best_key = key;
            best_plaintext = plaintext;
        }
    }

    debug!(key = %best_key, score = best_score, "caesar search complete");

    CaesarCrack {
        key: best_key,
        score: best_score,
        plaintext: best_plaintext,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::caesar_encrypt;

    const SAMPLE: &str = "HELLOWORLDTHISISATESTOFCAESARCRACKINGANDITSHOULDWORKWELLENOUGH";

    #[test]
    fn test_recovers_key_three() {
        let cipher_text = caesar_encrypt(CaesarKey::new(3), SAMPLE);
        let mut ctx = SearchContext::new();
        let result = crack(&mut ctx, &cipher_text);
        assert_eq!(result.key, CaesarKey::new(3));
        assert_eq!(result.plaintext, SAMPLE);
    }

    #[test]
    fn test_tries_all_keys_exactly_once() {
        let mut ctx = SearchContext::new();
        crack(&mut ctx, "WKLV LV D WHVW");
        assert_eq!(ctx.statistics.get(Counters::Decodes), 26);
        assert_eq!(ctx.statistics.get(Counters::FrequencyScores), 26);
    }

    #[test]
    fn test_degenerate_input_reports_shift_zero() {
        let mut ctx = SearchContext::new();
        let result = crack(&mut ctx, "123 456 !?");
        assert_eq!(result.key, CaesarKey::new(0));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.plaintext, "123 456 !?");
    }
}
