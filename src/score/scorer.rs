// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two scoring statistics.
//!
//! Both statistics ignore letter case and skip non-alphabetic characters
//! entirely. A text with no alphabetic characters at all has no defined
//! letter distribution; rather than divide by zero, each statistic returns
//! its worst possible value (`0.0` for the frequency score, `+∞` for
//! chi-square) so a degenerate decode can never be selected as best.

use crate::language::{LetterCounts, ALPHABET_SIZE, ENGLISH_LETTER_FREQUENCIES};

/// Weighted letter-frequency correlation score. Higher is more English-like.
///
/// For each letter `c`, accumulates
/// `englishFrequency(c) * (100 * count(c) / total)`.
///
/// Returns `0.0` for text with no alphabetic characters.
pub fn frequency_score(text: &str) -> f64 {
    let counts = LetterCounts::from_text(text);
    if counts.total() == 0 {
        return 0.0;
    }
    let total = counts.total() as f64;
    let mut score = 0.0;
    for letter in 0..ALPHABET_SIZE {
        let observed_percent = counts.count(letter) as f64 / total * 100.0;
        score += ENGLISH_LETTER_FREQUENCIES[letter] * observed_percent;
    }
    score
}

/// Chi-square goodness-of-fit against expected English letter frequencies.
/// Lower is more English-like; `0.0` is a perfect match.
///
/// For each letter `c` with `expected(c) = englishFrequency(c) * total / 100`
/// strictly positive, accumulates `(observed(c) - expected(c))^2 / expected(c)`.
///
/// Returns `+∞` for text with no alphabetic characters.
pub fn chi_square(text: &str) -> f64 {
    let counts = LetterCounts::from_text(text);
    if counts.total() == 0 {
        return f64::INFINITY;
    }
    let total = counts.total() as f64;
    let mut chi_square = 0.0;
    for letter in 0..ALPHABET_SIZE {
        let expected = ENGLISH_LETTER_FREQUENCIES[letter] * total / 100.0;
        if expected > 0.0 {
            let observed = counts.count(letter) as f64;
            chi_square += (observed - expected).powi(2) / expected;
        }
    }
    chi_square
}
