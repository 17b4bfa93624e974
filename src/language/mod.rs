// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Expected English letter statistics (Tier 1: MEMO).
//!
//! This module holds the immutable language model the scorers compare
//! candidate plaintexts against: the 26 expected English letter frequencies,
//! and the shared case-insensitive letter histogram built from a text.
//!
//! The frequency table is in percent, indexed `a..z`. Non-alphabetic
//! characters are never counted.

/// Number of letters in the alphabet the ciphers operate over.
pub const ALPHABET_SIZE: usize = 26;

/// Expected frequency of each English letter, in percent, indexed `a..z`.
///
/// Immutable after compilation (MEMO tier). Both scoring statistics are
/// computed against this table.
pub const ENGLISH_LETTER_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, // a-h
    6.966, 0.153, 0.772, 4.025, 2.406, 6.749, 7.507, 1.929, // i-p
    0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, // q-x
    1.974, 0.074, // y-z
];

/// Case-insensitive letter histogram for one candidate plaintext.
///
/// Counts only ASCII alphabetic characters; everything else is an inert
/// pass-through position and contributes nothing, not even to the total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [u32; ALPHABET_SIZE],
    total: u32,
}

impl LetterCounts {
    /// Count the letters of `text`, folding case.
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0u32; ALPHABET_SIZE];
        let mut total = 0u32;
        for b in text.bytes() {
            if b.is_ascii_alphabetic() {
                counts[(b.to_ascii_lowercase() - b'a') as usize] += 1;
                total += 1;
            }
        }
        Self { counts, total }
    }

    /// Occurrences of the letter with index `letter` (0 = a, 25 = z).
    #[inline]
    pub fn count(&self, letter: usize) -> u32 {
        self.counts[letter]
    }

    /// Total number of alphabetic characters counted.
    ///
    /// Zero means the text was degenerate (empty or entirely
    /// non-alphabetic); the scorers define explicit worst-possible results
    /// for that case.
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_fold_case_and_skip_punctuation() {
        let counts = LetterCounts::from_text("Hello, World!");
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.count((b'l' - b'a') as usize), 3);
        assert_eq!(counts.count((b'h' - b'a') as usize), 1);
        assert_eq!(counts.count((b'w' - b'a') as usize), 1);
        assert_eq!(counts.count((b'z' - b'a') as usize), 0);
    }

    #[test]
    fn test_degenerate_text_has_zero_total() {
        assert_eq!(LetterCounts::from_text("").total(), 0);
        assert_eq!(LetterCounts::from_text("123 !?\n").total(), 0);
    }

    #[test]
    fn test_frequencies_sum_to_roughly_one_hundred() {
        let sum: f64 = ENGLISH_LETTER_FREQUENCIES.iter().sum();
        assert!((sum - 100.0).abs() < 0.1, "sum was {}", sum);
    }
}
