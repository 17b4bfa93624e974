// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Post-hoc decode sanity check.
//!
//! Counts recognizable common English words in an already-decrypted text.
//! This never influences key selection; it only gives a human a quick
//! plausibility signal alongside the statistical scores.

/// The ten most common English words.
const COMMON_WORDS: [&str; 10] = [
    "THE", "BE", "TO", "OF", "AND", "A", "IN", "THAT", "HAVE", "I",
];

/// Count whitespace-delimited tokens of `text` that match a common English
/// word, ignoring case.
pub fn count_common_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| COMMON_WORDS.iter().any(|word| token.eq_ignore_ascii_case(word)))
        .count()
}
