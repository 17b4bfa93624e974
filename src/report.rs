// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Formats cracking results for human consumption.
//!
//! Excluded from the core: nothing here influences the search. The Caesar
//! report truncates long decodes to the first [`MAX_OUTPUT_WORDS`] words;
//! the Vigenère report prints the full decode.

use crate::crack::{CaesarCrack, VigenereCrack};
use std::fmt::Write;

/// Default number of words shown from a Caesar decode.
pub const MAX_OUTPUT_WORDS: usize = 50;

/// Renders crack results as plain text reports.
#[derive(Debug, Clone)]
pub struct Reporter {
    max_words: usize,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter {
            max_words: MAX_OUTPUT_WORDS,
        }
    }

    /// A reporter that truncates Caesar output after `max_words` words.
    pub fn with_max_words(max_words: usize) -> Self {
        Reporter { max_words }
    }

    /// Render a Caesar result: best rotation, score, truncated decode.
    pub fn caesar(&self, crack: &CaesarCrack) -> String {
        let mut out = String::new();
        // Infallible on String; the Write trait requires the Result.
        let _ = writeln!(out, "Best rotation: {}", crack.key);
        let _ = writeln!(out, "Probability score: {:.2}", crack.score);
        let _ = writeln!(
            out,
            "First {} words of decrypted output:",
            self.max_words
        );
        let _ = writeln!(out, "{}", first_words(&crack.plaintext, self.max_words));
        out
    }

    /// Render a Vigenère result: best key and the full decode.
    pub fn vigenere(&self, crack: &VigenereCrack) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Best key: {}", crack.key);
        let _ = writeln!(out, "Decrypted output:\n{}", crack.plaintext);
        out
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::new()
    }
}

/// The prefix of `text` up to (excluding) its `n`-th whitespace character.
///
/// Every whitespace character counts as a word boundary, so consecutive
/// spaces count as empty words. Returns the whole text when it has fewer
/// boundaries than `n`.
fn first_words(text: &str, n: usize) -> &str {
    let mut word_count = 0;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            word_count += 1;
        }
        if word_count >= n {
            return &text[..i];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{CaesarKey, VigenereKey};

    #[test]
    fn test_first_words_truncates() {
        assert_eq!(first_words("one two three four", 2), "one two");
        assert_eq!(first_words("one two", 10), "one two");
        assert_eq!(first_words("", 3), "");
    }

    #[test]
    fn test_caesar_report_shape() {
        let crack = CaesarCrack {
            key: CaesarKey::new(3),
            score: 663.25,
            plaintext: "THE QUICK BROWN FOX".to_owned(),
        };
        let report = Reporter::with_max_words(2).caesar(&crack);
        assert!(report.starts_with("Best rotation: 3\n"));
        assert!(report.contains("Probability score: 663.25"));
        assert!(report.contains("First 2 words of decrypted output:"));
        assert!(report.contains("THE QUICK"));
        assert!(!report.contains("BROWN"));
    }

    #[test]
    fn test_vigenere_report_shape() {
        let crack = VigenereCrack {
            key: VigenereKey::new("KEY").unwrap(),
            plaintext: "ATTACK AT DAWN".to_owned(),
            chi_square: 31.4,
        };
        let report = Reporter::new().vigenere(&crack);
        assert!(report.starts_with("Best key: KEY\n"));
        assert!(report.contains("ATTACK AT DAWN"));
    }
}
