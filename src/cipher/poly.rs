// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Repeating-key (Vigenère) transforms.
//!
//! Each key letter induces an independent shift. The key cursor starts at
//! position 0 and advances only when an alphabetic input character is
//! consumed; non-alphabetic characters are copied through without changing
//! which key letter is current.

use crate::cipher::shift::shift_letter;
use crate::error::CrackError;
use std::fmt;
use std::str::FromStr;

/// A repeating Vigenère key: a non-empty sequence of ASCII letters.
///
/// Key letters are case-insensitive; each contributes the shift of its
/// position within its own case (`B` and `b` both shift by 1).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VigenereKey(String);

impl VigenereKey {
    /// Validate and wrap a key string.
    pub fn new(key: &str) -> Result<Self, CrackError> {
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(CrackError::InvalidVigenereKey {
                key: key.to_owned(),
            });
        }
        Ok(VigenereKey(key.to_owned()))
    }

    /// Build a key from raw shift amounts (0 = `A`, 25 = `Z`).
    ///
    /// Used by the key enumerator; `shifts` must be non-empty with every
    /// element below the alphabet size.
    pub(crate) fn from_shifts(shifts: &[u8]) -> Self {
        debug_assert!(!shifts.is_empty());
        VigenereKey(shifts.iter().map(|&s| (b'A' + s) as char).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; keys are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Per-letter shift amounts, each in `0..=25`.
    fn shifts(&self) -> Vec<i32> {
        self.0
            .bytes()
            .map(|b| {
                let origin = if b.is_ascii_uppercase() { b'A' } else { b'a' };
                (b - origin) as i32
            })
            .collect()
    }
}

impl fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VigenereKey {
    type Err = CrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VigenereKey::new(s)
    }
}

fn transform(key: &VigenereKey, text: &str, sign: i32) -> String {
    let shifts = key.shifts();
    let mut cursor = 0usize;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let amount = sign * shifts[cursor % shifts.len()];
                cursor += 1;
                shift_letter(c, amount)
            } else {
                c
            }
        })
        .collect()
}

/// Encrypt with a repeating key, preserving case; non-letters pass through
/// without consuming a key letter.
pub fn vigenere_encrypt(key: &VigenereKey, text: &str) -> String {
    transform(key, text, 1)
}

/// Decrypt with a repeating key; exactly inverts [`vigenere_encrypt`] with
/// the same key.
pub fn vigenere_decrypt(key: &VigenereKey, text: &str) -> String {
    transform(key, text, -1)
}
