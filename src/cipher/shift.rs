// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-shift (Caesar) transforms.
//!
//! Two layers:
//! - [`shift_encode`] / [`shift_decode`] operate over an explicit contiguous
//!   character range; characters outside the range pass through unchanged.
//! - [`caesar_encrypt`] / [`caesar_decrypt`] operate over the full alphabet
//!   with the shift origin normalized per character's case, which is what
//!   the crackers use.

use crate::error::CrackError;
use crate::language::ALPHABET_SIZE;
use std::fmt;

/// A Caesar shift amount over the 26-letter alphabet.
///
/// Construction wraps modulo 26, so any `u8` is a valid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CaesarKey(u8);

impl CaesarKey {
    /// Create a key, wrapping the shift modulo the alphabet size.
    pub fn new(shift: u8) -> Self {
        CaesarKey(shift % ALPHABET_SIZE as u8)
    }

    /// The shift amount, always in `0..=25`.
    #[inline]
    pub fn shift(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for CaesarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contiguous inclusive range of ASCII characters, e.g. `A..=Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    low: u8,
    high: u8,
}

impl CharRange {
    /// The uppercase letters `A..=Z`.
    pub const UPPERCASE: CharRange = CharRange {
        low: b'A',
        high: b'Z',
    };

    /// Create a range. `high` must be ASCII and strictly above `low`.
    pub fn new(low: char, high: char) -> Result<Self, CrackError> {
        if !low.is_ascii() || !high.is_ascii() || high <= low {
            return Err(CrackError::EmptyRange { low, high });
        }
        Ok(CharRange {
            low: low as u8,
            high: high as u8,
        })
    }

    #[inline]
    fn contains(&self, c: char) -> bool {
        c.is_ascii() && (self.low..=self.high).contains(&(c as u8))
    }

    /// Number of characters in the range.
    #[inline]
    pub fn size(&self) -> i32 {
        (self.high - self.low) as i32 + 1
    }
}

/// Shift every in-range character of `text` forward by `key` positions
/// modulo the range size; copy everything else unchanged.
///
/// The key is normalized into the range first, so negative and oversized
/// keys behave as their wrapped equivalents.
pub fn shift_encode(range: CharRange, key: i32, text: &str) -> String {
    let size = range.size();
    let key = key.rem_euclid(size);
    text.chars()
        .map(|c| {
            if range.contains(c) {
                let offset = (c as u8 - range.low) as i32;
                ((offset + key).rem_euclid(size) as u8 + range.low) as char
            } else {
                c
            }
        })
        .collect()
}

/// Inverse of [`shift_encode`]: shifting backward by `key` positions.
pub fn shift_decode(range: CharRange, key: i32, text: &str) -> String {
    shift_encode(range, -key, text)
}

/// Shift one letter by `amount` positions within its own case, wrapping
/// modulo the alphabet size. Non-letters are returned unchanged.
pub(crate) fn shift_letter(c: char, amount: i32) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    let origin = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    let offset = (c as u8 - origin) as i32;
    let shifted = (offset + amount).rem_euclid(ALPHABET_SIZE as i32);
    (origin + shifted as u8) as char
}

/// Encrypt with a Caesar shift over the full alphabet, preserving case.
pub fn caesar_encrypt(key: CaesarKey, text: &str) -> String {
    text.chars()
        .map(|c| shift_letter(c, key.shift() as i32))
        .collect()
}

/// Decrypt with a Caesar shift over the full alphabet, preserving case.
///
/// Exactly inverts [`caesar_encrypt`] with the same key.
pub fn caesar_decrypt(key: CaesarKey, text: &str) -> String {
    text.chars()
        .map(|c| shift_letter(c, -(key.shift() as i32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_caesar_key_wraps() {
        assert_eq!(CaesarKey::new(3).shift(), 3);
        assert_eq!(CaesarKey::new(26).shift(), 0);
        assert_eq!(CaesarKey::new(29).shift(), 3);
    }

    #[test]
    fn test_shift_encode_uppercase_range() {
        let range = CharRange::UPPERCASE;
        assert_eq!(shift_encode(range, 3, "HELLOWORLD"), "KHOORZRUOG");
        // Lowercase is outside the range and passes through.
        assert_eq!(shift_encode(range, 3, "Hello, World!"), "Kello, Zorld!");
    }

    #[test]
    fn test_shift_decode_inverts_encode() {
        let range = CharRange::UPPERCASE;
        let cipher = shift_encode(range, 7, "ATTACK AT DAWN");
        assert_eq!(shift_decode(range, 7, &cipher), "ATTACK AT DAWN");
        // Negative key is the wrapped equivalent.
        assert_eq!(shift_encode(range, -19, "ATTACK AT DAWN"), cipher);
    }

    #[test]
    fn test_invalid_range_rejected() {
        assert_eq!(
            CharRange::new('Z', 'A'),
            Err(CrackError::EmptyRange { low: 'Z', high: 'A' })
        );
        assert!(CharRange::new('A', 'A').is_err());
        assert!(CharRange::new('0', '9').is_ok());
    }

    #[test]
    fn test_caesar_preserves_case_and_punctuation() {
        let key = CaesarKey::new(3);
        assert_eq!(caesar_encrypt(key, "Hello, World!"), "Khoor, Zruog!");
        assert_eq!(caesar_decrypt(key, "Khoor, Zruog!"), "Hello, World!");
    }

    proptest! {
        #[test]
        fn prop_caesar_roundtrips(shift in 0u8..26, text in ".*") {
            let key = CaesarKey::new(shift);
            prop_assert_eq!(caesar_decrypt(key, &caesar_encrypt(key, &text)), text);
        }
    }
}
