// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Substitution-cipher primitives.
//!
//! Pure, stateless transforms over character sequences. The cracking engine
//! calls these as a black box: `decode(key, text) -> text` and the matching
//! `encode` inverse.
//!
//! Two families:
//! - [`shift`]: fixed-shift (Caesar) transforms, both over an arbitrary
//!   contiguous character range and over the full alphabet with per-character
//!   case handling.
//! - [`poly`]: repeating-key (Vigenère) transforms, where the key cursor
//!   advances only on alphabetic input characters.
//!
//! In every transform, characters outside the operated range are copied
//! through unchanged.

pub mod poly;
pub mod shift;

pub use poly::{vigenere_decrypt, vigenere_encrypt, VigenereKey};
pub use shift::{caesar_decrypt, caesar_encrypt, shift_decode, shift_encode, CaesarKey, CharRange};
