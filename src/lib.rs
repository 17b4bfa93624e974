// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistical cryptanalysis of classical substitution ciphers.
//!
//! Recovers the key and plaintext of text encrypted with a monoalphabetic
//! (Caesar) or polyalphabetic (Vigenère) shift cipher, given only the
//! ciphertext. This is a classroom-grade demonstration of statistical
//! attacks, not a production security tool.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO data (immutable)
//!
//! Expected-language data that never changes during a search:
//! - English letter frequency table ([`language::ENGLISH_LETTER_FREQUENCIES`])
//!
//! ## Tier 2: DYNAMIC data (mutable, owned by one cracking run)
//!
//! - Best-candidate accumulator (replaced only on strict improvement)
//! - Chi-square score cache ([`score::ScoreCache`], bounded, write-once)
//! - Search statistics ([`crack::Statistics`], call counts for decodes and
//!   scoring, asserted on by the integration tests)
//!
//! # Search algorithm
//!
//! 1. **Caesar** ([`crack::caesar`]): all 26 shifts are tried in ascending
//!    order; each decode is scored with the frequency-correlation score and
//!    the highest score wins. Fixed cost, no early exit.
//! 2. **Vigenère** ([`crack::vigenere`]): key lengths are tried shortest
//!    first; for each length every key over `A..Z` is enumerated in
//!    lexicographic order by a fixed-size odometer. Decodes are scored with
//!    the chi-square statistic through the score cache, and the whole search
//!    stops at the first key whose chi-square falls below the good-enough
//!    threshold.
//!
//! The cipher transforms themselves ([`cipher`]) are pure, stateless
//! functions the crackers call as a black box.

pub mod cipher;
pub mod crack;
pub mod error;
pub mod language;
pub mod report;
pub mod score;
pub mod validate;

// Re-export commonly used types
pub use cipher::{CaesarKey, VigenereKey};
pub use crack::{crack_caesar, crack_vigenere, CaesarCrack, SearchContext, VigenereCrack};
pub use error::CrackError;
