// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the cipher and cracking layers.
//!
//! Degenerate inputs (ciphertext with no alphabetic characters) are defined
//! results, not errors; see the scorer and cracker documentation for the
//! conventions. Errors here are strictly caller mistakes: malformed keys,
//! empty character ranges, and search bounds outside the supported window.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrackError {
    /// A Vigenère key must be a non-empty sequence of ASCII letters.
    #[error("invalid Vigenère key {key:?}: must be a non-empty sequence of ASCII letters")]
    InvalidVigenereKey { key: String },

    /// A character range must be ASCII with `high` strictly above `low`.
    #[error("invalid character range {low:?}..={high:?}: high must be strictly above low")]
    EmptyRange { low: char, high: char },

    /// The Vigenère search only supports key lengths 1 through `limit`.
    #[error("max key length {requested} out of range 1..={limit}")]
    KeyLengthOutOfRange { requested: usize, limit: usize },
}
