// luhngen-rs/luhngen/src/error.rs

//! Crate error type.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pattern is empty or holds characters outside digits, wildcards and `|`
    #[error(
        "invalid pattern {pattern:?}: use only digits (0-9), 'x' and '|', e.g. `439383xxxxxx` or `483318|12|25|123`"
    )]
    InvalidCharacters {
        /// Offending input as given
        pattern: String,
    },

    /// Quad number segment has fewer than 6 digits
    #[error("BIN must be at least 6 digits, got {digits}; e.g. `483318|12|25|123`")]
    BinTooShort {
        /// Digits found in the segment
        digits: usize,
    },

    /// Non-quad pattern has fewer than 6 digits
    #[error("pattern must contain at least 6 digits, got {digits}; e.g. `483318` or `483318xxxxxx`")]
    InsufficientDigits {
        /// Digits found in the pattern
        digits: usize,
    },

    /// Pattern length falls outside the accepted card-number bounds
    #[error("invalid length {length}: card numbers are between {min} and {max} digits")]
    LengthOutOfRange {
        /// Length of the rejected pattern
        length: usize,
        /// Shortest accepted length
        min: usize,
        /// Longest accepted length
        max: usize,
    },

    /// Requested batch exceeds the configured maximum
    #[error("batch too large: requested {requested}, maximum is {max}")]
    BatchTooLarge {
        /// Cards requested
        requested: usize,
        /// Configured maximum
        max: usize,
    },

    /// Generator settings are inconsistent
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    /// Synthesis failed after the pattern was accepted
    #[error("an error occurred during generation: {0}")]
    GenerationFailure(String),
}

impl Error {
    /// True when the input pattern or request was rejected before any card
    /// was generated.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidCharacters { .. }
                | Error::BinTooShort { .. }
                | Error::InsufficientDigits { .. }
                | Error::LengthOutOfRange { .. }
                | Error::BatchTooLarge { .. }
        )
    }
}

/// Result alias over [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
