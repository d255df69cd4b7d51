//! Error types for engine construction

use std::fmt;

use thiserror::Error;

/// Which seeding input an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// The 80-bit key
    Key,
    /// The 80-bit initialization vector
    Iv,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => f.write_str("key"),
            Self::Iv => f.write_str("IV"),
        }
    }
}

/// Errors from Trivium engine construction.
///
/// `step` and the keystream operations are total, so construction is the
/// only fallible surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriviumError {
    /// Key or IV is not exactly 10 bytes
    #[error("invalid {input} length: expected {expected} bytes, got {actual}")]
    InvalidInputLength {
        /// Input that had the wrong length
        input: InputKind,
        /// Required length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },
}

impl TriviumError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Construction errors are caller bugs; there is no partially seeded
    /// engine to resume from.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::InvalidInputLength { .. } => true,
        }
    }
}
