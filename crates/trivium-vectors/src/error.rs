//! Harness error types.

use thiserror::Error;
use trivium_crypto::{InputKind, TriviumError};

/// Errors that can occur while selecting or printing test vectors.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Key or IV text is not valid hex
    #[error("invalid hex in {input}: {source}")]
    InvalidHex {
        /// Which input failed to parse
        input: InputKind,
        /// Underlying decode error
        source: hex::FromHexError,
    },

    /// Decoded key or IV was rejected by the engine
    #[error(transparent)]
    Engine(#[from] TriviumError),

    /// Requested built-in vector does not exist
    #[error("unknown test vector {index}: {available} built-in vectors available")]
    UnknownVector {
        /// Requested index
        index: usize,
        /// Number of built-in vectors
        available: usize,
    },

    /// Custom key given without an IV
    #[error("custom key given without an IV")]
    MissingIv,

    /// Custom IV given without a key
    #[error("custom IV given without a key")]
    MissingKey,

    /// Both a built-in vector and a custom pair were requested
    #[error("a built-in vector and a custom key/IV cannot be combined")]
    ConflictingSelection,

    /// Writing the report failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Selection and input errors need different arguments; only an
    /// interrupted write can succeed when repeated.
    pub fn is_fatal(&self) -> bool {
        match self {
            // Bad arguments - fatal
            Self::InvalidHex { .. }
            | Self::UnknownVector { .. }
            | Self::MissingIv
            | Self::MissingKey
            | Self::ConflictingSelection => true,

            Self::Engine(err) => err.is_fatal(),

            // Transient output failures - recoverable
            Self::Io(err) => !matches!(
                err.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
            ),
        }
    }
}
