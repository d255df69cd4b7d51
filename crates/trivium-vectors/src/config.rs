//! Harness configuration

use trivium_crypto::{InputKind, iv_from_slice, key_from_slice};

use super::{
    error::HarnessError,
    hex_input::parse_hex_bytes,
    vectors::{ECRYPT_VECTORS, TestVector},
};

/// Which vectors a run covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every entry of [`ECRYPT_VECTORS`]
    #[default]
    All,
    /// A single vector, built-in or custom
    One(TestVector),
}

/// Runtime configuration of the harness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Vectors to sample and print
    pub selection: Selection,
}

impl HarnessConfig {
    /// Build a configuration from command-line input.
    ///
    /// - nothing given: all built-in vectors
    /// - `vector`: one built-in vector by index
    /// - `key` and `iv`: one custom pair, as hex text
    ///
    /// # Errors
    ///
    /// - `UnknownVector`: index past the end of [`ECRYPT_VECTORS`]
    /// - `InvalidHex`: key or IV text is not hex
    /// - `Engine`: decoded key or IV is not 10 bytes
    /// - `MissingIv` / `MissingKey`: only half of a custom pair given
    /// - `ConflictingSelection`: index and custom pair both given
    pub fn from_cli(
        vector: Option<usize>,
        key: Option<&str>,
        iv: Option<&str>,
    ) -> Result<Self, HarnessError> {
        let selection = match (vector, key, iv) {
            (None, None, None) => Selection::All,
            (Some(index), None, None) => {
                let vector = ECRYPT_VECTORS.get(index).copied().ok_or(
                    HarnessError::UnknownVector { index, available: ECRYPT_VECTORS.len() },
                )?;
                Selection::One(vector)
            },
            (None, Some(key), Some(iv)) => {
                let key = key_from_slice(&parse_hex_bytes(InputKind::Key, key)?)?;
                let iv = iv_from_slice(&parse_hex_bytes(InputKind::Iv, iv)?)?;
                Selection::One(TestVector { key, iv })
            },
            (None, Some(_), None) => return Err(HarnessError::MissingIv),
            (None, None, Some(_)) => return Err(HarnessError::MissingKey),
            (Some(_), _, _) => return Err(HarnessError::ConflictingSelection),
        };

        Ok(Self { selection })
    }

    /// Vectors covered by this configuration, in print order.
    pub fn vectors(&self) -> &[TestVector] {
        match &self.selection {
            Selection::All => &ECRYPT_VECTORS,
            Selection::One(vector) => std::slice::from_ref(vector),
        }
    }
}
