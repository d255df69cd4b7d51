//! ECRYPT test vector harness for the Trivium engine.
//!
//! Feeds fixed (key, IV) pairs into [`trivium_crypto::Trivium`] and prints
//! selected keystream windows in the ECRYPT stream-cipher test vector format,
//! for comparison against the published Trivium vectors.
//!
//! # Output Format
//!
//! ```text
//! key         = 80 00 00 00 00 00 00 00 00 00
//! iv          = 00 00 00 00 00 00 00 00 00 00
//! data+0      = 38 eb 86 ff 73 0d 7a 9c af 8d f1 3a 44 20 54 0d
//!               bb 7b 65 14 64 c8 75 01 55 20 41 c2 49 f2 9a 64
//!               ...
//! data+448    = ...
//! data+131008 = ...
//! ```
//!
//! # Components
//!
//! - [`ECRYPT_VECTORS`]: built-in (key, IV) pairs
//! - [`sample`]: draws the keystream windows for one vector
//! - [`render`]: writes a [`VectorReport`] in ECRYPT format
//! - [`HarnessConfig`]: which vectors to run, built from CLI input
//! - [`run`]: sample and render every selected vector

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod hex_input;
mod report;
mod vectors;

use std::io::Write;

pub use config::{HarnessConfig, Selection};
pub use error::HarnessError;
pub use hex_input::{hex_row, parse_hex_bytes};
pub use report::{ROW_LEN, SAMPLE_LEN, SAMPLE_OFFSETS, Sample, VectorReport, render, sample};
pub use vectors::{ECRYPT_VECTORS, TestVector};

/// Sample and render every vector selected by `config` into `out`.
///
/// # Errors
///
/// - `Io`: writing to `out` failed
pub fn run<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<(), HarnessError> {
    let vectors = config.vectors();
    tracing::info!(count = vectors.len(), "running test vectors");

    for vector in vectors {
        tracing::debug!(key = %hex::encode(vector.key), iv = %hex::encode(vector.iv), "sampling");
        let report = sample(vector);
        render(&report, out)?;
    }

    out.flush()?;
    Ok(())
}
