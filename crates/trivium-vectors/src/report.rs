//! Keystream sampling and ECRYPT-format rendering

use std::io::{self, Write};

use trivium_crypto::{KeystreamSource, Trivium};

use super::{hex_input::hex_row, vectors::TestVector};

/// Keystream byte offsets of the published sample windows.
///
/// Must be ascending and at least [`SAMPLE_LEN`] apart.
pub const SAMPLE_OFFSETS: [usize; 3] = [0, 448, 131_008];

/// Bytes per sample window
pub const SAMPLE_LEN: usize = 64;

/// Bytes per printed row
pub const ROW_LEN: usize = 16;

/// Width of the label column, including trailing padding.
const LABEL_WIDTH: usize = 12;

/// One window of keystream bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Offset of the first byte in the keystream
    pub offset: usize,
    /// Keystream bytes `offset..offset + SAMPLE_LEN`
    pub bytes: [u8; SAMPLE_LEN],
}

/// Sampled keystream windows for one test vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorReport {
    /// The (key, IV) pair that was sampled
    pub vector: TestVector,
    /// One entry per [`SAMPLE_OFFSETS`] element, in order
    pub samples: Vec<Sample>,
}

/// Run the engine for `vector` and collect the [`SAMPLE_OFFSETS`] windows.
///
/// Bytes between windows are generated and discarded; the keystream is
/// forward-only.
pub fn sample(vector: &TestVector) -> VectorReport {
    let mut engine = Trivium::new(&vector.key, &vector.iv);
    let mut position = 0;
    let mut samples = Vec::with_capacity(SAMPLE_OFFSETS.len());

    for offset in SAMPLE_OFFSETS {
        debug_assert!(offset >= position, "sample offsets must be ascending");
        for _ in engine.keystream(offset - position) {}

        let mut bytes = [0u8; SAMPLE_LEN];
        engine.fill_keystream(&mut bytes);
        position = offset + SAMPLE_LEN;

        samples.push(Sample { offset, bytes });
    }

    VectorReport { vector: *vector, samples }
}

/// Write `report` in ECRYPT test vector format, followed by a blank line.
///
/// # Errors
///
/// - Any error returned by `out`
pub fn render<W: Write>(report: &VectorReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", labeled_row("key", &report.vector.key))?;
    writeln!(out, "{}", labeled_row("iv", &report.vector.iv))?;

    for sample in &report.samples {
        for (index, row) in sample.bytes.chunks(ROW_LEN).enumerate() {
            if index == 0 {
                writeln!(out, "{}", labeled_row(&format!("data+{}", sample.offset), row))?;
            } else {
                writeln!(out, "{:width$}{}", "", hex_row(row), width = LABEL_WIDTH + 1)?;
            }
        }
    }

    writeln!(out)
}

/// `label` padded to the label column, then `=` and the hex bytes.
fn labeled_row(label: &str, bytes: &[u8]) -> String {
    format!("{label:<LABEL_WIDTH$}={}", hex_row(bytes))
}
