//! Hex parsing and formatting for keys, IVs and keystream rows

use trivium_crypto::InputKind;

use super::error::HarnessError;

/// Decode hex text for `input`.
///
/// Whitespace anywhere in the text is ignored and either case is accepted,
/// so both `0053a6f9...` and `00 53 A6 F9 ...` parse. Length is not checked
/// here; the engine rejects anything that is not 10 bytes.
pub fn parse_hex_bytes(input: InputKind, text: &str) -> Result<Vec<u8>, HarnessError> {
    let compact: String = text.split_whitespace().collect();
    hex::decode(compact).map_err(|source| HarnessError::InvalidHex { input, source })
}

/// Format bytes as ` xx` groups of lowercase hex, one leading space each.
pub fn hex_row(bytes: &[u8]) -> String {
    let encoded = hex::encode(bytes);
    let mut row = String::with_capacity(bytes.len() * 3);
    for (index, digit) in encoded.chars().enumerate() {
        if index % 2 == 0 {
            row.push(' ');
        }
        row.push(digit);
    }
    row
}
