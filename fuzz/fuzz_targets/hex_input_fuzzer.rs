//! Fuzz target for harness configuration from untrusted CLI text
//!
//! # Invariants
//!
//! - `HarnessConfig::from_cli` never panics on arbitrary text
//! - An accepted custom pair always yields exactly one vector

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use trivium_vectors::HarnessConfig;

#[derive(Debug, Arbitrary)]
struct CliInput {
    vector: Option<u8>,
    key: Option<String>,
    iv: Option<String>,
}

fuzz_target!(|input: CliInput| {
    let result = HarnessConfig::from_cli(
        input.vector.map(usize::from),
        input.key.as_deref(),
        input.iv.as_deref(),
    );

    if let Ok(config) = result {
        if input.key.is_some() {
            assert_eq!(config.vectors().len(), 1);
        }
    }
});
