//! Fuzz target for Trivium construction and keystream generation
//!
//! # Strategy
//!
//! - Arbitrary key and IV lengths (most are rejected)
//! - Random sequences of bit, byte, stream and XOR operations
//!
//! # Invariants
//!
//! - `initialize` fails exactly when key or IV is not 10 bytes
//! - Operation sequences never panic
//! - The same operations on a clone produce the same output
//! - Applying the keystream twice restores the data

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use trivium_crypto::{BitPacking, KeystreamSource, Trivium, TriviumError, IV_SIZE, KEY_SIZE};

#[derive(Debug, Clone, Arbitrary)]
struct KeystreamScenario {
    key: Vec<u8>,
    iv: Vec<u8>,
    operations: Vec<Operation>,
}

#[derive(Debug, Clone, Arbitrary)]
enum Operation {
    Step,
    Byte,
    PackedByte { msb_first: bool },
    /// Length capped to keep iterations fast
    Stream { len: u8 },
    Apply { data: Vec<u8> },
}

fuzz_target!(|scenario: KeystreamScenario| {
    let result = Trivium::initialize(&scenario.key, &scenario.iv);

    // INVARIANT 1: only exact lengths are accepted
    let valid = scenario.key.len() == KEY_SIZE && scenario.iv.len() == IV_SIZE;
    let mut engine = match result {
        Ok(engine) => {
            assert!(valid, "accepted a key or IV of the wrong length");
            engine
        },
        Err(TriviumError::InvalidInputLength { expected, actual, .. }) => {
            assert!(!valid, "rejected valid key/IV");
            assert_ne!(expected, actual, "error must report a mismatched length");
            return;
        },
    };

    let mut shadow = engine.clone();

    for op in scenario.operations {
        match op {
            Operation::Step => {
                // INVARIANT 2: clones stay in lockstep
                assert_eq!(engine.step(), shadow.step());
            },
            Operation::Byte => {
                assert_eq!(engine.keystream_byte(), shadow.next_byte());
            },
            Operation::PackedByte { msb_first } => {
                let packing = if msb_first { BitPacking::MsbFirst } else { BitPacking::LsbFirst };
                let a = engine.keystream_byte_packed(packing);
                assert_eq!(a, shadow.keystream_byte_packed(packing));
            },
            Operation::Stream { len } => {
                let a: Vec<u8> = engine.keystream(usize::from(len)).collect();
                let mut b = vec![0u8; usize::from(len)];
                shadow.fill_keystream(&mut b);
                assert_eq!(a, b);
            },
            Operation::Apply { data } => {
                // INVARIANT 3: XOR is an involution
                let mut buf = data.clone();
                let mut replay = engine.clone();
                engine.apply_keystream(&mut buf);
                replay.apply_keystream(&mut buf);
                assert_eq!(buf, data);

                let mut skip = vec![0u8; data.len()];
                shadow.fill_keystream(&mut skip);
            },
        }
    }
});
