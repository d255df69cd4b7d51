//! Built-in ECRYPT test vectors

use trivium_crypto::{IV_SIZE, KEY_SIZE};

/// A (key, IV) pair to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector {
    /// 80-bit key
    pub key: [u8; KEY_SIZE],
    /// 80-bit initialization vector
    pub iv: [u8; IV_SIZE],
}

/// Subset of the ECRYPT stream cipher project's Trivium vectors.
///
/// Order: key MSB set, all zero, IV MSB set, then two mixed pairs.
pub const ECRYPT_VECTORS: [TestVector; 5] = [
    TestVector {
        key: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        iv: [0x00; IV_SIZE],
    },
    TestVector { key: [0x00; KEY_SIZE], iv: [0x00; IV_SIZE] },
    TestVector {
        key: [0x00; KEY_SIZE],
        iv: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    },
    TestVector {
        key: [0x00, 0x53, 0xA6, 0xF9, 0x4C, 0x9F, 0xF2, 0x45, 0x98, 0xEB],
        iv: [0x0D, 0x74, 0xDB, 0x42, 0xA9, 0x10, 0x77, 0xDE, 0x45, 0xAC],
    },
    TestVector {
        key: [0x05, 0x58, 0xAB, 0xFE, 0x51, 0xA4, 0xF7, 0x4A, 0x9D, 0xF0],
        iv: [0x16, 0x7D, 0xE4, 0x4B, 0xB2, 0x19, 0x80, 0xE7, 0x4E, 0xB5],
    },
];
