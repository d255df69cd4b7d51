//! Trivium Keystream Engine
//!
//! Bit-oriented implementation of the Trivium synchronous stream cipher. An
//! 80-bit key and an 80-bit IV seed three nonlinear feedback shift registers;
//! every clock of the registers yields one keystream bit. Pure functions with
//! deterministic outputs, no I/O, no allocation.
//!
//! # State Layout
//!
//! ```text
//! register   linear taps   AND pair     cross term   feeds
//! s1 (93)    65, 92        90 · 91      s2[77]       t1 -> s2[0]
//! s2 (84)    68, 83        81 · 82      s3[86]       t2 -> s3[0]
//! s3 (111)   65, 110       108 · 109    s1[68]       t3 -> s1[0]
//!
//! z = t1 ^ t2 ^ t3   (linear taps only, before AND and cross terms)
//! ```
//!
//! # Byte Order
//!
//! Bytes are assembled LSB-first: the first generated bit is bit 0 of the
//! byte. This matches the ECRYPT API and the published test vectors. Other
//! packings require an explicit [`BitPacking`] argument.
//!
//! # Security
//!
//! - No authentication: data is combined with the keystream by XOR, so
//!   ciphertexts are malleable
//! - Never reuse a (key, IV) pair for two messages
//! - Register contents are zeroized when the engine is dropped
//!
//! # Usage
//!
//! ```
//! use trivium_crypto::{KeystreamSource, Trivium};
//!
//! let key = [0x80u8, 0, 0, 0, 0, 0, 0, 0, 0, 0];
//! let iv = [0u8; 10];
//!
//! let mut engine = Trivium::initialize(&key, &iv)?;
//! let prefix: Vec<u8> = engine.keystream(4).collect();
//! assert_eq!(prefix, [0x38, 0xeb, 0x86, 0xff]);
//!
//! let mut data = *b"attack at dawn";
//! Trivium::new(&key, &iv).apply_keystream(&mut data);
//! Trivium::new(&key, &iv).apply_keystream(&mut data);
//! assert_eq!(&data, b"attack at dawn");
//! # Ok::<(), trivium_crypto::TriviumError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod error;
mod register;
mod source;

pub use engine::{
    BitPacking, IV_SIZE, KEY_SIZE, Keystream, Trivium, WARMUP_ROUNDS, iv_from_slice,
    key_from_slice,
};
pub use error::{InputKind, TriviumError};
pub use source::KeystreamSource;
