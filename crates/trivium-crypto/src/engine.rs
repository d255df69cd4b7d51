//! Trivium state machine
//!
//! # Security Properties
//!
//! - Determinism: same (key, IV) always produces the same keystream
//! - Diffusion: 1152 discarded warm-up clocks before the first output bit
//! - Key hygiene: register contents are zeroized on drop

use std::{fmt, iter::FusedIterator};

use zeroize::Zeroize;

use super::{
    error::{InputKind, TriviumError},
    register::Register,
};

/// Size of a Trivium key in bytes (80 bits)
pub const KEY_SIZE: usize = 10;

/// Size of a Trivium IV in bytes (80 bits)
pub const IV_SIZE: usize = 10;

/// Number of discarded clocks after seeding (four full state cycles)
pub const WARMUP_ROUNDS: usize = 4 * 288;

/// Order in which eight generated bits are packed into a byte.
///
/// [`LsbFirst`](Self::LsbFirst) is the ECRYPT convention every published
/// test vector uses. Ciphertexts produced with different packings do not
/// interoperate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BitPacking {
    /// First generated bit becomes bit 0 of the byte
    #[default]
    LsbFirst,
    /// First generated bit becomes bit 7 of the byte
    MsbFirst,
}

impl BitPacking {
    /// Bit position within the byte for the `index`-th generated bit.
    fn position(self, index: u32) -> u32 {
        match self {
            Self::LsbFirst => index,
            Self::MsbFirst => 7 - index,
        }
    }
}

/// Convert a key slice into a fixed-size key.
///
/// # Errors
///
/// - `InvalidInputLength`: slice is not exactly [`KEY_SIZE`] bytes
pub fn key_from_slice(key: &[u8]) -> Result<[u8; KEY_SIZE], TriviumError> {
    fixed_input(InputKind::Key, key)
}

/// Convert an IV slice into a fixed-size IV.
///
/// # Errors
///
/// - `InvalidInputLength`: slice is not exactly [`IV_SIZE`] bytes
pub fn iv_from_slice(iv: &[u8]) -> Result<[u8; IV_SIZE], TriviumError> {
    fixed_input(InputKind::Iv, iv)
}

fn fixed_input<const N: usize>(input: InputKind, bytes: &[u8]) -> Result<[u8; N], TriviumError> {
    bytes.try_into().map_err(|_| TriviumError::InvalidInputLength {
        input,
        expected: N,
        actual: bytes.len(),
    })
}

/// Trivium keystream engine.
///
/// Owns the three shift registers (93, 84 and 111 bits). Every call to
/// [`step()`](Self::step) clocks all three registers once and yields one
/// keystream bit. Advancing requires `&mut self`, so one engine is one
/// stream; independent engines share nothing and may run on separate
/// threads.
///
/// To restart a stream, build a new engine from the same key and IV.
#[derive(Clone)]
pub struct Trivium {
    s1: Register<93>,
    s2: Register<84>,
    s3: Register<111>,
}

impl Trivium {
    /// Create an engine from a key and IV of arbitrary slice length.
    ///
    /// # Errors
    ///
    /// - `InvalidInputLength`: key or IV is not exactly 10 bytes. No engine
    ///   is built in that case.
    pub fn initialize(key: &[u8], iv: &[u8]) -> Result<Self, TriviumError> {
        let key = key_from_slice(key)?;
        let iv = iv_from_slice(iv)?;
        Ok(Self::new(&key, &iv))
    }

    /// Create an engine from a fixed-size key and IV.
    ///
    /// Loads the key into `s1`, the IV into `s2`, sets the top three bits of
    /// `s3`, then runs [`WARMUP_ROUNDS`] clocks and discards their output.
    pub fn new(key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE]) -> Self {
        let mut engine = Self::seeded(key, iv);
        for _ in 0..WARMUP_ROUNDS {
            engine.step();
        }

        tracing::trace!(rounds = WARMUP_ROUNDS, "trivium engine warmed up");
        engine
    }

    /// Registers loaded from key and IV, before warm-up.
    fn seeded(key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE]) -> Self {
        let mut s1 = Register::new();
        let mut s2 = Register::new();
        let mut s3 = Register::new();

        s1.load(key);
        s2.load(iv);
        s3.set::<108>(true);
        s3.set::<109>(true);
        s3.set::<110>(true);

        Self { s1, s2, s3 }
    }

    /// Clock the registers once and return one keystream bit.
    ///
    /// The output bit is taken from the linear taps before the nonlinear
    /// feedback is folded in. Each register then receives the feedback
    /// computed from its predecessor: `s1` from `s3`, `s2` from `s1`, `s3`
    /// from `s2`.
    pub fn step(&mut self) -> bool {
        let mut t1 = self.s1.tap::<65>() ^ self.s1.tap::<92>();
        let mut t2 = self.s2.tap::<68>() ^ self.s2.tap::<83>();
        let mut t3 = self.s3.tap::<65>() ^ self.s3.tap::<110>();

        let z = t1 ^ t2 ^ t3;

        t1 ^= (self.s1.tap::<90>() & self.s1.tap::<91>()) ^ self.s2.tap::<77>();
        t2 ^= (self.s2.tap::<81>() & self.s2.tap::<82>()) ^ self.s3.tap::<86>();
        t3 ^= (self.s3.tap::<108>() & self.s3.tap::<109>()) ^ self.s1.tap::<68>();

        self.s1.shift_in(t3);
        self.s2.shift_in(t1);
        self.s3.shift_in(t2);

        z
    }

    /// Generate one keystream byte, first bit in the least significant
    /// position.
    pub fn keystream_byte(&mut self) -> u8 {
        self.keystream_byte_packed(BitPacking::LsbFirst)
    }

    /// Generate one keystream byte with an explicit bit packing.
    pub fn keystream_byte_packed(&mut self, packing: BitPacking) -> u8 {
        let mut byte = 0u8;
        for index in 0..8 {
            byte |= u8::from(self.step()) << packing.position(index);
        }
        byte
    }

    /// Lazily generate the next `len` keystream bytes.
    ///
    /// The state only advances as bytes are pulled from the iterator;
    /// `keystream(0)` never touches it. Dropping the iterator early leaves
    /// the engine positioned after the last byte produced.
    pub fn keystream(&mut self, len: usize) -> Keystream<'_> {
        Keystream { engine: self, remaining: len }
    }
}

impl fmt::Debug for Trivium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trivium").finish_non_exhaustive()
    }
}

impl Drop for Trivium {
    fn drop(&mut self) {
        self.s1.zeroize();
        self.s2.zeroize();
        self.s3.zeroize();
    }
}

/// Finite, forward-only keystream iterator returned by
/// [`Trivium::keystream`].
#[must_use = "keystream bytes are generated lazily and do nothing unless consumed"]
pub struct Keystream<'a> {
    engine: &'a mut Trivium,
    remaining: usize,
}

impl Iterator for Keystream<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.engine.keystream_byte())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Keystream<'_> {}

impl FusedIterator for Keystream<'_> {}
