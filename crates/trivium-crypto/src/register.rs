//! Fixed-width shift register
//!
//! Index 0 holds the newest bit. Shifting moves every bit one position toward
//! the top index and discards the bit that falls off the end.

use zeroize::Zeroize;

/// Number of register positions filled from a 10-byte key or IV.
pub(crate) const LOADED_BITS: usize = 80;

/// A shift register of `N` bits.
///
/// Tap positions are const generic arguments, so an index outside the
/// register fails when the tap is instantiated rather than at runtime.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Register<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> Register<N> {
    /// All-zero register.
    pub(crate) const fn new() -> Self {
        Self { bits: [false; N] }
    }

    /// Read the bit at position `I`.
    #[inline]
    pub(crate) fn tap<const I: usize>(&self) -> bool {
        const { assert!(I < N, "tap position outside register") };
        self.bits[I]
    }

    /// Overwrite the bit at position `I`.
    #[inline]
    pub(crate) fn set<const I: usize>(&mut self, bit: bool) {
        const { assert!(I < N, "tap position outside register") };
        self.bits[I] = bit;
    }

    /// Write 80 bits of seed material into positions 0..80.
    ///
    /// Bit `k` (LSB first) of byte `p` lands at position `79 - 8p - k`: the
    /// LSB of the first byte goes to position 79, the MSB of the last byte to
    /// position 0. Positions 80 and up are left untouched.
    pub(crate) fn load(&mut self, bytes: &[u8; LOADED_BITS / 8]) {
        const { assert!(N >= LOADED_BITS, "register too narrow for seed material") };
        for (p, byte) in bytes.iter().enumerate() {
            for k in 0..8 {
                self.bits[LOADED_BITS - 1 - 8 * p - k] = (byte >> k) & 1 == 1;
            }
        }
    }

    /// Shift every bit one position up and insert `bit` at position 0.
    #[inline]
    pub(crate) fn shift_in(&mut self, bit: bool) {
        const { assert!(N > 0, "empty register") };
        self.bits.copy_within(0..N - 1, 1);
        self.bits[0] = bit;
    }

    #[cfg(test)]
    pub(crate) fn bits(&self) -> &[bool; N] {
        &self.bits
    }
}

impl<const N: usize> Zeroize for Register<N> {
    fn zeroize(&mut self) {
        self.bits.zeroize();
    }
}
