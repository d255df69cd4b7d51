//! Generic keystream source abstraction

use super::engine::Trivium;

/// A deterministic generator of keystream bits.
///
/// Implementors provide [`next_bit()`](Self::next_bit); bytes are assembled
/// LSB-first (first bit is bit 0), the ECRYPT convention. Byte-oriented
/// operations are derived from that, so every implementor agrees on how a
/// bit sequence maps onto ciphertext.
pub trait KeystreamSource {
    /// Produce the next keystream bit.
    fn next_bit(&mut self) -> bool;

    /// Produce the next keystream byte, first bit in the least significant
    /// position.
    fn next_byte(&mut self) -> u8 {
        let mut byte = 0u8;
        for index in 0..8 {
            byte |= u8::from(self.next_bit()) << index;
        }
        byte
    }

    /// Overwrite `buf` with the next `buf.len()` keystream bytes.
    fn fill_keystream(&mut self, buf: &mut [u8]) {
        for slot in buf {
            *slot = self.next_byte();
        }
    }

    /// XOR the next `data.len()` keystream bytes into `data`.
    ///
    /// Encryption and decryption are the same operation: applying the
    /// keystream of a fresh source with the same seed restores the input.
    /// Provides no integrity protection.
    fn apply_keystream(&mut self, data: &mut [u8]) {
        for byte in data {
            *byte ^= self.next_byte();
        }
    }
}

impl KeystreamSource for Trivium {
    fn next_bit(&mut self) -> bool {
        self.step()
    }

    fn next_byte(&mut self) -> u8 {
        self.keystream_byte()
    }
}
