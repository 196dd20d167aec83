//! Bit-level buffer for hand-assembling DEFLATE blocks.
//!
//! Bits are kept in logical order and packed MSB first on export. DEFLATE
//! sends the low bit of each byte first, so an encoder that lays a block
//! out in transmission order calls [`BitBuffer::reverse_each_byte`] once,
//! right before packing.

use std::ops::Range;

use crate::error::{Error, Result};

/// An append-only sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Create a buffer holding `bytes`, each byte MSB first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::with_capacity(bytes.len() * 8);
        buffer.write_bytes(bytes);
        buffer
    }

    #[inline]
    pub fn push_bit(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Write the low `num_bits` of `value`, most significant bit first.
    ///
    /// Huffman codewords go out in this order.
    #[inline]
    pub fn write_bits_msb(&mut self, value: u32, num_bits: u8) {
        debug_assert!(num_bits <= 32);
        for shift in (0..num_bits).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Write the low `num_bits` of `value`, least significant bit first.
    ///
    /// DEFLATE header fields, stored lengths and extra bits go out in this order.
    #[inline]
    pub fn write_bits_lsb(&mut self, value: u32, num_bits: u8) {
        debug_assert!(num_bits <= 32);
        for shift in 0..num_bits {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_bits_msb(byte as u32, 8);
        }
    }

    pub fn append(&mut self, other: &BitBuffer) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Every bit flipped.
    #[must_use]
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|bit| !bit).collect(),
        }
    }

    /// The whole sequence in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            bits: self.bits.iter().rev().copied().collect(),
        }
    }

    /// Copy of the bits in `range`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds, like slice indexing.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self {
            bits: self.bits[range].to_vec(),
        }
    }

    /// Reverse the bit order inside each 8-bit group independently.
    ///
    /// Turns a transmission-order stream into one that packs MSB first into
    /// the bytes DEFLATE expects. A trailing partial group is reversed on its own.
    #[must_use]
    pub fn reverse_each_byte(&self) -> Self {
        let mut out = Self::with_capacity(self.len());
        let mut start = 0;
        while start < self.len() {
            let end = (start + 8).min(self.len());
            out.append(&self.slice(start..end).reversed());
            start = end;
        }
        out
    }

    /// Pad with zero bits up to the next multiple of 8.
    pub fn byte_align(&mut self) {
        while !self.is_byte_aligned() {
            self.bits.push(false);
        }
    }

    /// Pad with zero bits until the buffer is `len` bits long.
    pub fn pad_to(&mut self, len: usize) {
        if self.bits.len() < len {
            self.bits.resize(len, false);
        }
    }

    /// Pack into bytes, MSB first.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if !self.is_byte_aligned() {
            return Err(Error::Unaligned { bits: self.len() });
        }

        Ok(self
            .bits
            .chunks_exact(8)
            .map(|group| group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
            .collect())
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.bits.len() % 8 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_bits_msb() {
        let mut buffer = BitBuffer::new();
        buffer.write_bits_msb(0b101, 3);
        buffer.write_bits_msb(0b11, 2);
        buffer.write_bits_msb(0b001, 3);

        assert_eq!(buffer.to_bytes().unwrap(), vec![0b10111001]);
    }

    #[test]
    fn test_write_bits_lsb() {
        let mut buffer = BitBuffer::new();
        buffer.write_bits_lsb(0b0000_0001, 8);
        assert_eq!(buffer.get(0), Some(true));
        assert_eq!(buffer.to_bytes().unwrap(), vec![0b1000_0000]);
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let bytes = [0x1f, 0x8b, 0x08, 0xff];
        assert_eq!(BitBuffer::from_bytes(&bytes).to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_append_keeps_call_order() {
        let mut first = BitBuffer::from_bytes(&[0xAB]);
        let second = BitBuffer::from_bytes(&[0xCD]);
        first.append(&second);
        assert_eq!(first.to_bytes().unwrap(), vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_complement() {
        let buffer = BitBuffer::from_bytes(&[0x0F, 0x00]);
        assert_eq!(buffer.complement().to_bytes().unwrap(), vec![0xF0, 0xFF]);
    }

    #[test]
    fn test_reversed_whole_buffer() {
        let buffer = BitBuffer::from_bytes(&[0x80, 0x00]);
        assert_eq!(buffer.reversed().to_bytes().unwrap(), vec![0x00, 0x01]);
    }

    #[test]
    fn test_reverse_each_byte_is_per_group() {
        let buffer = BitBuffer::from_bytes(&[0b1100_0000, 0b0000_0001]);
        assert_eq!(
            buffer.reverse_each_byte().to_bytes().unwrap(),
            vec![0b0000_0011, 0b1000_0000]
        );
    }

    #[test]
    fn test_reverse_each_byte_matches_lsb_first_packing() {
        // BFINAL=1, BTYPE=01 in transmission order lands in the low bits.
        let mut buffer = BitBuffer::new();
        buffer.push_bit(true);
        buffer.write_bits_lsb(0b01, 2);
        buffer.byte_align();
        assert_eq!(buffer.reverse_each_byte().to_bytes().unwrap(), vec![0x03]);
    }

    #[test]
    fn test_slice() {
        let buffer = BitBuffer::from_bytes(&[0xF0, 0x0F]);
        assert_eq!(buffer.slice(4..12).to_bytes().unwrap(), vec![0x00]);
        assert_eq!(buffer.slice(0..4).len(), 4);
    }

    #[test]
    fn test_byte_align() {
        let mut buffer = BitBuffer::new();
        buffer.byte_align();
        assert!(buffer.is_empty());

        buffer.write_bits_msb(0b111, 3);
        buffer.byte_align();
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.to_bytes().unwrap(), vec![0b1110_0000]);
    }

    #[test]
    fn test_pad_to() {
        let mut buffer = BitBuffer::new();
        buffer.write_bits_msb(1, 1);
        buffer.pad_to(40);
        assert_eq!(buffer.len(), 40);

        buffer.pad_to(8);
        assert_eq!(buffer.len(), 40);
    }

    #[test]
    fn test_to_bytes_unaligned() {
        let mut buffer = BitBuffer::new();
        buffer.write_bits_msb(0b1, 1);
        assert_eq!(buffer.to_bytes(), Err(Error::Unaligned { bits: 1 }));
    }
}
