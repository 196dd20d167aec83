//! Fixed-Huffman (BTYPE=01) back-reference blocks.
//!
//! A repeat block copies the `n` bytes that precede it in the output. It is
//! written as two length/distance pairs of `n / 2` and `n - n / 2` bytes, both
//! at distance `n`, and always occupies exactly five bytes.
//!
//! There is no explicit end-of-block symbol. The zero padding doubles as
//! symbol 256 (seven 0 bits in the fixed code), so where a block can sit in a
//! stream depends on how much padding its content leaves; see [`ends_cleanly`].

use crate::bits::BitBuffer;
use crate::compress::symbols::{DISTANCES, LENGTHS};
use crate::error::{Error, Result};

/// Size of every repeat block in bytes.
pub const REPEAT_BLOCK_BYTES: usize = 5;

const REPEAT_BLOCK_BITS: usize = REPEAT_BLOCK_BYTES * 8;

/// Repeat lengths from here on can't be encoded in five bytes.
pub const REPEAT_LIMIT: u16 = 67;

/// Width of the fixed-Huffman end-of-block code (symbol 256, all zeros).
const END_OF_BLOCK_BITS: usize = 7;

/// Width of a length code 257-279 in the fixed code.
const LENGTH_CODE_BITS: u8 = 7;

const DISTANCE_CODE_BITS: u8 = 5;

/// What follows a repeat block in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Successor {
    /// Nothing: the block is final.
    End,
    /// A non-final stored block, whose first byte is all zeros.
    Stored,
}

fn length_code(length: u16) -> Result<BitBuffer> {
    let sym = LENGTHS.lookup(length)?;
    let mut bits = BitBuffer::with_capacity(LENGTH_CODE_BITS as usize + sym.extra_bits as usize);
    // Codes 257-279 are the 7-bit codes 0-23.
    bits.write_bits_msb((sym.code - 256) as u32, LENGTH_CODE_BITS);
    bits.write_bits_lsb((length - sym.base) as u32, sym.extra_bits);
    Ok(bits)
}

fn distance_code(distance: u16) -> Result<BitBuffer> {
    let sym = DISTANCES.lookup(distance)?;
    let mut bits =
        BitBuffer::with_capacity(DISTANCE_CODE_BITS as usize + sym.extra_bits as usize);
    bits.write_bits_msb(sym.code as u32, DISTANCE_CODE_BITS);
    bits.write_bits_lsb((distance - sym.base) as u32, sym.extra_bits);
    Ok(bits)
}

/// Unpadded block in transmission order.
fn repeat_content(n: u16, final_block: bool) -> Result<BitBuffer> {
    if n >= REPEAT_LIMIT {
        return Err(Error::RepeatOutOfRange { n });
    }

    let distance = distance_code(n)?;
    let short = n / 2;
    let long = n - short;

    let mut block = BitBuffer::with_capacity(REPEAT_BLOCK_BITS);
    block.push_bit(final_block);
    block.write_bits_lsb(0b01, 2);
    for length in [short, long] {
        block.append(&length_code(length)?);
        block.append(&distance);
    }

    if block.len() > REPEAT_BLOCK_BITS {
        return Err(Error::BlockOverflow {
            bits: block.len(),
            budget: REPEAT_BLOCK_BITS,
        });
    }

    Ok(block)
}

/// Five-byte block that copies the `n` bytes immediately before it.
///
/// Fails for `n >= 67`, for `n < 6` (a half-length below the minimum match
/// of 3), and for `n` of 65 and 66 whose codes need more than 40 bits.
pub fn repeat_block(n: u16, final_block: bool) -> Result<BitBuffer> {
    let mut block = repeat_content(n, final_block)?;
    block.pad_to(REPEAT_BLOCK_BITS);
    Ok(block.reverse_each_byte())
}

/// Number of bits a repeat block of `n` uses before padding.
pub fn repeat_content_bits(n: u16) -> Result<usize> {
    repeat_content(n, false).map(|block| block.len())
}

/// Whether an inflater leaves a repeat block of `n` exactly where `next` begins.
///
/// The end-of-block code is read from the padding, and may run on into the
/// zero low bits of a following stored header. The next three header bits
/// must then either start a new byte or finish inside the stored header's
/// first byte; if three or more padding bits are left over, the inflater
/// would read them as an extra empty stored block.
pub fn ends_cleanly(n: u16, next: Successor) -> Result<bool> {
    let eob_end = repeat_content_bits(n)? + END_OF_BLOCK_BITS;
    Ok(match next {
        Successor::End => eob_end <= REPEAT_BLOCK_BITS,
        Successor::Stored => (REPEAT_BLOCK_BITS - 2..=REPEAT_BLOCK_BITS + 5).contains(&eob_end),
    })
}
