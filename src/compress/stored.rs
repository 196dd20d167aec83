//! Stored (BTYPE=00) block headers.

use crate::bits::BitBuffer;

/// Size of a stored block header in bytes.
pub const STORED_HEADER_BYTES: usize = 5;

/// Header of a stored block carrying `len` verbatim bytes.
///
/// BFINAL and BTYPE take the low three bits of the first byte, the rest of
/// that byte is alignment padding, then LEN and NLEN follow little-endian.
/// The payload itself is not included; the caller appends it right after.
pub fn stored_header(len: u16, final_block: bool) -> BitBuffer {
    let mut header = BitBuffer::with_capacity(STORED_HEADER_BYTES * 8);
    header.push_bit(final_block);
    header.write_bits_lsb(0b00, 2);
    header.byte_align();

    let mut len_field = BitBuffer::with_capacity(16);
    len_field.write_bits_lsb(len as u32, 16);
    header.append(&len_field);
    header.append(&len_field.complement());

    header.reverse_each_byte()
}
