//! Gzip container framing (RFC 1952).

use crate::error::{Error, Result};

/// Gzip magic number.
pub const MAGIC: [u8; 2] = [0x1F, 0x8B];

/// CM value for DEFLATE.
pub const METHOD_DEFLATE: u8 = 8;

/// FLG.FNAME: an original file name follows the fixed header.
pub const FLAG_FNAME: u8 = 0b0000_1000;

/// OS value for "unknown".
pub const OS_UNKNOWN: u8 = 255;

/// Size of the fixed part of the header, before FNAME.
pub const FIXED_HEADER_BYTES: usize = 10;

/// Size of the trailer (CRC32 + ISIZE).
pub const TRAILER_BYTES: usize = 8;

/// Header with FNAME set to `filename`, no timestamp, unknown OS.
pub fn header(filename: &str) -> Result<Vec<u8>> {
    if filename.as_bytes().contains(&0) {
        return Err(Error::FilenameContainsNul);
    }

    let mut out = Vec::with_capacity(FIXED_HEADER_BYTES + filename.len() + 1);
    out.extend_from_slice(&MAGIC);
    out.push(METHOD_DEFLATE);
    out.push(FLAG_FNAME);
    out.extend_from_slice(&0u32.to_le_bytes()); // MTIME: not available
    out.push(0); // XFL
    out.push(OS_UNKNOWN);
    out.extend_from_slice(filename.as_bytes());
    out.push(0);
    Ok(out)
}

/// Length of the header [`header`] builds for `filename`.
pub fn header_len(filename: &str) -> usize {
    FIXED_HEADER_BYTES + filename.len() + 1
}

/// Trailer carrying the CRC32 and the uncompressed size mod 2^32.
pub fn trailer(crc: u32, isize: u32) -> [u8; TRAILER_BYTES] {
    let mut out = [0u8; TRAILER_BYTES];
    out[..4].copy_from_slice(&crc.to_le_bytes());
    out[4..].copy_from_slice(&isize.to_le_bytes());
    out
}
