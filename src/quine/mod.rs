//! Gzip quine assembly.
//!
//! The file is `header ++ payload ++ trailer`, where the payload is the
//! DEFLATE stream laid out by [`plan::plan`]. Inflating the payload yields
//! the whole file again.
//!
//! # Example
//!
//! ```rust
//! use gzquine::{Quine, QuineOptions};
//!
//! let quine = Quine::build("a", &QuineOptions::default()).unwrap();
//! assert_eq!(quine.len(), 190);
//! assert_eq!(&quine.as_bytes()[..2], &[0x1f, 0x8b]);
//! ```

pub mod checksum;
pub mod plan;

use std::ops::Range;

use crate::bits::BitBuffer;
use crate::compress::crc32;
use crate::compress::fixed::{ends_cleanly, repeat_block, Successor};
use crate::compress::stored::{stored_header, STORED_HEADER_BYTES};
use crate::error::{Error, Result};
use crate::gzip::{self, FIXED_HEADER_BYTES, TRAILER_BYTES};

use plan::Step;

/// What goes into the CRC32 and ISIZE fields of the trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailerMode {
    /// Both fields zero. Decoders that verify the trailer reject the file.
    #[default]
    Zeroed,
    /// The file's real CRC32 and length, so strict decoders accept it.
    Checksummed,
}

/// Quine construction options.
#[derive(Debug, Clone, Default)]
pub struct QuineOptions {
    /// Trailer contents.
    pub trailer: TrailerMode,
}

impl QuineOptions {
    /// Zero CRC32 and ISIZE (the default).
    pub fn zeroed() -> Self {
        Self {
            trailer: TrailerMode::Zeroed,
        }
    }

    /// Self-consistent CRC32 and ISIZE.
    pub fn checksummed() -> Self {
        Self {
            trailer: TrailerMode::Checksummed,
        }
    }
}

/// A gzip file that inflates to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quine {
    bytes: Vec<u8>,
    header_len: usize,
    block_count: usize,
}

impl Quine {
    /// Build the quine whose FNAME field is `filename`.
    pub fn build(filename: &str, options: &QuineOptions) -> Result<Self> {
        let header = gzip::header(filename)?;
        let head = header_run(header.len())
            .filter(|&head| fits_before_stored(head))
            .ok_or_else(|| Error::FilenameTooLong {
                len: filename.len(),
                max: max_filename_len(),
            })?;
        let tail = (TRAILER_BYTES + STORED_HEADER_BYTES) as u16;
        debug_assert!(matches!(ends_cleanly(tail, Successor::End), Ok(true)));

        let layout = Layout {
            header,
            steps: plan::plan(head, tail),
        };

        let trailer = match options.trailer {
            TrailerMode::Zeroed => gzip::trailer(0, 0),
            TrailerMode::Checksummed => {
                let size = layout.file_len() as u32;
                let crc = checksum::solve_fixed_point(|crc| {
                    Ok(crc32(&layout.render(&gzip::trailer(crc, size))?))
                })?;
                gzip::trailer(crc, size)
            }
        };

        let bytes = layout.render(&trailer)?;
        debug_assert_eq!(bytes.len(), layout.file_len());

        Ok(Self {
            bytes,
            header_len: layout.header.len(),
            block_count: layout.block_count(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The gzip header, FNAME included.
    pub fn header(&self) -> &[u8] {
        &self.bytes[..self.header_len]
    }

    /// Byte range of the DEFLATE stream within the file.
    pub fn payload_range(&self) -> Range<usize> {
        self.header_len..self.bytes.len() - TRAILER_BYTES
    }

    /// The DEFLATE stream.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[self.payload_range()]
    }

    pub fn trailer(&self) -> &[u8] {
        &self.bytes[self.bytes.len() - TRAILER_BYTES..]
    }

    /// CRC32 field of the trailer.
    pub fn crc32(&self) -> u32 {
        let t = self.trailer();
        u32::from_le_bytes([t[0], t[1], t[2], t[3]])
    }

    /// Number of stored and repeat blocks written into the payload.
    pub fn block_count(&self) -> usize {
        self.block_count
    }
}

/// Build the quine for `filename` with a zeroed trailer.
pub fn build_quine(filename: &str) -> Result<Vec<u8>> {
    Quine::build(filename, &QuineOptions::zeroed()).map(Quine::into_bytes)
}

/// Longest filename, in bytes, that [`Quine::build`] accepts.
pub fn max_filename_len() -> usize {
    (0..)
        .take_while(|&len| {
            header_run(FIXED_HEADER_BYTES + len + 1).is_some_and(fits_before_stored)
        })
        .last()
        .unwrap_or(0)
}

/// A header run is the gzip header plus the stored header that prints it.
fn header_run(header_len: usize) -> Option<u16> {
    u16::try_from(header_len + STORED_HEADER_BYTES).ok()
}

/// Every repeat of the header run is followed by a stored block.
fn fits_before_stored(run: u16) -> bool {
    matches!(ends_cleanly(run, Successor::Stored), Ok(true))
}

struct Layout {
    header: Vec<u8>,
    steps: Vec<Step>,
}

impl Layout {
    fn payload_len(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Header => self.header.len(),
                Step::Trailer => TRAILER_BYTES,
                _ => plan::BLOCK as usize,
            })
            .sum()
    }

    fn file_len(&self) -> usize {
        self.header.len() + self.payload_len() + TRAILER_BYTES
    }

    fn block_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| !matches!(step, Step::Header | Step::Trailer))
            .count()
    }

    fn render(&self, trailer: &[u8; TRAILER_BYTES]) -> Result<Vec<u8>> {
        let mut out = BitBuffer::with_capacity(self.file_len() * 8);
        out.write_bytes(&self.header);
        for step in &self.steps {
            match *step {
                Step::Stored(len) => out.append(&stored_header(len, false)),
                Step::Repeat(n) => out.append(&repeat_block(n, false)?),
                Step::FinalRepeat(n) => out.append(&repeat_block(n, true)?),
                Step::Header => out.write_bytes(&self.header),
                Step::Trailer => out.write_bytes(trailer),
            }
        }
        out.write_bytes(trailer);
        out.to_bytes()
    }
}
