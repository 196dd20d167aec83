//! # gzquine
//!
//! Builds a gzip file that decompresses to itself.
//!
//! The DEFLATE payload is written by hand from two block kinds: stored
//! blocks, which print the bytes that follow them, and five-byte
//! fixed-Huffman blocks, which copy what was just printed. Arranged in the
//! right order, the inflater prints the gzip header, the payload's own
//! blocks and the trailer, reproducing the file byte for byte.
//!
//! ## Example
//!
//! ```rust
//! use gzquine::{build_quine, Quine, QuineOptions};
//!
//! let bytes = build_quine("quine.gz").unwrap();
//! assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
//!
//! // Real CRC32 and ISIZE, for decoders that check them.
//! let quine = Quine::build("quine.gz", &QuineOptions::checksummed()).unwrap();
//! assert_eq!(quine.len(), bytes.len());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bits;
pub mod compress;
pub mod error;
pub mod gzip;
pub mod quine;

pub use error::{Error, Result};
pub use quine::{build_quine, max_filename_len, Quine, QuineOptions, TrailerMode};
