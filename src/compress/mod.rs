//! DEFLATE building blocks (RFC 1951).
//!
//! Only two block kinds are produced: stored blocks, whose header is written
//! here and whose payload the caller copies in verbatim, and five-byte
//! fixed-Huffman blocks holding a single back-reference.

pub mod crc32;
pub mod fixed;
pub mod stored;
pub mod symbols;

pub use crc32::crc32;
pub use fixed::{ends_cleanly, repeat_block, Successor, REPEAT_BLOCK_BYTES, REPEAT_LIMIT};
pub use stored::{stored_header, STORED_HEADER_BYTES};
pub use symbols::{FloorTable, Symbol, DISTANCES, LENGTHS};
