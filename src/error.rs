//! Error types for the gzquine library.
//!
//! Every variant is a construction defect: the block plan is fixed, so
//! nothing here is transient or worth retrying.

use thiserror::Error;

/// Result type alias for gzquine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling the quine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A repeat block was requested for a length that cannot fit in five bytes.
    #[error("repeat block can't be 5 bytes long when n is {n}, use n < 67")]
    RepeatOutOfRange {
        /// Requested copy length and distance.
        n: u16,
    },
    /// A symbol table lookup fell outside the table's domain.
    #[error("value {value} is outside the symbol table range {min}..={max}")]
    SymbolOutOfRange {
        /// Value that was looked up.
        value: u16,
        /// Smallest key in the table.
        min: u16,
        /// Largest representable value.
        max: u16,
    },
    /// Encoded block content exceeds its fixed bit budget.
    #[error("block needs {bits} bits but only {budget} are available")]
    BlockOverflow {
        /// Unpadded content width in bits.
        bits: usize,
        /// Fixed block width in bits.
        budget: usize,
    },
    /// A bit buffer was exported while not on a byte boundary.
    #[error("bit buffer of {bits} bits is not byte-aligned")]
    Unaligned {
        /// Buffer length in bits.
        bits: usize,
    },
    /// The gzip FNAME field is NUL-terminated and can't hold a NUL byte.
    #[error("filename contains a NUL byte")]
    FilenameContainsNul,
    /// The filename makes the header too long for a clean repeat block.
    #[error("filename is {len} bytes, at most {max} bytes are supported")]
    FilenameTooLong {
        /// Filename length in bytes.
        len: usize,
        /// Maximum supported length in bytes.
        max: usize,
    },
    /// No CRC32 value reproduces itself for this file.
    #[error("no self-consistent CRC32 exists for this file")]
    ChecksumUnsolvable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_repeat_out_of_range() {
        let err = Error::RepeatOutOfRange { n: 67 };
        assert_eq!(
            err.to_string(),
            "repeat block can't be 5 bytes long when n is 67, use n < 67"
        );
    }

    #[test]
    fn test_display_filename_too_long() {
        let err = Error::FilenameTooLong { len: 30, max: 21 };
        assert_eq!(
            err.to_string(),
            "filename is 30 bytes, at most 21 bytes are supported"
        );
    }
}
