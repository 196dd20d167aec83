//! The fixed block sequence of the payload.
//!
//! Every stored header is five bytes and so is every repeat block, which is
//! what lets short stored runs of 5 and 20 bytes carry whole blocks verbatim.
//! The inflater alternates between printing the next chunk of the stream
//! and copying what it just printed, so each chunk appears in the output
//! both as code and as data.

/// One chunk of the payload, in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Stored block header announcing `len` verbatim bytes.
    Stored(u16),
    /// Repeat block copying the preceding `n` bytes.
    Repeat(u16),
    /// Repeat block with BFINAL set.
    FinalRepeat(u16),
    /// The gzip header bytes.
    Header,
    /// The gzip trailer bytes.
    Trailer,
}

/// One block header, or one repeat block.
pub const BLOCK: u16 = 5;

/// Four blocks.
pub const QUAD: u16 = 4 * BLOCK;

/// Payload for a header run of `head` bytes (gzip header plus one stored
/// header) and a tail run of `tail` bytes (trailer plus one final repeat).
pub fn plan(head: u16, tail: u16) -> Vec<Step> {
    use Step::*;

    vec![
        // Print the header and its own stored header, then copy them.
        Stored(head),
        Header,
        Stored(head),
        Repeat(head),
        Stored(BLOCK),
        Repeat(head),
        Stored(BLOCK),
        Stored(BLOCK),
        // Four-block runs, each printed and then repeated.
        Stored(QUAD),
        Repeat(head),
        Stored(BLOCK),
        Stored(BLOCK),
        Stored(QUAD),
        Repeat(QUAD),
        Stored(QUAD),
        Repeat(QUAD),
        Stored(QUAD),
        Repeat(QUAD),
        Stored(QUAD),
        Repeat(QUAD),
        Stored(QUAD),
        Repeat(QUAD),
        Stored(0),
        Stored(0),
        Stored(tail),
        Repeat(QUAD),
        Stored(0),
        Stored(0),
        // Print the final block and the trailer, then copy them.
        Stored(tail),
        FinalRepeat(tail),
        Trailer,
        FinalRepeat(tail),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_ends_with_final_block() {
        let steps = plan(17, 13);
        assert_eq!(steps.last(), Some(&Step::FinalRepeat(13)));
        assert_eq!(
            steps
                .iter()
                .filter(|step| matches!(step, Step::FinalRepeat(_)))
                .count(),
            2
        );
    }

    #[test]
    fn test_plan_prints_header_and_trailer_once() {
        let steps = plan(17, 13);
        assert_eq!(steps.iter().filter(|s| **s == Step::Header).count(), 1);
        assert_eq!(steps.iter().filter(|s| **s == Step::Trailer).count(), 1);
        assert_eq!(steps[1], Step::Header);
    }

    #[test]
    fn test_plan_every_step_is_block_sized() {
        // Apart from header and trailer, every chunk is exactly one block.
        let blocks = plan(30, 13)
            .iter()
            .filter(|step| !matches!(step, Step::Header | Step::Trailer))
            .count();
        assert_eq!(blocks, 30);
    }
}
