//! Fixed-Huffman length and distance symbol tables (RFC 1951 section 3.2.5).

use crate::error::{Error, Result};

/// A length or distance category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// Code value before bit reversal (257-285 for lengths, 0-29 for distances).
    pub code: u16,
    /// Smallest value the category represents.
    pub base: u16,
    /// Number of extra bits that select a value within the category.
    pub extra_bits: u8,
}

impl Symbol {
    const fn new(code: u16, base: u16, extra_bits: u8) -> Self {
        Self {
            code,
            base,
            extra_bits,
        }
    }

    /// Largest value this category can represent.
    pub const fn max_value(&self) -> u16 {
        self.base + ((1u16 << self.extra_bits) - 1)
    }
}

/// A sorted table answering "greatest key <= query" lookups.
#[derive(Debug)]
pub struct FloorTable<V: 'static> {
    entries: &'static [(u16, V)],
    max: u16,
}

impl<V: 'static> FloorTable<V> {
    /// `entries` must be sorted by strictly increasing key; `max` is the
    /// largest query the table answers.
    pub const fn new(entries: &'static [(u16, V)], max: u16) -> Self {
        Self { entries, max }
    }

    /// Smallest key in the table.
    pub fn min(&self) -> u16 {
        self.entries.first().map_or(0, |(key, _)| *key)
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    /// Entry with the greatest key <= `value`.
    pub fn lookup(&self, value: u16) -> Result<&V> {
        if self.entries.is_empty() || value < self.min() || value > self.max {
            return Err(Error::SymbolOutOfRange {
                value,
                min: self.min(),
                max: self.max,
            });
        }

        let idx = self.entries.partition_point(|(key, _)| *key <= value);
        Ok(&self.entries[idx - 1].1)
    }

    pub fn entries(&self) -> &'static [(u16, V)] {
        self.entries
    }
}

/// Length symbols 257-285, lengths 3-258.
pub static LENGTHS: FloorTable<Symbol> = FloorTable::new(
    &[
        (3, Symbol::new(257, 3, 0)),
        (4, Symbol::new(258, 4, 0)),
        (5, Symbol::new(259, 5, 0)),
        (6, Symbol::new(260, 6, 0)),
        (7, Symbol::new(261, 7, 0)),
        (8, Symbol::new(262, 8, 0)),
        (9, Symbol::new(263, 9, 0)),
        (10, Symbol::new(264, 10, 0)),
        (11, Symbol::new(265, 11, 1)),
        (13, Symbol::new(266, 13, 1)),
        (15, Symbol::new(267, 15, 1)),
        (17, Symbol::new(268, 17, 1)),
        (19, Symbol::new(269, 19, 2)),
        (23, Symbol::new(270, 23, 2)),
        (27, Symbol::new(271, 27, 2)),
        (31, Symbol::new(272, 31, 2)),
        (35, Symbol::new(273, 35, 3)),
        (43, Symbol::new(274, 43, 3)),
        (51, Symbol::new(275, 51, 3)),
        (59, Symbol::new(276, 59, 3)),
        (67, Symbol::new(277, 67, 4)),
        (83, Symbol::new(278, 83, 4)),
        (99, Symbol::new(279, 99, 4)),
        (115, Symbol::new(280, 115, 4)),
        (131, Symbol::new(281, 131, 5)),
        (163, Symbol::new(282, 163, 5)),
        (195, Symbol::new(283, 195, 5)),
        (227, Symbol::new(284, 227, 5)),
        (258, Symbol::new(285, 258, 0)),
    ],
    258,
);

/// Distance symbols 0-29, distances 1-32768.
pub static DISTANCES: FloorTable<Symbol> = FloorTable::new(
    &[
        (1, Symbol::new(0, 1, 0)),
        (2, Symbol::new(1, 2, 0)),
        (3, Symbol::new(2, 3, 0)),
        (4, Symbol::new(3, 4, 0)),
        (5, Symbol::new(4, 5, 1)),
        (7, Symbol::new(5, 7, 1)),
        (9, Symbol::new(6, 9, 2)),
        (13, Symbol::new(7, 13, 2)),
        (17, Symbol::new(8, 17, 3)),
        (25, Symbol::new(9, 25, 3)),
        (33, Symbol::new(10, 33, 4)),
        (49, Symbol::new(11, 49, 4)),
        (65, Symbol::new(12, 65, 5)),
        (97, Symbol::new(13, 97, 5)),
        (129, Symbol::new(14, 129, 6)),
        (193, Symbol::new(15, 193, 6)),
        (257, Symbol::new(16, 257, 7)),
        (385, Symbol::new(17, 385, 7)),
        (513, Symbol::new(18, 513, 8)),
        (769, Symbol::new(19, 769, 8)),
        (1025, Symbol::new(20, 1025, 9)),
        (1537, Symbol::new(21, 1537, 9)),
        (2049, Symbol::new(22, 2049, 10)),
        (3073, Symbol::new(23, 3073, 10)),
        (4097, Symbol::new(24, 4097, 11)),
        (6145, Symbol::new(25, 6145, 11)),
        (8193, Symbol::new(26, 8193, 12)),
        (12289, Symbol::new(27, 12289, 12)),
        (16385, Symbol::new(28, 16385, 13)),
        (24577, Symbol::new(29, 24577, 13)),
    ],
    32768,
);
