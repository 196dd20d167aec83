//! Self-consistent CRC32 for the trailer.
//!
//! The trailer is part of the data it checksums (twice: once printed by a
//! stored block and once at the end of the file). CRC-32 is affine over
//! GF(2) for inputs of a fixed length, so `crc32(file(c))` is `A·c ⊕ b` and
//! the value we want solves `(A ⊕ I)·c = b`.

use crate::error::{Error, Result};

/// Find `c` with `f(c) == c` for an affine `f` over GF(2)^32.
///
/// `f` is probed 33 times: once at zero and once per input bit.
pub fn solve_fixed_point<F>(f: F) -> Result<u32>
where
    F: Fn(u32) -> Result<u32>,
{
    let offset = f(0)?;

    // basis[p] is a reduced column of A ^ I with highest bit p, paired with
    // the input bits that produce it.
    let mut basis: [Option<(u32, u32)>; 32] = [None; 32];
    for bit in 0..32 {
        let input = 1u32 << bit;
        let mut column = f(input)? ^ offset ^ input;
        let mut combo = input;
        reduce(&basis, &mut column, &mut combo);
        if column != 0 {
            let pivot = 31 - column.leading_zeros() as usize;
            basis[pivot] = Some((column, combo));
        }
    }

    let mut residue = offset;
    let mut solution = 0;
    reduce(&basis, &mut residue, &mut solution);
    if residue != 0 {
        return Err(Error::ChecksumUnsolvable);
    }
    Ok(solution)
}

fn reduce(basis: &[Option<(u32, u32)>; 32], vector: &mut u32, combo: &mut u32) {
    for pivot in (0..32).rev() {
        if (*vector >> pivot) & 1 == 0 {
            continue;
        }
        if let Some((column, inputs)) = basis[pivot] {
            *vector ^= column;
            *combo ^= inputs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::crc32;

    #[test]
    fn test_solves_invertible_system() {
        let f = |c: u32| Ok((c << 1) ^ 0xDEAD_BEEF);
        let c = solve_fixed_point(f).unwrap();
        assert_eq!(f(c).unwrap(), c);
    }

    #[test]
    fn test_identity_with_offset_is_unsolvable() {
        assert_eq!(
            solve_fixed_point(|c| Ok(c ^ 1)),
            Err(Error::ChecksumUnsolvable)
        );
    }

    #[test]
    fn test_identity_without_offset_solves_to_zero() {
        assert_eq!(solve_fixed_point(Ok), Ok(0));
    }

    #[test]
    fn test_crc_over_two_embedded_copies() {
        // Same shape as the quine tail: the value appears twice near the end.
        let render = |c: u32| {
            let mut data = b"prefix bytes".to_vec();
            data.extend_from_slice(&c.to_le_bytes());
            data.extend_from_slice(&[0x83, 0x70, 0xA0, 0x1C, 0x00]);
            data.extend_from_slice(&c.to_le_bytes());
            data
        };
        let c = solve_fixed_point(|c| Ok(crc32(&render(c)))).unwrap();
        assert_eq!(crc32(&render(c)), c);
    }

    #[test]
    fn test_propagates_probe_errors() {
        let result = solve_fixed_point(|_| Err(Error::Unaligned { bits: 3 }));
        assert_eq!(result, Err(Error::Unaligned { bits: 3 }));
    }
}
