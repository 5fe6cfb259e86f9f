//! Parity group scan shared by Hamming encoding and decoding.
//!
//! Codeword positions are 1-indexed. Parity index `s` covers every position
//! whose binary representation has bit `s` set. Walking the codeword in runs
//! of `2^s` bits starting at `2^s`, `2^s + 2^(s+1)`, ... visits exactly those
//! positions, so one scan serves both directions:
//!
//! - encoding writes each group's XOR into the parity slot at `2^s`, which
//!   leaves every group with even parity;
//! - decoding adds `2^s` to the syndrome for every group with odd parity. A
//!   single flipped bit violates exactly the groups named by the bits of its
//!   own position, so a nonzero syndrome is the position of the flip.
//!
//! Syndromes larger than the codeword length cannot come from a single flip.
//! They are reported as [`Correction::Uncorrectable`] and leave the codeword
//! untouched.

use crate::ecc::hamming::HammingCode;
use crate::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;

/// Outcome of running the decoder on one codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Every parity group checked out.
    Clean,
    /// The bit at this 1-indexed position was flipped back.
    Corrected { position: usize },
    /// The syndrome points past the end of the codeword; nothing was changed.
    Uncorrectable { syndrome: usize },
}

impl Correction {
    /// Returns true if the codeword was found damaged beyond repair.
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, Correction::Uncorrectable { .. })
    }
}

/// Returns true for the 1-indexed positions reserved for parity bits.
pub fn is_parity_position(position: usize) -> bool {
    position.is_power_of_two()
}

/// XOR of all bits covered by parity index `s`.
fn group_parity(codeword: &BitSlice<u8, Msb0>, s: usize) -> bool {
    let len = codeword.len();
    let span = 1usize << s;

    (span..=len).step_by(span << 1).fold(false, |parity, start| {
        let end = (start + span - 1).min(len);
        parity ^ (codeword[start - 1..end].count_ones() % 2 == 1)
    })
}

fn check_length(code: &HammingCode, codeword: &BitSlice<u8, Msb0>) -> Result<()> {
    if codeword.len() != code.total_bits() {
        return Err(Error::InvalidCodewordLength {
            expected: code.total_bits(),
            actual: codeword.len(),
        });
    }
    Ok(())
}

/// Fills the parity slots of a codeword whose length is already known to be right.
pub(crate) fn apply_parity(parity_bits: usize, codeword: &mut BitSlice<u8, Msb0>) {
    for s in 0..parity_bits {
        let parity = group_parity(codeword, s);
        codeword.set((1 << s) - 1, parity);
    }
}

/// Writes the parity bits of `codeword` in place.
///
/// The parity slots are expected to hold zero on entry, as they do in a
/// freshly framed block. Afterwards every parity group has even parity.
///
/// # Errors
///
/// Returns [`Error::InvalidCodewordLength`] if `codeword` is not exactly
/// `code.total_bits()` long.
pub fn write_parity(code: &HammingCode, codeword: &mut BitSlice<u8, Msb0>) -> Result<()> {
    check_length(code, codeword)?;
    apply_parity(code.parity_bits(), codeword);
    Ok(())
}

/// Computes the syndrome of `codeword` without modifying it.
///
/// The result is in `[0, 2^r - 1]`; zero means no error was detected.
pub fn syndrome(code: &HammingCode, codeword: &BitSlice<u8, Msb0>) -> Result<usize> {
    check_length(code, codeword)?;
    Ok((0..code.parity_bits())
        .filter(|&s| group_parity(codeword, s))
        .fold(0, |acc, s| acc | (1 << s)))
}

/// Computes the syndrome of `codeword` and repairs a single flipped bit in place.
pub fn correct(code: &HammingCode, codeword: &mut BitSlice<u8, Msb0>) -> Result<Correction> {
    let syndrome = syndrome(code, codeword)?;

    if syndrome == 0 {
        return Ok(Correction::Clean);
    }

    if syndrome > codeword.len() {
        return Ok(Correction::Uncorrectable { syndrome });
    }

    let index = syndrome - 1;
    let flipped = !codeword[index];
    codeword.set(index, flipped);

    Ok(Correction::Corrected { position: syndrome })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codeword(bits: &str) -> BitVec<u8, Msb0> {
        bits.chars().map(|c| c == '1').collect()
    }

    fn flip(bits: &mut BitVec<u8, Msb0>, position: usize) {
        let bit = bits[position - 1];
        bits.set(position - 1, !bit);
    }

    #[test]
    fn test_parity_positions() {
        let parity: Vec<usize> = (1..=12).filter(|&p| is_parity_position(p)).collect();
        assert_eq!(parity, vec![1, 2, 4, 8]);
        assert!(!is_parity_position(0));
    }

    #[test]
    fn test_write_parity_letter_a() {
        // "A" = 0b01000001 framed into 12 bits with zeroed parity slots
        let code = HammingCode::new(8).unwrap();
        let mut cw = codeword("000010000001");

        write_parity(&code, &mut cw).unwrap();

        assert_eq!(cw, codeword("100010010001"));
        assert_eq!(syndrome(&code, &cw).unwrap(), 0);
    }

    #[test]
    fn test_syndrome_names_flipped_position() {
        let code = HammingCode::new(8).unwrap();
        let clean = codeword("100010010001");

        for position in 1..=12 {
            let mut damaged = clean.clone();
            flip(&mut damaged, position);
            assert_eq!(syndrome(&code, &damaged).unwrap(), position);
        }
    }

    #[test]
    fn test_correct_single_flip() {
        let code = HammingCode::new(8).unwrap();
        let clean = codeword("100010010001");

        let mut damaged = clean.clone();
        flip(&mut damaged, 3);

        let correction = correct(&code, &mut damaged).unwrap();
        assert_eq!(correction, Correction::Corrected { position: 3 });
        assert_eq!(damaged, clean);
    }

    #[test]
    fn test_correct_clean_codeword() {
        let code = HammingCode::new(8).unwrap();
        let mut cw = codeword("100010010001");
        assert_eq!(correct(&code, &mut cw).unwrap(), Correction::Clean);
        assert_eq!(cw, codeword("100010010001"));
    }

    #[test]
    fn test_out_of_range_syndrome_is_uncorrectable() {
        // Flipping positions 1 and 12 gives syndrome 1 ^ 12 = 13 > 12
        let code = HammingCode::new(8).unwrap();
        let mut damaged = codeword("100010010001");
        flip(&mut damaged, 1);
        flip(&mut damaged, 12);
        let before = damaged.clone();

        let correction = correct(&code, &mut damaged).unwrap();
        assert_eq!(correction, Correction::Uncorrectable { syndrome: 13 });
        assert!(correction.is_uncorrectable());
        assert_eq!(damaged, before);
    }

    #[test]
    fn test_double_flip_can_miscorrect() {
        // Positions 1 and 2 combine to syndrome 3, a valid position
        let code = HammingCode::new(8).unwrap();
        let clean = codeword("100010010001");
        let mut damaged = clean.clone();
        flip(&mut damaged, 1);
        flip(&mut damaged, 2);

        let correction = correct(&code, &mut damaged).unwrap();
        assert_eq!(correction, Correction::Corrected { position: 3 });
        assert_ne!(damaged, clean);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let code = HammingCode::new(8).unwrap();
        let mut short = codeword("10001001000");

        assert!(matches!(
            syndrome(&code, &short),
            Err(Error::InvalidCodewordLength {
                expected: 12,
                actual: 11
            })
        ));
        assert!(write_parity(&code, &mut short).is_err());
        assert!(correct(&code, &mut short).is_err());
    }

    #[test]
    fn test_truncated_last_group() {
        // mode 4: 7-bit codeword, group for s = 2 covers positions 4..=7 only
        let code = HammingCode::new(4).unwrap();
        let mut cw = codeword("0010111");
        write_parity(&code, &mut cw).unwrap();
        assert_eq!(syndrome(&code, &cw).unwrap(), 0);
        for position in 1..=7 {
            let mut damaged = cw.clone();
            flip(&mut damaged, position);
            assert_eq!(syndrome(&code, &damaged).unwrap(), position);
        }
    }
}
