//! Canonical text codec for bit vectors.
//!
//! The canonical form is one character per bit in index order, `'1'` or
//! `'0'`. The length-0 vector maps to the distinguished token
//! [`EMPTY_TEXT`] rather than the empty string, so "no bits" never conflates
//! with "no text".
//!
//! Parsing is tolerant: `1`, `t`, `T`, `y`, `Y` read as 1 and `0`, `f`,
//! `F`, `n`, `N` read as 0. Any other character fails with an error naming
//! the offending index.

use std::fmt;
use std::str::FromStr;

use crate::bitvector::BitVector;
use crate::error::{BitstringError, Result};

/// Canonical text form of the length-0 vector.
pub const EMPTY_TEXT: &str = "<empty>";

/// `true` if `chr` is one of the characters read as a 1 bit.
pub fn is_one_char(chr: char) -> bool {
    matches!(chr, '1' | 't' | 'T' | 'y' | 'Y')
}

/// `true` if `chr` is one of the characters read as a 0 bit.
pub fn is_zero_char(chr: char) -> bool {
    matches!(chr, '0' | 'f' | 'F' | 'n' | 'N')
}

/// Map any string to strict `1`/`0` characters: characters read as a 1 bit
/// become `'1'`, everything else becomes `'0'`.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .map(|c| if is_one_char(c) { '1' } else { '0' })
        .collect()
}

impl BitVector {
    /// Canonical text encoding: one `'1'`/`'0'` per bit in index order, or
    /// [`EMPTY_TEXT`] for the length-0 vector.
    pub fn to_text(&self) -> String {
        if self.is_empty() {
            return EMPTY_TEXT.to_string();
        }
        (0..self.len())
            .map(|i| if self.bit(i) { '1' } else { '0' })
            .collect()
    }

    /// Parse a vector from text using the tolerant alphabet.
    ///
    /// [`EMPTY_TEXT`] parses to the length-0 vector. Fails with
    /// `UnparseableCharacter` naming the first offending index otherwise.
    pub fn from_text(text: &str) -> Result<BitVector> {
        if text == EMPTY_TEXT {
            return Ok(BitVector::zeros(0));
        }
        let mut bits = Vec::with_capacity(text.chars().count());
        for (index, character) in text.chars().enumerate() {
            if is_one_char(character) {
                bits.push(true);
            } else if is_zero_char(character) {
                bits.push(false);
            } else {
                return Err(BitstringError::UnparseableCharacter { index, character });
            }
        }
        Ok(BitVector::from_bools(bits))
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for BitVector {
    type Err = BitstringError;

    fn from_str(s: &str) -> Result<Self> {
        BitVector::from_text(s)
    }
}

impl PartialEq<str> for BitVector {
    /// A vector equals a string iff the string is its canonical text form.
    fn eq(&self, other: &str) -> bool {
        self.to_text() == other
    }
}

impl PartialEq<&str> for BitVector {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        let v = BitVector::from_bools([true, false, true, true]);
        assert_eq!(v.to_text(), "1011");
        assert_eq!(v.to_string(), "1011");
    }

    #[test]
    fn test_empty_sentinel() {
        let empty = BitVector::zeros(0);
        assert_eq!(empty.to_text(), EMPTY_TEXT);
        assert_ne!(empty.to_text(), "");
        assert_eq!(BitVector::from_text(EMPTY_TEXT).unwrap(), empty);
    }

    #[test]
    fn test_tolerant_alphabet() {
        let v = BitVector::from_text("1tTyY0fFnN").unwrap();
        assert_eq!(v.to_text(), "1111100000");
    }

    #[test]
    fn test_unparseable_character() {
        assert_eq!(
            BitVector::from_text("10x1"),
            Err(BitstringError::UnparseableCharacter {
                index: 2,
                character: 'x'
            })
        );
        // zero characters parse vacuously to the length-0 vector
        assert!(BitVector::from_text("").unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        for text in ["1", "0", "1011", "000000000000000000000000000000001"] {
            let v = BitVector::from_text(text).unwrap();
            assert_eq!(v.to_text(), text);
            assert_eq!(BitVector::from_text(&v.to_text()).unwrap(), v);
        }
    }

    #[test]
    fn test_from_str_trait() {
        let v: BitVector = "1100".parse().unwrap();
        assert_eq!(v.count_ones(), 2);
        assert!("12".parse::<BitVector>().is_err());
    }

    #[test]
    fn test_eq_against_text() {
        let v = BitVector::from_bools([true, false, true]);
        assert_eq!(v, "101");
        assert_ne!(v, "100");
        assert_eq!(BitVector::zeros(0), EMPTY_TEXT);
        // tolerant spellings are parse-time only; equality is canonical
        assert_ne!(v, "t0t");
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("yYnN magic"), "1100000000");
        assert_eq!(normalize_text(""), "");
    }
}
