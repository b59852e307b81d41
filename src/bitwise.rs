//! Bitwise algebra over equal-length bit vectors.
//!
//! NOT, AND, OR, XOR and PARITY, all word-wise and masked back to canonical
//! form. Binary operations require operands of equal length and fail with
//! `LengthMismatch` otherwise. Zero-length operands short-circuit to the
//! zero-length result (there are no words to iterate).
//!
//! The operation set is closed and small, so selection is modeled as a tagged
//! enum ([`BitwiseOp`]) dispatched through [`BitwiseOp::apply`] rather than a
//! trait object.

use std::ops::Not;

use crate::bitvector::{BitVector, Word};
use crate::error::{BitstringError, Result};

/// The closed set of bitwise operations.
///
/// `Not` is unary; the rest are binary. `Parity` is per-bit agreement:
/// `NOT(XOR(v, w))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitwiseOp {
    Not,
    And,
    Or,
    Xor,
    Parity,
}

impl BitwiseOp {
    /// Number of operands the operation takes (1 or 2).
    pub fn arity(&self) -> usize {
        match self {
            BitwiseOp::Not => 1,
            _ => 2,
        }
    }

    /// Apply the operation. The second operand is ignored for `Not`.
    ///
    /// # Panics
    ///
    /// Panics if a binary operation is applied without a second operand;
    /// arity is a property of the call site, not of the data.
    pub fn apply(&self, v: &BitVector, w: Option<&BitVector>) -> Result<BitVector> {
        match (self, w) {
            (BitwiseOp::Not, _) => Ok(v.complement()),
            (BitwiseOp::And, Some(w)) => v.and(w),
            (BitwiseOp::Or, Some(w)) => v.or(w),
            (BitwiseOp::Xor, Some(w)) => v.xor(w),
            (BitwiseOp::Parity, Some(w)) => v.parity(w),
            (op, None) => panic!("{:?} requires two operands", op),
        }
    }
}

#[inline]
fn check_lengths(v: &BitVector, w: &BitVector) -> Result<()> {
    if v.len() != w.len() {
        return Err(BitstringError::LengthMismatch {
            left: v.len(),
            right: w.len(),
        });
    }
    Ok(())
}

#[inline]
fn zip_words<F: Fn(Word, Word) -> Word>(v: &BitVector, w: &BitVector, f: F) -> BitVector {
    let words: Vec<Word> = v
        .words()
        .iter()
        .zip(w.words().iter())
        .map(|(&a, &b)| f(a, b))
        .collect();
    BitVector::from_words(words, v.len())
}

impl BitVector {
    /// Bitwise NOT: every bit inverted.
    pub fn complement(&self) -> BitVector {
        let words: Vec<Word> = self.words().iter().map(|&w| !w).collect();
        BitVector::from_words(words, self.len())
    }

    /// Bitwise AND; fails with `LengthMismatch` on unequal lengths.
    pub fn and(&self, other: &BitVector) -> Result<BitVector> {
        check_lengths(self, other)?;
        Ok(zip_words(self, other, |a, b| a & b))
    }

    /// Bitwise OR; fails with `LengthMismatch` on unequal lengths.
    pub fn or(&self, other: &BitVector) -> Result<BitVector> {
        check_lengths(self, other)?;
        Ok(zip_words(self, other, |a, b| a | b))
    }

    /// Bitwise XOR; fails with `LengthMismatch` on unequal lengths.
    pub fn xor(&self, other: &BitVector) -> Result<BitVector> {
        check_lengths(self, other)?;
        Ok(zip_words(self, other, |a, b| a ^ b))
    }

    /// Per-bit agreement indicator, `NOT(XOR(self, other))`; fails with
    /// `LengthMismatch` on unequal lengths.
    ///
    /// Its population count is the match score of the two vectors.
    pub fn parity(&self, other: &BitVector) -> Result<BitVector> {
        check_lengths(self, other)?;
        Ok(zip_words(self, other, |a, b| !(a ^ b)))
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl Not for BitVector {
    type Output = BitVector;

    fn not(self) -> Self::Output {
        self.complement()
    }
}
