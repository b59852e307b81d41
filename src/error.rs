//! Error types for the bitstring crate.
//!
//! This module provides a unified error type for all fallible operations on
//! bit vectors, using the `thiserror` crate for ergonomic error handling.
//!
//! The taxonomy follows three families: range errors (index or slice bounds),
//! length mismatches (binary operations over vectors of differing length),
//! and format errors (unparseable text, or a per-bit probability array whose
//! length disagrees with the vector).

use thiserror::Error;

/// The main error type for bit vector operations.
///
/// Every error is detected synchronously at the violating call; because the
/// vector type is immutable, a failed operation never leaves a partially
/// modified value behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitstringError {
    /// Bit index outside `[0, length)`
    #[error("Bit index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds {
        /// The index that was accessed
        index: usize,
        /// The vector length
        length: usize,
    },

    /// Invalid half-open subrange bounds
    #[error("Invalid subrange [{start}, {end}) for bit vector of length {length}")]
    InvalidRange {
        /// Inclusive start of the requested range
        start: usize,
        /// Exclusive end of the requested range
        end: usize,
        /// The vector length
        length: usize,
    },

    /// Binary operation over vectors of differing length
    #[error("Length mismatch: cannot combine bit vectors of lengths {left} and {right}")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// Text contains a character outside the tolerant alphabet
    #[error("Character {character:?} at index {index} is not interpretable as a bit")]
    UnparseableCharacter {
        /// Index of the offending character
        index: usize,
        /// The offending character
        character: char,
    },

    /// Per-bit probability array length disagrees with the vector length
    #[error("Probability array has length {actual} but the bit vector has length {expected}")]
    ProbabilityCount {
        /// The vector length
        expected: usize,
        /// The array length received
        actual: usize,
    },

    /// Structural operation that requires at least one bit was applied to the
    /// empty vector
    #[error("Cannot remove the {which} bit of an empty bit vector")]
    EmptyVector {
        /// Which end was requested ("first" or "last")
        which: &'static str,
    },
}

/// A specialized `Result` type for bit vector operations.
///
/// This is a type alias for `Result<T, BitstringError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, BitstringError>;
