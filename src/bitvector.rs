//! BitVector - immutable fixed-length bit sequence packed into 32-bit words.
//!
//! This module provides the core bit vector type. Bits are stored in packed
//! 32-bit words, giving 32× compression compared to byte arrays and letting
//! counting and combining operations run word-at-a-time.
//!
//! # Design
//!
//! - Uses `Vec<u32>` for storage (32-bit words)
//! - Bit indexing: word_idx = bit_idx / 32, bit_offset = bit_idx % 32
//! - The value is immutable: every transform returns a newly constructed
//!   vector and never touches the receiver, so values are safe to share
//!   across threads without synchronization
//! - Canonical form: bits at positions >= `length` in the last word are
//!   always zero in any vector returned from a public operation
//!
//! # Examples
//!
//! ```
//! use bitstring::BitVector;
//!
//! let v = BitVector::zeros(64);
//! let v = v.with_bit(5, true).unwrap();
//! let v = v.with_bit(10, true).unwrap();
//! assert_eq!(v.count_ones(), 2);
//! assert!(v.get(5).unwrap());
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{BitstringError, Result};

/// Word type for bit storage (32-bit unsigned integer)
pub type Word = u32;

/// Number of bits per word
pub const BITS_PER_WORD: usize = 32;

/// Maximum word value
pub const WORD_MAX: Word = Word::MAX;

/// Get word index from bit position
#[inline(always)]
pub(crate) const fn word_idx(bit_pos: usize) -> usize {
    bit_pos >> 5 // bit_pos / 32
}

/// Get bit index within word from bit position
#[inline(always)]
pub(crate) const fn bit_offset(bit_pos: usize) -> usize {
    bit_pos & 31 // bit_pos % 32
}

/// Number of words needed to hold `n` bits
#[inline(always)]
pub(crate) const fn words_for(n: usize) -> usize {
    (n + BITS_PER_WORD - 1) / BITS_PER_WORD
}

/// Create bitmask with n bits set (from LSB)
#[inline(always)]
pub(crate) const fn bitmask(n: usize) -> Word {
    if n == 0 {
        0
    } else if n >= BITS_PER_WORD {
        WORD_MAX
    } else {
        WORD_MAX >> (BITS_PER_WORD - n)
    }
}

/// Immutable fixed-length bit vector using 32-bit word storage.
///
/// All bit indices are 0-based. The length is fixed at construction; every
/// shape- or content-changing operation returns a new vector. A length-0
/// vector is a valid value with zero words.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BitVector {
    /// Storage words (32-bit)
    words: Vec<Word>,
    /// Total number of bits
    length: usize,
}

impl BitVector {
    /// Create a vector of `length` bits, all 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstring::BitVector;
    ///
    /// let v = BitVector::zeros(100);
    /// assert_eq!(v.len(), 100);
    /// assert_eq!(v.count_ones(), 0);
    /// ```
    pub fn zeros(length: usize) -> Self {
        Self {
            words: vec![0; words_for(length)],
            length,
        }
    }

    /// Create a vector of `length` bits, every bit set to `bit`.
    pub fn filled(length: usize, bit: bool) -> Self {
        let fill = if bit { WORD_MAX } else { 0 };
        Self::from_words(vec![fill; words_for(length)], length)
    }

    /// Create a random vector where each bit is 1 with probability
    /// `probability`, drawn independently from the supplied generator.
    ///
    /// Values of `probability` at or below 0.0 produce the all-zero vector;
    /// values at or above 1.0 produce the all-one vector.
    pub fn random<R: Rng>(length: usize, probability: f64, rng: &mut R) -> Self {
        let mut words = vec![0; words_for(length)];
        for i in 0..length {
            if rng.gen::<f64>() < probability {
                words[word_idx(i)] |= 1 << bit_offset(i);
            }
        }
        Self { words, length }
    }

    /// Create a vector from an ordered sequence of booleans.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstring::BitVector;
    ///
    /// let v = BitVector::from_bools([true, false, true, true]);
    /// assert_eq!(v.to_text(), "1011");
    /// ```
    pub fn from_bools<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        let mut words = Vec::new();
        let mut length = 0;
        for bit in bits {
            if bit_offset(length) == 0 {
                words.push(0);
            }
            if bit {
                words[word_idx(length)] |= 1 << bit_offset(length);
            }
            length += 1;
        }
        Self { words, length }
    }

    /// Construct from raw words, masking the last word to canonical form.
    ///
    /// Internal entry point for word-level transforms; enforces the
    /// canonical-form invariant so popcount and equality stay word-wise.
    pub(crate) fn from_words(mut words: Vec<Word>, length: usize) -> Self {
        debug_assert_eq!(words.len(), words_for(length));
        if bit_offset(length) != 0 {
            let last = words.len() - 1;
            words[last] &= bitmask(bit_offset(length));
        }
        Self { words, length }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of bits in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// `true` if the vector has no bits at all (length 0).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of storage words.
    #[inline]
    pub(crate) fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Read-only access to word storage.
    #[inline]
    pub(crate) fn words(&self) -> &[Word] {
        &self.words
    }

    /// Get bit at `index` without a bounds check (debug-asserted).
    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(
            index < self.length,
            "bit index {} out of bounds (length: {})",
            index,
            self.length
        );
        (self.words[word_idx(index)] >> bit_offset(index)) & 1 == 1
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.length {
            return Err(BitstringError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        Ok(())
    }

    /// Get bit at `index`.
    ///
    /// Fails with `IndexOutOfBounds` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    // =========================================================================
    // Single-Bit Transforms
    // =========================================================================

    /// Return a copy with bit `index` forced to `value`.
    ///
    /// Fails with `IndexOutOfBounds` if `index >= len()`.
    pub fn with_bit(&self, index: usize, value: bool) -> Result<BitVector> {
        self.check_index(index)?;
        let mut words = self.words.clone();
        if value {
            words[word_idx(index)] |= 1 << bit_offset(index);
        } else {
            words[word_idx(index)] &= !(1 << bit_offset(index));
        }
        Ok(Self {
            words,
            length: self.length,
        })
    }

    /// Return a copy with bit `index` set to 1.
    pub fn set(&self, index: usize) -> Result<BitVector> {
        self.with_bit(index, true)
    }

    /// Return a copy with bit `index` set to 0.
    pub fn unset(&self, index: usize) -> Result<BitVector> {
        self.with_bit(index, false)
    }

    /// Return a copy with bit `index` inverted.
    pub fn toggle(&self, index: usize) -> Result<BitVector> {
        self.with_bit(index, !self.get(index)?)
    }

    // =========================================================================
    // Structural Transforms
    // =========================================================================

    /// Extract the half-open range `[start, end)` as a new vector.
    ///
    /// Empty ranges (`start == end`) are legal at any position up to and
    /// including `len()`. Fails with `InvalidRange` if `end < start` or
    /// `end > len()`.
    pub fn subrange(&self, start: usize, end: usize) -> Result<BitVector> {
        if end < start || end > self.length {
            return Err(BitstringError::InvalidRange {
                start,
                end,
                length: self.length,
            });
        }
        let length = end - start;
        let mut words = vec![0; words_for(length)];
        let base = word_idx(start);
        let shift = bit_offset(start);
        for (j, word) in words.iter_mut().enumerate() {
            let lo = self.words.get(base + j).copied().unwrap_or(0) >> shift;
            let hi = if shift == 0 {
                0
            } else {
                self.words.get(base + j + 1).copied().unwrap_or(0) << (BITS_PER_WORD - shift)
            };
            *word = lo | hi;
        }
        Ok(Self::from_words(words, length))
    }

    /// All bits except the first; fails on the empty vector.
    pub fn but_first(&self) -> Result<BitVector> {
        if self.length == 0 {
            return Err(BitstringError::EmptyVector { which: "first" });
        }
        self.subrange(1, self.length)
    }

    /// All bits except the last; fails on the empty vector.
    pub fn but_last(&self) -> Result<BitVector> {
        if self.length == 0 {
            return Err(BitstringError::EmptyVector { which: "last" });
        }
        self.subrange(0, self.length - 1)
    }

    /// Bit sequence of `self` followed by the bit sequence of `other`.
    ///
    /// The split point generally does not align to a word boundary, so the
    /// second operand's words are merged in shifted.
    pub fn concat(&self, other: &BitVector) -> BitVector {
        let length = self.length + other.length;
        let mut words = vec![0; words_for(length)];
        words[..self.words.len()].copy_from_slice(&self.words);
        let base = word_idx(self.length);
        let shift = bit_offset(self.length);
        for (j, &w) in other.words.iter().enumerate() {
            if shift == 0 {
                words[base + j] = w;
            } else {
                words[base + j] |= w << shift;
                if base + j + 1 < words.len() {
                    words[base + j + 1] |= w >> (BITS_PER_WORD - shift);
                }
            }
        }
        Self::from_words(words, length)
    }

    /// Vector of length `len() + 1` with `bit` at index 0 and every existing
    /// bit shifted up one logical index.
    pub fn prepend(&self, bit: bool) -> BitVector {
        let length = self.length + 1;
        let mut words = vec![0; words_for(length)];
        let mut carry = bit as Word;
        for (j, &w) in self.words.iter().enumerate() {
            words[j] = (w << 1) | carry;
            carry = w >> (BITS_PER_WORD - 1);
        }
        if words.len() > self.words.len() {
            words[self.words.len()] = carry;
        }
        Self::from_words(words, length)
    }

    /// Vector of length `len() + 1` with `bit` appended at the end.
    pub fn append(&self, bit: bool) -> BitVector {
        let length = self.length + 1;
        let mut words = self.words.clone();
        words.resize(words_for(length), 0);
        if bit {
            words[word_idx(self.length)] |= 1 << bit_offset(self.length);
        }
        Self { words, length }
    }

    // =========================================================================
    // Counting and Comparison
    // =========================================================================

    /// Population count: number of 1 bits.
    ///
    /// Uses hardware popcount over the canonical words.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of 0 bits; `count_ones() + count_zeros() == len()` always.
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.length - self.count_ones()
    }

    /// Number of index positions where `self` and `other` agree, i.e. the
    /// population count of `parity(self, other)`.
    ///
    /// Returns `-1` when the lengths differ instead of failing. This sentinel
    /// is a deliberate asymmetry against the fail-fast policy used by every
    /// other length-checked operation, preserved from the original behavior.
    pub fn match_score(&self, other: &BitVector) -> i64 {
        if self.length != other.length {
            return -1;
        }
        let disagreements: usize = self
            .words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a ^ b).count_ones() as usize)
            .sum();
        (self.length - disagreements) as i64
    }

    /// `true` if every bit is 0. The empty vector is all-zero.
    pub fn is_all_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// `true` if every bit is 1. The empty vector is all-one.
    pub fn is_all_one(&self) -> bool {
        self.count_ones() == self.length
    }

    /// `true` if the bit sequence of `needle` occurs as a contiguous
    /// subsequence of `self`. The empty vector is contained in everything.
    pub fn contains(&self, needle: &BitVector) -> bool {
        if needle.length > self.length {
            return false;
        }
        if needle.length == 0 {
            return true;
        }
        let hay = self.to_bools();
        let pat = needle.to_bools();
        hay.windows(pat.len()).any(|window| window == pat)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The bits as an ordered `Vec<bool>`.
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.length).map(|i| self.bit(i)).collect()
    }

    /// Iterate over the bits in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.length).map(move |i| self.bit(i))
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bools(iter)
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Box<dyn Iterator<Item = bool> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl PartialEq for BitVector {
    /// Compare vectors using word-level comparison.
    ///
    /// Valid because both sides are in canonical form: bits beyond `length`
    /// in the last word are zero.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.words == other.words
    }
}

impl Eq for BitVector {}

impl std::hash::Hash for BitVector {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.words.hash(state);
    }
}
