//! Logical shift and reflected Gray coding.
//!
//! `shift_right` moves every bit one logical index higher, inserting a 0 at
//! index 0 and discarding the bit that falls off the far end. Under the
//! word storage convention (bit `i` at LSB-offset `i % 32` of word `i / 32`)
//! this is a left shift of each word, with word `k`'s top storage bit carried
//! into word `k + 1`'s bottom storage bit.
//!
//! Gray coding is defined index-wise from index 0: `gray_code(v) = v XOR
//! shift_right(v)`, and `gray_decode` reconstructs the pre-image by a
//! sequential prefix-XOR. The two are exact inverses for every length,
//! including 0 and 1.

use crate::bitvector::{bit_offset, word_idx, BitVector, Word, BITS_PER_WORD};

impl BitVector {
    /// Logical shift of the whole bit sequence by one position toward higher
    /// indices: a 0 enters at index 0 and the last bit is discarded.
    pub fn shift_right(&self) -> BitVector {
        let mut words = vec![0; self.num_words()];
        let mut carry: Word = 0;
        for (j, &w) in self.words().iter().enumerate() {
            words[j] = (w << 1) | carry;
            carry = w >> (BITS_PER_WORD - 1);
        }
        // from_words masks away the bit shifted past `length`
        BitVector::from_words(words, self.len())
    }

    /// Binary-to-reflected-Gray transform: `self XOR shift_right(self)`.
    ///
    /// Defined for any length; the length-0 and length-1 vectors map to
    /// themselves.
    pub fn gray_code(&self) -> BitVector {
        let shifted = self.shift_right();
        let words: Vec<Word> = self
            .words()
            .iter()
            .zip(shifted.words().iter())
            .map(|(&a, &b)| a ^ b)
            .collect();
        BitVector::from_words(words, self.len())
    }

    /// Inverse of [`gray_code`](Self::gray_code) by sequential prefix-XOR:
    /// `result[0] = self[0]`, then `result[i] = result[i-1] XOR self[i]`.
    ///
    /// `v.gray_code().gray_decode() == v` for every vector of every length.
    pub fn gray_decode(&self) -> BitVector {
        let mut words = vec![0; self.num_words()];
        let mut prev = false;
        for i in 0..self.len() {
            let bit = prev ^ self.bit(i);
            if bit {
                words[word_idx(i)] |= 1 << bit_offset(i);
            }
            prev = bit;
        }
        BitVector::from_words(words, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn bv(s: &str) -> BitVector {
        BitVector::from_text(s).unwrap()
    }

    #[test]
    fn test_shift_right() {
        assert_eq!(bv("1100").shift_right(), bv("0110"));
        assert_eq!(bv("1011").shift_right(), bv("0101"));
        assert_eq!(bv("1").shift_right(), bv("0"));
    }

    #[test]
    fn test_shift_right_cross_word_carry() {
        // bit 31 must travel into bit 32
        let v = BitVector::zeros(64).with_bit(31, true).unwrap();
        let s = v.shift_right();
        assert!(!s.get(31).unwrap());
        assert!(s.get(32).unwrap());
        assert_eq!(s.count_ones(), 1);
    }

    #[test]
    fn test_shift_right_discards_last_bit() {
        let v = BitVector::filled(33, true);
        let s = v.shift_right();
        assert_eq!(s.count_ones(), 32);
        assert!(!s.get(0).unwrap());
        assert!(s.get(32).unwrap());
    }

    #[test]
    fn test_gray_code_vectors() {
        assert_eq!(bv("1100").gray_code(), bv("1010"));
        assert_eq!(bv("1010").gray_decode(), bv("1100"));
    }

    #[test]
    fn test_gray_degenerate_lengths() {
        let empty = BitVector::zeros(0);
        assert_eq!(empty.gray_code(), empty);
        assert_eq!(empty.gray_decode(), empty);

        let one = bv("1");
        assert_eq!(one.gray_code(), one);
        assert_eq!(one.gray_decode(), one);
        let zero = bv("0");
        assert_eq!(zero.gray_code(), zero);
    }

    #[test]
    fn test_gray_round_trip_cross_word() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);
        for len in [1, 31, 32, 33, 64, 65, 100, 257] {
            let v = BitVector::random(len, 0.5, &mut rng);
            assert_eq!(v.gray_code().gray_decode(), v, "length {}", len);
        }
    }

    #[test]
    fn test_decode_is_left_inverse_exhaustive_len4() {
        for n in 0u8..16 {
            let v: BitVector = (0..4).map(|b| (n >> b) & 1 == 1).collect();
            assert_eq!(v.gray_code().gray_decode(), v, "n = {}", n);
            assert_eq!(v.gray_decode().gray_code(), v, "n = {}", n);
        }
    }
}
