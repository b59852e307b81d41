//! Stochastic operators: mutation, jitter, and crossover.
//!
//! Every operator draws from an injected [`rand::Rng`] rather than hidden
//! global state, so behavior is reproducible under test with a seeded
//! generator. Like every other transform, the operators return new vectors
//! and leave their inputs untouched.

use rand::Rng;

use crate::bitvector::{bit_offset, word_idx, BitVector};
use crate::error::{BitstringError, Result};

impl BitVector {
    /// With probability `probability`, set one uniformly chosen bit to an
    /// independently drawn random boolean; otherwise return an equal-valued
    /// copy.
    ///
    /// The drawn value is random, not the flipped value, so a "mutation" may
    /// leave the vector unchanged. The empty vector is always returned as-is.
    pub fn mutate<R: Rng>(&self, probability: f64, rng: &mut R) -> BitVector {
        if self.is_empty() || rng.gen::<f64>() >= probability {
            return self.clone();
        }
        let index = rng.gen_range(0..self.len());
        let value = rng.gen::<bool>();
        let mut words = self.words().to_vec();
        if value {
            words[word_idx(index)] |= 1 << bit_offset(index);
        } else {
            words[word_idx(index)] &= !(1 << bit_offset(index));
        }
        BitVector::from_words(words, self.len())
    }

    /// Set bit `index` to an independently drawn random boolean, ignoring
    /// its current value.
    ///
    /// Fails with `IndexOutOfBounds` if `index >= len()`.
    pub fn mutate_at<R: Rng>(&self, index: usize, rng: &mut R) -> Result<BitVector> {
        let value = rng.gen::<bool>();
        self.with_bit(index, value)
    }

    /// For every bit independently: keep it with probability `probability`,
    /// otherwise invert it.
    pub fn jitter<R: Rng>(&self, probability: f64, rng: &mut R) -> BitVector {
        self.jitter_map(rng, |_| probability)
    }

    /// Per-bit jitter: bit `i` is kept with probability `probabilities[i]`
    /// and inverted otherwise.
    ///
    /// Fails with `ProbabilityCount` if the array length differs from
    /// `len()`.
    pub fn jitter_per_bit<R: Rng>(&self, probabilities: &[f64], rng: &mut R) -> Result<BitVector> {
        if probabilities.len() != self.len() {
            return Err(BitstringError::ProbabilityCount {
                expected: self.len(),
                actual: probabilities.len(),
            });
        }
        Ok(self.jitter_map(rng, |i| probabilities[i]))
    }

    fn jitter_map<R: Rng, F: Fn(usize) -> f64>(&self, rng: &mut R, keep_prob: F) -> BitVector {
        let mut words = vec![0; self.num_words()];
        for i in 0..self.len() {
            let kept = rng.gen::<f64>() < keep_prob(i);
            if self.bit(i) == kept {
                words[word_idx(i)] |= 1 << bit_offset(i);
            }
        }
        BitVector::from_words(words, self.len())
    }

    /// Single-point crossover at a fixed cut in `[0, len()]`.
    ///
    /// Returns the pair
    /// `(self[0..cut] ++ other[cut..], other[0..cut] ++ self[cut..])`.
    /// At `cut == 0` this degenerates to swapping the two inputs; at
    /// `cut == len()` it returns them in original order.
    ///
    /// Fails with `LengthMismatch` on unequal lengths and `InvalidRange` if
    /// `cut > len()`.
    pub fn crossover_at(&self, other: &BitVector, cut: usize) -> Result<(BitVector, BitVector)> {
        if self.len() != other.len() {
            return Err(BitstringError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let head_a = self.subrange(0, cut)?;
        let tail_a = self.subrange(cut, self.len())?;
        let head_b = other.subrange(0, cut)?;
        let tail_b = other.subrange(cut, other.len())?;
        Ok((head_a.concat(&tail_b), head_b.concat(&tail_a)))
    }

    /// With probability `probability`, cross over at a uniformly random cut
    /// in `[0, len()]`; otherwise return unchanged copies of the pair.
    ///
    /// Fails with `LengthMismatch` on unequal lengths.
    pub fn crossover<R: Rng>(
        &self,
        other: &BitVector,
        probability: f64,
        rng: &mut R,
    ) -> Result<(BitVector, BitVector)> {
        if self.len() != other.len() {
            return Err(BitstringError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        if rng.gen::<f64>() < probability {
            let cut = rng.gen_range(0..=self.len());
            self.crossover_at(other, cut)
        } else {
            Ok((self.clone(), other.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bv(s: &str) -> BitVector {
        BitVector::from_text(s).unwrap()
    }

    #[test]
    fn test_mutate_at_most_one_bit() {
        let mut rng = StdRng::seed_from_u64(3);
        let v = BitVector::zeros(64);
        for _ in 0..50 {
            let m = v.mutate(1.0, &mut rng);
            assert!(m.count_ones() <= 1);
            assert_eq!(m.len(), v.len());
        }
    }

    #[test]
    fn test_mutate_zero_probability() {
        let mut rng = StdRng::seed_from_u64(3);
        let v = bv("110010");
        assert_eq!(v.mutate(0.0, &mut rng), v);
    }

    #[test]
    fn test_mutate_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty = BitVector::zeros(0);
        assert_eq!(empty.mutate(1.0, &mut rng), empty);
    }

    #[test]
    fn test_mutate_at() {
        let mut rng = StdRng::seed_from_u64(11);
        let v = bv("0000");
        let m = v.mutate_at(2, &mut rng).unwrap();
        // only bit 2 may differ
        assert_eq!(m.with_bit(2, false).unwrap(), v);
        assert!(v.mutate_at(4, &mut rng).is_err());
    }

    #[test]
    fn test_jitter_extremes() {
        let mut rng = StdRng::seed_from_u64(5);
        let v = bv("101100101");
        // keep probability 1.0: identical copy
        assert_eq!(v.jitter(1.0, &mut rng), v);
        // keep probability 0.0: full inversion
        assert_eq!(v.jitter(0.0, &mut rng), v.complement());
    }

    #[test]
    fn test_jitter_deterministic_under_seed() {
        let v = BitVector::filled(200, true);
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(v.jitter(0.7, &mut rng1), v.jitter(0.7, &mut rng2));
    }

    #[test]
    fn test_jitter_per_bit() {
        let mut rng = StdRng::seed_from_u64(5);
        let v = bv("1010");
        let j = v
            .jitter_per_bit(&[1.0, 1.0, 0.0, 0.0], &mut rng)
            .unwrap();
        assert_eq!(j, bv("1001"));
    }

    #[test]
    fn test_jitter_per_bit_length_check() {
        let mut rng = StdRng::seed_from_u64(5);
        let v = bv("1010");
        assert_eq!(
            v.jitter_per_bit(&[0.5; 3], &mut rng),
            Err(BitstringError::ProbabilityCount {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_crossover_at_concrete() {
        let (c1, c2) = bv("0000").crossover_at(&bv("1111"), 2).unwrap();
        assert_eq!(c1, bv("0011"));
        assert_eq!(c2, bv("1100"));
    }

    #[test]
    fn test_crossover_at_ends() {
        let a = bv("0011");
        let b = bv("1100");
        // cut 0 swaps the pair
        let (c1, c2) = a.crossover_at(&b, 0).unwrap();
        assert_eq!((c1, c2), (b.clone(), a.clone()));
        // cut len() returns the pair in original order
        let (c1, c2) = a.crossover_at(&b, 4).unwrap();
        assert_eq!((c1, c2), (a.clone(), b.clone()));
    }

    #[test]
    fn test_crossover_self_inverse() {
        let mut rng = StdRng::seed_from_u64(17);
        let a = BitVector::random(70, 0.4, &mut rng);
        let b = BitVector::random(70, 0.6, &mut rng);
        for cut in [0, 1, 31, 32, 33, 35, 69, 70] {
            let (c1, c2) = a.crossover_at(&b, cut).unwrap();
            let (d1, d2) = c1.crossover_at(&c2, cut).unwrap();
            assert_eq!((d1, d2), (a.clone(), b.clone()), "cut {}", cut);
        }
    }

    #[test]
    fn test_crossover_errors() {
        let a = BitVector::zeros(4);
        let b = BitVector::zeros(6);
        assert_eq!(
            a.crossover_at(&b, 2),
            Err(BitstringError::LengthMismatch { left: 4, right: 6 })
        );
        assert!(a.crossover_at(&a, 5).is_err());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(a.crossover(&b, 1.0, &mut rng).is_err());
    }

    #[test]
    fn test_crossover_probability_gate() {
        let mut rng = StdRng::seed_from_u64(23);
        let a = bv("00000000");
        let b = bv("11111111");
        // probability 0: unchanged copies in original order
        let (c1, c2) = a.crossover(&b, 0.0, &mut rng).unwrap();
        assert_eq!((c1, c2), (a.clone(), b.clone()));
        // probability 1: children still partition the combined bit counts
        let (c1, c2) = a.crossover(&b, 1.0, &mut rng).unwrap();
        assert_eq!(c1.count_ones() + c2.count_ones(), 8);
    }
}
