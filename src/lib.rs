//! Bitstring - Immutable Packed Bit Vector with Genetic Operators
//!
//! Bitstring provides a fixed-length, immutable bit vector type packed into
//! 32-bit words, with bitwise algebra, structural reshaping, stochastic
//! genetic operators, and a reversible Gray-coding transform.
//!
//! # Key Characteristics
//!
//! - Value semantics: every transform returns a new vector; existing values
//!   are never mutated, so sharing across threads needs no locks
//! - Canonical storage: bits beyond the length in the last word are always
//!   zero, keeping popcount and equality word-level operations
//! - Injected randomness: every stochastic operator takes a `rand::Rng`, so
//!   seeded tests are fully deterministic
//! - Fail-fast errors: range, length-mismatch, and format violations are
//!   reported at the violating call through [`BitstringError`]
//!
//! # Components
//!
//! - **BitVector**: storage, indexing, structural operations, counting
//! - **Bitwise algebra**: NOT/AND/OR/XOR/PARITY plus the closed
//!   [`BitwiseOp`] dispatch enum
//! - **Genetic operators**: mutate, jitter, crossover
//! - **Gray coding**: logical shift, encode, and exact-inverse decode
//! - **Text codec**: canonical `'1'`/`'0'` form with a tolerant parse
//!   alphabet and a sentinel token for the length-0 vector
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use bitstring::BitVector;
//!
//! let v = BitVector::from_text("1100").unwrap();
//! let w = BitVector::from_text("1010").unwrap();
//!
//! assert_eq!(v.and(&w).unwrap(), "1000");
//! assert_eq!(v.xor(&w).unwrap(), "0110");
//! assert_eq!(v.gray_code(), "1010");
//! assert_eq!(v.gray_code().gray_decode(), v);
//! ```
//!
//! ## Genetic Operators
//!
//! ```
//! use bitstring::BitVector;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let a = BitVector::from_text("0000").unwrap();
//! let b = BitVector::from_text("1111").unwrap();
//!
//! let (c1, c2) = a.crossover_at(&b, 2).unwrap();
//! assert_eq!(c1, "0011");
//! assert_eq!(c2, "1100");
//!
//! let jittered = a.jitter(0.9, &mut rng);
//! assert_eq!(jittered.len(), 4);
//! ```
//!
//! # Performance
//!
//! Counting and combining run word-at-a-time over `u32` storage with
//! hardware popcount; all operations are linear in the length or the word
//! count. Bounds checks on public accessors return `Result`, while internal
//! hot paths use `debug_assert!` for zero-cost checking in release builds.

// Module declarations
pub mod bitvector;
pub mod bitwise;
pub mod error;
pub mod genetic;
pub mod gray;
pub mod text;

// Re-exports for convenient access
pub use bitvector::{BitVector, Word, BITS_PER_WORD};
pub use bitwise::BitwiseOp;
pub use error::{BitstringError, Result};
pub use text::{is_one_char, is_zero_char, normalize_text, EMPTY_TEXT};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Bitstring";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
