//! Generators for the classical combinatorial families: Cartesian products,
//! permutations, repeated permutations, combinations and repeated
//! combinations (multisets). Cases are computed on demand from small
//! immutable shape descriptions instead of being materialized up front.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A candidate label. Every family draws from the contiguous pool `0..n`.
pub type Atom = usize;

/// One enumerated case.
pub type Case = Vec<Atom>;

mod combination;
mod indexed;
pub mod lexical;
mod repeated_combination;
mod traverse;

pub use combination::{Combination, CombinationCursor};
pub use indexed::cartesian::CartesianProduct;
pub use indexed::permutation::Permutation;
pub use indexed::repeated_permutation::RepeatedPermutation;
pub use indexed::{RankCursor, Unrank};
pub use repeated_combination::{RepeatedCombination, RepeatedCombinationCursor};
pub use traverse::{
    BidirectionalGenerator, Cursor, ForwardGenerator, Generator, Reverse, StepBack, Traverse,
};

/// Rejected shape parameters. Fatal to construction; no generator is
/// produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("n and r must both be positive (n = {n}, r = {r})")]
    ZeroParameter { n: usize, r: usize },

    #[error("cannot draw {r} distinct atoms from a pool of {n}")]
    DrawTooLarge { n: usize, r: usize },

    #[error("every digit must be positive (digits = {digits:?})")]
    ZeroDigit { digits: Vec<usize> },

    #[error("the family holds more cases than usize can represent")]
    SizeOverflow,
}

/// A rank outside `0..size`, or a case read from an end sentinel.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("rank {rank} is out of range (size = {size})")]
pub struct OutOfRange {
    pub rank: usize,
    pub size: usize,
}

pub(crate) fn validate_pair(n: usize, r: usize) -> Result<(), ShapeError> {
    if n == 0 || r == 0 {
        Err(ShapeError::ZeroParameter { n, r })
    } else {
        Ok(())
    }
}

/// Binomial coefficient by the multiplicative recurrence. Each partial
/// product is divisible by its step index, so the division stays exact.
pub(crate) fn binomial(n: usize, k: usize) -> Result<usize, ShapeError> {
    debug_assert!(k <= n);
    let k = k.min(n - k);
    let mut size = 1usize;
    for i in 1..=k {
        size = size
            .checked_mul(n - (k - i))
            .ok_or(ShapeError::SizeOverflow)?
            / i;
    }
    Ok(size)
}

/// Serialized form of every n/r-shaped generator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct NrShape {
    pub(crate) n: usize,
    pub(crate) r: usize,
}
