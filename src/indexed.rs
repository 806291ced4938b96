use crate::traverse::{Cursor, Generator, StepBack};
use crate::{Case, OutOfRange};

pub mod cartesian;
pub mod permutation;
pub mod repeated_permutation;

/// Families whose case can be decoded straight from its rank.
///
/// Implementors share the [`RankCursor`] position type, which gives them
/// bidirectional stepping without any per-family state.
pub trait Unrank: Generator {
    /// Decode the case at `rank`. Callers uphold `rank < self.size()`.
    fn unrank(&self, rank: usize) -> Case;

    /// Random access with bounds checking.
    fn at(&self, rank: usize) -> Result<Case, OutOfRange> {
        if rank < self.size() {
            Ok(self.unrank(rank))
        } else {
            Err(OutOfRange {
                rank,
                size: self.size(),
            })
        }
    }

    /// Draw a uniformly random case by drawing a uniformly random rank.
    #[cfg(feature = "sampling")]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Case {
        self.unrank(rng.random_range(0..self.size()))
    }
}

/// Position over any rank-addressable family: a rank in `[0, size]`, where
/// `rank == size` is the end sentinel.
#[derive(Debug)]
pub struct RankCursor<'a, G> {
    source: &'a G,
    rank: usize,
}

impl<'a, G> RankCursor<'a, G> {
    pub(crate) fn new(source: &'a G, rank: usize) -> Self {
        Self { source, rank }
    }

    pub fn source(&self) -> &'a G {
        self.source
    }

    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl<G> Clone for RankCursor<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for RankCursor<'_, G> {}

impl<G: PartialEq> PartialEq for RankCursor<'_, G> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.source == other.source
    }
}

impl<G: Unrank> Cursor for RankCursor<'_, G> {
    fn value(&self) -> Result<Case, OutOfRange> {
        self.source.at(self.rank)
    }

    fn advance(&self) -> Self {
        Self {
            source: self.source,
            rank: (self.rank + 1).min(self.source.size()),
        }
    }
}

impl<G: Unrank> StepBack for RankCursor<'_, G> {
    fn retreat(&self) -> Self {
        let rank = match self.rank {
            0 => self.source.size(),
            rank => rank - 1,
        };
        Self {
            source: self.source,
            rank,
        }
    }
}

