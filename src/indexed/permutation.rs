use serde::{Deserialize, Serialize};

use super::{RankCursor, Unrank};
use crate::traverse::{BidirectionalGenerator, ForwardGenerator, Generator, Traverse};
use crate::{Atom, Case, NrShape, ShapeError, validate_pair};

/// Permutation generator: ordered draws of `r` distinct atoms from `0..n`.
///
/// Unranking walks the factorial number system, removing each drawn atom
/// from a shrinking pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NrShape", into = "NrShape")]
pub struct Permutation {
    n: usize,
    r: usize,
    size: usize,
}

impl Permutation {
    pub fn new(n: usize, r: usize) -> Result<Self, ShapeError> {
        validate_pair(n, r)?;
        if r > n {
            return Err(ShapeError::DrawTooLarge { n, r });
        }
        let mut size = 1usize;
        for i in (n - r + 1)..=n {
            size = size.checked_mul(i).ok_or(ShapeError::SizeOverflow)?;
        }
        Ok(Self { n, r, size })
    }

    /// Full permutation of all `n` atoms, the `r = n` special case.
    pub fn factorial(n: usize) -> Result<Self, ShapeError> {
        Self::new(n, n)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn r(&self) -> usize {
        self.r
    }
}

impl Generator for Permutation {
    fn size(&self) -> usize {
        self.size
    }
}

impl Unrank for Permutation {
    fn unrank(&self, mut rank: usize) -> Case {
        let mut pool: Vec<Atom> = (0..self.n).collect();
        let mut case = Vec::with_capacity(self.r);
        for _ in 0..self.r {
            let item = rank % pool.len();
            rank /= pool.len();
            case.push(pool.remove(item));
        }
        case
    }
}

impl ForwardGenerator for Permutation {
    type Cursor<'a>
        = RankCursor<'a, Permutation>
    where
        Self: 'a;

    fn begin(&self) -> RankCursor<'_, Permutation> {
        RankCursor::new(self, 0)
    }

    fn end(&self) -> RankCursor<'_, Permutation> {
        RankCursor::new(self, self.size)
    }
}

impl BidirectionalGenerator for Permutation {}

impl TryFrom<NrShape> for Permutation {
    type Error = ShapeError;

    fn try_from(shape: NrShape) -> Result<Self, ShapeError> {
        Self::new(shape.n, shape.r)
    }
}

impl From<Permutation> for NrShape {
    fn from(permutation: Permutation) -> NrShape {
        NrShape {
            n: permutation.n,
            r: permutation.r,
        }
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = Case;
    type IntoIter = Traverse<RankCursor<'a, Permutation>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases()
    }
}
