use serde::{Deserialize, Serialize};

use super::{RankCursor, Unrank};
use crate::traverse::{BidirectionalGenerator, ForwardGenerator, Generator, Traverse};
use crate::{Case, NrShape, ShapeError, validate_pair};

/// Repeated-permutation generator: ordered draws of `r` atoms from `0..n`
/// with repetition. A case is the base-`n` expansion of its rank, most
/// significant digit first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NrShape", into = "NrShape")]
pub struct RepeatedPermutation {
    n: usize,
    r: usize,
    size: usize,
    dividers: Vec<usize>,
}

impl RepeatedPermutation {
    pub fn new(n: usize, r: usize) -> Result<Self, ShapeError> {
        validate_pair(n, r)?;
        let mut dividers = vec![0; r];
        let mut size = 1usize;
        for divider in dividers.iter_mut().rev() {
            *divider = size;
            size = size.checked_mul(n).ok_or(ShapeError::SizeOverflow)?;
        }
        Ok(Self {
            n,
            r,
            size,
            dividers,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn r(&self) -> usize {
        self.r
    }
}

impl Generator for RepeatedPermutation {
    fn size(&self) -> usize {
        self.size
    }
}

impl Unrank for RepeatedPermutation {
    fn unrank(&self, rank: usize) -> Case {
        self.dividers
            .iter()
            .map(|&divider| rank / divider % self.n)
            .collect()
    }
}

impl ForwardGenerator for RepeatedPermutation {
    type Cursor<'a>
        = RankCursor<'a, RepeatedPermutation>
    where
        Self: 'a;

    fn begin(&self) -> RankCursor<'_, RepeatedPermutation> {
        RankCursor::new(self, 0)
    }

    fn end(&self) -> RankCursor<'_, RepeatedPermutation> {
        RankCursor::new(self, self.size)
    }
}

impl BidirectionalGenerator for RepeatedPermutation {}

impl TryFrom<NrShape> for RepeatedPermutation {
    type Error = ShapeError;

    fn try_from(shape: NrShape) -> Result<Self, ShapeError> {
        Self::new(shape.n, shape.r)
    }
}

impl From<RepeatedPermutation> for NrShape {
    fn from(permutation: RepeatedPermutation) -> NrShape {
        NrShape {
            n: permutation.n,
            r: permutation.r,
        }
    }
}

impl<'a> IntoIterator for &'a RepeatedPermutation {
    type Item = Case;
    type IntoIter = Traverse<RankCursor<'a, RepeatedPermutation>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases()
    }
}
