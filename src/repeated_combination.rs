use serde::{Deserialize, Serialize};

use crate::traverse::{Cursor, ForwardGenerator, Generator, Traverse};
use crate::{Atom, Case, NrShape, OutOfRange, ShapeError, binomial, validate_pair};

/// Repeated-combination (multiset) generator: unordered draws of `r` atoms
/// from `0..n` with repetition.
///
/// Enumeration is forward-only: the carry-propagation stepping rule is not
/// invertible without re-deriving the pre-carry state, so no reverse
/// traversal is offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NrShape", into = "NrShape")]
pub struct RepeatedCombination {
    n: usize,
    r: usize,
    size: usize,
}

impl RepeatedCombination {
    pub fn new(n: usize, r: usize) -> Result<Self, ShapeError> {
        validate_pair(n, r)?;
        let pool = n.checked_add(r - 1).ok_or(ShapeError::SizeOverflow)?;
        let size = binomial(pool, r)?;
        Ok(Self { n, r, size })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn r(&self) -> usize {
        self.r
    }

    /// Odometer step with reset-to-carry rather than reset-to-zero, which
    /// keeps the tuple weakly decreasing across a carry boundary. Returns
    /// `true` once the guard slot overflows.
    fn step_tuple(&self, idx: &mut [Atom]) -> bool {
        idx[0] += 1;
        for i in 0..self.r {
            if idx[i] > self.n - 1 {
                idx[i + 1] += 1;
                for k in 0..=i {
                    idx[k] = idx[i + 1];
                }
            }
        }
        idx[self.r] > 0
    }
}

impl Generator for RepeatedCombination {
    fn size(&self) -> usize {
        self.size
    }
}

#[derive(Debug, Clone)]
enum TuplePosition {
    At { step: usize, idx: Vec<Atom> },
    End,
}

/// Position over a [`RepeatedCombination`]: an index tuple with one
/// carry-out guard slot, or the end sentinel.
#[derive(Debug, Clone)]
pub struct RepeatedCombinationCursor<'a> {
    source: &'a RepeatedCombination,
    position: TuplePosition,
}

impl<'a> RepeatedCombinationCursor<'a> {
    pub fn source(&self) -> &'a RepeatedCombination {
        self.source
    }

    fn step(&self) -> Option<usize> {
        match &self.position {
            TuplePosition::At { step, .. } => Some(*step),
            TuplePosition::End => None,
        }
    }
}

impl PartialEq for RepeatedCombinationCursor<'_> {
    // Position determines the tuple, so comparing steps is enough.
    fn eq(&self, other: &Self) -> bool {
        self.step() == other.step() && self.source == other.source
    }
}

impl Cursor for RepeatedCombinationCursor<'_> {
    fn value(&self) -> Result<Case, OutOfRange> {
        match &self.position {
            TuplePosition::At { idx, .. } => {
                Ok(idx[..self.source.r].iter().rev().copied().collect())
            }
            TuplePosition::End => Err(OutOfRange {
                rank: self.source.size,
                size: self.source.size,
            }),
        }
    }

    fn advance(&self) -> Self {
        let position = match &self.position {
            TuplePosition::At { step, idx } if step + 1 < self.source.size => {
                let mut idx = idx.clone();
                self.source.step_tuple(&mut idx);
                TuplePosition::At {
                    step: step + 1,
                    idx,
                }
            }
            _ => TuplePosition::End,
        };
        Self {
            source: self.source,
            position,
        }
    }
}

impl ForwardGenerator for RepeatedCombination {
    type Cursor<'a>
        = RepeatedCombinationCursor<'a>
    where
        Self: 'a;

    fn begin(&self) -> RepeatedCombinationCursor<'_> {
        RepeatedCombinationCursor {
            source: self,
            position: TuplePosition::At {
                step: 0,
                idx: vec![0; self.r + 1],
            },
        }
    }

    fn end(&self) -> RepeatedCombinationCursor<'_> {
        RepeatedCombinationCursor {
            source: self,
            position: TuplePosition::End,
        }
    }
}

impl TryFrom<NrShape> for RepeatedCombination {
    type Error = ShapeError;

    fn try_from(shape: NrShape) -> Result<Self, ShapeError> {
        Self::new(shape.n, shape.r)
    }
}

impl From<RepeatedCombination> for NrShape {
    fn from(combination: RepeatedCombination) -> NrShape {
        NrShape {
            n: combination.n,
            r: combination.r,
        }
    }
}

impl<'a> IntoIterator for &'a RepeatedCombination {
    type Item = Case;
    type IntoIter = Traverse<RepeatedCombinationCursor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases()
    }
}
