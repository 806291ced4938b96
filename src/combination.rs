use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::lexical::{next_permutation, prev_permutation};
use crate::traverse::{
    BidirectionalGenerator, Cursor, ForwardGenerator, Generator, StepBack, Traverse,
};
use crate::{Case, NrShape, OutOfRange, ShapeError, binomial, validate_pair};

/// Combination generator: unordered draws of `r` distinct atoms from `0..n`.
///
/// Cases are enumerated by walking lexicographic permutations of a
/// fixed-weight bit mask, so there is no random access by rank; positions
/// are reached by stepping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NrShape", into = "NrShape")]
pub struct Combination {
    n: usize,
    r: usize,
    size: usize,
}

impl Combination {
    pub fn new(n: usize, r: usize) -> Result<Self, ShapeError> {
        validate_pair(n, r)?;
        if r > n {
            return Err(ShapeError::DrawTooLarge { n, r });
        }
        let size = binomial(n, r)?;
        Ok(Self { n, r, size })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn r(&self) -> usize {
        self.r
    }

    /// Mask of the first case: all `r` trues packed to the front.
    fn first_mask(&self) -> Vec<bool> {
        let mut mask = vec![true; self.r];
        mask.resize(self.n, false);
        mask
    }
}

impl Generator for Combination {
    fn size(&self) -> usize {
        self.size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MaskPosition {
    At { step: usize, mask: Vec<bool> },
    End,
}

/// Position over a [`Combination`]: the bit mask of the current case, or
/// the end sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationCursor<'a> {
    source: &'a Combination,
    position: MaskPosition,
}

impl<'a> CombinationCursor<'a> {
    pub fn source(&self) -> &'a Combination {
        self.source
    }
}

impl Cursor for CombinationCursor<'_> {
    fn value(&self) -> Result<Case, OutOfRange> {
        match &self.position {
            MaskPosition::At { mask, .. } => {
                Ok(mask.iter().positions(|&selected| selected).collect())
            }
            MaskPosition::End => Err(OutOfRange {
                rank: self.source.size,
                size: self.source.size,
            }),
        }
    }

    fn advance(&self) -> Self {
        let position = match &self.position {
            MaskPosition::At { step, mask } if step + 1 < self.source.size => {
                let mut mask = mask.clone();
                prev_permutation(&mut mask);
                MaskPosition::At {
                    step: step + 1,
                    mask,
                }
            }
            _ => MaskPosition::End,
        };
        Self {
            source: self.source,
            position,
        }
    }
}

impl StepBack for CombinationCursor<'_> {
    fn retreat(&self) -> Self {
        let position = match &self.position {
            MaskPosition::At { step, mask } if *step > 0 => {
                let mut mask = mask.clone();
                next_permutation(&mut mask);
                MaskPosition::At {
                    step: step - 1,
                    mask,
                }
            }
            MaskPosition::At { .. } => MaskPosition::End,
            MaskPosition::End => {
                // The begin mask is the largest arrangement, so one
                // terminal next_permutation leaves the smallest: the mask
                // of the final case.
                let mut mask = self.source.first_mask();
                next_permutation(&mut mask);
                MaskPosition::At {
                    step: self.source.size - 1,
                    mask,
                }
            }
        };
        Self {
            source: self.source,
            position,
        }
    }
}

impl ForwardGenerator for Combination {
    type Cursor<'a>
        = CombinationCursor<'a>
    where
        Self: 'a;

    fn begin(&self) -> CombinationCursor<'_> {
        CombinationCursor {
            source: self,
            position: MaskPosition::At {
                step: 0,
                mask: self.first_mask(),
            },
        }
    }

    fn end(&self) -> CombinationCursor<'_> {
        CombinationCursor {
            source: self,
            position: MaskPosition::End,
        }
    }
}

impl BidirectionalGenerator for Combination {}

impl TryFrom<NrShape> for Combination {
    type Error = ShapeError;

    fn try_from(shape: NrShape) -> Result<Self, ShapeError> {
        Self::new(shape.n, shape.r)
    }
}

impl From<Combination> for NrShape {
    fn from(combination: Combination) -> NrShape {
        NrShape {
            n: combination.n,
            r: combination.r,
        }
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = Case;
    type IntoIter = Traverse<CombinationCursor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases()
    }
}
