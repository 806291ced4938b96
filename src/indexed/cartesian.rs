use serde::{Deserialize, Serialize};

use super::{RankCursor, Unrank};
use crate::traverse::{BidirectionalGenerator, ForwardGenerator, Generator, Traverse};
use crate::{Case, ShapeError};

/// Cartesian-product generator: one digit per dimension, each with its own
/// radix. Enumeration order counts through the mixed-radix number system,
/// most significant digit first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct CartesianProduct {
    digits: Vec<usize>,
    dividers: Vec<usize>,
    size: usize,
}

impl CartesianProduct {
    pub fn new(digits: Vec<usize>) -> Result<Self, ShapeError> {
        if digits.contains(&0) {
            return Err(ShapeError::ZeroDigit { digits });
        }
        let mut dividers = vec![0; digits.len()];
        let mut size = 1usize;
        for i in (0..digits.len()).rev() {
            dividers[i] = size;
            size = size
                .checked_mul(digits[i])
                .ok_or(ShapeError::SizeOverflow)?;
        }
        Ok(Self {
            digits,
            dividers,
            size,
        })
    }

    /// Radix of each digit.
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }
}

impl Generator for CartesianProduct {
    fn size(&self) -> usize {
        self.size
    }
}

impl Unrank for CartesianProduct {
    fn unrank(&self, rank: usize) -> Case {
        self.digits
            .iter()
            .zip(&self.dividers)
            .map(|(&digit, &divider)| rank / divider % digit)
            .collect()
    }
}

impl ForwardGenerator for CartesianProduct {
    type Cursor<'a>
        = RankCursor<'a, CartesianProduct>
    where
        Self: 'a;

    fn begin(&self) -> RankCursor<'_, CartesianProduct> {
        RankCursor::new(self, 0)
    }

    fn end(&self) -> RankCursor<'_, CartesianProduct> {
        RankCursor::new(self, self.size)
    }
}

impl BidirectionalGenerator for CartesianProduct {}

impl TryFrom<Vec<usize>> for CartesianProduct {
    type Error = ShapeError;

    fn try_from(digits: Vec<usize>) -> Result<Self, ShapeError> {
        Self::new(digits)
    }
}

impl From<CartesianProduct> for Vec<usize> {
    fn from(product: CartesianProduct) -> Vec<usize> {
        product.digits
    }
}

impl<'a> IntoIterator for &'a CartesianProduct {
    type Item = Case;
    type IntoIter = Traverse<RankCursor<'a, CartesianProduct>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases()
    }
}
