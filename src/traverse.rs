use std::iter::FusedIterator;

use crate::{Case, OutOfRange};

/// A combinatorial family: immutable shape parameters plus the derived case
/// count. Two generators are equal iff their shapes are equal.
pub trait Generator: PartialEq {
    /// Total number of cases.
    fn size(&self) -> usize;
}

/// A pure position marker over some generator's enumeration order.
///
/// Stepping never mutates a cursor in place; it returns the neighbouring
/// position. Positions outside the valid range collapse into the end
/// sentinel, where [`Cursor::value`] fails with [`OutOfRange`].
pub trait Cursor: Clone + PartialEq {
    /// Materialize the case at this position.
    fn value(&self) -> Result<Case, OutOfRange>;

    /// The next position, or the end sentinel when exhausted.
    fn advance(&self) -> Self;
}

/// Cursors that can also step towards the front.
pub trait StepBack: Cursor {
    /// The previous position. From the end sentinel this is the last case;
    /// from the first case it is the end sentinel.
    fn retreat(&self) -> Self;

    /// Adapt this cursor into one that walks the opposite direction.
    fn reverse(self) -> Reverse<Self> {
        Reverse { base: self }
    }
}

/// Families that can be walked front to back.
pub trait ForwardGenerator: Generator {
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    /// Cursor at the first case.
    fn begin(&self) -> Self::Cursor<'_>;

    /// The one-past-last sentinel.
    fn end(&self) -> Self::Cursor<'_>;

    /// Lazy traversal over every case in canonical order. Each call restarts
    /// from the first case.
    fn cases(&self) -> Traverse<Self::Cursor<'_>> {
        Traverse {
            front: self.begin(),
            back: self.end(),
        }
    }
}

/// Families whose cursors step both ways.
pub trait BidirectionalGenerator: ForwardGenerator {
    /// Reverse cursor at the last case.
    fn rbegin<'a>(&'a self) -> Reverse<Self::Cursor<'a>>
    where
        Self::Cursor<'a>: StepBack,
    {
        self.end().reverse()
    }

    /// Reverse counterpart of the end sentinel.
    fn rend<'a>(&'a self) -> Reverse<Self::Cursor<'a>>
    where
        Self::Cursor<'a>: StepBack,
    {
        self.begin().reverse()
    }

    /// Lazy traversal in reverse canonical order.
    fn rcases<'a>(&'a self) -> Traverse<Reverse<Self::Cursor<'a>>>
    where
        Self::Cursor<'a>: StepBack,
    {
        Traverse {
            front: self.rbegin(),
            back: self.rend(),
        }
    }
}

/// Reverse adapter over a bidirectional cursor.
///
/// Stores the forward cursor one step past the position it denotes, so
/// `c.reverse().base() == c` for every cursor `c` and no out-of-range
/// position is ever materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reverse<C> {
    base: C,
}

impl<C: Clone> Reverse<C> {
    /// The forward cursor this adapter was built from.
    pub fn base(&self) -> C {
        self.base.clone()
    }
}

impl<C: StepBack> Cursor for Reverse<C> {
    fn value(&self) -> Result<Case, OutOfRange> {
        self.base.retreat().value()
    }

    fn advance(&self) -> Self {
        Reverse {
            base: self.base.retreat(),
        }
    }
}

impl<C: StepBack> StepBack for Reverse<C> {
    fn retreat(&self) -> Self {
        Reverse {
            base: self.base.advance(),
        }
    }
}

/// Iterator over the cases between two cursors.
#[derive(Debug, Clone)]
pub struct Traverse<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Iterator for Traverse<C> {
    type Item = Case;

    fn next(&mut self) -> Option<Case> {
        if self.front == self.back {
            return None;
        }
        let case = self.front.value().ok();
        self.front = self.front.advance();
        case
    }
}

impl<C: StepBack> DoubleEndedIterator for Traverse<C> {
    fn next_back(&mut self) -> Option<Case> {
        if self.front == self.back {
            return None;
        }
        self.back = self.back.retreat();
        self.back.value().ok()
    }
}

impl<C: Cursor> FusedIterator for Traverse<C> {}
