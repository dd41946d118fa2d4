//! Range segment tree for range assignment with minimum queries.

use crate::{RangeSegTree, RangeSegTreeSpec};
use std::marker::PhantomData;

/// Specification for range assignment with min queries.
pub struct RangeSegTreeAssignMinSpec<T>(PhantomData<T>);

impl<T> RangeSegTreeSpec for RangeSegTreeAssignMinSpec<T>
where
    T: Clone + Ord,
{
    type T = T;

    fn op(a: &Self::T, b: &Self::T) -> Self::T {
        if a <= b {
            a.clone()
        } else {
            b.clone()
        }
    }

    fn rep(_count: usize, value: &Self::T) -> Self::T {
        value.clone()
    }
}

/// Range segment tree specialized for range assignment and min queries.
pub type RangeSegTreeAssignMin<T> = RangeSegTree<RangeSegTreeAssignMinSpec<T>>;
