//! Segment tree for minimum operations.

use crate::{SegTree, SegTreeSpec};
use std::marker::PhantomData;

/// Specification for minimum operations over any ordered type.
pub struct SegTreeMinSpec<T>(PhantomData<T>);

impl<T> SegTreeSpec for SegTreeMinSpec<T>
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
}

/// Segment tree specialized for minimum operations.
pub type SegTreeMin<T> = SegTree<SegTreeMinSpec<T>>;
