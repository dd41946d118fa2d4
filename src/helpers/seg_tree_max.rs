//! Segment tree for maximum operations.

use crate::{SegTree, SegTreeSpec};
use std::marker::PhantomData;

/// Specification for maximum operations over any ordered type.
pub struct SegTreeMaxSpec<T>(PhantomData<T>);

impl<T> SegTreeSpec for SegTreeMaxSpec<T>
where
    T: Clone + Ord,
{
    type T = T;

    fn op(a: &Self::T, b: &Self::T) -> Self::T {
        if a >= b {
            a.clone()
        } else {
            b.clone()
        }
    }
}

/// Segment tree specialized for maximum operations.
pub type SegTreeMax<T> = SegTree<SegTreeMaxSpec<T>>;
