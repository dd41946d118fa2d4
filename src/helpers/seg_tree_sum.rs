//! Segment tree for sum operations.
//!
//! Provides `SegTreeSum<T>` for efficient range sum queries.

use crate::{SegTree, SegTreeSpec};
use std::marker::PhantomData;
use std::ops::Add;

/// Specification for sum operations.
pub struct SegTreeSumSpec<T>(PhantomData<T>);

impl<T> SegTreeSpec for SegTreeSumSpec<T>
where
    T: Clone + Add<Output = T>,
{
    type T = T;

    fn op(a: &Self::T, b: &Self::T) -> Self::T {
        a.clone() + b.clone()
    }
}

/// Segment tree specialized for sum operations.
pub type SegTreeSum<T> = SegTree<SegTreeSumSpec<T>>;
