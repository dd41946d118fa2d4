//! Fenwick tree for sum operations.
//!
//! Provides `FenwickSum<T>` for efficient range sum queries with point
//! replacement.

use crate::{FenwickSpec, FenwickTree, Side};
use num_traits::ConstZero;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

/// Specification for sum operations.
///
/// Addition is commutative, so the inverse ignores which side the operand
/// came from.
pub struct FenwickSumSpec<T>(PhantomData<T>);

impl<T> FenwickSpec for FenwickSumSpec<T>
where
    T: Clone + ConstZero + Add<Output = T> + Sub<Output = T>,
{
    type T = T;
    const ID: Self::T = <T as ConstZero>::ZERO;

    fn op(a: &Self::T, b: &Self::T) -> Self::T {
        a.clone() + b.clone()
    }

    fn inv(operand: &Self::T, _side: Side, combined: &Self::T) -> Self::T {
        combined.clone() - operand.clone()
    }
}

/// Fenwick tree specialized for sum operations.
pub type FenwickSum<T> = FenwickTree<FenwickSumSpec<T>>;
