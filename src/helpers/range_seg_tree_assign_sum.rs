use crate::{RangeSegTree, RangeSegTreeSpec};
use num_traits::NumCast;
use std::marker::PhantomData;
use std::ops::{Add, Mul};

/// Specification for range assignment with sum queries.
///
/// The repeat operator scales the assigned value by the interval length, so
/// `T` must support multiplication and conversion from `usize`.
pub struct RangeSegTreeAssignSumSpec<T>(PhantomData<T>);

impl<T> RangeSegTreeSpec for RangeSegTreeAssignSumSpec<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T> + NumCast,
{
    type T = T;

    fn op(a: &Self::T, b: &Self::T) -> Self::T {
        a.clone() + b.clone()
    }

    fn rep(count: usize, value: &Self::T) -> Self::T {
        value.clone()
            * T::from(count).unwrap_or_else(|| panic!("failed to convert usize to element type"))
    }
}

/// Convenience alias: a `RangeSegTree` specialized for range assignment and
/// sum queries.
///
/// # Examples
///
/// ```
/// use range_query_trees::RangeSegTreeAssignSum;
///
/// let mut tree = RangeSegTreeAssignSum::<i32>::from_slice(&[1, 2, 3, 4, 5]);
///
/// assert_eq!(tree.query(..), 15);
///
/// // Assign 10 to [1, 4)
/// tree.update(1..4, 10);
/// assert_eq!(tree.query(..), 1 + 10 + 10 + 10 + 5);
/// ```
pub type RangeSegTreeAssignSum<T> = RangeSegTree<RangeSegTreeAssignSumSpec<T>>;
