//! Range segment tree for range assignment with maximum queries.

use crate::{RangeSegTree, RangeSegTreeSpec};
use std::marker::PhantomData;

/// Specification for range assignment with max queries.
///
/// The maximum of `k` copies of a value is the value, so the repeat operator
/// ignores the count.
pub struct RangeSegTreeAssignMaxSpec<T>(PhantomData<T>);

impl<T> RangeSegTreeSpec for RangeSegTreeAssignMaxSpec<T>
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

    fn rep(_count: usize, value: &Self::T) -> Self::T {
        value.clone()
    }
}

/// Range segment tree specialized for range assignment and max queries.
pub type RangeSegTreeAssignMax<T> = RangeSegTree<RangeSegTreeAssignMaxSpec<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_max() {
        let mut tree = RangeSegTreeAssignMax::<i32>::from_vec((0..8).collect());

        tree.update(1..6, 9);
        assert_eq!(tree.query(..), 9);
        assert_eq!(tree.query(6..8), 7);

        tree.update(..8, -1);
        assert_eq!(tree.query(..), -1);
    }

    #[test]
    fn test_max_prefix_search_sees_assignments() {
        let mut tree = RangeSegTreeAssignMax::<i32>::from_vec((0..8).collect());
        tree.update(1..6, 9);
        assert_eq!(tree.prefix_search(|m| *m >= 9, ..), Some(2));
    }
}
