//! # range_query_trees
//!
//! A family of generic range-query data structures sharing one discipline:
//! implicit array-embedded trees with precise ownership, where every element
//! is explicitly constructed and every partial failure unwinds exactly the
//! elements constructed so far.
//!
//! Three structures are provided, in increasing order of the capability they
//! demand from the element operation:
//!
//! - [`SegTree`]: range query / point update for any **associative**
//!   operation
//! - [`RangeSegTree`]: adds range assignment via lazy propagation; needs a
//!   **repeat** operator (`rep(k, v)` = the k-fold self-fold of `v`)
//! - [`FenwickTree`]: flat binary-indexed layout; needs an **identity** and
//!   a two-sided **inverse**
//!
//! All three expose a uniform query/update surface over half-open ranges,
//! and the segment trees share subtree decomposition driving
//! `prefix_search`/`suffix_search`.
//!
//! ## Quick Start
//!
//! ### Segment tree (point updates)
//!
//! ```rust
//! use range_query_trees::{SegTree, SegTreeSpec};
//!
//! // Define a specification for sum operations
//! struct SumSpec;
//! impl SegTreeSpec for SumSpec {
//!     type T = i64;
//!     fn op(a: &i64, b: &i64) -> i64 { a + b }
//! }
//!
//! let mut tree = SegTree::<SumSpec>::from_slice(&[1, 2, 3, 4, 5]);
//!
//! assert_eq!(tree.query(0..5), 15);
//! assert_eq!(tree.query(1..4), 9);
//!
//! tree.update(2, 10); // Change element at index 2 to 10
//! assert_eq!(tree.query(0..5), 22);
//! ```
//!
//! ### Using helper types
//!
//! ```rust
//! use range_query_trees::{SegTreeSum, SegTreeMin, SegTreeMax, FenwickSum};
//!
//! let values = vec![3, 1, 4, 1, 5];
//!
//! let sum_tree = SegTreeSum::<i32>::from_slice(&values);
//! assert_eq!(sum_tree.query(0..5), 14);
//!
//! let min_tree = SegTreeMin::<i32>::from_slice(&values);
//! assert_eq!(min_tree.query(1..4), 1);
//!
//! let max_tree = SegTreeMax::<i32>::from_slice(&values);
//! assert_eq!(max_tree.query(0..3), 4);
//!
//! let mut fenwick = FenwickSum::<i32>::from_slice(&values);
//! fenwick.update(0, 7);
//! assert_eq!(fenwick.query(0..2), 8);
//! assert_eq!(fenwick.query(2..2), 0); // empty ranges fold to the identity
//! ```
//!
//! ### Range assignment
//!
//! ```rust
//! use range_query_trees::RangeSegTreeAssignSum;
//!
//! let mut tree = RangeSegTreeAssignSum::<i64>::from_value(8, 0);
//!
//! tree.update(2..6, 3); // Assign 3 to elements 2, 3, 4, 5
//! assert_eq!(tree.query(0..8), 12);
//! assert_eq!(tree.query(3..5), 6);
//! ```
//!
//! ### Prefix search
//!
//! ```rust
//! use range_query_trees::SegTreeSum;
//!
//! let tree = SegTreeSum::<i64>::from_slice(&[2, 1, 3, 1, 4]);
//!
//! // Exclusive end of the shortest prefix summing past 5.
//! assert_eq!(tree.prefix_search(|s| *s > 5, 0..5), Some(3));
//! // Inclusive start of the shortest suffix summing past 5.
//! assert_eq!(tree.suffix_search(|s| *s > 5, 0..5), Some(2));
//! ```
//!
//! ## Performance
//!
//! Construction is `O(n)` for every tree (the Fenwick build uses a doubling
//! pass, not `n` updates). Queries, point updates, range assignments, and
//! searches are `O(log n)`. Space is one slot per tree node: `2n - 1` for
//! the segment trees (plus the lazy array), `n + 1` for the Fenwick tree.
//!
//! ## Error handling
//!
//! Contract violations (empty segment-tree query, reversed or out-of-bounds
//! ranges, out-of-bounds update) panic with a message naming the offense;
//! nothing is logged or retried. If a user-supplied `Clone` or operator
//! panics during construction, every element already built is dropped before
//! the panic escapes, so no memory leaks and no half-constructed tree is
//! observable. Mid-update panics leave the tree valid and droppable.
//!
//! ## Concurrency
//!
//! Trees have no internal synchronization and are meant to be owned by one
//! thread at a time; distinct trees are fully independent. Note that
//! [`RangeSegTree`] settles lazy state during reads through interior
//! mutability, so shared references to it are not thread-safe by design.

pub mod helpers;

mod build;
mod descent;
mod fenwick_tree;
mod range_seg_tree;
mod seg_tree;
mod subtree;
mod uninit;

pub use helpers::{
    FenwickSum, FenwickSumSpec, RangeSegTreeAssignMax, RangeSegTreeAssignMaxSpec,
    RangeSegTreeAssignMin, RangeSegTreeAssignMinSpec, RangeSegTreeAssignSum,
    RangeSegTreeAssignSumSpec, SegTreeMax, SegTreeMaxSpec, SegTreeMin, SegTreeMinSpec, SegTreeSum,
    SegTreeSumSpec,
};

pub use fenwick_tree::{FenwickSpec, FenwickTree, Side};
pub use range_seg_tree::{RangeSegTree, RangeSegTreeSpec};
pub use seg_tree::{SegTree, SegTreeSpec};
pub use subtree::Subtree;
