//! Helper types for common tree operations.
//!
//! This module provides pre-built specifications and type aliases for common
//! operations: sums over all three trees, min/max segment trees, and
//! range-assignment trees with sum/min/max queries.

mod fenwick_sum;

mod seg_tree_max;
mod seg_tree_min;
mod seg_tree_sum;

mod range_seg_tree_assign_max;
mod range_seg_tree_assign_min;
mod range_seg_tree_assign_sum;

pub use fenwick_sum::{FenwickSum, FenwickSumSpec};

pub use seg_tree_max::{SegTreeMax, SegTreeMaxSpec};
pub use seg_tree_min::{SegTreeMin, SegTreeMinSpec};
pub use seg_tree_sum::{SegTreeSum, SegTreeSumSpec};

pub use range_seg_tree_assign_max::{RangeSegTreeAssignMax, RangeSegTreeAssignMaxSpec};
pub use range_seg_tree_assign_min::{RangeSegTreeAssignMin, RangeSegTreeAssignMinSpec};
pub use range_seg_tree_assign_sum::{RangeSegTreeAssignSum, RangeSegTreeAssignSumSpec};
