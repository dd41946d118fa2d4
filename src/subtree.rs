//! # Subtree Module
//!
//! This module provides [`Subtree`], a handle into the flat recursive layout
//! shared by [`SegTree`](crate::SegTree) and
//! [`RangeSegTree`](crate::RangeSegTree).
//!
//! A tree over `n` logical elements occupies `2n - 1` contiguous slots. The
//! subtree covering the half-open interval `[left, right)` is rooted at some
//! slot `p`; with `mid = left + (right - left) / 2` its left child is rooted
//! at `p + 1` covering `[left, mid)` and its right child at
//! `p + 2 * (mid - left)` covering `[mid, right)`.
//!
//! The right-child offset is the slot count of the left subtree
//! (`2 * (mid - left) - 1`) plus one for the node itself. Unlike the familiar
//! `2i / 2i + 1` heap indexing, this layout needs no padding to a power of
//! two: subtree widths follow the actual interval split, so it works for any
//! `n > 0`.
//!
//! ## Layout for n = 5
//! ```text
//! slot:      0  1  2  3  4  5  6  7  8
//! covers:    [0,5)
//!               [0,2)
//!                  [0,1) [1,2)
//!                              [2,5)
//!                                 [2,3)
//!                                    [3,5)
//!                                       [3,4) [4,5)
//! ```

/// A subtree of the flat recursive layout: a root slot index together with
/// the half-open interval of logical indices it covers.
///
/// `Subtree` doubles as the descriptor produced by range decomposition: a
/// maximal subtree fully contained in a query range.
///
/// # Examples
///
/// ```rust
/// use range_query_trees::Subtree;
///
/// let root = Subtree::whole(5);
/// assert_eq!(root.root, 0);
/// assert_eq!((root.left, root.right), (0, 5));
/// assert_eq!(root.left_child().root, 1);
/// assert_eq!(root.right_child().root, 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Subtree {
    /// Slot index of the subtree root.
    pub root: usize,
    /// Inclusive start of the covered interval.
    pub left: usize,
    /// Exclusive end of the covered interval.
    pub right: usize,
}

impl Subtree {
    /// Returns the root subtree of a tree over `len` logical elements.
    #[inline]
    pub fn whole(len: usize) -> Subtree {
        Subtree {
            root: 0,
            left: 0,
            right: len,
        }
    }

    /// Returns the number of logical elements this subtree covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left
    }

    /// Returns true if this subtree covers a single element.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.len() == 1
    }

    /// Returns the split point of the covered interval.
    ///
    /// The left child covers `[left, mid())`, the right child
    /// `[mid(), right)`.
    #[inline]
    pub fn mid(&self) -> usize {
        self.left + self.len() / 2
    }

    /// Returns the number of slots this subtree occupies, root included.
    #[inline]
    pub fn slot_count(&self) -> usize {
        2 * self.len() - 1
    }

    /// Returns the left child of this subtree.
    ///
    /// Must not be called on a leaf.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use range_query_trees::Subtree;
    ///
    /// let left = Subtree::whole(5).left_child();
    /// assert_eq!((left.root, left.left, left.right), (1, 0, 2));
    /// ```
    #[inline]
    pub fn left_child(&self) -> Subtree {
        Subtree {
            root: self.root + 1,
            left: self.left,
            right: self.mid(),
        }
    }

    /// Returns the right child of this subtree.
    ///
    /// The offset `2 * (mid - left)` skips the node itself plus the
    /// `2 * (mid - left) - 1` slots of the left subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use range_query_trees::Subtree;
    ///
    /// let right = Subtree::whole(5).right_child();
    /// assert_eq!((right.root, right.left, right.right), (4, 2, 5));
    /// ```
    #[inline]
    pub fn right_child(&self) -> Subtree {
        let mid = self.mid();
        Subtree {
            root: self.root + 2 * (mid - self.left),
            left: mid,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Subtree;

    #[test]
    fn test_whole() {
        let root = Subtree::whole(8);
        assert_eq!(root.root, 0);
        assert_eq!(root.len(), 8);
        assert_eq!(root.slot_count(), 15);
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_children_even_split() {
        let root = Subtree::whole(8);
        let left = root.left_child();
        let right = root.right_child();

        assert_eq!((left.root, left.left, left.right), (1, 0, 4));
        assert_eq!((right.root, right.left, right.right), (8, 4, 8));
        // The two children and the root account for every slot.
        assert_eq!(left.slot_count() + right.slot_count() + 1, root.slot_count());
    }

    #[test]
    fn test_children_odd_split() {
        let root = Subtree::whole(5);
        assert_eq!(root.mid(), 2);

        let left = root.left_child();
        let right = root.right_child();
        assert_eq!((left.root, left.left, left.right), (1, 0, 2));
        assert_eq!((right.root, right.left, right.right), (4, 2, 5));
    }

    #[test]
    fn test_single_element_tree() {
        let root = Subtree::whole(1);
        assert!(root.is_leaf());
        assert_eq!(root.slot_count(), 1);
    }

    /// Walking the layout visits each of the `2n - 1` slots exactly once.
    #[test]
    fn test_layout_is_a_permutation() {
        fn walk(node: Subtree, seen: &mut Vec<bool>) {
            assert!(!seen[node.root], "slot {} visited twice", node.root);
            seen[node.root] = true;
            if !node.is_leaf() {
                walk(node.left_child(), seen);
                walk(node.right_child(), seen);
            }
        }

        for n in 1..60 {
            let root = Subtree::whole(n);
            let mut seen = vec![false; root.slot_count()];
            walk(root, &mut seen);
            assert!(seen.iter().all(|&v| v), "unvisited slot for n = {}", n);
        }
    }

    /// Leaves are constructed in left-to-right interval order.
    #[test]
    fn test_leaves_in_order() {
        fn leaves(node: Subtree, out: &mut Vec<usize>) {
            if node.is_leaf() {
                out.push(node.left);
            } else {
                leaves(node.left_child(), out);
                leaves(node.right_child(), out);
            }
        }

        for n in 1..40 {
            let mut out = Vec::new();
            leaves(Subtree::whole(n), &mut out);
            assert_eq!(out, (0..n).collect::<Vec<_>>());
        }
    }
}
