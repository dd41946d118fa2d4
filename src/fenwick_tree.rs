//! A generic Fenwick tree (binary indexed tree) for invertible operators.
//!
//! Where a segment tree only needs associativity, a Fenwick tree demands
//! more from the operation (an identity element and a two-sided inverse) in
//! exchange for a flatter structure: one slot per element plus one, each
//! slot holding the fold of a power-of-two-sized block. Range folds and
//! point updates both run in `O(log n)`.
//!
//! ## Slot structure
//!
//! Storage is 1-indexed; slot `i > 0` holds the fold of the logical elements
//! in `(i - lowbit(i), i]` (1-indexed), where `lowbit(i)` is the lowest set
//! bit of `i`. For six elements:
//!
//! ```text
//!        1:[0,1)   2:[0,2)         4:[0,4)
//!                     3:[2,3)         5:[4,5)  6:[4,6)
//! ```
//!
//! Slot 0 takes no part in any operation; it holds the identity so the
//! storage is uniformly initialized.
//!
//! ## Example
//!
//! ```rust
//! use range_query_trees::{FenwickTree, FenwickSpec, Side};
//!
//! struct SumSpec;
//!
//! impl FenwickSpec for SumSpec {
//!     type T = i64;
//!     const ID: i64 = 0;
//!
//!     fn op(a: &i64, b: &i64) -> i64 {
//!         a + b
//!     }
//!
//!     // Addition is commutative, so both sides cancel the same way.
//!     fn inv(operand: &i64, _side: Side, combined: &i64) -> i64 {
//!         combined - operand
//!     }
//! }
//!
//! let mut tree = FenwickTree::<SumSpec>::from_slice(&[1, 2, 3, 4, 5, 6]);
//! assert_eq!(tree.query(..), 21);
//! assert_eq!(tree.query(2..5), 12);
//!
//! tree.update(2, 10);
//! assert_eq!(tree.query(2..5), 19);
//! ```

use std::marker::PhantomData;
use std::ops::RangeBounds;

use crate::descent;
use crate::uninit::{self, PrefixGuard};

/// Which operand of `op(a, b)` is being cancelled out of a combined value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    /// The operand stood on the left of the fold.
    Left,
    /// The operand stood on the right of the fold.
    Right,
}

/// Defines the element type and the invertible operation for a
/// [`FenwickTree`].
pub trait FenwickSpec {
    /// The type of the elements stored and operated on in the tree.
    type T: Clone;

    /// The identity element: `op(ID, x) == op(x, ID) == x`.
    const ID: Self::T;

    /// The associative binary operation.
    fn op(a: &Self::T, b: &Self::T) -> Self::T;

    /// Cancels `operand` out of `combined`:
    /// `inv(a, Side::Left, op(a, b)) == b` and
    /// `inv(b, Side::Right, op(a, b)) == a`.
    fn inv(operand: &Self::T, side: Side, combined: &Self::T) -> Self::T;
}

/// A fixed-length Fenwick tree over an invertible operation.
///
/// See the [module documentation](self) for the slot structure and an
/// example. Unlike the segment trees, a zero-length tree is permitted and
/// empty-range queries return the identity.
pub struct FenwickTree<Spec: FenwickSpec> {
    /// 1-indexed slot array of length `n + 1`; slot 0 is unused.
    data: Box<[Spec::T]>,
    /// Zero-sized marker to associate the `Spec` type with the struct.
    _spec: PhantomData<Spec>,
}

/// Lowest set bit of `i`; 0 for 0.
#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl<Spec: FenwickSpec> FenwickTree<Spec> {
    /// Creates a tree of `len` identity elements.
    ///
    /// Time complexity: `O(n)`.
    pub fn new(len: usize) -> Self {
        Self::build_with(len, &mut || Spec::ID)
    }

    /// Creates a tree of `len` clones of `value`.
    ///
    /// Time complexity: `O(n)`.
    pub fn from_value(len: usize, value: Spec::T) -> Self {
        Self::build_with(len, &mut || value.clone())
    }

    /// Creates a tree holding clones of the elements of `values`.
    ///
    /// The slot folds are computed in `O(n)` by a doubling pass rather than
    /// by `n` logarithmic updates.
    pub fn from_slice(values: &[Spec::T]) -> Self {
        let mut leaves = values.iter();
        Self::build_with(values.len(), &mut || {
            leaves.next().expect("leaf source exhausted").clone()
        })
    }

    /// Creates a tree by moving the elements of `values` into it.
    pub fn from_vec(values: Vec<Spec::T>) -> Self {
        let len = values.len();
        let mut leaves = values.into_iter();
        Self::build_with(len, &mut || leaves.next().expect("leaf source exhausted"))
    }

    fn build_with(len: usize, leaf: &mut dyn FnMut() -> Spec::T) -> Self {
        let mut storage = uninit::uninit_box(len + 1);
        let mut guard = PrefixGuard::new(&mut storage);
        guard.push(Spec::ID);
        for _ in 0..len {
            guard.push(leaf());
        }
        guard.commit();
        // SAFETY: all len + 1 slots were pushed above.
        let mut data = unsafe { uninit::assume_init_box(storage) };
        fold_slots::<Spec>(&mut data, len + 1);
        Self {
            data,
            _spec: PhantomData,
        }
    }

    /// Returns the number of logical elements.
    pub fn size(&self) -> usize {
        self.data.len() - 1
    }

    /// Returns the identity element of the operation.
    pub fn get_identity(&self) -> Spec::T {
        Spec::ID
    }

    /// Returns the fold of the operation over `range`; the identity for an
    /// empty range.
    ///
    /// Both cursors walk up the slot structure toward their lowest common
    /// slot and stop as soon as they meet, so the two partial folds cover
    /// `[meet, first)` and `[meet, last)` and one inversion yields the
    /// answer. Time complexity: `O(log n)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or out of bounds.
    pub fn query<R: RangeBounds<usize>>(&self, range: R) -> Spec::T {
        let len = self.size();
        let (first, last) = descent::resolve_range(&range, len);
        descent::check_range(first, last, len);
        if first == last {
            return Spec::ID;
        }

        let mut lo = first;
        let mut hi = last;
        let mut lo_fold = Spec::ID;
        let mut hi_fold = Spec::ID;
        // Always strip the greater cursor so the meeting slot is never
        // walked past.
        while lo != hi {
            if lo < hi {
                hi_fold = Spec::op(&self.data[hi], &hi_fold);
                hi -= lowbit(hi);
            } else {
                lo_fold = Spec::op(&self.data[lo], &lo_fold);
                lo -= lowbit(lo);
            }
        }
        if first == 0 {
            hi_fold
        } else {
            // hi_fold == op(lo_fold, answer)
            Spec::inv(&lo_fold, Side::Left, &hi_fold)
        }
    }

    /// Replaces the logical element at `index` with `value`.
    ///
    /// The owning slot is refolded from its sub-slots, then each ancestor
    /// (`i + lowbit(i)`) has the old contribution inverted out and the new
    /// one folded in. The bit cursor `bit` is carried across ancestors, so
    /// the total work over the whole chain is amortised `O(log n)`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn update(&mut self, index: usize, value: Spec::T) {
        assert!(index < self.size(), "update index out of bounds");
        let data = &mut self.data;
        let mut pos = index + 1;
        let mut bit = 0u32;

        // New fold for the owning slot: the new value prefixed by the
        // sub-slots covering the rest of (pos - lowbit(pos), pos).
        let mut old = data[pos].clone();
        let mut fold = value;
        let mut remain = pos - 1;
        while (pos >> bit) & 1 == 0 {
            fold = Spec::op(&data[remain], &fold);
            remain -= lowbit(remain);
            bit += 1;
        }
        data[pos] = fold;

        loop {
            let parent = pos + lowbit(pos);
            if parent >= data.len() {
                break;
            }
            bit += 1;
            // Fold of the sibling slots between the parent's block start and
            // pos's block.
            let mut siblings = Spec::ID;
            let mut remain = pos - lowbit(pos);
            while (parent >> bit) & 1 == 0 {
                siblings = Spec::op(&data[remain], &siblings);
                remain -= lowbit(remain);
                bit += 1;
            }
            // parent == op(siblings, old, tail); cancel the known left part
            // to recover the tail, then refold with the updated slot.
            let tail = Spec::inv(&Spec::op(&siblings, &old), Side::Left, &data[parent]);
            old = data[parent].clone();
            data[parent] = Spec::op(&Spec::op(&siblings, &data[pos]), &tail);
            pos = parent;
        }
    }
}

/// Turns raw per-element slots into block folds, in place and in linear
/// time.
///
/// For each stride `1, 2, 4, ...` the slot at the stride position absorbs
/// the fold of everything before it in the current block, recursing into the
/// remainder of the array with the block size capped by what is left.
fn fold_slots<Spec: FenwickSpec>(data: &mut [Spec::T], limit: usize) -> Spec::T {
    let mut prev = Spec::ID;
    let mut stride = 1;
    while stride < limit {
        data[stride] = Spec::op(&prev, &data[stride]);
        let next_limit = stride.min(limit - stride);
        prev = if next_limit == 1 {
            data[stride].clone()
        } else {
            let folded = fold_slots::<Spec>(&mut data[stride..], next_limit);
            Spec::op(&data[stride], &folded)
        };
        stride *= 2;
    }
    prev
}

impl<Spec: FenwickSpec> Clone for FenwickTree<Spec> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _spec: PhantomData,
        }
    }
}

impl<Spec: FenwickSpec> std::fmt::Debug for FenwickTree<Spec>
where
    Spec::T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FenwickTree")
            .field("len", &self.size())
            .field("slots", &&self.data[1..])
            .finish()
    }
}

/// Logical equality: same length and the same fold over every prefix.
///
/// Slot-wise comparison would be wrong here: two trees can hold different
/// slot arrays for the same logical sequence when non-exact inverses (e.g.
/// floating point) have fed different update histories.
impl<Spec: FenwickSpec> PartialEq for FenwickTree<Spec>
where
    Spec::T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && (1..=self.size()).all(|k| self.query(0..k) == other.query(0..k))
    }
}

impl<Spec: FenwickSpec> Eq for FenwickTree<Spec> where Spec::T: Eq {}
