//! Crate-private construction of the flat recursive layout.
//!
//! Leaves are written in left-to-right interval order from a caller-supplied
//! source, and each internal node is the operator fold of its two children,
//! so the fold of any subtree is available the moment its region completes.
//!
//! Cleanup responsibility mirrors the recursion: a frame owns nothing until a
//! child call returns, at which point the completed child region is armed
//! behind a [`SubtreeGuard`] until the frame commits. A panic from the leaf
//! source, the operator, or an inner frame therefore drops exactly the values
//! constructed so far and nothing else.

use core::mem::MaybeUninit;

use crate::uninit::{self, SubtreeGuard};

/// Builds the `2 * len - 1` slot array for `len` logical elements.
///
/// `source` is invoked once per leaf, left to right.
///
/// # Panics
///
/// Panics if `len == 0`. Panics from `source` or `op` propagate after
/// rollback.
pub(crate) fn build_from_source<T, Op, Src>(len: usize, op: &Op, source: &mut Src) -> Box<[T]>
where
    Op: Fn(&T, &T) -> T,
    Src: FnMut() -> T,
{
    assert!(len > 0, "cannot build a tree over zero elements");
    let mut storage = uninit::uninit_box(2 * len - 1);
    build_into(&mut storage, op, source);
    // SAFETY: build_into returned normally, so every slot is initialized.
    unsafe { uninit::assume_init_box(storage) }
}

/// Recursive worker over the subtree's own slot region.
///
/// The region length determines the interval split: a region of `2k - 1`
/// slots covers `k` elements, its left child the first `k / 2` of them.
fn build_into<T, Op, Src>(slots: &mut [MaybeUninit<T>], op: &Op, source: &mut Src)
where
    Op: Fn(&T, &T) -> T,
    Src: FnMut() -> T,
{
    if slots.len() == 1 {
        slots[0].write(source());
        return;
    }
    let len = slots.len() / 2 + 1;
    let left_len = len / 2;
    let (node_slot, rest) = slots.split_at_mut(1);
    let (left_slots, right_slots) = rest.split_at_mut(2 * left_len - 1);

    build_into(left_slots, op, source);
    // SAFETY: the call above initialized every slot of the left region.
    let left = unsafe { SubtreeGuard::new(left_slots) };
    build_into(right_slots, op, source);
    // SAFETY: likewise for the right region.
    let right = unsafe { SubtreeGuard::new(right_slots) };

    node_slot[0].write(op(left.root(), right.root()));
    left.commit();
    right.commit();
}
