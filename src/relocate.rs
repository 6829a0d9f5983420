//! Relocation classification and bulk element movement.
//!
//! A _relocation_ moves a sequence of values from one memory block to another
//! memory block, after which only the destination copies are live. Whether a
//! relocation may be performed as a single raw byte copy, skipping all
//! per-element work, is a static property of the element type: a move is
//! always an untyped byte copy, so the only values that need per-element
//! handling on the fallback path are those with drop glue, which must never
//! run for a relocated value. The classifier therefore reduces to trivial
//! destructibility, and resolves entirely at compile time.

use core::mem;
use core::ptr;

/// Returns `true` when `n` contiguous values of type `T` may be moved between
/// memory locations by copying `n * size_of::<T>()` raw bytes, with no
/// per-element work on the originals.
///
/// This is a const-evaluated predicate; callers branching on it pay no
/// runtime cost.
#[inline]
pub const fn trivial_relocate<T>() -> bool {
    !mem::needs_drop::<T>()
}

/// Relocates `n` contiguous values of type `T` from `src` to `dst`, using a
/// single bulk byte copy when [`trivial_relocate`] approves `T`, and an
/// index-order element loop otherwise.
///
/// The source values must not be used, and must not be dropped, after the
/// relocation; ownership of every value transfers to the destination block.
///
/// # Safety
///
/// `src` must point to `n` initialized values of `T`, `dst` must point to
/// storage for `n` values of `T`, and the two ranges must not overlap.
#[inline]
pub unsafe fn relocate<T>(src: *const T, dst: *mut T, n: usize) {
    if trivial_relocate::<T>() {
        relocate_by_copy(src, dst, n);
    } else {
        relocate_by_move(src, dst, n);
    }
}

/// Relocates `n` contiguous values of type `T` from `src` to `dst` as a
/// single raw byte copy.
///
/// # Safety
///
/// Same contract as [`relocate`]; additionally `T` must satisfy
/// [`trivial_relocate`], or have no semantic state outside its bytes.
#[inline]
pub unsafe fn relocate_by_copy<T>(src: *const T, dst: *mut T, n: usize) {
    ptr::copy_nonoverlapping(src, dst, n);
}

/// Relocates `n` contiguous values of type `T` from `src` to `dst` by moving
/// each element in index order.
///
/// The moved-out source slots are left as uninitialized storage; no drop glue
/// runs for them. This is the always-correct baseline every type supports.
///
/// # Safety
///
/// Same contract as [`relocate`].
pub unsafe fn relocate_by_move<T>(src: *const T, dst: *mut T, n: usize) {
    let mut i = 0;
    while i < n {
        ptr::write(dst.add(i), ptr::read(src.add(i)));
        i = i.wrapping_add(1);
    }
}
