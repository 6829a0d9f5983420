//! Lease-counted view handles over a [`Vec`]'s heap block.
//!
//! Unlike a plain borrow, a handle is not tied to any particular location
//! of its owner: the owner may move freely while handles are live, because
//! the heap block they point into does not move with it. What the owner
//! may not do while a handle lives is mutate, grow, or free the block; the
//! lease held here makes every such operation panic until the handle
//! drops.
//!
//! [`Vec`]: super::Vec

use core::fmt::{self, Debug, Formatter};
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr::NonNull;
use core::slice;

use crate::lease::{Lease, LeaseMut};
use crate::slice::{index_out_of_bounds, Iter, IterMut, Slice, SliceMut};

/// A shared, lease-counted view of a [`Vec`]'s values.
///
/// Cloning the handle takes another lease on the same owner. The owner
/// refuses mutation until every clone drops.
///
/// [`Vec`]: super::Vec
pub struct Lent<T> {
    /// Start of the owner's heap block.
    data: NonNull<T>,
    /// Number of values viewed, fixed when the lease was taken.
    len: usize,
    /// Released when the handle drops.
    lease: Lease,
}

/// An exclusive, lease-counted view of a [`Vec`]'s values.
///
/// The owner refuses all access until the handle drops.
///
/// [`Vec`]: super::Vec
pub struct LentMut<T> {
    /// Start of the owner's heap block.
    data: NonNull<T>,
    /// Number of values viewed, fixed when the lease was taken.
    len: usize,
    /// Released when the handle drops.
    #[allow(dead_code)]
    lease: LeaseMut,
}

impl<T> Lent<T> {
    #[inline]
    pub(crate) fn new(data: NonNull<T>, len: usize, lease: Lease) -> Lent<T> {
        Lent { data, len, lease }
    }

    /// Returns the number of values in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the view contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the value at index `i`, or `None` when `i`
    /// is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < self.len {
            Some(unsafe { &*self.data.as_ptr().add(i) })
        } else {
            None
        }
    }

    /// Returns the viewed values as a primitive slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    /// Returns a read-only view borrowing from this handle, for
    /// sub-ranging and splitting.
    #[inline]
    pub fn slice(&self) -> Slice<'_, T> {
        Slice::from(self.as_slice())
    }

    /// Returns a cursor over the viewed values, front to back. The cursor
    /// takes its own lease on the owner.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data.as_ptr(), self.len, Some(self.lease.clone()))
    }
}

impl<T> Clone for Lent<T> {
    fn clone(&self) -> Lent<T> {
        Lent {
            data: self.data,
            len: self.len,
            lease: self.lease.clone(),
        }
    }
}

impl<T> Deref for Lent<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Index<usize> for Lent<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        if i >= self.len {
            index_out_of_bounds(i, self.len);
        }
        unsafe { &*self.data.as_ptr().add(i) }
    }
}

impl<'a, T> IntoIterator for &'a Lent<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Lent<T> {
    fn eq(&self, other: &Lent<T>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq> Eq for Lent<T> {}

impl<T: Debug> Debug for Lent<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> LentMut<T> {
    #[inline]
    pub(crate) fn new(data: NonNull<T>, len: usize, lease: LeaseMut) -> LentMut<T> {
        LentMut { data, len, lease }
    }

    /// Returns the number of values in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the view contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the value at index `i`, or `None` when `i`
    /// is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < self.len {
            Some(unsafe { &*self.data.as_ptr().add(i) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the value at index `i`, or `None`
    /// when `i` is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.len {
            Some(unsafe { &mut *self.data.as_ptr().add(i) })
        } else {
            None
        }
    }

    /// Returns the viewed values as a primitive slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    /// Returns the viewed values as a mutable primitive slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Returns a read-only view borrowing from this handle.
    #[inline]
    pub fn slice(&self) -> Slice<'_, T> {
        Slice::from(self.as_slice())
    }

    /// Returns a read-write view borrowing from this handle.
    #[inline]
    pub fn slice_mut(&mut self) -> SliceMut<'_, T> {
        SliceMut::from(self.as_mut_slice())
    }

    /// Returns a cursor over the viewed values, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data.as_ptr(), self.len, None)
    }

    /// Returns a cursor over the viewed values, front to back, yielding
    /// mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.data.as_ptr(), self.len, None)
    }

    /// Releases the exclusive lease, returning how many values were
    /// viewed. Equivalent to dropping the handle.
    pub fn release(self) -> usize {
        let len = self.len;
        mem::drop(self);
        len
    }
}

impl<T> Deref for LentMut<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for LentMut<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for LentMut<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        if i >= self.len {
            index_out_of_bounds(i, self.len);
        }
        unsafe { &*self.data.as_ptr().add(i) }
    }
}

impl<T> IndexMut<usize> for LentMut<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        if i >= self.len {
            index_out_of_bounds(i, self.len);
        }
        unsafe { &mut *self.data.as_ptr().add(i) }
    }
}

impl<T: Debug> Debug for LentMut<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
