//! Element cursors over contiguous views.

use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::slice;

use crate::lease::{Lease, LeaseMut};

/// A cursor over a contiguous run of values, yielding shared references
/// front to back.
///
/// The cursor is a pointer to the next unvisited element plus the count of
/// elements still unvisited; visiting from either end shrinks that range.
/// When the cursor was produced by a lease-counted owner it carries the
/// [`Lease`] keeping the owner pinned, released when the cursor drops.
pub struct Iter<'a, T> {
    /// Pointer to the next front element. Never advanced for zero-sized `T`.
    ptr: *const T,
    /// Number of elements not yet visited from either end.
    rem: usize,
    /// Keeps the owning container leased for as long as the cursor lives.
    #[allow(dead_code)]
    lease: Option<Lease>,
    marker: PhantomData<&'a T>,
}

/// A cursor over a contiguous run of values, yielding mutable references
/// front to back.
pub struct IterMut<'a, T> {
    /// Pointer to the next front element. Never advanced for zero-sized `T`.
    ptr: *mut T,
    /// Number of elements not yet visited from either end.
    rem: usize,
    /// Keeps the owning container exclusively leased for as long as the
    /// cursor lives.
    #[allow(dead_code)]
    lease: Option<LeaseMut>,
    marker: PhantomData<&'a mut T>,
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}

unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}

unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(ptr: *const T, len: usize, lease: Option<Lease>) -> Iter<'a, T> {
        Iter { ptr, rem: len, lease, marker: PhantomData }
    }

    /// Returns the unvisited elements as a primitive slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        unsafe { slice::from_raw_parts(self.ptr, self.rem) }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.rem == 0 {
            return None;
        }
        let item = unsafe { &*self.ptr };
        if mem::size_of::<T>() != 0 {
            self.ptr = unsafe { self.ptr.add(1) };
        }
        self.rem -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem, Some(self.rem))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.rem == 0 {
            return None;
        }
        self.rem -= 1;
        let item = if mem::size_of::<T>() != 0 {
            unsafe { &*self.ptr.add(self.rem) }
        } else {
            unsafe { &*self.ptr }
        };
        Some(item)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.rem
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter {
            ptr: self.ptr,
            rem: self.rem,
            lease: self.lease.clone(),
            marker: PhantomData,
        }
    }
}

impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new(ptr: *mut T, len: usize, lease: Option<LeaseMut>) -> IterMut<'a, T> {
        IterMut { ptr, rem: len, lease, marker: PhantomData }
    }

    /// Returns the unvisited elements as a primitive slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr, self.rem) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.rem == 0 {
            return None;
        }
        let item = unsafe { &mut *self.ptr };
        if mem::size_of::<T>() != 0 {
            self.ptr = unsafe { self.ptr.add(1) };
        }
        self.rem -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem, Some(self.rem))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.rem == 0 {
            return None;
        }
        self.rem -= 1;
        let item = if mem::size_of::<T>() != 0 {
            unsafe { &mut *self.ptr.add(self.rem) }
        } else {
            unsafe { &mut *self.ptr }
        };
        Some(item)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.rem
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T: Debug> Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.as_slice()).finish()
    }
}
