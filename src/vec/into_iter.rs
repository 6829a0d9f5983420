//! Consuming cursor over a [`Vec`].
//!
//! [`Vec`]: super::Vec

use core::alloc::Layout;
use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;
use core::mem;
use core::ptr::{self, NonNull};
use core::slice;

/// A cursor that consumes a [`Vec`], yielding its values front to back.
///
/// The cursor takes over the heap block; unvisited values and the block
/// itself are dropped with the cursor.
///
/// [`Vec`]: super::Vec
pub struct IntoIter<T> {
    /// Start of the block taken from the source.
    data: NonNull<T>,
    /// Number of slots in the block, kept for the final deallocation.
    cap: usize,
    /// Index of the next unvisited value at the front.
    front: usize,
    /// One past the last unvisited value at the back.
    back: usize,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(data: NonNull<T>, len: usize, cap: usize) -> IntoIter<T> {
        IntoIter { data, cap, front: 0, back: len }
    }

    /// Returns the unvisited values as a primitive slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(self.data.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = unsafe { ptr::read(self.data.as_ptr().add(self.front)) };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(unsafe { ptr::read(self.data.as_ptr().add(self.back)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.data.as_ptr().add(self.front),
                self.back - self.front,
            ));
            if self.cap != 0 && mem::size_of::<T>() != 0 {
                let layout = Layout::from_size_align_unchecked(
                    mem::size_of::<T>() * self.cap,
                    mem::align_of::<T>(),
                );
                alloc::alloc::dealloc(self.data.as_ptr() as *mut u8, layout);
            }
        }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
