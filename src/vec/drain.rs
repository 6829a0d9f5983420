//! Removing cursor over a range of a [`Vec`].
//!
//! [`Vec`]: super::Vec

use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use super::Vec;

/// A cursor that removes a range of values from a [`Vec`], yielding them by
/// value front to back.
///
/// The source keeps only the values ahead of the range while the cursor
/// lives. When the cursor drops it drops any unvisited values, then slides
/// the tail beyond the range down to close the gap.
///
/// Created by [`Vec::drain`].
///
/// [`Vec`]: super::Vec
/// [`Vec::drain`]: super::Vec::drain
pub struct Drain<'a, T> {
    /// The source; its `len` is held at the range start until the cursor
    /// drops.
    vec: &'a mut Vec<T>,
    /// Index of the first value beyond the drained range.
    tail_start: usize,
    /// Number of values beyond the drained range.
    tail_len: usize,
    /// Index of the next unvisited value at the front.
    front: usize,
    /// One past the last unvisited value at the back.
    back: usize,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(vec: &'a mut Vec<T>, start: usize, end: usize) -> Drain<'a, T> {
        let tail_len = vec.len - end;
        // Holding `len` at the range start keeps the values behind it out
        // of reach if the cursor leaks.
        vec.len = start;
        Drain {
            vec,
            tail_start: end,
            tail_len,
            front: start,
            back: end,
        }
    }

    /// Returns the unvisited values as a primitive slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(self.vec.data.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = unsafe { ptr::read(self.vec.data.as_ptr().add(self.front)) };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Drain<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(unsafe { ptr::read(self.vec.data.as_ptr().add(self.back)) })
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<'a, T> FusedIterator for Drain<'a, T> {}

impl<'a, T> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        unsafe {
            let data = self.vec.data.as_ptr();
            ptr::drop_in_place(slice::from_raw_parts_mut(
                data.add(self.front),
                self.back - self.front,
            ));
            ptr::copy(data.add(self.tail_start), data.add(self.vec.len), self.tail_len);
        }
        self.vec.len += self.tail_len;
    }
}

impl<'a, T: Debug> Debug for Drain<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}
