//! Non-owning views over contiguous storage.
//!
//! A [`Slice`] is a bounds-checked `(pointer, length)` view over a run of
//! initialized values; a [`SliceMut`] is its read-write counterpart. Views of
//! this kind are self-sufficient: the borrow they carry covers the validity
//! of the underlying storage, so they hold no lease. Views lent out by an
//! owning container with a stable heap block, which do hold a lease, are the
//! `Lent` and `LentMut` handles in the `vec` module; they expose these slice
//! types for sub-ranging and splitting.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Bound, Index, IndexMut, RangeBounds};
use core::slice;

mod iter;
mod split;

pub use self::iter::{Iter, IterMut};
pub use self::split::{Chunks, RSplit, Split, SplitInclusive, SplitN, Windows};

/// Resolves a range over a sequence of length `len` to a `(start, end)` index
/// pair, asserting `start <= end <= len`.
pub(crate) fn check_range<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n + 1,
    };
    let end = match range.end_bound() {
        Bound::Unbounded => len,
        Bound::Included(&n) => n + 1,
        Bound::Excluded(&n) => n,
    };
    if start > end {
        panic!("slice index starts at {} but ends at {}", start, end);
    }
    if end > len {
        panic!("range end index {} out of range for slice of length {}", end, len);
    }
    (start, end)
}

#[cold]
pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {} but the index is {}", len, index);
}

/// A read-only view into a contiguous sequence of values.
///
/// Contiguous here means that every element is the same distance from its
/// neighbors; the view is a pointer to the first element and an element
/// count. Indexing is bounds-checked; the non-panicking accessor is
/// [`get`](Slice::get).
pub struct Slice<'a, T> {
    /// Pointer to the first element in the viewed range.
    data: *const T,
    /// Number of elements in the viewed range.
    len: usize,
    /// Variant over the viewed storage's lifetime.
    marker: PhantomData<&'a T>,
}

/// A read-write view into a contiguous sequence of values.
///
/// Same shape as [`Slice`], but additionally yields mutable references. A
/// `SliceMut` is never obtainable from a shared borrow of an owner.
pub struct SliceMut<'a, T> {
    /// Pointer to the first element in the viewed range.
    data: *mut T,
    /// Number of elements in the viewed range.
    len: usize,
    /// Variant over the viewed storage's lifetime.
    marker: PhantomData<&'a mut T>,
}

unsafe impl<'a, T: Sync> Send for Slice<'a, T> {}

unsafe impl<'a, T: Sync> Sync for Slice<'a, T> {}

unsafe impl<'a, T: Send> Send for SliceMut<'a, T> {}

unsafe impl<'a, T: Sync> Sync for SliceMut<'a, T> {}

impl<'a, T> Slice<'a, T> {
    /// Returns an empty view.
    #[inline]
    pub const fn empty() -> Slice<'a, T> {
        Slice {
            data: core::ptr::NonNull::dangling().as_ptr(),
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns a view over `len` elements starting at `data`.
    ///
    /// # Safety
    ///
    /// `data` must point to `len` initialized values of `T` that remain
    /// valid, and unmutated through any other path, for the lifetime `'a`.
    #[inline]
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Slice<'a, T> {
        Slice { data, len, marker: PhantomData }
    }

    /// Returns the number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the view contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at index `i`, or `None` when `i`
    /// is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&'a T> {
        if i < self.len {
            Some(unsafe { &*self.data.add(i) })
        } else {
            None
        }
    }

    /// Returns a reference to the element at index `i` without a bounds
    /// check.
    ///
    /// # Safety
    ///
    /// `i` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &'a T {
        &*self.data.add(i)
    }

    /// Returns a pointer to the first element in the view.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data
    }

    /// Returns the view as a primitive slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        unsafe { slice::from_raw_parts(self.data, self.len) }
    }

    /// Returns a view over the contiguous sub-range `range` of this view.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= len()`.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Slice<'a, T> {
        let (start, end) = check_range(range, self.len);
        Slice {
            data: unsafe { self.data.add(start) },
            len: end - start,
            marker: PhantomData,
        }
    }

    /// Returns a cursor over all the elements in the view, visited front to
    /// back.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.data, self.len, None)
    }

    /// Returns a lazy sequence of the sub-slices strictly between elements
    /// matched by `pred`, front to back. The matched elements themselves are
    /// not yielded. The final remainder is yielded even when empty, so an
    /// input with no matches yields one slice (the whole input), and an input
    /// whose every element matches yields `len() + 1` empty slices.
    #[inline]
    pub fn split<P: FnMut(&T) -> bool>(&self, pred: P) -> Split<'a, T, P> {
        Split::new(*self, pred)
    }

    /// Like [`split`](Slice::split), but each non-final sub-slice keeps its
    /// matched element as its trailing member, and no trailing empty slice is
    /// yielded.
    #[inline]
    pub fn split_inclusive<P: FnMut(&T) -> bool>(&self, pred: P) -> SplitInclusive<'a, T, P> {
        SplitInclusive::new(*self, pred)
    }

    /// Like [`split`](Slice::split), but scanning from the back, yielding the
    /// same sub-slices in reverse order.
    #[inline]
    pub fn rsplit<P: FnMut(&T) -> bool>(&self, pred: P) -> RSplit<'a, T, P> {
        RSplit::new(*self, pred)
    }

    /// Like [`split`](Slice::split), but producing at most `n` sub-slices;
    /// the last yielded sub-slice is the entire unscanned remainder.
    #[inline]
    pub fn splitn<P: FnMut(&T) -> bool>(&self, n: usize, pred: P) -> SplitN<'a, T, P> {
        SplitN::new(*self, n, pred)
    }

    /// Returns a lazy sequence of every overlapping length-`size` sub-slice,
    /// each one element further along than the last. Yields nothing when
    /// `size > len()`.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero.
    #[inline]
    pub fn windows(&self, size: usize) -> Windows<'a, T> {
        Windows::new(*self, size)
    }

    /// Returns a lazy sequence of non-overlapping length-`size` sub-slices,
    /// front to back; the final chunk holds whatever remains and may be
    /// shorter.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero.
    #[inline]
    pub fn chunks(&self, size: usize) -> Chunks<'a, T> {
        Chunks::new(*self, size)
    }
}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    #[inline]
    fn from(data: &'a [T]) -> Slice<'a, T> {
        Slice {
            data: data.as_ptr(),
            len: data.len(),
            marker: PhantomData,
        }
    }
}

impl<'a, T> Clone for Slice<'a, T> {
    #[inline]
    fn clone(&self) -> Slice<'a, T> {
        *self
    }
}

impl<'a, T> Copy for Slice<'a, T> {}

impl<'a, T> Default for Slice<'a, T> {
    fn default() -> Slice<'a, T> {
        Slice::empty()
    }
}

impl<'a, T> Index<usize> for Slice<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        if i >= self.len {
            index_out_of_bounds(i, self.len);
        }
        unsafe { &*self.data.add(i) }
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: PartialEq> PartialEq for Slice<'a, T> {
    fn eq(&self, other: &Slice<'a, T>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<'a, T: Eq> Eq for Slice<'a, T> {}

impl<'a, T: Debug> Debug for Slice<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, T> SliceMut<'a, T> {
    /// Returns an empty view.
    #[inline]
    pub fn empty() -> SliceMut<'a, T> {
        SliceMut {
            data: core::ptr::NonNull::dangling().as_ptr(),
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns a view over `len` elements starting at `data`.
    ///
    /// # Safety
    ///
    /// `data` must point to `len` initialized values of `T` that remain
    /// valid, and unaliased through any other path, for the lifetime `'a`.
    #[inline]
    pub unsafe fn from_raw_parts(data: *mut T, len: usize) -> SliceMut<'a, T> {
        SliceMut { data, len, marker: PhantomData }
    }

    /// Returns the number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the view contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at index `i`, or `None` when `i`
    /// is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < self.len {
            Some(unsafe { &*self.data.add(i) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at index `i`, or `None`
    /// when `i` is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.len {
            Some(unsafe { &mut *self.data.add(i) })
        } else {
            None
        }
    }

    /// Returns a pointer to the first element in the view.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data
    }

    /// Returns a mutable pointer to the first element in the view.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data
    }

    /// Returns the view as a primitive slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data, self.len) }
    }

    /// Returns the view as a mutable primitive slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data, self.len) }
    }

    /// Reborrows the view read-only, making the split and windowing
    /// adaptors available.
    #[inline]
    pub fn as_ref(&self) -> Slice<'_, T> {
        Slice {
            data: self.data,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Returns a read-write view over the contiguous sub-range `range` of
    /// this view.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= len()`.
    pub fn slice_mut<R: RangeBounds<usize>>(&mut self, range: R) -> SliceMut<'_, T> {
        let (start, end) = check_range(range, self.len);
        SliceMut {
            data: unsafe { self.data.add(start) },
            len: end - start,
            marker: PhantomData,
        }
    }

    /// Returns a cursor over all the elements in the view, visited front to
    /// back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data, self.len, None)
    }

    /// Returns a cursor over all the elements in the view, visited front to
    /// back, yielding mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.data, self.len, None)
    }
}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    #[inline]
    fn from(data: &'a mut [T]) -> SliceMut<'a, T> {
        SliceMut {
            data: data.as_mut_ptr(),
            len: data.len(),
            marker: PhantomData,
        }
    }
}

impl<'a, T> Index<usize> for SliceMut<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        if i >= self.len {
            index_out_of_bounds(i, self.len);
        }
        unsafe { &*self.data.add(i) }
    }
}

impl<'a, T> IndexMut<usize> for SliceMut<'a, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        if i >= self.len {
            index_out_of_bounds(i, self.len);
        }
        unsafe { &mut *self.data.add(i) }
    }
}

impl<'a, T> IntoIterator for SliceMut<'a, T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        IterMut::new(self.data, self.len, None)
    }
}

impl<'a, T: PartialEq> PartialEq for SliceMut<'a, T> {
    fn eq(&self, other: &SliceMut<'a, T>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<'a, T: Eq> Eq for SliceMut<'a, T> {}

impl<'a, T: Debug> Debug for SliceMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
