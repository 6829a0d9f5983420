//! Growable owned array with lease-counted borrows.
//!
//! [`Vec`] owns a heap block holding `len` initialized values at the front
//! of a `cap`-element region. Alongside the block it keeps a [`Leases`]
//! record counting the outstanding views into the block. Every operation
//! that mutates, moves, or frees the block first asserts that no lease is
//! live, so a stale view can never observe relocated or dropped storage;
//! the handles that carry leases are [`Lent`] and [`LentMut`].
//!
//! The heap block never moves when the `Vec` value itself is moved, which
//! is what lets the lent handles outlive any particular location of their
//! owner.

use core::alloc::Layout;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut, Index, IndexMut, RangeBounds};
use core::ptr::{self, NonNull};
use core::slice;

use crate::lease::Leases;
use crate::relocate::{relocate, trivial_relocate};
use crate::slice::{check_range, index_out_of_bounds, Iter, IterMut, Slice, SliceMut};

mod drain;
mod into_iter;
mod lent;

pub use self::drain::Drain;
pub use self::into_iter::IntoIter;
pub use self::lent::{Lent, LentMut};

/// A capacity request failed.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ReserveError {
    /// The requested capacity exceeds the maximum size of a buffer.
    Oversized,
}

impl Display for ReserveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReserveError::Oversized => {
                write!(f, "requested capacity exceeds the maximum buffer size")
            }
        }
    }
}

/// Returns the layout of a `cap`-element buffer of `T`, or
/// [`ReserveError::Oversized`] when its size would overflow the maximum
/// buffer size.
fn array_layout<T>(cap: usize) -> Result<Layout, ReserveError> {
    Layout::array::<T>(cap).map_err(|_| ReserveError::Oversized)
}

/// A growable owned array with lease-counted borrows.
///
/// Values live contiguously at the front of a heap block; the block is
/// reallocated as needed, tripling in capacity plus one on each growth
/// step. Zero-sized value types never allocate and report unbounded
/// capacity.
pub struct Vec<T> {
    /// Start of the heap block; dangling while `cap` is zero or `T` is
    /// zero sized.
    data: NonNull<T>,
    /// Number of initialized values at the front of the block.
    len: usize,
    /// Number of element slots in the block.
    cap: usize,
    /// Outstanding-view record; mutation is refused while any view lives.
    leases: Leases,
}

impl<T> Vec<T> {
    /// Returns an empty array with no heap block.
    #[inline]
    pub fn new() -> Vec<T> {
        Vec {
            data: NonNull::dangling(),
            len: 0,
            cap: 0,
            leases: Leases::new(),
        }
    }

    /// Returns an empty array whose block holds at least `cap` elements.
    ///
    /// # Panics
    ///
    /// Panics when a `cap`-element block would exceed the maximum buffer
    /// size.
    pub fn with_capacity(cap: usize) -> Vec<T> {
        let mut vec = Vec::new();
        if let Err(err) = vec.try_grow_exact(cap) {
            panic!("capacity overflow: {}", err);
        }
        vec
    }

    /// Returns an array holding clones of the values in `src`.
    pub fn from_slice(src: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut vec = Vec::with_capacity(src.len());
        vec.extend_from_slice(src);
        vec
    }

    /// Returns the number of values in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the array holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values the array can hold without growing its
    /// block.
    #[inline]
    pub fn capacity(&self) -> usize {
        if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            self.cap
        }
    }

    /// Returns the number of live leases on the array, shared and
    /// exclusive combined.
    #[inline]
    pub fn lease_count(&self) -> usize {
        self.leases.count()
    }

    /// Returns the values as a primitive slice.
    ///
    /// # Panics
    ///
    /// Panics while an exclusive lease is live.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.leases.assert_unaliased("as_slice");
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    /// Returns the values as a mutable primitive slice.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.leases.assert_unleased("as_mut_slice");
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Returns a read-only view of the values.
    ///
    /// # Panics
    ///
    /// Panics while an exclusive lease is live.
    #[inline]
    pub fn slice(&self) -> Slice<'_, T> {
        Slice::from(self.as_slice())
    }

    /// Returns a read-write view of the values.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    #[inline]
    pub fn slice_mut(&mut self) -> SliceMut<'_, T> {
        SliceMut::from(self.as_mut_slice())
    }

    /// Returns a reference to the value at index `i`, or `None` when `i`
    /// is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics while an exclusive lease is live.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.leases.assert_unaliased("get");
        if i < self.len {
            Some(unsafe { &*self.data.as_ptr().add(i) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the value at index `i`, or `None`
    /// when `i` is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.leases.assert_unleased("get_mut");
        if i < self.len {
            Some(unsafe { &mut *self.data.as_ptr().add(i) })
        } else {
            None
        }
    }

    /// Appends `value` to the back of the array, growing the block if it
    /// is full.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live, or when the grown block would
    /// exceed the maximum buffer size.
    pub fn push(&mut self, value: T) {
        self.leases.assert_unleased("push");
        self.reserve(1);
        unsafe {
            ptr::write(self.data.as_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Removes and returns the last value, or `None` when the array is
    /// empty.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    pub fn pop(&mut self) -> Option<T> {
        self.leases.assert_unleased("pop");
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { ptr::read(self.data.as_ptr().add(self.len)) })
    }

    /// Inserts `value` at index `i`, shifting every later value one slot
    /// toward the back.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live, or when `i > len()`.
    pub fn insert(&mut self, i: usize, value: T) {
        self.leases.assert_unleased("insert");
        if i > self.len {
            panic!("insertion index (is {}) should be <= len (is {})", i, self.len);
        }
        self.reserve(1);
        unsafe {
            let p = self.data.as_ptr().add(i);
            ptr::copy(p, p.add(1), self.len - i);
            ptr::write(p, value);
        }
        self.len += 1;
    }

    /// Removes and returns the value at index `i`, shifting every later
    /// value one slot toward the front.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live, or when `i >= len()`.
    pub fn remove(&mut self, i: usize) -> T {
        self.leases.assert_unleased("remove");
        if i >= self.len {
            panic!("removal index (is {}) should be < len (is {})", i, self.len);
        }
        unsafe {
            let p = self.data.as_ptr().add(i);
            let value = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - i - 1);
            self.len -= 1;
            value
        }
    }

    /// Shortens the array to at most `n` values, dropping the rest. Does
    /// nothing when `n >= len()`; never shrinks the block.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    pub fn truncate(&mut self, n: usize) {
        self.leases.assert_unleased("truncate");
        if n >= self.len {
            return;
        }
        let tail = self.len - n;
        self.len = n;
        unsafe {
            let p = self.data.as_ptr().add(n);
            ptr::drop_in_place(slice::from_raw_parts_mut(p, tail));
        }
    }

    /// Drops every value, keeping the block.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    #[inline]
    pub fn clear(&mut self) {
        self.leases.assert_unleased("clear");
        self.truncate(0);
    }

    /// Grows the block so at least `additional` more values fit, using the
    /// normal growth progression.
    ///
    /// # Panics
    ///
    /// Panics when the grown block would exceed the maximum buffer size.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            panic!("capacity overflow: {}", err);
        }
    }

    /// Grows the block so at least `additional` more values fit, using the
    /// normal growth progression. Errs instead of panicking on an
    /// oversized request.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        self.leases.assert_unleased("reserve");
        let needed = match self.len.checked_add(additional) {
            Some(n) => n,
            None => return Err(ReserveError::Oversized),
        };
        if mem::size_of::<T>() == 0 || needed <= self.cap {
            return Ok(());
        }
        let mut next = self.cap;
        while next < needed {
            next = next
                .checked_add(1)
                .and_then(|n| n.checked_mul(3))
                .ok_or(ReserveError::Oversized)?;
        }
        self.try_grow_exact(next)
    }

    /// Grows the block to hold exactly `len() + additional` values.
    ///
    /// # Panics
    ///
    /// Panics when the grown block would exceed the maximum buffer size.
    #[inline]
    pub fn reserve_exact(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve_exact(additional) {
            panic!("capacity overflow: {}", err);
        }
    }

    /// Grows the block to hold exactly `len() + additional` values. Errs
    /// instead of panicking on an oversized request.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    pub fn try_reserve_exact(&mut self, additional: usize) -> Result<(), ReserveError> {
        self.leases.assert_unleased("reserve_exact");
        let needed = match self.len.checked_add(additional) {
            Some(n) => n,
            None => return Err(ReserveError::Oversized),
        };
        self.try_grow_exact(needed)
    }

    /// Reallocates the block to hold exactly `cap` values. Does nothing
    /// when the block already holds that many, or when `T` is zero sized.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live, or when a `cap`-element block would
    /// exceed the maximum buffer size.
    pub fn grow_to_exact(&mut self, cap: usize) {
        self.leases.assert_unleased("grow_to_exact");
        if let Err(err) = self.try_grow_exact(cap) {
            panic!("capacity overflow: {}", err);
        }
    }

    /// Reallocates the block to hold exactly `cap` values. Does nothing
    /// when the block already holds that many, or when `T` is zero sized.
    fn try_grow_exact(&mut self, cap: usize) -> Result<(), ReserveError> {
        if mem::size_of::<T>() == 0 || cap <= self.cap {
            return Ok(());
        }
        let layout = array_layout::<T>(cap)?;
        let ptr = if self.cap == 0 {
            unsafe { alloc::alloc::alloc(layout) }
        } else if trivial_relocate::<T>() {
            unsafe {
                alloc::alloc::realloc(
                    self.data.as_ptr() as *mut u8,
                    self.current_layout(),
                    layout.size(),
                )
            }
        } else {
            // The element-wise path needs disjoint blocks: allocate fresh,
            // move every value across, then free the old block.
            let ptr = unsafe { alloc::alloc::alloc(layout) };
            if !ptr.is_null() {
                unsafe {
                    relocate(self.data.as_ptr(), ptr as *mut T, self.len);
                    alloc::alloc::dealloc(self.data.as_ptr() as *mut u8, self.current_layout());
                }
            }
            ptr
        };
        if ptr.is_null() {
            alloc::alloc::handle_alloc_error(layout);
        }
        log::trace!("vec: grew block from {} to {} slots", self.cap, cap);
        self.data = unsafe { NonNull::new_unchecked(ptr as *mut T) };
        self.cap = cap;
        Ok(())
    }

    /// Returns the layout of the current block.
    ///
    /// # Safety
    ///
    /// `cap` must be nonzero, so the layout was validated when the block
    /// was allocated.
    #[inline]
    unsafe fn current_layout(&self) -> Layout {
        Layout::from_size_align_unchecked(
            mem::size_of::<T>() * self.cap,
            mem::align_of::<T>(),
        )
    }

    /// Appends clones of the values in `src` to the back of the array.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live, or when `src` overlaps this
    /// array's own block.
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        self.leases.assert_unleased("extend_from_slice");
        self.assert_disjoint(src);
        self.reserve(src.len());
        for value in src {
            unsafe {
                ptr::write(self.data.as_ptr().add(self.len), value.clone());
            }
            self.len += 1;
        }
    }

    /// Appends the values in `src` to the back of the array with a single
    /// block copy.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live, or when `src` overlaps this
    /// array's own block.
    pub fn extend_from_copy_slice(&mut self, src: &[T])
    where
        T: Copy,
    {
        self.leases.assert_unleased("extend_from_copy_slice");
        self.assert_disjoint(src);
        self.reserve(src.len());
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), self.data.as_ptr().add(self.len), src.len());
        }
        self.len += src.len();
    }

    /// Panics when `src` lies inside this array's block. Appending from
    /// the array into itself would read from a block that a growth step
    /// may free mid-append.
    fn assert_disjoint(&self, src: &[T]) {
        if mem::size_of::<T>() == 0 || self.cap == 0 {
            return;
        }
        let start = self.data.as_ptr() as usize;
        let end = start + mem::size_of::<T>() * self.cap;
        let at = src.as_ptr() as usize;
        if at >= start && at < end {
            panic!("extend source overlaps the destination buffer");
        }
    }

    /// Removes the values in `range` and returns a cursor yielding them by
    /// value, front to back. Values left unvisited when the cursor drops
    /// are dropped with it, and the tail beyond the range slides down to
    /// close the gap.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live, or unless `start <= end <= len()`.
    pub fn drain<R: RangeBounds<usize>>(&mut self, range: R) -> Drain<'_, T> {
        self.leases.assert_unleased("drain");
        let (start, end) = check_range(range, self.len);
        log::trace!("vec: draining {}..{} of {}", start, end, self.len);
        Drain::new(self, start, end)
    }

    /// Moves the block, values, and lease record out into a fresh `Vec`,
    /// leaving this one empty with no block.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    pub fn take(&mut self) -> Vec<T> {
        let leases = self.leases.take();
        Vec {
            data: mem::replace(&mut self.data, NonNull::dangling()),
            len: mem::replace(&mut self.len, 0),
            cap: mem::replace(&mut self.cap, 0),
            leases,
        }
    }

    /// Lends the values out as a shared, lease-counted handle. The handle
    /// is not bound to this borrow of the array; it stays valid across
    /// moves of the `Vec` value, and the array refuses mutation until the
    /// handle and all its clones drop.
    ///
    /// # Panics
    ///
    /// Panics while an exclusive lease is live.
    pub fn lend(&self) -> Lent<T> {
        let lease = self.leases.lend();
        Lent::new(self.data, self.len, lease)
    }

    /// Lends the values out as an exclusive, lease-counted handle. The
    /// array refuses all access until the handle drops.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    pub fn lend_mut(&mut self) -> LentMut<T> {
        let lease = self.leases.lend_mut();
        LentMut::new(self.data, self.len, lease)
    }

    /// Returns a cursor over all the values, visited front to back. The
    /// cursor holds a shared lease, so the array refuses mutation while
    /// it lives.
    ///
    /// # Panics
    ///
    /// Panics while an exclusive lease is live.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data.as_ptr(), self.len, Some(self.leases.lend()))
    }

    /// Returns a cursor over all the values, visited front to back,
    /// yielding mutable references. The cursor holds an exclusive lease,
    /// so the array refuses all access while it lives.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let lease = self.leases.lend_mut();
        IterMut::new(self.data.as_ptr(), self.len, Some(lease))
    }
}

impl<T> Default for Vec<T> {
    #[inline]
    fn default() -> Vec<T> {
        Vec::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Vec<T> {
    fn from(values: [T; N]) -> Vec<T> {
        let mut vec = Vec::with_capacity(N);
        let values = ManuallyDrop::new(values);
        unsafe {
            ptr::copy_nonoverlapping(values.as_ptr(), vec.data.as_ptr(), N);
        }
        vec.len = N;
        vec
    }
}

impl<T> FromIterator<T> for Vec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Vec<T> {
        let mut vec = Vec::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for Vec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.leases.assert_unleased("extend");
        let iter = iter.into_iter();
        let (low, _) = iter.size_hint();
        self.reserve(low);
        for value in iter {
            if self.len == self.cap {
                self.reserve(1);
            }
            unsafe {
                ptr::write(self.data.as_ptr().add(self.len), value);
            }
            self.len += 1;
        }
    }
}

impl<T> Deref for Vec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for Vec<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        self.leases.assert_unaliased("index");
        if i >= self.len {
            index_out_of_bounds(i, self.len);
        }
        unsafe { &*self.data.as_ptr().add(i) }
    }
}

impl<T> IndexMut<usize> for Vec<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.leases.assert_unleased("index_mut");
        if i >= self.len {
            index_out_of_bounds(i, self.len);
        }
        unsafe { &mut *self.data.as_ptr().add(i) }
    }
}

impl<T> IntoIterator for Vec<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Consumes the array into a cursor yielding its values front to back.
    ///
    /// # Panics
    ///
    /// Panics while any lease is live.
    fn into_iter(self) -> IntoIter<T> {
        let vec = ManuallyDrop::new(self);
        vec.leases.assert_unleased("into_iter");
        // The lease record is dropped here; everything else moves into the
        // cursor.
        unsafe {
            drop(ptr::read(&vec.leases));
        }
        IntoIter::new(vec.data, vec.len, vec.cap)
    }
}

impl<'a, T> IntoIterator for &'a Vec<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vec<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: Clone> Clone for Vec<T> {
    /// Deep-copies the values into a fresh block of the same capacity.
    fn clone(&self) -> Vec<T> {
        let src = self.as_slice();
        let mut vec = Vec::with_capacity(self.cap);
        vec.extend_from_slice(src);
        vec
    }

    fn clone_from(&mut self, source: &Vec<T>) {
        self.leases.assert_unleased("clone_from");
        let src = source.as_slice();
        self.truncate(src.len());
        let keep = self.len;
        self.as_mut_slice().clone_from_slice(&src[..keep]);
        self.extend_from_slice(&src[keep..]);
    }
}

impl<T: PartialEq> PartialEq for Vec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq> Eq for Vec<T> {}

impl<T: PartialOrd> PartialOrd for Vec<T> {
    fn partial_cmp(&self, other: &Vec<T>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vec<T> {
    fn cmp(&self, other: &Vec<T>) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Vec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for Vec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Drop for Vec<T> {
    fn drop(&mut self) {
        // Refusing the drop leaks the block, which keeps every live view
        // pointing at valid storage.
        self.leases.assert_unleased("drop");
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(self.data.as_ptr(), self.len));
            if self.cap != 0 && mem::size_of::<T>() != 0 {
                alloc::alloc::dealloc(self.data.as_ptr() as *mut u8, self.current_layout());
            }
        }
    }
}
