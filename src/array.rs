//! Fixed-size owned array with lease-counted cursors.
//!
//! [`Array`] stores its `N` values inline, so unlike a heap-backed
//! container its storage moves whenever the value moves. Views and cursors
//! are therefore bound to a borrow of the array, and moving the array while
//! one is live is rejected at compile time. The lease record is still kept
//! so that the number of live cursors is observable at run time.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};

use crate::lease::Leases;
use crate::slice::{index_out_of_bounds, Iter, IterMut, Slice, SliceMut};

/// A fixed-size owned array of `N` values stored inline.
pub struct Array<T, const N: usize> {
    /// The values, in index order.
    data: [T; N],
    /// Counts live cursors over the values.
    leases: Leases,
}

impl<T, const N: usize> Array<T, N> {
    /// Returns an array built by calling `init` with each index in order,
    /// front to back.
    pub fn with_initializer<F: FnMut(usize) -> T>(init: F) -> Array<T, N> {
        Array {
            data: array::from_fn(init),
            leases: Leases::new(),
        }
    }

    /// Returns an array holding `N` clones of `value`.
    pub fn with_value(value: T) -> Array<T, N>
    where
        T: Clone,
    {
        Array::with_initializer(|_| value.clone())
    }

    /// Returns an array holding `N` default values.
    pub fn with_default() -> Array<T, N>
    where
        T: Default,
    {
        Array::with_initializer(|_| T::default())
    }

    /// Returns the number of values in the array.
    #[inline]
    pub fn len(&self) -> usize {
        N
    }

    /// Returns `true` when `N` is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the number of live cursors over the array, shared and
    /// exclusive combined.
    #[inline]
    pub fn lease_count(&self) -> usize {
        self.leases.count()
    }

    /// Returns a reference to the value at index `i`, or `None` when `i`
    /// is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Returns a mutable reference to the value at index `i`, or `None`
    /// when `i` is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics while any cursor is live.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.leases.assert_unleased("get_mut");
        self.data.get_mut(i)
    }

    /// Returns the values as a primitive slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the values as a mutable primitive slice.
    ///
    /// # Panics
    ///
    /// Panics while any cursor is live.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.leases.assert_unleased("as_mut_slice");
        &mut self.data
    }

    /// Returns a read-only view of the values, for sub-ranging and
    /// splitting.
    #[inline]
    pub fn slice(&self) -> Slice<'_, T> {
        Slice::from(self.as_slice())
    }

    /// Returns a read-write view of the values.
    ///
    /// # Panics
    ///
    /// Panics while any cursor is live.
    #[inline]
    pub fn slice_mut(&mut self) -> SliceMut<'_, T> {
        SliceMut::from(self.as_mut_slice())
    }

    /// Returns a cursor over all the values, visited front to back. The
    /// cursor takes a shared lease for as long as it lives.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data.as_ptr(), N, Some(self.leases.lend()))
    }

    /// Returns a cursor over all the values, visited front to back,
    /// yielding mutable references. The cursor takes an exclusive lease
    /// for as long as it lives.
    ///
    /// # Panics
    ///
    /// Panics while any cursor is live.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let lease = self.leases.lend_mut();
        IterMut::new(self.data.as_mut_ptr(), N, Some(lease))
    }

    /// Consumes the array into one of `R` by applying `map` to each value
    /// in index order, front to back.
    pub fn map<R, F: FnMut(T) -> R>(self, map: F) -> Array<R, N> {
        let Array { data, leases } = self;
        leases.assert_unleased("map");
        Array {
            data: data.map(map),
            leases: Leases::new(),
        }
    }

    /// Consumes the array into its inline values.
    pub fn into_inner(self) -> [T; N] {
        let Array { data, leases } = self;
        leases.assert_unleased("into_inner");
        data
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Array<T, N> {
        Array { data, leases: Leases::new() }
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Array<T, N> {
        Array::with_default()
    }
}

impl<T: Clone, const N: usize> Clone for Array<T, N> {
    fn clone(&self) -> Array<T, N> {
        Array {
            data: self.data.clone(),
            leases: Leases::new(),
        }
    }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        if i >= N {
            index_out_of_bounds(i, N);
        }
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.leases.assert_unleased("index_mut");
        if i >= N {
            index_out_of_bounds(i, N);
        }
        &mut self.data[i]
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;

    type IntoIter = array::IntoIter<T, N>;

    /// Consumes the array into a cursor yielding its values front to back.
    fn into_iter(self) -> array::IntoIter<T, N> {
        self.into_inner().into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Array<T, N> {
    fn eq(&self, other: &Array<T, N>) -> bool {
        self.data.eq(&other.data)
    }
}

impl<T: Eq, const N: usize> Eq for Array<T, N> {}

impl<T: Hash, const N: usize> Hash for Array<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<T: Debug, const N: usize> Debug for Array<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}
