//! Subdividing adaptors over read-only views.
//!
//! Each adaptor holds the unscanned remainder of the input view and shrinks
//! it as pieces are yielded. Every yielded piece is itself a [`Slice`] over
//! the same storage.

use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;

use super::Slice;

/// Yields the sub-slices strictly between matched elements, front to back.
///
/// Created by [`Slice::split`].
pub struct Split<'a, T, P: FnMut(&T) -> bool> {
    /// The unscanned remainder of the input.
    slice: Slice<'a, T>,
    pred: P,
    finished: bool,
}

impl<'a, T, P: FnMut(&T) -> bool> Split<'a, T, P> {
    #[inline]
    pub(crate) fn new(slice: Slice<'a, T>, pred: P) -> Split<'a, T, P> {
        Split { slice, pred, finished: false }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for Split<'a, T, P> {
    type Item = Slice<'a, T>;

    fn next(&mut self) -> Option<Slice<'a, T>> {
        if self.finished {
            return None;
        }
        let pred = &mut self.pred;
        match self.slice.as_slice().iter().position(|x| pred(x)) {
            Some(idx) => {
                let piece = self.slice.slice(..idx);
                self.slice = self.slice.slice(idx + 1..);
                Some(piece)
            }
            None => {
                self.finished = true;
                Some(self.slice)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(self.slice.len() + 1))
        }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> FusedIterator for Split<'a, T, P> {}

impl<'a, T: Debug, P: FnMut(&T) -> bool> Debug for Split<'a, T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Split")
            .field("slice", &self.slice)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Yields the sub-slices ending at each matched element, the match included
/// as the trailing member, front to back.
///
/// Created by [`Slice::split_inclusive`].
pub struct SplitInclusive<'a, T, P: FnMut(&T) -> bool> {
    /// The unscanned remainder of the input.
    slice: Slice<'a, T>,
    pred: P,
    finished: bool,
}

impl<'a, T, P: FnMut(&T) -> bool> SplitInclusive<'a, T, P> {
    #[inline]
    pub(crate) fn new(slice: Slice<'a, T>, pred: P) -> SplitInclusive<'a, T, P> {
        let finished = slice.is_empty();
        SplitInclusive { slice, pred, finished }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for SplitInclusive<'a, T, P> {
    type Item = Slice<'a, T>;

    fn next(&mut self) -> Option<Slice<'a, T>> {
        if self.finished {
            return None;
        }
        let pred = &mut self.pred;
        match self.slice.as_slice().iter().position(|x| pred(x)) {
            Some(idx) => {
                let piece = self.slice.slice(..idx + 1);
                self.slice = self.slice.slice(idx + 1..);
                // A match on the final element leaves no trailing remainder.
                if self.slice.is_empty() {
                    self.finished = true;
                }
                Some(piece)
            }
            None => {
                self.finished = true;
                Some(self.slice)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(self.slice.len()))
        }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> FusedIterator for SplitInclusive<'a, T, P> {}

impl<'a, T: Debug, P: FnMut(&T) -> bool> Debug for SplitInclusive<'a, T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitInclusive")
            .field("slice", &self.slice)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Yields the sub-slices strictly between matched elements, back to front.
///
/// Created by [`Slice::rsplit`].
pub struct RSplit<'a, T, P: FnMut(&T) -> bool> {
    /// The unscanned remainder of the input.
    slice: Slice<'a, T>,
    pred: P,
    finished: bool,
}

impl<'a, T, P: FnMut(&T) -> bool> RSplit<'a, T, P> {
    #[inline]
    pub(crate) fn new(slice: Slice<'a, T>, pred: P) -> RSplit<'a, T, P> {
        RSplit { slice, pred, finished: false }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for RSplit<'a, T, P> {
    type Item = Slice<'a, T>;

    fn next(&mut self) -> Option<Slice<'a, T>> {
        if self.finished {
            return None;
        }
        let pred = &mut self.pred;
        match self.slice.as_slice().iter().rposition(|x| pred(x)) {
            Some(idx) => {
                let piece = self.slice.slice(idx + 1..);
                self.slice = self.slice.slice(..idx);
                Some(piece)
            }
            None => {
                self.finished = true;
                Some(self.slice)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(self.slice.len() + 1))
        }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> FusedIterator for RSplit<'a, T, P> {}

impl<'a, T: Debug, P: FnMut(&T) -> bool> Debug for RSplit<'a, T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RSplit")
            .field("slice", &self.slice)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Yields at most `n` sub-slices; matched elements stop being treated as
/// separators once one piece remains, so the final piece is the whole
/// unscanned remainder.
///
/// Created by [`Slice::splitn`].
pub struct SplitN<'a, T, P: FnMut(&T) -> bool> {
    /// The unscanned remainder of the input.
    slice: Slice<'a, T>,
    pred: P,
    /// Pieces left to yield.
    n: usize,
    finished: bool,
}

impl<'a, T, P: FnMut(&T) -> bool> SplitN<'a, T, P> {
    #[inline]
    pub(crate) fn new(slice: Slice<'a, T>, n: usize, pred: P) -> SplitN<'a, T, P> {
        SplitN { slice, pred, n, finished: n == 0 }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for SplitN<'a, T, P> {
    type Item = Slice<'a, T>;

    fn next(&mut self) -> Option<Slice<'a, T>> {
        if self.finished {
            return None;
        }
        if self.n == 1 {
            self.finished = true;
            return Some(self.slice);
        }
        let pred = &mut self.pred;
        match self.slice.as_slice().iter().position(|x| pred(x)) {
            Some(idx) => {
                let piece = self.slice.slice(..idx);
                self.slice = self.slice.slice(idx + 1..);
                self.n -= 1;
                Some(piece)
            }
            None => {
                self.finished = true;
                Some(self.slice)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(core::cmp::min(self.n, self.slice.len() + 1)))
        }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> FusedIterator for SplitN<'a, T, P> {}

impl<'a, T: Debug, P: FnMut(&T) -> bool> Debug for SplitN<'a, T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitN")
            .field("slice", &self.slice)
            .field("n", &self.n)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Yields every overlapping length-`size` sub-slice, front to back.
///
/// Created by [`Slice::windows`].
pub struct Windows<'a, T> {
    /// Remainder of the input still covered by unvisited windows.
    slice: Slice<'a, T>,
    size: usize,
}

impl<'a, T> Windows<'a, T> {
    #[inline]
    pub(crate) fn new(slice: Slice<'a, T>, size: usize) -> Windows<'a, T> {
        assert!(size != 0, "window size must be non-zero");
        Windows { slice, size }
    }
}

impl<'a, T> Iterator for Windows<'a, T> {
    type Item = Slice<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Slice<'a, T>> {
        if self.size > self.slice.len() {
            return None;
        }
        let window = self.slice.slice(..self.size);
        self.slice = self.slice.slice(1..);
        Some(window)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Windows<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Slice<'a, T>> {
        let len = self.slice.len();
        if self.size > len {
            return None;
        }
        let window = self.slice.slice(len - self.size..);
        self.slice = self.slice.slice(..len - 1);
        Some(window)
    }
}

impl<'a, T> ExactSizeIterator for Windows<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        if self.size > self.slice.len() {
            0
        } else {
            self.slice.len() - self.size + 1
        }
    }
}

impl<'a, T> FusedIterator for Windows<'a, T> {}

impl<'a, T> Clone for Windows<'a, T> {
    fn clone(&self) -> Windows<'a, T> {
        Windows { slice: self.slice, size: self.size }
    }
}

impl<'a, T: Debug> Debug for Windows<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Windows")
            .field("slice", &self.slice)
            .field("size", &self.size)
            .finish()
    }
}

/// Yields non-overlapping length-`size` sub-slices, front to back; the
/// final chunk may be shorter.
///
/// Created by [`Slice::chunks`].
pub struct Chunks<'a, T> {
    /// Remainder of the input not yet chunked.
    slice: Slice<'a, T>,
    size: usize,
}

impl<'a, T> Chunks<'a, T> {
    #[inline]
    pub(crate) fn new(slice: Slice<'a, T>, size: usize) -> Chunks<'a, T> {
        assert!(size != 0, "chunk size must be non-zero");
        Chunks { slice, size }
    }
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = Slice<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Slice<'a, T>> {
        if self.slice.is_empty() {
            return None;
        }
        let n = core::cmp::min(self.size, self.slice.len());
        let chunk = self.slice.slice(..n);
        self.slice = self.slice.slice(n..);
        Some(chunk)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Chunks<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Slice<'a, T>> {
        let len = self.slice.len();
        if len == 0 {
            return None;
        }
        let rem = len % self.size;
        let last = if rem == 0 { self.size } else { rem };
        let chunk = self.slice.slice(len - last..);
        self.slice = self.slice.slice(..len - last);
        Some(chunk)
    }
}

impl<'a, T> ExactSizeIterator for Chunks<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        let len = self.slice.len();
        if len == 0 {
            0
        } else {
            (len - 1) / self.size + 1
        }
    }
}

impl<'a, T> FusedIterator for Chunks<'a, T> {}

impl<'a, T> Clone for Chunks<'a, T> {
    fn clone(&self) -> Chunks<'a, T> {
        Chunks { slice: self.slice, size: self.size }
    }
}

impl<'a, T: Debug> Debug for Chunks<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunks")
            .field("slice", &self.slice)
            .field("size", &self.size)
            .finish()
    }
}
