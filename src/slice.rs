//! The canonical random-access cursor: a position into a borrowed slice.
//!
//! [`SliceCursor`] is a base pointer plus an index. The mutable borrow taken
//! by [`SliceCursor::range`] keeps the slice alive and un-reallocatable for
//! the cursor lifetime, so the structural-mutation hazard that applies to
//! cursors over growable containers cannot occur here. Clones of a cursor
//! alias the same elements; algorithms mutate through [`Addressable::ptr`]
//! under the range contract.

use core::fmt;
use core::marker::PhantomData;

use crate::cursor::{Addressable, Bidirectional, Cursor, RandomAccess, Readable};

pub struct SliceCursor<'a, T> {
    base: *mut T,
    len: usize,
    idx: usize,
    _backing: PhantomData<&'a mut [T]>,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Returns the `(begin, end)` cursor pair spanning `slice`.
    ///
    /// All cursors cloned from the pair address the same elements; the
    /// borrow on `slice` outlives them all.
    pub fn range(slice: &'a mut [T]) -> (Self, Self) {
        let base = slice.as_mut_ptr();
        let len = slice.len();
        let begin = SliceCursor {
            base,
            len,
            idx: 0,
            _backing: PhantomData,
        };
        let end = SliceCursor {
            base,
            len,
            idx: len,
            _backing: PhantomData,
        };
        (begin, end)
    }

    fn is_end(&self) -> bool {
        self.idx == self.len
    }
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        SliceCursor {
            base: self.base,
            len: self.len,
            idx: self.idx,
            _backing: PhantomData,
        }
    }
}

impl<'a, T> fmt::Debug for SliceCursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("idx", &self.idx)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        debug_assert!(self.base == other.base, "cursors from different slices");
        self.idx == other.idx
    }

    #[inline]
    fn has_next(&self) -> bool {
        self.idx + 1 < self.len
    }

    #[inline]
    fn advance_one(&mut self) {
        debug_assert!(!self.is_end());
        self.idx += 1;
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        debug_assert!(n <= self.len - self.idx);
        self.idx += n;
    }

    #[inline]
    fn distance_to(&self, end: &Self) -> usize {
        debug_assert!(self.base == end.base, "cursors from different slices");
        debug_assert!(self.idx <= end.idx);
        end.idx - self.idx
    }
}

impl<'a, T> Readable for SliceCursor<'a, T> {
    type Item = T;

    #[inline]
    fn value(&self) -> &T {
        debug_assert!(!self.is_end());
        // SAFETY: idx < len, and the backing slice is mutably borrowed for
        // 'a, so the element is live and in bounds.
        unsafe { &*self.base.add(self.idx) }
    }
}

impl<'a, T> Addressable for SliceCursor<'a, T> {
    #[inline]
    fn ptr(&self) -> *mut T {
        debug_assert!(!self.is_end());
        // In bounds by the check above; validity of the pointee is the
        // caller's obligation per the Addressable contract.
        unsafe { self.base.add(self.idx) }
    }
}

impl<'a, T> Bidirectional for SliceCursor<'a, T> {
    #[inline]
    fn has_prev(&self) -> bool {
        self.idx >= 1
    }

    #[inline]
    fn retreat_one(&mut self) {
        debug_assert!(self.idx > 0);
        self.idx -= 1;
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        debug_assert!(n <= self.idx);
        self.idx -= n;
    }
}

impl<'a, T> RandomAccess for SliceCursor<'a, T> {
    #[inline]
    fn at(&self, index: usize) -> Option<*mut T> {
        if index < self.len {
            // SAFETY: index < len keeps the offset within the allocation.
            Some(unsafe { self.base.add(index) })
        } else {
            None
        }
    }

    #[inline]
    fn shift(&mut self, offset: isize) {
        if offset < 0 {
            self.retreat_by(offset.unsigned_abs());
        } else {
            self.advance_by(offset as usize);
        }
    }

    #[inline]
    fn index(&self) -> usize {
        self.idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_cursor_positioning() {
        let mut v = [1, 2, 3];
        let (mut begin, end) = SliceCursor::range(&mut v);
        assert!(!begin.equals(&end));
        begin.advance_by(3);
        assert!(begin.equals(&end));
        assert!(!begin.has_next());
        assert!(begin.has_prev());
    }

    #[test]
    fn empty_slice_begin_is_end() {
        let mut v: [i32; 0] = [];
        let (begin, end) = SliceCursor::range(&mut v);
        assert!(begin.equals(&end));
        assert!(!begin.has_next());
        assert!(!begin.has_prev());
    }

    #[test]
    fn shift_matches_single_steps() {
        let mut v = [10, 20, 30, 40];
        let (begin, _) = SliceCursor::range(&mut v);

        let mut shifted = begin.clone();
        shifted.shift(3);
        let mut stepped = begin.clone();
        for _ in 0..3 {
            stepped.advance_one();
        }
        assert!(shifted.equals(&stepped));
        assert_eq!(shifted.index(), 3);

        shifted.shift(-2);
        assert_eq!(shifted.index(), 1);
        assert_eq!(*shifted.value(), 20);
    }

    #[test]
    fn at_is_relative_to_sequence_start() {
        let mut v = [5, 6, 7];
        let (mut begin, _) = SliceCursor::range(&mut v);
        begin.advance_one();
        let p = begin.at(0).unwrap();
        assert_eq!(unsafe { *p }, 5);
        assert!(begin.at(3).is_none());
    }

    #[test]
    fn clones_alias_the_same_elements() {
        let mut v = [1, 2, 3];
        let (begin, _) = SliceCursor::range(&mut v);
        let other = begin.clone();
        unsafe { *begin.ptr() = 9 };
        assert_eq!(*other.value(), 9);
    }
}
