//! Capability-aware position arithmetic.
//!
//! These helpers are written against the overridable plumbing methods on
//! [`Cursor`] and [`Bidirectional`], so they cost O(1) for cursors that
//! override them (any random-access cursor) and degrade to O(n) stepping
//! otherwise.

use crate::cursor::{Bidirectional, Cursor};

/// Moves `it` by `n` positions, negative being backward.
///
/// Backward movement requires a bidirectional cursor; for a forward-only
/// cursor this function cannot be named with a negative offset in mind, use
/// [`Cursor::advance_by`] directly.
#[inline]
pub fn advance<C: Bidirectional>(it: &mut C, n: isize) {
    if n >= 0 {
        it.advance_by(n as usize);
    } else {
        it.retreat_by(n.unsigned_abs());
    }
}

/// Clones `it`, moves the clone by `n` positions and returns it, leaving the
/// original untouched. The standard way algorithms probe ahead without
/// losing their position.
#[inline]
pub fn advance_copy<C: Bidirectional>(it: &C, n: isize) -> C {
    let mut c = it.clone();
    advance(&mut c, n);
    c
}

/// Number of elements in `[begin, end)`.
#[inline]
pub fn distance<C: Cursor>(begin: &C, end: &C) -> usize {
    begin.distance_to(end)
}

/// Steps `it` forward one position at a time until it reaches `bound`.
/// The forward-only counterpart of [`advance`] toward a known position.
pub fn next_bound<C: Cursor>(it: &mut C, bound: &C) {
    while !it.equals(bound) {
        it.advance_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Readable;
    use crate::slice::SliceCursor;

    #[test]
    fn advance_both_directions() {
        let mut v = [0, 1, 2, 3, 4];
        let (begin, _) = SliceCursor::range(&mut v);
        let mut it = begin.clone();
        advance(&mut it, 4);
        assert_eq!(*it.value(), 4);
        advance(&mut it, -3);
        assert_eq!(*it.value(), 1);
    }

    #[test]
    fn advance_copy_leaves_original() {
        let mut v = [0, 1, 2];
        let (begin, _) = SliceCursor::range(&mut v);
        let ahead = advance_copy(&begin, 2);
        assert_eq!(*begin.value(), 0);
        assert_eq!(*ahead.value(), 2);
    }

    #[test]
    fn distance_full_and_empty() {
        let mut v = [0; 17];
        let (begin, end) = SliceCursor::range(&mut v);
        assert_eq!(distance(&begin, &end), 17);
        assert_eq!(distance(&end, &end), 0);
    }

    #[test]
    fn next_bound_reaches_bound() {
        let mut v = [0, 1, 2, 3];
        let (begin, _) = SliceCursor::range(&mut v);
        let bound = advance_copy(&begin, 3);
        let mut it = begin;
        next_bound(&mut it, &bound);
        assert!(it.equals(&bound));
    }
}
