//! Swap primitives for cursor-addressed elements.

use core::ptr;

use crate::cursor::Addressable;
use crate::tracking;

/// Exchanges two values in place.
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b);
}

/// Exchanges the elements addressed by two cursors.
///
/// The cursors may denote the same position, in which case this is a no-op
/// permutation-wise.
#[inline]
pub fn swap_iter<C: Addressable>(a: &C, b: &C) {
    tracking::register_swap();
    // SAFETY: both cursors address live elements per the Addressable
    // contract, and ptr::swap tolerates equal pointers.
    unsafe { ptr::swap(a.ptr(), b.ptr()) }
}

/// Walks `[a_begin, a_end)` and the range starting at `b_begin` in lockstep,
/// exchanging corresponding elements.
///
/// The caller must guarantee the second range holds at least
/// `distance(a_begin, a_end)` elements; this is a contract, not a checked
/// error.
pub fn swap_ranges<C: Addressable>(a_begin: &C, a_end: &C, b_begin: &C) {
    let mut a = a_begin.clone();
    let mut b = b_begin.clone();
    while !a.equals(a_end) {
        swap_iter(&a, &b);
        a.advance_one();
        b.advance_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::SliceCursor;
    use crate::traversal::advance_copy;

    #[test]
    fn swap_iter_exchanges_elements() {
        let mut v = [1, 2];
        let (begin, _) = SliceCursor::range(&mut v);
        let second = advance_copy(&begin, 1);
        swap_iter(&begin, &second);
        assert_eq!(v, [2, 1]);
    }

    #[test]
    fn swap_iter_same_position_is_noop() {
        let mut v = [7];
        let (begin, _) = SliceCursor::range(&mut v);
        swap_iter(&begin, &begin.clone());
        assert_eq!(v, [7]);
    }

    #[test]
    fn swap_ranges_lockstep() {
        let mut v = [1, 2, 3, 10, 20, 30];
        let (begin, _) = SliceCursor::range(&mut v);
        let mid = advance_copy(&begin, 3);
        swap_ranges(&begin, &mid, &mid);
        assert_eq!(v, [10, 20, 30, 1, 2, 3]);
    }
}
