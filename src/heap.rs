//! Binary max-heap algorithms over a random-access cursor range.
//!
//! The heap is implicit and 0-indexed: the children of node `i` live at
//! `2i + 1` and `2i + 2`. All functions take a `[begin, end)` cursor pair
//! and index through [`RandomAccess::at`], offset by `begin.index()` so the
//! range does not have to start at the front of its backing sequence.

use core::ptr;

use crate::cursor::RandomAccess;
use crate::tracking;
use crate::traversal::distance;
use crate::util::{Cmp, UnwrapAbort};

/// Rearranges `[begin, end)` into a max-heap using the natural order.
pub fn make_heap<C>(begin: &C, end: &C)
where
    C: RandomAccess,
    C::Item: Ord,
{
    make_heap_by(begin, end, |a, b| a.lt(b))
}

/// Rearranges `[begin, end)` into a max-heap ordered by `is_less`.
///
/// Sifts down every internal node, last parent first; O(n) total work.
pub fn make_heap_by<C, F>(begin: &C, end: &C, mut is_less: F)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    let size = distance(begin, end);
    if size < 2 {
        return;
    }
    for root in (0..size / 2).rev() {
        sift_down(begin, size, root, &mut is_less);
    }
}

/// Restores the heap invariant after appending an element at `end - 1`.
///
/// The caller is expected to have placed the new element in the last
/// position already; it is sifted up by repeated parent comparison. Ranges
/// shorter than two elements are left untouched.
pub fn push_heap<C>(begin: &C, end: &C)
where
    C: RandomAccess,
    C::Item: Ord,
{
    push_heap_by(begin, end, |a, b| a.lt(b))
}

/// See [`push_heap`], with an explicit comparator.
pub fn push_heap_by<C, F>(begin: &C, end: &C, mut is_less: F)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    let size = distance(begin, end);
    if size < 2 {
        return;
    }

    let base = begin.index();
    let mut idx = size - 1;
    while idx > 0 {
        let parent = (idx - 1) / 2;
        // SAFETY: idx and parent are both < size, so at() addresses live
        // elements of the range.
        unsafe {
            let cur = begin.at(base + idx).unwrap_abort();
            let par = begin.at(base + parent).unwrap_abort();
            if is_less(&*par, &*cur) {
                tracking::register_swap();
                ptr::swap(cur, par);
            } else {
                break;
            }
        }
        idx = parent;
    }
}

/// Moves the maximum to `end - 1` and restores the heap invariant over
/// `[begin, end - 1)`.
///
/// Physically removing the detached element from the backing container is
/// the caller's job. Ranges shorter than two elements are left untouched.
pub fn pop_heap<C>(begin: &C, end: &C)
where
    C: RandomAccess,
    C::Item: Ord,
{
    pop_heap_by(begin, end, |a, b| a.lt(b))
}

/// See [`pop_heap`], with an explicit comparator.
pub fn pop_heap_by<C, F>(begin: &C, end: &C, mut is_less: F)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    let size = distance(begin, end);
    if size < 2 {
        return;
    }
    let base = begin.index();
    tracking::register_swap();
    // SAFETY: 0 and size - 1 are in range.
    unsafe {
        ptr::swap(
            begin.at(base).unwrap_abort(),
            begin.at(base + size - 1).unwrap_abort(),
        );
    }
    sift_down(begin, size - 1, 0, &mut is_less);
}

/// Sorts a max-heap in place into ascending order by repeatedly popping the
/// maximum to the end of the shrinking heap range.
pub fn sort_heap<C>(begin: &C, end: &C)
where
    C: RandomAccess,
    C::Item: Ord,
{
    sort_heap_by(begin, end, |a, b| a.lt(b))
}

/// See [`sort_heap`], with an explicit comparator.
pub fn sort_heap_by<C, F>(begin: &C, end: &C, mut is_less: F)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    let mut size = distance(begin, end);
    let base = begin.index();
    while size > 1 {
        tracking::register_swap();
        // SAFETY: 0 and size - 1 are in range.
        unsafe {
            ptr::swap(
                begin.at(base).unwrap_abort(),
                begin.at(base + size - 1).unwrap_abort(),
            );
        }
        size -= 1;
        sift_down(begin, size, 0, &mut is_less);
    }
}

/// Sifts the element at `root` down its subtree until both children compare
/// no greater than their parent. Recursion depth is the heap height.
pub(crate) fn sift_down<C, F>(begin: &C, size: usize, root: usize, is_less: &mut F)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    if size == 0 || root >= size {
        return;
    }

    let base = begin.index();
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let mut largest = root;

    // SAFETY: every index compared below is < size, so at() addresses live
    // elements of the range.
    unsafe {
        if left < size {
            let l = begin.at(base + left).unwrap_abort();
            let cur = begin.at(base + largest).unwrap_abort();
            if is_less(&*cur, &*l) {
                largest = left;
            }
        }
        if right < size {
            let r = begin.at(base + right).unwrap_abort();
            let cur = begin.at(base + largest).unwrap_abort();
            if is_less(&*cur, &*r) {
                largest = right;
            }
        }
        if largest != root {
            tracking::register_swap();
            ptr::swap(
                begin.at(base + root).unwrap_abort(),
                begin.at(base + largest).unwrap_abort(),
            );
            sift_down(begin, size, largest, is_less);
        }
    }
}

#[cfg(all(test, feature = "tracking"))]
mod tests {
    use super::*;
    use crate::slice::SliceCursor;

    #[test]
    fn heap_swaps_are_counted() {
        let mut v: Vec<i32> = (0..64).rev().collect();
        crate::tracking::take_counts();
        {
            let (begin, end) = SliceCursor::range(&mut v);
            make_heap(&begin, &end);
            sort_heap(&begin, &end);
        }
        let counts = crate::tracking::take_counts();
        assert!(counts.swaps > 0);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}
