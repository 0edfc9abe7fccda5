#![deny(unsafe_op_in_unsafe_fn)]

//! Cursorkit is a container-agnostic algorithm library: ordered-range
//! search, binary heap maintenance, reversal, rotation and a
//! pattern-defeating quicksort, each written once against an abstract
//! cursor interface and usable unmodified
//! over any sequence that hands out cursors of the required capability
//! tier.
//!
//! Cursors form a five-tier trait hierarchy ([`Readable`], [`Addressable`],
//! [`Forward`], [`Bidirectional`], [`RandomAccess`]); every algorithm
//! states the weakest tier it needs as a bound. Position arithmetic
//! (`advance`, `distance`) goes through overridable trait plumbing, so it
//! costs O(1) for random-access cursors and degrades gracefully to O(n)
//! stepping for weaker ones.
//!
//! The crate ships one cursor, [`SliceCursor`], spanning a borrowed slice;
//! the slice-level [`sort`] family below is a thin wrapper around it.
//! Containers with their own cursor types get the same algorithms through
//! the `_range`/`_by` entry points.

// Ranges below this size are always sorted with insertion sort.
const INSERTION_SORT_THRESHOLD: usize = 24;

// Ranges above this size use a pseudomedian of nine as the pivot.
const NINTHER_THRESHOLD: usize = 128;

// Element moves tolerated before an opportunistic insertion sort pass is
// abandoned.
const PARTIAL_INSERTION_SORT_LIMIT: usize = 8;

// We always need the tracking module internally to provide a fallback dummy
// implementation to prevent adding conditional compilation everywhere.
#[cfg(not(feature = "tracking"))]
mod tracking;
#[cfg(feature = "tracking")]
pub mod tracking;

mod bounds;
mod cursor;
mod heap;
mod minmax;
mod pdqsort;
mod reverse;
mod rotate;
mod slice;
mod swap;
mod traversal;
mod util;

use core::cmp::Ordering;

pub use bounds::{
    binary_search, binary_search_by, lower_bound, lower_bound_by, upper_bound, upper_bound_by,
};
pub use cursor::{Addressable, Bidirectional, Cursor, Forward, RandomAccess, Readable};
pub use heap::{
    make_heap, make_heap_by, pop_heap, pop_heap_by, push_heap, push_heap_by, sort_heap,
    sort_heap_by,
};
pub use minmax::{max_element, max_element_by, min_element, min_element_by};
pub use reverse::reverse;
pub use rotate::rotate;
pub use slice::SliceCursor;
pub use swap::{swap, swap_iter, swap_ranges};
pub use traversal::{advance, advance_copy, distance, next_bound};
pub use util::Cmp;

use util::cmp_from_closure;

/// Sorts a slice with the natural order. Unstable, O(n log n) worst case.
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b))
}

/// Sorts a slice with a key extraction function.
pub fn sort_by_key<T, F: FnMut(&T) -> K, K: Ord>(v: &mut [T], mut f: F) {
    sort_by(v, |a, b| f(a).cmp(&f(b)))
}

/// Sorts a slice with a comparator function.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Zero-sized types are either always or never sorted, as they can not
    // carry any information that would allow the permutation to change.
    if core::mem::size_of::<T>() == 0 {
        return;
    }

    let mut is_less = cmp_from_closure(|a, b| {
        tracking::register_cmp();
        compare(a, b) == Ordering::Less
    });

    let (begin, end) = SliceCursor::range(v);
    pdqsort::pdqsort(&begin, &end, &mut is_less);
}

/// Sorts the cursor range `[begin, end)` with the natural order.
pub fn sort_range<C>(begin: &C, end: &C)
where
    C: RandomAccess,
    C::Item: Ord,
{
    sort_range_by(begin, end, |a, b| a.lt(b))
}

/// Sorts the cursor range `[begin, end)` ordered by the strict-weak-order
/// predicate `less`.
pub fn sort_range_by<C, F>(begin: &C, end: &C, mut less: F)
where
    C: RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut is_less = cmp_from_closure(|a, b| {
        tracking::register_cmp();
        less(a, b)
    });

    pdqsort::pdqsort(begin, end, &mut is_less);
}
