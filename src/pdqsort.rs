/*
    Pattern-defeating quicksort over a random-access cursor range.

    The engine is the classic pdqsort shape: insertion sort below a size
    threshold, median-of-3 (or pseudomedian-of-9 for large ranges) pivot
    selection, and an introspective escape hatch that finishes the current
    range with heapsort once too many partitions come out lopsided, capping
    the worst case at O(n log n).

    Two partition routines exist and differ in which side collects elements
    equal to the pivot. partition_right is the workhorse: it puts equal
    elements in the right partition. partition_left puts them in the left
    partition and is chosen when the element just before the range equals
    our pivot — that element is the boundary of an earlier partition, so
    everything equal to it can be excluded from further sorting in one
    linear pass. This is what makes the sort effectively O(nk) for inputs
    with only k distinct keys.

    The recursion scheme keeps stack depth logarithmic without relying on
    tail calls: each iteration recurses into the left partition and then
    loops on the right partition by reassigning begin.

    Everything below positions itself exclusively through the RandomAccess
    cursor contract. Pointers obtained from ptr()/at() are dereferenced
    under the range validity contract; the scans that look unguarded are
    bounded by sentinel elements the pivot selection has already put in
    place, exactly as in the array version of the algorithm.
*/

use core::mem::ManuallyDrop;
use core::ptr;

use crate::cursor::RandomAccess;
use crate::heap::{make_heap_by, sort_heap_by};
use crate::swap::swap_iter;
use crate::traversal::{advance_copy, distance};
use crate::util::*;

/// Sorts `[begin, end)` according to `is_less`.
pub(crate) fn pdqsort<C, F>(begin: &C, end: &C, is_less: &mut F)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    if begin.equals(end) {
        return;
    }
    let size = distance(begin, end);
    pdqsort_loop(begin.clone(), end, is_less, log2(size), true);
}

/// The main loop: recurses on left partitions, iterates on right ones.
///
/// `bad_allowed` is the remaining budget of highly unbalanced partitions
/// before we abandon quicksort for this range and heapsort the remainder.
/// `left_most` is true while `begin` is the start of the original range;
/// once it is false the element immediately before `begin` is a previous
/// partition boundary and may be read.
fn pdqsort_loop<C, F>(
    mut begin: C,
    end: &C,
    is_less: &mut F,
    mut bad_allowed: u32,
    mut left_most: bool,
) where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    loop {
        let size = distance(&begin, end);

        if size < crate::INSERTION_SORT_THRESHOLD {
            insertion_sort(&begin, end, is_less);
            return;
        }

        // Put a pivot at begin: median of 3 for modest ranges, pseudomedian
        // of 9 (three sorted triples, then the median of their middles)
        // above the ninther threshold.
        let s2 = (size / 2) as isize;
        if size > crate::NINTHER_THRESHOLD {
            sort3(
                &begin,
                &advance_copy(&begin, s2),
                &advance_copy(end, -1),
                is_less,
            );
            sort3(
                &advance_copy(&begin, 1),
                &advance_copy(&begin, s2 - 1),
                &advance_copy(end, -2),
                is_less,
            );
            sort3(
                &advance_copy(&begin, 2),
                &advance_copy(&begin, s2 + 1),
                &advance_copy(end, -3),
                is_less,
            );
            sort3(
                &advance_copy(&begin, s2 - 1),
                &advance_copy(&begin, s2),
                &advance_copy(&begin, s2 + 1),
                is_less,
            );
            swap_iter(&begin, &advance_copy(&begin, s2));
        } else {
            sort3(
                &advance_copy(&begin, s2),
                &begin,
                &advance_copy(end, -1),
                is_less,
            );
        }

        // If the boundary element of the previous partition is not less
        // than our pivot it must be equal to it. Partition the equal run to
        // the left and continue past it; no recursion needed.
        // SAFETY: not leftmost, so the element before begin exists.
        let prev_geq_pivot = !left_most
            && unsafe { !is_less(&*advance_copy(&begin, -1).ptr(), &*begin.ptr()) };
        if prev_geq_pivot {
            begin = advance_copy(&partition_left(&begin, end, is_less), 1);
            continue;
        }

        let (pivot_pos, already_partitioned) = partition_right(&begin, end, is_less);

        let l_size = distance(&begin, &pivot_pos);
        let r_size = distance(&advance_copy(&pivot_pos, 1), end);
        let highly_unbalanced = l_size < size / 8 || r_size < size / 8;

        if highly_unbalanced {
            bad_allowed -= 1;
            if bad_allowed == 0 {
                make_heap_by(&begin, end, &mut *is_less);
                sort_heap_by(&begin, end, &mut *is_less);
                return;
            }

            // Still within budget: shuffle a few fixed offsets on each side
            // to break up patterns crafted to keep producing bad pivots.
            if l_size >= crate::INSERTION_SORT_THRESHOLD {
                let l4 = (l_size / 4) as isize;
                swap_iter(&begin, &advance_copy(&begin, l4));
                swap_iter(&advance_copy(&pivot_pos, -1), &advance_copy(&pivot_pos, -l4));

                if l_size > crate::NINTHER_THRESHOLD {
                    swap_iter(&advance_copy(&begin, 1), &advance_copy(&begin, l4 + 1));
                    swap_iter(&advance_copy(&begin, 2), &advance_copy(&begin, l4 + 2));
                    swap_iter(
                        &advance_copy(&pivot_pos, -2),
                        &advance_copy(&pivot_pos, -(l4 + 1)),
                    );
                    swap_iter(
                        &advance_copy(&pivot_pos, -3),
                        &advance_copy(&pivot_pos, -(l4 + 2)),
                    );
                }
            }

            if r_size >= crate::INSERTION_SORT_THRESHOLD {
                let r4 = (r_size / 4) as isize;
                swap_iter(
                    &advance_copy(&pivot_pos, 1),
                    &advance_copy(&pivot_pos, 1 + r4),
                );
                swap_iter(&advance_copy(end, -1), &advance_copy(end, -r4));

                if r_size > crate::NINTHER_THRESHOLD {
                    swap_iter(
                        &advance_copy(&pivot_pos, 2),
                        &advance_copy(&pivot_pos, 2 + r4),
                    );
                    swap_iter(
                        &advance_copy(&pivot_pos, 3),
                        &advance_copy(&pivot_pos, 3 + r4),
                    );
                    swap_iter(&advance_copy(end, -2), &advance_copy(end, -(1 + r4)));
                    swap_iter(&advance_copy(end, -3), &advance_copy(end, -(2 + r4)));
                }
            }
        } else if already_partitioned
            && partial_insertion_sort(&begin, &pivot_pos, is_less)
            && partial_insertion_sort(&advance_copy(&pivot_pos, 1), end, is_less)
        {
            // Balanced partition that did not move a single element, and
            // both halves turned out to be nearly sorted. Done.
            return;
        }

        // Recurse on the (bounded-size) left partition, loop on the right.
        pdqsort_loop(begin.clone(), &pivot_pos, is_less, bad_allowed, left_most);
        begin = advance_copy(&pivot_pos, 1);
        left_most = false;
    }
}

/// When dropped, copies from `src` into `dest`.
///
/// Closes the hole an insertion shift leaves open. Running the final write
/// from Drop also restores the shifted-out element if the comparator
/// panics mid-shift, keeping the range a permutation of its input.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: src points at the shifted-out element held alive in its
        // ManuallyDrop local, dest at the current hole; both stay valid for
        // the whole shift.
        unsafe { ptr::copy_nonoverlapping(self.src, self.dest, 1) };
    }
}

/// Classic insertion sort of `[begin, end)`.
fn insertion_sort<C, F>(begin: &C, end: &C, is_less: &mut F)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    if begin.equals(end) {
        return;
    }

    let mut cur = advance_copy(begin, 1);
    while !cur.equals(end) {
        let mut sift = cur.clone();
        let mut sift_1 = advance_copy(&cur, -1);

        // SAFETY: all cursors below stay within [begin, end), which holds
        // live elements per the range contract.
        unsafe {
            if is_less(&*sift.ptr(), &*sift_1.ptr()) {
                let tmp = ManuallyDrop::new(ptr::read(sift.ptr()));
                let mut hole = InsertionHole {
                    src: &*tmp,
                    dest: sift.ptr(),
                };

                loop {
                    ptr::copy_nonoverlapping(sift_1.ptr(), sift.ptr(), 1);
                    sift.retreat_one();
                    hole.dest = sift.ptr();
                    if sift.equals(begin) {
                        break;
                    }
                    sift_1.retreat_one();
                    if !is_less(&*tmp, &*sift_1.ptr()) {
                        break;
                    }
                }
                // hole drops here, writing tmp into its final position.
            }
        }
        cur.advance_one();
    }
}

/// Insertion sort that gives up once it has moved more than
/// `PARTIAL_INSERTION_SORT_LIMIT` elements, returning false. Returns true
/// if the range ended up sorted.
fn partial_insertion_sort<C, F>(begin: &C, end: &C, is_less: &mut F) -> bool
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    if begin.equals(end) {
        return true;
    }

    let mut limit = 0;
    let mut cur = advance_copy(begin, 1);
    while !cur.equals(end) {
        if limit > crate::PARTIAL_INSERTION_SORT_LIMIT {
            return false;
        }

        let mut sift = cur.clone();
        let mut sift_1 = advance_copy(&cur, -1);

        // SAFETY: as in insertion_sort, everything stays in [begin, end).
        unsafe {
            if is_less(&*sift.ptr(), &*sift_1.ptr()) {
                let tmp = ManuallyDrop::new(ptr::read(sift.ptr()));
                let mut hole = InsertionHole {
                    src: &*tmp,
                    dest: sift.ptr(),
                };

                loop {
                    ptr::copy_nonoverlapping(sift_1.ptr(), sift.ptr(), 1);
                    sift.retreat_one();
                    hole.dest = sift.ptr();
                    if sift.equals(begin) {
                        break;
                    }
                    sift_1.retreat_one();
                    if !is_less(&*tmp, &*sift_1.ptr()) {
                        break;
                    }
                }

                limit += distance(&sift, &cur);
            }
        }
        cur.advance_one();
    }

    true
}

/// Partitions `[begin, end)` around the pivot stored at `begin`, placing
/// elements equal to the pivot in the right partition. Returns the pivot's
/// final position and whether the range was already partitioned (no
/// element had to move).
///
/// Requires the pivot to be a median of at least three elements of the
/// range: the scans rely on `*(end - 1) >= pivot` as a sentinel.
fn partition_right<C, F>(begin: &C, end: &C, is_less: &mut F) -> (C, bool)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    // SAFETY: scans are bounded by the sentinels discussed below and by the
    // index guards, so every dereferenced cursor is inside [begin, end).
    unsafe {
        // The pivot is kept in a local while its slot at begin is treated
        // as a hole; it is written back into its final slot at the bottom.
        // ptr::read leaves the source bytes untouched, so even a panicking
        // comparator leaves the range a valid permutation.
        let pivot = ManuallyDrop::new(ptr::read(begin.ptr()));
        let mut first = begin.clone();
        let mut last = end.clone();

        // Find the first element >= pivot. Unguarded: *(end - 1) >= pivot
        // stops the scan at the latest.
        loop {
            first.advance_one();
            if !is_less(&*first.ptr(), &*pivot) {
                break;
            }
        }

        // Find the last element < pivot. If the forward scan stopped on its
        // first step there may be no such element, so guard on the indices;
        // otherwise the element before first is a sentinel.
        if advance_copy(&first, -1).equals(begin) {
            while first.index() < last.index() {
                last.retreat_one();
                if is_less(&*last.ptr(), &*pivot) {
                    break;
                }
            }
        } else {
            loop {
                last.retreat_one();
                if is_less(&*last.ptr(), &*pivot) {
                    break;
                }
            }
        }

        let already_partitioned = first.index() >= last.index();

        // Exchange wrong-sided pairs closing in from both ends; the swapped
        // elements become the new sentinels for the inner scans.
        while first.index() < last.index() {
            swap_iter(&first, &last);
            loop {
                first.advance_one();
                if !is_less(&*first.ptr(), &*pivot) {
                    break;
                }
            }
            loop {
                last.retreat_one();
                if is_less(&*last.ptr(), &*pivot) {
                    break;
                }
            }
        }

        // Move the hole to the pivot's final slot and fill it.
        let pivot_pos = advance_copy(&first, -1);
        ptr::copy(pivot_pos.ptr(), begin.ptr(), 1);
        ptr::copy_nonoverlapping(&*pivot as *const C::Item, pivot_pos.ptr(), 1);

        (pivot_pos, already_partitioned)
    }
}

/// Partitions `[begin, end)` around the pivot stored at `begin`, placing
/// elements equal to the pivot in the left partition. Returns the pivot's
/// final position.
///
/// Used when the pivot equals a previous partition boundary; afterwards
/// everything in `[begin, ret]` equals the pivot and needs no further
/// sorting.
fn partition_left<C, F>(begin: &C, end: &C, is_less: &mut F) -> C
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    // SAFETY: same argument as partition_right, with the pivot slot at
    // begin acting as the backward sentinel.
    unsafe {
        let pivot = ManuallyDrop::new(ptr::read(begin.ptr()));
        let mut first = begin.clone();
        let mut last = end.clone();

        // Find the last element <= pivot. Unguarded: the pivot slot itself
        // stops the scan.
        loop {
            last.retreat_one();
            if !is_less(&*pivot, &*last.ptr()) {
                break;
            }
        }

        // Find the first element > pivot, guarded when the backward scan
        // already consumed the whole range.
        if advance_copy(&last, 1).equals(end) {
            while first.index() < last.index() {
                first.advance_one();
                if is_less(&*pivot, &*first.ptr()) {
                    break;
                }
            }
        } else {
            loop {
                first.advance_one();
                if is_less(&*pivot, &*first.ptr()) {
                    break;
                }
            }
        }

        while first.index() < last.index() {
            swap_iter(&first, &last);
            loop {
                last.retreat_one();
                if !is_less(&*pivot, &*last.ptr()) {
                    break;
                }
            }
            loop {
                first.advance_one();
                if is_less(&*pivot, &*first.ptr()) {
                    break;
                }
            }
        }

        let pivot_pos = last;
        ptr::copy(pivot_pos.ptr(), begin.ptr(), 1);
        ptr::copy_nonoverlapping(&*pivot as *const C::Item, pivot_pos.ptr(), 1);

        pivot_pos
    }
}

/// Sorts the two addressed elements.
#[inline]
fn sort2<C, F>(a: &C, b: &C, is_less: &mut F)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    // SAFETY: both cursors address live elements of the range.
    unsafe {
        if is_less(&*b.ptr(), &*a.ptr()) {
            swap_iter(a, b);
        }
    }
}

/// Sorts the three addressed elements; the median ends up at `b`.
fn sort3<C, F>(a: &C, b: &C, c: &C, is_less: &mut F)
where
    C: RandomAccess,
    F: Cmp<C::Item>,
{
    sort2(a, b, is_less);
    sort2(b, c, is_less);
    sort2(a, b, is_less);
}
