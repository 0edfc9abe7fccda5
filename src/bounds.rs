//! Binary search over an ordered cursor range.
//!
//! Generalized to any readable cursor through `distance` + `advance_by`:
//! the probe count is O(log n) regardless of tier, but positioning each
//! probe is O(1) only for cursors that override the stepping defaults, so
//! total work is O(n) for forward-only cursors and O(log n) for
//! random-access ones.

use crate::cursor::Readable;
use crate::traversal::distance;
use crate::util::Cmp;

/// Returns a cursor to the first element of sorted `[begin, end)` that is
/// not less than `value`, or `end` if every element is smaller.
pub fn lower_bound<C>(begin: &C, end: &C, value: &C::Item) -> C
where
    C: Readable,
    C::Item: Ord,
{
    lower_bound_by(begin, end, value, |a, b| a.lt(b))
}

/// See [`lower_bound`], ordered by `less`.
pub fn lower_bound_by<C, F>(begin: &C, end: &C, value: &C::Item, mut less: F) -> C
where
    C: Readable,
    F: Cmp<C::Item>,
{
    let mut begin = begin.clone();
    let mut count = distance(&begin, end);

    while count > 0 {
        let step = count / 2;
        let mut it = begin.clone();
        it.advance_by(step);

        if less(it.value(), value) {
            it.advance_one();
            begin = it;
            count -= step + 1;
        } else {
            count = step;
        }
    }

    begin
}

/// Returns a cursor to the first element of sorted `[begin, end)` that is
/// greater than `value`, or `end` if no element is greater.
pub fn upper_bound<C>(begin: &C, end: &C, value: &C::Item) -> C
where
    C: Readable,
    C::Item: Ord,
{
    upper_bound_by(begin, end, value, |a, b| a.lt(b))
}

/// See [`upper_bound`], ordered by `less`.
pub fn upper_bound_by<C, F>(begin: &C, end: &C, value: &C::Item, mut less: F) -> C
where
    C: Readable,
    F: Cmp<C::Item>,
{
    let mut begin = begin.clone();
    let mut count = distance(&begin, end);

    while count > 0 {
        let step = count / 2;
        let mut it = begin.clone();
        it.advance_by(step);

        if !less(value, it.value()) {
            it.advance_one();
            begin = it;
            count -= step + 1;
        } else {
            count = step;
        }
    }

    begin
}

/// Returns true iff sorted `[begin, end)` contains an element equal to
/// `value` under the natural order.
pub fn binary_search<C>(begin: &C, end: &C, value: &C::Item) -> bool
where
    C: Readable,
    C::Item: Ord,
{
    binary_search_by(begin, end, value, |a: &C::Item, b: &C::Item| a.lt(b))
}

/// See [`binary_search`], ordered by `less`. Equality is derived from the
/// strict weak order: neither element less than the other.
pub fn binary_search_by<C, F>(begin: &C, end: &C, value: &C::Item, mut less: F) -> bool
where
    C: Readable,
    F: Cmp<C::Item>,
{
    let first = lower_bound_by(begin, end, value, &mut less);
    !first.equals(end) && !less(value, first.value())
}
