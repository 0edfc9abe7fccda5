//! Extremum selection over a readable cursor range.

use crate::cursor::Readable;
use crate::util::Cmp;

/// Returns a cursor to the smallest element of `[begin, end)` under the
/// natural order, or `None` for an empty range. The first of several
/// equal minima wins.
pub fn min_element<C>(begin: &C, end: &C) -> Option<C>
where
    C: Readable,
    C::Item: Ord,
{
    min_element_by(begin, end, |a, b| a.lt(b))
}

/// See [`min_element`], ordered by `less`.
pub fn min_element_by<C, F>(begin: &C, end: &C, mut less: F) -> Option<C>
where
    C: Readable,
    F: Cmp<C::Item>,
{
    if begin.equals(end) {
        return None;
    }

    let mut smallest = begin.clone();
    let mut it = begin.clone();
    it.advance_one();
    while !it.equals(end) {
        if less(it.value(), smallest.value()) {
            smallest = it.clone();
        }
        it.advance_one();
    }

    Some(smallest)
}

/// Returns a cursor to the largest element of `[begin, end)` under the
/// natural order, or `None` for an empty range. The first of several
/// equal maxima wins.
pub fn max_element<C>(begin: &C, end: &C) -> Option<C>
where
    C: Readable,
    C::Item: Ord,
{
    max_element_by(begin, end, |a, b| a.lt(b))
}

/// See [`max_element`], ordered by `less`.
pub fn max_element_by<C, F>(begin: &C, end: &C, mut less: F) -> Option<C>
where
    C: Readable,
    F: Cmp<C::Item>,
{
    if begin.equals(end) {
        return None;
    }

    let mut largest = begin.clone();
    let mut it = begin.clone();
    it.advance_one();
    while !it.equals(end) {
        if less(largest.value(), it.value()) {
            largest = it.clone();
        }
        it.advance_one();
    }

    Some(largest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::RandomAccess;
    use crate::slice::SliceCursor;

    #[test]
    fn extrema_of_mixed_range() {
        let mut v = [3, -1, 4, -1, 5];
        let (begin, end) = SliceCursor::range(&mut v);
        let min_idx = min_element(&begin, &end).map(|c| c.index());
        let max_idx = max_element(&begin, &end).map(|c| c.index());
        // First of the two -1s.
        assert_eq!(min_idx, Some(1));
        assert_eq!(max_idx, Some(4));
    }

    #[test]
    fn empty_range_has_no_extrema() {
        let mut v: [i32; 0] = [];
        let (begin, end) = SliceCursor::range(&mut v);
        assert!(min_element(&begin, &end).is_none());
        assert!(max_element(&begin, &end).is_none());
    }
}
