//! In-place range rotation.

use crate::cursor::Forward;
use crate::swap::swap_iter;

/// Rotates `[begin, end)` left so the element at `middle` becomes the first
/// element of the range. Returns a cursor to the new position of the element
/// that was at `begin`.
///
/// Cycle-following with forward passes only, so a plain forward cursor
/// suffices; each pass swaps the unplaced tail into position and the next
/// pass rotates what it displaced.
pub fn rotate<C: Forward>(begin: &C, middle: &C, end: &C) -> C {
    if begin.equals(middle) {
        return end.clone();
    }
    if middle.equals(end) {
        return begin.clone();
    }

    let mut begin = begin.clone();
    let mut middle = middle.clone();
    let new_begin = rotate_pass(&mut begin, &mut middle, end);
    while !begin.equals(&middle) && !middle.equals(end) {
        rotate_pass(&mut begin, &mut middle, end);
    }
    new_begin
}

/// One pass: swaps `[middle, end)` into place at `begin`, then repositions
/// `begin`/`middle` to the displaced remainder. The returned write position
/// is, on the first pass, where the old first element ended up.
fn rotate_pass<C: Forward>(begin: &mut C, middle: &mut C, end: &C) -> C {
    let mut write = begin.clone();
    let mut next_read = begin.clone();
    let mut read = middle.clone();
    while !read.equals(end) {
        if write.equals(&next_read) {
            next_read = read.clone();
        }
        swap_iter(&write, &read);
        write.advance_one();
        read.advance_one();
    }
    *begin = write.clone();
    *middle = next_read;
    write
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, RandomAccess};
    use crate::slice::SliceCursor;
    use crate::traversal::advance_copy;

    #[test]
    fn rotate_moves_middle_to_front() {
        let mut v = [1, 2, 3, 4, 5, 6, 7];
        let new_first_idx;
        {
            let (begin, end) = SliceCursor::range(&mut v);
            let middle = advance_copy(&begin, 3);
            let new_first = rotate(&begin, &middle, &end);
            new_first_idx = new_first.index();
        }
        assert_eq!(v, [4, 5, 6, 7, 1, 2, 3]);
        assert_eq!(new_first_idx, 4);
        assert_eq!(v[new_first_idx], 1);
    }

    #[test]
    fn rotate_degenerate_middles() {
        let mut v = [1, 2, 3];
        {
            let (begin, end) = SliceCursor::range(&mut v);
            assert!(rotate(&begin, &begin.clone(), &end).equals(&end));
            assert!(rotate(&begin, &end.clone(), &end).equals(&begin));
        }
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn rotate_matches_rotate_left_for_every_split() {
        for len in 0..12usize {
            for k in 0..=len {
                let mut v: Vec<usize> = (0..len).collect();
                let mut expected = v.clone();
                expected.rotate_left(k);
                {
                    let (begin, end) = SliceCursor::range(&mut v);
                    let middle = advance_copy(&begin, k as isize);
                    rotate(&begin, &middle, &end);
                }
                assert_eq!(v, expected, "len {len}, split {k}");
            }
        }
    }
}
