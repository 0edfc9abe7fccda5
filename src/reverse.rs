//! In-place range reversal.

use crate::cursor::Bidirectional;
use crate::swap::swap_iter;

/// Reverses the order of the elements in `[begin, end)`.
///
/// Walks the two ends toward each other, swapping as it goes; needs only a
/// bidirectional cursor and makes `distance / 2` swaps.
pub fn reverse<C: Bidirectional>(begin: &C, end: &C) {
    let mut first = begin.clone();
    let mut last = end.clone();
    while !first.equals(&last) {
        last.retreat_one();
        if first.equals(&last) {
            break;
        }
        swap_iter(&first, &last);
        first.advance_one();
    }
}
