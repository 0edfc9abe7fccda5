//! The cursor capability hierarchy.
//!
//! A cursor is an opaque, cloneable position into a sequence it does not own.
//! Each trait in this module strictly extends the previous one, forming five
//! capability tiers: [`Readable`], [`Addressable`], [`Forward`],
//! [`Bidirectional`] and [`RandomAccess`]. Algorithms state the weakest tier
//! they can work with as a trait bound, so capability selection happens at
//! compile time rather than through runtime probing.
//!
//! The base traits additionally carry overridable plumbing methods
//! ([`Cursor::advance_by`], [`Cursor::distance_to`],
//! [`Bidirectional::retreat_by`]) with O(n) stepping defaults. A
//! random-access cursor overrides them with O(1) index arithmetic, the same
//! way std's `Iterator` implementations override `nth` and `size_hint`.
//! Algorithms written against the defaults transparently pick up the fast
//! path.

/// Base contract: a copyable position that can test for more elements, step
/// forward one position, and compare itself against another position.
///
/// Equality is positional, not structural: two cursors are equal iff they
/// denote the same logical position, including the one-past-the-end
/// position. Comparing cursors that were derived from different backing
/// sequences is a contract violation; implementations are free to
/// `debug_assert` against it.
pub trait Cursor: Clone {
    /// Returns true iff `self` and `other` denote the same position.
    fn equals(&self, other: &Self) -> bool;

    /// Returns true iff an element exists after the current position.
    fn has_next(&self) -> bool;

    /// Steps forward one position. Stepping past the end position is a
    /// contract violation.
    fn advance_one(&mut self);

    /// Steps forward `n` positions.
    ///
    /// The default walks one step at a time; random-access cursors override
    /// this with O(1) arithmetic.
    #[inline]
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance_one();
        }
    }

    /// Number of positions between `self` and `end`.
    ///
    /// The default clones `self` and counts steps until it reaches `end`;
    /// random-access cursors override this with index subtraction. Calling
    /// this with an `end` not reachable from `self` does not terminate.
    #[inline]
    fn distance_to(&self, end: &Self) -> usize {
        let mut cur = self.clone();
        let mut n = 0;
        while !cur.equals(end) {
            cur.advance_one();
            n += 1;
        }
        n
    }
}

/// A cursor that exposes the element at its current position, read-only.
pub trait Readable: Cursor {
    type Item;

    /// A reference to the current element. Calling this on the end position
    /// is a contract violation.
    fn value(&self) -> &Self::Item;
}

/// A cursor that exposes the address of its current element, enabling
/// in-place mutation.
///
/// The returned pointer aliases the backing store. It is valid for reads and
/// writes for as long as the backing store is not structurally mutated
/// (grown, reallocated, rebalanced) — the documented stability hazard shared
/// by every cursor family. Dereferencing is `unsafe` and carries exactly
/// that proof obligation, plus the usual no-concurrent-`&mut` aliasing rule.
pub trait Addressable: Readable {
    /// The address of the current element. Calling this on the end position
    /// is a contract violation.
    fn ptr(&self) -> *mut Self::Item;
}

/// Readable + Addressable: the minimal contract for one-pass mutating
/// algorithms. Blanket-implemented; this tier exists as a named bound.
pub trait Forward: Addressable {}

impl<C: Addressable> Forward for C {}

/// A forward cursor that can also step backward.
pub trait Bidirectional: Forward {
    /// Returns true iff an element exists before the current position.
    fn has_prev(&self) -> bool;

    /// Steps backward one position. Stepping before the first position is a
    /// contract violation.
    fn retreat_one(&mut self);

    /// Steps backward `n` positions. Override point, like
    /// [`Cursor::advance_by`].
    #[inline]
    fn retreat_by(&mut self, n: usize) {
        for _ in 0..n {
            self.retreat_one();
        }
    }
}

/// A bidirectional cursor with O(1) positioning: indexed element access,
/// constant-time shifting and a physical offset from the sequence start.
///
/// Implementors must uphold: `shift(n)` is observably equivalent to `n`
/// single steps (backward for negative `n`), and `index()` equals the number
/// of positions between the sequence start and the cursor. Implementors
/// should also override `advance_by`, `retreat_by` and `distance_to` in
/// terms of these, so tier-agnostic algorithms get the O(1) path.
pub trait RandomAccess: Bidirectional {
    /// The address of the element at `index` positions from the sequence
    /// start, or `None` if no such element exists. The same validity rules
    /// as [`Addressable::ptr`] apply.
    fn at(&self, index: usize) -> Option<*mut Self::Item>;

    /// Moves the cursor by `offset` positions, negative being backward.
    /// Shifting outside `[start, end]` is a contract violation.
    fn shift(&mut self, offset: isize);

    /// The offset of the current position from the sequence start.
    fn index(&self) -> usize;
}
