#![allow(dead_code)]

//! Operation counting for the `tracking` feature.
//!
//! When enabled, every comparison made through the crate's entry points and
//! every element swap performed by [`swap_iter`](crate::swap_iter) is
//! counted in a global register. Useful for verifying algorithmic behavior
//! (e.g. that sorting stays within O(n log n) comparisons) without touching
//! the algorithms themselves. Without the feature all hooks compile to
//! no-ops.

/// Totals recorded since the last [`take_counts`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub comparisons: u64,
    pub swaps: u64,
}

#[cfg(feature = "tracking")]
mod tracking_impl {
    use std::sync::Mutex;

    use super::Counts;

    lazy_static::lazy_static! {
        static ref REGISTER: Mutex<Counts> = Mutex::new(Counts::default());
    }

    #[inline]
    pub fn register_cmp() {
        REGISTER.lock().unwrap().comparisons += 1;
    }

    #[inline]
    pub fn register_swap() {
        REGISTER.lock().unwrap().swaps += 1;
    }

    /// Returns the recorded totals and resets the register.
    pub fn take_counts() -> Counts {
        core::mem::take(&mut *REGISTER.lock().unwrap())
    }
}

/// Dummy implementation.
#[cfg(not(feature = "tracking"))]
mod tracking_impl {
    use super::Counts;

    #[inline]
    pub fn register_cmp() {}
    #[inline]
    pub fn register_swap() {}
    pub fn take_counts() -> Counts {
        Counts::default()
    }
}

pub use tracking_impl::{register_cmp, register_swap, take_counts};
