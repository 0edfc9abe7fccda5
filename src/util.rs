/// Trait alias for comparison functions.
pub trait Cmp<T>: FnMut(&T, &T) -> bool {}
impl<T, F: FnMut(&T, &T) -> bool> Cmp<T> for F {}

/// Helper function for the compiler to infer a closure as Cmp<T>.
#[inline]
pub fn cmp_from_closure<T, F>(f: F) -> F
where
    F: FnMut(&T, &T) -> bool,
{
    f
}

/// floor(log2(n)). Must not be called with n == 0.
#[inline]
pub fn log2(n: usize) -> u32 {
    debug_assert!(n > 0);
    usize::BITS - 1 - n.leading_zeros()
}

#[inline]
#[cold]
pub fn abort() -> ! {
    std::process::abort();
}

pub trait UnwrapAbort {
    type Inner;
    fn unwrap_abort(self) -> Self::Inner;
}

impl<T> UnwrapAbort for Option<T> {
    type Inner = T;

    #[inline]
    fn unwrap_abort(self) -> Self::Inner {
        if let Some(inner) = self {
            inner
        } else {
            abort()
        }
    }
}
