//! Scoped release for per-call native resources.
//!
//! Several libclang queries return arrays or handles that the caller must
//! free with a matching dispose call: token arrays, overridden-cursor
//! arrays, platform-availability records, diagnostic sets, and evaluation
//! results. [`Scoped`] ties that dispose call to scope exit so the release
//! runs exactly once on every path out, including panics raised while the
//! borrowed contents are being converted.

use std::ops::Deref;

/// A value paired with the release action for its backing native resource.
///
/// The release closure runs exactly once, when the guard is dropped.
pub(crate) struct Scoped<T, F: FnMut(&mut T)> {
    value: T,
    release: F,
}

impl<T, F: FnMut(&mut T)> Scoped<T, F> {
    /// Wraps `value`, scheduling `release` to run at scope exit.
    pub(crate) fn new(value: T, release: F) -> Self {
        Self { value, release }
    }
}

impl<T, F: FnMut(&mut T)> Deref for Scoped<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, F: FnMut(&mut T)> Drop for Scoped<T, F> {
    fn drop(&mut self) {
        (self.release)(&mut self.value);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;

    #[test]
    fn release_runs_exactly_once() {
        let releases = Cell::new(0_u32);
        {
            let guard = Scoped::new(7_i32, |_| releases.set(releases.get() + 1));
            assert_eq!(*guard, 7);
            assert_eq!(releases.get(), 0);
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn release_runs_on_panic_path() {
        let releases = Cell::new(0_u32);
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _guard = Scoped::new((), |()| releases.set(releases.get() + 1));
            panic!("conversion failed mid-flight");
        }));
        assert!(outcome.is_err());
        assert_eq!(releases.get(), 1);
    }
}
