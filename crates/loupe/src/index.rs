//! The index: the root session object every translation unit hangs off.

use std::ops::BitOr;
use std::sync::OnceLock;

use clang_sys::CXIndex;

use crate::error::LibraryError;

/// Behaviour applied to every translation unit within an [`Index`].
///
/// Combine options with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalOptions(pub(crate) i32);

impl GlobalOptions {
    /// No special behaviour.
    pub const NONE: Self = Self(0);
    /// Run indexing work at background thread priority.
    pub const THREAD_BACKGROUND_PRIORITY_FOR_INDEXING: Self = Self(0x1);
    /// Run editing work, such as reparsing, at background thread priority.
    pub const THREAD_BACKGROUND_PRIORITY_FOR_EDITING: Self = Self(0x2);

    /// All work at background thread priority.
    #[must_use]
    pub const fn background_priority_for_all() -> Self {
        Self(0x3)
    }
}

impl BitOr for GlobalOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Loads the shared library exactly once per process.
///
/// The load result is sticky: a failure is reported to every caller rather
/// than retried, matching how the loader caches its state.
fn ensure_loaded() -> Result<(), LibraryError> {
    static LOADED: OnceLock<Result<(), String>> = OnceLock::new();
    LOADED
        .get_or_init(|| {
            let outcome = clang_sys::load();
            if outcome.is_ok() {
                tracing::debug!("loaded libclang");
            }
            outcome
        })
        .clone()
        .map_err(|message| LibraryError { message })
}

/// An active connection to libclang, under which translation units are
/// parsed and kept alive.
///
/// Dropping the index releases every native resource it owns; the borrow
/// checker keeps translation units (and everything borrowed from them) from
/// outliving it.
pub struct Index {
    raw: CXIndex,
}

impl Index {
    /// Opens a new index.
    ///
    /// `exclude_declarations_from_pch` suppresses cursors for declarations
    /// that came in through a precompiled header. `display_diagnostics`
    /// makes the native library print diagnostics to stderr as they are
    /// produced, in addition to exposing them programmatically.
    ///
    /// # Errors
    ///
    /// Returns a [`LibraryError`] when the shared library cannot be located
    /// or loaded at runtime.
    pub fn new(
        exclude_declarations_from_pch: bool,
        display_diagnostics: bool,
    ) -> Result<Self, LibraryError> {
        ensure_loaded()?;
        let raw = unsafe {
            clang_sys::clang_createIndex(
                i32::from(exclude_declarations_from_pch),
                i32::from(display_diagnostics),
            )
        };
        Ok(Self { raw })
    }

    pub(crate) fn as_raw(&self) -> CXIndex {
        self.raw
    }

    /// The global options currently applied to this index.
    #[must_use]
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions(unsafe { clang_sys::clang_CXIndex_getGlobalOptions(self.raw) })
    }

    /// Applies global options to this index.
    pub fn set_global_options(&mut self, options: GlobalOptions) {
        unsafe { clang_sys::clang_CXIndex_setGlobalOptions(self.raw, options.0) };
    }
}

impl Drop for Index {
    fn drop(&mut self) {
        unsafe { clang_sys::clang_disposeIndex(self.raw) };
    }
}

impl std::fmt::Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_options_combine_with_bitor() {
        let options = GlobalOptions::THREAD_BACKGROUND_PRIORITY_FOR_INDEXING
            | GlobalOptions::THREAD_BACKGROUND_PRIORITY_FOR_EDITING;
        assert_eq!(options, GlobalOptions::background_priority_for_all());
        assert_eq!(GlobalOptions::NONE.0, 0);
    }

    #[test]
    fn global_options_mirror_the_native_flags() {
        assert_eq!(GlobalOptions::NONE, GlobalOptions(clang_sys::CXGlobalOpt_None));
        assert_eq!(
            GlobalOptions::THREAD_BACKGROUND_PRIORITY_FOR_INDEXING,
            GlobalOptions(clang_sys::CXGlobalOpt_ThreadBackgroundPriorityForIndexing),
        );
        assert_eq!(
            GlobalOptions::background_priority_for_all(),
            GlobalOptions(clang_sys::CXGlobalOpt_ThreadBackgroundPriorityForAll),
        );
    }
}
