//! Ownership helpers for libclang string handles and C argument arrays.
//!
//! Every string-returning libclang query hands back a `CXString` that must be
//! released with `clang_disposeString` after its contents are copied out.
//! These helpers pair the get/dispose calls so a native string can never leak
//! or be released twice.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use clang_sys::{CXString, clang_disposeString, clang_getCString};

/// Copies a `CXString` into an owned `String`, releasing the native handle.
///
/// Returns `None` when the native library reports "no value" (a null C
/// string), which libclang distinguishes from an empty string for queries
/// such as raw comment text.
pub(crate) fn to_string_opt(raw: CXString) -> Option<String> {
    // SAFETY: `raw` was produced by a libclang string query and has not been
    // disposed; `clang_getCString` is valid until the dispose call below.
    unsafe {
        let ptr = clang_getCString(raw);
        let copied = if ptr.is_null() {
            None
        } else {
            Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
        };
        clang_disposeString(raw);
        copied
    }
}

/// Copies a `CXString` into an owned `String`, mapping "no value" to `""`.
pub(crate) fn to_string(raw: CXString) -> String {
    to_string_opt(raw).unwrap_or_default()
}

/// An argument vector marshalled for a C ABI call.
///
/// Owns the `CString` storage and a parallel array of pointers into it, so
/// the pointer array stays valid for exactly as long as this value lives.
pub(crate) struct CStringArray {
    storage: Vec<CString>,
    pointers: Vec<*const c_char>,
}

impl CStringArray {
    /// Marshals the given strings. Interior NUL bytes are rejected by
    /// replacing the offending string with an empty one; libclang treats
    /// empty arguments as no-ops.
    pub(crate) fn new<S: AsRef<str>>(strings: &[S]) -> Self {
        let storage: Vec<CString> = strings
            .iter()
            .map(|s| CString::new(s.as_ref()).unwrap_or_default())
            .collect();
        let pointers = storage.iter().map(|s| s.as_ptr()).collect();
        Self { storage, pointers }
    }

    /// Pointer to the first argument, suitable for a `const char *const *`
    /// parameter. Null when the array is empty.
    pub(crate) fn as_ptr(&self) -> *const *const c_char {
        if self.storage.is_empty() {
            std::ptr::null()
        } else {
            self.pointers.as_ptr()
        }
    }

    /// Number of arguments as the `c_int` libclang expects.
    pub(crate) fn len(&self) -> i32 {
        i32::try_from(self.storage.len()).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cstring_array_preserves_order_and_count() {
        let args = CStringArray::new(&["-x", "c", "-std=c11"]);
        assert_eq!(args.len(), 3);
        let first = unsafe { CStr::from_ptr(*args.as_ptr()) };
        assert_eq!(first.to_bytes(), b"-x");
    }

    #[test]
    fn empty_array_yields_null_pointer() {
        let args = CStringArray::new::<&str>(&[]);
        assert_eq!(args.len(), 0);
        assert!(args.as_ptr().is_null());
    }

    #[test]
    fn interior_nul_is_replaced_with_empty_argument() {
        let args = CStringArray::new(&["ok", "bad\0arg"]);
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn null_data_strings_map_to_none_and_are_disposed() {
        // Dispose is a no-op for a handle with no allocation flags, so the
        // null path can be driven directly once the library is loaded.
        if crate::Index::new(false, false).is_err() {
            return;
        }
        let raw = CXString {
            data: std::ptr::null(),
            private_flags: 0,
        };
        assert_eq!(to_string_opt(raw), None);
    }
}
