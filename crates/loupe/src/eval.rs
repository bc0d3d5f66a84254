//! Compile-time evaluation of expression cursors.

use std::ffi::CStr;

use clang_sys::CXEvalResult;

use crate::guard::Scoped;

/// The outcome of evaluating an expression cursor.
///
/// The native evaluator hands back a transient result object; this enum
/// copies the value out so nothing here borrows evaluator state.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalResult {
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// An Objective-C string literal, e.g. `@"..."`.
    ObjCStrLiteral(String),
    /// A C string literal.
    StrLiteral(String),
    /// A CoreFoundation string literal, e.g. `CFSTR("...")`.
    CfStrLiteral(String),
    /// A value of some other evaluable kind.
    Other,
    /// The expression could not be evaluated.
    Unexposed,
}

impl EvalResult {
    /// Copies the value out of a native result, then disposes it.
    pub(crate) fn from_raw(raw: CXEvalResult) -> Self {
        let result = Scoped::new(raw, |result| unsafe {
            clang_sys::clang_EvalResult_dispose(*result);
        });
        let read_str = |raw: CXEvalResult| {
            let ptr = unsafe { clang_sys::clang_EvalResult_getAsStr(raw) };
            if ptr.is_null() {
                String::new()
            } else {
                unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
            }
        };
        match unsafe { clang_sys::clang_EvalResult_getKind(*result) } {
            clang_sys::CXEval_Int => {
                Self::Int(unsafe { clang_sys::clang_EvalResult_getAsLongLong(*result) })
            }
            clang_sys::CXEval_Float => {
                Self::Float(unsafe { clang_sys::clang_EvalResult_getAsDouble(*result) })
            }
            clang_sys::CXEval_ObjCStrLiteral => Self::ObjCStrLiteral(read_str(*result)),
            clang_sys::CXEval_StrLiteral => Self::StrLiteral(read_str(*result)),
            clang_sys::CXEval_CFStr => Self::CfStrLiteral(read_str(*result)),
            clang_sys::CXEval_Other => Self::Other,
            clang_sys::CXEval_UnExposed => Self::Unexposed,
            other => panic!("unsupported CXEvalResultKind: {other}"),
        }
    }
}
