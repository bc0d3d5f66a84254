//! Error types for libclang operations.
//!
//! The recoverable error spaces libclang exposes are small closed sets of
//! integer codes; each gets its own enum here with a total mapping from the
//! native code. Absence (a null cursor, an invalid type) is modelled as
//! `Option` at the call sites, never as one of these errors.

use thiserror::Error;

/// The shared library could not be loaded at runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to load libclang: {message}")]
pub struct LibraryError {
    /// Loader description of the failure.
    pub message: String,
}

/// Errors reported by parse, reparse, and AST-load entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClangError {
    /// libclang had an internal failure while processing the request.
    #[error("libclang failed to process the request")]
    Failure,

    /// libclang crashed while processing the request.
    #[error("libclang crashed while processing the request")]
    Crashed,

    /// The arguments supplied to the invocation were invalid.
    #[error("invalid arguments supplied to libclang")]
    InvalidArguments,

    /// libclang failed to read an AST from the provided input.
    #[error("libclang failed to read the AST")]
    AstRead,
}

impl ClangError {
    /// Maps a native `CXErrorCode` to an error, `None` for success.
    ///
    /// # Panics
    ///
    /// Panics on a code outside the documented error space, which indicates
    /// a libclang version this binding does not target.
    pub(crate) fn from_raw(code: clang_sys::CXErrorCode) -> Option<Self> {
        match code {
            clang_sys::CXError_Success => None,
            clang_sys::CXError_Failure => Some(Self::Failure),
            clang_sys::CXError_Crashed => Some(Self::Crashed),
            clang_sys::CXError_InvalidArguments => Some(Self::InvalidArguments),
            clang_sys::CXError_ASTReadError => Some(Self::AstRead),
            other => panic!("unsupported CXErrorCode: {other}"),
        }
    }
}

/// Errors reported when serializing a translation unit to disk.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SaveError {
    /// An unknown failure, typically a file-system problem.
    #[error("unknown error while saving the translation unit")]
    Unknown,

    /// The unit contains translation errors and cannot be saved.
    #[error("translation unit has errors that prevent saving")]
    TranslationErrors,

    /// The unit itself is invalid.
    #[error("translation unit is not valid for saving")]
    InvalidTranslationUnit,
}

impl SaveError {
    /// Maps a native `CXSaveError` to an error, `None` for success.
    ///
    /// # Panics
    ///
    /// Panics on a code outside the documented error space.
    pub(crate) fn from_raw(code: clang_sys::CXSaveError) -> Option<Self> {
        match code {
            clang_sys::CXSaveError_None => None,
            clang_sys::CXSaveError_Unknown => Some(Self::Unknown),
            clang_sys::CXSaveError_TranslationErrors => Some(Self::TranslationErrors),
            clang_sys::CXSaveError_InvalidTU => Some(Self::InvalidTranslationUnit),
            other => panic!("unsupported CXSaveError: {other}"),
        }
    }
}

/// Errors reported by type layout queries.
///
/// These are expected outcomes for templates, forward declarations, and the
/// like, not programming errors, so they are returned rather than panicked.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TypeLayoutError {
    /// The type declaration is invalid.
    #[error("type is invalid")]
    Invalid,

    /// The type is a dependent type.
    #[error("type is dependent")]
    Dependent,

    /// The type is declared but never defined.
    #[error("type is incomplete")]
    Incomplete,

    /// The type does not have a constant size.
    #[error("type does not have a constant size")]
    NotConstantSize,

    /// The named field was not found in the record.
    #[error("field name is not present in the record")]
    InvalidFieldName,
}

impl TypeLayoutError {
    /// Interprets a layout-query return value: negative values are error
    /// codes, non-negative values are byte counts.
    ///
    /// # Panics
    ///
    /// Panics on a negative value outside the documented error space.
    pub(crate) fn check(value: i64) -> Result<usize, Self> {
        if value >= 0 {
            return Ok(usize::try_from(value).unwrap_or(usize::MAX));
        }
        match i32::try_from(value).unwrap_or(i32::MIN) {
            clang_sys::CXTypeLayoutError_Invalid => Err(Self::Invalid),
            clang_sys::CXTypeLayoutError_Incomplete => Err(Self::Incomplete),
            clang_sys::CXTypeLayoutError_Dependent => Err(Self::Dependent),
            clang_sys::CXTypeLayoutError_NotConstantSize => Err(Self::NotConstantSize),
            clang_sys::CXTypeLayoutError_InvalidFieldName => Err(Self::InvalidFieldName),
            other => panic!("unsupported CXTypeLayoutError: {other}"),
        }
    }
}

/// Errors reported when deserializing a diagnostics file.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoadDiagError {
    /// An unknown deserialization failure.
    #[error("unknown error while loading diagnostics")]
    Unknown,

    /// The diagnostics file could not be opened.
    #[error("diagnostics file could not be opened")]
    CannotLoad,

    /// The diagnostics file is invalid or corrupt.
    #[error("diagnostics file is invalid or corrupt")]
    InvalidFile,
}

impl LoadDiagError {
    /// Maps a native `CXLoadDiag_Error` to an error, `None` for success.
    ///
    /// # Panics
    ///
    /// Panics on a code outside the documented error space.
    pub(crate) fn from_raw(code: clang_sys::CXLoadDiag_Error) -> Option<Self> {
        match code {
            clang_sys::CXLoadDiag_None => None,
            clang_sys::CXLoadDiag_Unknown => Some(Self::Unknown),
            clang_sys::CXLoadDiag_CannotLoad => Some(Self::CannotLoad),
            clang_sys::CXLoadDiag_InvalidFile => Some(Self::InvalidFile),
            other => panic!("unsupported CXLoadDiag_Error: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(clang_sys::CXError_Failure, ClangError::Failure)]
    #[case(clang_sys::CXError_Crashed, ClangError::Crashed)]
    #[case(clang_sys::CXError_InvalidArguments, ClangError::InvalidArguments)]
    #[case(clang_sys::CXError_ASTReadError, ClangError::AstRead)]
    fn clang_error_maps_each_failure_code(
        #[case] code: clang_sys::CXErrorCode,
        #[case] expected: ClangError,
    ) {
        assert_eq!(ClangError::from_raw(code), Some(expected));
    }

    #[test]
    fn clang_error_maps_success_to_none() {
        assert_eq!(ClangError::from_raw(clang_sys::CXError_Success), None);
    }

    #[rstest]
    #[case(-1, TypeLayoutError::Invalid)]
    #[case(-2, TypeLayoutError::Incomplete)]
    #[case(-3, TypeLayoutError::Dependent)]
    #[case(-4, TypeLayoutError::NotConstantSize)]
    #[case(-5, TypeLayoutError::InvalidFieldName)]
    fn layout_check_classifies_negative_codes(
        #[case] value: i64,
        #[case] expected: TypeLayoutError,
    ) {
        assert_eq!(TypeLayoutError::check(value), Err(expected));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(4, 4)]
    #[case(64, 64)]
    fn layout_check_passes_byte_counts_through(#[case] value: i64, #[case] expected: usize) {
        assert_eq!(TypeLayoutError::check(value), Ok(expected));
    }

    #[test]
    fn save_error_maps_each_failure_code() {
        assert_eq!(
            SaveError::from_raw(clang_sys::CXSaveError_Unknown),
            Some(SaveError::Unknown)
        );
        assert_eq!(
            SaveError::from_raw(clang_sys::CXSaveError_TranslationErrors),
            Some(SaveError::TranslationErrors)
        );
        assert_eq!(
            SaveError::from_raw(clang_sys::CXSaveError_InvalidTU),
            Some(SaveError::InvalidTranslationUnit)
        );
        assert_eq!(SaveError::from_raw(clang_sys::CXSaveError_None), None);
    }

    #[test]
    fn load_diag_error_maps_each_failure_code() {
        assert_eq!(
            LoadDiagError::from_raw(clang_sys::CXLoadDiag_Unknown),
            Some(LoadDiagError::Unknown)
        );
        assert_eq!(
            LoadDiagError::from_raw(clang_sys::CXLoadDiag_CannotLoad),
            Some(LoadDiagError::CannotLoad)
        );
        assert_eq!(
            LoadDiagError::from_raw(clang_sys::CXLoadDiag_InvalidFile),
            Some(LoadDiagError::InvalidFile)
        );
        assert_eq!(LoadDiagError::from_raw(clang_sys::CXLoadDiag_None), None);
    }
}
