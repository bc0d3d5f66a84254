//! Diagnostics emitted while parsing a translation unit.

use std::ops::BitOr;
use std::path::Path;

use clang_sys::CXDiagnostic;

use crate::TranslationUnit;
use crate::error::LoadDiagError;
use crate::guard::Scoped;
use crate::source::{SourceLocation, SourceRange};
use crate::string::{self, CStringArray};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Suppressed by pragmas or flags; not shown to the user.
    Ignored,
    /// A note attached to another diagnostic.
    Note,
    /// A warning; parsing continued.
    Warning,
    /// An error; parsing recovered but the unit is suspect.
    Error,
    /// An unrecoverable error; parsing stopped.
    Fatal,
}

impl Severity {
    pub(crate) fn from_raw(raw: clang_sys::CXDiagnosticSeverity) -> Self {
        match raw {
            clang_sys::CXDiagnostic_Ignored => Self::Ignored,
            clang_sys::CXDiagnostic_Note => Self::Note,
            clang_sys::CXDiagnostic_Warning => Self::Warning,
            clang_sys::CXDiagnostic_Error => Self::Error,
            clang_sys::CXDiagnostic_Fatal => Self::Fatal,
            other => panic!("unsupported CXDiagnosticSeverity: {other}"),
        }
    }
}

/// Selects which pieces appear in [`Diagnostic::format`] output.
///
/// Combine options with `|`. The `Default` value mirrors the display
/// options that clang itself uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticDisplayOptions(pub(crate) i32);

impl DiagnosticDisplayOptions {
    /// Include the file, line, and column of the diagnostic.
    pub const SOURCE_LOCATION: Self = Self(0x01);
    /// Include the column. Implies [`Self::SOURCE_LOCATION`].
    pub const COLUMN: Self = Self(0x02);
    /// Include source ranges in machine-parsable form.
    pub const SOURCE_RANGES: Self = Self(0x04);
    /// Include the option name that enables the diagnostic, e.g.
    /// `[-Wconversion]`.
    pub const OPTION: Self = Self(0x08);
    /// Include the numeric category identifier.
    pub const CATEGORY_ID: Self = Self(0x10);
    /// Include the category name.
    pub const CATEGORY_NAME: Self = Self(0x20);

    /// No options at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }
}

impl Default for DiagnosticDisplayOptions {
    fn default() -> Self {
        Self(unsafe { clang_sys::clang_defaultDiagnosticDisplayOptions() })
    }
}

impl BitOr for DiagnosticDisplayOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A replacement suggested by a diagnostic.
#[derive(Debug, Clone)]
pub struct FixIt<'tu> {
    /// The text to splice in.
    pub replacement: String,
    /// The span of source to replace.
    pub range: SourceRange<'tu>,
}

/// A single diagnostic attached to a translation unit.
pub struct Diagnostic<'tu> {
    raw: CXDiagnostic,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Diagnostic<'tu> {
    pub(crate) fn from_raw(raw: CXDiagnostic, tu: &'tu TranslationUnit<'tu>) -> Self {
        Self { raw, tu }
    }

    /// How serious this diagnostic is.
    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::from_raw(unsafe { clang_sys::clang_getDiagnosticSeverity(self.raw) })
    }

    /// The diagnostic message, without location decoration.
    #[must_use]
    pub fn message(&self) -> String {
        unsafe { string::to_string(clang_sys::clang_getDiagnosticSpelling(self.raw)) }
    }

    /// Where the diagnostic points.
    #[must_use]
    pub fn location(&self) -> SourceLocation<'tu> {
        let raw = unsafe { clang_sys::clang_getDiagnosticLocation(self.raw) };
        SourceLocation::from_raw(raw, self.tu)
    }

    /// Renders the diagnostic the way a compiler driver would, honouring the
    /// given display options.
    #[must_use]
    pub fn format(&self, options: DiagnosticDisplayOptions) -> String {
        unsafe { string::to_string(clang_sys::clang_formatDiagnostic(self.raw, options.0)) }
    }

    /// The source ranges this diagnostic highlights.
    #[must_use]
    pub fn ranges(&self) -> Vec<SourceRange<'tu>> {
        let count = unsafe { clang_sys::clang_getDiagnosticNumRanges(self.raw) };
        (0..count)
            .map(|i| {
                let raw = unsafe { clang_sys::clang_getDiagnosticRange(self.raw, i) };
                SourceRange::from_raw(raw, self.tu)
            })
            .collect()
    }

    /// The replacements this diagnostic suggests.
    #[must_use]
    pub fn fix_its(&self) -> Vec<FixIt<'tu>> {
        let count = unsafe { clang_sys::clang_getDiagnosticNumFixIts(self.raw) };
        (0..count)
            .map(|i| {
                let mut raw_range = clang_sys::CXSourceRange {
                    ptr_data: [std::ptr::null(); 2],
                    begin_int_data: 0,
                    end_int_data: 0,
                };
                let replacement = unsafe {
                    string::to_string(clang_sys::clang_getDiagnosticFixIt(
                        self.raw,
                        i,
                        &mut raw_range,
                    ))
                };
                FixIt {
                    replacement,
                    range: SourceRange::from_raw(raw_range, self.tu),
                }
            })
            .collect()
    }

    /// Notes attached to this diagnostic.
    #[must_use]
    pub fn children(&self) -> Vec<Diagnostic<'tu>> {
        let set = unsafe { clang_sys::clang_getChildDiagnostics(self.raw) };
        if set.is_null() {
            return Vec::new();
        }
        // Child sets are owned by the parent diagnostic; only the individual
        // diagnostics we pull out need disposing, through Drop as usual.
        let count = unsafe { clang_sys::clang_getNumDiagnosticsInSet(set) };
        (0..count)
            .map(|i| {
                let raw = unsafe { clang_sys::clang_getDiagnosticInSet(set, i) };
                Self::from_raw(raw, self.tu)
            })
            .collect()
    }
}

impl Drop for Diagnostic<'_> {
    fn drop(&mut self) {
        unsafe { clang_sys::clang_disposeDiagnostic(self.raw) };
    }
}

impl std::fmt::Debug for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostic")
            .field("severity", &self.severity())
            .field("message", &self.message())
            .finish()
    }
}

/// A diagnostic recovered from a serialized diagnostics file, detached from
/// any translation unit.
#[derive(Debug, Clone)]
pub struct LoadedDiagnostic {
    /// How serious the diagnostic is.
    pub severity: Severity,
    /// The diagnostic message, without location decoration.
    pub message: String,
    /// The message rendered with clang's default display options.
    pub formatted: String,
}

/// Reads diagnostics written by `-serialize-diagnostics` back out of a file.
///
/// # Errors
///
/// Returns a [`LoadDiagError`] when the file is missing, unreadable, or not
/// a serialized diagnostics file.
pub fn load_diagnostics(path: impl AsRef<Path>) -> Result<Vec<LoadedDiagnostic>, LoadDiagError> {
    let path = CStringArray::new(&[path.as_ref().to_string_lossy()]);
    let mut error = clang_sys::CXLoadDiag_None;
    let mut error_message = clang_sys::CXString {
        data: std::ptr::null(),
        private_flags: 0,
    };
    let raw_set = unsafe {
        clang_sys::clang_loadDiagnostics(*path.as_ptr(), &mut error, &mut error_message)
    };
    let detail = string::to_string_opt(error_message);
    if raw_set.is_null() {
        let err = LoadDiagError::from_raw(error).unwrap_or(LoadDiagError::Unknown);
        tracing::debug!(detail = detail.as_deref(), "failed to load serialized diagnostics");
        return Err(err);
    }
    let set = Scoped::new(raw_set, |set| unsafe {
        clang_sys::clang_disposeDiagnosticSet(*set);
    });
    let count = unsafe { clang_sys::clang_getNumDiagnosticsInSet(*set) };
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let raw = unsafe { clang_sys::clang_getDiagnosticInSet(*set, i) };
        let diag = Scoped::new(raw, |diag| unsafe {
            clang_sys::clang_disposeDiagnostic(*diag);
        });
        out.push(LoadedDiagnostic {
            severity: Severity::from_raw(unsafe {
                clang_sys::clang_getDiagnosticSeverity(*diag)
            }),
            message: unsafe { string::to_string(clang_sys::clang_getDiagnosticSpelling(*diag)) },
            formatted: unsafe {
                string::to_string(clang_sys::clang_formatDiagnostic(
                    *diag,
                    clang_sys::clang_defaultDiagnosticDisplayOptions(),
                ))
            },
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(clang_sys::CXDiagnostic_Ignored, Severity::Ignored)]
    #[case(clang_sys::CXDiagnostic_Note, Severity::Note)]
    #[case(clang_sys::CXDiagnostic_Warning, Severity::Warning)]
    #[case(clang_sys::CXDiagnostic_Error, Severity::Error)]
    #[case(clang_sys::CXDiagnostic_Fatal, Severity::Fatal)]
    fn severity_maps_every_tag(
        #[case] raw: clang_sys::CXDiagnosticSeverity,
        #[case] expected: Severity,
    ) {
        assert_eq!(Severity::from_raw(raw), expected);
    }

    #[test]
    fn severities_order_by_seriousness() {
        assert!(Severity::Ignored < Severity::Note);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn display_options_combine_with_bitor() {
        let opts = DiagnosticDisplayOptions::SOURCE_LOCATION | DiagnosticDisplayOptions::COLUMN;
        assert_eq!(opts.0, 0x03);
        assert_eq!(DiagnosticDisplayOptions::empty().0, 0);
    }

    #[test]
    fn display_options_mirror_the_native_flags() {
        assert_eq!(
            DiagnosticDisplayOptions::SOURCE_LOCATION,
            DiagnosticDisplayOptions(clang_sys::CXDiagnostic_DisplaySourceLocation),
        );
        assert_eq!(
            DiagnosticDisplayOptions::CATEGORY_NAME,
            DiagnosticDisplayOptions(clang_sys::CXDiagnostic_DisplayCategoryName),
        );
    }
}
