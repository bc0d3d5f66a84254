//! Translation units: one parsed source file and everything reachable
//! from it.

use std::ffi::CString;
use std::ops::BitOr;
use std::os::raw::c_ulong;
use std::path::Path;
use std::ptr;

use clang_sys::{CXTranslationUnit, CXUnsavedFile};

use crate::cursor::Cursor;
use crate::diagnostic::Diagnostic;
use crate::error::{ClangError, SaveError};
use crate::index::Index;
use crate::source::{File, SourceRange};
use crate::string::{self, CStringArray};
use crate::token::Token;

/// Behaviour applied while parsing a translation unit.
///
/// Combine options with `|`. The empty set parses for one-shot inspection;
/// editors holding units open across edits usually want
/// [`ParseOptions::editing`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions(pub(crate) i32);

impl ParseOptions {
    /// Keep a detailed record of preprocessing, exposing macro definitions,
    /// expansions, and inclusion directives as cursors.
    pub const DETAILED_PREPROCESSING_RECORD: Self = Self(0x01);
    /// Treat the unit as incomplete, suppressing end-of-unit semantics such
    /// as template instantiation.
    pub const INCOMPLETE: Self = Self(0x02);
    /// Build a precompiled preamble to speed up reparsing.
    pub const PRECOMPILED_PREAMBLE: Self = Self(0x04);
    /// Cache code-completion results across reparses.
    pub const CACHE_COMPLETION_RESULTS: Self = Self(0x08);
    /// Parse in a form suitable for [`TranslationUnit::save`].
    pub const FOR_SERIALIZATION: Self = Self(0x10);
    /// Skip function bodies; only signatures and declarations survive.
    pub const SKIP_FUNCTION_BODIES: Self = Self(0x40);
    /// Include brief doc comments into code-completion results.
    pub const INCLUDE_BRIEF_COMMENTS_IN_CODE_COMPLETION: Self = Self(0x80);
    /// Build the preamble on the first parse rather than the first reparse.
    pub const CREATE_PREAMBLE_ON_FIRST_PARSE: Self = Self(0x100);
    /// Keep going after fatal errors instead of stopping at the first.
    pub const KEEP_GOING: Self = Self(0x200);

    /// No options at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The option set the native library recommends for editor-style use,
    /// where the unit will be reparsed repeatedly.
    #[must_use]
    pub fn editing() -> Self {
        Self(unsafe { clang_sys::clang_defaultEditingTranslationUnitOptions() })
    }
}

impl BitOr for ParseOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// In-memory contents standing in for a file on disk during parsing.
#[derive(Debug, Clone)]
pub struct UnsavedFile {
    filename: CString,
    contents: CString,
}

impl UnsavedFile {
    /// Pairs a filename with the contents to use in place of whatever is on
    /// disk at that path. Interior NUL bytes are not representable and are
    /// replaced with empty text.
    #[must_use]
    pub fn new(filename: impl AsRef<Path>, contents: &str) -> Self {
        let filename = CString::new(filename.as_ref().to_string_lossy().into_owned())
            .unwrap_or_default();
        let contents = CString::new(contents).unwrap_or_default();
        Self { filename, contents }
    }

    fn as_raw(&self) -> CXUnsavedFile {
        CXUnsavedFile {
            Filename: self.filename.as_ptr(),
            Contents: self.contents.as_ptr(),
            Length: self.contents.as_bytes().len() as c_ulong,
        }
    }
}

fn raw_unsaved(unsaved: &[UnsavedFile]) -> Vec<CXUnsavedFile> {
    unsaved.iter().map(UnsavedFile::as_raw).collect()
}

/// A single parsed source file, with its AST, diagnostics, and tokens.
///
/// A unit borrows the [`Index`] that parsed it. Everything handed out by a
/// unit, cursors, types, tokens, locations, borrows the unit in turn, so
/// operations that rebuild the AST ([`TranslationUnit::reparse`]) take
/// `&mut self` and cannot run while any such handle is alive.
pub struct TranslationUnit<'idx> {
    raw: CXTranslationUnit,
    _index: &'idx Index,
}

impl<'idx> TranslationUnit<'idx> {
    /// Parses a source file into a translation unit.
    ///
    /// `arguments` are command-line arguments as they would appear on a
    /// compiler invocation, e.g. `-I` and `-std=` flags. `unsaved` supplies
    /// in-memory contents for files that should not be read from disk.
    ///
    /// # Errors
    ///
    /// Returns a [`ClangError`] when the invocation is invalid or the parse
    /// fails outright. A unit with error diagnostics still parses
    /// successfully; inspect [`TranslationUnit::diagnostics`] for those.
    pub fn parse<S: AsRef<str>>(
        index: &'idx Index,
        filename: impl AsRef<Path>,
        arguments: &[S],
        unsaved: &[UnsavedFile],
        options: ParseOptions,
    ) -> Result<Self, ClangError> {
        let filename = filename.as_ref();
        let c_filename = CString::new(filename.to_string_lossy().into_owned())
            .unwrap_or_default();
        let c_arguments = CStringArray::new(arguments);
        let mut raw_files = raw_unsaved(unsaved);
        let mut raw = ptr::null_mut();
        let code = unsafe {
            clang_sys::clang_parseTranslationUnit2(
                index.as_raw(),
                c_filename.as_ptr(),
                c_arguments.as_ptr(),
                c_arguments.len(),
                raw_files.as_mut_ptr(),
                raw_files.len() as u32,
                options.0,
                &mut raw,
            )
        };
        if let Some(err) = ClangError::from_raw(code) {
            tracing::debug!(file = %filename.display(), error = %err, "parse failed");
            return Err(err);
        }
        tracing::debug!(file = %filename.display(), "parsed translation unit");
        Ok(Self { raw, _index: index })
    }

    /// Parses source text directly, without a file on disk.
    ///
    /// The text is presented to the parser under a synthetic filename whose
    /// language is chosen by `arguments` (e.g. `-x c++`) or defaults to C.
    ///
    /// # Errors
    ///
    /// Returns a [`ClangError`] as [`TranslationUnit::parse`] does.
    pub fn from_source<S: AsRef<str>>(
        index: &'idx Index,
        source: &str,
        arguments: &[S],
        options: ParseOptions,
    ) -> Result<Self, ClangError> {
        const SYNTHETIC: &str = "input.c";
        let unsaved = [UnsavedFile::new(SYNTHETIC, source)];
        Self::parse(index, SYNTHETIC, arguments, &unsaved, options)
    }

    /// Loads a translation unit previously serialized with
    /// [`TranslationUnit::save`].
    ///
    /// # Errors
    ///
    /// Returns a [`ClangError`] when the file is missing or is not a valid
    /// serialized unit.
    pub fn load(index: &'idx Index, path: impl AsRef<Path>) -> Result<Self, ClangError> {
        let path = path.as_ref();
        let c_path = CString::new(path.to_string_lossy().into_owned()).unwrap_or_default();
        let mut raw = ptr::null_mut();
        let code = unsafe {
            clang_sys::clang_createTranslationUnit2(index.as_raw(), c_path.as_ptr(), &mut raw)
        };
        if let Some(err) = ClangError::from_raw(code) {
            tracing::debug!(file = %path.display(), error = %err, "AST load failed");
            return Err(err);
        }
        Ok(Self { raw, _index: index })
    }

    pub(crate) fn as_raw(&self) -> CXTranslationUnit {
        self.raw
    }

    /// The original source file this unit was parsed from.
    #[must_use]
    pub fn spelling(&self) -> String {
        string::to_string(unsafe { clang_sys::clang_getTranslationUnitSpelling(self.raw) })
    }

    /// The cursor for the whole unit, the root of every traversal.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> {
        let raw = unsafe { clang_sys::clang_getTranslationUnitCursor(self.raw) };
        Cursor::from_raw_unchecked(raw, self)
    }

    /// The file handle for a path within this unit, `None` when the path
    /// was not part of the unit.
    #[must_use]
    pub fn file(&self, path: impl AsRef<Path>) -> Option<File<'_>> {
        let c_path = CString::new(path.as_ref().to_string_lossy().into_owned()).ok()?;
        let raw = unsafe { clang_sys::clang_getFile(self.raw, c_path.as_ptr()) };
        File::from_raw(raw, self)
    }

    /// The diagnostics produced while parsing this unit.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic<'_>> {
        let count = unsafe { clang_sys::clang_getNumDiagnostics(self.raw) };
        (0..count)
            .map(|i| {
                let raw = unsafe { clang_sys::clang_getDiagnostic(self.raw, i) };
                Diagnostic::from_raw(raw, self)
            })
            .collect()
    }

    /// The lexical tokens of the whole unit, in source order.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token<'_>> {
        self.tokens_in(self.cursor().range())
    }

    /// The lexical tokens within `range`, in source order.
    pub(crate) fn tokens_in<'tu>(&'tu self, range: SourceRange<'tu>) -> Vec<Token<'tu>> {
        let mut raw_tokens = ptr::null_mut();
        let mut count = 0;
        unsafe {
            clang_sys::clang_tokenize(self.raw, range.as_raw(), &mut raw_tokens, &mut count);
        }
        if raw_tokens.is_null() {
            return Vec::new();
        }
        let tokens = unsafe { std::slice::from_raw_parts(raw_tokens, count as usize) }
            .iter()
            .map(|&raw| Token::from_raw(raw, self))
            .collect();
        unsafe { clang_sys::clang_disposeTokens(self.raw, raw_tokens, count) };
        tokens
    }

    /// Maps each token to the most specific cursor covering it, position by
    /// position. A token outside any interesting entity maps to `None`.
    #[must_use]
    pub fn annotate<'tu>(&'tu self, tokens: &[Token<'tu>]) -> Vec<Option<Cursor<'tu>>> {
        let mut raw_tokens: Vec<_> = tokens.iter().map(|token| token.as_raw()).collect();
        let mut raw_cursors = vec![unsafe { clang_sys::clang_getNullCursor() }; tokens.len()];
        unsafe {
            clang_sys::clang_annotateTokens(
                self.raw,
                raw_tokens.as_mut_ptr(),
                raw_tokens.len() as u32,
                raw_cursors.as_mut_ptr(),
            );
        }
        raw_cursors
            .into_iter()
            .map(|raw| Cursor::from_raw(raw, self))
            .collect()
    }

    /// Reparses the unit from current contents, rebuilding the AST.
    ///
    /// Taking `&mut self` retires every cursor, type, token, and location
    /// previously handed out, which is exactly the invalidation the native
    /// library demands.
    ///
    /// # Errors
    ///
    /// Returns a [`ClangError`] when reparsing fails; the unit must not be
    /// used further after an error.
    pub fn reparse(&mut self, unsaved: &[UnsavedFile]) -> Result<(), ClangError> {
        let mut raw_files = raw_unsaved(unsaved);
        let code = unsafe {
            clang_sys::clang_reparseTranslationUnit(
                self.raw,
                raw_files.len() as u32,
                raw_files.as_mut_ptr(),
                clang_sys::clang_defaultReparseOptions(self.raw),
            )
        };
        if let Some(err) = ClangError::from_raw(code) {
            tracing::debug!(error = %err, "reparse failed");
            return Err(err);
        }
        tracing::debug!("reparsed translation unit");
        Ok(())
    }

    /// Serializes the unit to a file that [`TranslationUnit::load`] can
    /// read back.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] when the unit cannot be serialized, for
    /// instance after fatal diagnostics.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let c_path = CString::new(path.to_string_lossy().into_owned()).unwrap_or_default();
        let code = unsafe {
            clang_sys::clang_saveTranslationUnit(
                self.raw,
                c_path.as_ptr(),
                clang_sys::clang_defaultSaveOptions(self.raw),
            )
        };
        if let Some(err) = SaveError::from_raw(code) {
            tracing::debug!(file = %path.display(), error = %err, "save failed");
            return Err(err);
        }
        tracing::debug!(file = %path.display(), "saved translation unit");
        Ok(())
    }
}

impl Drop for TranslationUnit<'_> {
    fn drop(&mut self) {
        unsafe { clang_sys::clang_disposeTranslationUnit(self.raw) };
    }
}

impl std::fmt::Debug for TranslationUnit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationUnit")
            .field("spelling", &self.spelling())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_options_combine_with_bitor() {
        let options =
            ParseOptions::DETAILED_PREPROCESSING_RECORD | ParseOptions::SKIP_FUNCTION_BODIES;
        assert_eq!(options.0, 0x41);
        assert_eq!(ParseOptions::empty(), ParseOptions::default());
    }

    #[test]
    fn parse_options_mirror_the_native_flags() {
        assert_eq!(
            ParseOptions::DETAILED_PREPROCESSING_RECORD,
            ParseOptions(clang_sys::CXTranslationUnit_DetailedPreprocessingRecord),
        );
        assert_eq!(
            ParseOptions::FOR_SERIALIZATION,
            ParseOptions(clang_sys::CXTranslationUnit_ForSerialization),
        );
        assert_eq!(
            ParseOptions::KEEP_GOING,
            ParseOptions(clang_sys::CXTranslationUnit_KeepGoing),
        );
    }

    #[test]
    fn unsaved_file_carries_its_byte_length() {
        let unsaved = UnsavedFile::new("main.c", "int main() {}");
        let raw = unsaved.as_raw();
        assert_eq!(raw.Length, 13);
        assert!(!raw.Filename.is_null());
        assert!(!raw.Contents.is_null());
    }
}
