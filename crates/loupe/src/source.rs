//! Positions within parsed source: files, point locations, and ranges.
//!
//! All three wrappers borrow the owning [`TranslationUnit`]; they are cheap
//! `Copy` handles and stay valid only as long as the unit they came from.

use std::os::raw::c_uint;
use std::path::PathBuf;
use std::ptr;

use clang_sys::{CXFile, CXSourceLocation, CXSourceRange};

use crate::TranslationUnit;
use crate::string;

/// A file known to a translation unit.
#[derive(Clone, Copy)]
pub struct File<'tu> {
    raw: CXFile,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> File<'tu> {
    pub(crate) fn from_raw(raw: CXFile, tu: &'tu TranslationUnit<'tu>) -> Option<Self> {
        if raw.is_null() { None } else { Some(Self { raw, tu }) }
    }

    pub(crate) fn as_raw(self) -> CXFile {
        self.raw
    }

    pub(crate) fn translation_unit(self) -> &'tu TranslationUnit<'tu> {
        self.tu
    }

    /// The complete path of this file.
    #[must_use]
    pub fn path(self) -> PathBuf {
        unsafe { string::to_string(clang_sys::clang_getFileName(self.raw)) }.into()
    }

    /// The last modification time, as seconds since the Unix epoch.
    #[must_use]
    pub fn modification_time(self) -> i64 {
        unsafe { clang_sys::clang_getFileTime(self.raw) as i64 }
    }

    /// A stable identity for this file, when the filesystem provides one.
    #[must_use]
    pub fn unique_id(self) -> Option<UniqueFileId> {
        let mut raw = clang_sys::CXFileUniqueID { data: [0; 3] };
        let failed = unsafe { clang_sys::clang_getFileUniqueID(self.raw, &mut raw) } != 0;
        if failed {
            return None;
        }
        Some(UniqueFileId {
            device: raw.data[0],
            inode: raw.data[1],
            modification_time: raw.data[2],
        })
    }

    /// Whether this file is guarded against multiple inclusion, either by
    /// `#ifndef`/`#define` or by `#pragma once`.
    #[must_use]
    pub fn is_multiple_include_guarded(self) -> bool {
        unsafe { clang_sys::clang_isFileMultipleIncludeGuarded(self.tu.as_raw(), self.raw) != 0 }
    }

    /// The location at the given 1-based line and column in this file.
    #[must_use]
    pub fn location(self, line: u32, column: u32) -> SourceLocation<'tu> {
        let raw = unsafe {
            clang_sys::clang_getLocation(self.tu.as_raw(), self.raw, line, column)
        };
        SourceLocation::from_raw(raw, self.tu)
    }

    /// The location at the given byte offset into this file.
    #[must_use]
    pub fn location_for_offset(self, offset: u32) -> SourceLocation<'tu> {
        let raw =
            unsafe { clang_sys::clang_getLocationForOffset(self.tu.as_raw(), self.raw, offset) };
        SourceLocation::from_raw(raw, self.tu)
    }
}

impl PartialEq for File<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_sys::clang_File_isEqual(self.raw, other.raw) != 0 }
    }
}

impl Eq for File<'_> {}

impl std::fmt::Debug for File<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("File").field("path", &self.path()).finish()
    }
}

/// A filesystem-level identity for a [`File`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniqueFileId {
    /// The device the file lives on.
    pub device: u64,
    /// The inode within that device.
    pub inode: u64,
    /// The modification time recorded when the unit was parsed.
    pub modification_time: u64,
}

/// A single position within source.
#[derive(Clone, Copy)]
pub struct SourceLocation<'tu> {
    raw: CXSourceLocation,
    tu: &'tu TranslationUnit<'tu>,
}

/// The file-resolved form of a [`SourceLocation`].
///
/// `file` is `None` for positions that do not map into a real file, such as
/// locations inside command-line macro definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLocation<'tu> {
    /// The containing file, when there is one.
    pub file: Option<File<'tu>>,
    /// The 1-based line number.
    pub line: u32,
    /// The 1-based column number.
    pub column: u32,
    /// The byte offset into the file.
    pub offset: u32,
}

impl<'tu> SourceLocation<'tu> {
    pub(crate) fn from_raw(raw: CXSourceLocation, tu: &'tu TranslationUnit<'tu>) -> Self {
        Self { raw, tu }
    }

    pub(crate) fn as_raw(self) -> CXSourceLocation {
        self.raw
    }

    fn resolve(
        self,
        query: unsafe fn(CXSourceLocation, *mut CXFile, *mut c_uint, *mut c_uint, *mut c_uint),
    ) -> FileLocation<'tu> {
        let mut file = ptr::null_mut();
        let mut line = 0;
        let mut column = 0;
        let mut offset = 0;
        unsafe { query(self.raw, &mut file, &mut line, &mut column, &mut offset) };
        FileLocation {
            file: File::from_raw(file, self.tu),
            line,
            column,
            offset,
        }
    }

    /// The file, line, column, and offset this location refers to, after
    /// resolving through any macro expansions to the point of expansion.
    #[must_use]
    pub fn expansion(self) -> FileLocation<'tu> {
        self.resolve(clang_sys::clang_getExpansionLocation)
    }

    /// Like [`SourceLocation::expansion`], but for a position inside a macro
    /// body this resolves to where the token was spelled.
    #[must_use]
    pub fn spelling(self) -> FileLocation<'tu> {
        self.resolve(clang_sys::clang_getSpellingLocation)
    }

    /// The file, line, column, and offset, honouring `#line` directives.
    #[must_use]
    pub fn file_location(self) -> FileLocation<'tu> {
        self.resolve(clang_sys::clang_getFileLocation)
    }

    /// Whether this location sits in a system header.
    #[must_use]
    pub fn is_in_system_header(self) -> bool {
        unsafe { clang_sys::clang_Location_isInSystemHeader(self.raw) != 0 }
    }

    /// Whether this location sits in the main file of its translation unit.
    #[must_use]
    pub fn is_from_main_file(self) -> bool {
        unsafe { clang_sys::clang_Location_isFromMainFile(self.raw) != 0 }
    }

    /// A zero-width range at this location.
    #[must_use]
    pub fn range(self) -> SourceRange<'tu> {
        SourceRange::new(self, self)
    }

    /// The most specific cursor enclosing this location.
    #[must_use]
    pub fn cursor(self) -> crate::Cursor<'tu> {
        let raw = unsafe { clang_sys::clang_getCursor(self.tu.as_raw(), self.raw) };
        crate::Cursor::from_raw_unchecked(raw, self.tu)
    }
}

impl PartialEq for SourceLocation<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_sys::clang_equalLocations(self.raw, other.raw) != 0 }
    }
}

impl Eq for SourceLocation<'_> {}

impl std::fmt::Debug for SourceLocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loc = self.file_location();
        f.debug_struct("SourceLocation")
            .field("file", &loc.file.map(File::path))
            .field("line", &loc.line)
            .field("column", &loc.column)
            .finish()
    }
}

/// A half-open span of source, from `start` up to but not including `end`.
#[derive(Clone, Copy)]
pub struct SourceRange<'tu> {
    raw: CXSourceRange,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> SourceRange<'tu> {
    pub(crate) fn from_raw(raw: CXSourceRange, tu: &'tu TranslationUnit<'tu>) -> Self {
        Self { raw, tu }
    }

    pub(crate) fn as_raw(self) -> CXSourceRange {
        self.raw
    }

    /// Builds the range covering `start` up to `end`.
    #[must_use]
    pub fn new(start: SourceLocation<'tu>, end: SourceLocation<'tu>) -> Self {
        let raw = unsafe { clang_sys::clang_getRange(start.raw, end.raw) };
        Self { raw, tu: start.tu }
    }

    /// The first position in the range.
    #[must_use]
    pub fn start(self) -> SourceLocation<'tu> {
        let raw = unsafe { clang_sys::clang_getRangeStart(self.raw) };
        SourceLocation::from_raw(raw, self.tu)
    }

    /// The first position after the range.
    #[must_use]
    pub fn end(self) -> SourceLocation<'tu> {
        let raw = unsafe { clang_sys::clang_getRangeEnd(self.raw) };
        SourceLocation::from_raw(raw, self.tu)
    }

    /// The lexical tokens within this range.
    #[must_use]
    pub fn tokens(self) -> Vec<crate::Token<'tu>> {
        self.tu.tokens_in(self)
    }
}

impl PartialEq for SourceRange<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_sys::clang_equalRanges(self.raw, other.raw) != 0 }
    }
}

impl Eq for SourceRange<'_> {}

impl std::fmt::Debug for SourceRange<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRange")
            .field("start", &self.start())
            .field("end", &self.end())
            .finish()
    }
}
