//! Lexical tokens produced by tokenizing a range of source.

use clang_sys::{CXToken, CXTokenKind};

use crate::TranslationUnit;
use crate::source::{SourceLocation, SourceRange};
use crate::string;

/// The lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A language keyword.
    Keyword,
    /// An identifier that is not a keyword.
    Identifier,
    /// A numeric, character, or string literal.
    Literal,
    /// Punctuation such as braces, commas, and operators.
    Punctuation,
    /// A comment.
    Comment,
}

impl TokenKind {
    pub(crate) fn from_raw(raw: CXTokenKind) -> Self {
        match raw {
            clang_sys::CXToken_Keyword => Self::Keyword,
            clang_sys::CXToken_Identifier => Self::Identifier,
            clang_sys::CXToken_Literal => Self::Literal,
            clang_sys::CXToken_Punctuation => Self::Punctuation,
            clang_sys::CXToken_Comment => Self::Comment,
            other => panic!("unsupported CXTokenKind: {other}"),
        }
    }
}

/// A single lexical token within a translation unit.
#[derive(Clone, Copy)]
pub struct Token<'tu> {
    raw: CXToken,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Token<'tu> {
    pub(crate) fn from_raw(raw: CXToken, tu: &'tu TranslationUnit<'tu>) -> Self {
        Self { raw, tu }
    }

    pub(crate) fn as_raw(self) -> CXToken {
        self.raw
    }

    /// The lexical class of this token.
    #[must_use]
    pub fn kind(self) -> TokenKind {
        TokenKind::from_raw(unsafe { clang_sys::clang_getTokenKind(self.raw) })
    }

    /// The textual spelling of this token.
    #[must_use]
    pub fn spelling(self) -> String {
        unsafe { string::to_string(clang_sys::clang_getTokenSpelling(self.tu.as_raw(), self.raw)) }
    }

    /// Where this token begins.
    #[must_use]
    pub fn location(self) -> SourceLocation<'tu> {
        let raw = unsafe { clang_sys::clang_getTokenLocation(self.tu.as_raw(), self.raw) };
        SourceLocation::from_raw(raw, self.tu)
    }

    /// The span of source this token covers.
    #[must_use]
    pub fn range(self) -> SourceRange<'tu> {
        let raw = unsafe { clang_sys::clang_getTokenExtent(self.tu.as_raw(), self.raw) };
        SourceRange::from_raw(raw, self.tu)
    }
}

impl std::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind())
            .field("spelling", &self.spelling())
            .finish()
    }
}
