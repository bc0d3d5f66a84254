//! A safe, typed view over libclang's AST introspection interface.
//!
//! This crate wraps the C API behind ownership-aware session objects and
//! borrow-checked handles:
//!
//! - **Sessions** via [`Index`] and [`TranslationUnit`], which own the
//!   native resources and release them on drop
//! - **Traversal** via [`Cursor::visit_children`], steering the native walk
//!   with [`ChildVisit`] verdicts
//! - **Typed dispatch** via [`Cursor::classify`] into [`Entity`] views that
//!   carry kind-specific operations
//! - **Closed kind mirrors** such as [`CursorKind`] and [`TypeKind`], total
//!   in both directions over the targeted library version
//!
//! The shared library is located and loaded at runtime on first use; no
//! libclang is needed at build time.
//!
//! # Example
//!
//! ```no_run
//! use loupe::{ChildVisit, CursorKind, Index, ParseOptions, TranslationUnit};
//!
//! let index = Index::new(false, false)?;
//! let unit = TranslationUnit::from_source(
//!     &index,
//!     "int add(int a, int b) { return a + b; }",
//!     &["-std=c11"],
//!     ParseOptions::empty(),
//! )?;
//!
//! unit.cursor().visit_children(|cursor| {
//!     if cursor.kind() == CursorKind::FunctionDecl {
//!         println!("{}", cursor.display_name());
//!     }
//!     ChildVisit::Recurse
//! });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Lifetimes
//!
//! Every handle a unit hands out ([`Cursor`], [`Type`], [`Token`],
//! [`SourceLocation`], and friends) borrows that unit, and the unit borrows
//! its [`Index`]. Operations that rebuild the AST, such as
//! [`TranslationUnit::reparse`], take `&mut self`, so stale handles are a
//! compile error rather than undefined behaviour.

mod availability;
mod comment;
mod cursor;
mod diagnostic;
mod error;
mod eval;
mod guard;
mod index;
mod kind;
mod source;
mod string;
mod token;
mod translation_unit;
mod ty;

pub use availability::{Availability, AvailabilityKind, PlatformAvailability, Version};
pub use comment::{
    BlockCommandComment, Comment, CommentNode, FullComment, HtmlAttribute, HtmlEndTagComment,
    HtmlStartTagComment, InlineCommandComment, InlineCommandRenderKind, ParagraphComment,
    ParamCommandComment, ParamPassDirection, TParamCommandComment, TextComment,
    VerbatimBlockComment, VerbatimBlockLineComment, VerbatimLineComment,
};
pub use cursor::{
    AccessSpecifier, ChildVisit, Cursor, Entity, FunctionDecl, Language, Linkage, MethodDecl,
    NameRefOptions, StorageClass, StructDecl, TemplateArgumentKind, Visibility,
};
pub use diagnostic::{
    Diagnostic, DiagnosticDisplayOptions, FixIt, LoadedDiagnostic, Severity, load_diagnostics,
};
pub use error::{ClangError, LibraryError, LoadDiagError, SaveError, TypeLayoutError};
pub use eval::EvalResult;
pub use index::{GlobalOptions, Index};
pub use kind::CursorKind;
pub use source::{File, FileLocation, SourceLocation, SourceRange, UniqueFileId};
pub use token::{Token, TokenKind};
pub use translation_unit::{ParseOptions, TranslationUnit, UnsavedFile};
pub use ty::{CallingConvention, RecordType, Type, TypeKind};
