//! Cursors: uniform handles on every entity in a translation unit.
//!
//! A [`Cursor`] points at one node of the AST and answers questions about
//! it. Traversal runs through [`Cursor::visit_children`], which drives a
//! caller-supplied closure from the native walk; [`Cursor::classify`] lifts
//! a cursor into the typed [`Entity`] view when its kind carries extra
//! operations.

use std::ops::BitOr;
use std::os::raw::c_void;
use std::panic::{self, AssertUnwindSafe};

use clang_sys::{CXChildVisitResult, CXClientData, CXCursor};

use crate::TranslationUnit;
use crate::availability::{self, Availability, AvailabilityKind};
use crate::comment::FullComment;
use crate::error::TypeLayoutError;
use crate::eval::EvalResult;
use crate::kind::CursorKind;
use crate::source::{SourceLocation, SourceRange};
use crate::string;
use crate::ty::{CallingConvention, Type};

/// What a reference's name range includes.
///
/// Combine options with `|`. The empty set covers just the name itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NameRefOptions(pub(crate) i32);

impl NameRefOptions {
    /// Include the nested-name-specifier, e.g. `Foo::` in `x.Foo::y`.
    pub const WANT_QUALIFIER: Self = Self(0x1);
    /// Include explicit template arguments, e.g. `<int>` in `x.f<int>`.
    pub const WANT_TEMPLATE_ARGS: Self = Self(0x2);
    /// For a non-contiguous name, such as an Objective-C selector with
    /// several pieces, return one range spanning all of it.
    pub const WANT_SINGLE_PIECE: Self = Self(0x4);

    /// No options at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }
}

impl BitOr for NameRefOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// How a traversal proceeds after visiting one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildVisit {
    /// Stop the whole traversal immediately.
    Abort,
    /// Move on to the next sibling without descending.
    Continue,
    /// Descend into this child's children, then continue with siblings.
    Recurse,
}

impl ChildVisit {
    fn as_raw(self) -> CXChildVisitResult {
        match self {
            Self::Abort => clang_sys::CXChildVisit_Break,
            Self::Continue => clang_sys::CXChildVisit_Continue,
            Self::Recurse => clang_sys::CXChildVisit_Recurse,
        }
    }
}

/// The linkage of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Linkage {
    /// No linkage; local to its scope.
    None,
    /// Internal linkage; visible within its translation unit.
    Internal,
    /// External linkage within a C++ anonymous namespace.
    UniqueExternal,
    /// External linkage.
    External,
}

impl Linkage {
    pub(crate) fn from_raw_opt(raw: clang_sys::CXLinkageKind) -> Option<Self> {
        let linkage = match raw {
            clang_sys::CXLinkage_Invalid => return None,
            clang_sys::CXLinkage_NoLinkage => Self::None,
            clang_sys::CXLinkage_Internal => Self::Internal,
            clang_sys::CXLinkage_UniqueExternal => Self::UniqueExternal,
            clang_sys::CXLinkage_External => Self::External,
            other => panic!("unsupported CXLinkageKind: {other}"),
        };
        Some(linkage)
    }
}

/// The source language an entity was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C.
    C,
    /// Objective-C.
    ObjC,
    /// C++.
    CPlusPlus,
}

impl Language {
    pub(crate) fn from_raw_opt(raw: clang_sys::CXLanguageKind) -> Option<Self> {
        let language = match raw {
            clang_sys::CXLanguage_Invalid => return None,
            clang_sys::CXLanguage_C => Self::C,
            clang_sys::CXLanguage_ObjC => Self::ObjC,
            clang_sys::CXLanguage_CPlusPlus => Self::CPlusPlus,
            other => panic!("unsupported CXLanguageKind: {other}"),
        };
        Some(language)
    }
}

/// The symbol visibility of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Not visible outside its linked object.
    Hidden,
    /// Visible, but not overridable by other linked objects.
    Protected,
    /// Fully visible.
    Default,
}

impl Visibility {
    pub(crate) fn from_raw_opt(raw: clang_sys::CXVisibilityKind) -> Option<Self> {
        let visibility = match raw {
            clang_sys::CXVisibility_Invalid => return None,
            clang_sys::CXVisibility_Hidden => Self::Hidden,
            clang_sys::CXVisibility_Protected => Self::Protected,
            clang_sys::CXVisibility_Default => Self::Default,
            other => panic!("unsupported CXVisibilityKind: {other}"),
        };
        Some(visibility)
    }
}

/// The storage class written on a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    /// No storage class was written.
    None,
    /// `extern`.
    Extern,
    /// `static`.
    Static,
    /// `__private_extern__`.
    PrivateExtern,
    /// OpenCL work-group-local storage.
    OpenClWorkGroupLocal,
    /// `auto`.
    Auto,
    /// `register`.
    Register,
}

impl StorageClass {
    pub(crate) fn from_raw_opt(raw: clang_sys::CX_StorageClass) -> Option<Self> {
        let storage = match raw {
            clang_sys::CX_SC_Invalid => return None,
            clang_sys::CX_SC_None => Self::None,
            clang_sys::CX_SC_Extern => Self::Extern,
            clang_sys::CX_SC_Static => Self::Static,
            clang_sys::CX_SC_PrivateExtern => Self::PrivateExtern,
            clang_sys::CX_SC_OpenCLWorkGroupLocal => Self::OpenClWorkGroupLocal,
            clang_sys::CX_SC_Auto => Self::Auto,
            clang_sys::CX_SC_Register => Self::Register,
            other => panic!("unsupported CX_StorageClass: {other}"),
        };
        Some(storage)
    }
}

/// A C++ access specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessSpecifier {
    /// `public`.
    Public,
    /// `protected`.
    Protected,
    /// `private`.
    Private,
}

impl AccessSpecifier {
    pub(crate) fn from_raw_opt(raw: clang_sys::CX_CXXAccessSpecifier) -> Option<Self> {
        let access = match raw {
            clang_sys::CX_CXXInvalidAccessSpecifier => return None,
            clang_sys::CX_CXXPublic => Self::Public,
            clang_sys::CX_CXXProtected => Self::Protected,
            clang_sys::CX_CXXPrivate => Self::Private,
            other => panic!("unsupported CX_CXXAccessSpecifier: {other}"),
        };
        Some(access)
    }
}

/// The kind of one template argument of a specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateArgumentKind {
    /// An empty argument.
    Null,
    /// A type argument.
    Type,
    /// A declaration argument.
    Declaration,
    /// A null pointer argument.
    NullPtr,
    /// An integral argument.
    Integral,
    /// A template argument.
    Template,
    /// A template pack expansion.
    TemplateExpansion,
    /// An expression argument.
    Expression,
    /// A parameter pack.
    Pack,
}

impl TemplateArgumentKind {
    pub(crate) fn from_raw_opt(raw: clang_sys::CXTemplateArgumentKind) -> Option<Self> {
        let kind = match raw {
            clang_sys::CXTemplateArgumentKind_Invalid => return None,
            clang_sys::CXTemplateArgumentKind_Null => Self::Null,
            clang_sys::CXTemplateArgumentKind_Type => Self::Type,
            clang_sys::CXTemplateArgumentKind_Declaration => Self::Declaration,
            clang_sys::CXTemplateArgumentKind_NullPtr => Self::NullPtr,
            clang_sys::CXTemplateArgumentKind_Integral => Self::Integral,
            clang_sys::CXTemplateArgumentKind_Template => Self::Template,
            clang_sys::CXTemplateArgumentKind_TemplateExpansion => Self::TemplateExpansion,
            clang_sys::CXTemplateArgumentKind_Expression => Self::Expression,
            clang_sys::CXTemplateArgumentKind_Pack => Self::Pack,
            other => panic!("unsupported CXTemplateArgumentKind: {other}"),
        };
        Some(kind)
    }
}

/// A handle on one entity in a translation unit.
#[derive(Clone, Copy)]
pub struct Cursor<'tu> {
    raw: CXCursor,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Cursor<'tu> {
    /// Wraps a native cursor, `None` for the null cursor.
    pub(crate) fn from_raw(raw: CXCursor, tu: &'tu TranslationUnit<'tu>) -> Option<Self> {
        let null = unsafe { clang_sys::clang_Cursor_isNull(raw) } != 0;
        if null { None } else { Some(Self { raw, tu }) }
    }

    /// Wraps a native cursor libclang guarantees to be non-null.
    pub(crate) fn from_raw_unchecked(raw: CXCursor, tu: &'tu TranslationUnit<'tu>) -> Self {
        Self { raw, tu }
    }

    pub(crate) fn as_raw(self) -> CXCursor {
        self.raw
    }

    /// The translation unit this cursor belongs to.
    #[must_use]
    pub fn translation_unit(self) -> &'tu TranslationUnit<'tu> {
        self.tu
    }

    /// The kind of entity this cursor points at.
    #[must_use]
    pub fn kind(self) -> CursorKind {
        CursorKind::from_raw(unsafe { clang_sys::clang_getCursorKind(self.raw) })
    }

    /// The entity's name, e.g. `main`.
    #[must_use]
    pub fn spelling(self) -> String {
        string::to_string(unsafe { clang_sys::clang_getCursorSpelling(self.raw) })
    }

    /// The entity's name with disambiguating detail, e.g. `main(int, char **)`.
    #[must_use]
    pub fn display_name(self) -> String {
        string::to_string(unsafe { clang_sys::clang_getCursorDisplayName(self.raw) })
    }

    /// The Unified Symbol Resolution string identifying this entity across
    /// translation units, `None` when it has none.
    #[must_use]
    pub fn usr(self) -> Option<String> {
        string::to_string_opt(unsafe { clang_sys::clang_getCursorUSR(self.raw) })
            .filter(|usr| !usr.is_empty())
    }

    /// The symbol name seen by the linker.
    #[must_use]
    pub fn mangled_name(self) -> String {
        string::to_string(unsafe { clang_sys::clang_Cursor_getMangling(self.raw) })
    }

    /// Where the entity is located, e.g. where its name is written.
    #[must_use]
    pub fn location(self) -> SourceLocation<'tu> {
        let raw = unsafe { clang_sys::clang_getCursorLocation(self.raw) };
        SourceLocation::from_raw(raw, self.tu)
    }

    /// The span of source covering the whole entity.
    #[must_use]
    pub fn range(self) -> SourceRange<'tu> {
        let raw = unsafe { clang_sys::clang_getCursorExtent(self.raw) };
        SourceRange::from_raw(raw, self.tu)
    }

    /// The parent in the semantic nesting of declarations.
    #[must_use]
    pub fn semantic_parent(self) -> Option<Self> {
        let raw = unsafe { clang_sys::clang_getCursorSemanticParent(self.raw) };
        Self::from_raw(raw, self.tu)
    }

    /// The parent in the lexical nesting of source.
    #[must_use]
    pub fn lexical_parent(self) -> Option<Self> {
        let raw = unsafe { clang_sys::clang_getCursorLexicalParent(self.raw) };
        Self::from_raw(raw, self.tu)
    }

    /// The entity a reference cursor refers to.
    #[must_use]
    pub fn referenced(self) -> Option<Self> {
        let raw = unsafe { clang_sys::clang_getCursorReferenced(self.raw) };
        Self::from_raw(raw, self.tu)
    }

    /// The span of the name a reference cursor spells, `None` for cursors
    /// that do not reference anything.
    ///
    /// Multi-piece names, such as Objective-C selectors, expose one range
    /// per piece through `piece_index` unless
    /// [`NameRefOptions::WANT_SINGLE_PIECE`] is set; out-of-range pieces
    /// yield `None`.
    #[must_use]
    pub fn reference_name_range(
        self,
        options: NameRefOptions,
        piece_index: u32,
    ) -> Option<SourceRange<'tu>> {
        let raw = unsafe {
            clang_sys::clang_getCursorReferenceNameRange(self.raw, options.0, piece_index)
        };
        if unsafe { clang_sys::clang_Range_isNull(raw) } != 0 {
            return None;
        }
        Some(SourceRange::from_raw(raw, self.tu))
    }

    /// The defining occurrence of the entity, when it is in this unit.
    #[must_use]
    pub fn definition(self) -> Option<Self> {
        let raw = unsafe { clang_sys::clang_getCursorDefinition(self.raw) };
        Self::from_raw(raw, self.tu)
    }

    /// Whether this cursor is itself the entity's definition.
    #[must_use]
    pub fn is_definition(self) -> bool {
        unsafe { clang_sys::clang_isCursorDefinition(self.raw) != 0 }
    }

    /// Whether this cursor's kind is a declaration.
    #[must_use]
    pub fn is_declaration(self) -> bool {
        unsafe { clang_sys::clang_isDeclaration(self.kind().as_raw()) != 0 }
    }

    /// Whether this cursor's kind is a reference to another entity.
    #[must_use]
    pub fn is_reference(self) -> bool {
        unsafe { clang_sys::clang_isReference(self.kind().as_raw()) != 0 }
    }

    /// Whether this cursor's kind is an expression.
    #[must_use]
    pub fn is_expression(self) -> bool {
        unsafe { clang_sys::clang_isExpression(self.kind().as_raw()) != 0 }
    }

    /// Whether this cursor's kind is a statement.
    #[must_use]
    pub fn is_statement(self) -> bool {
        unsafe { clang_sys::clang_isStatement(self.kind().as_raw()) != 0 }
    }

    /// Whether this cursor's kind is an attribute.
    #[must_use]
    pub fn is_attribute(self) -> bool {
        unsafe { clang_sys::clang_isAttribute(self.kind().as_raw()) != 0 }
    }

    /// Whether this cursor's kind is a preprocessing element such as a macro
    /// definition or an inclusion directive.
    #[must_use]
    pub fn is_preprocessing(self) -> bool {
        unsafe { clang_sys::clang_isPreprocessing(self.kind().as_raw()) != 0 }
    }

    /// Whether this cursor's kind carries no further detail through this
    /// interface.
    #[must_use]
    pub fn is_unexposed(self) -> bool {
        unsafe { clang_sys::clang_isUnexposed(self.kind().as_raw()) != 0 }
    }

    /// The canonical cursor among redeclarations of the same entity.
    #[must_use]
    pub fn canonical(self) -> Self {
        let raw = unsafe { clang_sys::clang_getCanonicalCursor(self.raw) };
        Self { raw, tu: self.tu }
    }

    /// The entity's type, `None` for entities without one.
    #[must_use]
    pub fn type_of(self) -> Option<Type<'tu>> {
        let raw = unsafe { clang_sys::clang_getCursorType(self.raw) };
        Type::from_raw(raw, self.tu)
    }

    /// Whether the entity may be used, deprecation included.
    #[must_use]
    pub fn availability(self) -> AvailabilityKind {
        AvailabilityKind::from_raw(unsafe { clang_sys::clang_getCursorAvailability(self.raw) })
    }

    /// The entity's full availability story, platform by platform.
    #[must_use]
    pub fn platform_availability(self) -> Availability {
        availability::for_cursor(self.raw)
    }

    /// The language the entity was written in, `None` for cursors that have
    /// no language, such as the translation unit itself.
    #[must_use]
    pub fn language(self) -> Option<Language> {
        Language::from_raw_opt(unsafe { clang_sys::clang_getCursorLanguage(self.raw) })
    }

    /// The entity's linkage, `None` for non-declarations.
    #[must_use]
    pub fn linkage(self) -> Option<Linkage> {
        Linkage::from_raw_opt(unsafe { clang_sys::clang_getCursorLinkage(self.raw) })
    }

    /// The entity's symbol visibility, `None` for non-declarations.
    #[must_use]
    pub fn visibility(self) -> Option<Visibility> {
        Visibility::from_raw_opt(unsafe { clang_sys::clang_getCursorVisibility(self.raw) })
    }

    /// The storage class written on the declaration, `None` for cursors that
    /// cannot carry one.
    #[must_use]
    pub fn storage_class(self) -> Option<StorageClass> {
        StorageClass::from_raw_opt(unsafe { clang_sys::clang_Cursor_getStorageClass(self.raw) })
    }

    /// The C++ access of this member, `None` outside a class.
    #[must_use]
    pub fn access_specifier(self) -> Option<AccessSpecifier> {
        AccessSpecifier::from_raw_opt(unsafe {
            clang_sys::clang_getCXXAccessSpecifier(self.raw)
        })
    }

    /// Whether the declaration carries any attributes.
    #[must_use]
    pub fn has_attributes(self) -> bool {
        unsafe { clang_sys::clang_Cursor_hasAttrs(self.raw) != 0 }
    }

    /// Whether this is an anonymous record declaration.
    #[must_use]
    pub fn is_anonymous(self) -> bool {
        unsafe { clang_sys::clang_Cursor_isAnonymous(self.raw) != 0 }
    }

    /// Whether this field is a bit-field.
    #[must_use]
    pub fn is_bit_field(self) -> bool {
        unsafe { clang_sys::clang_Cursor_isBitField(self.raw) != 0 }
    }

    /// The width of a bit-field in bits, `None` for other cursors.
    #[must_use]
    pub fn bit_field_width(self) -> Option<u32> {
        let width = unsafe { clang_sys::clang_getFieldDeclBitWidth(self.raw) };
        u32::try_from(width).ok()
    }

    /// The offset of this field in bits from the start of its record.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeLayoutError`] when the record is incomplete or
    /// dependent, or when the cursor is not a field.
    pub fn offset_of_field(self) -> Result<usize, TypeLayoutError> {
        TypeLayoutError::check(unsafe { clang_sys::clang_Cursor_getOffsetOfField(self.raw) })
    }

    /// The number of template arguments of a specialization, `None` for
    /// other cursors.
    #[must_use]
    pub fn template_argument_count(self) -> Option<u32> {
        let count = unsafe { clang_sys::clang_Cursor_getNumTemplateArguments(self.raw) };
        u32::try_from(count).ok()
    }

    /// The kind of the template argument at `index`.
    #[must_use]
    pub fn template_argument_kind(self, index: u32) -> Option<TemplateArgumentKind> {
        TemplateArgumentKind::from_raw_opt(unsafe {
            clang_sys::clang_Cursor_getTemplateArgumentKind(self.raw, index)
        })
    }

    /// The type of the template argument at `index`, for type arguments.
    #[must_use]
    pub fn template_argument_type(self, index: u32) -> Option<Type<'tu>> {
        let raw = unsafe { clang_sys::clang_Cursor_getTemplateArgumentType(self.raw, index) };
        Type::from_raw(raw, self.tu)
    }

    /// The value of the integral template argument at `index`.
    #[must_use]
    pub fn template_argument_value(self, index: u32) -> Option<i64> {
        match self.template_argument_kind(index)? {
            TemplateArgumentKind::Integral => {
                Some(unsafe { clang_sys::clang_Cursor_getTemplateArgumentValue(self.raw, index) })
            }
            _ => None,
        }
    }

    /// The raw text of the doc comment attached to this declaration.
    #[must_use]
    pub fn raw_comment(self) -> Option<String> {
        string::to_string_opt(unsafe { clang_sys::clang_Cursor_getRawCommentText(self.raw) })
    }

    /// The first paragraph of the attached doc comment.
    #[must_use]
    pub fn brief_comment(self) -> Option<String> {
        string::to_string_opt(unsafe { clang_sys::clang_Cursor_getBriefCommentText(self.raw) })
    }

    /// The span of the attached doc comment.
    #[must_use]
    pub fn comment_range(self) -> SourceRange<'tu> {
        let raw = unsafe { clang_sys::clang_Cursor_getCommentRange(self.raw) };
        SourceRange::from_raw(raw, self.tu)
    }

    /// The attached doc comment, parsed into its tree form.
    #[must_use]
    pub fn parsed_comment(self) -> Option<FullComment<'tu>> {
        let raw = unsafe { clang_sys::clang_Cursor_getParsedComment(self.raw) };
        FullComment::from_raw(raw, self.tu)
    }

    /// Evaluates the expression this cursor points at, when it is one the
    /// native evaluator can fold at compile time.
    #[must_use]
    pub fn evaluate(self) -> Option<EvalResult> {
        let raw = unsafe { clang_sys::clang_Cursor_Evaluate(self.raw) };
        if raw.is_null() {
            return None;
        }
        Some(EvalResult::from_raw(raw))
    }

    /// Walks this cursor's children, letting `visitor` steer the descent.
    ///
    /// Children are visited in source order. The visitor's verdict after
    /// each child decides whether the walk stops, skips to the next sibling,
    /// or descends. Returns `true` when the walk was cut short by
    /// [`ChildVisit::Abort`].
    ///
    /// A panic inside `visitor` does not unwind across the native frames; it
    /// stops the walk and resumes unwinding from here.
    #[must_use = "reports whether the walk was aborted"]
    pub fn visit_children<F>(self, visitor: F) -> bool
    where
        F: FnMut(Cursor<'tu>) -> ChildVisit,
    {
        struct Data<'a, 'tu, F> {
            tu: &'tu TranslationUnit<'tu>,
            visitor: &'a mut F,
            panic: Option<Box<dyn std::any::Any + Send>>,
        }

        extern "C" fn trampoline<'tu, F>(
            raw: CXCursor,
            _parent: CXCursor,
            data: CXClientData,
        ) -> CXChildVisitResult
        where
            F: FnMut(Cursor<'tu>) -> ChildVisit,
        {
            let data = unsafe { &mut *data.cast::<Data<'_, 'tu, F>>() };
            let cursor = Cursor::from_raw_unchecked(raw, data.tu);
            let visitor = &mut *data.visitor;
            match panic::catch_unwind(AssertUnwindSafe(|| visitor(cursor))) {
                Ok(verdict) => verdict.as_raw(),
                Err(payload) => {
                    data.panic = Some(payload);
                    clang_sys::CXChildVisit_Break
                }
            }
        }

        let mut visitor = visitor;
        let mut data = Data {
            tu: self.tu,
            visitor: &mut visitor,
            panic: None,
        };
        let aborted = unsafe {
            clang_sys::clang_visitChildren(
                self.raw,
                trampoline::<F>,
                std::ptr::addr_of_mut!(data).cast::<c_void>(),
            )
        } != 0;
        if let Some(payload) = data.panic {
            panic::resume_unwind(payload);
        }
        aborted
    }

    /// The direct children of this cursor, in source order.
    #[must_use]
    pub fn children(self) -> Vec<Self> {
        let mut children = Vec::new();
        let _ = self.visit_children(|child| {
            children.push(child);
            ChildVisit::Continue
        });
        children
    }

    /// Lifts this cursor into its typed view.
    #[must_use]
    pub fn classify(self) -> Entity<'tu> {
        match self.kind() {
            CursorKind::FunctionDecl => Entity::Function(FunctionDecl(self)),
            CursorKind::StructDecl => Entity::Struct(StructDecl(self)),
            CursorKind::CxxMethod => Entity::Method(MethodDecl(self)),
            _ => Entity::Other(self),
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_sys::clang_equalCursors(self.raw, other.raw) != 0 }
    }
}

impl Eq for Cursor<'_> {}

impl std::hash::Hash for Cursor<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        unsafe { clang_sys::clang_hashCursor(self.raw) }.hash(state);
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("kind", &self.kind())
            .field("spelling", &self.spelling())
            .finish()
    }
}

/// A cursor classified into the view carrying its extra operations.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'tu> {
    /// A function declaration.
    Function(FunctionDecl<'tu>),
    /// A struct declaration.
    Struct(StructDecl<'tu>),
    /// A C++ method declaration.
    Method(MethodDecl<'tu>),
    /// Any other entity, as a plain cursor.
    Other(Cursor<'tu>),
}

impl<'tu> Entity<'tu> {
    /// The underlying cursor, whatever the classification.
    #[must_use]
    pub fn cursor(self) -> Cursor<'tu> {
        match self {
            Self::Function(function) => function.cursor(),
            Self::Struct(record) => record.cursor(),
            Self::Method(method) => method.cursor(),
            Self::Other(cursor) => cursor,
        }
    }
}

/// A cursor known to be a function declaration.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDecl<'tu>(Cursor<'tu>);

impl<'tu> FunctionDecl<'tu> {
    /// The underlying cursor.
    #[must_use]
    pub fn cursor(self) -> Cursor<'tu> {
        self.0
    }

    /// The function's result type.
    #[must_use]
    pub fn result_type(self) -> Option<Type<'tu>> {
        let raw = unsafe { clang_sys::clang_getCursorResultType(self.0.raw) };
        Type::from_raw(raw, self.0.tu)
    }

    /// The function's parameters, in declaration order.
    #[must_use]
    pub fn parameters(self) -> Vec<Cursor<'tu>> {
        let count = unsafe { clang_sys::clang_Cursor_getNumArguments(self.0.raw) };
        let Ok(count) = u32::try_from(count) else {
            return Vec::new();
        };
        (0..count)
            .filter_map(|i| {
                let raw = unsafe { clang_sys::clang_Cursor_getArgument(self.0.raw, i) };
                Cursor::from_raw(raw, self.0.tu)
            })
            .collect()
    }

    /// Whether the function accepts a variable number of arguments.
    #[must_use]
    pub fn is_variadic(self) -> bool {
        unsafe { clang_sys::clang_Cursor_isVariadic(self.0.raw) != 0 }
    }

    /// The function's calling convention.
    #[must_use]
    pub fn calling_convention(self) -> Option<CallingConvention> {
        self.0.type_of()?.calling_convention()
    }
}

/// A cursor known to be a struct declaration.
#[derive(Debug, Clone, Copy)]
pub struct StructDecl<'tu>(Cursor<'tu>);

impl<'tu> StructDecl<'tu> {
    /// The underlying cursor.
    #[must_use]
    pub fn cursor(self) -> Cursor<'tu> {
        self.0
    }

    /// The struct's fields, in declaration order.
    #[must_use]
    pub fn fields(self) -> Vec<Cursor<'tu>> {
        self.0
            .type_of()
            .and_then(Type::as_record)
            .map(|record| record.fields())
            .unwrap_or_default()
    }
}

/// A cursor known to be a C++ method declaration.
#[derive(Debug, Clone, Copy)]
pub struct MethodDecl<'tu>(Cursor<'tu>);

impl<'tu> MethodDecl<'tu> {
    /// The underlying cursor.
    #[must_use]
    pub fn cursor(self) -> Cursor<'tu> {
        self.0
    }

    /// Whether the method is declared `static`.
    #[must_use]
    pub fn is_static(self) -> bool {
        unsafe { clang_sys::clang_CXXMethod_isStatic(self.0.raw) != 0 }
    }

    /// Whether the method is virtual, explicitly or through overriding.
    #[must_use]
    pub fn is_virtual(self) -> bool {
        unsafe { clang_sys::clang_CXXMethod_isVirtual(self.0.raw) != 0 }
    }

    /// Whether the method is declared `const`.
    #[must_use]
    pub fn is_const(self) -> bool {
        unsafe { clang_sys::clang_CXXMethod_isConst(self.0.raw) != 0 }
    }

    /// Whether the method is pure virtual.
    #[must_use]
    pub fn is_pure_virtual(self) -> bool {
        unsafe { clang_sys::clang_CXXMethod_isPureVirtual(self.0.raw) != 0 }
    }

    /// The methods this method directly overrides.
    #[must_use]
    pub fn overridden_methods(self) -> Vec<Cursor<'tu>> {
        let mut overridden = std::ptr::null_mut();
        let mut count = 0;
        unsafe {
            clang_sys::clang_getOverriddenCursors(self.0.raw, &mut overridden, &mut count);
        }
        if overridden.is_null() {
            return Vec::new();
        }
        let raw = unsafe { std::slice::from_raw_parts(overridden, count as usize) };
        let cursors = raw
            .iter()
            .filter_map(|&raw| Cursor::from_raw(raw, self.0.tu))
            .collect();
        unsafe { clang_sys::clang_disposeOverriddenCursors(overridden) };
        cursors
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn name_ref_options_mirror_the_native_flags() {
        assert_eq!(
            NameRefOptions::WANT_QUALIFIER,
            NameRefOptions(clang_sys::CXNameRange_WantQualifier),
        );
        assert_eq!(
            NameRefOptions::WANT_TEMPLATE_ARGS,
            NameRefOptions(clang_sys::CXNameRange_WantTemplateArgs),
        );
        assert_eq!(
            NameRefOptions::WANT_SINGLE_PIECE,
            NameRefOptions(clang_sys::CXNameRange_WantSinglePiece),
        );
        let combined = NameRefOptions::WANT_QUALIFIER | NameRefOptions::WANT_TEMPLATE_ARGS;
        assert_eq!(combined, NameRefOptions(0x3));
        assert_eq!(NameRefOptions::empty(), NameRefOptions::default());
    }

    #[rstest]
    #[case(ChildVisit::Abort, clang_sys::CXChildVisit_Break)]
    #[case(ChildVisit::Continue, clang_sys::CXChildVisit_Continue)]
    #[case(ChildVisit::Recurse, clang_sys::CXChildVisit_Recurse)]
    fn child_visit_maps_to_native_verdicts(
        #[case] verdict: ChildVisit,
        #[case] raw: CXChildVisitResult,
    ) {
        assert_eq!(verdict.as_raw(), raw);
    }

    #[rstest]
    #[case(clang_sys::CXLinkage_Invalid, None)]
    #[case(clang_sys::CXLinkage_NoLinkage, Some(Linkage::None))]
    #[case(clang_sys::CXLinkage_Internal, Some(Linkage::Internal))]
    #[case(clang_sys::CXLinkage_UniqueExternal, Some(Linkage::UniqueExternal))]
    #[case(clang_sys::CXLinkage_External, Some(Linkage::External))]
    fn linkage_treats_invalid_as_absent(
        #[case] raw: clang_sys::CXLinkageKind,
        #[case] expected: Option<Linkage>,
    ) {
        assert_eq!(Linkage::from_raw_opt(raw), expected);
    }

    #[rstest]
    #[case(clang_sys::CXLanguage_Invalid, None)]
    #[case(clang_sys::CXLanguage_C, Some(Language::C))]
    #[case(clang_sys::CXLanguage_ObjC, Some(Language::ObjC))]
    #[case(clang_sys::CXLanguage_CPlusPlus, Some(Language::CPlusPlus))]
    fn language_treats_invalid_as_absent(
        #[case] raw: clang_sys::CXLanguageKind,
        #[case] expected: Option<Language>,
    ) {
        assert_eq!(Language::from_raw_opt(raw), expected);
    }

    #[rstest]
    #[case(clang_sys::CX_CXXInvalidAccessSpecifier, None)]
    #[case(clang_sys::CX_CXXPublic, Some(AccessSpecifier::Public))]
    #[case(clang_sys::CX_CXXProtected, Some(AccessSpecifier::Protected))]
    #[case(clang_sys::CX_CXXPrivate, Some(AccessSpecifier::Private))]
    fn access_specifier_treats_invalid_as_absent(
        #[case] raw: clang_sys::CX_CXXAccessSpecifier,
        #[case] expected: Option<AccessSpecifier>,
    ) {
        assert_eq!(AccessSpecifier::from_raw_opt(raw), expected);
    }

    #[rstest]
    #[case(clang_sys::CX_SC_Invalid, None)]
    #[case(clang_sys::CX_SC_None, Some(StorageClass::None))]
    #[case(clang_sys::CX_SC_Static, Some(StorageClass::Static))]
    #[case(clang_sys::CX_SC_Register, Some(StorageClass::Register))]
    fn storage_class_treats_invalid_as_absent(
        #[case] raw: clang_sys::CX_StorageClass,
        #[case] expected: Option<StorageClass>,
    ) {
        assert_eq!(StorageClass::from_raw_opt(raw), expected);
    }

    #[rstest]
    #[case(clang_sys::CXTemplateArgumentKind_Invalid, None)]
    #[case(clang_sys::CXTemplateArgumentKind_Null, Some(TemplateArgumentKind::Null))]
    #[case(clang_sys::CXTemplateArgumentKind_Type, Some(TemplateArgumentKind::Type))]
    #[case(clang_sys::CXTemplateArgumentKind_Pack, Some(TemplateArgumentKind::Pack))]
    fn template_argument_kind_treats_invalid_as_absent(
        #[case] raw: clang_sys::CXTemplateArgumentKind,
        #[case] expected: Option<TemplateArgumentKind>,
    ) {
        assert_eq!(TemplateArgumentKind::from_raw_opt(raw), expected);
    }
}
