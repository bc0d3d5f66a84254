//! The closed mirror of libclang's cursor kind space.
//!
//! libclang tags every cursor with one value from a large, versioned
//! enumeration. [`CursorKind`] mirrors that space exhaustively for the
//! targeted libclang version; the mapping is total in both directions and
//! round-trips exactly. A tag outside the mirrored space means the loaded
//! library is newer than this binding targets, and silently coercing it
//! would corrupt every downstream classification, so [`CursorKind::from_raw`]
//! treats it as fatal and reports the raw value.

use clang_sys::CXCursorKind;

/// The kind of entity a cursor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CursorKind {
    // Declarations.
    /// A declaration whose specific kind is not exposed via this interface.
    UnexposedDecl,
    /// A C or C++ struct.
    StructDecl,
    /// A C or C++ union.
    UnionDecl,
    /// A C++ class.
    ClassDecl,
    /// An enumeration.
    EnumDecl,
    /// A field in a struct, union, or C++ class.
    FieldDecl,
    /// An enumerator constant.
    EnumConstantDecl,
    /// A function.
    FunctionDecl,
    /// A variable.
    VarDecl,
    /// A function or method parameter.
    ParmDecl,
    /// An Objective-C `@interface`.
    ObjCInterfaceDecl,
    /// An Objective-C `@interface` for a category.
    ObjCCategoryDecl,
    /// An Objective-C `@protocol` declaration.
    ObjCProtocolDecl,
    /// An Objective-C `@property` declaration.
    ObjCPropertyDecl,
    /// An Objective-C instance variable.
    ObjCIvarDecl,
    /// An Objective-C instance method.
    ObjCInstanceMethodDecl,
    /// An Objective-C class method.
    ObjCClassMethodDecl,
    /// An Objective-C `@implementation`.
    ObjCImplementationDecl,
    /// An Objective-C `@implementation` for a category.
    ObjCCategoryImplDecl,
    /// A typedef.
    TypedefDecl,
    /// A C++ class method.
    CxxMethod,
    /// A C++ namespace.
    Namespace,
    /// A linkage specification, e.g. `extern "C"`.
    LinkageSpec,
    /// A C++ constructor.
    Constructor,
    /// A C++ destructor.
    Destructor,
    /// A C++ conversion function.
    ConversionFunction,
    /// A C++ template type parameter.
    TemplateTypeParameter,
    /// A C++ non-type template parameter.
    NonTypeTemplateParameter,
    /// A C++ template template parameter.
    TemplateTemplateParameter,
    /// A C++ function template.
    FunctionTemplate,
    /// A C++ class template.
    ClassTemplate,
    /// A C++ class template partial specialization.
    ClassTemplatePartialSpecialization,
    /// A C++ namespace alias declaration.
    NamespaceAlias,
    /// A C++ using directive.
    UsingDirective,
    /// A C++ using declaration.
    UsingDeclaration,
    /// A C++ alias declaration, e.g. `using T = int`.
    TypeAliasDecl,
    /// An Objective-C `@synthesize` definition.
    ObjCSynthesizeDecl,
    /// An Objective-C `@dynamic` definition.
    ObjCDynamicDecl,
    /// An access specifier.
    CxxAccessSpecifier,

    // References.
    /// A reference to an Objective-C superclass.
    ObjCSuperClassRef,
    /// A reference to an Objective-C protocol.
    ObjCProtocolRef,
    /// A reference to an Objective-C class.
    ObjCClassRef,
    /// A reference to a type declaration.
    TypeRef,
    /// A base class specifier.
    CxxBaseSpecifier,
    /// A reference to a class template, function template, template
    /// template parameter, or class template partial specialization.
    TemplateRef,
    /// A reference to a namespace or namespace alias.
    NamespaceRef,
    /// A reference to a member of a struct, union, or class in non-expression
    /// context, e.g. a designated initializer.
    MemberRef,
    /// A reference to a labelled statement.
    LabelRef,
    /// A reference to a set of overloaded functions or function templates
    /// that has not yet been resolved to a specific function or template.
    OverloadedDeclRef,
    /// A reference to a variable that occurs in some non-expression context,
    /// e.g. a C++ lambda capture list.
    VariableRef,

    // Invalid cursors.
    /// An invalid file.
    InvalidFile,
    /// No declaration was found at the queried location.
    NoDeclFound,
    /// An entity not yet supported by libclang.
    NotImplemented,
    /// Invalid code.
    InvalidCode,

    // Expressions.
    /// An expression whose specific kind is not exposed via this interface.
    UnexposedExpr,
    /// An expression that refers to some value declaration, such as a
    /// function, variable, or enumerator.
    DeclRefExpr,
    /// An expression that refers to a member of a struct, union, class, or
    /// Objective-C class.
    MemberRefExpr,
    /// A call expression.
    CallExpr,
    /// An Objective-C message send.
    ObjCMessageExpr,
    /// A block literal expression.
    BlockExpr,
    /// An integer literal.
    IntegerLiteral,
    /// A floating-point literal.
    FloatingLiteral,
    /// An imaginary-number literal.
    ImaginaryLiteral,
    /// A string literal.
    StringLiteral,
    /// A character literal.
    CharacterLiteral,
    /// A parenthesized expression.
    ParenExpr,
    /// A unary-operator expression.
    UnaryOperator,
    /// An array subscript expression.
    ArraySubscriptExpr,
    /// A binary-operator expression.
    BinaryOperator,
    /// A compound assignment such as `+=`.
    CompoundAssignOperator,
    /// The ternary `?:` operator.
    ConditionalOperator,
    /// A C-style cast expression.
    CStyleCastExpr,
    /// A compound literal expression.
    CompoundLiteralExpr,
    /// An initializer list.
    InitListExpr,
    /// The GNU address-of-label extension, `&&label`.
    AddrLabelExpr,
    /// The GNU statement-expression extension.
    StmtExpr,
    /// A C11 generic selection expression.
    GenericSelectionExpr,
    /// The GNU `__null` extension.
    GnuNullExpr,
    /// A C++ `static_cast<>` expression.
    CxxStaticCastExpr,
    /// A C++ `dynamic_cast<>` expression.
    CxxDynamicCastExpr,
    /// A C++ `reinterpret_cast<>` expression.
    CxxReinterpretCastExpr,
    /// A C++ `const_cast<>` expression.
    CxxConstCastExpr,
    /// A C++ functional cast, e.g. `T(a)`.
    CxxFunctionalCastExpr,
    /// A C++ `typeid` expression.
    CxxTypeidExpr,
    /// A C++ boolean literal.
    CxxBoolLiteralExpr,
    /// A C++ `nullptr` literal.
    CxxNullPtrLiteralExpr,
    /// A C++ `this` expression.
    CxxThisExpr,
    /// A C++ `throw` expression.
    CxxThrowExpr,
    /// A C++ `new` expression.
    CxxNewExpr,
    /// A C++ `delete` expression.
    CxxDeleteExpr,
    /// A GNU unary expression extension such as `__alignof__`.
    UnaryExpr,
    /// An Objective-C string literal.
    ObjCStringLiteral,
    /// An Objective-C `@encode` expression.
    ObjCEncodeExpr,
    /// An Objective-C `@selector` expression.
    ObjCSelectorExpr,
    /// An Objective-C `@protocol` expression.
    ObjCProtocolExpr,
    /// An Objective-C ARC bridged cast, e.g. `(__bridge id)`.
    ObjCBridgedCastExpr,
    /// A C++11 pack expansion.
    PackExpansionExpr,
    /// A C++11 `sizeof...` expression.
    SizeOfPackExpr,
    /// A C++11 lambda expression.
    LambdaExpr,
    /// An Objective-C boolean literal.
    ObjCBoolLiteralExpr,
    /// An Objective-C `self` expression.
    ObjCSelfExpr,
    /// An OpenMP array section expression.
    OmpArraySectionExpr,
    /// An Objective-C `@available` check.
    ObjCAvailabilityCheckExpr,

    // Statements.
    /// A statement whose specific kind is not exposed via this interface.
    UnexposedStmt,
    /// A labelled statement.
    LabelStmt,
    /// A compound statement, `{ ... }`.
    CompoundStmt,
    /// A `case` statement.
    CaseStmt,
    /// A `default` statement.
    DefaultStmt,
    /// An `if` statement.
    IfStmt,
    /// A `switch` statement.
    SwitchStmt,
    /// A `while` statement.
    WhileStmt,
    /// A `do` statement.
    DoStmt,
    /// A `for` statement.
    ForStmt,
    /// A `goto` statement.
    GotoStmt,
    /// An indirect `goto` statement.
    IndirectGotoStmt,
    /// A `continue` statement.
    ContinueStmt,
    /// A `break` statement.
    BreakStmt,
    /// A `return` statement.
    ReturnStmt,
    /// A GCC-style inline assembly statement.
    AsmStmt,
    /// An Objective-C `@try`/`@catch`/`@finally` statement.
    ObjCAtTryStmt,
    /// An Objective-C `@catch` statement.
    ObjCAtCatchStmt,
    /// An Objective-C `@finally` statement.
    ObjCAtFinallyStmt,
    /// An Objective-C `@throw` statement.
    ObjCAtThrowStmt,
    /// An Objective-C `@synchronized` statement.
    ObjCAtSynchronizedStmt,
    /// An Objective-C `@autoreleasepool` statement.
    ObjCAutoreleasePoolStmt,
    /// An Objective-C collection `for` statement.
    ObjCForCollectionStmt,
    /// A C++ `catch` statement.
    CxxCatchStmt,
    /// A C++ `try` statement.
    CxxTryStmt,
    /// A C++11 range-based `for` statement.
    CxxForRangeStmt,
    /// A Windows structured exception handling `__try` statement.
    SehTryStmt,
    /// A Windows structured exception handling `__except` statement.
    SehExceptStmt,
    /// A Windows structured exception handling `__finally` statement.
    SehFinallyStmt,
    /// A Windows structured exception handling `__leave` statement.
    SehLeaveStmt,
    /// A Microsoft-style inline assembly statement.
    MsAsmStmt,
    /// The null statement, `;`.
    NullStmt,
    /// An adaptor for mixing declarations with statements and expressions.
    DeclStmt,

    // OpenMP directives.
    /// An OpenMP `parallel` directive.
    OmpParallelDirective,
    /// An OpenMP `simd` directive.
    OmpSimdDirective,
    /// An OpenMP `for` directive.
    OmpForDirective,
    /// An OpenMP `sections` directive.
    OmpSectionsDirective,
    /// An OpenMP `section` directive.
    OmpSectionDirective,
    /// An OpenMP `single` directive.
    OmpSingleDirective,
    /// An OpenMP `parallel for` directive.
    OmpParallelForDirective,
    /// An OpenMP `parallel sections` directive.
    OmpParallelSectionsDirective,
    /// An OpenMP `task` directive.
    OmpTaskDirective,
    /// An OpenMP `master` directive.
    OmpMasterDirective,
    /// An OpenMP `critical` directive.
    OmpCriticalDirective,
    /// An OpenMP `taskyield` directive.
    OmpTaskyieldDirective,
    /// An OpenMP `barrier` directive.
    OmpBarrierDirective,
    /// An OpenMP `taskwait` directive.
    OmpTaskwaitDirective,
    /// An OpenMP `flush` directive.
    OmpFlushDirective,
    /// An OpenMP `ordered` directive.
    OmpOrderedDirective,
    /// An OpenMP `atomic` directive.
    OmpAtomicDirective,
    /// An OpenMP `for simd` directive.
    OmpForSimdDirective,
    /// An OpenMP `parallel for simd` directive.
    OmpParallelForSimdDirective,
    /// An OpenMP `target` directive.
    OmpTargetDirective,
    /// An OpenMP `teams` directive.
    OmpTeamsDirective,
    /// An OpenMP `taskgroup` directive.
    OmpTaskgroupDirective,
    /// An OpenMP `cancellation point` directive.
    OmpCancellationPointDirective,
    /// An OpenMP `cancel` directive.
    OmpCancelDirective,
    /// An OpenMP `target data` directive.
    OmpTargetDataDirective,
    /// An OpenMP `taskloop` directive.
    OmpTaskLoopDirective,
    /// An OpenMP `taskloop simd` directive.
    OmpTaskLoopSimdDirective,
    /// An OpenMP `distribute` directive.
    OmpDistributeDirective,
    /// An OpenMP `target enter data` directive.
    OmpTargetEnterDataDirective,
    /// An OpenMP `target exit data` directive.
    OmpTargetExitDataDirective,
    /// An OpenMP `target parallel` directive.
    OmpTargetParallelDirective,
    /// An OpenMP `target parallel for` directive.
    OmpTargetParallelForDirective,
    /// An OpenMP `target update` directive.
    OmpTargetUpdateDirective,
    /// An OpenMP `distribute parallel for` directive.
    OmpDistributeParallelForDirective,
    /// An OpenMP `distribute parallel for simd` directive.
    OmpDistributeParallelForSimdDirective,
    /// An OpenMP `distribute simd` directive.
    OmpDistributeSimdDirective,
    /// An OpenMP `target parallel for simd` directive.
    OmpTargetParallelForSimdDirective,

    /// The translation unit itself.
    TranslationUnit,

    // Attributes.
    /// An attribute whose specific kind is not exposed via this interface.
    UnexposedAttr,
    /// An `IBAction` attribute.
    IbActionAttr,
    /// An `IBOutlet` attribute.
    IbOutletAttr,
    /// An `IBOutletCollection` attribute.
    IbOutletCollectionAttr,
    /// A C++11 `final` specifier.
    CxxFinalAttr,
    /// A C++11 `override` specifier.
    CxxOverrideAttr,
    /// An `annotate` attribute.
    AnnotateAttr,
    /// An asm label attribute.
    AsmLabelAttr,
    /// A `packed` attribute.
    PackedAttr,
    /// A `pure` attribute.
    PureAttr,
    /// A `const` attribute.
    ConstAttr,
    /// A `noduplicate` attribute.
    NoDuplicateAttr,
    /// A CUDA `__constant__` attribute.
    CudaConstantAttr,
    /// A CUDA `__device__` attribute.
    CudaDeviceAttr,
    /// A CUDA `__global__` attribute.
    CudaGlobalAttr,
    /// A CUDA `__host__` attribute.
    CudaHostAttr,
    /// A CUDA `__shared__` attribute.
    CudaSharedAttr,
    /// A `visibility` attribute.
    VisibilityAttr,
    /// A `dllexport` attribute.
    DllExport,
    /// A `dllimport` attribute.
    DllImport,

    // Preprocessing.
    /// A preprocessing directive.
    PreprocessingDirective,
    /// A macro definition.
    MacroDefinition,
    /// A macro expansion.
    MacroExpansion,
    /// An inclusion directive.
    InclusionDirective,

    // Additional entities.
    /// A module import declaration.
    ModuleImportDecl,
    /// A C++ alias template declaration.
    TypeAliasTemplateDecl,
    /// A `static_assert` or `_Static_assert`.
    StaticAssert,
    /// A C++ friend declaration.
    FriendDecl,
    /// A code-completion overload candidate.
    OverloadCandidate,
}

impl CursorKind {
    /// Maps a native tag to its kind.
    ///
    /// # Panics
    ///
    /// Panics with the raw tag value when the loaded libclang reports a kind
    /// outside the mirrored space. This is a version mismatch, not a
    /// recoverable condition: misclassifying an AST node would silently
    /// corrupt traversal results.
    #[must_use]
    pub fn from_raw(raw: CXCursorKind) -> Self {
        match raw {
            clang_sys::CXCursor_UnexposedDecl => Self::UnexposedDecl,
            clang_sys::CXCursor_StructDecl => Self::StructDecl,
            clang_sys::CXCursor_UnionDecl => Self::UnionDecl,
            clang_sys::CXCursor_ClassDecl => Self::ClassDecl,
            clang_sys::CXCursor_EnumDecl => Self::EnumDecl,
            clang_sys::CXCursor_FieldDecl => Self::FieldDecl,
            clang_sys::CXCursor_EnumConstantDecl => Self::EnumConstantDecl,
            clang_sys::CXCursor_FunctionDecl => Self::FunctionDecl,
            clang_sys::CXCursor_VarDecl => Self::VarDecl,
            clang_sys::CXCursor_ParmDecl => Self::ParmDecl,
            clang_sys::CXCursor_ObjCInterfaceDecl => Self::ObjCInterfaceDecl,
            clang_sys::CXCursor_ObjCCategoryDecl => Self::ObjCCategoryDecl,
            clang_sys::CXCursor_ObjCProtocolDecl => Self::ObjCProtocolDecl,
            clang_sys::CXCursor_ObjCPropertyDecl => Self::ObjCPropertyDecl,
            clang_sys::CXCursor_ObjCIvarDecl => Self::ObjCIvarDecl,
            clang_sys::CXCursor_ObjCInstanceMethodDecl => Self::ObjCInstanceMethodDecl,
            clang_sys::CXCursor_ObjCClassMethodDecl => Self::ObjCClassMethodDecl,
            clang_sys::CXCursor_ObjCImplementationDecl => Self::ObjCImplementationDecl,
            clang_sys::CXCursor_ObjCCategoryImplDecl => Self::ObjCCategoryImplDecl,
            clang_sys::CXCursor_TypedefDecl => Self::TypedefDecl,
            clang_sys::CXCursor_CXXMethod => Self::CxxMethod,
            clang_sys::CXCursor_Namespace => Self::Namespace,
            clang_sys::CXCursor_LinkageSpec => Self::LinkageSpec,
            clang_sys::CXCursor_Constructor => Self::Constructor,
            clang_sys::CXCursor_Destructor => Self::Destructor,
            clang_sys::CXCursor_ConversionFunction => Self::ConversionFunction,
            clang_sys::CXCursor_TemplateTypeParameter => Self::TemplateTypeParameter,
            clang_sys::CXCursor_NonTypeTemplateParameter => Self::NonTypeTemplateParameter,
            clang_sys::CXCursor_TemplateTemplateParameter => Self::TemplateTemplateParameter,
            clang_sys::CXCursor_FunctionTemplate => Self::FunctionTemplate,
            clang_sys::CXCursor_ClassTemplate => Self::ClassTemplate,
            clang_sys::CXCursor_ClassTemplatePartialSpecialization => {
                Self::ClassTemplatePartialSpecialization
            }
            clang_sys::CXCursor_NamespaceAlias => Self::NamespaceAlias,
            clang_sys::CXCursor_UsingDirective => Self::UsingDirective,
            clang_sys::CXCursor_UsingDeclaration => Self::UsingDeclaration,
            clang_sys::CXCursor_TypeAliasDecl => Self::TypeAliasDecl,
            clang_sys::CXCursor_ObjCSynthesizeDecl => Self::ObjCSynthesizeDecl,
            clang_sys::CXCursor_ObjCDynamicDecl => Self::ObjCDynamicDecl,
            clang_sys::CXCursor_CXXAccessSpecifier => Self::CxxAccessSpecifier,
            clang_sys::CXCursor_ObjCSuperClassRef => Self::ObjCSuperClassRef,
            clang_sys::CXCursor_ObjCProtocolRef => Self::ObjCProtocolRef,
            clang_sys::CXCursor_ObjCClassRef => Self::ObjCClassRef,
            clang_sys::CXCursor_TypeRef => Self::TypeRef,
            clang_sys::CXCursor_CXXBaseSpecifier => Self::CxxBaseSpecifier,
            clang_sys::CXCursor_TemplateRef => Self::TemplateRef,
            clang_sys::CXCursor_NamespaceRef => Self::NamespaceRef,
            clang_sys::CXCursor_MemberRef => Self::MemberRef,
            clang_sys::CXCursor_LabelRef => Self::LabelRef,
            clang_sys::CXCursor_OverloadedDeclRef => Self::OverloadedDeclRef,
            clang_sys::CXCursor_VariableRef => Self::VariableRef,
            clang_sys::CXCursor_InvalidFile => Self::InvalidFile,
            clang_sys::CXCursor_NoDeclFound => Self::NoDeclFound,
            clang_sys::CXCursor_NotImplemented => Self::NotImplemented,
            clang_sys::CXCursor_InvalidCode => Self::InvalidCode,
            clang_sys::CXCursor_UnexposedExpr => Self::UnexposedExpr,
            clang_sys::CXCursor_DeclRefExpr => Self::DeclRefExpr,
            clang_sys::CXCursor_MemberRefExpr => Self::MemberRefExpr,
            clang_sys::CXCursor_CallExpr => Self::CallExpr,
            clang_sys::CXCursor_ObjCMessageExpr => Self::ObjCMessageExpr,
            clang_sys::CXCursor_BlockExpr => Self::BlockExpr,
            clang_sys::CXCursor_IntegerLiteral => Self::IntegerLiteral,
            clang_sys::CXCursor_FloatingLiteral => Self::FloatingLiteral,
            clang_sys::CXCursor_ImaginaryLiteral => Self::ImaginaryLiteral,
            clang_sys::CXCursor_StringLiteral => Self::StringLiteral,
            clang_sys::CXCursor_CharacterLiteral => Self::CharacterLiteral,
            clang_sys::CXCursor_ParenExpr => Self::ParenExpr,
            clang_sys::CXCursor_UnaryOperator => Self::UnaryOperator,
            clang_sys::CXCursor_ArraySubscriptExpr => Self::ArraySubscriptExpr,
            clang_sys::CXCursor_BinaryOperator => Self::BinaryOperator,
            clang_sys::CXCursor_CompoundAssignOperator => Self::CompoundAssignOperator,
            clang_sys::CXCursor_ConditionalOperator => Self::ConditionalOperator,
            clang_sys::CXCursor_CStyleCastExpr => Self::CStyleCastExpr,
            clang_sys::CXCursor_CompoundLiteralExpr => Self::CompoundLiteralExpr,
            clang_sys::CXCursor_InitListExpr => Self::InitListExpr,
            clang_sys::CXCursor_AddrLabelExpr => Self::AddrLabelExpr,
            clang_sys::CXCursor_StmtExpr => Self::StmtExpr,
            clang_sys::CXCursor_GenericSelectionExpr => Self::GenericSelectionExpr,
            clang_sys::CXCursor_GNUNullExpr => Self::GnuNullExpr,
            clang_sys::CXCursor_CXXStaticCastExpr => Self::CxxStaticCastExpr,
            clang_sys::CXCursor_CXXDynamicCastExpr => Self::CxxDynamicCastExpr,
            clang_sys::CXCursor_CXXReinterpretCastExpr => Self::CxxReinterpretCastExpr,
            clang_sys::CXCursor_CXXConstCastExpr => Self::CxxConstCastExpr,
            clang_sys::CXCursor_CXXFunctionalCastExpr => Self::CxxFunctionalCastExpr,
            clang_sys::CXCursor_CXXTypeidExpr => Self::CxxTypeidExpr,
            clang_sys::CXCursor_CXXBoolLiteralExpr => Self::CxxBoolLiteralExpr,
            clang_sys::CXCursor_CXXNullPtrLiteralExpr => Self::CxxNullPtrLiteralExpr,
            clang_sys::CXCursor_CXXThisExpr => Self::CxxThisExpr,
            clang_sys::CXCursor_CXXThrowExpr => Self::CxxThrowExpr,
            clang_sys::CXCursor_CXXNewExpr => Self::CxxNewExpr,
            clang_sys::CXCursor_CXXDeleteExpr => Self::CxxDeleteExpr,
            clang_sys::CXCursor_UnaryExpr => Self::UnaryExpr,
            clang_sys::CXCursor_ObjCStringLiteral => Self::ObjCStringLiteral,
            clang_sys::CXCursor_ObjCEncodeExpr => Self::ObjCEncodeExpr,
            clang_sys::CXCursor_ObjCSelectorExpr => Self::ObjCSelectorExpr,
            clang_sys::CXCursor_ObjCProtocolExpr => Self::ObjCProtocolExpr,
            clang_sys::CXCursor_ObjCBridgedCastExpr => Self::ObjCBridgedCastExpr,
            clang_sys::CXCursor_PackExpansionExpr => Self::PackExpansionExpr,
            clang_sys::CXCursor_SizeOfPackExpr => Self::SizeOfPackExpr,
            clang_sys::CXCursor_LambdaExpr => Self::LambdaExpr,
            clang_sys::CXCursor_ObjCBoolLiteralExpr => Self::ObjCBoolLiteralExpr,
            clang_sys::CXCursor_ObjCSelfExpr => Self::ObjCSelfExpr,
            clang_sys::CXCursor_OMPArraySectionExpr => Self::OmpArraySectionExpr,
            clang_sys::CXCursor_ObjCAvailabilityCheckExpr => Self::ObjCAvailabilityCheckExpr,
            clang_sys::CXCursor_UnexposedStmt => Self::UnexposedStmt,
            clang_sys::CXCursor_LabelStmt => Self::LabelStmt,
            clang_sys::CXCursor_CompoundStmt => Self::CompoundStmt,
            clang_sys::CXCursor_CaseStmt => Self::CaseStmt,
            clang_sys::CXCursor_DefaultStmt => Self::DefaultStmt,
            clang_sys::CXCursor_IfStmt => Self::IfStmt,
            clang_sys::CXCursor_SwitchStmt => Self::SwitchStmt,
            clang_sys::CXCursor_WhileStmt => Self::WhileStmt,
            clang_sys::CXCursor_DoStmt => Self::DoStmt,
            clang_sys::CXCursor_ForStmt => Self::ForStmt,
            clang_sys::CXCursor_GotoStmt => Self::GotoStmt,
            clang_sys::CXCursor_IndirectGotoStmt => Self::IndirectGotoStmt,
            clang_sys::CXCursor_ContinueStmt => Self::ContinueStmt,
            clang_sys::CXCursor_BreakStmt => Self::BreakStmt,
            clang_sys::CXCursor_ReturnStmt => Self::ReturnStmt,
            clang_sys::CXCursor_AsmStmt => Self::AsmStmt,
            clang_sys::CXCursor_ObjCAtTryStmt => Self::ObjCAtTryStmt,
            clang_sys::CXCursor_ObjCAtCatchStmt => Self::ObjCAtCatchStmt,
            clang_sys::CXCursor_ObjCAtFinallyStmt => Self::ObjCAtFinallyStmt,
            clang_sys::CXCursor_ObjCAtThrowStmt => Self::ObjCAtThrowStmt,
            clang_sys::CXCursor_ObjCAtSynchronizedStmt => Self::ObjCAtSynchronizedStmt,
            clang_sys::CXCursor_ObjCAutoreleasePoolStmt => Self::ObjCAutoreleasePoolStmt,
            clang_sys::CXCursor_ObjCForCollectionStmt => Self::ObjCForCollectionStmt,
            clang_sys::CXCursor_CXXCatchStmt => Self::CxxCatchStmt,
            clang_sys::CXCursor_CXXTryStmt => Self::CxxTryStmt,
            clang_sys::CXCursor_CXXForRangeStmt => Self::CxxForRangeStmt,
            clang_sys::CXCursor_SEHTryStmt => Self::SehTryStmt,
            clang_sys::CXCursor_SEHExceptStmt => Self::SehExceptStmt,
            clang_sys::CXCursor_SEHFinallyStmt => Self::SehFinallyStmt,
            clang_sys::CXCursor_SEHLeaveStmt => Self::SehLeaveStmt,
            clang_sys::CXCursor_MSAsmStmt => Self::MsAsmStmt,
            clang_sys::CXCursor_NullStmt => Self::NullStmt,
            clang_sys::CXCursor_DeclStmt => Self::DeclStmt,
            clang_sys::CXCursor_OMPParallelDirective => Self::OmpParallelDirective,
            clang_sys::CXCursor_OMPSimdDirective => Self::OmpSimdDirective,
            clang_sys::CXCursor_OMPForDirective => Self::OmpForDirective,
            clang_sys::CXCursor_OMPSectionsDirective => Self::OmpSectionsDirective,
            clang_sys::CXCursor_OMPSectionDirective => Self::OmpSectionDirective,
            clang_sys::CXCursor_OMPSingleDirective => Self::OmpSingleDirective,
            clang_sys::CXCursor_OMPParallelForDirective => Self::OmpParallelForDirective,
            clang_sys::CXCursor_OMPParallelSectionsDirective => Self::OmpParallelSectionsDirective,
            clang_sys::CXCursor_OMPTaskDirective => Self::OmpTaskDirective,
            clang_sys::CXCursor_OMPMasterDirective => Self::OmpMasterDirective,
            clang_sys::CXCursor_OMPCriticalDirective => Self::OmpCriticalDirective,
            clang_sys::CXCursor_OMPTaskyieldDirective => Self::OmpTaskyieldDirective,
            clang_sys::CXCursor_OMPBarrierDirective => Self::OmpBarrierDirective,
            clang_sys::CXCursor_OMPTaskwaitDirective => Self::OmpTaskwaitDirective,
            clang_sys::CXCursor_OMPFlushDirective => Self::OmpFlushDirective,
            clang_sys::CXCursor_OMPOrderedDirective => Self::OmpOrderedDirective,
            clang_sys::CXCursor_OMPAtomicDirective => Self::OmpAtomicDirective,
            clang_sys::CXCursor_OMPForSimdDirective => Self::OmpForSimdDirective,
            clang_sys::CXCursor_OMPParallelForSimdDirective => Self::OmpParallelForSimdDirective,
            clang_sys::CXCursor_OMPTargetDirective => Self::OmpTargetDirective,
            clang_sys::CXCursor_OMPTeamsDirective => Self::OmpTeamsDirective,
            clang_sys::CXCursor_OMPTaskgroupDirective => Self::OmpTaskgroupDirective,
            clang_sys::CXCursor_OMPCancellationPointDirective => {
                Self::OmpCancellationPointDirective
            }
            clang_sys::CXCursor_OMPCancelDirective => Self::OmpCancelDirective,
            clang_sys::CXCursor_OMPTargetDataDirective => Self::OmpTargetDataDirective,
            clang_sys::CXCursor_OMPTaskLoopDirective => Self::OmpTaskLoopDirective,
            clang_sys::CXCursor_OMPTaskLoopSimdDirective => Self::OmpTaskLoopSimdDirective,
            clang_sys::CXCursor_OMPDistributeDirective => Self::OmpDistributeDirective,
            clang_sys::CXCursor_OMPTargetEnterDataDirective => Self::OmpTargetEnterDataDirective,
            clang_sys::CXCursor_OMPTargetExitDataDirective => Self::OmpTargetExitDataDirective,
            clang_sys::CXCursor_OMPTargetParallelDirective => Self::OmpTargetParallelDirective,
            clang_sys::CXCursor_OMPTargetParallelForDirective => {
                Self::OmpTargetParallelForDirective
            }
            clang_sys::CXCursor_OMPTargetUpdateDirective => Self::OmpTargetUpdateDirective,
            clang_sys::CXCursor_OMPDistributeParallelForDirective => {
                Self::OmpDistributeParallelForDirective
            }
            clang_sys::CXCursor_OMPDistributeParallelForSimdDirective => {
                Self::OmpDistributeParallelForSimdDirective
            }
            clang_sys::CXCursor_OMPDistributeSimdDirective => Self::OmpDistributeSimdDirective,
            clang_sys::CXCursor_OMPTargetParallelForSimdDirective => {
                Self::OmpTargetParallelForSimdDirective
            }
            clang_sys::CXCursor_TranslationUnit => Self::TranslationUnit,
            clang_sys::CXCursor_UnexposedAttr => Self::UnexposedAttr,
            clang_sys::CXCursor_IBActionAttr => Self::IbActionAttr,
            clang_sys::CXCursor_IBOutletAttr => Self::IbOutletAttr,
            clang_sys::CXCursor_IBOutletCollectionAttr => Self::IbOutletCollectionAttr,
            clang_sys::CXCursor_CXXFinalAttr => Self::CxxFinalAttr,
            clang_sys::CXCursor_CXXOverrideAttr => Self::CxxOverrideAttr,
            clang_sys::CXCursor_AnnotateAttr => Self::AnnotateAttr,
            clang_sys::CXCursor_AsmLabelAttr => Self::AsmLabelAttr,
            clang_sys::CXCursor_PackedAttr => Self::PackedAttr,
            clang_sys::CXCursor_PureAttr => Self::PureAttr,
            clang_sys::CXCursor_ConstAttr => Self::ConstAttr,
            clang_sys::CXCursor_NoDuplicateAttr => Self::NoDuplicateAttr,
            clang_sys::CXCursor_CUDAConstantAttr => Self::CudaConstantAttr,
            clang_sys::CXCursor_CUDADeviceAttr => Self::CudaDeviceAttr,
            clang_sys::CXCursor_CUDAGlobalAttr => Self::CudaGlobalAttr,
            clang_sys::CXCursor_CUDAHostAttr => Self::CudaHostAttr,
            clang_sys::CXCursor_CUDASharedAttr => Self::CudaSharedAttr,
            clang_sys::CXCursor_VisibilityAttr => Self::VisibilityAttr,
            clang_sys::CXCursor_DLLExport => Self::DllExport,
            clang_sys::CXCursor_DLLImport => Self::DllImport,
            clang_sys::CXCursor_PreprocessingDirective => Self::PreprocessingDirective,
            clang_sys::CXCursor_MacroDefinition => Self::MacroDefinition,
            clang_sys::CXCursor_MacroExpansion => Self::MacroExpansion,
            clang_sys::CXCursor_InclusionDirective => Self::InclusionDirective,
            clang_sys::CXCursor_ModuleImportDecl => Self::ModuleImportDecl,
            clang_sys::CXCursor_TypeAliasTemplateDecl => Self::TypeAliasTemplateDecl,
            clang_sys::CXCursor_StaticAssert => Self::StaticAssert,
            clang_sys::CXCursor_FriendDecl => Self::FriendDecl,
            clang_sys::CXCursor_OverloadCandidate => Self::OverloadCandidate,
            other => panic!("unsupported CXCursorKind: {other}"),
        }
    }

    /// Maps this kind back to its native tag. Exact inverse of
    /// [`CursorKind::from_raw`].
    #[must_use]
    pub fn as_raw(self) -> CXCursorKind {
        match self {
            Self::UnexposedDecl => clang_sys::CXCursor_UnexposedDecl,
            Self::StructDecl => clang_sys::CXCursor_StructDecl,
            Self::UnionDecl => clang_sys::CXCursor_UnionDecl,
            Self::ClassDecl => clang_sys::CXCursor_ClassDecl,
            Self::EnumDecl => clang_sys::CXCursor_EnumDecl,
            Self::FieldDecl => clang_sys::CXCursor_FieldDecl,
            Self::EnumConstantDecl => clang_sys::CXCursor_EnumConstantDecl,
            Self::FunctionDecl => clang_sys::CXCursor_FunctionDecl,
            Self::VarDecl => clang_sys::CXCursor_VarDecl,
            Self::ParmDecl => clang_sys::CXCursor_ParmDecl,
            Self::ObjCInterfaceDecl => clang_sys::CXCursor_ObjCInterfaceDecl,
            Self::ObjCCategoryDecl => clang_sys::CXCursor_ObjCCategoryDecl,
            Self::ObjCProtocolDecl => clang_sys::CXCursor_ObjCProtocolDecl,
            Self::ObjCPropertyDecl => clang_sys::CXCursor_ObjCPropertyDecl,
            Self::ObjCIvarDecl => clang_sys::CXCursor_ObjCIvarDecl,
            Self::ObjCInstanceMethodDecl => clang_sys::CXCursor_ObjCInstanceMethodDecl,
            Self::ObjCClassMethodDecl => clang_sys::CXCursor_ObjCClassMethodDecl,
            Self::ObjCImplementationDecl => clang_sys::CXCursor_ObjCImplementationDecl,
            Self::ObjCCategoryImplDecl => clang_sys::CXCursor_ObjCCategoryImplDecl,
            Self::TypedefDecl => clang_sys::CXCursor_TypedefDecl,
            Self::CxxMethod => clang_sys::CXCursor_CXXMethod,
            Self::Namespace => clang_sys::CXCursor_Namespace,
            Self::LinkageSpec => clang_sys::CXCursor_LinkageSpec,
            Self::Constructor => clang_sys::CXCursor_Constructor,
            Self::Destructor => clang_sys::CXCursor_Destructor,
            Self::ConversionFunction => clang_sys::CXCursor_ConversionFunction,
            Self::TemplateTypeParameter => clang_sys::CXCursor_TemplateTypeParameter,
            Self::NonTypeTemplateParameter => clang_sys::CXCursor_NonTypeTemplateParameter,
            Self::TemplateTemplateParameter => clang_sys::CXCursor_TemplateTemplateParameter,
            Self::FunctionTemplate => clang_sys::CXCursor_FunctionTemplate,
            Self::ClassTemplate => clang_sys::CXCursor_ClassTemplate,
            Self::ClassTemplatePartialSpecialization => {
                clang_sys::CXCursor_ClassTemplatePartialSpecialization
            }
            Self::NamespaceAlias => clang_sys::CXCursor_NamespaceAlias,
            Self::UsingDirective => clang_sys::CXCursor_UsingDirective,
            Self::UsingDeclaration => clang_sys::CXCursor_UsingDeclaration,
            Self::TypeAliasDecl => clang_sys::CXCursor_TypeAliasDecl,
            Self::ObjCSynthesizeDecl => clang_sys::CXCursor_ObjCSynthesizeDecl,
            Self::ObjCDynamicDecl => clang_sys::CXCursor_ObjCDynamicDecl,
            Self::CxxAccessSpecifier => clang_sys::CXCursor_CXXAccessSpecifier,
            Self::ObjCSuperClassRef => clang_sys::CXCursor_ObjCSuperClassRef,
            Self::ObjCProtocolRef => clang_sys::CXCursor_ObjCProtocolRef,
            Self::ObjCClassRef => clang_sys::CXCursor_ObjCClassRef,
            Self::TypeRef => clang_sys::CXCursor_TypeRef,
            Self::CxxBaseSpecifier => clang_sys::CXCursor_CXXBaseSpecifier,
            Self::TemplateRef => clang_sys::CXCursor_TemplateRef,
            Self::NamespaceRef => clang_sys::CXCursor_NamespaceRef,
            Self::MemberRef => clang_sys::CXCursor_MemberRef,
            Self::LabelRef => clang_sys::CXCursor_LabelRef,
            Self::OverloadedDeclRef => clang_sys::CXCursor_OverloadedDeclRef,
            Self::VariableRef => clang_sys::CXCursor_VariableRef,
            Self::InvalidFile => clang_sys::CXCursor_InvalidFile,
            Self::NoDeclFound => clang_sys::CXCursor_NoDeclFound,
            Self::NotImplemented => clang_sys::CXCursor_NotImplemented,
            Self::InvalidCode => clang_sys::CXCursor_InvalidCode,
            Self::UnexposedExpr => clang_sys::CXCursor_UnexposedExpr,
            Self::DeclRefExpr => clang_sys::CXCursor_DeclRefExpr,
            Self::MemberRefExpr => clang_sys::CXCursor_MemberRefExpr,
            Self::CallExpr => clang_sys::CXCursor_CallExpr,
            Self::ObjCMessageExpr => clang_sys::CXCursor_ObjCMessageExpr,
            Self::BlockExpr => clang_sys::CXCursor_BlockExpr,
            Self::IntegerLiteral => clang_sys::CXCursor_IntegerLiteral,
            Self::FloatingLiteral => clang_sys::CXCursor_FloatingLiteral,
            Self::ImaginaryLiteral => clang_sys::CXCursor_ImaginaryLiteral,
            Self::StringLiteral => clang_sys::CXCursor_StringLiteral,
            Self::CharacterLiteral => clang_sys::CXCursor_CharacterLiteral,
            Self::ParenExpr => clang_sys::CXCursor_ParenExpr,
            Self::UnaryOperator => clang_sys::CXCursor_UnaryOperator,
            Self::ArraySubscriptExpr => clang_sys::CXCursor_ArraySubscriptExpr,
            Self::BinaryOperator => clang_sys::CXCursor_BinaryOperator,
            Self::CompoundAssignOperator => clang_sys::CXCursor_CompoundAssignOperator,
            Self::ConditionalOperator => clang_sys::CXCursor_ConditionalOperator,
            Self::CStyleCastExpr => clang_sys::CXCursor_CStyleCastExpr,
            Self::CompoundLiteralExpr => clang_sys::CXCursor_CompoundLiteralExpr,
            Self::InitListExpr => clang_sys::CXCursor_InitListExpr,
            Self::AddrLabelExpr => clang_sys::CXCursor_AddrLabelExpr,
            Self::StmtExpr => clang_sys::CXCursor_StmtExpr,
            Self::GenericSelectionExpr => clang_sys::CXCursor_GenericSelectionExpr,
            Self::GnuNullExpr => clang_sys::CXCursor_GNUNullExpr,
            Self::CxxStaticCastExpr => clang_sys::CXCursor_CXXStaticCastExpr,
            Self::CxxDynamicCastExpr => clang_sys::CXCursor_CXXDynamicCastExpr,
            Self::CxxReinterpretCastExpr => clang_sys::CXCursor_CXXReinterpretCastExpr,
            Self::CxxConstCastExpr => clang_sys::CXCursor_CXXConstCastExpr,
            Self::CxxFunctionalCastExpr => clang_sys::CXCursor_CXXFunctionalCastExpr,
            Self::CxxTypeidExpr => clang_sys::CXCursor_CXXTypeidExpr,
            Self::CxxBoolLiteralExpr => clang_sys::CXCursor_CXXBoolLiteralExpr,
            Self::CxxNullPtrLiteralExpr => clang_sys::CXCursor_CXXNullPtrLiteralExpr,
            Self::CxxThisExpr => clang_sys::CXCursor_CXXThisExpr,
            Self::CxxThrowExpr => clang_sys::CXCursor_CXXThrowExpr,
            Self::CxxNewExpr => clang_sys::CXCursor_CXXNewExpr,
            Self::CxxDeleteExpr => clang_sys::CXCursor_CXXDeleteExpr,
            Self::UnaryExpr => clang_sys::CXCursor_UnaryExpr,
            Self::ObjCStringLiteral => clang_sys::CXCursor_ObjCStringLiteral,
            Self::ObjCEncodeExpr => clang_sys::CXCursor_ObjCEncodeExpr,
            Self::ObjCSelectorExpr => clang_sys::CXCursor_ObjCSelectorExpr,
            Self::ObjCProtocolExpr => clang_sys::CXCursor_ObjCProtocolExpr,
            Self::ObjCBridgedCastExpr => clang_sys::CXCursor_ObjCBridgedCastExpr,
            Self::PackExpansionExpr => clang_sys::CXCursor_PackExpansionExpr,
            Self::SizeOfPackExpr => clang_sys::CXCursor_SizeOfPackExpr,
            Self::LambdaExpr => clang_sys::CXCursor_LambdaExpr,
            Self::ObjCBoolLiteralExpr => clang_sys::CXCursor_ObjCBoolLiteralExpr,
            Self::ObjCSelfExpr => clang_sys::CXCursor_ObjCSelfExpr,
            Self::OmpArraySectionExpr => clang_sys::CXCursor_OMPArraySectionExpr,
            Self::ObjCAvailabilityCheckExpr => clang_sys::CXCursor_ObjCAvailabilityCheckExpr,
            Self::UnexposedStmt => clang_sys::CXCursor_UnexposedStmt,
            Self::LabelStmt => clang_sys::CXCursor_LabelStmt,
            Self::CompoundStmt => clang_sys::CXCursor_CompoundStmt,
            Self::CaseStmt => clang_sys::CXCursor_CaseStmt,
            Self::DefaultStmt => clang_sys::CXCursor_DefaultStmt,
            Self::IfStmt => clang_sys::CXCursor_IfStmt,
            Self::SwitchStmt => clang_sys::CXCursor_SwitchStmt,
            Self::WhileStmt => clang_sys::CXCursor_WhileStmt,
            Self::DoStmt => clang_sys::CXCursor_DoStmt,
            Self::ForStmt => clang_sys::CXCursor_ForStmt,
            Self::GotoStmt => clang_sys::CXCursor_GotoStmt,
            Self::IndirectGotoStmt => clang_sys::CXCursor_IndirectGotoStmt,
            Self::ContinueStmt => clang_sys::CXCursor_ContinueStmt,
            Self::BreakStmt => clang_sys::CXCursor_BreakStmt,
            Self::ReturnStmt => clang_sys::CXCursor_ReturnStmt,
            Self::AsmStmt => clang_sys::CXCursor_AsmStmt,
            Self::ObjCAtTryStmt => clang_sys::CXCursor_ObjCAtTryStmt,
            Self::ObjCAtCatchStmt => clang_sys::CXCursor_ObjCAtCatchStmt,
            Self::ObjCAtFinallyStmt => clang_sys::CXCursor_ObjCAtFinallyStmt,
            Self::ObjCAtThrowStmt => clang_sys::CXCursor_ObjCAtThrowStmt,
            Self::ObjCAtSynchronizedStmt => clang_sys::CXCursor_ObjCAtSynchronizedStmt,
            Self::ObjCAutoreleasePoolStmt => clang_sys::CXCursor_ObjCAutoreleasePoolStmt,
            Self::ObjCForCollectionStmt => clang_sys::CXCursor_ObjCForCollectionStmt,
            Self::CxxCatchStmt => clang_sys::CXCursor_CXXCatchStmt,
            Self::CxxTryStmt => clang_sys::CXCursor_CXXTryStmt,
            Self::CxxForRangeStmt => clang_sys::CXCursor_CXXForRangeStmt,
            Self::SehTryStmt => clang_sys::CXCursor_SEHTryStmt,
            Self::SehExceptStmt => clang_sys::CXCursor_SEHExceptStmt,
            Self::SehFinallyStmt => clang_sys::CXCursor_SEHFinallyStmt,
            Self::SehLeaveStmt => clang_sys::CXCursor_SEHLeaveStmt,
            Self::MsAsmStmt => clang_sys::CXCursor_MSAsmStmt,
            Self::NullStmt => clang_sys::CXCursor_NullStmt,
            Self::DeclStmt => clang_sys::CXCursor_DeclStmt,
            Self::OmpParallelDirective => clang_sys::CXCursor_OMPParallelDirective,
            Self::OmpSimdDirective => clang_sys::CXCursor_OMPSimdDirective,
            Self::OmpForDirective => clang_sys::CXCursor_OMPForDirective,
            Self::OmpSectionsDirective => clang_sys::CXCursor_OMPSectionsDirective,
            Self::OmpSectionDirective => clang_sys::CXCursor_OMPSectionDirective,
            Self::OmpSingleDirective => clang_sys::CXCursor_OMPSingleDirective,
            Self::OmpParallelForDirective => clang_sys::CXCursor_OMPParallelForDirective,
            Self::OmpParallelSectionsDirective => clang_sys::CXCursor_OMPParallelSectionsDirective,
            Self::OmpTaskDirective => clang_sys::CXCursor_OMPTaskDirective,
            Self::OmpMasterDirective => clang_sys::CXCursor_OMPMasterDirective,
            Self::OmpCriticalDirective => clang_sys::CXCursor_OMPCriticalDirective,
            Self::OmpTaskyieldDirective => clang_sys::CXCursor_OMPTaskyieldDirective,
            Self::OmpBarrierDirective => clang_sys::CXCursor_OMPBarrierDirective,
            Self::OmpTaskwaitDirective => clang_sys::CXCursor_OMPTaskwaitDirective,
            Self::OmpFlushDirective => clang_sys::CXCursor_OMPFlushDirective,
            Self::OmpOrderedDirective => clang_sys::CXCursor_OMPOrderedDirective,
            Self::OmpAtomicDirective => clang_sys::CXCursor_OMPAtomicDirective,
            Self::OmpForSimdDirective => clang_sys::CXCursor_OMPForSimdDirective,
            Self::OmpParallelForSimdDirective => clang_sys::CXCursor_OMPParallelForSimdDirective,
            Self::OmpTargetDirective => clang_sys::CXCursor_OMPTargetDirective,
            Self::OmpTeamsDirective => clang_sys::CXCursor_OMPTeamsDirective,
            Self::OmpTaskgroupDirective => clang_sys::CXCursor_OMPTaskgroupDirective,
            Self::OmpCancellationPointDirective => {
                clang_sys::CXCursor_OMPCancellationPointDirective
            }
            Self::OmpCancelDirective => clang_sys::CXCursor_OMPCancelDirective,
            Self::OmpTargetDataDirective => clang_sys::CXCursor_OMPTargetDataDirective,
            Self::OmpTaskLoopDirective => clang_sys::CXCursor_OMPTaskLoopDirective,
            Self::OmpTaskLoopSimdDirective => clang_sys::CXCursor_OMPTaskLoopSimdDirective,
            Self::OmpDistributeDirective => clang_sys::CXCursor_OMPDistributeDirective,
            Self::OmpTargetEnterDataDirective => clang_sys::CXCursor_OMPTargetEnterDataDirective,
            Self::OmpTargetExitDataDirective => clang_sys::CXCursor_OMPTargetExitDataDirective,
            Self::OmpTargetParallelDirective => clang_sys::CXCursor_OMPTargetParallelDirective,
            Self::OmpTargetParallelForDirective => {
                clang_sys::CXCursor_OMPTargetParallelForDirective
            }
            Self::OmpTargetUpdateDirective => clang_sys::CXCursor_OMPTargetUpdateDirective,
            Self::OmpDistributeParallelForDirective => {
                clang_sys::CXCursor_OMPDistributeParallelForDirective
            }
            Self::OmpDistributeParallelForSimdDirective => {
                clang_sys::CXCursor_OMPDistributeParallelForSimdDirective
            }
            Self::OmpDistributeSimdDirective => clang_sys::CXCursor_OMPDistributeSimdDirective,
            Self::OmpTargetParallelForSimdDirective => {
                clang_sys::CXCursor_OMPTargetParallelForSimdDirective
            }
            Self::TranslationUnit => clang_sys::CXCursor_TranslationUnit,
            Self::UnexposedAttr => clang_sys::CXCursor_UnexposedAttr,
            Self::IbActionAttr => clang_sys::CXCursor_IBActionAttr,
            Self::IbOutletAttr => clang_sys::CXCursor_IBOutletAttr,
            Self::IbOutletCollectionAttr => clang_sys::CXCursor_IBOutletCollectionAttr,
            Self::CxxFinalAttr => clang_sys::CXCursor_CXXFinalAttr,
            Self::CxxOverrideAttr => clang_sys::CXCursor_CXXOverrideAttr,
            Self::AnnotateAttr => clang_sys::CXCursor_AnnotateAttr,
            Self::AsmLabelAttr => clang_sys::CXCursor_AsmLabelAttr,
            Self::PackedAttr => clang_sys::CXCursor_PackedAttr,
            Self::PureAttr => clang_sys::CXCursor_PureAttr,
            Self::ConstAttr => clang_sys::CXCursor_ConstAttr,
            Self::NoDuplicateAttr => clang_sys::CXCursor_NoDuplicateAttr,
            Self::CudaConstantAttr => clang_sys::CXCursor_CUDAConstantAttr,
            Self::CudaDeviceAttr => clang_sys::CXCursor_CUDADeviceAttr,
            Self::CudaGlobalAttr => clang_sys::CXCursor_CUDAGlobalAttr,
            Self::CudaHostAttr => clang_sys::CXCursor_CUDAHostAttr,
            Self::CudaSharedAttr => clang_sys::CXCursor_CUDASharedAttr,
            Self::VisibilityAttr => clang_sys::CXCursor_VisibilityAttr,
            Self::DllExport => clang_sys::CXCursor_DLLExport,
            Self::DllImport => clang_sys::CXCursor_DLLImport,
            Self::PreprocessingDirective => clang_sys::CXCursor_PreprocessingDirective,
            Self::MacroDefinition => clang_sys::CXCursor_MacroDefinition,
            Self::MacroExpansion => clang_sys::CXCursor_MacroExpansion,
            Self::InclusionDirective => clang_sys::CXCursor_InclusionDirective,
            Self::ModuleImportDecl => clang_sys::CXCursor_ModuleImportDecl,
            Self::TypeAliasTemplateDecl => clang_sys::CXCursor_TypeAliasTemplateDecl,
            Self::StaticAssert => clang_sys::CXCursor_StaticAssert,
            Self::FriendDecl => clang_sys::CXCursor_FriendDecl,
            Self::OverloadCandidate => clang_sys::CXCursor_OverloadCandidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(clang_sys::CXCursor_StructDecl, CursorKind::StructDecl)]
    #[case(clang_sys::CXCursor_FunctionDecl, CursorKind::FunctionDecl)]
    #[case(clang_sys::CXCursor_CXXMethod, CursorKind::CxxMethod)]
    #[case(clang_sys::CXCursor_DeclRefExpr, CursorKind::DeclRefExpr)]
    #[case(clang_sys::CXCursor_CompoundStmt, CursorKind::CompoundStmt)]
    #[case(clang_sys::CXCursor_OMPParallelDirective, CursorKind::OmpParallelDirective)]
    #[case(clang_sys::CXCursor_TranslationUnit, CursorKind::TranslationUnit)]
    #[case(clang_sys::CXCursor_MacroExpansion, CursorKind::MacroExpansion)]
    #[case(clang_sys::CXCursor_OverloadCandidate, CursorKind::OverloadCandidate)]
    fn from_raw_maps_representative_tags(#[case] raw: CXCursorKind, #[case] expected: CursorKind) {
        assert_eq!(CursorKind::from_raw(raw), expected);
    }

    #[test]
    fn round_trip_holds_over_the_declaration_tag_range() {
        // Declaration tags are contiguous in the native space.
        for raw in clang_sys::CXCursor_UnexposedDecl..=clang_sys::CXCursor_CXXAccessSpecifier {
            assert_eq!(CursorKind::from_raw(raw).as_raw(), raw);
        }
    }

    #[test]
    fn round_trip_holds_over_the_statement_and_expression_tag_ranges() {
        for raw in clang_sys::CXCursor_UnexposedExpr..=clang_sys::CXCursor_ObjCAvailabilityCheckExpr
        {
            assert_eq!(CursorKind::from_raw(raw).as_raw(), raw);
        }
        for raw in clang_sys::CXCursor_UnexposedStmt..=clang_sys::CXCursor_OMPTargetParallelForSimdDirective
        {
            assert_eq!(CursorKind::from_raw(raw).as_raw(), raw);
        }
    }

    #[test]
    #[should_panic(expected = "unsupported CXCursorKind")]
    fn unknown_tag_is_fatal() {
        let _ = CursorKind::from_raw(999_999);
    }
}
