//! The type side of the AST: type handles, their kinds, and layout queries.

use std::os::raw::c_void;

use clang_sys::{CXCursor, CXType, CXTypeKind};

use crate::TranslationUnit;
use crate::cursor::Cursor;
use crate::error::TypeLayoutError;
use crate::string::{self, CStringArray};

/// The kind of a [`Type`].
///
/// The mapping is closed over the targeted libclang version: every non-null
/// native tag maps to exactly one variant, and an unknown tag is treated as
/// a fatal version mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TypeKind {
    /// A type that is not exposed via this interface.
    Unexposed,
    /// `void`.
    Void,
    /// `bool` or `_Bool`.
    Bool,
    /// `char` on targets where it is unsigned.
    CharU,
    /// `unsigned char`.
    UChar,
    /// `char16_t`.
    Char16,
    /// `char32_t`.
    Char32,
    /// `unsigned short`.
    UShort,
    /// `unsigned int`.
    UInt,
    /// `unsigned long`.
    ULong,
    /// `unsigned long long`.
    ULongLong,
    /// `unsigned __int128`.
    UInt128,
    /// `char` on targets where it is signed.
    CharS,
    /// `signed char`.
    SChar,
    /// `wchar_t`.
    WChar,
    /// `short`.
    Short,
    /// `int`.
    Int,
    /// `long`.
    Long,
    /// `long long`.
    LongLong,
    /// `__int128`.
    Int128,
    /// `float`.
    Float,
    /// `double`.
    Double,
    /// `long double`.
    LongDouble,
    /// `std::nullptr_t`.
    NullPtr,
    /// The type of an unresolved overload set.
    Overload,
    /// A type that depends on a template parameter.
    Dependent,
    /// Objective-C `id`.
    ObjCId,
    /// Objective-C `Class`.
    ObjCClass,
    /// Objective-C `SEL`.
    ObjCSel,
    /// `__float128`.
    Float128,
    /// A C `_Complex` type.
    Complex,
    /// A pointer.
    Pointer,
    /// An Objective-C or C block pointer.
    BlockPointer,
    /// An lvalue reference.
    LValueReference,
    /// An rvalue reference.
    RValueReference,
    /// A struct, union, or C++ class.
    Record,
    /// An enumeration.
    Enum,
    /// A typedef.
    Typedef,
    /// An Objective-C interface.
    ObjCInterface,
    /// A pointer to an Objective-C object.
    ObjCObjectPointer,
    /// A function without a prototype.
    FunctionNoProto,
    /// A function with a prototype.
    FunctionProto,
    /// An array with a constant size.
    ConstantArray,
    /// A vector type.
    Vector,
    /// An array with an unspecified size.
    IncompleteArray,
    /// A variable-length array.
    VariableArray,
    /// An array whose size depends on a template parameter.
    DependentSizedArray,
    /// A pointer to a member.
    MemberPointer,
    /// A C++11 `auto` or `decltype(auto)` type.
    Auto,
    /// A type written with an elaborated keyword or qualifier, e.g.
    /// `struct S`.
    Elaborated,
}

impl TypeKind {
    /// Maps a native tag to its kind, `None` for the invalid tag libclang
    /// uses to signal absence.
    ///
    /// # Panics
    ///
    /// Panics with the raw tag value on a kind outside the mirrored space.
    pub(crate) fn from_raw_opt(raw: CXTypeKind) -> Option<Self> {
        let kind = match raw {
            clang_sys::CXType_Invalid => return None,
            clang_sys::CXType_Unexposed => Self::Unexposed,
            clang_sys::CXType_Void => Self::Void,
            clang_sys::CXType_Bool => Self::Bool,
            clang_sys::CXType_Char_U => Self::CharU,
            clang_sys::CXType_UChar => Self::UChar,
            clang_sys::CXType_Char16 => Self::Char16,
            clang_sys::CXType_Char32 => Self::Char32,
            clang_sys::CXType_UShort => Self::UShort,
            clang_sys::CXType_UInt => Self::UInt,
            clang_sys::CXType_ULong => Self::ULong,
            clang_sys::CXType_ULongLong => Self::ULongLong,
            clang_sys::CXType_UInt128 => Self::UInt128,
            clang_sys::CXType_Char_S => Self::CharS,
            clang_sys::CXType_SChar => Self::SChar,
            clang_sys::CXType_WChar => Self::WChar,
            clang_sys::CXType_Short => Self::Short,
            clang_sys::CXType_Int => Self::Int,
            clang_sys::CXType_Long => Self::Long,
            clang_sys::CXType_LongLong => Self::LongLong,
            clang_sys::CXType_Int128 => Self::Int128,
            clang_sys::CXType_Float => Self::Float,
            clang_sys::CXType_Double => Self::Double,
            clang_sys::CXType_LongDouble => Self::LongDouble,
            clang_sys::CXType_NullPtr => Self::NullPtr,
            clang_sys::CXType_Overload => Self::Overload,
            clang_sys::CXType_Dependent => Self::Dependent,
            clang_sys::CXType_ObjCId => Self::ObjCId,
            clang_sys::CXType_ObjCClass => Self::ObjCClass,
            clang_sys::CXType_ObjCSel => Self::ObjCSel,
            clang_sys::CXType_Float128 => Self::Float128,
            clang_sys::CXType_Complex => Self::Complex,
            clang_sys::CXType_Pointer => Self::Pointer,
            clang_sys::CXType_BlockPointer => Self::BlockPointer,
            clang_sys::CXType_LValueReference => Self::LValueReference,
            clang_sys::CXType_RValueReference => Self::RValueReference,
            clang_sys::CXType_Record => Self::Record,
            clang_sys::CXType_Enum => Self::Enum,
            clang_sys::CXType_Typedef => Self::Typedef,
            clang_sys::CXType_ObjCInterface => Self::ObjCInterface,
            clang_sys::CXType_ObjCObjectPointer => Self::ObjCObjectPointer,
            clang_sys::CXType_FunctionNoProto => Self::FunctionNoProto,
            clang_sys::CXType_FunctionProto => Self::FunctionProto,
            clang_sys::CXType_ConstantArray => Self::ConstantArray,
            clang_sys::CXType_Vector => Self::Vector,
            clang_sys::CXType_IncompleteArray => Self::IncompleteArray,
            clang_sys::CXType_VariableArray => Self::VariableArray,
            clang_sys::CXType_DependentSizedArray => Self::DependentSizedArray,
            clang_sys::CXType_MemberPointer => Self::MemberPointer,
            clang_sys::CXType_Auto => Self::Auto,
            clang_sys::CXType_Elaborated => Self::Elaborated,
            other => panic!("unsupported CXTypeKind: {other}"),
        };
        Some(kind)
    }

    /// Maps this kind back to its native tag. Exact inverse of
    /// [`TypeKind::from_raw_opt`] over the non-null tags.
    #[must_use]
    pub fn as_raw(self) -> CXTypeKind {
        match self {
            Self::Unexposed => clang_sys::CXType_Unexposed,
            Self::Void => clang_sys::CXType_Void,
            Self::Bool => clang_sys::CXType_Bool,
            Self::CharU => clang_sys::CXType_Char_U,
            Self::UChar => clang_sys::CXType_UChar,
            Self::Char16 => clang_sys::CXType_Char16,
            Self::Char32 => clang_sys::CXType_Char32,
            Self::UShort => clang_sys::CXType_UShort,
            Self::UInt => clang_sys::CXType_UInt,
            Self::ULong => clang_sys::CXType_ULong,
            Self::ULongLong => clang_sys::CXType_ULongLong,
            Self::UInt128 => clang_sys::CXType_UInt128,
            Self::CharS => clang_sys::CXType_Char_S,
            Self::SChar => clang_sys::CXType_SChar,
            Self::WChar => clang_sys::CXType_WChar,
            Self::Short => clang_sys::CXType_Short,
            Self::Int => clang_sys::CXType_Int,
            Self::Long => clang_sys::CXType_Long,
            Self::LongLong => clang_sys::CXType_LongLong,
            Self::Int128 => clang_sys::CXType_Int128,
            Self::Float => clang_sys::CXType_Float,
            Self::Double => clang_sys::CXType_Double,
            Self::LongDouble => clang_sys::CXType_LongDouble,
            Self::NullPtr => clang_sys::CXType_NullPtr,
            Self::Overload => clang_sys::CXType_Overload,
            Self::Dependent => clang_sys::CXType_Dependent,
            Self::ObjCId => clang_sys::CXType_ObjCId,
            Self::ObjCClass => clang_sys::CXType_ObjCClass,
            Self::ObjCSel => clang_sys::CXType_ObjCSel,
            Self::Float128 => clang_sys::CXType_Float128,
            Self::Complex => clang_sys::CXType_Complex,
            Self::Pointer => clang_sys::CXType_Pointer,
            Self::BlockPointer => clang_sys::CXType_BlockPointer,
            Self::LValueReference => clang_sys::CXType_LValueReference,
            Self::RValueReference => clang_sys::CXType_RValueReference,
            Self::Record => clang_sys::CXType_Record,
            Self::Enum => clang_sys::CXType_Enum,
            Self::Typedef => clang_sys::CXType_Typedef,
            Self::ObjCInterface => clang_sys::CXType_ObjCInterface,
            Self::ObjCObjectPointer => clang_sys::CXType_ObjCObjectPointer,
            Self::FunctionNoProto => clang_sys::CXType_FunctionNoProto,
            Self::FunctionProto => clang_sys::CXType_FunctionProto,
            Self::ConstantArray => clang_sys::CXType_ConstantArray,
            Self::Vector => clang_sys::CXType_Vector,
            Self::IncompleteArray => clang_sys::CXType_IncompleteArray,
            Self::VariableArray => clang_sys::CXType_VariableArray,
            Self::DependentSizedArray => clang_sys::CXType_DependentSizedArray,
            Self::MemberPointer => clang_sys::CXType_MemberPointer,
            Self::Auto => clang_sys::CXType_Auto,
            Self::Elaborated => clang_sys::CXType_Elaborated,
        }
    }
}

/// The calling convention of a function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CallingConvention {
    /// The target's default convention.
    Default,
    /// The C convention.
    C,
    /// `__stdcall`.
    X86StdCall,
    /// `__fastcall`.
    X86FastCall,
    /// `__thiscall`.
    X86ThisCall,
    /// The Borland Pascal convention.
    X86Pascal,
    /// The ARM AAPCS convention.
    Aapcs,
    /// The ARM AAPCS-VFP convention.
    AapcsVfp,
    /// `__regcall`.
    X86RegCall,
    /// The Intel OpenCL built-in convention.
    IntelOclBicc,
    /// The Microsoft x64 convention.
    Win64,
    /// The System V x86-64 convention.
    X86_64SysV,
    /// `__vectorcall`.
    X86VectorCall,
    /// The Swift convention.
    Swift,
    /// `preserve_most`.
    PreserveMost,
    /// `preserve_all`.
    PreserveAll,
    /// A convention not exposed via this interface.
    Unexposed,
}

impl CallingConvention {
    /// `None` for the invalid tag returned on non-function types.
    pub(crate) fn from_raw_opt(raw: clang_sys::CXCallingConv) -> Option<Self> {
        let convention = match raw {
            clang_sys::CXCallingConv_Invalid => return None,
            clang_sys::CXCallingConv_Default => Self::Default,
            clang_sys::CXCallingConv_C => Self::C,
            clang_sys::CXCallingConv_X86StdCall => Self::X86StdCall,
            clang_sys::CXCallingConv_X86FastCall => Self::X86FastCall,
            clang_sys::CXCallingConv_X86ThisCall => Self::X86ThisCall,
            clang_sys::CXCallingConv_X86Pascal => Self::X86Pascal,
            clang_sys::CXCallingConv_AAPCS => Self::Aapcs,
            clang_sys::CXCallingConv_AAPCS_VFP => Self::AapcsVfp,
            clang_sys::CXCallingConv_X86RegCall => Self::X86RegCall,
            clang_sys::CXCallingConv_IntelOclBicc => Self::IntelOclBicc,
            clang_sys::CXCallingConv_Win64 => Self::Win64,
            clang_sys::CXCallingConv_X86_64SysV => Self::X86_64SysV,
            clang_sys::CXCallingConv_X86VectorCall => Self::X86VectorCall,
            clang_sys::CXCallingConv_Swift => Self::Swift,
            clang_sys::CXCallingConv_PreserveMost => Self::PreserveMost,
            clang_sys::CXCallingConv_PreserveAll => Self::PreserveAll,
            clang_sys::CXCallingConv_Unexposed => Self::Unexposed,
            other => panic!("unsupported CXCallingConv: {other}"),
        };
        Some(convention)
    }
}

/// The type of an entity in a translation unit.
#[derive(Clone, Copy)]
pub struct Type<'tu> {
    raw: CXType,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Type<'tu> {
    /// Wraps a native type, `None` for the invalid type.
    pub(crate) fn from_raw(raw: CXType, tu: &'tu TranslationUnit<'tu>) -> Option<Self> {
        TypeKind::from_raw_opt(raw.kind).map(|_| Self { raw, tu })
    }

    pub(crate) fn as_raw(self) -> CXType {
        self.raw
    }

    /// The kind of this type.
    #[must_use]
    pub fn kind(self) -> TypeKind {
        // from_raw validated the tag at construction.
        match TypeKind::from_raw_opt(self.raw.kind) {
            Some(kind) => kind,
            None => unreachable!("invalid type escaped construction"),
        }
    }

    /// The type as written in source, e.g. `const int *`.
    #[must_use]
    pub fn spelling(self) -> String {
        string::to_string(unsafe { clang_sys::clang_getTypeSpelling(self.raw) })
    }

    /// The canonical form of this type, with sugar such as typedefs removed.
    #[must_use]
    pub fn canonical(self) -> Self {
        let raw = unsafe { clang_sys::clang_getCanonicalType(self.raw) };
        Self { raw, tu: self.tu }
    }

    /// The cursor for this type's declaration, when it has one.
    #[must_use]
    pub fn declaration(self) -> Option<Cursor<'tu>> {
        let raw = unsafe { clang_sys::clang_getTypeDeclaration(self.raw) };
        Cursor::from_raw(raw, self.tu)
    }

    /// For a typedef, the type named on its right-hand side, one level of
    /// sugar at a time. `None` for anything else.
    #[must_use]
    pub fn typedef_underlying(self) -> Option<Self> {
        if self.kind() != TypeKind::Typedef {
            return None;
        }
        let decl = self.declaration()?;
        let raw = unsafe { clang_sys::clang_getTypedefDeclUnderlyingType(decl.as_raw()) };
        Self::from_raw(raw, self.tu)
    }

    /// Whether the type carries a `const` qualifier.
    #[must_use]
    pub fn is_const_qualified(self) -> bool {
        unsafe { clang_sys::clang_isConstQualifiedType(self.raw) != 0 }
    }

    /// Whether the type carries a `volatile` qualifier.
    #[must_use]
    pub fn is_volatile_qualified(self) -> bool {
        unsafe { clang_sys::clang_isVolatileQualifiedType(self.raw) != 0 }
    }

    /// Whether the type carries a `restrict` qualifier.
    #[must_use]
    pub fn is_restrict_qualified(self) -> bool {
        unsafe { clang_sys::clang_isRestrictQualifiedType(self.raw) != 0 }
    }

    /// Whether the type is plain old data.
    #[must_use]
    pub fn is_pod(self) -> bool {
        unsafe { clang_sys::clang_isPODType(self.raw) != 0 }
    }

    /// The pointee of a pointer or reference type.
    #[must_use]
    pub fn pointee(self) -> Option<Self> {
        let raw = unsafe { clang_sys::clang_getPointeeType(self.raw) };
        Self::from_raw(raw, self.tu)
    }

    /// The result type of a function type.
    #[must_use]
    pub fn result(self) -> Option<Self> {
        let raw = unsafe { clang_sys::clang_getResultType(self.raw) };
        Self::from_raw(raw, self.tu)
    }

    /// The parameter types of a function type with a prototype.
    #[must_use]
    pub fn parameter_types(self) -> Option<Vec<Self>> {
        let count = unsafe { clang_sys::clang_getNumArgTypes(self.raw) };
        if count < 0 {
            return None;
        }
        let mut out = Vec::with_capacity(count as usize);
        for i in 0..count as u32 {
            let raw = unsafe { clang_sys::clang_getArgType(self.raw, i) };
            out.push(Self { raw, tu: self.tu });
        }
        Some(out)
    }

    /// Whether a function type accepts a variable number of arguments.
    #[must_use]
    pub fn is_variadic(self) -> bool {
        unsafe { clang_sys::clang_isFunctionTypeVariadic(self.raw) != 0 }
    }

    /// The calling convention of a function type, `None` otherwise.
    #[must_use]
    pub fn calling_convention(self) -> Option<CallingConvention> {
        let raw = unsafe { clang_sys::clang_getFunctionTypeCallingConv(self.raw) };
        CallingConvention::from_raw_opt(raw)
    }

    /// The element type of an array, vector, or complex type.
    #[must_use]
    pub fn element_type(self) -> Option<Self> {
        let raw = unsafe { clang_sys::clang_getElementType(self.raw) };
        Self::from_raw(raw, self.tu)
    }

    /// The element count of an array or vector type.
    #[must_use]
    pub fn element_count(self) -> Option<usize> {
        let count = unsafe { clang_sys::clang_getNumElements(self.raw) };
        usize::try_from(count).ok()
    }

    /// The type an [`TypeKind::Elaborated`] type refers to.
    #[must_use]
    pub fn named_type(self) -> Option<Self> {
        let raw = unsafe { clang_sys::clang_Type_getNamedType(self.raw) };
        Self::from_raw(raw, self.tu)
    }

    /// The class of a member-pointer type.
    #[must_use]
    pub fn class_type(self) -> Option<Self> {
        let raw = unsafe { clang_sys::clang_Type_getClassType(self.raw) };
        Self::from_raw(raw, self.tu)
    }

    /// The size of this type in bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeLayoutError`] for incomplete, dependent, or otherwise
    /// unsized types.
    pub fn size_of(self) -> Result<usize, TypeLayoutError> {
        TypeLayoutError::check(unsafe { clang_sys::clang_Type_getSizeOf(self.raw) })
    }

    /// The alignment of this type in bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeLayoutError`] for incomplete or dependent types.
    pub fn align_of(self) -> Result<usize, TypeLayoutError> {
        TypeLayoutError::check(unsafe { clang_sys::clang_Type_getAlignOf(self.raw) })
    }

    /// Views this type as a record when its kind allows field queries.
    #[must_use]
    pub fn as_record(self) -> Option<RecordType<'tu>> {
        match self.kind() {
            TypeKind::Record | TypeKind::ObjCInterface => Some(RecordType(self)),
            _ => None,
        }
    }
}

impl PartialEq for Type<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_sys::clang_equalTypes(self.raw, other.raw) != 0 }
    }
}

impl Eq for Type<'_> {}

impl std::fmt::Debug for Type<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Type")
            .field("kind", &self.kind())
            .field("spelling", &self.spelling())
            .finish()
    }
}

/// A type whose fields can be enumerated and laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordType<'tu>(Type<'tu>);

impl<'tu> RecordType<'tu> {
    /// The underlying type.
    #[must_use]
    pub fn as_type(self) -> Type<'tu> {
        self.0
    }

    /// The offset of the named field in bits from the start of the record.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeLayoutError`] when the record is incomplete or
    /// dependent, or when no field has the given name.
    pub fn offset_of(self, field_name: &str) -> Result<usize, TypeLayoutError> {
        let name = CStringArray::new(&[field_name]);
        let offset = unsafe {
            clang_sys::clang_Type_getOffsetOf(self.0.raw, *name.as_ptr())
        };
        TypeLayoutError::check(offset)
    }

    /// The record's fields, in declaration order.
    #[must_use]
    pub fn fields(self) -> Vec<Cursor<'tu>> {
        extern "C" fn collect(raw: CXCursor, data: *mut c_void) -> clang_sys::CXVisitorResult {
            let fields = unsafe { &mut *data.cast::<Vec<CXCursor>>() };
            fields.push(raw);
            clang_sys::CXVisit_Continue
        }

        let mut raw_fields: Vec<CXCursor> = Vec::new();
        unsafe {
            clang_sys::clang_Type_visitFields(
                self.0.raw,
                collect,
                std::ptr::addr_of_mut!(raw_fields).cast(),
            );
        }
        raw_fields
            .into_iter()
            .filter_map(|raw| Cursor::from_raw(raw, self.0.tu))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(clang_sys::CXType_Void, TypeKind::Void)]
    #[case(clang_sys::CXType_Int, TypeKind::Int)]
    #[case(clang_sys::CXType_Pointer, TypeKind::Pointer)]
    #[case(clang_sys::CXType_Record, TypeKind::Record)]
    #[case(clang_sys::CXType_FunctionProto, TypeKind::FunctionProto)]
    #[case(clang_sys::CXType_Elaborated, TypeKind::Elaborated)]
    fn type_kind_maps_representative_tags(
        #[case] raw: CXTypeKind,
        #[case] expected: TypeKind,
    ) {
        assert_eq!(TypeKind::from_raw_opt(raw), Some(expected));
    }

    #[test]
    fn invalid_type_tag_becomes_none() {
        assert_eq!(TypeKind::from_raw_opt(clang_sys::CXType_Invalid), None);
    }

    #[test]
    fn type_kind_round_trips_over_the_builtin_range() {
        for raw in clang_sys::CXType_Unexposed..=clang_sys::CXType_Float128 {
            let kind = TypeKind::from_raw_opt(raw).unwrap_or_else(|| {
                panic!("builtin tag {raw} should map");
            });
            assert_eq!(kind.as_raw(), raw);
        }
        for raw in clang_sys::CXType_Complex..=clang_sys::CXType_Elaborated {
            let kind = TypeKind::from_raw_opt(raw).unwrap_or_else(|| {
                panic!("derived tag {raw} should map");
            });
            assert_eq!(kind.as_raw(), raw);
        }
    }

    #[rstest]
    #[case(clang_sys::CXCallingConv_C, Some(CallingConvention::C))]
    #[case(clang_sys::CXCallingConv_Win64, Some(CallingConvention::Win64))]
    #[case(clang_sys::CXCallingConv_Swift, Some(CallingConvention::Swift))]
    #[case(clang_sys::CXCallingConv_Invalid, None)]
    fn calling_convention_maps_tags(
        #[case] raw: clang_sys::CXCallingConv,
        #[case] expected: Option<CallingConvention>,
    ) {
        assert_eq!(CallingConvention::from_raw_opt(raw), expected);
    }
}
