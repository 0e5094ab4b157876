//! C primitive kinds as reported by the header frontend.

use crate::TypeEncoding;

/// Builtin scalar kind of a [`TypeDef::Primitive`](crate::TypeDef::Primitive).
///
/// The discriminant doubles as the pre-interned [`TypeId`](crate::TypeId)
/// index of the primitive, so the order here is load-bearing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PrimitiveKind {
    Void = 0,
    Bool = 1,
    Short = 2,
    UShort = 3,
    Int = 4,
    UInt = 5,
    /// `__int128`, never representable in metadata.
    Int128 = 6,
    /// `unsigned __int128`, never representable in metadata.
    UInt128 = 7,
    Long = 8,
    ULong = 9,
    LongLong = 10,
    ULongLong = 11,
    /// Explicit `signed char`.
    SChar = 12,
    /// Plain `char` on targets where it is unsigned.
    CharU = 13,
    /// Plain `char` on targets where it is signed.
    CharS = 14,
    UChar = 15,
    Char16 = 16,
    Char32 = 17,
    WChar = 18,
    Float = 19,
    Double = 20,
    LongDouble = 21,
}

impl PrimitiveKind {
    /// Every primitive kind, in discriminant order.
    pub const ALL: [Self; 22] = [
        Self::Void,
        Self::Bool,
        Self::Short,
        Self::UShort,
        Self::Int,
        Self::UInt,
        Self::Int128,
        Self::UInt128,
        Self::Long,
        Self::ULong,
        Self::LongLong,
        Self::ULongLong,
        Self::SChar,
        Self::CharU,
        Self::CharS,
        Self::UChar,
        Self::Char16,
        Self::Char32,
        Self::WChar,
        Self::Float,
        Self::Double,
        Self::LongDouble,
    ];

    /// Canonical C spelling used by declarator rendering.
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Short => "short",
            Self::UShort => "unsigned short",
            Self::Int => "int",
            Self::UInt => "unsigned int",
            Self::Int128 => "__int128",
            Self::UInt128 => "unsigned __int128",
            Self::Long => "long",
            Self::ULong => "unsigned long",
            Self::LongLong => "long long",
            Self::ULongLong => "unsigned long long",
            Self::SChar => "signed char",
            Self::CharU | Self::CharS => "char",
            Self::UChar => "unsigned char",
            Self::Char16 => "char16_t",
            Self::Char32 => "char32_t",
            Self::WChar => "wchar_t",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long double",
        }
    }

    /// Whether values of this kind can be described in binding metadata.
    ///
    /// 128-bit integers and the wide character kinds have no runtime
    /// encoding and are rejected unconditionally.
    pub const fn is_supported(self) -> bool {
        !matches!(
            self,
            Self::Int128 | Self::UInt128 | Self::Char16 | Self::Char32 | Self::WChar
        )
    }

    /// ABI encoding of this kind, `None` for the unsupported set.
    pub const fn encoding(self) -> Option<TypeEncoding> {
        let encoding = match self {
            Self::Void => TypeEncoding::Void,
            Self::Bool => TypeEncoding::Bool,
            Self::Short => TypeEncoding::Short,
            Self::UShort => TypeEncoding::UShort,
            Self::Int => TypeEncoding::Int,
            Self::UInt => TypeEncoding::UInt,
            Self::Long => TypeEncoding::Long,
            Self::ULong => TypeEncoding::ULong,
            Self::LongLong => TypeEncoding::LongLong,
            Self::ULongLong => TypeEncoding::ULongLong,
            Self::SChar | Self::CharU | Self::CharS => TypeEncoding::SignedChar,
            Self::UChar => TypeEncoding::UnsignedChar,
            Self::Float => TypeEncoding::Float,
            // The runtime has no long double; `@encode(long double)` is `d`.
            Self::Double | Self::LongDouble => TypeEncoding::Double,
            Self::Int128 | Self::UInt128 | Self::Char16 | Self::Char32 | Self::WChar => {
                return None
            }
        };
        Some(encoding)
    }
}
