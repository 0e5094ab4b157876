//! ABI type encoding table.
//!
//! `TypeEncoding` is the closed set of type categories the runtime
//! understands. Both the binary tag (the discriminant) and the
//! introspection symbol are part of the metadata format: changing either
//! is a format version bump.
//!
//! # Tag Layout
//!
//! - 0-1: Sentinels (`Unknown`, `VaList`)
//! - 2-17: Scalars and C strings
//! - 18-20: Declaration references
//! - 21-25: Derived types (pointer, block, function, arrays)
//! - 26-30: Objective-C object kinds
//! - 31-32: Inline anonymous records

/// ABI-level category of a type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TypeEncoding {
    /// Placeholder tag; never produced for a supported type.
    Unknown = 0,
    VaList = 1,

    // === Scalars (2-17) ===
    Void = 2,
    Bool = 3,
    Short = 4,
    UShort = 5,
    Int = 6,
    UInt = 7,
    Long = 8,
    ULong = 9,
    LongLong = 10,
    ULongLong = 11,
    SignedChar = 12,
    UnsignedChar = 13,
    Unichar = 14,
    CString = 15,
    Float = 16,
    Double = 17,

    // === Declaration references (18-20) ===
    InterfaceReference = 18,
    StructReference = 19,
    UnionReference = 20,

    // === Derived types (21-25) ===
    Pointer = 21,
    Block = 22,
    FunctionPointer = 23,
    ConstantArray = 24,
    IncompleteArray = 25,

    // === Object kinds (26-30) ===
    Protocol = 26,
    Class = 27,
    Id = 28,
    Instancetype = 29,
    Selector = 30,

    // === Anonymous records (31-32) ===
    AnonymousStruct = 31,
    AnonymousUnion = 32,
}

impl TypeEncoding {
    /// Every encoding, in tag order.
    pub const ALL: [Self; 33] = [
        Self::Unknown,
        Self::VaList,
        Self::Void,
        Self::Bool,
        Self::Short,
        Self::UShort,
        Self::Int,
        Self::UInt,
        Self::Long,
        Self::ULong,
        Self::LongLong,
        Self::ULongLong,
        Self::SignedChar,
        Self::UnsignedChar,
        Self::Unichar,
        Self::CString,
        Self::Float,
        Self::Double,
        Self::InterfaceReference,
        Self::StructReference,
        Self::UnionReference,
        Self::Pointer,
        Self::Block,
        Self::FunctionPointer,
        Self::ConstantArray,
        Self::IncompleteArray,
        Self::Protocol,
        Self::Class,
        Self::Id,
        Self::Instancetype,
        Self::Selector,
        Self::AnonymousStruct,
        Self::AnonymousUnion,
    ];

    /// Binary tag written by the metadata serializer.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a binary tag.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        if (tag as usize) < Self::ALL.len() {
            Some(Self::ALL[tag as usize])
        } else {
            None
        }
    }

    /// Runtime type-introspection symbol (the `@encode` alphabet).
    ///
    /// Derived and record encodings return their opening symbol only; the
    /// serializer appends element encodings after it.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Unknown => "?",
            Self::VaList => "^v",
            Self::Void => "v",
            Self::Bool => "B",
            Self::Short => "s",
            Self::UShort | Self::Unichar => "S",
            Self::Int => "i",
            Self::UInt => "I",
            Self::Long => "l",
            Self::ULong => "L",
            Self::LongLong => "q",
            Self::ULongLong => "Q",
            Self::SignedChar => "c",
            Self::UnsignedChar => "C",
            Self::CString => "*",
            Self::Float => "f",
            Self::Double => "d",
            Self::InterfaceReference | Self::Protocol | Self::Id | Self::Instancetype => "@",
            Self::StructReference | Self::AnonymousStruct => "{",
            Self::UnionReference | Self::AnonymousUnion => "(",
            Self::Pointer => "^",
            Self::Block => "@?",
            Self::FunctionPointer => "^?",
            Self::ConstantArray | Self::IncompleteArray => "[",
            Self::Class => "#",
            Self::Selector => ":",
        }
    }

    /// Check if this encoding describes a plain scalar value.
    pub const fn is_scalar(self) -> bool {
        (self as u8) >= (Self::Void as u8) && (self as u8) <= (Self::Double as u8)
    }
}

#[cfg(test)]
mod tests;
