//! Type graph nodes and their handles.

use std::fmt;

use crate::{FqName, PrimitiveKind};

/// A 32-bit handle into a [`TypePool`](crate::TypePool).
///
/// Primitives and the nullary object kinds are pre-interned at fixed
/// indices, so they can be named without a pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Primitives (0-21, see `PrimitiveKind`) ===
    pub const VOID: Self = Self::primitive(PrimitiveKind::Void);
    pub const BOOL: Self = Self::primitive(PrimitiveKind::Bool);
    pub const SHORT: Self = Self::primitive(PrimitiveKind::Short);
    pub const USHORT: Self = Self::primitive(PrimitiveKind::UShort);
    pub const INT: Self = Self::primitive(PrimitiveKind::Int);
    pub const UINT: Self = Self::primitive(PrimitiveKind::UInt);
    pub const INT128: Self = Self::primitive(PrimitiveKind::Int128);
    pub const UINT128: Self = Self::primitive(PrimitiveKind::UInt128);
    pub const LONG: Self = Self::primitive(PrimitiveKind::Long);
    pub const ULONG: Self = Self::primitive(PrimitiveKind::ULong);
    pub const LONG_LONG: Self = Self::primitive(PrimitiveKind::LongLong);
    pub const ULONG_LONG: Self = Self::primitive(PrimitiveKind::ULongLong);
    pub const SCHAR: Self = Self::primitive(PrimitiveKind::SChar);
    pub const UCHAR: Self = Self::primitive(PrimitiveKind::UChar);
    pub const FLOAT: Self = Self::primitive(PrimitiveKind::Float);
    pub const DOUBLE: Self = Self::primitive(PrimitiveKind::Double);

    // === Nullary object kinds (22-29) ===
    pub const PROTOCOL: Self = Self(22);
    pub const SELECTOR: Self = Self(23);
    pub const INSTANCETYPE: Self = Self(24);
    pub const CSTRING: Self = Self(25);
    pub const UNICHAR: Self = Self(26);
    pub const VA_LIST: Self = Self(27);
    /// Unqualified `id`.
    pub const ID: Self = Self(28);
    /// Unqualified `Class`.
    pub const CLASS: Self = Self(29);

    /// Number of pre-interned types; the first dynamic index.
    pub const PREINTERNED: u32 = 30;

    /// Fixed handle of a primitive kind.
    #[inline]
    pub const fn primitive(kind: PrimitiveKind) -> Self {
        Self(kind as u32)
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_preinterned(self) -> bool {
        self.0 < Self::PREINTERNED
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Named member of an inline anonymous record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordField {
    pub name: String,
    pub ty: TypeId,
}

impl RecordField {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A node in the type graph.
///
/// Signatures (`Block`, `FunctionPointer`) store the return type first,
/// followed by the parameters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeDef {
    Primitive(PrimitiveKind),

    // Nullary object kinds
    /// `Protocol *`, the runtime protocol object.
    Protocol,
    /// `SEL`.
    Selector,
    Instancetype,
    /// `char *` / `unsigned char *`.
    CString,
    Unichar,
    VaList,

    // Object pointers
    /// `id` optionally qualified by protocols.
    Id { protocols: Vec<FqName> },
    /// `Class` optionally qualified by protocols.
    Class { protocols: Vec<FqName> },
    /// Pointer to an instance of a declared interface.
    Interface {
        name: FqName,
        protocols: Vec<FqName>,
    },

    // Records
    /// Named struct, resolved through its declaration.
    Struct(FqName),
    /// Named union, resolved through its declaration.
    Union(FqName),
    AnonymousStruct(Vec<RecordField>),
    AnonymousUnion(Vec<RecordField>),

    // Derived types
    Pointer(TypeId),
    ConstantArray { elem: TypeId, size: u32 },
    IncompleteArray(TypeId),
    Block(Vec<TypeId>),
    FunctionPointer(Vec<TypeId>),
}

/// Kind of declaration a type refers to by name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclRefKind {
    Interface,
    Protocol,
    Struct,
    Union,
}

/// A by-name declaration reference held by a type node.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TypeRef<'a> {
    pub kind: DeclRefKind,
    pub name: &'a FqName,
}

fn protocol_refs(list: &[FqName]) -> impl Iterator<Item = TypeRef<'_>> {
    list.iter().map(|name| TypeRef {
        kind: DeclRefKind::Protocol,
        name,
    })
}

impl TypeDef {
    /// Declarations this node names directly (not through children).
    pub fn decl_refs(&self) -> Vec<TypeRef<'_>> {
        match self {
            Self::Id { protocols } | Self::Class { protocols } => {
                protocol_refs(protocols).collect()
            }
            Self::Interface { name, protocols } => {
                let mut refs = vec![TypeRef {
                    kind: DeclRefKind::Interface,
                    name,
                }];
                refs.extend(protocol_refs(protocols));
                refs
            }
            Self::Struct(name) => vec![TypeRef {
                kind: DeclRefKind::Struct,
                name,
            }],
            Self::Union(name) => vec![TypeRef {
                kind: DeclRefKind::Union,
                name,
            }],
            _ => Vec::new(),
        }
    }
}
