//! Declaration identity.

use std::fmt;

use meta_types::{DeclRefKind, FqName};

/// Kind of a declaration, without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclKindTag {
    Interface,
    Protocol,
    Category,
    Struct,
    Union,
    Function,
    Var,
}

impl DeclKindTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Protocol => "protocol",
            Self::Category => "category",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Function => "function",
            Self::Var => "var",
        }
    }
}

impl From<DeclRefKind> for DeclKindTag {
    fn from(kind: DeclRefKind) -> Self {
        match kind {
            DeclRefKind::Interface => Self::Interface,
            DeclRefKind::Protocol => Self::Protocol,
            DeclRefKind::Struct => Self::Struct,
            DeclRefKind::Union => Self::Union,
        }
    }
}

impl fmt::Display for DeclKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(kind, name)`: unique within a finalized module.
///
/// Kinds live in separate namespaces, so an interface and a protocol may
/// share a name (`NSObject`).
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclKey {
    pub kind: DeclKindTag,
    pub name: FqName,
}

impl DeclKey {
    pub fn new(kind: DeclKindTag, name: FqName) -> Self {
        Self { kind, name }
    }

    pub fn interface(name: FqName) -> Self {
        Self::new(DeclKindTag::Interface, name)
    }

    pub fn protocol(name: FqName) -> Self {
        Self::new(DeclKindTag::Protocol, name)
    }

    pub fn category(name: FqName) -> Self {
        Self::new(DeclKindTag::Category, name)
    }
}

impl fmt::Display for DeclKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}
