//! Declaration nodes.
//!
//! One tagged sum ([`DeclKind`]) covers the closed set of declaration
//! kinds. Cross-references are [`FqName`]s, resolved through a
//! [`DeclLookup`](crate::DeclLookup) by whoever needs the target.

use bitflags::bitflags;
use meta_types::{FqName, RecordField, TypeId};

use crate::{DeclKey, DeclKindTag};

bitflags! {
    /// Attributes of an Objective-C method.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MethodFlags: u8 {
        /// Takes a trailing `...`.
        const VARIADIC = 1 << 0;
        /// `@optional` protocol requirement.
        const OPTIONAL = 1 << 1;
        /// Belongs to the `init` family.
        const INITIALIZER = 1 << 2;
        /// Returns a +1 reference (`ns_returns_retained`).
        const RETURNS_RETAINED = 1 << 3;
    }
}

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PropertyFlags: u8 {
        const READONLY = 1 << 0;
        /// `@property (class)`.
        const CLASS = 1 << 1;
        const OPTIONAL = 1 << 2;
    }
}

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FunctionFlags: u8 {
        const VARIADIC = 1 << 0;
        const RETURNS_RETAINED = 1 << 1;
    }
}

/// A method. `signature` is the return type followed by the parameters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Method {
    pub selector: String,
    pub signature: Vec<TypeId>,
    pub flags: MethodFlags,
}

impl Method {
    pub fn new(selector: impl Into<String>, signature: Vec<TypeId>) -> Self {
        Self {
            selector: selector.into(),
            signature,
            flags: MethodFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn return_type(&self) -> Option<TypeId> {
        self.signature.first().copied()
    }

    pub fn params(&self) -> &[TypeId] {
        self.signature.get(1..).unwrap_or_default()
    }

    /// Same selector and same signature; flags are not compared.
    pub fn same_as(&self, other: &Self) -> bool {
        self.selector == other.selector && self.signature == other.signature
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub name: String,
    pub ty: TypeId,
    pub getter: Option<Method>,
    pub setter: Option<Method>,
    pub flags: PropertyFlags,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            getter: None,
            setter: None,
            flags: PropertyFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_getter(mut self, getter: Method) -> Self {
        self.getter = Some(getter);
        self
    }

    #[must_use]
    pub fn with_setter(mut self, setter: Method) -> Self {
        self.setter = Some(setter);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: PropertyFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Property and every accessor signature type.
    pub fn types(&self) -> impl Iterator<Item = TypeId> + '_ {
        std::iter::once(self.ty).chain(
            self.getter
                .iter()
                .chain(self.setter.iter())
                .flat_map(|accessor| accessor.signature.iter().copied()),
        )
    }

    /// Same name and accessor shape, then the getter (or the setter when
    /// there is no getter) must match.
    pub fn same_as(&self, other: &Self) -> bool {
        if self.name != other.name
            || self.getter.is_some() != other.getter.is_some()
            || self.setter.is_some() != other.setter.is_some()
        {
            return false;
        }
        match (&self.getter, &other.getter, &self.setter, &other.setter) {
            (Some(a), Some(b), _, _) | (None, None, Some(a), Some(b)) => a.same_as(b),
            _ => true,
        }
    }
}

/// Members shared by interfaces, protocols and categories.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Members {
    pub instance_methods: Vec<Method>,
    pub static_methods: Vec<Method>,
    pub properties: Vec<Property>,
}

impl Members {
    pub fn is_empty(&self) -> bool {
        self.instance_methods.is_empty()
            && self.static_methods.is_empty()
            && self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.instance_methods.len() + self.static_methods.len() + self.properties.len()
    }

    /// Append `other`, keeping each list in order.
    pub fn append(&mut self, other: Self) {
        self.instance_methods.extend(other.instance_methods);
        self.static_methods.extend(other.static_methods);
        self.properties.extend(other.properties);
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.instance_methods.iter().chain(&self.static_methods)
    }

    pub fn static_method_mut(&mut self, selector: &str) -> Option<&mut Method> {
        self.static_methods
            .iter_mut()
            .find(|method| method.selector == selector)
    }

    /// Every type named by a member signature or property.
    pub fn types(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.methods()
            .flat_map(|method| method.signature.iter().copied())
            .chain(self.properties.iter().flat_map(Property::types))
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceDecl {
    pub base: Option<FqName>,
    pub protocols: Vec<FqName>,
    /// Categories adopted by this interface, in declaration order.
    pub categories: Vec<FqName>,
    pub members: Members,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolDecl {
    pub protocols: Vec<FqName>,
    pub members: Members,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryDecl {
    /// The interface this category extends.
    pub extended: FqName,
    pub protocols: Vec<FqName>,
    pub members: Members,
}

impl CategoryDecl {
    pub fn new(extended: FqName) -> Self {
        Self {
            extended,
            protocols: Vec::new(),
            members: Members::default(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordDecl {
    pub fields: Vec<RecordField>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionDecl {
    /// Return type, then parameters.
    pub signature: Vec<TypeId>,
    pub flags: FunctionFlags,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarDecl {
    pub ty: TypeId,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclKind {
    Interface(InterfaceDecl),
    Protocol(ProtocolDecl),
    Category(CategoryDecl),
    Struct(RecordDecl),
    Union(RecordDecl),
    Function(FunctionDecl),
    Var(VarDecl),
}

/// A named declaration owned by a module.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub name: FqName,
    pub kind: DeclKind,
}

impl Declaration {
    pub fn new(name: FqName, kind: DeclKind) -> Self {
        Self { name, kind }
    }

    pub fn tag(&self) -> DeclKindTag {
        match self.kind {
            DeclKind::Interface(_) => DeclKindTag::Interface,
            DeclKind::Protocol(_) => DeclKindTag::Protocol,
            DeclKind::Category(_) => DeclKindTag::Category,
            DeclKind::Struct(_) => DeclKindTag::Struct,
            DeclKind::Union(_) => DeclKindTag::Union,
            DeclKind::Function(_) => DeclKindTag::Function,
            DeclKind::Var(_) => DeclKindTag::Var,
        }
    }

    pub fn key(&self) -> DeclKey {
        DeclKey::new(self.tag(), self.name.clone())
    }

    pub fn members(&self) -> Option<&Members> {
        match &self.kind {
            DeclKind::Interface(decl) => Some(&decl.members),
            DeclKind::Protocol(decl) => Some(&decl.members),
            DeclKind::Category(decl) => Some(&decl.members),
            _ => None,
        }
    }

    pub fn members_mut(&mut self) -> Option<&mut Members> {
        match &mut self.kind {
            DeclKind::Interface(decl) => Some(&mut decl.members),
            DeclKind::Protocol(decl) => Some(&mut decl.members),
            DeclKind::Category(decl) => Some(&mut decl.members),
            _ => None,
        }
    }

    /// Adopted protocols of an interface, protocol or category.
    pub fn protocols(&self) -> &[FqName] {
        match &self.kind {
            DeclKind::Interface(decl) => &decl.protocols,
            DeclKind::Protocol(decl) => &decl.protocols,
            DeclKind::Category(decl) => &decl.protocols,
            _ => &[],
        }
    }

    /// Base interface, for interfaces only.
    pub fn base(&self) -> Option<&FqName> {
        match &self.kind {
            DeclKind::Interface(decl) => decl.base.as_ref(),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceDecl> {
        match &self.kind {
            DeclKind::Interface(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&CategoryDecl> {
        match &self.kind {
            DeclKind::Category(decl) => Some(decl),
            _ => None,
        }
    }

    /// Types named directly by this declaration (members, fields,
    /// signature), without following any declaration reference.
    pub fn own_types(&self) -> Vec<TypeId> {
        match &self.kind {
            DeclKind::Interface(InterfaceDecl { members, .. })
            | DeclKind::Protocol(ProtocolDecl { members, .. })
            | DeclKind::Category(CategoryDecl { members, .. }) => members.types().collect(),
            DeclKind::Struct(record) | DeclKind::Union(record) => {
                record.fields.iter().map(|field| field.ty).collect()
            }
            DeclKind::Function(function) => function.signature.clone(),
            DeclKind::Var(var) => vec![var.ty],
        }
    }
}
