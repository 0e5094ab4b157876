//! Interning arena for type nodes.
//!
//! Every [`TypeDef`] lives in exactly one `TypePool` and is addressed by a
//! [`TypeId`]. Structurally equal definitions intern to the same handle,
//! which makes `TypeId` equality the identity used by support caches and
//! referenced-type sets.

mod format;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::{
    EncodingError, FqName, PrimitiveKind, RecordField, TypeDef, TypeEncoding, TypeId, TypeRef,
};

/// Owner of all type nodes of one generator run.
///
/// The pool is only mutated while declarations are being built. Analysis
/// and filtering borrow it immutably, so one pool can be shared by modules
/// processed on different threads.
#[derive(Clone, Debug)]
pub struct TypePool {
    types: Vec<TypeDef>,
    map: FxHashMap<TypeDef, TypeId>,
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

impl TypePool {
    /// Create a pool with primitives and nullary kinds at their fixed ids.
    pub fn new() -> Self {
        let mut pool = Self {
            types: Vec::with_capacity(256),
            map: FxHashMap::default(),
        };

        for kind in PrimitiveKind::ALL {
            pool.push(TypeDef::Primitive(kind));
        }
        // Order must match the `TypeId` constants 22-29.
        for def in [
            TypeDef::Protocol,
            TypeDef::Selector,
            TypeDef::Instancetype,
            TypeDef::CString,
            TypeDef::Unichar,
            TypeDef::VaList,
            TypeDef::Id {
                protocols: Vec::new(),
            },
            TypeDef::Class {
                protocols: Vec::new(),
            },
        ] {
            pool.push(def);
        }

        debug_assert_eq!(pool.types.len(), TypeId::PREINTERNED as usize);
        pool
    }

    #[allow(clippy::cast_possible_truncation)]
    fn push(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId::from_raw(self.types.len() as u32);
        self.types.push(def.clone());
        self.map.insert(def, id);
        id
    }

    /// Intern a definition, returning the existing handle when present.
    pub fn intern(&mut self, def: TypeDef) -> TypeId {
        if let Some(&id) = self.map.get(&def) {
            return id;
        }
        self.push(def)
    }

    /// Look up a node. Panics on a handle from another pool.
    #[inline]
    pub fn get(&self, id: TypeId) -> &TypeDef {
        &self.types[id.raw() as usize]
    }

    #[inline]
    pub fn try_get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.raw() as usize)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // === Constructors ===

    pub fn pointer(&mut self, pointee: TypeId) -> TypeId {
        self.intern(TypeDef::Pointer(pointee))
    }

    pub fn constant_array(&mut self, elem: TypeId, size: u32) -> TypeId {
        self.intern(TypeDef::ConstantArray { elem, size })
    }

    pub fn incomplete_array(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeDef::IncompleteArray(elem))
    }

    /// Block type; `signature` is return type then parameters.
    pub fn block(&mut self, signature: &[TypeId]) -> TypeId {
        self.intern(TypeDef::Block(signature.to_vec()))
    }

    /// Function pointer; `signature` is return type then parameters.
    pub fn function_pointer(&mut self, signature: &[TypeId]) -> TypeId {
        self.intern(TypeDef::FunctionPointer(signature.to_vec()))
    }

    pub fn struct_ref(&mut self, name: FqName) -> TypeId {
        self.intern(TypeDef::Struct(name))
    }

    pub fn union_ref(&mut self, name: FqName) -> TypeId {
        self.intern(TypeDef::Union(name))
    }

    pub fn interface(&mut self, name: FqName, protocols: Vec<FqName>) -> TypeId {
        self.intern(TypeDef::Interface { name, protocols })
    }

    pub fn id(&mut self, protocols: Vec<FqName>) -> TypeId {
        self.intern(TypeDef::Id { protocols })
    }

    pub fn class(&mut self, protocols: Vec<FqName>) -> TypeId {
        self.intern(TypeDef::Class { protocols })
    }

    pub fn anonymous_struct(&mut self, fields: Vec<RecordField>) -> TypeId {
        self.intern(TypeDef::AnonymousStruct(fields))
    }

    pub fn anonymous_union(&mut self, fields: Vec<RecordField>) -> TypeId {
        self.intern(TypeDef::AnonymousUnion(fields))
    }

    // === Queries ===

    /// Direct structural children of a node.
    ///
    /// Named records and interfaces have no children here: their contents
    /// belong to declarations.
    pub fn children(&self, id: TypeId) -> SmallVec<[TypeId; 4]> {
        match self.get(id) {
            TypeDef::Pointer(inner)
            | TypeDef::IncompleteArray(inner)
            | TypeDef::ConstantArray { elem: inner, .. } => SmallVec::from_slice(&[*inner]),
            TypeDef::Block(signature) | TypeDef::FunctionPointer(signature) => {
                SmallVec::from_slice(signature)
            }
            TypeDef::AnonymousStruct(fields) | TypeDef::AnonymousUnion(fields) => {
                fields.iter().map(|field| field.ty).collect()
            }
            _ => SmallVec::new(),
        }
    }

    /// Add `root` and every node structurally reachable from it to `out`.
    ///
    /// Sub-trees already present in `out` are not walked again.
    pub fn collect_reachable(&self, root: TypeId, out: &mut FxHashSet<TypeId>) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if out.insert(id) {
                stack.extend(self.children(id));
            }
        }
    }

    /// Pre-order visit of `root` and its structural sub-tree.
    ///
    /// Shared sub-nodes are visited once per occurrence.
    pub fn walk(&self, root: TypeId, mut f: impl FnMut(TypeId, &TypeDef)) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            f(id, self.get(id));
            let children = self.children(id);
            stack.extend(children.into_iter().rev());
        }
    }

    /// Declarations named directly by a node.
    pub fn referenced_decls(&self, id: TypeId) -> Vec<TypeRef<'_>> {
        self.get(id).decl_refs()
    }

    /// ABI encoding of a node.
    ///
    /// Fails for primitive kinds outside the supported set. The result does
    /// not depend on any support cache or on earlier calls.
    pub fn encoding(&self, id: TypeId) -> Result<TypeEncoding, EncodingError> {
        let encoding = match self.get(id) {
            TypeDef::Primitive(kind) => {
                return kind.encoding().ok_or_else(|| {
                    tracing::error!(kind = ?kind, "encoding requested for unsupported primitive");
                    EncodingError::UnmappedType {
                        ty: kind.c_name().to_string(),
                    }
                })
            }
            TypeDef::Protocol => TypeEncoding::Protocol,
            TypeDef::Selector => TypeEncoding::Selector,
            TypeDef::Instancetype => TypeEncoding::Instancetype,
            TypeDef::CString => TypeEncoding::CString,
            TypeDef::Unichar => TypeEncoding::Unichar,
            TypeDef::VaList => TypeEncoding::VaList,
            TypeDef::Id { .. } => TypeEncoding::Id,
            TypeDef::Class { .. } => TypeEncoding::Class,
            TypeDef::Interface { .. } => TypeEncoding::InterfaceReference,
            TypeDef::Struct(_) => TypeEncoding::StructReference,
            TypeDef::Union(_) => TypeEncoding::UnionReference,
            TypeDef::AnonymousStruct(_) => TypeEncoding::AnonymousStruct,
            TypeDef::AnonymousUnion(_) => TypeEncoding::AnonymousUnion,
            TypeDef::Pointer(_) => TypeEncoding::Pointer,
            TypeDef::ConstantArray { .. } => TypeEncoding::ConstantArray,
            TypeDef::IncompleteArray(_) => TypeEncoding::IncompleteArray,
            TypeDef::Block(_) => TypeEncoding::Block,
            TypeDef::FunctionPointer(_) => TypeEncoding::FunctionPointer,
        };
        Ok(encoding)
    }
}
