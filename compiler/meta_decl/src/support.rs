//! Support analysis.
//!
//! Decides whether a type or declaration can be represented in the binding
//! metadata. Types and declarations form one graph (a named record type
//! resolves to its declaration, whose fields may point back at it), so the
//! analysis is memoized per node and detects cycles.
//!
//! # Cycle policy
//!
//! A node revisited while it is still being evaluated is assumed to be
//! supported ([`CYCLE_ASSUMPTION`]). Any `true` that relied on such an
//! assumption is provisional: it is committed only when the node it assumed
//! about resolves `true` as well, and it is discarded when that node turns
//! out unsupported. `false` never depends on an assumption and is cached
//! immediately. Cached results therefore do not depend on query order.
//!
//! # Scope
//!
//! A [`SupportAnalyzer`] owns its caches. Create one per query or per
//! module filter stage; never share one between modules.

use rustc_hash::FxHashMap;

use meta_types::{ensure_sufficient_stack, TypeDef, TypeId, TypePool};

use crate::{DeclKey, DeclKind, DeclKindTag, DeclLookup, Declaration, Method, Property};

/// Value assumed for a node reached again through a cycle.
pub const CYCLE_ASSUMPTION: bool = true;

/// `low` of an evaluation that assumed nothing about open nodes.
const NO_ASSUMPTION: usize = usize::MAX;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
enum Node {
    Type(TypeId),
    Decl(DeclKey),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Mark {
    /// On the evaluation stack at this depth.
    InProgress(usize),
    /// `true`, pending the open node at depth `low`.
    Provisional(usize),
    Resolved(bool),
}

#[derive(Copy, Clone, Debug)]
struct Eval {
    supported: bool,
    /// Shallowest open node this result assumed about.
    low: usize,
}

impl Eval {
    const UNSUPPORTED: Self = Self {
        supported: false,
        low: NO_ASSUMPTION,
    };
    const SUPPORTED: Self = Self {
        supported: true,
        low: NO_ASSUMPTION,
    };

    fn from_bool(supported: bool) -> Self {
        if supported {
            Self::SUPPORTED
        } else {
            Self::UNSUPPORTED
        }
    }
}

/// Memoized support analysis over one type pool and declaration set.
pub struct SupportAnalyzer<'a> {
    pool: &'a TypePool,
    lookup: &'a dyn DeclLookup,
    types: FxHashMap<TypeId, Mark>,
    decls: FxHashMap<DeclKey, Mark>,
    /// Nodes holding a provisional `true`, innermost last.
    provisional: Vec<Node>,
    depth: usize,
}

impl<'a> SupportAnalyzer<'a> {
    pub fn new(pool: &'a TypePool, lookup: &'a dyn DeclLookup) -> Self {
        Self {
            pool,
            lookup,
            types: FxHashMap::default(),
            decls: FxHashMap::default(),
            provisional: Vec::new(),
            depth: 0,
        }
    }

    pub fn is_type_supported(&mut self, id: TypeId) -> bool {
        self.eval(Node::Type(id), None).supported
    }

    /// Support of a declaration resolved by key. Unresolved keys are
    /// unsupported.
    pub fn is_key_supported(&mut self, key: &DeclKey) -> bool {
        self.eval(Node::Decl(key.clone()), None).supported
    }

    /// Support of `decl`, which need not be reachable through the lookup.
    pub fn is_decl_supported(&mut self, decl: &Declaration) -> bool {
        self.eval(Node::Decl(decl.key()), Some(decl)).supported
    }

    /// A method is supported when it has a return type and every type of
    /// its signature is supported.
    pub fn is_method_supported(&mut self, method: &Method) -> bool {
        !method.signature.is_empty()
            && method
                .signature
                .iter()
                .all(|&ty| self.is_type_supported(ty))
    }

    /// A property is supported when its type and both accessors are.
    pub fn is_property_supported(&mut self, property: &Property) -> bool {
        self.is_type_supported(property.ty)
            && property
                .getter
                .iter()
                .chain(property.setter.iter())
                .all(|accessor| self.is_method_supported(accessor))
    }

    /// Committed result for `id`, if any.
    pub fn cached_type(&self, id: TypeId) -> Option<bool> {
        match self.types.get(&id) {
            Some(Mark::Resolved(supported)) => Some(*supported),
            _ => None,
        }
    }

    /// Committed result for `key`, if any.
    pub fn cached_decl(&self, key: &DeclKey) -> Option<bool> {
        match self.decls.get(key) {
            Some(Mark::Resolved(supported)) => Some(*supported),
            _ => None,
        }
    }

    // === Evaluation ===

    fn mark(&self, node: &Node) -> Option<Mark> {
        match node {
            Node::Type(id) => self.types.get(id).copied(),
            Node::Decl(key) => self.decls.get(key).copied(),
        }
    }

    fn set_mark(&mut self, node: Node, mark: Mark) {
        match node {
            Node::Type(id) => {
                self.types.insert(id, mark);
            }
            Node::Decl(key) => {
                self.decls.insert(key, mark);
            }
        }
    }

    fn clear_mark(&mut self, node: &Node) {
        match node {
            Node::Type(id) => {
                self.types.remove(id);
            }
            Node::Decl(key) => {
                self.decls.remove(key);
            }
        }
    }

    /// `hint` is the declaration behind a `Node::Decl`, when the caller
    /// already has it.
    fn eval(&mut self, node: Node, hint: Option<&Declaration>) -> Eval {
        match self.mark(&node) {
            Some(Mark::Resolved(supported)) => return Eval::from_bool(supported),
            Some(Mark::Provisional(low)) => {
                return Eval {
                    supported: true,
                    low,
                }
            }
            Some(Mark::InProgress(depth)) => {
                tracing::trace!(?node, assumed = CYCLE_ASSUMPTION, "support cycle detected");
                return Eval {
                    supported: CYCLE_ASSUMPTION,
                    low: depth,
                };
            }
            None => {}
        }

        let depth = self.depth;
        let watermark = self.provisional.len();
        self.set_mark(node.clone(), Mark::InProgress(depth));
        self.depth += 1;
        let result = ensure_sufficient_stack(|| match &node {
            Node::Type(id) => self.compute_type(*id),
            Node::Decl(key) => self.compute_decl(key, hint),
        });
        self.depth -= 1;

        if !result.supported {
            for stale in self.provisional.split_off(watermark) {
                self.clear_mark(&stale);
            }
            self.set_mark(node, Mark::Resolved(false));
            return Eval::UNSUPPORTED;
        }

        if result.low >= depth {
            for settled in self.provisional.split_off(watermark) {
                self.set_mark(settled, Mark::Resolved(true));
            }
            self.set_mark(node, Mark::Resolved(true));
            return Eval::SUPPORTED;
        }

        self.set_mark(node.clone(), Mark::Provisional(result.low));
        self.provisional.push(node);
        result
    }

    /// AND over `children`, stopping at the first unsupported one.
    fn eval_all(&mut self, children: impl IntoIterator<Item = Node>) -> Eval {
        let mut low = NO_ASSUMPTION;
        for child in children {
            let eval = self.eval(child, None);
            if !eval.supported {
                return Eval::UNSUPPORTED;
            }
            low = low.min(eval.low);
        }
        Eval {
            supported: true,
            low,
        }
    }

    fn compute_type(&mut self, id: TypeId) -> Eval {
        let pool = self.pool;
        match pool.get(id) {
            TypeDef::Primitive(kind) => Eval::from_bool(kind.is_supported()),
            TypeDef::Protocol
            | TypeDef::Selector
            | TypeDef::Instancetype
            | TypeDef::CString
            | TypeDef::Unichar
            | TypeDef::VaList
            | TypeDef::Id { .. }
            | TypeDef::Class { .. } => Eval::SUPPORTED,
            // Protocol qualifiers do not affect representability.
            TypeDef::Interface { name, .. } => {
                self.eval(Node::Decl(DeclKey::interface(name.clone())), None)
            }
            TypeDef::Struct(name) => self.eval(
                Node::Decl(DeclKey::new(DeclKindTag::Struct, name.clone())),
                None,
            ),
            TypeDef::Union(name) => self.eval(
                Node::Decl(DeclKey::new(DeclKindTag::Union, name.clone())),
                None,
            ),
            TypeDef::AnonymousStruct(_)
            | TypeDef::AnonymousUnion(_)
            | TypeDef::Pointer(_)
            | TypeDef::ConstantArray { .. }
            | TypeDef::IncompleteArray(_)
            | TypeDef::Block(_)
            | TypeDef::FunctionPointer(_) => {
                self.eval_all(pool.children(id).into_iter().map(Node::Type))
            }
        }
    }

    fn compute_decl(&mut self, key: &DeclKey, hint: Option<&Declaration>) -> Eval {
        let lookup = self.lookup;
        let Some(decl) = hint.or_else(|| lookup.lookup(key)) else {
            tracing::debug!(%key, "unresolved declaration is unsupported");
            return Eval::UNSUPPORTED;
        };

        match &decl.kind {
            DeclKind::Interface(interface) => match &interface.base {
                Some(base) => self.eval(Node::Decl(DeclKey::interface(base.clone())), None),
                None => Eval::SUPPORTED,
            },
            DeclKind::Category(category) => {
                self.eval(Node::Decl(DeclKey::interface(category.extended.clone())), None)
            }
            DeclKind::Protocol(_) => Eval::SUPPORTED,
            DeclKind::Struct(record) | DeclKind::Union(record) => {
                self.eval_all(record.fields.iter().map(|field| Node::Type(field.ty)))
            }
            DeclKind::Function(function) => {
                self.eval_all(function.signature.iter().copied().map(Node::Type))
            }
            DeclKind::Var(var) => self.eval(Node::Type(var.ty), None),
        }
    }
}

/// Support of one type, with fresh caches.
pub fn is_type_supported(pool: &TypePool, lookup: &dyn DeclLookup, id: TypeId) -> bool {
    SupportAnalyzer::new(pool, lookup).is_type_supported(id)
}

/// Support of one declaration, with fresh caches.
pub fn is_decl_supported(pool: &TypePool, lookup: &dyn DeclLookup, decl: &Declaration) -> bool {
    SupportAnalyzer::new(pool, lookup).is_decl_supported(decl)
}

#[cfg(test)]
mod tests;
