//! Resolution of declaration references.
//!
//! Everything that follows a reference (closure, support analysis,
//! filters) goes through [`DeclLookup`], so it works the same over one
//! module, a snapshot of all modules, or a module layered over others.

use rustc_hash::FxHashMap;

use crate::{DeclKey, Declaration};

/// Resolve a declaration by `(kind, name)`.
pub trait DeclLookup {
    fn lookup(&self, key: &DeclKey) -> Option<&Declaration>;
}

impl<T: DeclLookup + ?Sized> DeclLookup for &T {
    fn lookup(&self, key: &DeclKey) -> Option<&Declaration> {
        (**self).lookup(key)
    }
}

/// Owned declaration table, e.g. a snapshot of every parsed module.
#[derive(Clone, Debug, Default)]
pub struct DeclTable {
    decls: FxHashMap<DeclKey, Declaration>,
}

impl DeclTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `decl`; an existing entry with the same key is kept.
    pub fn insert(&mut self, decl: Declaration) -> bool {
        use std::collections::hash_map::Entry;
        match self.decls.entry(decl.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(decl);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl FromIterator<Declaration> for DeclTable {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        let mut table = Self::new();
        for decl in iter {
            table.insert(decl);
        }
        table
    }
}

impl DeclLookup for DeclTable {
    fn lookup(&self, key: &DeclKey) -> Option<&Declaration> {
        self.decls.get(key)
    }
}

/// Borrowed index over a slice of declarations.
///
/// When a key occurs more than once the first occurrence wins.
#[derive(Debug)]
pub struct DeclIndex<'a> {
    decls: FxHashMap<DeclKey, &'a Declaration>,
}

impl<'a> DeclIndex<'a> {
    pub fn new(decls: &'a [Declaration]) -> Self {
        let mut map = FxHashMap::default();
        map.reserve(decls.len());
        for decl in decls {
            map.entry(decl.key()).or_insert(decl);
        }
        Self { decls: map }
    }

    pub fn contains(&self, key: &DeclKey) -> bool {
        self.decls.contains_key(key)
    }

    pub fn get(&self, key: &DeclKey) -> Option<&'a Declaration> {
        self.decls.get(key).copied()
    }
}

impl DeclLookup for DeclIndex<'_> {
    fn lookup(&self, key: &DeclKey) -> Option<&Declaration> {
        self.get(key)
    }
}

/// Looks in `primary` first, then in `fallback`.
pub struct Layered<'a> {
    pub primary: &'a dyn DeclLookup,
    pub fallback: &'a dyn DeclLookup,
}

impl<'a> Layered<'a> {
    pub fn new(primary: &'a dyn DeclLookup, fallback: &'a dyn DeclLookup) -> Self {
        Self { primary, fallback }
    }
}

impl DeclLookup for Layered<'_> {
    fn lookup(&self, key: &DeclKey) -> Option<&Declaration> {
        self.primary
            .lookup(key)
            .or_else(|| self.fallback.lookup(key))
    }
}

#[cfg(test)]
mod tests;
