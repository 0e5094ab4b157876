//! Module containers.
//!
//! [`ModuleDeclarations`] is the open state: filters consume and rebuild it.
//! [`FinalizedModule`] is the read-only state handed downstream; there is no
//! way back from it.

use rustc_hash::{FxHashMap, FxHashSet};

use meta_decl::{DeclIndex, DeclKey, DeclLookup, Declaration};

use crate::{DeclError, ModuleError};

/// Ordered declarations of one module. Insertion order is significant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleDeclarations {
    name: String,
    decls: Vec<Declaration>,
    errors: Vec<DeclError>,
}

impl ModuleDeclarations {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decls: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_declarations(name: impl Into<String>, decls: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            decls,
            errors: Vec::new(),
        }
    }

    /// Reassemble a module from the pieces of [`Self::into_parts`].
    pub fn from_parts(name: String, decls: Vec<Declaration>, errors: Vec<DeclError>) -> Self {
        Self {
            name,
            decls,
            errors,
        }
    }

    pub fn into_parts(self) -> (String, Vec<Declaration>, Vec<DeclError>) {
        (self.name, self.decls, self.errors)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, decl: Declaration) {
        self.decls.push(decl);
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.decls
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// First declaration with `key`.
    pub fn get(&self, key: &DeclKey) -> Option<&Declaration> {
        self.decls.iter().find(|decl| decl.tag() == key.kind && decl.name == key.name)
    }

    /// Index over the current declarations; first occurrence wins.
    pub fn index(&self) -> DeclIndex<'_> {
        DeclIndex::new(&self.decls)
    }

    /// Attach a declaration-level error.
    pub fn report(&mut self, error: DeclError) {
        tracing::debug!(module = %self.name, %error, "declaration error");
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[DeclError] {
        &self.errors
    }

    /// Close the module.
    ///
    /// Fails when two declarations share a `(kind, name)` key; the first
    /// repeated key is reported.
    pub fn finalize(self) -> Result<FinalizedModule, ModuleError> {
        let mut seen = FxHashSet::default();
        for decl in &self.decls {
            let key = decl.key();
            if seen.contains(&key) {
                return Err(ModuleError::DuplicateDeclaration {
                    module: self.name,
                    key,
                });
            }
            seen.insert(key);
        }

        let positions = self
            .decls
            .iter()
            .enumerate()
            .map(|(position, decl)| (decl.key(), position))
            .collect();
        tracing::debug!(
            module = %self.name,
            decls = self.decls.len(),
            errors = self.errors.len(),
            "module finalized"
        );
        Ok(FinalizedModule {
            name: self.name,
            decls: self.decls,
            errors: self.errors,
            positions,
        })
    }
}

impl<'a> IntoIterator for &'a ModuleDeclarations {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A module after filtering, ready for serialization.
#[derive(Clone, Debug)]
pub struct FinalizedModule {
    name: String,
    decls: Vec<Declaration>,
    errors: Vec<DeclError>,
    positions: FxHashMap<DeclKey, usize>,
}

impl FinalizedModule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.decls
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn errors(&self) -> &[DeclError] {
        &self.errors
    }

    pub fn get(&self, key: &DeclKey) -> Option<&Declaration> {
        self.positions.get(key).and_then(|&position| self.decls.get(position))
    }
}

impl DeclLookup for FinalizedModule {
    fn lookup(&self, key: &DeclKey) -> Option<&Declaration> {
        self.get(key)
    }
}

impl<'a> IntoIterator for &'a FinalizedModule {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
