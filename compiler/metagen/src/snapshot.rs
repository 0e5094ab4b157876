//! Cross-module declaration snapshot for batch runs.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use meta_decl::{DeclKey, DeclLookup, Declaration};
use meta_filter::ModuleDeclarations;

/// Declarations of every module in a batch, taken before any filter runs.
///
/// Each entry remembers the module it came from, so a module being filtered
/// never resolves one of its own (possibly already removed) declarations
/// through the snapshot.
#[derive(Debug, Default)]
pub struct ModuleSnapshot {
    decls: FxHashMap<DeclKey, SmallVec<[(usize, Declaration); 1]>>,
}

impl ModuleSnapshot {
    /// Snapshot `modules`; the owner of a declaration is its module's
    /// position in the slice.
    pub fn new(modules: &[ModuleDeclarations]) -> Self {
        let mut decls: FxHashMap<DeclKey, SmallVec<[(usize, Declaration); 1]>> =
            FxHashMap::default();
        for (owner, module) in modules.iter().enumerate() {
            for decl in module {
                decls
                    .entry(decl.key())
                    .or_default()
                    .push((owner, decl.clone()));
            }
        }
        Self { decls }
    }

    /// Everything outside module `owner`.
    pub fn excluding(&self, owner: usize) -> ExternalDecls<'_> {
        ExternalDecls {
            snapshot: self,
            owner,
        }
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// View of a [`ModuleSnapshot`] without one module. When several other
/// modules declare the same key, the earliest module wins.
#[derive(Clone, Copy, Debug)]
pub struct ExternalDecls<'a> {
    snapshot: &'a ModuleSnapshot,
    owner: usize,
}

impl DeclLookup for ExternalDecls<'_> {
    fn lookup(&self, key: &DeclKey) -> Option<&Declaration> {
        self.snapshot
            .decls
            .get(key)?
            .iter()
            .find(|(owner, _)| *owner != self.owner)
            .map(|(_, decl)| decl)
    }
}
