//! Removal of declarations by name.

use rustc_hash::{FxHashMap, FxHashSet};

use meta_decl::{DeclIndex, DeclKey, DeclKind, DeclLookup, Declaration, FqName};

use crate::{Filter, FilterContext, ModuleDeclarations};

/// Removes declarations by name, of any kind, and repairs what referenced
/// them:
///
/// - an interface whose base is removed is reparented onto the nearest
///   surviving ancestor, following the removed chain into other modules
///   through the external declarations
/// - categories extending a removed interface are removed
/// - interfaces drop removed categories from their category lists
/// - interfaces, protocols and categories stop adopting removed protocols
///
/// Only declarations of the module being filtered are removed; references
/// to removed declarations of other modules are repaired all the same.
#[derive(Clone, Debug, Default)]
pub struct RemoveDeclarationsFilter {
    names: FxHashSet<FqName>,
}

impl RemoveDeclarationsFilter {
    pub fn new(names: impl IntoIterator<Item = FqName>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Filter for RemoveDeclarationsFilter {
    fn name(&self) -> &'static str {
        "remove-declarations"
    }

    fn apply(&self, module: ModuleDeclarations, cx: &FilterContext<'_>) -> ModuleDeclarations {
        if self.names.is_empty() {
            return module;
        }
        let (name, decls, errors) = module.into_parts();

        let removed_categories: FxHashSet<FqName> = decls
            .iter()
            .filter(|decl| match &decl.kind {
                DeclKind::Category(category) => {
                    self.names.contains(&decl.name) || self.names.contains(&category.extended)
                }
                _ => false,
            })
            .map(|decl| decl.name.clone())
            .collect();

        // New base for every interface whose base is removed.
        let reparent: FxHashMap<FqName, Option<FqName>> = {
            let index = DeclIndex::new(&decls);
            let lookup = cx.layered(&index);
            decls
                .iter()
                .filter_map(|decl| {
                    let base = decl.base()?;
                    self.names
                        .contains(base)
                        .then(|| (decl.name.clone(), self.surviving_base(base, &lookup)))
                })
                .collect()
        };

        let decls = decls
            .into_iter()
            .filter_map(|decl| self.rewrite(decl, &removed_categories, &reparent))
            .collect();
        ModuleDeclarations::from_parts(name, decls, errors)
    }
}

impl RemoveDeclarationsFilter {
    fn rewrite(
        &self,
        mut decl: Declaration,
        removed_categories: &FxHashSet<FqName>,
        reparent: &FxHashMap<FqName, Option<FqName>>,
    ) -> Option<Declaration> {
        let is_removed_category =
            matches!(decl.kind, DeclKind::Category(_)) && removed_categories.contains(&decl.name);
        if self.names.contains(&decl.name) || is_removed_category {
            tracing::debug!(decl = %decl.key(), "declaration removed");
            return None;
        }

        let adopted = match &mut decl.kind {
            DeclKind::Interface(interface) => {
                if let Some(base) = reparent.get(&decl.name) {
                    tracing::debug!(
                        decl = %decl.name,
                        base = ?base.as_ref().map(ToString::to_string),
                        "interface reparented"
                    );
                    interface.base.clone_from(base);
                }
                interface
                    .categories
                    .retain(|category| !removed_categories.contains(category));
                Some(&mut interface.protocols)
            }
            DeclKind::Protocol(protocol) => Some(&mut protocol.protocols),
            DeclKind::Category(category) => Some(&mut category.protocols),
            _ => None,
        };
        if let Some(protocols) = adopted {
            protocols.retain(|protocol| !self.names.contains(protocol));
        }
        Some(decl)
    }

    /// Follow removed interfaces up the chain, in this module first and then
    /// in the external declarations. A cycle made only of removed
    /// interfaces, or a removed interface that cannot be found, leaves no
    /// base.
    fn surviving_base(&self, start: &FqName, lookup: &dyn DeclLookup) -> Option<FqName> {
        let mut visited = FxHashSet::default();
        let mut current = start.clone();
        loop {
            if !self.names.contains(&current) {
                return Some(current);
            }
            if !visited.insert(current.clone()) {
                return None;
            }
            current = lookup
                .lookup(&DeclKey::interface(current))?
                .base()?
                .clone();
        }
    }
}
