//! Removal of repeated declarations.

use rustc_hash::FxHashSet;

use crate::{Filter, FilterContext, ModuleDeclarations};

/// Keeps the first declaration of each `(kind, name)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct DeduplicateDeclarationsFilter;

impl Filter for DeduplicateDeclarationsFilter {
    fn name(&self) -> &'static str {
        "deduplicate-declarations"
    }

    fn apply(&self, module: ModuleDeclarations, _cx: &FilterContext<'_>) -> ModuleDeclarations {
        let (name, decls, errors) = module.into_parts();
        let mut seen = FxHashSet::default();
        let decls = decls
            .into_iter()
            .filter(|decl| {
                let first = seen.insert(decl.key());
                if !first {
                    tracing::debug!(decl = %decl.key(), "duplicate declaration dropped");
                }
                first
            })
            .collect();
        ModuleDeclarations::from_parts(name, decls, errors)
    }
}
