//! Folding categories into the interfaces they extend.

use rustc_hash::FxHashMap;

use meta_decl::{CategoryDecl, DeclKey, DeclKind, Declaration, FqName};

use crate::{DeclError, Filter, FilterContext, ModuleDeclarations};

/// Folds categories into the interface they extend.
///
/// Members are appended after the interface's own, in category order, and
/// adopted protocols are added once. Only interfaces of the same module
/// absorb categories. A category extending an interface of another module
/// stays as is; one whose interface cannot be found anywhere stays and gets
/// an [`DeclError::UnresolvedReference`].
#[derive(Copy, Clone, Debug, Default)]
pub struct MergeCategoriesFilter;

impl Filter for MergeCategoriesFilter {
    fn name(&self) -> &'static str {
        "merge-categories"
    }

    fn apply(&self, module: ModuleDeclarations, cx: &FilterContext<'_>) -> ModuleDeclarations {
        let (name, decls, mut errors) = module.into_parts();

        let mut interfaces: FxHashMap<&FqName, usize> = FxHashMap::default();
        for (position, decl) in decls.iter().enumerate() {
            if matches!(decl.kind, DeclKind::Interface(_)) {
                interfaces.entry(&decl.name).or_insert(position);
            }
        }

        // Category position -> interface position.
        let mut targets: Vec<(usize, usize)> = Vec::new();
        for (position, decl) in decls.iter().enumerate() {
            let Some(category) = decl.as_category() else {
                continue;
            };
            if let Some(&target) = interfaces.get(&category.extended) {
                targets.push((position, target));
                continue;
            }
            let extended = DeclKey::interface(category.extended.clone());
            if cx.external.lookup(&extended).is_none() {
                tracing::debug!(category = %decl.name, %extended, "extended interface not found");
                errors.push(DeclError::UnresolvedReference {
                    decl: decl.key(),
                    target: extended,
                });
            }
        }

        let mut slots: Vec<Option<Declaration>> = decls.into_iter().map(Some).collect();
        for (position, target) in targets {
            match slots[position].take() {
                Some(Declaration {
                    name: category_name,
                    kind: DeclKind::Category(category),
                }) => {
                    if let Some(interface) = slots[target].as_mut() {
                        tracing::debug!(
                            category = %category_name,
                            interface = %interface.name,
                            "category merged"
                        );
                        merge_into(interface, &category_name, category);
                    }
                }
                other => slots[position] = other,
            }
        }

        let decls = slots.into_iter().flatten().collect();
        ModuleDeclarations::from_parts(name, decls, errors)
    }
}

fn merge_into(interface: &mut Declaration, category_name: &FqName, category: CategoryDecl) {
    let DeclKind::Interface(target) = &mut interface.kind else {
        return;
    };
    target.members.append(category.members);
    for protocol in category.protocols {
        if !target.protocols.contains(&protocol) {
            target.protocols.push(protocol);
        }
    }
    target.categories.retain(|adopted| adopted != category_name);
}
