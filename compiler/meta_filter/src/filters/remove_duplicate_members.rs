//! Removal of members already inherited from bases and protocols.

use rustc_hash::FxHashSet;

use meta_decl::{DeclIndex, DeclKey, DeclKind, DeclLookup, Declaration, Members, Method, Property};

use crate::{Filter, FilterContext, ModuleDeclarations};

/// Removes members an interface or protocol already inherits.
///
/// Inherited members are those of the base chain and of every adopted
/// protocol, transitively (protocols of protocols, protocols of bases).
/// Methods match by selector and signature; properties by name, accessor
/// shape and accessor signature. Each ancestor is visited once, so cyclic
/// base chains or protocol graphs are fine.
#[derive(Copy, Clone, Debug, Default)]
pub struct RemoveDuplicateMembersFilter;

impl Filter for RemoveDuplicateMembersFilter {
    fn name(&self) -> &'static str {
        "remove-duplicate-members"
    }

    fn apply(&self, module: ModuleDeclarations, cx: &FilterContext<'_>) -> ModuleDeclarations {
        let (name, decls, errors) = module.into_parts();

        let plan: Vec<Option<Members>> = {
            let index = DeclIndex::new(&decls);
            let lookup = cx.layered(&index);
            decls.iter().map(|decl| dedupe(decl, &lookup)).collect()
        };

        let decls = decls
            .into_iter()
            .zip(plan)
            .map(|(mut decl, members)| {
                if let (Some(members), Some(slot)) = (members, decl.members_mut()) {
                    *slot = members;
                }
                decl
            })
            .collect();
        ModuleDeclarations::from_parts(name, decls, errors)
    }
}

/// Members of `decl` without inherited duplicates, or `None` when nothing
/// changes.
fn dedupe(decl: &Declaration, lookup: &dyn DeclLookup) -> Option<Members> {
    if !matches!(decl.kind, DeclKind::Interface(_) | DeclKind::Protocol(_)) {
        return None;
    }
    let members = decl.members()?;
    let inherited = inherited_members(decl, lookup);
    if inherited.is_empty() {
        return None;
    }

    let kept = Members {
        instance_methods: retain_new(&members.instance_methods, &inherited, |m| {
            &m.instance_methods
        }),
        static_methods: retain_new(&members.static_methods, &inherited, |m| &m.static_methods),
        properties: members
            .properties
            .iter()
            .filter(|property| !inherited_property(property, &inherited))
            .cloned()
            .collect(),
    };
    if kept.len() == members.len() {
        return None;
    }
    tracing::debug!(
        decl = %decl.key(),
        removed = members.len() - kept.len(),
        "inherited duplicates removed"
    );
    Some(kept)
}

fn retain_new(
    own: &[Method],
    inherited: &[&Members],
    list: impl Fn(&Members) -> &Vec<Method>,
) -> Vec<Method> {
    own.iter()
        .filter(|method| {
            !inherited
                .iter()
                .any(|members| list(*members).iter().any(|other| method.same_as(other)))
        })
        .cloned()
        .collect()
}

fn inherited_property(property: &Property, inherited: &[&Members]) -> bool {
    inherited
        .iter()
        .any(|members| members.properties.iter().any(|other| property.same_as(other)))
}

/// Members of every ancestor and adopted protocol, nearest first.
fn inherited_members<'a>(decl: &Declaration, lookup: &'a dyn DeclLookup) -> Vec<&'a Members> {
    let mut visited = FxHashSet::default();
    visited.insert(decl.key());
    let mut queue: Vec<DeclKey> = ancestors_of(decl).collect();
    let mut inherited = Vec::new();

    let mut cursor = 0;
    while let Some(key) = queue.get(cursor).cloned() {
        cursor += 1;
        if !visited.insert(key.clone()) {
            continue;
        }
        let Some(ancestor) = lookup.lookup(&key) else {
            continue;
        };
        if let Some(members) = ancestor.members() {
            inherited.push(members);
        }
        queue.extend(ancestors_of(ancestor));
    }
    inherited
}

fn ancestors_of(decl: &Declaration) -> impl Iterator<Item = DeclKey> + '_ {
    let protocols = decl.protocols().iter().cloned().map(DeclKey::protocol);
    let base = decl.base().cloned().map(DeclKey::interface);
    base.into_iter().chain(protocols)
}

#[cfg(test)]
mod tests;
