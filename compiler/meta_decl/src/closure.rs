//! Referenced-type closure.

use rustc_hash::FxHashSet;

use meta_types::{TypeId, TypePool};

use crate::{DeclKey, DeclKind, DeclLookup, Declaration};

/// Every type node `decl` transitively depends on.
///
/// Member, field and signature types contribute themselves and their
/// structural sub-nodes. An interface additionally contributes the closure
/// of each adopted category and of its base interface, so the result for an
/// interface always contains the result for its base. References that do
/// not resolve contribute nothing.
///
/// Declarations are visited at most once, which bounds the walk on a cyclic
/// base chain.
#[tracing::instrument(level = "trace", skip_all, fields(decl = %decl.name))]
pub fn referenced_types<'a, L>(
    decl: &'a Declaration,
    pool: &TypePool,
    lookup: &'a L,
) -> FxHashSet<TypeId>
where
    L: DeclLookup + ?Sized,
{
    let mut types = FxHashSet::default();
    let mut visited = FxHashSet::default();
    visited.insert(decl.key());
    let mut stack = vec![decl];

    while let Some(current) = stack.pop() {
        for ty in current.own_types() {
            pool.collect_reachable(ty, &mut types);
        }

        let DeclKind::Interface(interface) = &current.kind else {
            continue;
        };
        let categories = interface.categories.iter().cloned().map(DeclKey::category);
        let base = interface.base.iter().cloned().map(DeclKey::interface);
        for key in categories.chain(base) {
            if visited.contains(&key) {
                continue;
            }
            match lookup.lookup(&key) {
                Some(next) => stack.push(next),
                None => tracing::trace!(%key, "unresolved reference skipped in closure"),
            }
            visited.insert(key);
        }
    }

    types
}
