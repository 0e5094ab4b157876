use pretty_assertions::assert_eq;

use meta_decl::{DeclTable, FqName, InterfaceDecl};
use meta_types::{TypeId, TypePool};

use super::*;
use crate::test_helpers::{fq, instance_methods, interface_with, method, protocol};

fn selectors(module: &ModuleDeclarations, key: &DeclKey) -> Vec<String> {
    module
        .get(key)
        .and_then(Declaration::members)
        .map(|members| members.methods().map(|m| m.selector.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn removes_methods_inherited_from_base_chain() {
    let pool = TypePool::new();
    let external = DeclTable::new();
    let cx = FilterContext::new(&pool, &external);
    let module = ModuleDeclarations::with_declarations(
        "UIKit",
        vec![
            interface_with(
                "Root",
                None,
                &[],
                instance_methods(vec![method("init", &[TypeId::INSTANCETYPE])]),
            ),
            interface_with(
                "Middle",
                Some("Root"),
                &[],
                instance_methods(vec![method("tag", &[TypeId::LONG])]),
            ),
            interface_with(
                "Leaf",
                Some("Middle"),
                &[],
                instance_methods(vec![
                    method("init", &[TypeId::INSTANCETYPE]),
                    method("tag", &[TypeId::LONG]),
                    // Same selector, different signature: an override, kept.
                    method("tag", &[TypeId::INT]),
                    method("own", &[TypeId::VOID]),
                ]),
            ),
        ],
    );

    let module = RemoveDuplicateMembersFilter.apply(module, &cx);

    assert_eq!(
        selectors(&module, &DeclKey::interface(fq("Leaf"))),
        vec!["tag".to_string(), "own".to_string()]
    );
    assert_eq!(selectors(&module, &DeclKey::interface(fq("Middle"))), vec!["tag".to_string()]);
}

#[test]
fn removes_members_declared_by_adopted_protocols() {
    let pool = TypePool::new();
    let external = DeclTable::new();
    let cx = FilterContext::new(&pool, &external);

    let copy_getter = || {
        Property::new("copyable", TypeId::BOOL).with_getter(method("isCopyable", &[TypeId::BOOL]))
    };
    let base_protocol = protocol(
        "NSCopying",
        &[],
        Members {
            properties: vec![copy_getter()],
            ..instance_methods(vec![method("copy", &[TypeId::ID])])
        },
    );
    let derived_protocol = protocol(
        "NSMutableCopying",
        &["NSCopying"],
        instance_methods(vec![method("copy", &[TypeId::ID]), method("mutableCopy", &[TypeId::ID])]),
    );
    let mut class = interface_with(
        "NSString",
        None,
        &[],
        Members {
            properties: vec![
                copy_getter(),
                // Readwrite variant differs in accessor shape: kept.
                copy_getter().with_setter(method("setCopyable:", &[TypeId::VOID, TypeId::BOOL])),
            ],
            ..instance_methods(vec![
                method("copy", &[TypeId::ID]),
                method("mutableCopy", &[TypeId::ID]),
            ])
        },
    );
    if let DeclKind::Interface(decl) = &mut class.kind {
        decl.protocols = vec![fq("NSMutableCopying")];
    }
    let module = ModuleDeclarations::with_declarations(
        "UIKit",
        vec![base_protocol, derived_protocol, class],
    );

    let module = RemoveDuplicateMembersFilter.apply(module, &cx);

    assert_eq!(
        selectors(&module, &DeclKey::protocol(fq("NSMutableCopying"))),
        vec!["mutableCopy".to_string()]
    );
    assert!(selectors(&module, &DeclKey::interface(fq("NSString"))).is_empty());
    let properties = module
        .get(&DeclKey::interface(fq("NSString")))
        .and_then(Declaration::members)
        .map_or(0, |members| members.properties.len());
    assert_eq!(properties, 1);
}

#[test]
fn static_and_instance_methods_are_separate() {
    let pool = TypePool::new();
    let external = DeclTable::new();
    let cx = FilterContext::new(&pool, &external);
    let module = ModuleDeclarations::with_declarations(
        "UIKit",
        vec![
            interface_with("Root", None, &[], instance_methods(vec![method("new", &[TypeId::ID])])),
            interface_with(
                "Leaf",
                Some("Root"),
                &[],
                Members {
                    static_methods: vec![method("new", &[TypeId::ID])],
                    ..Members::default()
                },
            ),
        ],
    );

    let module = RemoveDuplicateMembersFilter.apply(module, &cx);

    assert_eq!(selectors(&module, &DeclKey::interface(fq("Leaf"))), vec!["new".to_string()]);
}

#[test]
fn external_bases_count_and_cycles_terminate() {
    let pool = TypePool::new();
    let external: DeclTable = std::iter::once(Declaration::new(
        FqName::new("ObjectiveC", "NSObject"),
        DeclKind::Interface(InterfaceDecl {
            base: Some(fq("Leaf")),
            members: instance_methods(vec![method("hash", &[TypeId::ULONG])]),
            ..InterfaceDecl::default()
        }),
    ))
    .collect();
    let cx = FilterContext::new(&pool, &external);
    let mut leaf = interface_with(
        "Leaf",
        None,
        &[],
        instance_methods(vec![method("hash", &[TypeId::ULONG]), method("leaf", &[TypeId::VOID])]),
    );
    if let DeclKind::Interface(decl) = &mut leaf.kind {
        decl.base = Some(FqName::new("ObjectiveC", "NSObject"));
    }
    let module = ModuleDeclarations::with_declarations("UIKit", vec![leaf]);

    let module = RemoveDuplicateMembersFilter.apply(module, &cx);

    assert_eq!(selectors(&module, &DeclKey::interface(fq("Leaf"))), vec!["leaf".to_string()]);
}
