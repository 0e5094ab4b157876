use pretty_assertions::assert_eq;

use meta_types::FqName;

use super::*;
use crate::{DeclKind, InterfaceDecl, ProtocolDecl};

fn interface(module: &str, name: &str, base: Option<&str>) -> Declaration {
    Declaration::new(
        FqName::new(module, name),
        DeclKind::Interface(InterfaceDecl {
            base: base.map(|base| FqName::new(module, base)),
            ..InterfaceDecl::default()
        }),
    )
}

#[test]
fn table_keeps_first_insert() {
    let mut table = DeclTable::new();
    assert!(table.insert(interface("Foundation", "NSArray", None)));
    assert!(!table.insert(interface("Foundation", "NSArray", Some("NSObject"))));

    let key = DeclKey::interface(FqName::new("Foundation", "NSArray"));
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup(&key).and_then(Declaration::base), None);
}

#[test]
fn kinds_are_separate_namespaces() {
    let decls = vec![
        interface("ObjectiveC", "NSObject", None),
        Declaration::new(
            FqName::new("ObjectiveC", "NSObject"),
            DeclKind::Protocol(ProtocolDecl::default()),
        ),
    ];
    let index = DeclIndex::new(&decls);
    let name = FqName::new("ObjectiveC", "NSObject");

    assert!(index.contains(&DeclKey::interface(name.clone())));
    assert!(index.contains(&DeclKey::protocol(name.clone())));
    assert!(!index.contains(&DeclKey::category(name)));
}

#[test]
fn index_prefers_first_occurrence() {
    let decls = vec![
        interface("UIKit", "UIView", Some("UIResponder")),
        interface("UIKit", "UIView", None),
    ];
    let index = DeclIndex::new(&decls);
    let found = index.get(&DeclKey::interface(FqName::new("UIKit", "UIView")));
    assert_eq!(found.and_then(Declaration::base), Some(&FqName::new("UIKit", "UIResponder")));
}

#[test]
fn layered_falls_back() {
    let local = vec![interface("UIKit", "UIView", Some("UIResponder"))];
    let external: DeclTable = [
        interface("UIKit", "UIResponder", None),
        interface("UIKit", "UIView", None),
    ]
    .into_iter()
    .collect();

    let index = DeclIndex::new(&local);
    let layered = Layered::new(&index, &external);

    let view = layered.lookup(&DeclKey::interface(FqName::new("UIKit", "UIView")));
    assert!(view.and_then(Declaration::base).is_some());
    assert!(layered
        .lookup(&DeclKey::interface(FqName::new("UIKit", "UIResponder")))
        .is_some());
    assert!(layered
        .lookup(&DeclKey::interface(FqName::new("UIKit", "UIWindow")))
        .is_none());
}
