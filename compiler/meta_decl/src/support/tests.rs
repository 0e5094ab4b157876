use pretty_assertions::assert_eq;

use meta_types::{FqName, PrimitiveKind, RecordField};

use super::*;
use crate::{CategoryDecl, DeclTable, FunctionDecl, FunctionFlags, InterfaceDecl, RecordDecl};

fn name(text: &str) -> FqName {
    FqName::new("Test", text)
}

fn record(text: &str, fields: Vec<(&str, TypeId)>) -> Declaration {
    Declaration::new(
        name(text),
        DeclKind::Struct(RecordDecl {
            fields: fields
                .into_iter()
                .map(|(field, ty)| RecordField::new(field, ty))
                .collect(),
        }),
    )
}

fn interface(text: &str, base: Option<&str>) -> Declaration {
    Declaration::new(
        name(text),
        DeclKind::Interface(InterfaceDecl {
            base: base.map(name),
            ..InterfaceDecl::default()
        }),
    )
}

fn struct_key(text: &str) -> DeclKey {
    DeclKey::new(DeclKindTag::Struct, name(text))
}

// ── Types ───────────────────────────────────────────────────────

#[test]
fn primitive_support_follows_kind() {
    let pool = TypePool::new();
    let table = DeclTable::new();
    let mut analyzer = SupportAnalyzer::new(&pool, &table);

    for kind in PrimitiveKind::ALL {
        assert_eq!(
            analyzer.is_type_supported(TypeId::primitive(kind)),
            kind.is_supported(),
            "{kind:?}"
        );
    }
    assert!(!analyzer.is_type_supported(TypeId::INT128));
    assert!(!analyzer.is_type_supported(TypeId::UINT128));
}

#[test]
fn unsupported_primitive_is_false_regardless_of_history() {
    let mut pool = TypePool::new();
    let ptr = pool.pointer(TypeId::INT128);
    let table = DeclTable::new();
    let mut analyzer = SupportAnalyzer::new(&pool, &table);

    assert!(analyzer.is_type_supported(TypeId::INT));
    assert!(!analyzer.is_type_supported(ptr));
    assert!(!analyzer.is_type_supported(TypeId::INT128));
    assert_eq!(analyzer.cached_type(TypeId::INT128), Some(false));
}

#[test]
fn nullary_object_kinds_are_supported() {
    let mut pool = TypePool::new();
    let qualified = pool.id(vec![name("Missing")]);
    let table = DeclTable::new();

    for id in [
        TypeId::PROTOCOL,
        TypeId::SELECTOR,
        TypeId::INSTANCETYPE,
        TypeId::CSTRING,
        TypeId::UNICHAR,
        TypeId::VA_LIST,
        TypeId::ID,
        TypeId::CLASS,
        qualified,
    ] {
        assert!(is_type_supported(&pool, &table, id), "{id:?}");
    }
}

#[test]
fn composites_require_every_child() {
    let mut pool = TypePool::new();
    let good = pool.block(&[TypeId::VOID, TypeId::INT]);
    let bad = pool.function_pointer(&[TypeId::VOID, TypeId::UINT128]);
    let arr = pool.constant_array(bad, 2);
    let anon = pool.anonymous_union(vec![
        RecordField::new("a", TypeId::INT),
        RecordField::new("b", TypeId::INT128),
    ]);
    let table = DeclTable::new();

    assert!(is_type_supported(&pool, &table, good));
    assert!(!is_type_supported(&pool, &table, bad));
    assert!(!is_type_supported(&pool, &table, arr));
    assert!(!is_type_supported(&pool, &table, anon));
}

#[test]
fn named_types_follow_their_declarations() {
    let mut pool = TypePool::new();
    let point = pool.struct_ref(name("Point"));
    let wide = pool.struct_ref(name("Wide"));
    let missing = pool.struct_ref(name("Missing"));
    let view = pool.interface(name("View"), vec![name("UnknownProtocol")]);
    let table: DeclTable = [
        record("Point", vec![("x", TypeId::DOUBLE)]),
        record("Wide", vec![("x", TypeId::INT128)]),
        interface("View", None),
    ]
    .into_iter()
    .collect();

    assert!(is_type_supported(&pool, &table, point));
    assert!(!is_type_supported(&pool, &table, wide));
    assert!(!is_type_supported(&pool, &table, missing));
    assert!(is_type_supported(&pool, &table, view));
}

// ── Declarations ────────────────────────────────────────────────

#[test]
fn interface_support_follows_base_chain() {
    let pool = TypePool::new();
    let table: DeclTable = [
        interface("Root", None),
        interface("Child", Some("Root")),
        interface("Orphan", Some("Missing")),
        interface("Grandchild", Some("Orphan")),
    ]
    .into_iter()
    .collect();
    let mut analyzer = SupportAnalyzer::new(&pool, &table);

    assert!(analyzer.is_key_supported(&DeclKey::interface(name("Child"))));
    assert!(!analyzer.is_key_supported(&DeclKey::interface(name("Orphan"))));
    assert!(!analyzer.is_key_supported(&DeclKey::interface(name("Grandchild"))));
}

#[test]
fn category_follows_extended_interface() {
    let pool = TypePool::new();
    let table: DeclTable = std::iter::once(interface("View", None)).collect();
    let ok = Declaration::new(
        name("ViewExtras"),
        DeclKind::Category(CategoryDecl::new(name("View"))),
    );
    let dangling = Declaration::new(
        name("GhostExtras"),
        DeclKind::Category(CategoryDecl::new(name("Ghost"))),
    );

    assert!(is_decl_supported(&pool, &table, &ok));
    assert!(!is_decl_supported(&pool, &table, &dangling));
}

#[test]
fn function_requires_whole_signature() {
    let pool = TypePool::new();
    let table = DeclTable::new();
    let function = |signature: Vec<TypeId>| {
        Declaration::new(
            name("f"),
            DeclKind::Function(FunctionDecl {
                signature,
                flags: FunctionFlags::empty(),
            }),
        )
    };

    assert!(is_decl_supported(&pool, &table, &function(vec![TypeId::VOID, TypeId::INT])));
    assert!(!is_decl_supported(&pool, &table, &function(vec![TypeId::INT128])));
}

#[test]
fn members_support() {
    let pool = TypePool::new();
    let table = DeclTable::new();
    let mut analyzer = SupportAnalyzer::new(&pool, &table);

    assert!(analyzer.is_method_supported(&Method::new("count", vec![TypeId::ULONG])));
    assert!(!analyzer.is_method_supported(&Method::new("wide", vec![TypeId::INT128])));
    assert!(!analyzer.is_method_supported(&Method::new("broken", Vec::new())));

    let property = Property::new("value", TypeId::INT)
        .with_getter(Method::new("value", vec![TypeId::INT]))
        .with_setter(Method::new("setValue:", vec![TypeId::VOID, TypeId::INT128]));
    assert!(!analyzer.is_property_supported(&property));
}

// ── Cycles ──────────────────────────────────────────────────────

#[test]
fn self_referential_record_terminates_supported() {
    let mut pool = TypePool::new();
    let node = pool.struct_ref(name("Node"));
    let next = pool.pointer(node);
    let table: DeclTable =
        std::iter::once(record("Node", vec![("value", TypeId::INT), ("next", next)])).collect();
    let mut analyzer = SupportAnalyzer::new(&pool, &table);

    assert_eq!(analyzer.is_type_supported(node), CYCLE_ASSUMPTION);
    assert_eq!(analyzer.cached_decl(&struct_key("Node")), Some(true));
    assert_eq!(analyzer.cached_type(next), Some(true));
}

#[test]
fn self_referential_unsupported_record_is_false() {
    let mut pool = TypePool::new();
    let node = pool.struct_ref(name("Node"));
    let next = pool.pointer(node);
    let table: DeclTable =
        std::iter::once(record("Node", vec![("next", next), ("wide", TypeId::INT128)])).collect();

    assert!(!is_type_supported(&pool, &table, node));
    assert!(!is_type_supported(&pool, &table, next));
}

#[test]
fn provisional_results_are_discarded_when_cycle_head_fails() {
    // A -> B -> A, and A also holds an unsupported field.
    let mut pool = TypePool::new();
    let a = pool.struct_ref(name("A"));
    let b = pool.struct_ref(name("B"));
    let ptr_a = pool.pointer(a);
    let ptr_b = pool.pointer(b);
    let table: DeclTable = [
        record("A", vec![("b", ptr_b), ("wide", TypeId::INT128)]),
        record("B", vec![("a", ptr_a)]),
    ]
    .into_iter()
    .collect();

    let mut analyzer = SupportAnalyzer::new(&pool, &table);
    assert!(!analyzer.is_type_supported(a));
    // B was only "supported" under the assumption that A is.
    assert_ne!(analyzer.cached_decl(&struct_key("B")), Some(true));
    assert_ne!(analyzer.cached_type(ptr_b), Some(true));

    // Same analyzer, now asking about B directly.
    assert!(!analyzer.is_type_supported(b));
    assert_eq!(analyzer.cached_decl(&struct_key("B")), Some(false));
}

#[test]
fn results_do_not_depend_on_query_order() {
    let mut pool = TypePool::new();
    let a = pool.struct_ref(name("A"));
    let b = pool.struct_ref(name("B"));
    let c = pool.struct_ref(name("C"));
    let ptr_a = pool.pointer(a);
    let ptr_b = pool.pointer(b);
    let ptr_c = pool.pointer(c);
    let table: DeclTable = [
        record("A", vec![("b", ptr_b), ("c", ptr_c)]),
        record("B", vec![("a", ptr_a)]),
        record("C", vec![("wide", TypeId::INT128)]),
    ]
    .into_iter()
    .collect();

    let orders = [[a, b, c], [b, a, c], [c, b, a], [b, c, a]];
    for order in orders {
        let mut analyzer = SupportAnalyzer::new(&pool, &table);
        let results: Vec<bool> = order.iter().map(|&id| analyzer.is_type_supported(id)).collect();
        for (&id, supported) in order.iter().zip(results) {
            assert!(!supported, "{id:?} in order {order:?}");
        }
    }
}

#[test]
fn mutually_recursive_interfaces_terminate() {
    let pool = TypePool::new();
    let table: DeclTable = [interface("A", Some("B")), interface("B", Some("A"))]
        .into_iter()
        .collect();
    let mut analyzer = SupportAnalyzer::new(&pool, &table);

    assert_eq!(analyzer.is_key_supported(&DeclKey::interface(name("A"))), CYCLE_ASSUMPTION);
    assert_eq!(analyzer.cached_decl(&DeclKey::interface(name("B"))), Some(CYCLE_ASSUMPTION));
}

#[test]
fn deep_pointer_chain_does_not_overflow() {
    let mut pool = TypePool::new();
    let mut id = TypeId::INT;
    for _ in 0..50_000 {
        id = pool.pointer(id);
    }
    let table = DeclTable::new();
    assert!(is_type_supported(&pool, &table, id));
}
