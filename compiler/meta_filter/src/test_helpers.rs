//! Declaration builders shared by filter tests. Only compiled in test
//! builds.

use meta_decl::{
    CategoryDecl, DeclKind, Declaration, FqName, InterfaceDecl, Members, Method, ProtocolDecl,
    RecordDecl,
};
use meta_types::{RecordField, TypeId};

pub(crate) const MODULE: &str = "UIKit";

/// `UIKit.<name>`.
pub(crate) fn fq(name: &str) -> FqName {
    FqName::new(MODULE, name)
}

pub(crate) fn method(selector: &str, signature: &[TypeId]) -> Method {
    Method::new(selector, signature.to_vec())
}

pub(crate) fn instance_methods(methods: Vec<Method>) -> Members {
    Members {
        instance_methods: methods,
        ..Members::default()
    }
}

pub(crate) fn interface(name: &str, base: Option<&str>) -> Declaration {
    interface_with(name, base, &[], Members::default())
}

pub(crate) fn interface_with(
    name: &str,
    base: Option<&str>,
    categories: &[&str],
    members: Members,
) -> Declaration {
    Declaration::new(
        fq(name),
        DeclKind::Interface(InterfaceDecl {
            base: base.map(fq),
            protocols: Vec::new(),
            categories: categories.iter().copied().map(fq).collect(),
            members,
        }),
    )
}

pub(crate) fn category(name: &str, extended: FqName, members: Members) -> Declaration {
    Declaration::new(
        fq(name),
        DeclKind::Category(CategoryDecl {
            members,
            ..CategoryDecl::new(extended)
        }),
    )
}

pub(crate) fn protocol(name: &str, protocols: &[&str], members: Members) -> Declaration {
    Declaration::new(
        fq(name),
        DeclKind::Protocol(ProtocolDecl {
            protocols: protocols.iter().copied().map(fq).collect(),
            members,
        }),
    )
}

pub(crate) fn record(name: &str, fields: &[(&str, TypeId)]) -> Declaration {
    Declaration::new(
        fq(name),
        DeclKind::Struct(RecordDecl {
            fields: fields
                .iter()
                .map(|&(field, ty)| RecordField::new(field, ty))
                .collect(),
        }),
    )
}

/// Names of the declarations, in order.
pub(crate) fn names(module: &crate::ModuleDeclarations) -> Vec<&str> {
    module.iter().map(|decl| decl.name.name.as_str()).collect()
}
