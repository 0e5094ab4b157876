//! Declaration visitor.
//!
//! Consumers (serializers, validators, printers) implement
//! [`DeclarationVisitor`] and override only the hooks they need; the
//! declaration model never learns about them.
//!
//! # Dispatch order
//!
//! [`walk_declaration`] calls, for every declaration:
//! 1. `visit_declaration`, the hook shared by all kinds
//! 2. `visit_members`, for kinds that own [`Members`] (interfaces,
//!    protocols and categories)
//! 3. exactly one kind hook (`visit_interface`, `visit_protocol`, ...)
//!
//! # Example
//!
//! ```text
//! struct CountMethods {
//!     count: usize,
//! }
//!
//! impl<'d> DeclarationVisitor<'d> for CountMethods {
//!     fn visit_members(&mut self, _decl: &'d Declaration, members: &'d Members) {
//!         self.count += members.methods().count();
//!     }
//! }
//! ```

use crate::{
    CategoryDecl, DeclKind, Declaration, FunctionDecl, InterfaceDecl, Members, ProtocolDecl,
    RecordDecl, VarDecl,
};

/// Hooks over the closed set of declaration kinds. All default to no-ops.
pub trait DeclarationVisitor<'d> {
    /// Called first for every declaration.
    fn visit_declaration(&mut self, _decl: &'d Declaration) {}

    /// Called for declarations that own members, before the kind hook.
    fn visit_members(&mut self, _decl: &'d Declaration, _members: &'d Members) {}

    fn visit_interface(&mut self, _decl: &'d Declaration, _interface: &'d InterfaceDecl) {}

    fn visit_protocol(&mut self, _decl: &'d Declaration, _protocol: &'d ProtocolDecl) {}

    fn visit_category(&mut self, _decl: &'d Declaration, _category: &'d CategoryDecl) {}

    fn visit_struct(&mut self, _decl: &'d Declaration, _record: &'d RecordDecl) {}

    fn visit_union(&mut self, _decl: &'d Declaration, _record: &'d RecordDecl) {}

    fn visit_function(&mut self, _decl: &'d Declaration, _function: &'d FunctionDecl) {}

    fn visit_var(&mut self, _decl: &'d Declaration, _var: &'d VarDecl) {}
}

/// Dispatch `decl` to `visitor` in the documented order.
pub fn walk_declaration<'d, V: DeclarationVisitor<'d> + ?Sized>(
    visitor: &mut V,
    decl: &'d Declaration,
) {
    visitor.visit_declaration(decl);
    if let Some(members) = decl.members() {
        visitor.visit_members(decl, members);
    }
    match &decl.kind {
        DeclKind::Interface(interface) => visitor.visit_interface(decl, interface),
        DeclKind::Protocol(protocol) => visitor.visit_protocol(decl, protocol),
        DeclKind::Category(category) => visitor.visit_category(decl, category),
        DeclKind::Struct(record) => visitor.visit_struct(decl, record),
        DeclKind::Union(record) => visitor.visit_union(decl, record),
        DeclKind::Function(function) => visitor.visit_function(decl, function),
        DeclKind::Var(var) => visitor.visit_var(decl, var),
    }
}

impl Declaration {
    /// Double dispatch entry point; see [`walk_declaration`].
    pub fn accept<'d, V: DeclarationVisitor<'d> + ?Sized>(&'d self, visitor: &mut V) {
        walk_declaration(visitor, self);
    }
}
