//! Human-readable dump of declarations, for logs and test expectations.
//!
//! Each declaration renders as a header line followed by one indented line
//! per member:
//!
//! ```text
//! INTERFACE_DECLARATION: UIView : UIResponder <NSCoding>
//!   + (instancetype) new()
//!   - (void) setNeedsLayout()
//!   @property (readonly) struct CGRect frame
//! ```
//!
//! Types are printed with [`TypePool::canonical_string`].

#![allow(clippy::format_push_string)]

use meta_decl::{
    CategoryDecl, Declaration, DeclarationVisitor, FunctionDecl, InterfaceDecl, Members, Method,
    MethodFlags, Property, PropertyFlags, ProtocolDecl, RecordDecl, VarDecl,
};
use meta_filter::FinalizedModule;
use meta_types::{FqName, TypeId, TypePool};

/// Collects the rendering of every visited declaration.
pub struct DeclarationPrinter<'p> {
    pool: &'p TypePool,
    out: String,
    /// Member lines of the current declaration; flushed after its header.
    members: Vec<String>,
}

impl<'p> DeclarationPrinter<'p> {
    pub fn new(pool: &'p TypePool) -> Self {
        Self {
            pool,
            out: String::new(),
            members: Vec::new(),
        }
    }

    /// The rendered text.
    pub fn finish(self) -> String {
        self.out
    }

    fn ty(&self, id: TypeId) -> String {
        self.pool.canonical_string(id, "", true)
    }

    fn method_line(&self, marker: char, method: &Method) -> String {
        let ret = method
            .return_type()
            .map_or_else(|| "void".to_string(), |ret| self.ty(ret));
        let mut params: Vec<String> = method.params().iter().map(|&p| self.ty(p)).collect();
        if method.flags.contains(MethodFlags::VARIADIC) {
            params.push("...".to_string());
        }
        let mut line = format!("{marker} ({ret}) {}({})", method.selector, params.join(", "));
        if method.flags.contains(MethodFlags::OPTIONAL) {
            line.push_str(" @optional");
        }
        line
    }

    fn property_line(&self, property: &Property) -> String {
        let mut attrs = Vec::new();
        if property.flags.contains(PropertyFlags::CLASS) {
            attrs.push("class");
        }
        if property.flags.contains(PropertyFlags::READONLY) {
            attrs.push("readonly");
        }
        let declarator = self.pool.canonical_string(property.ty, &property.name, true);
        if attrs.is_empty() {
            format!("@property {declarator}")
        } else {
            format!("@property ({}) {declarator}", attrs.join(", "))
        }
    }

    fn header(&mut self, header: &str) {
        self.out.push_str(header);
        self.out.push('\n');
        for line in self.members.drain(..) {
            self.out.push_str("  ");
            self.out.push_str(&line);
            self.out.push('\n');
        }
    }

    fn record(&mut self, keyword: &str, decl: &Declaration, record: &RecordDecl) {
        let fields = record
            .fields
            .iter()
            .map(|field| format!("{};", self.pool.canonical_string(field.ty, &field.name, true)))
            .collect();
        self.members = fields;
        self.header(&format!("{keyword}: {}", decl.name.name));
    }
}

impl<'d> DeclarationVisitor<'d> for DeclarationPrinter<'_> {
    fn visit_members(&mut self, _decl: &'d Declaration, members: &'d Members) {
        let statics = members
            .static_methods
            .iter()
            .map(|method| self.method_line('+', method));
        let instances = members
            .instance_methods
            .iter()
            .map(|method| self.method_line('-', method));
        let properties = members
            .properties
            .iter()
            .map(|property| self.property_line(property));
        let lines = statics.chain(instances).chain(properties).collect();
        self.members = lines;
    }

    fn visit_interface(&mut self, decl: &'d Declaration, interface: &'d InterfaceDecl) {
        let mut header = format!("INTERFACE_DECLARATION: {}", decl.name.name);
        if let Some(base) = &interface.base {
            header.push_str(&format!(" : {}", base.name));
        }
        header.push_str(&protocol_list(&interface.protocols));
        self.header(&header);
    }

    fn visit_protocol(&mut self, decl: &'d Declaration, protocol: &'d ProtocolDecl) {
        let header = format!(
            "PROTOCOL_DECLARATION: {}{}",
            decl.name.name,
            protocol_list(&protocol.protocols)
        );
        self.header(&header);
    }

    fn visit_category(&mut self, decl: &'d Declaration, category: &'d CategoryDecl) {
        let header = format!(
            "CATEGORY_DECLARATION: {} ({}){}",
            category.extended.name,
            decl.name.name,
            protocol_list(&category.protocols)
        );
        self.header(&header);
    }

    fn visit_struct(&mut self, decl: &'d Declaration, record: &'d RecordDecl) {
        self.record("STRUCT_DECLARATION", decl, record);
    }

    fn visit_union(&mut self, decl: &'d Declaration, record: &'d RecordDecl) {
        self.record("UNION_DECLARATION", decl, record);
    }

    fn visit_function(&mut self, decl: &'d Declaration, function: &'d FunctionDecl) {
        let (ret, params) = match function.signature.split_first() {
            Some((&ret, params)) => (self.ty(ret), params),
            None => ("void".to_string(), &[][..]),
        };
        let params = if params.is_empty() {
            "void".to_string()
        } else {
            params
                .iter()
                .map(|&p| self.ty(p))
                .collect::<Vec<_>>()
                .join(", ")
        };
        self.header(&format!(
            "FUNCTION_DECLARATION: {ret} {}({params})",
            decl.name.name
        ));
    }

    fn visit_var(&mut self, decl: &'d Declaration, var: &'d VarDecl) {
        let declarator = self.pool.canonical_string(var.ty, &decl.name.name, true);
        self.header(&format!("VAR_DECLARATION: {declarator}"));
    }
}

/// ` <A, B>`, or nothing.
fn protocol_list(protocols: &[FqName]) -> String {
    if protocols.is_empty() {
        return String::new();
    }
    let names = protocols
        .iter()
        .map(|protocol| protocol.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(" <{names}>")
}

/// Render one declaration.
pub fn render_declaration(pool: &TypePool, decl: &Declaration) -> String {
    let mut printer = DeclarationPrinter::new(pool);
    decl.accept(&mut printer);
    printer.finish()
}

/// Render every declaration of `module`, in order.
pub fn render_module(pool: &TypePool, module: &FinalizedModule) -> String {
    let mut printer = DeclarationPrinter::new(pool);
    for decl in module {
        decl.accept(&mut printer);
    }
    printer.finish()
}

#[cfg(test)]
mod tests;
