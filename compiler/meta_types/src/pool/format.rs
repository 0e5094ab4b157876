//! Canonical C declarator rendering.
//!
//! Used for diagnostics and generated signatures. Rendering walks from the
//! outermost type inward, growing the declarator around the identifier the
//! way a C declaration is read.

#![allow(clippy::format_push_string)]

use std::borrow::Cow;

use crate::stack::ensure_sufficient_stack;
use crate::{FqName, TypeDef, TypeId, TypePool};

impl TypePool {
    /// Render `id` as a C declarator for `identifier`.
    ///
    /// `is_outer` states that `identifier` is the bare outermost declarator.
    /// Array and function suffixes bind tighter than `*`, so when a pointer
    /// declarator reaches them with `is_outer == false` it is parenthesised
    /// (`int (*p)[3]`); an outer declarator is never decorated.
    pub fn canonical_string(&self, id: TypeId, identifier: &str, is_outer: bool) -> String {
        let mut buf = String::new();
        self.render_into(id, identifier, is_outer, &mut buf);
        buf
    }

    fn render_into(&self, id: TypeId, identifier: &str, is_outer: bool, buf: &mut String) {
        ensure_sufficient_stack(|| match self.get(id) {
            TypeDef::Primitive(kind) => push_token(buf, kind.c_name(), identifier),
            TypeDef::Protocol => push_token(buf, "Protocol", identifier),
            TypeDef::Selector => push_token(buf, "SEL", identifier),
            TypeDef::Instancetype => push_token(buf, "instancetype", identifier),
            TypeDef::Unichar => push_token(buf, "unichar", identifier),
            TypeDef::VaList => push_token(buf, "va_list", identifier),
            TypeDef::CString => push_token(buf, "char", &format!("*{identifier}")),
            TypeDef::Id { protocols } => {
                push_token(buf, &qualified("id", protocols), identifier);
            }
            TypeDef::Class { protocols } => {
                push_token(buf, &qualified("Class", protocols), identifier);
            }
            TypeDef::Interface { name, protocols } => {
                let token = qualified(&name.name, protocols);
                push_token(buf, &token, &format!("*{identifier}"));
            }
            TypeDef::Struct(name) => push_token(buf, &format!("struct {}", name.name), identifier),
            TypeDef::Union(name) => push_token(buf, &format!("union {}", name.name), identifier),
            TypeDef::AnonymousStruct(fields) | TypeDef::AnonymousUnion(fields) => {
                let keyword = if matches!(self.get(id), TypeDef::AnonymousStruct(_)) {
                    "struct"
                } else {
                    "union"
                };
                let mut token = format!("{keyword} {{");
                for field in fields {
                    token.push(' ');
                    token.push_str(&self.canonical_string(field.ty, &field.name, true));
                    token.push(';');
                }
                token.push_str(" }");
                push_token(buf, &token, identifier);
            }
            TypeDef::Pointer(pointee) => {
                self.render_into(*pointee, &format!("*{identifier}"), false, buf);
            }
            TypeDef::ConstantArray { elem, size } => {
                let declarator = format!("{}[{size}]", wrap(identifier, is_outer));
                self.render_into(*elem, &declarator, true, buf);
            }
            TypeDef::IncompleteArray(elem) => {
                let declarator = format!("{}[]", wrap(identifier, is_outer));
                self.render_into(*elem, &declarator, true, buf);
            }
            TypeDef::Block(signature) => self.render_callable(signature, '^', identifier, buf),
            TypeDef::FunctionPointer(signature) => {
                self.render_callable(signature, '*', identifier, buf);
            }
        });
    }

    fn render_callable(&self, signature: &[TypeId], marker: char, identifier: &str, buf: &mut String) {
        let Some((&ret, params)) = signature.split_first() else {
            // A signature always carries its return type; render as void.
            push_token(buf, "void", &format!("({marker}{identifier})(void)"));
            return;
        };
        let params = if params.is_empty() {
            "void".to_string()
        } else {
            params
                .iter()
                .map(|&param| self.canonical_string(param, "", true))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let declarator = format!("({marker}{identifier})({params})");
        self.render_into(ret, &declarator, true, buf);
    }
}

/// Emit `token`, then ` identifier` when there is one.
fn push_token(buf: &mut String, token: &str, identifier: &str) {
    buf.push_str(token);
    if !identifier.is_empty() {
        buf.push(' ');
        buf.push_str(identifier);
    }
}

fn wrap(identifier: &str, is_outer: bool) -> Cow<'_, str> {
    if is_outer || identifier.is_empty() {
        Cow::Borrowed(identifier)
    } else {
        Cow::Owned(format!("({identifier})"))
    }
}

/// `base<P1, P2>`, or just `base` without protocols.
fn qualified(base: &str, protocols: &[FqName]) -> String {
    if protocols.is_empty() {
        return base.to_string();
    }
    let list = protocols
        .iter()
        .map(|protocol| protocol.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{base}<{list}>")
}
