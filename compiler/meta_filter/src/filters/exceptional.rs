//! Fixes for known SDK header quirks.

use meta_decl::{DeclKind, Declaration, FqName};
use meta_types::TypeId;

use crate::{DeclError, Filter, FilterContext, ModuleDeclarations};

/// A special case the SDK headers get wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExceptionRule {
    /// Remove `category` where it extends `interface`, and drop it from the
    /// interface's category list.
    RemoveCategory { category: FqName, interface: FqName },
    /// Replace the return type of a static method.
    OverrideReturnType {
        interface: FqName,
        selector: String,
        ty: TypeId,
    },
}

/// Applies [`ExceptionRule`]s in order.
#[derive(Clone, Debug, Default)]
pub struct ExceptionalDeclarationsFilter {
    rules: Vec<ExceptionRule>,
}

impl ExceptionalDeclarationsFilter {
    pub fn new(rules: Vec<ExceptionRule>) -> Self {
        Self { rules }
    }

    /// Rules for the iOS SDK:
    /// - `UIResponderStandardEditActions` is declared as a category on
    ///   `NSObject` but belongs to `UIResponder`
    /// - `+[NSNull null]` returns the shared instance, typed `instancetype`
    pub fn ios_sdk() -> Self {
        Self::new(vec![
            ExceptionRule::RemoveCategory {
                category: FqName::new("UIKit.UIResponder", "UIResponderStandardEditActions"),
                interface: FqName::new("ObjectiveC.NSObject", "NSObject"),
            },
            ExceptionRule::OverrideReturnType {
                interface: FqName::new("Foundation", "NSNull"),
                selector: "null".to_string(),
                ty: TypeId::INSTANCETYPE,
            },
        ])
    }

    pub fn rules(&self) -> &[ExceptionRule] {
        &self.rules
    }
}

impl Filter for ExceptionalDeclarationsFilter {
    fn name(&self) -> &'static str {
        "exceptional-declarations"
    }

    fn apply(&self, module: ModuleDeclarations, _cx: &FilterContext<'_>) -> ModuleDeclarations {
        self.rules.iter().fold(module, apply_rule)
    }
}

fn apply_rule(module: ModuleDeclarations, rule: &ExceptionRule) -> ModuleDeclarations {
    let (name, mut decls, mut errors) = module.into_parts();
    match rule {
        ExceptionRule::RemoveCategory {
            category,
            interface,
        } => {
            decls.retain(|decl| {
                let matches = decl
                    .as_category()
                    .is_some_and(|ext| &decl.name == category && &ext.extended == interface);
                if matches {
                    tracing::debug!(%category, %interface, "exceptional category removed");
                }
                !matches
            });
            for decl in &mut decls {
                if let DeclKind::Interface(target) = &mut decl.kind {
                    if &decl.name == interface {
                        target.categories.retain(|adopted| adopted != category);
                    }
                }
            }
        }
        ExceptionRule::OverrideReturnType {
            interface,
            selector,
            ty,
        } => {
            if let Some(error) = override_return_type(&mut decls, interface, selector, *ty) {
                errors.push(error);
            }
        }
    }
    ModuleDeclarations::from_parts(name, decls, errors)
}

fn override_return_type(
    decls: &mut [Declaration],
    interface: &FqName,
    selector: &str,
    ty: TypeId,
) -> Option<DeclError> {
    let decl = decls
        .iter_mut()
        .find(|decl| matches!(decl.kind, DeclKind::Interface(_)) && &decl.name == interface)?;
    let key = decl.key();
    let method = decl.members_mut()?.static_method_mut(selector)?;
    match method.signature.first_mut() {
        Some(ret) => {
            tracing::debug!(%interface, selector, "return type overridden");
            *ret = ty;
            None
        }
        None => Some(DeclError::InconsistentMember {
            decl: key,
            member: selector.to_string(),
            reason: "signature has no return type".to_string(),
        }),
    }
}
