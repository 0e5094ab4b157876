//! Declaration layer of the metadata generator.
//!
//! Declarations are the named units of a foreign interface surface:
//! interfaces, protocols, categories, records, functions and variables.
//! They reference each other (base interface, extended interface, adopted
//! protocols) and named record types by [`FqName`] only; resolution goes
//! through a [`DeclLookup`], so a declaration set can be malformed (missing
//! or cyclic references) without this crate ever looping or panicking.
//!
//! - [`referenced_types`]: the deduplicated type closure of a declaration
//! - [`DeclarationVisitor`]: double dispatch over the closed kind set
//! - [`SupportAnalyzer`]: memoized, cycle-safe support analysis

mod closure;
mod decl;
mod key;
mod lookup;
mod support;
mod visitor;

pub use closure::referenced_types;
pub use decl::{
    CategoryDecl, DeclKind, Declaration, FunctionDecl, FunctionFlags, InterfaceDecl, Members,
    Method, MethodFlags, Property, PropertyFlags, ProtocolDecl, RecordDecl, VarDecl,
};
pub use key::{DeclKey, DeclKindTag};
pub use lookup::{DeclIndex, DeclLookup, DeclTable, Layered};
pub use meta_types::FqName;
pub use support::{is_decl_supported, is_type_supported, SupportAnalyzer, CYCLE_ASSUMPTION};
pub use visitor::{walk_declaration, DeclarationVisitor};
