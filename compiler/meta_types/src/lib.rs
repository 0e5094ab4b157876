//! Type model for native-interface metadata.
//!
//! This crate contains the leaf layer of the metadata generator:
//! - [`PrimitiveKind`]: the closed set of C primitive kinds
//! - [`TypeEncoding`]: the fixed ABI encoding table shared with the runtime
//! - [`TypeDef`] / [`TypeId`]: type graph nodes and their handles
//! - [`TypePool`]: the interning arena that owns every type node
//!
//! # Design
//!
//! - **Intern everything**: structurally equal types share one [`TypeId`],
//!   so type identity is a `u32` comparison.
//! - **Reference declarations by name**: record and interface types name
//!   their declaration through an [`FqName`] instead of owning it. The pool
//!   itself is therefore acyclic; cycles only appear once names are resolved
//!   against a declaration set.

mod encoding;
mod error;
mod name;
mod pool;
mod primitive;
mod stack;
mod type_def;

pub use encoding::TypeEncoding;
pub use error::EncodingError;
pub use name::FqName;
pub use pool::TypePool;
pub use primitive::PrimitiveKind;
pub use stack::ensure_sufficient_stack;
pub use type_def::{DeclRefKind, RecordField, TypeDef, TypeId, TypeRef};
