//! Module declaration containers and the filter pipeline.
//!
//! A [`ModuleDeclarations`] is the ordered declaration set of one parsed
//! module. While open, it is threaded through a [`Pipeline`] of
//! [`Filter`]s; each filter takes the collection by value and returns the
//! transformed one, so stages never share mutable state. Order matters:
//! filters do not commute, and [`default_pipeline`] fixes the order the
//! generator relies on. [`ModuleDeclarations::finalize`] checks the
//! uniqueness invariant and produces the read-only [`FinalizedModule`]
//! handed to serializers.

mod context;
mod error;
mod filters;
mod module;
mod pipeline;

pub use context::FilterContext;
pub use error::{DeclError, ModuleError};
pub use filters::{
    default_pipeline, DeduplicateDeclarationsFilter, ExceptionRule, ExceptionalDeclarationsFilter,
    MergeCategoriesFilter, RemoveDeclarationsFilter, RemoveDuplicateMembersFilter,
    RemoveUnsupportedFilter,
};
pub use module::{FinalizedModule, ModuleDeclarations};
pub use pipeline::{AbortHandle, Filter, Pipeline, PipelineOutcome};

#[cfg(test)]
mod test_helpers;
