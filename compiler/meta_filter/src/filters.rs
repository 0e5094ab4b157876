//! Built-in filters.
//!
//! Each filter first computes a plan against borrowed views of the module
//! (its own index layered over the external declarations), then rebuilds
//! the module from the plan. Plans never observe half-applied changes.

mod deduplicate;
mod exceptional;
mod merge_categories;
mod remove_declarations;
mod remove_duplicate_members;
mod remove_unsupported;

pub use deduplicate::DeduplicateDeclarationsFilter;
pub use exceptional::{ExceptionRule, ExceptionalDeclarationsFilter};
pub use merge_categories::MergeCategoriesFilter;
pub use remove_declarations::RemoveDeclarationsFilter;
pub use remove_duplicate_members::RemoveDuplicateMembersFilter;
pub use remove_unsupported::RemoveUnsupportedFilter;

use crate::Pipeline;

/// The generator's standard stage order.
///
/// 1. exceptional declarations, so special cases are fixed before anything
///    inspects them
/// 2. unsupported declarations and members, so later stages only see
///    representable entries
/// 3. category merging
/// 4. members duplicated from bases and protocols, which must see merged
///    categories
/// 5. duplicate declarations, right before finalization
pub fn default_pipeline() -> Pipeline {
    Pipeline::new()
        .with(ExceptionalDeclarationsFilter::ios_sdk())
        .with(RemoveUnsupportedFilter)
        .with(MergeCategoriesFilter)
        .with(RemoveDuplicateMembersFilter)
        .with(DeduplicateDeclarationsFilter)
}
