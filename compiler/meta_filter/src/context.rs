//! Shared state handed to every filter stage.

use meta_decl::{DeclIndex, DeclLookup, Layered};
use meta_types::TypePool;

/// Read-only inputs shared by every filter stage of one module run.
#[derive(Clone, Copy)]
pub struct FilterContext<'a> {
    pub pool: &'a TypePool,
    /// Declarations of other modules. Lookups inside a filter consult the
    /// module being filtered first.
    pub external: &'a dyn DeclLookup,
}

impl<'a> FilterContext<'a> {
    pub fn new(pool: &'a TypePool, external: &'a dyn DeclLookup) -> Self {
        Self { pool, external }
    }

    /// `local` layered over the external declarations.
    pub fn layered<'b>(&'b self, local: &'b DeclIndex<'_>) -> Layered<'b> {
        Layered::new(local, self.external)
    }
}
