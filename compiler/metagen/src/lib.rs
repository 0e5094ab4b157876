//! Metadata generator driver.
//!
//! Ties the layers together: [`GeneratorOptions`] select the filter
//! [`Pipeline`](meta_filter::Pipeline), [`process_module`] runs it over one
//! module and finalizes the result, and [`process_modules`] does the same
//! for a batch of modules in parallel.
//!
//! # Concurrency
//!
//! Modules are independent units of work. A batch run shares the
//! [`TypePool`] and a [`ModuleSnapshot`] of every module read-only; each
//! module run builds its own analyzers and indexes, so nothing is locked.

mod error;
mod logging;
mod options;
pub mod render;
mod snapshot;

use rayon::prelude::*;

use meta_decl::DeclLookup;
use meta_filter::{FilterContext, FinalizedModule, ModuleDeclarations, Pipeline};
use meta_types::TypePool;

pub use error::GeneratorError;
pub use logging::{init_tracing, LOG_ENV};
pub use options::{build_pipeline, parse_options, GeneratorOptions};
pub use render::DeclarationPrinter;
pub use snapshot::{ExternalDecls, ModuleSnapshot};

/// Filter and finalize one module.
///
/// `external` resolves references to declarations of other modules.
pub fn process_module(
    module: ModuleDeclarations,
    pool: &TypePool,
    external: &dyn DeclLookup,
    options: &GeneratorOptions,
) -> Result<FinalizedModule, GeneratorError> {
    let pipeline = build_pipeline(options);
    run_module(&pipeline, module, pool, external)
}

/// Filter and finalize a batch of modules in parallel.
///
/// References between modules resolve against a snapshot of the whole
/// batch taken before filtering. Results come back in input order; a failed
/// module does not affect the others.
pub fn process_modules(
    modules: Vec<ModuleDeclarations>,
    pool: &TypePool,
    options: &GeneratorOptions,
) -> Vec<Result<FinalizedModule, GeneratorError>> {
    let snapshot = ModuleSnapshot::new(&modules);
    let pipeline = build_pipeline(options);
    tracing::debug!(
        modules = modules.len(),
        decls = snapshot.len(),
        stages = ?pipeline.names(),
        "processing batch"
    );

    let run = |(owner, module): (usize, ModuleDeclarations)| {
        run_module(&pipeline, module, pool, &snapshot.excluding(owner))
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = options.jobs {
        builder = builder.num_threads(jobs);
    }
    match builder.build() {
        Ok(workers) => workers.install(|| modules.into_par_iter().enumerate().map(run).collect()),
        Err(e) => {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            modules.into_iter().enumerate().map(run).collect()
        }
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(module = %module.name()))]
fn run_module(
    pipeline: &Pipeline,
    module: ModuleDeclarations,
    pool: &TypePool,
    external: &dyn DeclLookup,
) -> Result<FinalizedModule, GeneratorError> {
    let cx = FilterContext::new(pool, external);
    let module = pipeline.run(module, &cx);
    let finalized = module.finalize()?;
    if !finalized.errors().is_empty() {
        tracing::debug!(errors = finalized.errors().len(), "module has declaration errors");
    }
    Ok(finalized)
}
