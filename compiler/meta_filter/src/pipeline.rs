//! Ordered filter pipeline.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{FilterContext, ModuleDeclarations};

/// One transformation of an open module.
///
/// A filter consumes the module and returns the transformed one. It must
/// leave the module consistent: removing a declaration means rewriting or
/// removing the declarations that reference it.
pub trait Filter: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    fn apply(&self, module: ModuleDeclarations, cx: &FilterContext<'_>) -> ModuleDeclarations;
}

/// Request to abandon pipelines between stages.
///
/// Clones share the flag, so an orchestrator can keep one handle and give
/// another to each worker.
#[derive(Clone, Debug, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub enum PipelineOutcome {
    Completed(ModuleDeclarations),
    /// Stopped before stage `completed`; the module reflects the stages
    /// that ran.
    Abandoned {
        module: ModuleDeclarations,
        completed: usize,
    },
}

impl PipelineOutcome {
    pub fn into_module(self) -> ModuleDeclarations {
        match self {
            Self::Completed(module) | Self::Abandoned { module, .. } => module,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Filters applied strictly in insertion order.
#[derive(Default)]
pub struct Pipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, filter: impl Filter + 'static) -> Self {
        self.push(filter);
        self
    }

    pub fn push(&mut self, filter: impl Filter + 'static) {
        self.filters.push(Box::new(filter));
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Stage names in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Run every stage.
    pub fn run(&self, module: ModuleDeclarations, cx: &FilterContext<'_>) -> ModuleDeclarations {
        self.filters
            .iter()
            .fold(module, |module, filter| run_stage(filter.as_ref(), module, cx))
    }

    /// Run stages until done or until `abort` is raised. The flag is only
    /// checked between stages; a running stage always completes.
    pub fn run_until(
        &self,
        mut module: ModuleDeclarations,
        cx: &FilterContext<'_>,
        abort: &AbortHandle,
    ) -> PipelineOutcome {
        for (completed, filter) in self.filters.iter().enumerate() {
            if abort.is_aborted() {
                tracing::debug!(module = %module.name(), completed, "pipeline abandoned");
                return PipelineOutcome::Abandoned { module, completed };
            }
            module = run_stage(filter.as_ref(), module, cx);
        }
        PipelineOutcome::Completed(module)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(filter = filter.name(), module = %module.name())
)]
fn run_stage(
    filter: &dyn Filter,
    module: ModuleDeclarations,
    cx: &FilterContext<'_>,
) -> ModuleDeclarations {
    let before = module.len();
    let module = filter.apply(module, cx);
    tracing::debug!(before, after = module.len(), "stage done");
    module
}
