//! Generator configuration.
//!
//! Options come from command line style arguments. Several sources (a
//! config file's argument list, then the real command line) can be parsed
//! separately and combined with [`GeneratorOptions::merge`].

use meta_filter::{
    DeduplicateDeclarationsFilter, ExceptionalDeclarationsFilter, MergeCategoriesFilter, Pipeline,
    RemoveDeclarationsFilter, RemoveDuplicateMembersFilter, RemoveUnsupportedFilter,
};
use meta_types::FqName;

use crate::GeneratorError;

/// Generator options parsed from command line arguments.
///
/// The boolean flags are independent switches that each disable one
/// filter stage, so they stay plain fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct GeneratorOptions {
    /// Keep categories as separate declarations (--no-merge-categories)
    pub no_merge_categories: bool,
    /// Keep declarations and members that cannot be represented
    /// (--keep-unsupported)
    pub keep_unsupported: bool,
    /// Keep members already inherited from a base or protocol
    /// (--keep-duplicates)
    pub keep_duplicates: bool,
    /// Declarations to remove, in order of appearance (--remove=<Module.Name>)
    pub remove: Vec<FqName>,
    /// Worker threads for batch processing; `None` uses every core (--jobs)
    pub jobs: Option<usize>,
    /// Debug logging when no log filter is set (-v, --verbose)
    pub verbose: bool,
}

impl GeneratorOptions {
    /// Merge another `GeneratorOptions` into this one.
    ///
    /// Boolean flags use OR. Removals accumulate without repeats. `jobs`
    /// takes the new value if present.
    pub fn merge(&mut self, other: &Self) {
        if other.jobs.is_some() {
            self.jobs = other.jobs;
        }
        for name in &other.remove {
            if !self.remove.contains(name) {
                self.remove.push(name.clone());
            }
        }

        self.no_merge_categories |= other.no_merge_categories;
        self.keep_unsupported |= other.keep_unsupported;
        self.keep_duplicates |= other.keep_duplicates;
        self.verbose |= other.verbose;
    }
}

/// Parse generator options from command line arguments.
pub fn parse_options(args: &[String]) -> Result<GeneratorOptions, GeneratorError> {
    let mut options = GeneratorOptions::default();

    for arg in args {
        if arg == "--no-merge-categories" {
            options.no_merge_categories = true;
        } else if arg == "--keep-unsupported" {
            options.keep_unsupported = true;
        } else if arg == "--keep-duplicates" {
            options.keep_duplicates = true;
        } else if let Some(name) = arg.strip_prefix("--remove=") {
            let Some(name) = FqName::parse(name) else {
                return Err(GeneratorError::InvalidValue {
                    option: "--remove",
                    value: name.to_string(),
                });
            };
            if !options.remove.contains(&name) {
                options.remove.push(name);
            }
        } else if let Some(jobs) = arg.strip_prefix("--jobs=") {
            options.jobs = parse_jobs(jobs)?;
        } else if arg == "-v" || arg == "--verbose" {
            options.verbose = true;
        } else {
            return Err(GeneratorError::UnknownOption(arg.clone()));
        }
    }

    Ok(options)
}

fn parse_jobs(value: &str) -> Result<Option<usize>, GeneratorError> {
    if value == "auto" {
        return Ok(None);
    }
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(GeneratorError::InvalidValue {
            option: "--jobs",
            value: value.to_string(),
        }),
    }
}

/// The filter pipeline selected by `options`.
///
/// Stage order follows [`meta_filter::default_pipeline`]; removals run right
/// after the exceptional fixes. Declaration deduplication always runs since
/// finalization depends on it.
pub fn build_pipeline(options: &GeneratorOptions) -> Pipeline {
    let mut pipeline = Pipeline::new().with(ExceptionalDeclarationsFilter::ios_sdk());
    if !options.remove.is_empty() {
        pipeline.push(RemoveDeclarationsFilter::new(options.remove.iter().cloned()));
    }
    if !options.keep_unsupported {
        pipeline.push(RemoveUnsupportedFilter);
    }
    if !options.no_merge_categories {
        pipeline.push(MergeCategoriesFilter);
    }
    if !options.keep_duplicates {
        pipeline.push(RemoveDuplicateMembersFilter);
    }
    pipeline.push(DeduplicateDeclarationsFilter);
    pipeline
}
