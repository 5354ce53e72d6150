//! Bootstrap generation pipeline for bootgen.
//!
//! Four stages, executed strictly in order; each stage's output is the
//! complete input of the next:
//! - `locate` - resolves input locations into an [`ApplicationStructure`]
//! - `extract` - builds the component graph from compiled-classes metadata
//! - `prune` - applies feature-removal flags and build-time property checks
//! - `emit` - renders the bootstrap source and the filtered resource tree
//!
//! The pipeline never executes application code: extraction is a pure
//! function from artifact locations to an immutable graph value.

use std::path::PathBuf;

use bootgen_core::{AotOptions, ApplicationStructure, Diagnostics};

pub mod emit;
pub mod extract;
pub mod locate;
pub mod prune;

#[cfg(test)]
mod locate_tests;

pub use emit::{EmissionResult, EmitError};
pub use extract::{ExtractError, Extraction, MetadataReader};
pub use locate::LocateError;
pub use prune::BuildTimeProperties;

/// Result type for pipeline passes that produce both output and diagnostics.
///
/// Recoverable findings ride alongside the typed output; fatal conditions use
/// the outer `Result`.
pub type PassResult<T, E> = std::result::Result<(T, Diagnostics), E>;

/// Fatal errors from any pipeline stage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Result type for whole-pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Summary of one successful generation run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Entry-point class registered by the generated bootstrap.
    pub entry_point: String,
    /// Non-excluded nodes registered by the bootstrap.
    pub registered: usize,
    /// Nodes pruned away.
    pub excluded: usize,
    /// Path of the generated bootstrap source unit.
    pub bootstrap_path: PathBuf,
    /// Resource files copied into the resource output tree.
    pub resources_written: Vec<PathBuf>,
    /// Recoverable diagnostics accumulated during extraction.
    pub diagnostics: Diagnostics,
}

/// Runs the full generation pipeline for one [`ApplicationStructure`].
pub struct BootstrapCodeGenerator {
    options: AotOptions,
}

impl BootstrapCodeGenerator {
    pub fn new(options: AotOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AotOptions {
        &self.options
    }

    /// Extract, prune, and emit. Any fatal stage error aborts the run; the
    /// caller must treat partial output as unusable.
    pub fn generate(&self, structure: &ApplicationStructure) -> Result<GenerationReport> {
        let (extraction, diagnostics) = extract::extract(structure)?;
        let Extraction {
            mut graph,
            entry_point,
        } = extraction;

        let properties = BuildTimeProperties::load(structure);
        prune::prune(&mut graph, &self.options, &properties);

        let emission = emit::emit(&graph, &entry_point, structure, &self.options)?;

        let registered = graph.active().count();
        Ok(GenerationReport {
            entry_point,
            registered,
            excluded: graph.len() - registered,
            bootstrap_path: emission.bootstrap_path,
            resources_written: emission.resources_written,
            diagnostics,
        })
    }
}
