//! Bootstrap emitter.
//!
//! Walks the pruned graph in deterministic topological order and renders the
//! bootstrap source plus the filtered resource tree. Stateless: re-running
//! with identical inputs overwrites prior output byte-for-byte.
//!
//! # Module Organization
//!
//! - `topo`: cycle detection and stable topological ordering
//! - `bootstrap`: bootstrap source rendering
//! - `resources`: filtered resource-tree copy

mod bootstrap;
mod resources;
mod topo;

#[cfg(test)]
mod emit_tests;

pub use bootstrap::BOOTSTRAP_CLASS;

use std::fs;
use std::io;
use std::path::PathBuf;

use bootgen_core::{AotOptions, ApplicationStructure, ComponentGraph};

/// Fatal emission errors. Partial output after one of these is unusable;
/// the process exit status is the sole success signal.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("dependency cycle among: {}", members.join(", "))]
    CyclicDependency { members: Vec<String> },

    #[error("cannot create output directory {}: {source}", path.display())]
    OutputPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Artifacts produced by one emission run.
#[derive(Debug)]
pub struct EmissionResult {
    pub bootstrap_path: PathBuf,
    pub resources_written: Vec<PathBuf>,
}

/// Emit the bootstrap source and filtered resources for a pruned graph.
///
/// The topological order is computed before any directory is created or file
/// written, so a cyclic graph produces no output at all.
pub fn emit(
    graph: &ComponentGraph,
    entry_point: &str,
    structure: &ApplicationStructure,
    options: &AotOptions,
) -> Result<EmissionResult, EmitError> {
    let order = topo::topological_order(graph)?;
    let rendered = bootstrap::render(&order, entry_point, options.debug_verify);

    let bootstrap_path = bootstrap::bootstrap_path(&structure.source_output_path, entry_point);
    if let Some(parent) = bootstrap_path.parent() {
        fs::create_dir_all(parent).map_err(|source| EmitError::OutputPath {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir_all(&structure.resources_output_path).map_err(|source| {
        EmitError::OutputPath {
            path: structure.resources_output_path.clone(),
            source,
        }
    })?;

    fs::write(&bootstrap_path, rendered).map_err(|source| EmitError::Io {
        path: bootstrap_path.clone(),
        source,
    })?;
    tracing::debug!(path = %bootstrap_path.display(), components = order.len(), "bootstrap source written");

    let skip = resources::excluded_resources(graph);
    let resources_written = resources::copy_resources(structure, &skip)?;

    Ok(EmissionResult {
        bootstrap_path,
        resources_written,
    })
}
