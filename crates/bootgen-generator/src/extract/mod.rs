//! Component graph extractor.
//!
//! Walks the compiled-classes root, classifies artifacts through a
//! [`MetadataReader`], and assembles the [`ComponentGraph`] in deterministic
//! discovery order. Read-only: all results are returned, never written.
//!
//! # Module Organization
//!
//! - `metadata`: raw descriptor layer and the `MetadataReader` contract
//! - `scanner`: recursive, sorted directory walk

mod metadata;
pub(crate) mod scanner;


pub use metadata::{DescriptorReader, MetadataError, MetadataReader, RawComponent};

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::PathBuf;

use bootgen_core::{ApplicationStructure, ComponentGraph, Diagnostics, Warning};

use crate::PassResult;

/// Fatal analysis errors: the discovered structure cannot be resolved into a
/// valid bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("classes path {} is not readable: {source}", path.display())]
    ClassesPathUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no application entry point found under {}", path.display())]
    NoEntryPoint { path: PathBuf },

    #[error("ambiguous application entry point: {}", candidates.join(", "))]
    AmbiguousEntryPoint { candidates: Vec<String> },
}

/// Output of a successful extraction.
#[derive(Debug)]
pub struct Extraction {
    pub graph: ComponentGraph,
    /// Resolved entry-point class name.
    pub entry_point: String,
}

/// Extract the component graph using the shipped descriptor reader.
pub fn extract(structure: &ApplicationStructure) -> PassResult<Extraction, ExtractError> {
    extract_with(structure, &DescriptorReader)
}

/// Extract the component graph with a caller-supplied metadata capability.
pub fn extract_with(
    structure: &ApplicationStructure,
    reader: &dyn MetadataReader,
) -> PassResult<Extraction, ExtractError> {
    let files =
        scanner::scan(&structure.classes_path).map_err(|source| ExtractError::ClassesPathUnreadable {
            path: structure.classes_path.clone(),
            source,
        })?;

    let mut graph = ComponentGraph::new();
    let mut diagnostics = Diagnostics::new();

    for path in files.iter().filter(|p| reader.recognizes(p)) {
        let raw = fs::read(path)
            .map_err(|e| MetadataError(e.to_string()))
            .and_then(|bytes| reader.read(path, &bytes));
        match raw {
            Ok(raw) => {
                let node = raw.into_node();
                tracing::debug!(identity = %node.identity, kind = ?node.kind, "discovered component");
                if !graph.insert(node) {
                    warn_malformed(&mut diagnostics, path.clone(), "duplicate identity".into());
                }
            }
            Err(MetadataError(reason)) => {
                warn_malformed(&mut diagnostics, path.clone(), reason);
            }
        }
    }

    resolve_dependencies(&mut graph, &mut diagnostics);
    let entry_point = resolve_entry_point(structure, &graph)?;

    Ok((Extraction { graph, entry_point }, diagnostics))
}

fn warn_malformed(diagnostics: &mut Diagnostics, path: PathBuf, reason: String) {
    tracing::warn!(path = %path.display(), %reason, "malformed artifact skipped");
    diagnostics.warn(Warning::MalformedArtifact { path, reason });
}

/// Match declared requirements against known identities; unknown names are
/// warnings and the edge is dropped.
fn resolve_dependencies(graph: &mut ComponentGraph, diagnostics: &mut Diagnostics) {
    let known: BTreeSet<String> = graph.iter().map(|n| n.identity.clone()).collect();
    for node in graph.iter_mut() {
        let identity = node.identity.clone();
        node.dependencies.retain(|dep| {
            if known.contains(dep) {
                return true;
            }
            diagnostics.warn(Warning::UnknownDependency {
                identity: identity.clone(),
                dependency: dep.clone(),
            });
            false
        });
    }
}

/// An explicit main class wins; otherwise exactly one discovered candidate
/// must carry the entry-point flag.
fn resolve_entry_point(
    structure: &ApplicationStructure,
    graph: &ComponentGraph,
) -> Result<String, ExtractError> {
    if let Some(main_class) = &structure.main_class {
        return Ok(main_class.clone());
    }

    let mut candidates: Vec<String> = graph
        .iter()
        .filter(|n| n.entry_point)
        .map(|n| n.identity.clone())
        .collect();

    match candidates.len() {
        0 => Err(ExtractError::NoEntryPoint {
            path: structure.classes_path.clone(),
        }),
        1 => Ok(candidates.swap_remove(0)),
        _ => Err(ExtractError::AmbiguousEntryPoint { candidates }),
    }
}
