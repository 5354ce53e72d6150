//! Filtered resource emission.
//!
//! Copies the resource trees into the output root, omitting any resource
//! claimed exclusively by excluded nodes. Roots iterate in sorted order and
//! files within a root in sorted order, so merging is deterministic
//! (last-writer-wins across overlapping roots).

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use bootgen_core::{ApplicationStructure, ComponentGraph};

use crate::extract::scanner;

use super::EmitError;

/// Resource paths claimed only by excluded nodes.
///
/// A resource also claimed by a retained node stays in the output.
pub fn excluded_resources(graph: &ComponentGraph) -> BTreeSet<String> {
    let mut retained: BTreeSet<&str> = BTreeSet::new();
    let mut excluded: BTreeSet<&str> = BTreeSet::new();
    for node in graph.iter() {
        let target = if node.excluded {
            &mut excluded
        } else {
            &mut retained
        };
        target.extend(node.resources.iter().map(String::as_str));
    }
    excluded
        .difference(&retained)
        .map(|s| (*s).to_string())
        .collect()
}

/// Copy every resource not in `skip` into the output root, preserving
/// root-relative paths.
pub fn copy_resources(
    structure: &ApplicationStructure,
    skip: &BTreeSet<String>,
) -> Result<Vec<PathBuf>, EmitError> {
    let mut written: BTreeSet<PathBuf> = BTreeSet::new();

    for root in &structure.resources_paths {
        if !root.is_dir() {
            tracing::debug!(root = %root.display(), "resource root absent, skipping");
            continue;
        }
        let files = scanner::scan(root).map_err(|source| EmitError::Io {
            path: root.clone(),
            source,
        })?;

        for file in files {
            let Ok(relative) = file.strip_prefix(root) else {
                continue;
            };
            if skip.contains(&resource_key(relative)) {
                tracing::debug!(resource = %relative.display(), "omitted with its excluded component");
                continue;
            }

            let dest = structure.resources_output_path.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|source| EmitError::OutputPath {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::copy(&file, &dest).map_err(|source| EmitError::Io {
                path: dest.clone(),
                source,
            })?;
            written.insert(dest);
        }
    }

    Ok(written.into_iter().collect())
}

/// Claims in descriptors always use forward slashes.
fn resource_key(relative: &std::path::Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
