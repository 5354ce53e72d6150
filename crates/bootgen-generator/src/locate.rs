//! Artifact locator: resolves input locations into an [`ApplicationStructure`].
//!
//! Pure data assembly. Heavy filesystem scanning belongs to extraction; the
//! locator only validates shapes and checks existence where it is cheap.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use bootgen_core::ApplicationStructure;

/// Configuration errors raised before any analysis begins.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("no classes path given")]
    NoClassesPath,

    #[error("output path {} is not usable: {reason}", path.display())]
    OutputPath { path: PathBuf, reason: String },
}

/// Resolve the inputs of one generation run.
///
/// The first classes path becomes the primary discovery root; every classes
/// path is appended to `classpath_entries` when absent, so the structure
/// invariant (`classes_path` resolvable through the classpath) holds by
/// construction. Resource paths are deduplicated; their order never matters.
pub fn locate(
    source_output_path: PathBuf,
    resources_output_path: PathBuf,
    classes_paths: &[PathBuf],
    resources_paths: &[PathBuf],
    main_class: Option<String>,
    mut classpath_entries: Vec<PathBuf>,
) -> Result<ApplicationStructure, LocateError> {
    let classes_path = classes_paths.first().cloned().ok_or(LocateError::NoClassesPath)?;

    validate_output_path(&source_output_path)?;
    validate_output_path(&resources_output_path)?;

    for path in classes_paths {
        if !classpath_entries.contains(path) {
            classpath_entries.push(path.clone());
        }
    }

    let resources_paths: BTreeSet<PathBuf> = resources_paths.iter().cloned().collect();

    Ok(ApplicationStructure {
        source_output_path,
        resources_output_path,
        resources_paths,
        classes_path,
        main_class,
        classpath_entries,
    })
}

/// Output directories need not exist yet (the emitter creates them), but an
/// existing non-directory can never become one.
fn validate_output_path(path: &Path) -> Result<(), LocateError> {
    if path.as_os_str().is_empty() {
        return Err(LocateError::OutputPath {
            path: path.to_path_buf(),
            reason: "empty path".into(),
        });
    }
    if path.exists() && !path.is_dir() {
        return Err(LocateError::OutputPath {
            path: path.to_path_buf(),
            reason: "exists and is not a directory".into(),
        });
    }
    Ok(())
}
