//! Recoverable diagnostics accumulated across pipeline stages.
//!
//! Fatal conditions are `Result` errors; everything here is a warning that is
//! reported alongside successful output.

use std::fmt;
use std::path::PathBuf;

/// A non-fatal finding from extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An input artifact could not be classified; it is excluded from the
    /// graph and execution continues.
    MalformedArtifact { path: PathBuf, reason: String },
    /// A declared dependency names no known identity; the edge is dropped.
    UnknownDependency { identity: String, dependency: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MalformedArtifact { path, reason } => {
                write!(f, "malformed artifact {}: {}", path.display(), reason)
            }
            Warning::UnknownDependency {
                identity,
                dependency,
            } => {
                write!(f, "{identity} depends on unknown component {dependency}")
            }
        }
    }
}

/// Warning accumulator threaded through pipeline passes.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Fold another accumulator into this one, preserving order.
    pub fn merge(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }
}
