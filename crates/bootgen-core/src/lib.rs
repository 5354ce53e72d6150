//! Core data structures for the bootgen AOT bootstrap generator.
//!
//! Two layers, kept deliberately free of I/O:
//! - **Run description**: [`ApplicationStructure`] and [`AotOptions`] describe
//!   one generation run and are built once, then shared read-only by every
//!   pipeline stage.
//! - **Component graph**: [`ComponentGraph`] and friends model the discovered
//!   application wiring that the pruner annotates and the emitter walks.

use std::collections::BTreeSet;
use std::path::PathBuf;

pub mod diagnostics;
pub mod graph;

#[cfg(test)]
mod graph_tests;

pub use diagnostics::{Diagnostics, Warning};
pub use graph::{Capability, ComponentGraph, ComponentKind, ComponentNode, PropertyGuard};

/// Immutable description of one generation run.
///
/// Built once by the locator and never mutated afterwards; later stages hold
/// it by shared reference.
#[derive(Debug, Clone)]
pub struct ApplicationStructure {
    /// Target directory for emitted source artifacts.
    pub source_output_path: PathBuf,
    /// Target directory for emitted resource artifacts.
    pub resources_output_path: PathBuf,
    /// Resource root locations. Order-irrelevant and deduplicated; a `BTreeSet`
    /// keeps iteration deterministic.
    pub resources_paths: BTreeSet<PathBuf>,
    /// Primary compiled-classes root used for component discovery.
    pub classes_path: PathBuf,
    /// Explicit entry-point class, if given. Auto-detected otherwise.
    pub main_class: Option<String>,
    /// Additional classpath locations, used only for type resolution during
    /// extraction. Always contains `classes_path`.
    pub classpath_entries: Vec<PathBuf>,
}

/// Immutable option snapshot for one generation run.
///
/// Constructed once from external input and passed by reference through
/// extraction, pruning, and emission.
#[derive(Debug, Clone, Default)]
pub struct AotOptions {
    /// Render verification assertions into the generated bootstrap.
    pub debug_verify: bool,
    /// Exclude YAML-conditioned components.
    pub remove_yaml_support: bool,
    /// Exclude JMX-conditioned components.
    pub remove_jmx_support: bool,
    /// Exclude XML-conditioned components.
    pub remove_xml_support: bool,
    /// Exclude SpEL-conditioned components.
    pub remove_spel_support: bool,
    /// Property names (or `name=value` entries) to resolve at build time
    /// instead of leaving conditional at runtime.
    pub build_time_properties_checks: Vec<String>,
}

impl AotOptions {
    /// Whether the given capability has been disabled by a removal flag.
    pub fn removes(&self, capability: Capability) -> bool {
        match capability {
            Capability::Yaml => self.remove_yaml_support,
            Capability::Jmx => self.remove_jmx_support,
            Capability::Xml => self.remove_xml_support,
            Capability::Spel => self.remove_spel_support,
        }
    }
}
