//! Raw metadata layer and the reader contract.
//!
//! The bytecode/class-metadata parser is an external capability; the pipeline
//! only depends on the [`MetadataReader`] query contract. The shipped
//! [`DescriptorReader`] classifies `*.component.json` sidecar descriptors, a
//! 1:1 serde mapping feeding the analysis-layer [`ComponentNode`].

use std::path::Path;

use bootgen_core::{Capability, ComponentKind, ComponentNode, PropertyGuard};

/// File suffix recognized by the shipped descriptor reader.
pub const DESCRIPTOR_SUFFIX: &str = ".component.json";

/// Recoverable classification failure for a single artifact.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MetadataError(pub String);

/// Query contract the pipeline requires from the class-metadata capability.
pub trait MetadataReader {
    /// Whether the artifact at `path` carries component metadata.
    fn recognizes(&self, path: &Path) -> bool;

    /// Classify one artifact. Errors are recoverable `MalformedArtifact`
    /// diagnostics, never fatal.
    fn read(&self, path: &Path, bytes: &[u8]) -> Result<RawComponent, MetadataError>;
}

/// Raw component descriptor, exactly as declared in the metadata.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponent {
    /// Fully-qualified declaring type name.
    #[serde(rename = "type")]
    pub type_name: String,
    pub kind: ComponentKind,
    #[serde(default)]
    pub entry_point: bool,
    /// Identities that must be registered first.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Required capabilities, consumed by the pruner.
    #[serde(default)]
    pub requires: Vec<Capability>,
    /// Property condition; mandatory for conditional components.
    #[serde(default)]
    pub property: Option<PropertyGuard>,
    /// Resource paths (relative to a resource root) this component claims.
    #[serde(default)]
    pub resources: Vec<String>,
}

impl RawComponent {
    /// Lower the raw descriptor into an analysis-layer node.
    pub fn into_node(self) -> ComponentNode {
        let mut node = ComponentNode::new(self.type_name, self.kind);
        node.entry_point = self.entry_point;
        node.dependencies = self.depends_on;
        node.conditions = self.requires;
        node.property = self.property;
        node.resources = self.resources;
        node
    }
}

/// Reader for JSON sidecar descriptors emitted next to compiled classes.
pub struct DescriptorReader;

impl MetadataReader for DescriptorReader {
    fn recognizes(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(DESCRIPTOR_SUFFIX))
    }

    fn read(&self, _path: &Path, bytes: &[u8]) -> Result<RawComponent, MetadataError> {
        let raw: RawComponent =
            serde_json::from_slice(bytes).map_err(|e| MetadataError(e.to_string()))?;
        if raw.type_name.is_empty() {
            return Err(MetadataError("empty type name".into()));
        }
        if raw.kind == ComponentKind::Conditional && raw.property.is_none() {
            return Err(MetadataError(
                "conditional component missing property guard".into(),
            ));
        }
        Ok(raw)
    }
}
