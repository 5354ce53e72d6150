//! The component graph: discovered application wiring.
//!
//! Nodes are created once by the extractor and stored in discovery order.
//! The pruner marks nodes `excluded` instead of deleting them, which keeps
//! iteration order stable and emission deterministic across runs.

use indexmap::IndexMap;

/// A capability a component requires at runtime.
///
/// Removal flags disable capabilities; components whose conditions require a
/// disabled capability are pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Yaml,
    Jmx,
    Xml,
    Spel,
}

impl Capability {
    /// All capabilities, in the fixed order removal flags are applied.
    pub const ALL: [Capability; 4] = [
        Capability::Yaml,
        Capability::Jmx,
        Capability::Xml,
        Capability::Spel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Capability::Yaml => "yaml",
            Capability::Jmx => "jmx",
            Capability::Xml => "xml",
            Capability::Spel => "spel",
        }
    }
}

/// Classification of a discovered component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    /// A configuration class contributing further components.
    Configuration,
    /// A plain component, registered unconditionally.
    Component,
    /// A component gated on a property condition. Build-time property checks
    /// may rewrite this into a fixed outcome.
    Conditional,
    /// A property source contributing configuration values.
    PropertySource,
}

/// Property condition attached to a [`ComponentKind::Conditional`] node.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyGuard {
    /// Property name the condition tests.
    pub name: String,
    /// Expected value; `None` means any truthy value enables the component.
    #[serde(default)]
    pub expected_value: Option<String>,
}

/// A discovered unit of application wiring.
#[derive(Debug, Clone)]
pub struct ComponentNode {
    /// Fully-qualified declaring type name; unique key within the graph.
    pub identity: String,
    pub kind: ComponentKind,
    /// Flagged as an application entry-point candidate.
    pub entry_point: bool,
    /// Identities that must be registered before this node.
    pub dependencies: Vec<String>,
    /// Capability requirements attached at discovery time.
    pub conditions: Vec<Capability>,
    /// Property condition, present on conditional nodes.
    pub property: Option<PropertyGuard>,
    /// Resource paths (relative to a resource root) this node claims.
    pub resources: Vec<String>,
    /// Set by the pruner. Excluded nodes keep their storage slot so iteration
    /// order stays stable.
    pub excluded: bool,
}

impl ComponentNode {
    pub fn new(identity: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            identity: identity.into(),
            kind,
            entry_point: false,
            dependencies: Vec::new(),
            conditions: Vec::new(),
            property: None,
            resources: Vec::new(),
            excluded: false,
        }
    }

    /// Whether this node's conditions require the given capability.
    pub fn requires(&self, capability: Capability) -> bool {
        self.conditions.contains(&capability)
    }
}

/// Graph of discovered components, keyed by identity.
///
/// Insertion order is discovery order; `IndexMap` preserves it even as nodes
/// are marked excluded.
#[derive(Debug, Clone, Default)]
pub struct ComponentGraph {
    nodes: IndexMap<String, ComponentNode>,
}

impl ComponentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Returns `false` (leaving the graph unchanged) when a
    /// node with the same identity already exists.
    pub fn insert(&mut self, node: ComponentNode) -> bool {
        if self.nodes.contains_key(&node.identity) {
            return false;
        }
        self.nodes.insert(node.identity.clone(), node);
        true
    }

    pub fn get(&self, identity: &str) -> Option<&ComponentNode> {
        self.nodes.get(identity)
    }

    pub fn get_mut(&mut self, identity: &str) -> Option<&mut ComponentNode> {
        self.nodes.get_mut(identity)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.nodes.contains_key(identity)
    }

    /// Position of a node in discovery order.
    pub fn discovery_index(&self, identity: &str) -> Option<usize> {
        self.nodes.get_index_of(identity)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in discovery order, excluded ones included.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentNode> {
        self.nodes.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ComponentNode> {
        self.nodes.values_mut()
    }

    /// Non-excluded nodes in discovery order.
    pub fn active(&self) -> impl Iterator<Item = &ComponentNode> {
        self.nodes.values().filter(|n| !n.excluded)
    }

    /// Mark a node excluded. No-op for unknown identities.
    pub fn exclude(&mut self, identity: &str) {
        if let Some(node) = self.nodes.get_mut(identity) {
            node.excluded = true;
        }
    }
}
