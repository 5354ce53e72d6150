//! Feature pruner.
//!
//! Applies the active option set as graph annotations: nodes are marked
//! `excluded`, never removed, so iteration order stays stable for the
//! emitter. Flags apply in a fixed sequence (YAML, JMX, XML, SpEL, then
//! property checks); every pass tests the `excluded` state instead of
//! re-deriving it, so the outcome is independent of internal iteration.

mod props;


pub use props::BuildTimeProperties;

use std::collections::BTreeSet;

use bootgen_core::{AotOptions, Capability, ComponentGraph, ComponentKind};

/// Annotate the graph with exclusions. Same storage in, same storage out.
pub fn prune(graph: &mut ComponentGraph, options: &AotOptions, properties: &BuildTimeProperties) {
    for capability in Capability::ALL {
        if !options.removes(capability) {
            continue;
        }
        for node in graph.iter_mut() {
            if !node.excluded && node.requires(capability) {
                tracing::debug!(identity = %node.identity, capability = capability.name(), "excluded by removal flag");
                node.excluded = true;
            }
        }
    }

    apply_property_checks(graph, options, properties);
    cascade(graph);
}

/// Resolve build-time property checks into fixed outcomes.
///
/// This is evaluation of presence and value, never expression execution: a
/// resolvable check rewrites the conditional node into a plain component or
/// excludes it; an unresolvable check leaves the node conditional for runtime.
fn apply_property_checks(
    graph: &mut ComponentGraph,
    options: &AotOptions,
    properties: &BuildTimeProperties,
) {
    for check in &options.build_time_properties_checks {
        let (name, inline_value) = match check.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (check.trim(), None),
        };
        let Some(value) = inline_value.or_else(|| properties.get(name)) else {
            continue;
        };

        for node in graph.iter_mut() {
            if node.excluded || node.kind != ComponentKind::Conditional {
                continue;
            }
            let Some(guard) = &node.property else {
                continue;
            };
            if guard.name != name {
                continue;
            }

            let enabled = match &guard.expected_value {
                Some(expected) => expected == value,
                None => props::is_truthy(value),
            };
            if enabled {
                tracing::debug!(identity = %node.identity, property = name, "resolved to unconditional component");
                node.kind = ComponentKind::Component;
            } else {
                tracing::debug!(identity = %node.identity, property = name, "resolved to excluded");
                node.excluded = true;
            }
        }
    }
}

/// Exclude, to a fixpoint, every node with an excluded dependency.
///
/// Dependencies are required-before edges, so a retained node must never
/// reference a removed type in generated registration code.
fn cascade(graph: &mut ComponentGraph) {
    loop {
        let excluded: BTreeSet<String> = graph
            .iter()
            .filter(|n| n.excluded)
            .map(|n| n.identity.clone())
            .collect();

        let mut changed = false;
        for node in graph.iter_mut() {
            if !node.excluded && node.dependencies.iter().any(|d| excluded.contains(d)) {
                tracing::debug!(identity = %node.identity, "excluded transitively");
                node.excluded = true;
                changed = true;
            }
        }
        if !changed {
            return;
        }
    }
}
