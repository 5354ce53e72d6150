//! Deterministic topological ordering of the pruned graph.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use bootgen_core::{ComponentGraph, ComponentNode};

use super::EmitError;

/// Order the non-excluded nodes so every dependency precedes its dependents.
///
/// Kahn's algorithm with a min-heap keyed on discovery index: among the ready
/// nodes the earliest-discovered is always taken first, so the order is stable
/// across runs for identical inputs. A cycle is fatal; the emitter never
/// attempts partial topological output.
pub fn topological_order(graph: &ComponentGraph) -> Result<Vec<&ComponentNode>, EmitError> {
    // Discovery order is the graph's iteration order, so positions in this
    // list double as discovery ranks.
    let active: Vec<&ComponentNode> = graph.active().collect();
    let rank: HashMap<&str, usize> = active
        .iter()
        .enumerate()
        .map(|(i, n)| (n.identity.as_str(), i))
        .collect();

    let mut indegree = vec![0usize; active.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); active.len()];
    for (i, node) in active.iter().enumerate() {
        for dep in &node.dependencies {
            // After cascade pruning every remaining dependency is active.
            if let Some(&d) = rank.get(dep.as_str()) {
                indegree[i] += 1;
                dependents[d].push(i);
            }
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = indegree
        .iter()
        .enumerate()
        .filter(|&(_, &deg)| deg == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut order = Vec::with_capacity(active.len());
    while let Some(Reverse(i)) = ready.pop() {
        order.push(active[i]);
        for &dependent in &dependents[i] {
            indegree[dependent] -= 1;
            if indegree[dependent] == 0 {
                ready.push(Reverse(dependent));
            }
        }
    }

    if order.len() != active.len() {
        let members: Vec<String> = active
            .iter()
            .enumerate()
            .filter(|(i, _)| indegree[*i] > 0)
            .map(|(_, n)| n.identity.clone())
            .collect();
        return Err(EmitError::CyclicDependency { members });
    }

    Ok(order)
}
