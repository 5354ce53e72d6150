use crate::graph::{Capability, ComponentGraph, ComponentKind, ComponentNode, PropertyGuard};

fn node(identity: &str) -> ComponentNode {
    ComponentNode::new(identity, ComponentKind::Component)
}

#[test]
fn insertion_order_is_discovery_order() {
    let mut graph = ComponentGraph::new();
    graph.insert(node("com.example.B"));
    graph.insert(node("com.example.A"));
    graph.insert(node("com.example.C"));

    let identities: Vec<&str> = graph.iter().map(|n| n.identity.as_str()).collect();
    assert_eq!(
        identities,
        ["com.example.B", "com.example.A", "com.example.C"]
    );
    assert_eq!(graph.discovery_index("com.example.A"), Some(1));
}

#[test]
fn duplicate_identity_is_rejected() {
    let mut graph = ComponentGraph::new();
    assert!(graph.insert(node("com.example.A")));

    let mut replacement = node("com.example.A");
    replacement.kind = ComponentKind::Configuration;
    assert!(!graph.insert(replacement));

    assert_eq!(graph.len(), 1);
    assert_eq!(
        graph.get("com.example.A").map(|n| n.kind),
        Some(ComponentKind::Component)
    );
}

#[test]
fn exclusion_keeps_storage_and_order() {
    let mut graph = ComponentGraph::new();
    graph.insert(node("a"));
    graph.insert(node("b"));
    graph.insert(node("c"));

    graph.exclude("b");

    assert_eq!(graph.len(), 3);
    let active: Vec<&str> = graph.active().map(|n| n.identity.as_str()).collect();
    assert_eq!(active, ["a", "c"]);
    let all: Vec<&str> = graph.iter().map(|n| n.identity.as_str()).collect();
    assert_eq!(all, ["a", "b", "c"]);
}

#[test]
fn requires_checks_conditions() {
    let mut n = node("a");
    n.conditions.push(Capability::Xml);
    assert!(n.requires(Capability::Xml));
    assert!(!n.requires(Capability::Yaml));
}

#[test]
fn capability_names_round_trip_through_serde() {
    for cap in Capability::ALL {
        let json = serde_json::to_string(&cap).unwrap();
        assert_eq!(json, format!("\"{}\"", cap.name()));
        let back: Capability = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cap);
    }
}

#[test]
fn property_guard_deserializes_camel_case() {
    let guard: PropertyGuard =
        serde_json::from_str(r#"{"name": "app.cache.enabled", "expectedValue": "true"}"#).unwrap();
    assert_eq!(guard.name, "app.cache.enabled");
    assert_eq!(guard.expected_value.as_deref(), Some("true"));

    let bare: PropertyGuard = serde_json::from_str(r#"{"name": "app.cache.enabled"}"#).unwrap();
    assert_eq!(bare.expected_value, None);
}
