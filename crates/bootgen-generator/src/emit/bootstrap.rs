//! Bootstrap source rendering.
//!
//! Renders one source unit that registers every retained component in
//! topological order and hands off to the application entry point. The
//! output is a pure function of the ordered node list and the options, which
//! is what makes re-emission byte-identical.

use std::path::{Path, PathBuf};

use bootgen_core::{ComponentKind, ComponentNode};

/// Class name of the generated bootstrap unit.
pub const BOOTSTRAP_CLASS: &str = "ApplicationBootstrap";

/// Location of the bootstrap source under `source_root`, in the entry-point
/// class's package directory.
pub fn bootstrap_path(source_root: &Path, entry_point: &str) -> PathBuf {
    let mut path = source_root.to_path_buf();
    if let Some(package) = package_of(entry_point) {
        for segment in package.split('.') {
            path.push(segment);
        }
    }
    path.push(format!("{BOOTSTRAP_CLASS}.java"));
    path
}

fn package_of(entry_point: &str) -> Option<&str> {
    entry_point.rsplit_once('.').map(|(package, _)| package)
}

/// Render the bootstrap source for the given registration order.
pub fn render(order: &[&ComponentNode], entry_point: &str, debug_verify: bool) -> String {
    let mut out = String::new();

    if let Some(package) = package_of(entry_point) {
        out.push_str(&format!("package {package};\n\n"));
    }
    out.push_str("// Generated bootstrap. Do not edit.\n");
    out.push_str(&format!("public class {BOOTSTRAP_CLASS} {{\n\n"));
    out.push_str("    public static void main(String[] args) {\n");
    out.push_str("        BootstrapRegistry registry = new BootstrapRegistry();\n");

    for node in order {
        out.push_str(&registration(node));
        if debug_verify {
            out.push_str(&format!("        registry.verify(\"{}\");\n", node.identity));
        }
    }

    out.push_str(&format!("        {entry_point}.main(args);\n"));
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

fn registration(node: &ComponentNode) -> String {
    match node.kind {
        ComponentKind::Configuration => {
            format!(
                "        registry.registerConfiguration(\"{}\");\n",
                node.identity
            )
        }
        ComponentKind::Component => {
            format!("        registry.register(\"{}\");\n", node.identity)
        }
        ComponentKind::PropertySource => {
            format!(
                "        registry.registerPropertySource(\"{}\");\n",
                node.identity
            )
        }
        ComponentKind::Conditional => {
            // Left for runtime: the build-time check could not resolve it.
            match node.property.as_ref() {
                Some(guard) => match &guard.expected_value {
                    Some(expected) => format!(
                        "        registry.registerConditional(\"{}\", \"{}\", \"{}\");\n",
                        node.identity, guard.name, expected
                    ),
                    None => format!(
                        "        registry.registerConditional(\"{}\", \"{}\");\n",
                        node.identity, guard.name
                    ),
                },
                None => format!("        registry.register(\"{}\");\n", node.identity),
            }
        }
    }
}
