//! Build-time property resolution.
//!
//! Values come from `*.properties` files directly under the resource roots,
//! read in sorted order (later files override earlier ones, deterministically).
//! Only the `key=value` / `key: value` line subset is supported; that is all
//! the build-time checks need.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use bootgen_core::ApplicationStructure;

/// Property values visible at build time.
#[derive(Debug, Clone, Default)]
pub struct BuildTimeProperties {
    values: BTreeMap<String, String>,
}

impl BuildTimeProperties {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load properties from every `*.properties` file directly under each
    /// resource root. Unreadable roots or files are skipped; resolution is
    /// best-effort and unresolved checks simply stay conditional.
    pub fn load(structure: &ApplicationStructure) -> Self {
        let mut properties = Self::default();
        for root in &structure.resources_paths {
            properties.load_root(root);
        }
        properties
    }

    fn load_root(&mut self, root: &Path) {
        let Ok(entries) = fs::read_dir(root) else {
            tracing::debug!(root = %root.display(), "resource root not readable, skipping");
            return;
        };
        let mut files: Vec<_> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "properties"))
            .collect();
        files.sort();

        for file in files {
            match fs::read_to_string(&file) {
                Ok(text) => self.parse(&text),
                Err(e) => {
                    tracing::debug!(file = %file.display(), error = %e, "properties file not readable, skipping");
                }
            }
        }
    }

    fn parse(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some(split) = line.find(['=', ':']) else {
                continue;
            };
            let key = line[..split].trim();
            let value = line[split + 1..].trim();
            if !key.is_empty() {
                self.values.insert(key.to_string(), value.to_string());
            }
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Values that count as enabled when a guard has no expected value.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
