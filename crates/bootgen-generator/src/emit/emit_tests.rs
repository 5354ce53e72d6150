use std::fs;
use std::path::{Path, PathBuf};

use bootgen_core::{AotOptions, ApplicationStructure};
use tempfile::TempDir;

use crate::{BootstrapCodeGenerator, Error, extract, locate::locate, prune};

use super::{EmitError, emit};

struct Fixture {
    _root: TempDir,
    classes: PathBuf,
    resources: PathBuf,
    sources_out: PathBuf,
    resources_out: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let classes = root.path().join("classes");
        let resources = root.path().join("resources");
        fs::create_dir_all(&classes).unwrap();
        fs::create_dir_all(&resources).unwrap();
        Self {
            classes,
            resources,
            sources_out: root.path().join("out/sources"),
            resources_out: root.path().join("out/resources"),
            _root: root,
        }
    }

    fn descriptor(&self, file: &str, json: &str) {
        let path = self.classes.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, json).unwrap();
    }

    fn resource(&self, relative: &str, content: &str) {
        let path = self.resources.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn structure(&self) -> ApplicationStructure {
        locate(
            self.sources_out.clone(),
            self.resources_out.clone(),
            &[self.classes.clone()],
            &[self.resources.clone()],
            None,
            Vec::new(),
        )
        .unwrap()
    }
}

fn entry_descriptor() -> &'static str {
    r#"{"type": "com.example.App", "kind": "configuration", "entryPoint": true}"#
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn emission_is_byte_identical_across_runs() {
    let fx = Fixture::new();
    fx.descriptor("App.component.json", entry_descriptor());
    fx.descriptor(
        "Service.component.json",
        r#"{"type": "com.example.Service", "kind": "component", "dependsOn": ["com.example.App"]}"#,
    );
    fx.resource("application.properties", "app.name=demo\n");

    let generator = BootstrapCodeGenerator::new(AotOptions::default());
    let first = generator.generate(&fx.structure()).unwrap();
    let first_bootstrap = read(&first.bootstrap_path);
    let first_resource = read(&fx.resources_out.join("application.properties"));

    let second = generator.generate(&fx.structure()).unwrap();
    assert_eq!(first.bootstrap_path, second.bootstrap_path);
    assert_eq!(first_bootstrap, read(&second.bootstrap_path));
    assert_eq!(
        first_resource,
        read(&fx.resources_out.join("application.properties"))
    );
}

#[test]
fn bootstrap_registers_dependency_before_dependent() {
    let fx = Fixture::new();
    fx.descriptor("App.component.json", entry_descriptor());
    fx.descriptor(
        "Service.component.json",
        r#"{"type": "com.example.Service", "kind": "component", "dependsOn": ["com.example.App"]}"#,
    );

    let generator = BootstrapCodeGenerator::new(AotOptions::default());
    let report = generator.generate(&fx.structure()).unwrap();
    assert_eq!(report.entry_point, "com.example.App");
    assert_eq!(report.registered, 2);

    let source = read(&report.bootstrap_path);
    let app = source.find("\"com.example.App\"").unwrap();
    let service = source.find("\"com.example.Service\"").unwrap();
    assert!(app < service);
    assert!(source.contains("com.example.App.main(args);"));
}

#[test]
fn cycle_produces_no_output_files() {
    let fx = Fixture::new();
    fx.descriptor("App.component.json", entry_descriptor());
    fx.descriptor(
        "A.component.json",
        r#"{"type": "com.example.A", "kind": "component", "dependsOn": ["com.example.B"]}"#,
    );
    fx.descriptor(
        "B.component.json",
        r#"{"type": "com.example.B", "kind": "component", "dependsOn": ["com.example.A"]}"#,
    );
    fx.resource("application.properties", "app.name=demo\n");

    let generator = BootstrapCodeGenerator::new(AotOptions::default());
    let err = generator.generate(&fx.structure()).unwrap_err();
    assert!(matches!(
        err,
        Error::Emit(EmitError::CyclicDependency { .. })
    ));

    assert!(!fx.sources_out.exists());
    assert!(!fx.resources_out.exists());
}

#[test]
fn remove_yaml_filters_the_associated_resource() {
    let fx = Fixture::new();
    fx.descriptor("App.component.json", entry_descriptor());
    fx.descriptor(
        "YamlConfig.component.json",
        r#"{
            "type": "com.example.YamlConfig",
            "kind": "component",
            "requires": ["yaml"],
            "resources": ["config/app.yml"]
        }"#,
    );
    fx.resource("config/app.yml", "name: demo\n");
    fx.resource("application.properties", "app.name=demo\n");

    let mut options = AotOptions::default();
    options.remove_yaml_support = true;
    let generator = BootstrapCodeGenerator::new(options);
    let report = generator.generate(&fx.structure()).unwrap();

    assert!(!fx.resources_out.join("config/app.yml").exists());
    assert_eq!(
        read(&fx.resources_out.join("application.properties")),
        "app.name=demo\n"
    );
    assert!(!read(&report.bootstrap_path).contains("YamlConfig"));
    assert_eq!(report.excluded, 1);
}

#[test]
fn resource_shared_with_a_retained_node_survives() {
    let fx = Fixture::new();
    fx.descriptor("App.component.json", entry_descriptor());
    fx.descriptor(
        "Yaml.component.json",
        r#"{
            "type": "com.example.Yaml",
            "kind": "component",
            "requires": ["yaml"],
            "resources": ["shared.txt"]
        }"#,
    );
    fx.descriptor(
        "Keeper.component.json",
        r#"{"type": "com.example.Keeper", "kind": "component", "resources": ["shared.txt"]}"#,
    );
    fx.resource("shared.txt", "kept\n");

    let mut options = AotOptions::default();
    options.remove_yaml_support = true;
    BootstrapCodeGenerator::new(options)
        .generate(&fx.structure())
        .unwrap();

    assert_eq!(read(&fx.resources_out.join("shared.txt")), "kept\n");
}

#[test]
fn resource_tree_reemits_without_rerunning_extraction() {
    let fx = Fixture::new();
    fx.descriptor("App.component.json", entry_descriptor());
    fx.resource("config/app.txt", "value\n");
    fx.resource("application.properties", "app.name=demo\n");

    let structure = fx.structure();
    let options = AotOptions::default();
    let (extraction, _) = extract::extract(&structure).unwrap();
    let mut graph = extraction.graph;
    prune::prune(
        &mut graph,
        &options,
        &prune::BuildTimeProperties::load(&structure),
    );

    let first = emit(&graph, &extraction.entry_point, &structure, &options).unwrap();
    assert_eq!(first.resources_written.len(), 2);

    fs::remove_dir_all(&fx.resources_out).unwrap();
    let second = emit(&graph, &extraction.entry_point, &structure, &options).unwrap();

    assert_eq!(first.resources_written, second.resources_written);
    assert_eq!(read(&fx.resources_out.join("config/app.txt")), "value\n");
    assert_eq!(
        read(&fx.resources_out.join("application.properties")),
        "app.name=demo\n"
    );
}

#[test]
fn debug_verify_renders_assertions_into_the_bootstrap() {
    let fx = Fixture::new();
    fx.descriptor("App.component.json", entry_descriptor());

    let mut options = AotOptions::default();
    options.debug_verify = true;
    let report = BootstrapCodeGenerator::new(options)
        .generate(&fx.structure())
        .unwrap();

    assert!(read(&report.bootstrap_path).contains("registry.verify(\"com.example.App\");"));
}
