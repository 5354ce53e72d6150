use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::locate::{LocateError, locate};

#[test]
fn no_classes_path_is_fatal() {
    let err = locate(
        PathBuf::from("out/sources"),
        PathBuf::from("out/resources"),
        &[],
        &[],
        None,
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, LocateError::NoClassesPath));
}

#[test]
fn first_classes_path_becomes_the_discovery_root() {
    let structure = locate(
        PathBuf::from("out/sources"),
        PathBuf::from("out/resources"),
        &[PathBuf::from("build/classes"), PathBuf::from("build/extra")],
        &[],
        Some("com.example.App".into()),
        Vec::new(),
    )
    .unwrap();

    assert_eq!(structure.classes_path, PathBuf::from("build/classes"));
    assert_eq!(structure.main_class.as_deref(), Some("com.example.App"));
}

#[test]
fn classes_paths_join_the_classpath_without_duplicates() {
    let structure = locate(
        PathBuf::from("out/sources"),
        PathBuf::from("out/resources"),
        &[PathBuf::from("build/classes")],
        &[],
        None,
        vec![PathBuf::from("lib/dep.jar"), PathBuf::from("build/classes")],
    )
    .unwrap();

    assert_eq!(
        structure.classpath_entries,
        [PathBuf::from("lib/dep.jar"), PathBuf::from("build/classes")]
    );
}

#[test]
fn resource_paths_are_deduplicated() {
    let structure = locate(
        PathBuf::from("out/sources"),
        PathBuf::from("out/resources"),
        &[PathBuf::from("build/classes")],
        &[
            PathBuf::from("src/resources"),
            PathBuf::from("src/resources"),
            PathBuf::from("gen/resources"),
        ],
        None,
        Vec::new(),
    )
    .unwrap();

    assert_eq!(structure.resources_paths.len(), 2);
}

#[test]
fn existing_file_as_output_path_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("occupied");
    fs::write(&file, "not a directory").unwrap();

    let err = locate(
        file,
        PathBuf::from("out/resources"),
        &[PathBuf::from("build/classes")],
        &[],
        None,
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, LocateError::OutputPath { .. }));
}

#[test]
fn nonexistent_output_directory_is_allowed() {
    let dir = TempDir::new().unwrap();
    let result = locate(
        dir.path().join("not-yet/sources"),
        dir.path().join("not-yet/resources"),
        &[PathBuf::from("build/classes")],
        &[],
        None,
        Vec::new(),
    );
    assert!(result.is_ok());
}

#[test]
fn empty_output_path_is_rejected() {
    let err = locate(
        PathBuf::new(),
        PathBuf::from("out/resources"),
        &[PathBuf::from("build/classes")],
        &[],
        None,
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, LocateError::OutputPath { .. }));
}
