use std::fs::write;
use std::path::PathBuf;
use tempfile::{tempdir, NamedTempFile};

use single_header::load_config::{load_config, resolve_config};
use single_header_core::ProjectConfig;

/// A full project file resolves every path against the file's directory.
#[test]
fn test_load_config_resolves_paths_against_config_directory() {
    let config_yaml = r#"
source_root: include
dependency_root: deps
entry_points:
  - iostream.hpp
  - bits/extra.hpp
license_file: COPYING
output: build/streams.h
"#;
    let dir = tempdir().unwrap();
    let path = dir.path().join("single-header.yaml");
    write(&path, config_yaml).unwrap();

    let config = load_config(&path).expect("Config should load");

    assert_eq!(config.source_root, dir.path().join("include"));
    assert_eq!(config.dependency_root, dir.path().join("deps"));
    assert_eq!(
        config.entry_points,
        vec![PathBuf::from("iostream.hpp"), PathBuf::from("bits/extra.hpp")]
    );
    assert_eq!(config.entry_paths()[1], dir.path().join("include/bits/extra.hpp"));
    assert_eq!(config.license_file, Some(dir.path().join("COPYING")));
    assert_eq!(config.output, dir.path().join("build/streams.h"));
    assert_eq!(config.marker_base, dir.path());
}

/// Missing keys fall back to the default library layout.
#[test]
fn test_load_config_applies_defaults_for_missing_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.yaml");
    write(&path, "output: out.h\n").unwrap();

    let config = load_config(&path).unwrap();

    let defaults = ProjectConfig::default();
    assert_eq!(config.entry_points, defaults.entry_points);
    assert_eq!(config.source_root, dir.path().join("src"));
    assert_eq!(config.license_file, Some(dir.path().join("LICENSE")));
    assert_eq!(config.output, dir.path().join("out.h"));
}

#[test]
fn test_load_config_empty_file_means_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.yaml");
    write(&path, "").unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config, ProjectConfig::default().rebase(dir.path()));
}

#[test]
fn test_load_config_null_license_disables_banner_license() {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), "license_file: null\n").unwrap();

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.license_file, None);
}

/// This test ensures that if the config file is not valid YAML, load_config errors and reports as such.
#[test]
fn test_load_config_errors_for_invalid_file() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), b"not-yaml: [:::").unwrap();

    let err = load_config(config_file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("parse") || msg.contains("YAML"),
        "Parse error expected, got: {msg}"
    );
}

#[test]
fn test_load_config_rejects_unknown_keys() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), "entry_point: iostream.hpp\n").unwrap();

    let err = load_config(config_file.path()).unwrap_err();
    assert!(err.to_string().contains("YAML"), "got: {err}");
}

#[test]
fn test_load_config_errors_for_missing_file() {
    let dir = tempdir().unwrap();

    let err = load_config(dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_resolve_config_without_path_uses_default_layout() {
    let config = resolve_config(None).unwrap();
    assert_eq!(config, ProjectConfig::default());
}
