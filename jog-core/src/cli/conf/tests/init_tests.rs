use crate::cli::conf::init;
use crate::conf::load_config;
use std::fs;
use tempfile::TempDir;

#[test]
fn writes_a_loadable_template() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join(".jog.yaml");

    // Act
    init(&path, false).unwrap();

    // Assert
    let loaded = load_config(Some(&path)).unwrap();
    assert!(loaded.unknown_keys.is_empty());
    assert!(loaded.config.fields.standards.contains_key("level"));
}

#[test]
fn refuses_to_overwrite_without_force() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".jog.yaml");
    fs::write(&path, "colorization: false\n").unwrap();

    // Act
    let err = init(&path, false).unwrap_err();

    // Assert
    assert!(err.to_string().contains("already exists"), "{err}");
    assert_eq!(fs::read_to_string(&path).unwrap(), "colorization: false\n");
}

#[test]
fn force_replaces_an_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".jog.yaml");
    fs::write(&path, "colorization: false\n").unwrap();

    init(&path, true).unwrap();

    assert!(fs::read_to_string(&path).unwrap().contains("standards:"));
}
