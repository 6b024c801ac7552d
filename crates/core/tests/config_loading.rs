//! Integration tests for `.bizscope.toml` discovery.

use bizscope_core::config::CONFIG_FILE;
use bizscope_core::{load_directory_config, DirectoryConfig, ModalVariant};
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = load_directory_config(dir.path());
    assert_eq!(config, DirectoryConfig::default());
    assert!(!config.directory.is_empty());
}

#[test]
fn test_file_in_root_is_loaded() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
categories = ["Cafes"]
initial_category = "Cafes"
variant = "compact"

[[businesses]]
name = "Bean There"
category = "Cafes"
location = "Ogdenville"
"#,
    )
    .expect("Failed to write config");

    let config = load_directory_config(dir.path());
    assert_eq!(config.variant, ModalVariant::Compact);
    assert_eq!(config.initial_category.as_deref(), Some("Cafes"));
    assert_eq!(config.directory.len(), 1);
    assert_eq!(config.directory.categories(), &["Cafes".to_string()]);
}

#[test]
fn test_unparseable_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(CONFIG_FILE), "categories = [\"Food\"").expect("Failed to write config");
    assert_eq!(load_directory_config(dir.path()), DirectoryConfig::default());
}
