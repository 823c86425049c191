//! Configuration system tests
//!
//! Tests for config paths and settings persistence.

use vimrc_loader::config::{Settings, DEFAULT_VIMRC_PATH};
use vimrc_loader::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("vimrc-loader"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Settings Tests
// ========================================================================

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.vimrc_path, ".vimrc");
    assert_eq!(settings.vimrc_path, DEFAULT_VIMRC_PATH);
}

#[test]
fn test_settings_serialize_deserialize() {
    let settings = Settings {
        vimrc_path: "dotfiles/.vimrc".to_string(),
    };
    let yaml = serde_yaml::to_string(&settings).unwrap();
    let parsed: Settings = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "vimrc_path: [not, a, string]\n").unwrap();

    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let settings = Settings {
        vimrc_path: "keys.vim".to_string(),
    };
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path), settings);
}

#[test]
fn test_set_vimrc_path_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut settings = Settings::default();
    settings.set_vimrc_path("  vim/keys.vim ", &path).unwrap();

    assert_eq!(settings.vimrc_path, "vim/keys.vim");
    assert_eq!(Settings::load_from(&path).vimrc_path, "vim/keys.vim");
}
