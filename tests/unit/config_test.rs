//! Tests for global configuration

use serial_test::serial;
use tempfile::TempDir;

use pmcli::config::GlobalConfig;
use pmcli::paths;

// SAFETY: env mutation races with nothing because these tests are #[serial]
fn set_config_dir(dir: &std::path::Path) {
    unsafe { std::env::set_var(paths::CONFIG_DIR_ENV, dir) };
}

#[test]
#[serial]
fn test_default_config_when_file_missing() {
    let dir = TempDir::new().unwrap();
    set_config_dir(dir.path());

    let config = GlobalConfig::load();
    assert_eq!(config.ui.format, "human");
}

#[test]
#[serial]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    set_config_dir(dir.path());

    let mut config = GlobalConfig::load();
    config.ui.format = "json".to_string();
    config.save().unwrap();

    let reloaded = GlobalConfig::load();
    assert_eq!(reloaded.ui.format, "json");
}

#[test]
#[serial]
fn test_paths_follow_config_dir_override() {
    let dir = TempDir::new().unwrap();
    set_config_dir(dir.path());

    assert!(paths::config_file().starts_with(dir.path()));
    assert!(paths::token_file().starts_with(dir.path()));
}

#[test]
#[serial]
fn test_garbled_config_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    set_config_dir(dir.path());
    std::fs::write(paths::config_file(), "not = [valid").unwrap();

    let config = GlobalConfig::load();
    assert_eq!(config.ui.format, "human");
}
