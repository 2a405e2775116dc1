use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Loading
// =========================================================================

#[test]
#[serial]
fn given_empty_config_dir_when_load_then_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _storage = EnvGuard::remove("GAMEHUB_STORAGE_DIR");
    let _level = EnvGuard::remove("GAMEHUB_LOG_LEVEL");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.storage.dir, "session");
    assert_eq!(*config.logging.level, LevelFilter::Info);
    assert!(!config.logging.to_file);
}

#[test]
#[serial]
fn given_config_toml_when_load_then_values_applied() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _storage = EnvGuard::remove("GAMEHUB_STORAGE_DIR");
    let _level = EnvGuard::remove("GAMEHUB_LOG_LEVEL");
    std::fs::write(
        temp.path().join("config.toml"),
        "[storage]\ndir = \"state\"\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.storage.dir, "state");
    assert_eq!(*config.logging.level, LevelFilter::Debug);
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_they_win_over_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[storage]\ndir = \"state\"\n").unwrap();
    let _storage = EnvGuard::set("GAMEHUB_STORAGE_DIR", "env-state");
    let _level = EnvGuard::set("GAMEHUB_LOG_LEVEL", "trace");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.storage.dir, "env-state");
    assert_eq!(*config.logging.level, LevelFilter::Trace);
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "storage = not toml").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("TOML parse error"));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".gamehub");
    let _guard = EnvGuard::set("GAMEHUB_CONFIG_DIR", nested.to_str().unwrap());
    let _storage = EnvGuard::remove("GAMEHUB_STORAGE_DIR");
    let _level = EnvGuard::remove("GAMEHUB_LOG_LEVEL");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.exists());
}

// =========================================================================
// Validation
// =========================================================================

#[test]
#[serial]
fn given_absolute_storage_dir_when_validate_then_error() {
    let mut config = Config::default();
    config.storage.dir = "/etc/gamehub".to_string();

    let result = config.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("storage.dir"));
}

#[test]
#[serial]
fn given_parent_escape_in_storage_dir_when_validate_then_error() {
    let mut config = Config::default();
    config.storage.dir = "../outside".to_string();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_parent_escape_in_log_directory_when_validate_then_error() {
    let mut config = Config::default();
    config.logging.directory = "../logs".to_string();

    let result = config.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("logging.directory"));
}

#[test]
#[serial]
fn given_defaults_when_validate_then_ok() {
    assert_that!(Config::default().validate(), ok(anything()));
}

// =========================================================================
// Derived paths and log level leniency
// =========================================================================

#[test]
#[serial]
fn given_storage_dir_when_resolved_then_under_config_dir() {
    let (temp, _guard) = setup_config_dir();
    let config = Config::default();

    let dir = config.storage_dir().unwrap();

    assert_eq!(dir, temp.path().join("session"));
}

#[test]
#[serial]
fn given_file_logging_disabled_when_log_file_then_none() {
    let (_temp, _guard) = setup_config_dir();
    let config = Config::default();

    assert!(config.log_file().unwrap().is_none());
}

#[test]
#[serial]
fn given_file_logging_enabled_when_log_file_then_under_log_directory() {
    let (temp, _guard) = setup_config_dir();
    let mut config = Config::default();
    config.logging.to_file = true;

    let path = config.log_file().unwrap().unwrap();

    assert_eq!(path, temp.path().join("log").join("gamehub.log"));
}

#[test]
fn given_unknown_log_level_when_parsed_then_falls_back_to_info() {
    let level = crate::LogLevel::from_str("shouting").unwrap();

    assert_eq!(*level, LevelFilter::Info);
}
