use serial_test::serial;
use std::env;
use std::path::PathBuf;

use emodiary::config::Config;
use emodiary::errors::AppError;
use emodiary::storage::Backend;

const VARS: [&str; 5] = [
    "EMODIARY_DIR",
    "EMODIARY_BACKEND",
    "EMODIARY_USER",
    "USER",
    "HOME",
];

/// Runs `f` with only the given variables set out of `VARS`, then restores the
/// original environment.
fn with_clean_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let saved: Vec<(&str, Option<String>)> =
        VARS.iter().map(|&name| (name, env::var(name).ok())).collect();

    for name in VARS {
        env::remove_var(name);
    }
    for (name, value) in vars {
        env::set_var(name, value);
    }

    let result = f();

    for (name, value) in saved {
        match value {
            Some(val) => env::set_var(name, val),
            None => env::remove_var(name),
        }
    }
    result
}

#[test]
#[serial]
fn test_config_load_with_fallbacks() {
    let config = with_clean_env(&[("HOME", "/home/diarist")], Config::load).unwrap();

    assert_eq!(
        config.data_dir,
        PathBuf::from("/home/diarist/.local/share/emodiary")
    );
    assert_eq!(config.backend, Backend::Sqlite);
    assert_eq!(config.user_id.as_str(), "default");
    assert_eq!(
        config.db_path(),
        PathBuf::from("/home/diarist/.local/share/emodiary/emodiary.db")
    );
}

#[test]
#[serial]
fn test_config_expands_tilde() {
    let config = with_clean_env(
        &[("HOME", "/home/diarist"), ("EMODIARY_DIR", "~/diary")],
        Config::load,
    )
    .unwrap();

    assert_eq!(config.data_dir, PathBuf::from("/home/diarist/diary"));
    assert_eq!(config.store_dir(), PathBuf::from("/home/diarist/diary/store"));
}

#[test]
#[serial]
fn test_config_relative_dir_fails_validation() {
    let config = with_clean_env(&[("EMODIARY_DIR", "relative/diary")], Config::load).unwrap();

    match config.validate() {
        Err(AppError::Config(msg)) => assert!(msg.contains("absolute")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_config_user_override_wins_over_environment() {
    let config = with_clean_env(
        &[
            ("EMODIARY_DIR", "/tmp/emodiary"),
            ("EMODIARY_USER", "diary-owner"),
            ("USER", "john doe"),
        ],
        || Config::load_with_user(Some("alice")),
    )
    .unwrap();

    assert_eq!(config.user_id.as_str(), "alice");
    assert!(config.validate().is_ok());
}
