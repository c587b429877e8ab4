//! Tests for error handling, exit codes and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flarch(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flarch").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("FLARCH_CONFIG")
        .env_remove("FLARCH_DEFAULTS__ARCHITECTURE");
    cmd
}

#[test]
fn test_error_with_suggestions_unsupported_architecture() {
    let home = TempDir::new().unwrap();
    flarch(&home)
        .args(["new", "test", "--arch", "vuex", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("vuex"))
        .stderr(predicate::str::contains("bloc"))
        .stderr(predicate::str::contains("scoped-model"));

    assert!(!home.path().join("test").exists());
}

#[test]
fn test_error_missing_architecture_without_terminal() {
    let home = TempDir::new().unwrap();
    flarch(&home)
        .args(["new", "test"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--arch"));
}

#[test]
fn test_error_invalid_project_name() {
    let home = TempDir::new().unwrap();
    flarch(&home)
        .args(["new", ".hidden", "--arch", "bloc", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_error_unknown_flag() {
    let home = TempDir::new().unwrap();
    flarch(&home)
        .args(["new", "test", "--lang", "dart"])
        .assert()
        .code(2);
}

#[test]
fn test_error_missing_explicit_config_file() {
    let home = TempDir::new().unwrap();
    flarch(&home)
        .args(["--config", "does-not-exist.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_error_unknown_config_key() {
    let home = TempDir::new().unwrap();
    flarch(&home)
        .args(["config", "get", "defaults.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
