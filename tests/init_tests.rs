//! Integration tests for init and config commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::zenith_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    zenith_cmd().arg("init").arg(temp.path()).assert().success();

    // Check .zenith directory exists
    assert!(temp.path().join(".zenith").exists());

    // Check config.toml exists with defaults
    let config_path = temp.path().join(".zenith/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("breathing_secs = 60"));
    assert!(content.contains("created"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    // First init succeeds
    zenith_cmd().arg("init").arg(temp.path()).assert().success();

    // Second init fails
    zenith_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_get_breathing_secs() {
    let temp = TempDir::new().unwrap();

    zenith_cmd().arg("init").arg(temp.path()).assert().success();

    zenith_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("breathing_secs")
        .assert()
        .success()
        .stdout(predicate::str::contains("60"));
}

#[test]
fn test_config_set_breathing_secs() {
    let temp = TempDir::new().unwrap();

    zenith_cmd().arg("init").arg(temp.path()).assert().success();

    zenith_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("breathing_secs")
        .arg("120")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set breathing_secs = 120"));

    zenith_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("breathing_secs")
        .assert()
        .success()
        .stdout(predicate::str::contains("120"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    zenith_cmd().arg("init").arg(temp.path()).assert().success();

    zenith_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("breathing_secs = 60"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    zenith_cmd().arg("init").arg(temp.path()).assert().success();

    zenith_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("mode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_commands_outside_journal_fail() {
    let temp = TempDir::new().unwrap();

    // No init: discovery fails with exit code 2
    zenith_cmd()
        .current_dir(temp.path())
        .env("ZENITH_ROOT", temp.path())
        .arg("list")
        .assert()
        .failure();
}
