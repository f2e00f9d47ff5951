//! Integration tests for config command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::vent_cmd;

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notifications = true"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_get_notifications() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .args(["config", "notifications"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_config_set_notifications() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .args(["config", "notifications", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set notifications = false"));

    vent_cmd()
        .current_dir(temp.path())
        .args(["config", "notifications"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2025-01-17T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .args(["config", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_without_key_shows_usage() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: vent config"));
}
