//! Integration tests for storage command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::vent_cmd;

#[test]
fn test_storage_on_fresh_stash_is_full() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .arg("storage")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Remaining storage: 5242880 bytes (100.0%)",
        ));
}

#[test]
fn test_storage_decreases_after_add() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .args(["add", "some stored text"])
        .assert()
        .success();

    let output = vent_cmd()
        .current_dir(temp.path())
        .arg("storage")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Remaining storage: "));
    assert!(!stdout.contains("5242880 bytes"));
    // Tiny usage, so the percentage stays near full
    assert!(stdout.contains("(100.0%)") || stdout.contains("(99.9%)"));
}

#[test]
fn test_storage_counts_foreign_keys_in_partition() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    // Another key in the same partition; 4 chars cost 8 bytes
    fs::write(temp.path().join(".vent/storage/other"), "abcd").unwrap();

    vent_cmd()
        .current_dir(temp.path())
        .arg("storage")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining storage: 5242872 bytes"));
}
