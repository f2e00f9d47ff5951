//! Integration tests for list command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::vent_cmd;

fn stash_with_entries() -> TempDir {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .args(["add", "grocery run", "-c", "errands"])
        .assert()
        .success();
    vent_cmd()
        .current_dir(temp.path())
        .args(["add", "https://example.com/article", "-c", "reading"])
        .assert()
        .success();
    vent_cmd()
        .current_dir(temp.path())
        .args(["add", "Grocery budget notes", "-c", "errands", "-c", "money"])
        .assert()
        .success();

    temp
}

#[test]
fn test_list_no_entries() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_shows_all_entries() {
    let temp = stash_with_entries();

    vent_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("grocery run"))
        .stdout(predicate::str::contains("example.com"))
        .stdout(predicate::str::contains("Grocery budget notes"));
}

#[test]
fn test_list_query_is_case_insensitive() {
    let temp = stash_with_entries();

    vent_cmd()
        .current_dir(temp.path())
        .args(["list", "--query", "GROCERY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grocery run"))
        .stdout(predicate::str::contains("Grocery budget notes"))
        .stdout(predicate::str::contains("example.com").not());
}

#[test]
fn test_list_filters_by_category() {
    let temp = stash_with_entries();

    vent_cmd()
        .current_dir(temp.path())
        .args(["list", "--category", "reading"])
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com"))
        .stdout(predicate::str::contains("grocery run").not());
}

#[test]
fn test_list_category_match_is_exact() {
    let temp = stash_with_entries();

    vent_cmd()
        .current_dir(temp.path())
        .args(["list", "--category", "Errands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_filters_are_conjunctive() {
    let temp = stash_with_entries();

    vent_cmd()
        .current_dir(temp.path())
        .args(["list", "--query", "grocery", "--category", "money"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery budget notes"))
        .stdout(predicate::str::contains("grocery run").not());
}

#[test]
fn test_list_with_limit() {
    let temp = stash_with_entries();

    let output = vent_cmd()
        .current_dir(temp.path())
        .args(["list", "--limit", "2"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 2);
}

#[test]
fn test_list_shows_main_badge_for_uncategorized() {
    let temp = TempDir::new().unwrap();
    vent_cmd().arg("init").arg(temp.path()).assert().success();

    vent_cmd()
        .current_dir(temp.path())
        .args(["add", "no category here"])
        .assert()
        .success();

    vent_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Main]"));
}
