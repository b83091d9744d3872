//! Integration tests for the config command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::daybook_cmd;

fn journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    daybook_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_config_list() {
    let temp = journal();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date_format = %d-%m-%Y"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_get_and_set() {
    let temp = journal();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "date_format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("%d-%m-%Y"));

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "date_format", "%Y-%m-%d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set date_format = %Y-%m-%d"));

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "date_format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("%Y-%m-%d"));
}

#[test]
fn test_config_rejects_unrenderable_date_format() {
    let temp = journal();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["add", "--title", "A", "--content", "x"])
        .assert()
        .success();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "date_format", "%Q"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid date format"));

    // The stored config is untouched, so listing commands keep working
    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "date_format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("%d-%m-%Y"));

    daybook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("A"));

    daybook_cmd()
        .current_dir(temp.path())
        .arg("mood")
        .assert()
        .success();
}

#[test]
fn test_config_unknown_key() {
    let temp = journal();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = journal();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_without_key_shows_usage() {
    let temp = journal();

    daybook_cmd()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: daybook config"));
}
