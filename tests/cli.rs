//! End-to-end tests for the quickcap binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn quickcap() -> Command {
    Command::cargo_bin("quickcap").unwrap()
}

#[test]
fn test_draft_json_output() {
    quickcap()
        .args(["--draft-only", "-o", "json", "Buy milk P1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Buy milk\""))
        .stdout(predicate::str::contains("\"priority\": \"P1\""))
        .stdout(predicate::str::contains("\"dueDate\": null"));
}

#[test]
fn test_unquoted_words_are_joined() {
    quickcap()
        .args(["--draft-only", "-o", "json", "Buy", "milk", "P1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Buy milk\""));
}

#[test]
fn test_task_record_attaches_id_and_flags() {
    quickcap()
        .args(["-o", "json", "Call client for Rajeev tomorrow 5pm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\""))
        .stdout(predicate::str::contains("\"completed\": false"))
        .stdout(predicate::str::contains("\"assignee\": \"Rajeev\""));
}

#[test]
fn test_pretty_output_lists_fields() {
    quickcap()
        .args(["--draft-only", "Buy milk P1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("P1"));
}

#[test]
fn test_missing_text_is_an_error() {
    quickcap().assert().failure();
}
