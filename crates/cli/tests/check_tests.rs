//! Integration tests for the `check` and `modes` commands.

mod common;

use common::{envgate_cmd, workspace_with_env};
use predicates::prelude::*;

#[test]
fn test_check_valid_file_lists_keys_without_values() {
    let dir = workspace_with_env("GEMINI_API_KEY=abc123\n# comment\nUNUSED=\n");

    envgate_cmd(dir.path())
        .args(["check", "admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("GEMINI_API_KEY"))
        .stdout(predicate::str::contains("UNUSED"))
        .stdout(predicate::str::contains("abc123").not());
}

#[test]
fn test_check_invalid_file_fails() {
    let dir = workspace_with_env("GEMINI_API_KEY=abc123\n");

    envgate_cmd(dir.path())
        .args(["check", "viewer"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DB_PASSWORD"));
}

#[test]
fn test_check_does_not_need_scripts_or_launcher() {
    let dir = workspace_with_env("DB_PASSWORD=pw\n");

    envgate_cmd(dir.path())
        .env("ENVGATE_LAUNCHER", "envgate-test-launcher-that-does-not-exist")
        .args(["check", "db-viewer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DB_HOST"));
}

#[test]
fn test_modes_lists_all_modes() {
    let dir = tempfile::TempDir::new().unwrap();

    envgate_cmd(dir.path())
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("admin"))
        .stdout(predicate::str::contains("viewer"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("8503"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    envgate_cmd(dir.path())
        .arg("dashboard")
        .assert()
        .failure();
}
