//! CLI smoke tests for the pmcli binary
//!
//! Only commands with no network dependency run here; façade behavior against
//! a mock server lives in `client_test` and `services_test`.

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use pmcli::paths;

fn pmcli() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("pmcli"))
}

#[test]
fn test_version() {
    pmcli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pmcli"));
}

#[test]
fn test_help() {
    pmcli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("project management"));
}

#[test]
fn test_no_args_shows_info() {
    pmcli().assert().success().stdout(predicate::str::contains("pmcli"));
}

#[test]
fn test_version_subcommand_json() {
    pmcli()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_task_list_rejects_status_without_scope() {
    let temp = TempDir::new().unwrap();

    // --status alone has no matching endpoint; must be refused before dispatch
    pmcli()
        .env(paths::CONFIG_DIR_ENV, temp.path())
        .args(["task", "list", "--status", "done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--status requires"));
}

#[test]
fn test_task_list_rejects_invalid_status_value() {
    let temp = TempDir::new().unwrap();

    pmcli()
        .env(paths::CONFIG_DIR_ENV, temp.path())
        .args(["task", "list", "--project", "1", "--status", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status"));
}

#[test]
fn test_overdue_conflicts_with_project() {
    pmcli()
        .args(["task", "list", "--overdue", "--project", "1"])
        .assert()
        .failure();
}
