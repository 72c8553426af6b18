//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("linc").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("linc").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Port to listen on"))
        .stdout(predicate::str::contains("--public-dir"));
}

#[test]
fn test_config_uses_environment() {
    let mut cmd = Command::cargo_bin("linc").unwrap();
    cmd.arg("config")
        .env("DB_HOST", "db.example")
        .env("DB_PASSWORD", "hunter2")
        .env("PORT", "8181");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DB_HOST=db.example"))
        .stdout(predicate::str::contains("PORT=8181"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_config_rejects_bad_port() {
    let mut cmd = Command::cargo_bin("linc").unwrap();
    cmd.arg("config").env("PORT", "not-a-port");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("linc").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("linc"));
}
