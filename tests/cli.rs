//! Binary smoke tests.
//!
//! Anything touching the real provider is out of reach here; these
//! cover the argument surface and startup configuration validation,
//! which fails before any provider call.

use assert_cmd::Command;
use predicates::prelude::*;

fn keywarden() -> Command {
    Command::cargo_bin("keywarden").unwrap()
}

#[test]
fn test_help_lists_commands() {
    keywarden()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run").and(predicate::str::contains("check")));
}

#[test]
fn test_version_prints_crate_name() {
    keywarden()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("keywarden"));
}

#[test]
fn test_malformed_notify_age_fails_at_startup() {
    keywarden()
        .env("NOTIFYKEYAGE", "not-a-number")
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOTIFYKEYAGE"));
}

#[test]
fn test_negative_notify_age_fails_at_startup() {
    keywarden()
        .env("NOTIFYKEYAGE", "-3")
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn test_unknown_command_is_rejected() {
    keywarden().arg("rotate").assert().failure();
}
