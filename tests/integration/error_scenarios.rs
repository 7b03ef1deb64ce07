use assert_cmd::Command;
use predicates::prelude::*;

use super::Workspace;
use deptree_cli::test_utils::{ProviderConfigFixture, SnapshotFixture};

#[test]
fn test_invalid_format() {
    let ws = Workspace::new();
    let snapshot = SnapshotFixture::scenario().write_to(ws.dir.path()).unwrap();

    Command::cargo_bin("deptree")
        .unwrap()
        .arg("replay")
        .arg("--config")
        .arg(&ws.config)
        .arg("--catalog")
        .arg(&ws.catalog)
        .args(["--format", "yaml"])
        .arg(&snapshot)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format: yaml"))
        .stderr(predicate::str::contains("tree, json, text"));
}

#[test]
fn test_missing_snapshot_file() {
    let ws = Workspace::new();

    Command::cargo_bin("deptree")
        .unwrap()
        .arg("replay")
        .arg("--config")
        .arg(&ws.config)
        .arg("--catalog")
        .arg(&ws.catalog)
        .arg(ws.dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot file"))
        .stderr(predicate::str::contains("Check that the file exists"));
}

#[test]
fn test_invalid_snapshot_json() {
    let ws = Workspace::new();
    let snapshot = SnapshotFixture::invalid_json().write_to(ws.dir.path()).unwrap();

    Command::cargo_bin("deptree")
        .unwrap()
        .arg("replay")
        .arg("--config")
        .arg(&ws.config)
        .arg("--catalog")
        .arg(&ws.catalog)
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid snapshot file"));
}

#[test]
fn test_overlapping_rules_rejected() {
    let ws = Workspace::new();
    let config = ProviderConfigFixture::overlapping_rules().write_to(ws.dir.path()).unwrap();
    let snapshot = SnapshotFixture::scenario().write_to(ws.dir.path()).unwrap();

    Command::cargo_bin("deptree")
        .unwrap()
        .arg("classify")
        .arg("--config")
        .arg(&config)
        .arg("--catalog")
        .arg(&ws.catalog)
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("both resolved and unresolved"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    Command::cargo_bin("deptree")
        .unwrap()
        .args(["-v", "-q", "classify", "--config", "p.toml", "--catalog", "c.json", "s.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
