use assert_cmd::Command;
use predicates::prelude::*;

use super::Workspace;
use deptree_cli::test_utils::SnapshotFixture;

fn replay(ws: &Workspace) -> Command {
    let mut cmd = Command::cargo_bin("deptree").unwrap();
    cmd.arg("replay").arg("--config").arg(&ws.config).arg("--catalog").arg(&ws.catalog);
    cmd
}

#[test]
fn test_replay_tree_format() {
    let ws = Workspace::new();
    let snapshot = SnapshotFixture::scenario().write_to(ws.dir.path()).unwrap();

    replay(&ws)
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("MyProvider"))
        .stdout(predicate::str::contains("├── item3 (unresolved)"))
        .stdout(predicate::str::contains("├── item1"))
        .stdout(predicate::str::contains("└── item2"))
        .stdout(predicate::str::contains("shouldNotAppear").not())
        .stdout(predicate::str::contains("itemWithoutOriginalItemSpec").not());
}

#[test]
fn test_replay_text_format() {
    let ws = Workspace::new();
    let snapshot = SnapshotFixture::scenario().write_to(ws.dir.path()).unwrap();

    replay(&ws).arg("--format").arg("text").arg(&snapshot).assert().success().stdout(
        "MyProvider [RootNode]\n\
         \x20 item3 [myUnresolvedItemType/item3] unresolved\n\
         \x20 item1 [myUnresolvedItemType/item1]\n\
         \x20 item2 [myUnresolvedItemType/item2]\n",
    );
}

#[test]
fn test_replay_json_format() {
    let ws = Workspace::new();
    let snapshot = SnapshotFixture::scenario().write_to(ws.dir.path()).unwrap();

    let output = replay(&ws).arg("--format").arg("json").arg(&snapshot).output().unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["caption"], "MyProvider");
    let children = tree["children"].as_array().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0]["caption"], "item3");
    assert_eq!(children[0]["resolved"], false);
    assert_eq!(children[1]["properties"]["OriginalItemSpec"], "item1");
}

#[test]
fn test_replay_json_with_changes_is_one_document() {
    let ws = Workspace::new();
    let first = SnapshotFixture::scenario().write_to(ws.dir.path()).unwrap();
    let second = SnapshotFixture::remove_item3().write_to(ws.dir.path()).unwrap();

    let output = replay(&ws)
        .args(["--format", "json", "--changes"])
        .arg(&first)
        .arg(&second)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let changes = json["changes"].as_array().unwrap();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0]["added"].as_array().unwrap().len(), 3);
    assert_eq!(changes[1]["removed"][0]["caption"], "item3");
    assert_eq!(json["tree"]["children"].as_array().unwrap().len(), 2);
}

#[test]
fn test_replay_changes_in_text() {
    let ws = Workspace::new();
    let first = SnapshotFixture::scenario().write_to(ws.dir.path()).unwrap();
    let unchanged = SnapshotFixture::unchanged().write_to(ws.dir.path()).unwrap();

    replay(&ws)
        .args(["--format", "text", "--changes"])
        .arg(&first)
        .arg(&unchanged)
        .assert()
        .success()
        .stdout(predicate::str::contains("scenario.json"))
        .stdout(predicate::str::contains("+ item3"))
        .stdout(predicate::str::contains("unchanged.json"))
        .stdout(predicate::str::contains("(no changes)"));
}

#[test]
fn test_replay_unchanged_snapshot_leaves_tree_empty() {
    let ws = Workspace::new();
    let snapshot = SnapshotFixture::unchanged().write_to(ws.dir.path()).unwrap();

    replay(&ws)
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("(no dependencies)"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let ws = Workspace::new();
    let snapshot = SnapshotFixture::scenario().write_to(ws.dir.path()).unwrap();

    replay(&ws)
        .arg("--verbose")
        .arg(&snapshot)
        .assert()
        .success()
        .stderr(predicate::str::contains("rulenameUnresolved"));
}
