//! End-to-end tests driving the `clivm` binary against a temporary CLIVM_HOME.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn clivm(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clivm").expect("clivm binary");
    cmd.env("CLIVM_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn link(home: &Path, name: &str) -> Option<PathBuf> {
    std::fs::read_link(home.join("bin").join(name)).ok()
}

fn record(home: &Path, name: &str) -> Option<serde_json::Value> {
    let raw = std::fs::read_to_string(home.join("data").join(format!("{name}.json"))).ok()?;
    serde_json::from_str(&raw).ok()
}

#[test]
fn help_and_version_exit_zero() {
    let home = TempDir::new().unwrap();
    clivm(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("switch").and(predicate::str::contains("remove")));
    clivm(home.path())
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bare_invocation_prints_usage_and_exits_zero() {
    let home = TempDir::new().unwrap();
    clivm(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    assert!(!home.path().join("data").exists());
}

#[test]
fn unknown_command_exits_one() {
    let home = TempDir::new().unwrap();
    clivm(home.path()).arg("frobnicate").assert().code(1);
    clivm(home.path()).arg("switch").assert().code(1);
}

#[test]
fn empty_list_is_not_an_error() {
    let home = TempDir::new().unwrap();
    clivm(home.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
    clivm(home.path())
        .args(["list", "node"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no entries found for node"));
}

#[test]
fn list_all_keyword_lists_every_tool() {
    let home = TempDir::new().unwrap();
    let h = home.path();
    clivm(h)
        .args(["ls", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));

    clivm(h).args(["add", "/a/node", "--name", "node"]).assert().success();
    clivm(h).args(["add", "/a/deno", "--name", "deno"]).assert().success();
    clivm(h)
        .args(["list", "all"])
        .assert()
        .success()
        .stdout("deno\n ▸ 1: /a/deno\n\nnode\n ▸ 1: /a/node\n\n");
}

#[test]
fn relative_paths_match_their_absolute_form() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let cwd = work.path().canonicalize().unwrap();
    std::fs::create_dir_all(cwd.join("bin")).unwrap();
    std::fs::write(cwd.join("bin/tool"), "").unwrap();
    let absolute = cwd.join("bin/tool");
    let h = home.path();

    clivm(h)
        .current_dir(&cwd)
        .args(["add", "./bin/tool", "--name", "tool"])
        .assert()
        .success();
    assert_eq!(link(h, "tool"), Some(absolute.clone()));
    clivm(h)
        .args(["add", absolute.to_str().unwrap(), "--name", "tool"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already has version"));

    clivm(h).args(["add", "/opt/tool-2/tool", "--name", "tool"]).assert().success();
    clivm(h)
        .args(["sw", "tool", "--select", "/opt/tool-2/tool"])
        .assert()
        .success();
    clivm(h)
        .current_dir(&cwd)
        .args(["sw", "tool", "--select", "./bin/tool"])
        .assert()
        .success();
    assert_eq!(link(h, "tool"), Some(absolute));
    clivm(h)
        .current_dir(&cwd)
        .args(["rm", "tool", "--select", "./bin/tool"])
        .assert()
        .success();
    assert_eq!(
        record(h, "tool").unwrap()["versions"],
        serde_json::json!(["/opt/tool-2/tool"])
    );
}

#[test]
fn add_switch_remove_lifecycle() {
    let home = TempDir::new().unwrap();
    let h = home.path();

    clivm(h)
        .args(["add", "/opt/tool-1.0/tool", "--name", "tool"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created tool with version /opt/tool-1.0/tool"));
    assert_eq!(link(h, "tool"), Some(PathBuf::from("/opt/tool-1.0/tool")));
    assert_eq!(
        record(h, "tool"),
        Some(serde_json::json!({"id": "tool", "version": 0, "versions": ["/opt/tool-1.0/tool"]}))
    );

    clivm(h)
        .args(["add", "/opt/tool-2.0/tool", "--name", "tool"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added /opt/tool-2.0/tool to tool"));
    assert_eq!(link(h, "tool"), Some(PathBuf::from("/opt/tool-1.0/tool")));

    clivm(h)
        .args(["sw", "tool", "--select", "/opt/tool-2.0/tool"])
        .assert()
        .success();
    assert_eq!(link(h, "tool"), Some(PathBuf::from("/opt/tool-2.0/tool")));
    clivm(h)
        .args(["ls", "tool"])
        .assert()
        .success()
        .stdout("tool\n   1: /opt/tool-1.0/tool\n ▸ 2: /opt/tool-2.0/tool\n\n");

    clivm(h)
        .args(["rm", "tool", "--select", "/opt/tool-2.0/tool"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Switched tool from /opt/tool-2.0/tool to /opt/tool-1.0/tool",
        ));
    assert_eq!(link(h, "tool"), Some(PathBuf::from("/opt/tool-1.0/tool")));
    assert_eq!(record(h, "tool").unwrap()["version"], 0);

    clivm(h)
        .args(["rm", "tool"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully removed tool from CLI Version Manager"));
    assert_eq!(link(h, "tool"), None);
    assert_eq!(record(h, "tool"), None);
}

#[test]
fn switching_to_unknown_version_changes_nothing() {
    let home = TempDir::new().unwrap();
    let h = home.path();
    clivm(h).args(["add", "/a/node", "--name", "node"]).assert().success();
    clivm(h)
        .args(["switch", "node", "--select", "/b/node"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a registered version"));
    assert_eq!(link(h, "node"), Some(PathBuf::from("/a/node")));
    assert_eq!(record(h, "node").unwrap()["version"], 0);
}

#[test]
fn duplicate_version_is_rejected() {
    let home = TempDir::new().unwrap();
    let h = home.path();
    clivm(h).args(["add", "/a/node", "--name", "node"]).assert().success();
    clivm(h)
        .args(["add", "/a/node", "--name", "node"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already has version"));
    assert_eq!(record(h, "node").unwrap()["versions"], serde_json::json!(["/a/node"]));
}

#[test]
fn regular_file_in_bin_dir_is_not_clobbered() {
    let home = TempDir::new().unwrap();
    let h = home.path();
    std::fs::create_dir_all(h.join("bin")).unwrap();
    std::fs::write(h.join("bin/node"), "keep me").unwrap();
    clivm(h)
        .args(["add", "/a/node", "--name", "node"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a symlink"));
    assert_eq!(record(h, "node"), None);
    assert_eq!(std::fs::read_to_string(h.join("bin/node")).unwrap(), "keep me");
}

#[test]
fn setup_apply_patches_existing_profiles_once() {
    let home = TempDir::new().unwrap();
    let user_home = TempDir::new().unwrap();
    let bashrc = user_home.path().join(".bashrc");
    std::fs::write(&bashrc, "# my bashrc\n").unwrap();

    for expected in ["successfully patched", "already patched"] {
        clivm(home.path())
            .env("HOME", user_home.path())
            .args(["setup", "--apply"])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
    let body = std::fs::read_to_string(&bashrc).unwrap();
    let line = format!("export PATH=\"{}\":$PATH", home.path().join("bin").display());
    assert_eq!(body.matches(&line).count(), 1);
    assert!(!user_home.path().join(".zshrc").exists());
    assert!(home.path().join("bin").is_dir());
}
