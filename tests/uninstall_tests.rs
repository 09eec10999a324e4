//! Integration tests for `skilldeploy uninstall`

mod common;

use std::fs;

use predicates::prelude::*;

use common::TestEnv;

fn installed_env() -> TestEnv {
    let env = TestEnv::new();
    env.install().arg("--all").assert().success();
    env
}

#[test]
fn test_uninstall_by_name() {
    let env = installed_env();
    env.uninstall()
        .args(["alpha", "gamma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 removed"));

    assert_eq!(env.installed_names(), vec!["beta", "delta", "epsilon"]);
}

#[test]
fn test_uninstall_absent_bundle_warns() {
    let env = TestEnv::new();
    fs::create_dir_all(&env.target).unwrap();
    env.uninstall()
        .arg("beta")
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping beta: not installed"));
}

#[test]
fn test_uninstall_all_asks_first() {
    let env = installed_env();
    env.uninstall()
        .arg("--all")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remove all 5 skills"));

    assert_eq!(env.installed_names().len(), 5);
}

#[test]
fn test_uninstall_all_confirmed() {
    let env = installed_env();
    env.uninstall()
        .arg("--all")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 removed"));

    assert!(env.installed_names().is_empty());
}

#[test]
fn test_uninstall_all_with_yes() {
    let env = installed_env();
    env.uninstall().args(["--all", "--yes"]).assert().success();
    assert!(env.installed_names().is_empty());
}

#[test]
fn test_uninstall_menu_all_confirms() {
    let env = installed_env();
    env.uninstall().write_stdin("a\nn\n").assert().success();
    assert_eq!(env.installed_names().len(), 5);
}

#[test]
fn test_uninstall_menu_selection() {
    let env = installed_env();
    env.uninstall()
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available skills to uninstall:"));

    assert!(!env.installed("beta"));
    assert!(env.installed("alpha"));
}

#[test]
fn test_uninstall_quit() {
    let env = installed_env();
    env.uninstall().write_stdin("q\n").assert().success();
    assert_eq!(env.installed_names().len(), 5);
}

#[test]
fn test_uninstall_keeps_unrelated_directories() {
    let env = installed_env();
    fs::create_dir_all(env.target.join("my-own-skill")).unwrap();
    env.uninstall().args(["--all", "--yes"]).assert().success();
    assert_eq!(env.installed_names(), vec!["my-own-skill"]);
}

#[test]
fn test_install_after_uninstall_restores_payload() {
    let env = installed_env();
    env.uninstall().arg("delta").assert().success();
    env.install().arg("delta").assert().success();
    assert!(env.target.join("delta/docs/guide.md").is_file());
}
