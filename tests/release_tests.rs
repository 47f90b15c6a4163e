//! Integration tests for the release command

#![allow(deprecated)]

use chrono::Local;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::md_changelog_cmd;

const PENDING: &str = "Changelog\n\
    =========\n\
    \n\
    1.0.0+1 (UNRELEASED)\n\
    --------------------\n\
    * [Feature] New parser\n\
    \n\
    1.0.0 (2016-03-11)\n\
    ------------------\n\
    * Initial release\n";

fn project_with(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    md_changelog_cmd()
        .arg("init")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .success();
    fs::write(temp.path().join("Changelog.md"), content).unwrap();
    temp
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[test]
fn test_release_with_version_force_yes() {
    let temp = project_with(PENDING);

    md_changelog_cmd()
        .current_dir(temp.path())
        .args(["release", "-v", "1.1.0", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Released '1.1.0 ("));

    let content = fs::read_to_string(temp.path().join("Changelog.md")).unwrap();
    assert!(content.contains(&format!("1.1.0 ({})\n", today())));
    assert!(content.contains("* [Feature] New parser"));
    assert!(!content.contains("UNRELEASED"));
}

#[test]
fn test_release_without_version_warns() {
    let temp = project_with(PENDING);

    md_changelog_cmd()
        .current_dir(temp.path())
        .args(["release", "-y"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dev suffix: 1.0.0+1"))
        .stderr(predicate::str::contains("(current) <= 1.0.0 (previous)"));
}

#[test]
fn test_release_rejects_lower_or_equal_version() {
    for target in ["1.0.0", "0.9.0"] {
        let temp = project_with(PENDING);

        md_changelog_cmd()
            .current_dir(temp.path())
            .args(["release", "-y", "-v", target])
            .assert()
            .code(99)
            .stderr(predicate::str::contains("Version must be greater"));

        let content = fs::read_to_string(temp.path().join("Changelog.md")).unwrap();
        assert_eq!(content, PENDING);
    }
}

#[test]
fn test_release_invalid_version_string() {
    let temp = project_with(PENDING);

    md_changelog_cmd()
        .current_dir(temp.path())
        .args(["release", "-y", "-v", "v2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version: 'v2'"));
}

#[test]
fn test_release_nothing_to_release() {
    let temp = project_with("Changelog\n=========\n\n1.0.0 (2016-03-11)\n---\n* done\n");

    md_changelog_cmd()
        .current_dir(temp.path())
        .args(["release", "-y"])
        .assert()
        .code(99)
        .stderr(predicate::str::contains("No UNRELEASED entries"));
}

#[test]
fn test_release_empty_changelog() {
    let temp = project_with("Changelog\n=========\n");

    md_changelog_cmd()
        .current_dir(temp.path())
        .args(["release", "-y"])
        .assert()
        .code(99)
        .stderr(predicate::str::contains("Nothing to release"));
}

#[cfg(unix)]
#[test]
fn test_release_declined_restores_file() {
    let temp = project_with(PENDING);

    md_changelog_cmd()
        .current_dir(temp.path())
        .env("EDITOR", "true")
        .args(["release", "-v", "2.0.0"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Confirm changes? [Y/n]"))
        .stdout(predicate::str::contains("Undo changes: OK"));

    let content = fs::read_to_string(temp.path().join("Changelog.md")).unwrap();
    assert_eq!(content, PENDING);
}

#[cfg(unix)]
#[test]
fn test_release_confirmed_after_editor() {
    let temp = project_with(PENDING);

    md_changelog_cmd()
        .current_dir(temp.path())
        .env("EDITOR", "true")
        .args(["release", "-v", "2.0.0"])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Released '2.0.0 ({})'", today())));
}
