//! Lint subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_lint_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "HTML\n\n*[HTML]: Hyper Text Markup Language\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_with_issues() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "HTML\n\n*[HTML]: Hyper Text\n*[HTML]: Hyper Text Markup Language\n*[CSS]:\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate-abbreviation-labels"))
        .stdout(predicate::str::contains("unused-abbreviations"))
        .stdout(predicate::str::contains("empty-abbreviation-title"))
        .stdout(predicate::str::contains(":4:1"))
        .stdout(predicate::str::contains("Found 3 issue(s)"));
}

#[test]
fn test_lint_check_mode_clean() {
    cargo_bin_cmd!("mdabbr")
        .args(["lint", "--check"])
        .write_stdin("HTML\n\n*[HTML]: Hyper Text Markup Language\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_lint_check_mode_issues() {
    cargo_bin_cmd!("mdabbr")
        .args(["lint", "--check"])
        .write_stdin("*[W3C]: World Wide Web Consortium\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("<stdin>:1:1"))
        .stdout(predicate::str::contains("Found 1 issue(s)"));
}
