//! Format subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_format_stdin() {
    cargo_bin_cmd!("mdabbr")
        .arg("format")
        .write_stdin("HTML\n\n\n*[HTML]:   Hyper Text\n*[CSS]:\tStyle\n")
        .assert()
        .success()
        .stdout("HTML\n\n*[HTML]: Hyper Text\n*[CSS]: Style\n");
}

#[test]
fn test_format_file_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "## Title ##\n---\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["format", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Formatted"));

    let content = fs::read_to_string(&test_file).unwrap();
    assert_eq!(content, "## Title\n\n***\n");
}

#[test]
fn test_format_check_formatted() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "HTML\n\n*[HTML]: Hyper Text\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["format", "--check", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("File is correctly formatted"));
}

#[test]
fn test_format_check_unformatted() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    let original = "HTML\n\n\n*[HTML]:   Hyper Text\n";
    fs::write(&test_file, original).unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["format", "--check", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Diff in"));

    // --check never writes
    assert_eq!(fs::read_to_string(&test_file).unwrap(), original);
}
