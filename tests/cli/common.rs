//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help() {
    cargo_bin_cmd!("mdabbr")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdabbr parses Markdown documents"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("mdabbr")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("mdabbr")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("mdabbr")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_file() {
    cargo_bin_cmd!("mdabbr")
        .args(["html", "does-not-exist.md"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.toml");
    fs::write(&config, "extensions = 3\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["--config", config.to_str().unwrap(), "html"])
        .write_stdin("text\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_config_discovered_next_to_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".mdabbr.toml"),
        "[extensions]\nabbreviations = false\n",
    )
    .unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "HTML\n\n*[HTML]: Hyper Text Markup Language\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["html", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<abbr").not())
        .stdout(predicate::str::contains("<p>*[HTML]: Hyper Text Markup Language</p>"));
}
