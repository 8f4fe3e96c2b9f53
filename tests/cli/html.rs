//! Html subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_html_stdin() {
    cargo_bin_cmd!("mdabbr")
        .arg("html")
        .write_stdin("I like to use HTML because it is cool\n\n*[HTML]: Hyper Text Markup Language\n")
        .assert()
        .success()
        .stdout(
            "<p>I like to use <abbr title=\"Hyper Text Markup Language\">HTML</abbr> because it is cool</p>\n",
        );
}

#[test]
fn test_html_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "# W3C\n\n*[W3C]: World Wide Web Consortium\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["html", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<h1><abbr title=\"World Wide Web Consortium\">W3C</abbr></h1>\n");
}

#[test]
fn test_html_definition_comments() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "[html]\ndefinitions = \"comment\"\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["--config", config.to_str().unwrap(), "html"])
        .write_stdin("*[A]: alpha\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- *[A]: alpha -->"));
}
