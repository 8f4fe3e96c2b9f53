//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_parse_cst() {
    cargo_bin_cmd!("mdabbr")
        .arg("parse")
        .write_stdin("*[HTML]: Hyper Text Markup Language\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DOCUMENT@0..36"))
        .stdout(predicate::str::contains("ABBR_DEFINITION@0..35"))
        .stdout(predicate::str::contains("ABBR_DEFINITION_VALUE@9..35"));
}

#[test]
fn test_parse_json() {
    let output = cargo_bin_cmd!("mdabbr")
        .args(["parse", "--json"])
        .write_stdin("HTML\n\n*[HTML]: Hyper Text Markup Language\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["type"], "root");
    assert_eq!(json["children"][0]["children"][0]["type"], "abbr");
    assert_eq!(
        json["children"][0]["children"][0]["title"],
        "Hyper Text Markup Language"
    );
    assert_eq!(json["children"][1]["type"], "abbrDefinition");
    assert_eq!(json["children"][1]["position"]["start"]["line"], 3);
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("mdabbr")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}
