//! Black-box smoke tests for the `jsonfix` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn well_formed_file_exits_success_and_prints_tree() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"a": 1, "b": 2}}"#).unwrap();

    Command::cargo_bin("jsonfix")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 1"));
}

#[test]
fn malformed_input_exits_nonzero_and_reports_diagnostics_on_stderr() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"name":"John","age":30,"addr"#).unwrap();

    Command::cargo_bin("jsonfix")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("[pos "));
}

#[test]
fn strict_mode_fails_fast_on_alien_token() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"x": True}}"#).unwrap();

    Command::cargo_bin("jsonfix")
        .unwrap()
        .arg(file.path())
        .arg("--strict")
        .arg("--no-python-tokens")
        .assert()
        .failure();
}

#[test]
fn compact_flag_emits_single_line_output() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"a": 1}}"#).unwrap();

    let output = Command::cargo_bin("jsonfix")
        .unwrap()
        .arg(file.path())
        .arg("--compact")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
}

#[test]
fn sort_keys_flag_reorders_object_output() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"z": 1, "a": 2}}"#).unwrap();

    let output = Command::cargo_bin("jsonfix")
        .unwrap()
        .arg(file.path())
        .arg("--compact")
        .arg("--sort-keys")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().starts_with(r#"{"a":2,"z":1}"#));
}

#[test]
fn missing_file_reports_an_error() {
    Command::cargo_bin("jsonfix")
        .unwrap()
        .arg("/nonexistent/path/does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("jsonfix:"));
}
