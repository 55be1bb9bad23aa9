use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use embedgen::commands::{emit_command, generate_command};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn default_run_fails_without_user_programs() {
    let dir = tempdir().unwrap();
    cargo_bin_cmd!("embedgen")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("hello.elf"));
}

#[test]
fn emit_missing_input_exits_non_zero() {
    let dir = tempdir().unwrap();
    cargo_bin_cmd!("embedgen")
        .arg("emit")
        .arg("--input")
        .arg(dir.path().join("missing.bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to embed"));
}

#[test]
fn emit_command_reports_missing_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.bin");
    let err = emit_command(&input, None, None, false, false).unwrap_err();
    assert!(err.to_string().contains("Failed to embed"), "unexpected error: {err}");
    assert!(format!("{err:#}").contains("Failed to read payload"), "unexpected chain: {err:#}");
}

#[test]
fn strict_names_rejects_invalid_identifier() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a.bin");
    fs::write(&input, b"a").unwrap();

    let err = emit_command(&input, Some("2fast".into()), None, false, true).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid identifier `2fast`"), "unexpected: {err:#}");
    assert!(!dir.path().join("a_bin_data.c").exists());
}

#[test]
fn strict_names_applies_to_stdout_mode() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a.bin");
    fs::write(&input, b"a").unwrap();

    let err = emit_command(&input, Some("has space".into()), None, true, true).unwrap_err();
    assert!(err.to_string().contains("Invalid identifier"), "unexpected error: {err}");
}

#[test]
fn generate_errors_on_unsupported_manifest() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("embed.toml");
    fs::write(&manifest, "").unwrap();

    let err = generate_command(Some(manifest), dir.path(), false, false).unwrap_err();
    assert!(err.to_string().contains("Failed to load manifest"), "unexpected error: {err}");
}

#[test]
fn emit_output_conflicts_with_stdout() {
    cargo_bin_cmd!("embedgen")
        .args(["emit", "--input", "a.bin", "--output", "a.c", "--stdout"])
        .assert()
        .failure();
}
