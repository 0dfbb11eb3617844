use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const BIN: &str = "normalize_loadfile";

fn fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn normalizes_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = fixture(&dir, "dwarf.red", include_str!("inputs/dwarf.red"));

    Command::cargo_bin(BIN)?
        .arg(&path)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path)?, include_str!("inputs/dwarf_expected.red"));
    Ok(())
}

#[test]
fn missing_file_is_reported_and_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("missing.red");
    let present = fixture(&dir, "stone.red", include_str!("inputs/stone.red"));

    Command::cargo_bin(BIN)?
        .arg(&missing)
        .arg(&present)
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("Error, file does not exist: {}", missing.display())));

    assert_eq!(fs::read_to_string(&present)?, include_str!("inputs/stone_expected.red"));
    Ok(())
}

#[test]
fn malformed_line_aborts_and_leaves_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = fixture(&dir, "bad.red", "DAT #0, #0\nORG\n");

    Command::cargo_bin(BIN)?
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ORG directive without a value"));

    assert_eq!(fs::read_to_string(&path)?, "DAT #0, #0\nORG\n");
    Ok(())
}

#[test]
fn check_fails_on_unnormalized_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = fixture(&dir, "imp.red", "MOV.I $0, $1\n");

    Command::cargo_bin(BIN)?
        .arg("--check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("imp.red"));

    assert_eq!(fs::read_to_string(&path)?, "MOV.I $0, $1\n");
    Ok(())
}

#[test]
fn check_passes_on_normalized_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = fixture(&dir, "dwarf.red", include_str!("inputs/dwarf_expected.red"));

    Command::cargo_bin(BIN)?
        .arg("--check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn stdout_with_custom_core_size() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = fixture(&dir, "imp.red", "MOV.I $0, $-1\n");

    Command::cargo_bin(BIN)?
        .arg("--stdout")
        .arg("--core-size").arg("55440")
        .arg(&path)
        .assert()
        .success()
        .stdout("ORG     0\nMOV.I   $0,     $55439\n");
    Ok(())
}

#[test]
fn no_canonicalize_keeps_operands() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = fixture(&dir, "imp.red", "MOV.I $0, $-1\n");

    Command::cargo_bin(BIN)?
        .arg("--stdout")
        .arg("--no-canonicalize")
        .arg(&path)
        .assert()
        .success()
        .stdout("ORG     0\nMOV.I   $0,     $-1\n");
    Ok(())
}

#[test]
fn zero_core_size_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(BIN)?
        .arg("--core-size").arg("0")
        .arg("whatever.red")
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
    Ok(())
}
