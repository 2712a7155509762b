use std::fs;

use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn floor_finder_output_right_answer() {
    let mut cmd = Command::cargo_bin("floor-finder").unwrap();
    cmd.arg("tests/inputs/floor_up.txt");

    cmd.assert()
        .code(0)
        .stdout(str::contains("Execution successful"))
        .stdout(str::contains("Final Floor: 1"))
        .stdout(str::contains("First basement direction position: 0"))
        .stderr(str::is_empty());
}

#[test]
fn floor_finder_finds_first_basement_position() {
    let mut cmd = Command::cargo_bin("floor-finder").unwrap();
    cmd.arg("tests/inputs/floor_basement.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Final Floor: 3"))
        .stdout(str::contains("First basement direction position: 1"));
}

#[test]
fn floor_finder_accepts_empty_file() {
    let mut cmd = Command::cargo_bin("floor-finder").unwrap();
    cmd.arg("tests/inputs/empty.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Final Floor: 0"))
        .stdout(str::contains("First basement direction position: 0"));
}

#[test]
fn floor_finder_accepts_crlf_ending() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("directions.txt");
    fs::write(&path, ")\r\n").unwrap();

    let mut cmd = Command::cargo_bin("floor-finder").unwrap();
    cmd.arg(&path);

    cmd.assert()
        .success()
        .stdout(str::contains("Final Floor: -1"))
        .stdout(str::contains("First basement direction position: 1"));
}

#[test]
fn floor_finder_rejects_invalid_characters() {
    let mut cmd = Command::cargo_bin("floor-finder").unwrap();
    cmd.arg("tests/inputs/floor_invalid.txt");

    cmd.assert()
        .code(4)
        .stdout(str::is_empty())
        .stderr(str::contains("Execution failed"))
        .stderr(str::contains("Malformed directions sequence"))
        .stderr(str::contains("invalid characters"));
}

#[test]
fn floor_finder_reports_missing_file() {
    let mut cmd = Command::cargo_bin("floor-finder").unwrap();
    cmd.arg("tests/inputs/no_such_file.txt");

    cmd.assert()
        .code(3)
        .stderr(str::contains("Could not read input file"))
        .stderr(str::contains("does not exist"));
}

#[test]
fn floor_finder_reports_directory() {
    let mut cmd = Command::cargo_bin("floor-finder").unwrap();
    cmd.arg("tests/inputs");

    cmd.assert()
        .code(3)
        .stderr(str::contains("is not a file"));
}

#[test]
fn floor_finder_reports_bad_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("directions.txt");
    fs::write(&path, b"(\xff)").unwrap();

    let mut cmd = Command::cargo_bin("floor-finder").unwrap();
    cmd.arg(&path);

    cmd.assert()
        .code(3)
        .stderr(str::contains("is not UTF-8 encoded"));
}

#[test]
fn floor_finder_requires_file_argument() {
    let mut cmd = Command::cargo_bin("floor-finder").unwrap();

    cmd.assert()
        .failure()
        .stderr(str::contains("Usage"));
}

#[test]
fn floor_finder_logs_when_asked() {
    let mut cmd = Command::cargo_bin("floor-finder").unwrap();
    cmd.arg("--log").arg("tests/inputs/floor_up.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Final Floor: 1"))
        .stderr(str::contains("validated directions sequence"));
}
