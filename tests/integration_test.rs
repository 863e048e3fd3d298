//! Integration tests for the `mps7` and `slcsp` binaries.
//!
//! Binary logs are generated into temporary files; CSV fixtures live under
//! `tests/data`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const DEFAULT_USER: u64 = 2456938384156277127;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Get path to a file of the bundled `data/` set
fn sample_data_path(filename: &str) -> String {
    format!("data/{}", filename)
}

fn push_record(bytes: &mut Vec<u8>, tag: u8, user_id: u64, amount: Option<f64>) {
    bytes.push(tag);
    bytes.extend_from_slice(&1_393_108_945u32.to_be_bytes());
    bytes.extend_from_slice(&user_id.to_be_bytes());
    if let Some(amount) = amount {
        bytes.extend_from_slice(&amount.to_be_bytes());
    }
}

/// A small log touching every record type.
fn sample_log() -> Vec<u8> {
    let mut bytes = b"MPS7".to_vec();
    bytes.push(1);
    bytes.extend_from_slice(&6u32.to_be_bytes());
    push_record(&mut bytes, 0x01, DEFAULT_USER, Some(100.5));
    push_record(&mut bytes, 0x00, DEFAULT_USER, Some(40.25));
    push_record(&mut bytes, 0x01, 7, Some(10.0));
    push_record(&mut bytes, 0x02, 7, None);
    push_record(&mut bytes, 0x03, 7, None);
    push_record(&mut bytes, 0x03, DEFAULT_USER, None);
    bytes
}

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_report_for_default_user() {
    let log = write_temp(&sample_log());

    let mut cmd = Command::cargo_bin("mps7").unwrap();
    cmd.arg(log.path()).assert().success().stdout(
        "total credit amount=110.50\n\
         total debit amount=40.25\n\
         autopays started=1\n\
         autopays ended=2\n\
         balance for user 2456938384156277127=60.25\n",
    );
}

#[test]
fn test_report_for_chosen_user() {
    let log = write_temp(&sample_log());

    let mut cmd = Command::cargo_bin("mps7").unwrap();
    cmd.arg(log.path())
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("balance for user 7=10.00"));
}

#[test]
fn test_invalid_user_id() {
    let log = write_temp(&sample_log());

    let mut cmd = Command::cargo_bin("mps7").unwrap();
    cmd.arg(log.path())
        .arg("not-a-number")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid user-id argument"));
}

#[test]
fn test_bad_magic_exits_non_zero() {
    let mut bytes = sample_log();
    bytes[..4].copy_from_slice(b"MPS8");
    let log = write_temp(&bytes);

    let mut cmd = Command::cargo_bin("mps7").unwrap();
    cmd.arg(log.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Bad magic"));
}

#[test]
fn test_truncated_log_prints_no_report() {
    let bytes = sample_log();
    let log = write_temp(&bytes[..bytes.len() - 5]);

    let mut cmd = Command::cargo_bin("mps7").unwrap();
    cmd.arg(log.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Truncated input"));
}

#[test]
fn test_unknown_record_type() {
    let mut bytes = sample_log();
    // First record tag sits right after the 9-byte header.
    bytes[9] = 0x2a;
    let log = write_temp(&bytes);

    let mut cmd = Command::cargo_bin("mps7").unwrap();
    cmd.arg(log.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown record type: 0x2a"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("mps7").unwrap();
    cmd.arg("nonexistent.dat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("mps7").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_slcsp_rates() {
    let mut cmd = Command::cargo_bin("slcsp").unwrap();
    let assert = cmd
        .arg(sample_data_path("zips.csv"))
        .arg(sample_data_path("plans.csv"))
        .arg(sample_data_path("slcsp.csv"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let expected = fs::read_to_string(test_data_path("expected_slcsp.csv")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_slcsp_defaults_to_bundled_data() {
    let mut cmd = Command::cargo_bin("slcsp").unwrap();
    let assert = cmd
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let expected = fs::read_to_string(test_data_path("expected_slcsp.csv")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_slcsp_malformed_plans() {
    let mut cmd = Command::cargo_bin("slcsp").unwrap();
    cmd.arg(sample_data_path("zips.csv"))
        .arg(test_data_path("malformed_plans.csv"))
        .arg(sample_data_path("slcsp.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid row 3"));
}

#[test]
fn test_slcsp_too_few_arguments() {
    let mut cmd = Command::cargo_bin("slcsp").unwrap();
    cmd.arg(sample_data_path("zips.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected 0 or 3 arguments, got 1"))
        .stderr(predicate::str::contains("Usage: slcsp"));
}

#[test]
fn test_slcsp_too_many_arguments() {
    let mut cmd = Command::cargo_bin("slcsp").unwrap();
    cmd.arg(sample_data_path("zips.csv"))
        .arg(sample_data_path("plans.csv"))
        .arg(sample_data_path("slcsp.csv"))
        .arg("extra.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected 0 or 3 arguments, got 4"))
        .stderr(predicate::str::contains("Missing").not());
}
