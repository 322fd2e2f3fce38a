use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CHECKLIST: &str = r#"{
    "items": [
        {"id": 1, "checkpoint": "Cabinet door seal", "resulttype": "YesNo"},
        {"id": 2, "checkpoint": "Input voltage", "resulttype": "NumericEntry",
         "startVoltage": 210, "endVoltage": "240"},
        {"id": 3, "checkpoint": "Fan rotation", "resulttype": "OkNotOk"}
    ]
}"#;

/// Helper function to create a templates directory with one checklist
fn create_cli_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("ups-install.json");
    fs::write(&path, CHECKLIST).expect("Failed to write checklist");
    (temp_dir, path)
}

/// Helper function to create a Command with --no-color flag for testing
fn cw_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cw").expect("Failed to find cw binary");
    cmd.arg("--no-color")
        .arg("--templates-dir")
        .arg(temp_dir.path());
    cmd
}

const FULL_RUN: &str = "serial MM-100
due 2026-12-31
next
no
next
remark Seal torn at hinge
next
reading 230
next
ok
next
note Replace seal on next visit
finish
";

#[test]
fn test_cli_run_to_finish() {
    let (temp_dir, path) = create_cli_test_environment();

    let assert = cw_cmd(&temp_dir)
        .args(["run", path.to_str().unwrap()])
        .write_stdin(FULL_RUN)
        .assert()
        .success()
        .stderr(predicate::str::contains("# Equipment Info"))
        .stderr(predicate::str::contains("# Question 1 of 3 (33%)"))
        .stderr(predicate::str::contains(
            "Error: Remark required for 'Cabinet door seal' when the result is No",
        ))
        .stderr(predicate::str::contains("# Final Review"))
        .stderr(predicate::str::contains("Success: Checklist completed"));

    // Stdout carries the finished checklist and nothing else
    let json: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("Stdout is not JSON");
    assert_eq!(
        json["items"][1]["remark"],
        "Measured: 230V (Range: 210V - 240V)"
    );
    assert_eq!(json["items"][0]["equipmentUsedSerial"], "MM-100");
    assert_eq!(json["items"][0]["remark"], "Seal torn at hinge");
    assert_eq!(json["items"][2]["result"], "OK");
    assert_eq!(json["globalRemark"], "Replace seal on next visit");
}

#[test]
fn test_cli_run_template_with_output_file() {
    let (temp_dir, _) = create_cli_test_environment();
    let output = temp_dir.path().join("finished.json");

    cw_cmd(&temp_dir)
        .args([
            "run",
            "ups-install",
            "--serial",
            "MM-100",
            "--calibration-date",
            "2026-12-31",
            "--output",
            output.to_str().unwrap(),
        ])
        .write_stdin("next\nyes\nnext\n229.5\nnext\nok\nnext\nfinish\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checklist saved to"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("Failed to read output"))
            .expect("Output is not JSON");
    assert_eq!(json["items"][0]["calibrationDueDate"], "2026-12-31");
    assert_eq!(json["items"][1]["result"], "Pass");
    assert_eq!(json["items"][2]["result"], "OK");
    assert!(json["completedAt"].is_string());
}

#[test]
fn test_cli_run_cancel() {
    let (temp_dir, path) = create_cli_test_environment();

    cw_cmd(&temp_dir)
        .args(["run", path.to_str().unwrap()])
        .write_stdin("serial MM-100\ncancel\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Checklist cancelled."))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_run_end_of_input_cancels() {
    let (temp_dir, path) = create_cli_test_environment();

    cw_cmd(&temp_dir)
        .args(["run", path.to_str().unwrap()])
        .write_stdin("next\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Error: Enter the serial number of the equipment used",
        ))
        .stderr(predicate::str::contains("Checklist cancelled."));
}

#[test]
fn test_cli_run_unknown_command() {
    let (temp_dir, path) = create_cli_test_environment();

    cw_cmd(&temp_dir)
        .args(["run", path.to_str().unwrap()])
        .write_stdin("maybe\ncancel\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: Unknown command: maybe"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_run_missing_template() {
    let (temp_dir, _) = create_cli_test_environment();

    cw_cmd(&temp_dir)
        .args(["run", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Checklist template 'missing' not found"));
}

#[test]
fn test_cli_evaluate_pass_and_fail() {
    let (temp_dir, _) = create_cli_test_environment();

    cw_cmd(&temp_dir)
        .args(["evaluate", "10", "--start", "10", "--end", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Pass"))
        .stdout(predicate::str::contains("Measured: 10V (Range: 10V - 20V)"));

    cw_cmd(&temp_dir)
        .args(["evaluate", "-3.5", "--start", "10", "--end", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Failed"))
        .stdout(predicate::str::contains("Measured: -3.5V (Range: 10V - 20V)"));
}

#[test]
fn test_cli_evaluate_invalid_range() {
    let (temp_dir, _) = create_cli_test_environment();

    cw_cmd(&temp_dir)
        .args(["evaluate", "15", "--start", "", "--end", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("voltage range missing/invalid"));
}

#[test]
fn test_cli_show_checklist() {
    let (temp_dir, _) = create_cli_test_environment();

    cw_cmd(&temp_dir)
        .args(["show", "ups-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Cabinet door seal (YesNo)"))
        .stdout(predicate::str::contains("- Range: 210V - 240V"));
}

#[test]
fn test_cli_list_templates() {
    let (temp_dir, _) = create_cli_test_environment();

    cw_cmd(&temp_dir)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("- ups-install"));

    let empty = TempDir::new().expect("Failed to create temporary directory");
    cw_cmd(&empty)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("No checklist templates found."));
}

#[test]
fn test_cli_schema() {
    let (temp_dir, _) = create_cli_test_environment();

    cw_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("ChecklistInput"))
        .stdout(predicate::str::contains("calibrationDueDate"));
}
