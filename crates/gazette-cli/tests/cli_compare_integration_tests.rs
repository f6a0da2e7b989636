//! CLI integration tests
//!
//! These tests run the `gazette` binary against snapshot files in a
//! temporary directory.

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_json(temp_dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_gazette");
    Command::new(cli_bin)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn setup_snapshots(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
    let base = write_json(
        temp_dir,
        "base.json",
        &json!({
            "gazetteId": "2289/43",
            "ministers": [
                {"number": "01", "name": "Finance", "departments": ["Treasury"]}
            ]
        }),
    );
    let amendment = write_json(
        temp_dir,
        "amendment.json",
        &json!({
            "gazetteId": "2412/08",
            "ministers": [
                {"number": "01", "name": "Finance", "departments": ["Treasury", "Customs"]},
                {"number": "15", "name": "Transport", "departments": ["Roads"]}
            ],
            "rawEntities": [
                {"labels": ["Department"], "properties": {"name": "Irrigation", "added_by": "2412/08", "is_active": true}}
            ]
        }),
    );
    (base, amendment)
}

#[test]
fn test_cli_compare_prints_json_envelope() {
    let temp_dir = TempDir::new().unwrap();
    let (base, amendment) = setup_snapshots(&temp_dir);

    let output = run(&["compare", base.to_str().unwrap(), amendment.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["baseGazetteId"], json!("2289/43"));
    assert_eq!(v["amendmentGazetteId"], json!("2412/08"));
    assert_eq!(v["changes"]["addedMinisters"][0]["name"], json!("Transport"));
    assert_eq!(v["changes"]["modifiedMinisters"][0]["key"], json!("01-Finance"));
    assert_eq!(v["changes"]["addedDepartments"], json!(["Irrigation"]));
}

#[test]
fn test_cli_compare_no_reconcile_skips_raw_entities() {
    let temp_dir = TempDir::new().unwrap();
    let (base, amendment) = setup_snapshots(&temp_dir);

    let output = run(&[
        "compare",
        base.to_str().unwrap(),
        amendment.to_str().unwrap(),
        "--no-reconcile",
    ]);
    assert!(output.status.success());

    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["changes"]["addedDepartments"], json!([]));
}

#[test]
fn test_cli_compare_summary_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let (base, amendment) = setup_snapshots(&temp_dir);
    let out_path = temp_dir.path().join("summary.md");

    let output = run(&[
        "compare",
        base.to_str().unwrap(),
        amendment.to_str().unwrap(),
        "--summary",
        "--output",
        out_path.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary = fs::read_to_string(&out_path).unwrap();
    assert!(summary.starts_with("## Gazette Comparison"));
    assert!(summary.contains("- **15** Transport"));
}

#[test]
fn test_cli_compare_rejects_snapshot_without_ministers() {
    let temp_dir = TempDir::new().unwrap();
    let (base, _) = setup_snapshots(&temp_dir);
    let broken = write_json(&temp_dir, "broken.json", &json!({"gazetteId": "2412/08"}));

    let output = run(&["compare", base.to_str().unwrap(), broken.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("ERR_INVALID_SNAPSHOT"));
}

#[test]
fn test_cli_compare_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let (base, _) = setup_snapshots(&temp_dir);
    let missing = temp_dir.path().join("nope.json");

    let output = run(&["compare", base.to_str().unwrap(), missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_IO"));
}

#[test]
fn test_cli_apply_writes_amended_structure() {
    let temp_dir = TempDir::new().unwrap();
    let (base, _) = setup_snapshots(&temp_dir);
    let changes = write_json(
        &temp_dir,
        "changes.json",
        &json!([
            {"operation_type": "INSERTION", "details": {"name": "Finance", "column_no": "2", "added_content": ["Customs"]}}
        ]),
    );

    let output = run(&[
        "apply",
        base.to_str().unwrap(),
        changes.to_str().unwrap(),
        "--gazette-id",
        "2297/78",
    ]);
    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["gazetteId"], json!("2297/78"));
    assert_eq!(v["ministers"][0]["departments"], json!(["Customs", "Treasury"]));
}

#[test]
fn test_cli_error_carries_request_id() {
    let temp_dir = TempDir::new().unwrap();
    let (base, _) = setup_snapshots(&temp_dir);
    let broken = write_json(&temp_dir, "broken.json", &json!({"ministers": []}));

    let output = run(&[
        "--trace-id",
        "upstream-42",
        "apply",
        broken.to_str().unwrap(),
        base.to_str().unwrap(),
        "--gazette-id",
        "x",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("(field: gazetteId)"));
    assert!(stderr.contains("(request_id: "));
}
