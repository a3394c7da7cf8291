// Integration tests for `tally run` / `tally validate` against config files.
// Run with: cargo test -p tally-cli --test run_tests -- --nocapture

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const EXIT_INVALID_CONFIG: i32 = 3;
const EXIT_SOURCE: i32 = 4;
const EXIT_INVALID_DATA: i32 = 5;

fn tally() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tally"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

/// Workspace with two sources in different shapes.
fn workspace(config_prefix: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.json", r#"[
        {"id": "3", "name": "Ann", "activities": [
            {"hours": 2, "verified": true},
            {"hours": 5, "verified": "No"}
        ]},
        {"id": "abc", "name": "Zed", "activities": []}
    ]"#);
    write(dir.path(), "b.json", r#"[
        {"id": 9, "name": "Lee", "activities": [
            {"time": 4, "verified": "Yes"},
            {"time": 1, "verified": "Pending"}
        ]}
    ]"#);
    write(dir.path(), "drive.tally.toml", &format!(r#"{config_prefix}
name = "Drive"

[[sources]]
name = "b"
file = "b.json"
duration_field = "time"

[[sources]]
name = "a"
file = "a.json"
duration_field = "hours"
"#));
    dir
}

fn run(dir: &TempDir, extra: &[&str]) -> Output {
    let config = dir.path().join("drive.tally.toml");
    tally()
        .arg("run")
        .arg(&config)
        .args(extra)
        .output()
        .expect("tally run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// -------------------------------------------------------------------------
// tally run
// -------------------------------------------------------------------------

#[test]
fn skip_policy_drops_bad_ids() {
    let dir = workspace(r#"invalid_id = "skip""#);
    let output = run(&dir, &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let val = stdout_json(&output);
    assert_eq!(val, serde_json::json!([
        {"id": 9, "name": "Lee", "hours": 4.0},
        {"id": 3, "name": "Ann", "hours": 2.0},
    ]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 volunteer(s) skipped"), "stderr: {stderr}");
}

#[test]
fn bad_id_aborts_by_default() {
    let dir = workspace("");
    let output = run(&dir, &[]);

    assert_eq!(output.status.code(), Some(EXIT_INVALID_DATA));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot parse volunteer id 'abc'"), "stderr: {stderr}");
    assert!(stderr.contains("hint:"), "stderr: {stderr}");
}

#[test]
fn truthy_policy_counts_pending() {
    let dir = workspace("invalid_id = \"skip\"\nunrecognized_verification = \"truthy\"");
    let output = run(&dir, &[]);
    assert!(output.status.success());

    let val = stdout_json(&output);
    assert_eq!(val[0]["hours"].as_f64(), Some(5.0));
}

#[test]
fn output_file_gets_full_report() {
    let dir = workspace(r#"invalid_id = "skip""#);
    let report_path = dir.path().join("report.json");
    let output = run(&dir, &["--output", report_path.to_str().unwrap(), "--quiet"]);
    assert!(output.status.success());
    // Only the skip warning remains on stderr
    assert!(!String::from_utf8_lossy(&output.stderr).contains("wrote"));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["meta"]["config_name"], "Drive");
    assert_eq!(report["meta"]["invalid_id"], "skip");
    assert_eq!(report["skipped"][0]["raw_id"], "abc");
    assert_eq!(report["summary"]["total_hours"].as_f64(), Some(6.0));
}

#[test]
fn missing_source_file() {
    let dir = workspace(r#"invalid_id = "skip""#);
    std::fs::remove_file(dir.path().join("a.json")).unwrap();

    let output = run(&dir, &[]);
    assert_eq!(output.status.code(), Some(EXIT_SOURCE));
    assert!(String::from_utf8_lossy(&output.stderr).contains("a.json"));
}

#[test]
fn malformed_source_json() {
    let dir = workspace(r#"invalid_id = "skip""#);
    write(dir.path(), "b.json", r#"{"not": "a list"}"#);

    let output = run(&dir, &[]);
    assert_eq!(output.status.code(), Some(EXIT_SOURCE));
    assert!(String::from_utf8_lossy(&output.stderr).contains("source 'b'"));
}

#[test]
fn wrong_duration_field() {
    let dir = workspace(r#"invalid_id = "skip""#);
    // b.json records carry `time`; declare `hours` instead
    let config = std::fs::read_to_string(dir.path().join("drive.tally.toml"))
        .unwrap()
        .replacen("duration_field = \"time\"", "duration_field = \"hours\"", 1);
    write(dir.path(), "drive.tally.toml", &config);

    let output = run(&dir, &[]);
    assert_eq!(output.status.code(), Some(EXIT_INVALID_DATA));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no 'hours' field"));
}

// -------------------------------------------------------------------------
// tally validate
// -------------------------------------------------------------------------

#[test]
fn validate_ok() {
    let dir = workspace("");
    let output = tally()
        .arg("validate")
        .arg(dir.path().join("drive.tally.toml"))
        .output()
        .expect("tally validate");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("2 source(s): b, a"));
}

#[test]
fn validate_rejects_duplicate_sources() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "dup.tally.toml", r#"
name = "Dup"

[[sources]]
name = "a"
file = "a.json"

[[sources]]
name = "a"
file = "b.json"
"#);

    let output = tally()
        .arg("validate")
        .arg(dir.path().join("dup.tally.toml"))
        .output()
        .expect("tally validate");

    assert_eq!(output.status.code(), Some(EXIT_INVALID_CONFIG));
    assert!(String::from_utf8_lossy(&output.stderr).contains("duplicate source name 'a'"));
}
