//! Integration tests for the `roster` CLI.
//!
//! Each test writes a temp data file, runs `roster` as a subprocess, and
//! verifies stdout and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `roster` binary.
fn roster_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("roster");
    path
}

fn write_test_data(dir: &Path) -> PathBuf {
    let path = dir.join("people.json");
    fs::write(
        &path,
        r#"[
  {"id": "1", "first": "Amelia", "last": "Hartley", "dob": "1987-04-12",
   "gender": "Female", "country": "England", "description": "An actress",
   "picture": "https://example.com/a.jpg"},
  {"id": "2", "first": "Brian", "last": "Cole", "dob": "1979-11-03",
   "gender": "Male", "country": "Ireland", "description": "A musician",
   "picture": "https://example.com/b.jpg"},
  {"id": "3", "first": "Cleo", "last": "Mensah",
   "gender": "Female", "country": "Ghana", "description": "A swimmer",
   "picture": "https://example.com/c.jpg"}
]"#,
    )
    .unwrap();
    path
}

fn run_roster(args: &[&str]) -> std::process::Output {
    Command::new(roster_bin())
        .args(args)
        .output()
        .expect("failed to run roster")
}

#[test]
fn list_prints_every_record() {
    let tmp = TempDir::new().unwrap();
    let data = write_test_data(tmp.path());

    let out = run_roster(&["list", "--data", data.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Amelia Hartley"));
    assert!(stdout.contains("Brian Cole"));
    assert!(stdout.contains("Cleo Mensah"));
}

#[test]
fn list_json_is_parseable_and_complete() {
    let tmp = TempDir::new().unwrap();
    let data = write_test_data(tmp.path());

    let out = run_roster(&["list", "--data", data.to_str().unwrap(), "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["first"], "Amelia");
    // Missing dob: age is omitted, not null
    assert!(records[2].get("age").is_none());
}

#[test]
fn search_filters_on_first_name_case_insensitively() {
    let tmp = TempDir::new().unwrap();
    let data = write_test_data(tmp.path());

    let out = run_roster(&["search", "LE", "--data", data.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    // "le" matches Amelia and Cleo, not Brian
    assert!(stdout.contains("Amelia"));
    assert!(stdout.contains("Cleo"));
    assert!(!stdout.contains("Brian"));
}

#[test]
fn search_matches_first_name_only() {
    let tmp = TempDir::new().unwrap();
    let data = write_test_data(tmp.path());

    // "cole" is a last name; no first name contains it
    let out = run_roster(&["search", "cole", "--data", data.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.trim().is_empty());
}

#[test]
fn show_prints_detail_for_one_record() {
    let tmp = TempDir::new().unwrap();
    let data = write_test_data(tmp.path());

    let out = run_roster(&["show", "2", "--data", data.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Brian Cole"));
    assert!(stdout.contains("Ireland"));
    assert!(stdout.contains("A musician"));
}

#[test]
fn show_unknown_id_fails() {
    let tmp = TempDir::new().unwrap();
    let data = write_test_data(tmp.path());

    let out = run_roster(&["show", "99", "--data", data.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("no record with id"));
}

#[test]
fn unreadable_data_file_fails() {
    let out = run_roster(&["list", "--data", "/nonexistent/people.json"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("error:"));
}

#[test]
fn editable_age_policy_reads_stored_age() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("people.json");
    fs::write(
        &data,
        r#"[{"id": "1", "first": "Ada", "last": "Byron", "age": 36,
            "gender": "Female", "country": "England",
            "description": "", "picture": ""}]"#,
    )
    .unwrap();
    let config = tmp.path().join("roster.toml");
    fs::write(&config, "age_field = \"editable\"\n").unwrap();

    let out = run_roster(&[
        "show",
        "1",
        "--data",
        data.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--json",
    ]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["age"], 36);
}

#[test]
fn bundled_data_used_without_data_flag() {
    let out = run_roster(&["list", "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(!json.as_array().unwrap().is_empty());
}
