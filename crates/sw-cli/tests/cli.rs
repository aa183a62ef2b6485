use assert_cmd::{cargo_bin_cmd, Command};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

const DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/dataset.json");

/// The binary with the demo dataset and a fixed reference date
fn siteworks() -> Command {
    let mut cmd = cargo_bin_cmd!("siteworks");
    cmd.env_remove("RUST_LOG")
        .env_remove("SITEWORKS_DATA_PATH")
        .env_remove("SITEWORKS_TODAY")
        .args(["--data", DATASET, "--today", "2025-09-12"]);
    cmd
}

/// A path inside the system temp dir, removed if it already exists
fn temp_path(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("siteworks_{}_{}", std::process::id(), name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn test_tasks_overdue() {
    siteworks()
        .args(["tasks", "--status", "Overdue"])
        .assert()
        .success()
        .stdout(contains("Showing 1 of 3 tasks"))
        .stdout(contains("Foundation Excavation"))
        .stdout(contains("Electrical Installation").not());
}

#[test]
fn test_tasks_search_matches_worker_names() {
    siteworks()
        .args(["tasks", "--search", "ALI KHAN"])
        .assert()
        .success()
        .stdout(contains("Showing 1 of 3 tasks"))
        .stdout(contains("Foundation Excavation"));
}

#[test]
fn test_tasks_by_role() {
    siteworks()
        .args(["tasks", "--role", "Inspector"])
        .assert()
        .success()
        .stdout(contains("Showing 2 of 3 tasks"))
        .stdout(contains("Plumbing Installation"))
        .stdout(contains("Electrical Installation"));
}

#[test]
fn test_tasks_json() {
    let output = siteworks()
        .args(["--format", "json", "tasks", "--project", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["caption"], "Showing 2 of 3 tasks");
    assert_eq!(value["records"][0]["title"], "Electrical Installation");
    assert_eq!(value["records"][0]["progress"]["percent"], 100);
    assert_eq!(value["summary"]["completed"], 1);
    assert_eq!(value["summary"]["averagePercent"], 50);
}

#[test]
fn test_workers_supervisors() {
    siteworks()
        .args(["workers", "--status", "Supervisors"])
        .assert()
        .success()
        .stdout(contains("Showing 1 of 8 workers"))
        .stdout(contains("Sara Ahmed"));
}

#[test]
fn test_projects_by_status() {
    siteworks()
        .args(["projects", "--status", "at risk"])
        .assert()
        .success()
        .stdout(contains("Showing 1 of 3 projects"))
        .stdout(contains("Residential Tower A"))
        .stdout(contains("42% (21/50 tasks)"));
}

#[test]
fn test_phases_completed() {
    siteworks()
        .args(["phases", "--status", "Completed"])
        .assert()
        .success()
        .stdout(contains("Showing 1 of 3 phases"))
        .stdout(contains("Site Preparation"))
        .stdout(contains("Grade site"));
}

#[test]
fn test_attendance_with_export() {
    let report = temp_path("attendance.csv");

    siteworks()
        .args(["attendance", "--export", report.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Attendance for 2025-09-12"))
        .stdout(contains("6 present (2 late), 1 absent, 1 not recorded"))
        .stdout(contains("attendance rate 86% of 7 active workers"))
        .stdout(contains("Report written to"));

    let csv = fs::read_to_string(&report).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Name,Employee ID,Role,Status,Phone,Email,Experience"));
    assert_eq!(
        lines.next(),
        Some("Ali Khan,#EMP001,Excavator Operator,Present,(555) 201-0001,ali.k@construction.com,6 years")
    );
    assert!(csv.contains("Bilal Ahmed,#EMP007,Plumber,Not Recorded,"));
    fs::remove_file(&report).ok();
}

#[test]
fn test_overview() {
    siteworks()
        .arg("overview")
        .assert()
        .success()
        .stdout(contains("Projects:   3 total, 1 active, 1 at risk"))
        .stdout(contains("Phases:     3 total, 1 completed"));
}

#[test]
fn test_config_file() {
    let config = temp_path("config.toml");
    fs::write(
        &config,
        format!("data_path = \"{}\"\ntoday = \"2025-09-01\"\n", DATASET.replace('\\', "/")),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("siteworks");
    cmd.env_remove("SITEWORKS_DATA_PATH")
        .env_remove("SITEWORKS_TODAY")
        .args(["--config", config.to_str().unwrap(), "tasks", "--status", "overdue"])
        .assert()
        .success()
        .stdout(contains("Showing 0 of 3 tasks"));
    fs::remove_file(&config).ok();
}

#[test]
fn test_missing_dataset() {
    let mut cmd = cargo_bin_cmd!("siteworks");
    cmd.env_remove("SITEWORKS_DATA_PATH")
        .arg("tasks")
        .assert()
        .failure()
        .stderr(contains("no dataset given"));
}

#[test]
fn test_unknown_status() {
    siteworks()
        .args(["tasks", "--status", "Stalled"])
        .assert()
        .failure()
        .stderr(contains("unknown task status"));
}

#[test]
fn test_dataset_with_blank_names_is_rejected() {
    let data = temp_path("blank-names.json");
    fs::write(&data, r#"{"workers": [{"id": 1, "name": ""}]}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("siteworks");
    cmd.env_remove("SITEWORKS_DATA_PATH")
        .args(["--data", data.to_str().unwrap(), "workers"])
        .assert()
        .failure()
        .stderr(contains("failed to load dataset"));
    fs::remove_file(&data).ok();
}
