#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hrworkday::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hw() -> Command {
    cargo_bin_cmd!("hrworkday")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrworkday.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh in-memory database with every migration applied.
pub fn memory_pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

/// Initialize DB and add one active employee with a Mon-Fri 8h schedule and
/// two timesheets on 2025-09-01 (Monday).
pub fn init_db_with_data(db_path: &str) {
    hw().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    hw().args([
        "--db", db_path, "employee", "add", "EMP-001", "--name", "Ada", "--company", "ACME",
        "--joined", "2025-01-01",
    ])
    .assert()
    .success();

    hw().args([
        "--db",
        db_path,
        "hours",
        "add",
        "EMP-001",
        "--from",
        "2025-01-01",
        "--to",
        "2025-12-31",
        "--day",
        "Monday:8",
        "--day",
        "Tuesday:8",
        "--day",
        "Wednesday:8",
        "--day",
        "Thursday:8",
        "--day",
        "Friday:6",
    ])
    .assert()
    .success();

    hw().args([
        "--db", db_path, "timesheet", "add", "EMP-001", "2025-09-01", "--total", "5", "--break",
        "0.5", "--target", "4",
    ])
    .assert()
    .success();

    hw().args([
        "--db", db_path, "timesheet", "add", "EMP-001", "2025-09-01", "--total", "4", "--target",
        "4",
    ])
    .assert()
    .success();
}
