use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{hw, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    hw().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_employee_list() {
    let db_path = setup_test_db("cli_employee_list");
    init_db_with_data(&db_path);

    hw().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("EMP-001").and(contains("Ada")).and(contains("Active")));
}

#[test]
fn test_workday_new_aggregates_timesheets() {
    let db_path = setup_test_db("cli_workday_new");
    init_db_with_data(&db_path);

    hw().args(["--db", &db_path, "workday", "new", "EMP-001", "2025-09-01"])
        .assert()
        .success()
        .stdout(
            contains("2 timesheet(s)")
                .and(contains("total_work_seconds"))
                .and(contains("9h"))
                .and(contains("WD-00001")),
        );
}

#[test]
fn test_workday_new_on_holiday() {
    let db_path = setup_test_db("cli_workday_holiday");
    init_db_with_data(&db_path);

    hw().args(["--db", &db_path, "holiday", "add", "EMP-001", "2025-09-01"])
        .assert()
        .success();

    hw().args([
        "--db", &db_path, "workday", "new", "EMP-001", "2025-09-01", "--dry-run",
    ])
    .assert()
    .success()
    .stdout(contains("Given Date is Holiday").and(contains("not saved")));
}

#[test]
fn test_workday_new_wrong_attendance_fails() {
    let db_path = setup_test_db("cli_workday_attendance");
    init_db_with_data(&db_path);

    hw().args([
        "--db", &db_path, "workday", "new", "EMP-001", "2025-09-01", "--attendance", "42",
    ])
    .assert()
    .failure()
    .stderr(contains("Attendance 42"));
}

#[test]
fn test_bulk_and_unmarked() {
    let db_path = setup_test_db("cli_bulk");
    init_db_with_data(&db_path);

    hw().args([
        "--db",
        &db_path,
        "workday",
        "bulk",
        "EMP-001",
        "--days",
        "2025-09-01,2025-09-02",
    ])
    .assert()
    .success()
    .stdout(contains("1 created, 1 skipped, 0 failed"));

    hw().args([
        "--db",
        &db_path,
        "workday",
        "unmarked",
        "EMP-001",
        "--range",
        "2025-09-01:2025-09-03",
    ])
    .assert()
    .success()
    .stdout(contains("2025-09-02").and(contains("2025-09-03")).and(contains("2 day(s)")));
}

#[test]
fn test_bulk_without_dates_fails() {
    let db_path = setup_test_db("cli_bulk_empty");
    init_db_with_data(&db_path);

    hw().args(["--db", &db_path, "workday", "bulk", "EMP-001"])
        .assert()
        .failure()
        .stderr(contains("Please select a date"));
}

#[test]
fn test_bulk_inactive_employee_fails() {
    let db_path = setup_test_db("cli_bulk_inactive");
    init_db_with_data(&db_path);

    hw().args([
        "--db", &db_path, "employee", "add", "EMP-002", "--name", "Bob", "--inactive",
    ])
    .assert()
    .success();

    hw().args([
        "--db", &db_path, "workday", "bulk", "EMP-002", "--days", "2025-09-01",
    ])
    .assert()
    .failure()
    .stderr(contains("EMP-002 is not active"));
}

#[test]
fn test_report_html_and_plain() {
    let db_path = setup_test_db("cli_report");
    init_db_with_data(&db_path);

    hw().args(["--db", &db_path, "workday", "new", "EMP-001", "2025-09-01"])
        .assert()
        .success();

    hw().args([
        "--db",
        &db_path,
        "report",
        "--month",
        "September",
        "--year",
        "2025",
        "--employee",
        "EMP-001",
        "--style",
        "html",
    ])
    .assert()
    .success()
    .stdout(contains("<table>").and(contains("<span style='color:green'>30m</span>")));

    hw().args([
        "--db",
        &db_path,
        "report",
        "--month",
        "September",
        "--year",
        "2025",
        "--employee",
        "EMP-001",
        "--style",
        "plain",
        "--details",
    ])
    .assert()
    .success()
    .stdout(contains("Monday").and(contains("9h")).and(contains("Exp. break")));
}

#[test]
fn test_report_export_csv_and_json() {
    let db_path = setup_test_db("cli_report_export");
    init_db_with_data(&db_path);

    hw().args(["--db", &db_path, "workday", "new", "EMP-001", "2025-09-01"])
        .assert()
        .success();

    let csv_out = temp_out("cli_report_export", "csv");
    hw().args([
        "--db", &db_path, "report", "--month", "September", "--year", "2025", "--employee",
        "EMP-001", "--format", "csv", "--file", &csv_out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.contains("difference_seconds"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("1800"));

    let json_out = temp_out("cli_report_export", "json");
    hw().args([
        "--db", &db_path, "report", "--month", "sep", "--year", "2025", "--employee", "EMP-001",
        "--format", "json", "--file", &json_out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&json_out).expect("read exported json");
    assert!(content.contains("\"workday\": \"WD-00001\""));
}

#[test]
fn test_invalid_status_and_hours() {
    let db_path = setup_test_db("cli_invalid_input");
    init_db_with_data(&db_path);

    hw().args([
        "--db", &db_path, "attendance", "add", "EMP-001", "2025-09-01", "--status", "sleeping",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid workday status"));

    hw().args([
        "--db", &db_path, "hours", "add", "EMP-001", "--from", "2025-01-01", "--to",
        "2025-12-31", "--day", "Someday:8",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid daily hours"));
}

#[test]
fn test_log_print_and_db_info() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    hw().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("timesheet_add")));

    hw().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Employees").and(contains("up to date")));
}

#[test]
fn test_cancel_removes_workday_from_report() {
    let db_path = setup_test_db("cli_cancel");
    init_db_with_data(&db_path);

    hw().args(["--db", &db_path, "workday", "new", "EMP-001", "2025-09-01"])
        .assert()
        .success();

    hw().args(["--db", &db_path, "workday", "cancel", "WD-00001"])
        .assert()
        .success()
        .stdout(contains("cancelled"));

    hw().args(["--db", &db_path, "workday", "cancel", "WD-00001"])
        .assert()
        .success()
        .stdout(contains("already cancelled"));

    hw().args([
        "--db", &db_path, "report", "--month", "September", "--year", "2025", "--employee",
        "EMP-001",
    ])
    .assert()
    .success()
    .stdout(contains("No workdays"));

    hw().args(["--db", &db_path, "workday", "cancel", "WD-12345"])
        .assert()
        .failure()
        .stderr(contains("Workday not found"));
}
