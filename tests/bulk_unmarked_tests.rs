mod common;
use chrono::NaiveDate;
use common::memory_pool;
use hrworkday::core::bulk::bulk_process_workdays;
use hrworkday::core::unmarked::{get_unmarked_days, get_unmarked_range};
use hrworkday::db::employees::{insert_attendance, insert_holiday, upsert_employee};
use hrworkday::db::timesheets::insert_timesheet;
use hrworkday::db::workdays::{cancel_workday, insert_workday, workdays_between};
use hrworkday::db::working_hours::{get_target_hours, insert_weekly_hours};
use hrworkday::errors::AppError;
use hrworkday::models::employee::Employee;
use hrworkday::models::status::{EmployeeStatus, WorkdayStatus};
use hrworkday::models::timesheet_entry::TimesheetEntry;
use hrworkday::models::workday::Workday;
use rusqlite::Connection;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn add_employee(conn: &Connection, id: &str, status: EmployeeStatus, joined: Option<&str>) {
    upsert_employee(
        conn,
        &Employee {
            id: id.into(),
            name: format!("Name of {id}"),
            company: "ACME".into(),
            status,
            date_of_joining: joined.map(d),
            relieving_date: None,
        },
    )
    .unwrap();
}

fn add_week(conn: &Connection, id: &str) {
    let days: Vec<(String, f64)> = [
        ("Monday", 8.0),
        ("Tuesday", 8.0),
        ("Wednesday", 8.0),
        ("Thursday", 8.0),
        ("Friday", 6.0),
    ]
    .iter()
    .map(|(day, h)| (day.to_string(), *h))
    .collect();
    insert_weekly_hours(conn, id, d("2025-01-01"), d("2025-12-31"), &days).unwrap();
}

#[test]
fn test_target_hours_by_weekday() {
    let pool = memory_pool();
    add_week(&pool.conn, "EMP-1");

    assert_eq!(get_target_hours(&pool.conn, "EMP-1", d("2025-09-01")).unwrap(), 8.0); // Monday
    assert_eq!(get_target_hours(&pool.conn, "EMP-1", d("2025-09-05")).unwrap(), 6.0); // Friday
    assert_eq!(get_target_hours(&pool.conn, "EMP-1", d("2025-09-06")).unwrap(), 0.0); // Saturday
    assert_eq!(get_target_hours(&pool.conn, "EMP-1", d("2026-01-05")).unwrap(), 0.0);
    assert_eq!(get_target_hours(&pool.conn, "EMP-2", d("2025-09-01")).unwrap(), 0.0);
}

#[test]
fn test_bulk_creates_workdays_per_date() {
    let pool = memory_pool();
    let conn = &pool.conn;
    add_employee(conn, "EMP-1", EmployeeStatus::Active, None);
    add_week(conn, "EMP-1");

    insert_timesheet(conn, "EMP-1", d("2025-09-01"), d("2025-09-01"), &TimesheetEntry::new(5.0, 0.0, 0.0, 5.0)).unwrap();
    insert_timesheet(conn, "EMP-1", d("2025-09-01"), d("2025-09-02"), &TimesheetEntry::new(3.0, 0.0, 0.0, 3.0)).unwrap();
    insert_attendance(conn, "EMP-1", d("2025-09-02"), WorkdayStatus::HalfDay).unwrap();

    let outcome = bulk_process_workdays(
        conn,
        "EMP-1",
        &[d("2025-09-01"), d("2025-09-02"), d("2025-09-03")],
    )
    .unwrap();

    assert_eq!(outcome.created.len(), 2);
    assert_eq!(outcome.skipped, vec![d("2025-09-03")]);
    assert!(outcome.failed.is_empty());

    let monday = &outcome.created[0];
    assert_eq!(monday.name, "WD-00001");
    assert_eq!(monday.hours_worked, 8.0);
    assert_eq!(monday.total_work_seconds, 28800.0);
    assert_eq!(monday.target_hours, 8.0);
    assert_eq!(monday.total_target_seconds, 28800.0);
    assert_eq!(monday.status, WorkdayStatus::Present);

    let tuesday = &outcome.created[1];
    assert_eq!(tuesday.status, WorkdayStatus::HalfDay);
    assert_eq!(tuesday.hours_worked, 3.0);
    assert_eq!(tuesday.target_hours, 4.0);
    assert_eq!(tuesday.total_target_seconds, 14400.0);
    assert!(tuesday.attendance.is_some());

    let stored = workdays_between(conn, "EMP-1", d("2025-09-01"), d("2025-09-30")).unwrap();
    assert_eq!(stored.len(), 2);
}

#[test]
fn test_bulk_on_leave_has_no_target() {
    let pool = memory_pool();
    let conn = &pool.conn;
    add_employee(conn, "EMP-1", EmployeeStatus::Active, None);
    add_week(conn, "EMP-1");
    insert_timesheet(conn, "EMP-1", d("2025-09-03"), d("2025-09-03"), &TimesheetEntry::new(1.0, 0.0, 0.0, 1.0)).unwrap();
    insert_attendance(conn, "EMP-1", d("2025-09-03"), WorkdayStatus::OnLeave).unwrap();

    let outcome = bulk_process_workdays(conn, "EMP-1", &[d("2025-09-03")]).unwrap();
    let wd = &outcome.created[0];
    assert_eq!(wd.status, WorkdayStatus::OnLeave);
    assert_eq!(wd.target_hours, 0.0);
    assert_eq!(wd.total_target_seconds, 0.0);
}

#[test]
fn test_bulk_rejects_inactive_unknown_and_empty() {
    let pool = memory_pool();
    let conn = &pool.conn;
    add_employee(conn, "EMP-1", EmployeeStatus::Active, None);
    add_employee(conn, "EMP-2", EmployeeStatus::Left, None);

    let err = bulk_process_workdays(conn, "EMP-2", &[d("2025-09-01")]).unwrap_err();
    assert!(matches!(err, AppError::InactiveEmployee(_)));
    assert_eq!(err.to_string(), "EMP-2 is not active");

    let err = bulk_process_workdays(conn, "EMP-9", &[d("2025-09-01")]).unwrap_err();
    assert!(matches!(err, AppError::EmployeeNotFound(_)));

    let err = bulk_process_workdays(conn, "EMP-1", &[]).unwrap_err();
    assert!(matches!(err, AppError::NoDatesSelected));
    assert_eq!(err.to_string(), "Please select a date");
}

#[test]
fn test_unmarked_range_skips_existing_workdays() {
    let pool = memory_pool();
    let conn = &pool.conn;

    let mut wd = Workday::new("EMP-1", d("2025-09-02"), "ACME");
    insert_workday(conn, &mut wd).unwrap();

    let days = get_unmarked_range(conn, "EMP-1", d("2025-09-01"), d("2025-09-03")).unwrap();
    assert_eq!(days, vec![d("2025-09-01"), d("2025-09-03")]);

    // a cancelled workday no longer marks its date
    cancel_workday(conn, &wd.name).unwrap();
    let days = get_unmarked_range(conn, "EMP-1", d("2025-09-01"), d("2025-09-03")).unwrap();
    assert_eq!(days.len(), 3);
}

#[test]
fn test_unmarked_days_of_month() {
    let pool = memory_pool();
    let conn = &pool.conn;
    add_employee(conn, "EMP-1", EmployeeStatus::Active, Some("2025-09-10"));

    let mut wd = Workday::new("EMP-1", d("2025-09-11"), "ACME");
    insert_workday(conn, &mut wd).unwrap();
    insert_holiday(conn, "EMP-1", d("2025-09-12"), "Local holiday").unwrap();

    let today = d("2025-09-15");

    let days = get_unmarked_days(conn, "EMP-1", 9, 2025, false, today).unwrap();
    assert_eq!(
        days,
        vec![d("2025-09-10"), d("2025-09-12"), d("2025-09-13"), d("2025-09-14")]
    );

    let days = get_unmarked_days(conn, "EMP-1", 9, 2025, true, today).unwrap();
    assert_eq!(days, vec![d("2025-09-10"), d("2025-09-13"), d("2025-09-14")]);

    // a month entirely in the future has nothing to mark yet
    let days = get_unmarked_days(conn, "EMP-1", 10, 2025, false, today).unwrap();
    assert!(days.is_empty());
}

#[test]
fn test_cancel_unknown_workday() {
    let pool = memory_pool();
    let err = cancel_workday(&pool.conn, "WD-99999").unwrap_err();
    assert!(matches!(err, AppError::WorkdayNotFound(_)));
}
