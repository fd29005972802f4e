mod common;
use chrono::NaiveDate;
use common::memory_pool;
use hrworkday::core::client::{AttendanceClient, HolidayClient, TimesheetClient};
use hrworkday::core::form::{FieldChange, FormNotice, WorkdayForm};
use hrworkday::db::client::SqliteClient;
use hrworkday::db::employees::{insert_attendance, insert_holiday};
use hrworkday::db::timesheets::insert_timesheet;
use hrworkday::errors::{AppError, AppResult};
use hrworkday::models::employee::Attendance;
use hrworkday::models::status::WorkdayStatus;
use hrworkday::models::timesheet_entry::TimesheetEntry;
use hrworkday::models::workday::Workday;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// In-memory stand-in for the data layer.
#[derive(Default)]
struct MockClient {
    entries: Vec<TimesheetEntry>,
    holidays: Vec<NaiveDate>,
    attendance: Vec<Attendance>,
}

impl TimesheetClient for MockClient {
    fn fetch_timesheet_details(&self, _: &str, _: NaiveDate) -> AppResult<Vec<TimesheetEntry>> {
        Ok(self.entries.clone())
    }
}

impl HolidayClient for MockClient {
    fn date_is_in_holiday_list(&self, _: &str, date: NaiveDate) -> AppResult<bool> {
        Ok(self.holidays.contains(&date))
    }
}

impl AttendanceClient for MockClient {
    fn attendance_query(&self, employee: &str, date: NaiveDate) -> AppResult<Vec<Attendance>> {
        Ok(self
            .attendance
            .iter()
            .filter(|a| a.employee == employee && a.attendance_date == date)
            .cloned()
            .collect())
    }
}

fn blank() -> Workday {
    Workday {
        first_checkin: "2025-09-01 08:00:00".into(),
        last_checkout: "2025-09-01 17:00:00".into(),
        ..Workday::default()
    }
}

#[test]
fn test_log_date_aggregates_timesheets() {
    let client = MockClient {
        entries: vec![
            TimesheetEntry::new(5.0, 0.5, 4.0, 4.5),
            TimesheetEntry::new(4.0, 0.0, 4.0, 4.0),
        ],
        ..MockClient::default()
    };

    let mut form = WorkdayForm::new(&client, blank());
    assert!(form.update(FieldChange::Employee("EMP-1".into())).unwrap().is_empty());

    let notices = form.update(FieldChange::LogDate(d("2025-09-01"))).unwrap();
    assert_eq!(notices, vec![FormNotice::HoursUpdated(2)]);

    let doc = form.doc();
    assert_eq!(doc.hours_worked, 9.0);
    assert_eq!(doc.total_work_seconds, 32400.0);
    assert_eq!(doc.target_hours, 8.0);
    assert_eq!(doc.actual_working_hours, 8.5);
    // untouched by a non-empty aggregation
    assert_eq!(doc.first_checkin, "2025-09-01 08:00:00");
}

#[test]
fn test_log_date_without_employee_does_nothing() {
    let client = MockClient {
        entries: vec![TimesheetEntry::new(8.0, 0.0, 8.0, 8.0)],
        ..MockClient::default()
    };

    let mut form = WorkdayForm::new(&client, blank());
    let notices = form.update(FieldChange::LogDate(d("2025-09-01"))).unwrap();

    assert!(notices.is_empty());
    assert_eq!(form.doc().hours_worked, 0.0);
}

#[test]
fn test_holiday_clears_fields() {
    let client = MockClient {
        entries: vec![TimesheetEntry::new(8.0, 0.0, 8.0, 8.0)],
        holidays: vec![d("2025-12-25")],
        ..MockClient::default()
    };

    let mut form = WorkdayForm::new(&client, blank());
    form.update(FieldChange::Employee("EMP-1".into())).unwrap();
    form.update(FieldChange::LogDate(d("2025-12-24"))).unwrap();
    assert_eq!(form.doc().hours_worked, 8.0);

    let notices = form.update(FieldChange::LogDate(d("2025-12-25"))).unwrap();
    assert_eq!(notices, vec![FormNotice::Holiday(d("2025-12-25"))]);
    assert_eq!(notices[0].to_string(), "Given Date is Holiday");

    let doc = form.doc();
    assert_eq!(doc.hours_worked, 0.0);
    assert_eq!(doc.total_target_seconds, 0.0);
    assert_eq!(doc.first_checkin, "");
    assert_eq!(doc.last_checkout, "");
}

#[test]
fn test_no_timesheets_unsets_fields() {
    let client = MockClient::default();

    let mut doc = blank();
    doc.hours_worked = 3.0;
    let mut form = WorkdayForm::new(&client, doc);
    form.update(FieldChange::Employee("EMP-1".into())).unwrap();

    let notices = form.update(FieldChange::LogDate(d("2025-09-02"))).unwrap();
    assert_eq!(notices, vec![FormNotice::NoTimesheets(d("2025-09-02"))]);
    assert_eq!(form.doc().hours_worked, 0.0);
    assert_eq!(form.doc().first_checkin, "");
}

#[test]
fn test_on_leave_resets_target_and_work() {
    let client = MockClient {
        entries: vec![TimesheetEntry::new(8.0, 1.0, 8.0, 7.0)],
        ..MockClient::default()
    };

    let mut form = WorkdayForm::new(&client, blank());
    form.update(FieldChange::Employee("EMP-1".into())).unwrap();
    form.update(FieldChange::LogDate(d("2025-09-01"))).unwrap();

    let notices = form
        .update(FieldChange::Status(WorkdayStatus::OnLeave))
        .unwrap();
    assert_eq!(notices, vec![FormNotice::LeaveApplied]);

    let doc = form.doc();
    assert_eq!(doc.target_hours, 0.0);
    assert_eq!(doc.expected_break_hours, 0.0);
    assert_eq!(doc.actual_working_hours, 0.0);
    assert_eq!(doc.total_target_seconds, 0.0);
    assert_eq!(doc.total_break_seconds, 0.0);
    assert_eq!(doc.total_work_seconds, 0.0);
    // not part of the leave reset
    assert_eq!(doc.hours_worked, 8.0);
    assert_eq!(doc.break_hours, 1.0);
}

#[test]
fn test_other_status_leaves_values() {
    let client = MockClient {
        entries: vec![TimesheetEntry::new(8.0, 1.0, 8.0, 7.0)],
        ..MockClient::default()
    };

    let mut form = WorkdayForm::new(&client, blank());
    form.update(FieldChange::Employee("EMP-1".into())).unwrap();
    form.update(FieldChange::LogDate(d("2025-09-01"))).unwrap();

    let notices = form
        .update(FieldChange::Status(WorkdayStatus::HalfDay))
        .unwrap();
    assert!(notices.is_empty());
    assert_eq!(form.doc().total_work_seconds, 28800.0);
}

#[test]
fn test_attendance_must_match_employee_and_date() {
    let client = MockClient {
        entries: vec![TimesheetEntry::new(8.0, 0.0, 8.0, 8.0)],
        attendance: vec![Attendance {
            id: 7,
            employee: "EMP-1".into(),
            attendance_date: d("2025-09-01"),
            status: WorkdayStatus::Present,
        }],
        ..MockClient::default()
    };

    let mut form = WorkdayForm::new(&client, blank());
    form.update(FieldChange::Employee("EMP-1".into())).unwrap();
    form.update(FieldChange::LogDate(d("2025-09-01"))).unwrap();

    let ok = form.update(FieldChange::Attendance(Some(7))).unwrap();
    assert_eq!(ok, vec![FormNotice::HoursUpdated(1)]);
    assert_eq!(form.doc().attendance, Some(7));

    let err = form.update(FieldChange::Attendance(Some(99))).unwrap_err();
    assert!(matches!(err, AppError::AttendanceMismatch(99, _, _)));
    assert_eq!(form.doc().attendance, Some(7));
}

#[test]
fn test_form_with_sqlite_client() {
    let pool = memory_pool();
    let conn = &pool.conn;

    insert_timesheet(
        conn,
        "EMP-1",
        d("2025-09-01"),
        d("2025-09-05"),
        &TimesheetEntry::new(40.0, 2.5, 40.0, 37.5),
    )
    .unwrap();
    insert_timesheet(
        conn,
        "EMP-2",
        d("2025-09-03"),
        d("2025-09-03"),
        &TimesheetEntry::new(1.0, 0.0, 1.0, 1.0),
    )
    .unwrap();
    insert_holiday(conn, "EMP-1", d("2025-09-04"), "Festival").unwrap();
    let att = insert_attendance(conn, "EMP-1", d("2025-09-03"), WorkdayStatus::Present).unwrap();

    let client = SqliteClient::new(conn);
    let mut form = WorkdayForm::new(&client, blank());
    form.update(FieldChange::Employee("EMP-1".into())).unwrap();

    // only EMP-1's timesheet covers the date
    form.update(FieldChange::LogDate(d("2025-09-03"))).unwrap();
    assert_eq!(form.doc().hours_worked, 40.0);
    assert_eq!(form.doc().total_break_seconds, 9000.0);

    form.update(FieldChange::Attendance(Some(att))).unwrap();
    assert_eq!(form.doc().attendance, Some(att));

    let notices = form.update(FieldChange::LogDate(d("2025-09-04"))).unwrap();
    assert_eq!(notices, vec![FormNotice::Holiday(d("2025-09-04"))]);
    assert_eq!(form.doc().hours_worked, 0.0);
}
