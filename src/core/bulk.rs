//! Bulk creation of workdays from stored timesheets and weekly working hours.

use crate::db::employees::{attendance_for, get_employee};
use crate::db::log::ttlog_or_warn;
use crate::db::timesheets::timesheets_for_date;
use crate::db::workdays::insert_workday;
use crate::db::working_hours::get_target_hours;
use crate::errors::{AppError, AppResult};
use crate::models::status::WorkdayStatus;
use crate::models::workday::Workday;
use crate::models::workday_summary::SECONDS_PER_HOUR;
use chrono::NaiveDate;
use rusqlite::Connection;

#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub created: Vec<Workday>,
    /// Dates without any timesheet.
    pub skipped: Vec<NaiveDate>,
    pub failed: Vec<(NaiveDate, String)>,
}

/// Create one workday per date that has timesheets.
///
/// Fails up front when the employee is unknown or not active, or when no date
/// is given. A failure on a single date is logged and does not stop the rest.
pub fn bulk_process_workdays(
    conn: &Connection,
    employee_id: &str,
    dates: &[NaiveDate],
) -> AppResult<BulkOutcome> {
    let employee = get_employee(conn, employee_id)?;
    if !employee.status.is_active() {
        return Err(AppError::InactiveEmployee(employee.id));
    }

    if dates.is_empty() {
        return Err(AppError::NoDatesSelected);
    }

    let mut outcome = BulkOutcome::default();

    for &date in dates {
        match process_date(conn, employee_id, &employee.company, date) {
            Ok(Some(wd)) => {
                ttlog_or_warn(
                    conn,
                    "bulk_create",
                    &wd.name,
                    &format!("Workday created for {employee_id} on {date}"),
                );
                outcome.created.push(wd);
            }
            Ok(None) => outcome.skipped.push(date),
            Err(e) => {
                ttlog_or_warn(
                    conn,
                    "bulk_error",
                    employee_id,
                    &format!("Something went wrong in Workday creation for {date}: {e}"),
                );
                outcome.failed.push((date, e.to_string()));
            }
        }
    }

    Ok(outcome)
}

fn process_date(
    conn: &Connection,
    employee_id: &str,
    company: &str,
    date: NaiveDate,
) -> AppResult<Option<Workday>> {
    let timesheets = timesheets_for_date(conn, employee_id, date)?;
    if timesheets.is_empty() {
        return Ok(None);
    }

    let hours_worked: f64 = timesheets.iter().map(|t| t.entry.total_hours).sum();

    let attendance = attendance_for(conn, employee_id, date)?;
    let status = attendance.first().map(|a| a.status).unwrap_or_default();

    let target_hours = match status {
        WorkdayStatus::HalfDay => get_target_hours(conn, employee_id, date)? / 2.0,
        WorkdayStatus::OnLeave => 0.0,
        _ => get_target_hours(conn, employee_id, date)?,
    };

    let mut wd = Workday::new(employee_id, date, company);
    wd.attendance = attendance.first().map(|a| a.id);
    wd.status = status;
    wd.hours_worked = hours_worked;
    wd.total_work_seconds = hours_worked * SECONDS_PER_HOUR;
    wd.target_hours = target_hours;
    wd.total_target_seconds = target_hours * SECONDS_PER_HOUR;
    wd.actual_working_hours = hours_worked;

    insert_workday(conn, &mut wd)?;
    Ok(Some(wd))
}
