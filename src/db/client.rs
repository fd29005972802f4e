//! SQLite adapter for the form's client traits.

use crate::core::client::{AttendanceClient, HolidayClient, TimesheetClient};
use crate::db::employees::{attendance_for, is_holiday};
use crate::db::timesheets::timesheets_for_date;
use crate::errors::AppResult;
use crate::models::employee::Attendance;
use crate::models::timesheet_entry::TimesheetEntry;
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct SqliteClient<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteClient<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl TimesheetClient for SqliteClient<'_> {
    fn fetch_timesheet_details(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<TimesheetEntry>> {
        Ok(timesheets_for_date(self.conn, employee_id, date)?
            .into_iter()
            .map(|t| t.entry)
            .collect())
    }
}

impl HolidayClient for SqliteClient<'_> {
    fn date_is_in_holiday_list(&self, employee_id: &str, date: NaiveDate) -> AppResult<bool> {
        is_holiday(self.conn, employee_id, date)
    }
}

impl AttendanceClient for SqliteClient<'_> {
    fn attendance_query(&self, employee_id: &str, date: NaiveDate) -> AppResult<Vec<Attendance>> {
        attendance_for(self.conn, employee_id, date)
    }
}
