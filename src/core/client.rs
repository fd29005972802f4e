//! Typed seams between the workday form and the data it reads.

use crate::errors::AppResult;
use crate::models::employee::Attendance;
use crate::models::timesheet_entry::TimesheetEntry;
use chrono::NaiveDate;

pub trait TimesheetClient {
    /// Timesheet entries of `employee_id` that cover `date`.
    fn fetch_timesheet_details(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<TimesheetEntry>>;
}

pub trait HolidayClient {
    fn date_is_in_holiday_list(&self, employee_id: &str, date: NaiveDate) -> AppResult<bool>;
}

pub trait AttendanceClient {
    /// Attendance records selectable for the form: same employee, same date.
    fn attendance_query(&self, employee_id: &str, date: NaiveDate) -> AppResult<Vec<Attendance>>;
}
