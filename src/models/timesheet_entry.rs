use chrono::NaiveDate;
use serde::Serialize;

/// The four hour quantities of one timesheet, as consumed by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TimesheetEntry {
    pub total_hours: f64,
    pub break_hours: f64,
    pub target_hours: f64,
    pub actual_working_hours: f64,
}

impl TimesheetEntry {
    pub fn new(
        total_hours: f64,
        break_hours: f64,
        target_hours: f64,
        actual_working_hours: f64,
    ) -> Self {
        Self {
            total_hours,
            break_hours,
            target_hours,
            actual_working_hours,
        }
    }
}

/// A stored timesheet row: an entry covering `[start_date, end_date]`.
#[derive(Debug, Clone, Serialize)]
pub struct Timesheet {
    pub id: i64,           // ⇔ timesheet.id
    pub employee: String,  // ⇔ timesheet.employee
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub entry: TimesheetEntry,
}
