//! Hour aggregation: folds the timesheets of one (employee, date) into a
//! `WorkdaySummary`.

use crate::models::timesheet_entry::TimesheetEntry;
use crate::models::workday_summary::{SECONDS_PER_HOUR, WorkdaySummary};

/// Sum the entries into a summary.
///
/// The caller is responsible for passing entries of a single employee and date.
/// An empty slice yields [`WorkdaySummary::zero`], which also clears
/// check-in/check-out. Values are not validated.
pub fn aggregate(entries: &[TimesheetEntry]) -> WorkdaySummary {
    if entries.is_empty() {
        return WorkdaySummary::zero();
    }

    let work = ordered_sum(entries.iter().map(|e| e.total_hours));
    let breaks = ordered_sum(entries.iter().map(|e| e.break_hours));
    let target = ordered_sum(entries.iter().map(|e| e.target_hours));
    let actual = ordered_sum(entries.iter().map(|e| e.actual_working_hours));

    WorkdaySummary {
        hours_worked: work,
        break_hours: breaks,
        total_work_seconds: work * SECONDS_PER_HOUR,
        total_break_seconds: breaks * SECONDS_PER_HOUR,
        target_hours: target,
        total_target_seconds: target * SECONDS_PER_HOUR,
        // expected break mirrors the summed break hours
        expected_break_hours: breaks,
        actual_working_hours: actual,
        first_checkin: None,
        last_checkout: None,
    }
}

/// Float sum over the values in ascending order, so the result does not
/// depend on the order of the input.
fn ordered_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(|a, b| a.total_cmp(b));
    v.into_iter().sum()
}
