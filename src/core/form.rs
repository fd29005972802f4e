//! Workday form: reacts to field changes on a `Workday` and recomputes the
//! dependent fields through the pure aggregator.

use crate::core::aggregator::aggregate;
use crate::core::client::{AttendanceClient, HolidayClient, TimesheetClient};
use crate::errors::{AppError, AppResult};
use crate::models::status::WorkdayStatus;
use crate::models::workday::{NumericField, Workday};
use crate::models::workday_summary::WorkdaySummary;
use chrono::NaiveDate;
use std::fmt;

/// A change to one of the fields the form listens to.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Employee(String),
    LogDate(NaiveDate),
    Attendance(Option<i64>),
    Status(WorkdayStatus),
}

/// Messages raised while handling a change, shown to the user by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum FormNotice {
    /// The log date is in the employee's holiday list; fields were cleared.
    Holiday(NaiveDate),
    /// No timesheet covers the date; fields were cleared.
    NoTimesheets(NaiveDate),
    /// Hours were aggregated from this many timesheets.
    HoursUpdated(usize),
    /// Status "On Leave" zeroed the target and working time fields.
    LeaveApplied,
}

impl fmt::Display for FormNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormNotice::Holiday(_) => write!(f, "Given Date is Holiday"),
            FormNotice::NoTimesheets(d) => write!(f, "No timesheets found for {d}"),
            FormNotice::HoursUpdated(n) => write!(f, "Hours aggregated from {n} timesheet(s)"),
            FormNotice::LeaveApplied => write!(f, "On Leave: target and working time reset"),
        }
    }
}

/// Fields zeroed when the status switches to "On Leave".
const LEAVE_RESET: [NumericField; 6] = [
    NumericField::TargetHours,
    NumericField::ExpectedBreakHours,
    NumericField::ActualWorkingHours,
    NumericField::TotalTargetSeconds,
    NumericField::TotalBreakSeconds,
    NumericField::TotalWorkSeconds,
];

pub struct WorkdayForm<'c, C> {
    client: &'c C,
    doc: Workday,
}

impl<'c, C> WorkdayForm<'c, C>
where
    C: TimesheetClient + HolidayClient + AttendanceClient,
{
    pub fn new(client: &'c C, doc: Workday) -> Self {
        Self { client, doc }
    }

    pub fn doc(&self) -> &Workday {
        &self.doc
    }

    pub fn into_doc(self) -> Workday {
        self.doc
    }

    /// Set a field and run its change handler.
    pub fn update(&mut self, change: FieldChange) -> AppResult<Vec<FormNotice>> {
        match change {
            FieldChange::Employee(e) => {
                self.doc.employee = Some(e);
                Ok(Vec::new())
            }
            FieldChange::LogDate(d) => {
                self.doc.log_date = Some(d);
                self.on_log_date()
            }
            FieldChange::Attendance(a) => {
                if let Some(id) = a {
                    self.check_attendance(id)?;
                }
                self.doc.attendance = a;
                self.on_attendance()
            }
            FieldChange::Status(s) => {
                self.doc.status = s;
                Ok(self.on_status())
            }
        }
    }

    fn key(&self) -> Option<(String, NaiveDate)> {
        match (&self.doc.employee, self.doc.log_date) {
            (Some(e), Some(d)) if !e.is_empty() => Some((e.clone(), d)),
            _ => None,
        }
    }

    fn check_attendance(&self, id: i64) -> AppResult<()> {
        let Some((employee, date)) = self.key() else {
            return Ok(());
        };

        let allowed = self.client.attendance_query(&employee, date)?;
        if allowed.iter().any(|a| a.id == id) {
            Ok(())
        } else {
            Err(AppError::AttendanceMismatch(
                id,
                employee,
                date.format("%Y-%m-%d").to_string(),
            ))
        }
    }

    fn on_attendance(&mut self) -> AppResult<Vec<FormNotice>> {
        self.get_hours()
    }

    fn on_log_date(&mut self) -> AppResult<Vec<FormNotice>> {
        let Some((employee, date)) = self.key() else {
            return Ok(Vec::new());
        };

        if self.client.date_is_in_holiday_list(&employee, date)? {
            self.unset_fields();
            return Ok(vec![FormNotice::Holiday(date)]);
        }

        self.get_hours()
    }

    fn on_status(&mut self) -> Vec<FormNotice> {
        if self.doc.status != WorkdayStatus::OnLeave {
            return Vec::new();
        }

        for f in LEAVE_RESET {
            self.doc.set_number(f, 0.0);
        }
        vec![FormNotice::LeaveApplied]
    }

    fn get_hours(&mut self) -> AppResult<Vec<FormNotice>> {
        let Some((employee, date)) = self.key() else {
            return Ok(Vec::new());
        };

        let entries = self.client.fetch_timesheet_details(&employee, date)?;
        if entries.is_empty() {
            self.unset_fields();
            return Ok(vec![FormNotice::NoTimesheets(date)]);
        }

        self.doc.apply_summary(&aggregate(&entries));
        Ok(vec![FormNotice::HoursUpdated(entries.len())])
    }

    fn unset_fields(&mut self) {
        self.doc.apply_summary(&WorkdaySummary::zero());
    }
}
