use super::status::WorkdayStatus;
use super::workday_summary::WorkdaySummary;
use chrono::NaiveDate;
use serde::Serialize;

/// Numeric fields of a workday that computations write back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    HoursWorked,
    BreakHours,
    TotalWorkSeconds,
    TotalBreakSeconds,
    TargetHours,
    TotalTargetSeconds,
    ExpectedBreakHours,
    ActualWorkingHours,
}

impl NumericField {
    pub const ALL: [NumericField; 8] = [
        NumericField::HoursWorked,
        NumericField::BreakHours,
        NumericField::TotalWorkSeconds,
        NumericField::TotalBreakSeconds,
        NumericField::TargetHours,
        NumericField::TotalTargetSeconds,
        NumericField::ExpectedBreakHours,
        NumericField::ActualWorkingHours,
    ];

    /// Column name in the `workday` table.
    pub fn fieldname(&self) -> &'static str {
        match self {
            NumericField::HoursWorked => "hours_worked",
            NumericField::BreakHours => "break_hours",
            NumericField::TotalWorkSeconds => "total_work_seconds",
            NumericField::TotalBreakSeconds => "total_break_seconds",
            NumericField::TargetHours => "target_hours",
            NumericField::TotalTargetSeconds => "total_target_seconds",
            NumericField::ExpectedBreakHours => "expected_break_hours",
            NumericField::ActualWorkingHours => "actual_working_hours",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstCheckin,
    LastCheckout,
}

/// The daily HR record of one employee.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Workday {
    pub id: i64,                     // ⇔ workday.id (0 until saved)
    pub name: String,                // ⇔ workday.name ("WD-00001")
    pub employee: Option<String>,    // ⇔ workday.employee
    pub log_date: Option<NaiveDate>, // ⇔ workday.log_date
    pub company: String,
    pub attendance: Option<i64>,
    pub status: WorkdayStatus,

    pub hours_worked: f64,
    pub break_hours: f64,
    pub total_work_seconds: f64,
    pub total_break_seconds: f64,
    pub target_hours: f64,
    pub total_target_seconds: f64,
    pub expected_break_hours: f64,
    pub actual_working_hours: f64,

    pub first_checkin: String,
    pub last_checkout: String,

    pub docstatus: i32, // 0 draft, 1 submitted, 2 cancelled
}

impl Workday {
    pub fn new(employee: &str, log_date: NaiveDate, company: &str) -> Self {
        Self {
            employee: Some(employee.to_string()),
            log_date: Some(log_date),
            company: company.to_string(),
            ..Self::default()
        }
    }

    pub fn set_number(&mut self, field: NumericField, value: f64) {
        let slot = match field {
            NumericField::HoursWorked => &mut self.hours_worked,
            NumericField::BreakHours => &mut self.break_hours,
            NumericField::TotalWorkSeconds => &mut self.total_work_seconds,
            NumericField::TotalBreakSeconds => &mut self.total_break_seconds,
            NumericField::TargetHours => &mut self.target_hours,
            NumericField::TotalTargetSeconds => &mut self.total_target_seconds,
            NumericField::ExpectedBreakHours => &mut self.expected_break_hours,
            NumericField::ActualWorkingHours => &mut self.actual_working_hours,
        };
        *slot = value;
    }

    pub fn number(&self, field: NumericField) -> f64 {
        match field {
            NumericField::HoursWorked => self.hours_worked,
            NumericField::BreakHours => self.break_hours,
            NumericField::TotalWorkSeconds => self.total_work_seconds,
            NumericField::TotalBreakSeconds => self.total_break_seconds,
            NumericField::TargetHours => self.target_hours,
            NumericField::TotalTargetSeconds => self.total_target_seconds,
            NumericField::ExpectedBreakHours => self.expected_break_hours,
            NumericField::ActualWorkingHours => self.actual_working_hours,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: &str) {
        match field {
            TextField::FirstCheckin => self.first_checkin = value.to_string(),
            TextField::LastCheckout => self.last_checkout = value.to_string(),
        }
    }

    /// Write a summary back into the document through the setters.
    /// Check-in/check-out are only touched when the summary carries them.
    pub fn apply_summary(&mut self, s: &WorkdaySummary) {
        self.set_number(NumericField::HoursWorked, s.hours_worked);
        self.set_number(NumericField::BreakHours, s.break_hours);
        self.set_number(NumericField::TotalWorkSeconds, s.total_work_seconds);
        self.set_number(NumericField::TotalBreakSeconds, s.total_break_seconds);
        self.set_number(NumericField::TargetHours, s.target_hours);
        self.set_number(NumericField::ExpectedBreakHours, s.expected_break_hours);
        self.set_number(NumericField::TotalTargetSeconds, s.total_target_seconds);
        self.set_number(NumericField::ActualWorkingHours, s.actual_working_hours);

        if let Some(v) = &s.first_checkin {
            self.set_text(TextField::FirstCheckin, v);
        }
        if let Some(v) = &s.last_checkout {
            self.set_text(TextField::LastCheckout, v);
        }
    }

    pub fn log_date_str(&self) -> String {
        self.log_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.docstatus >= 2
    }
}
