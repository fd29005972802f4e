use super::status::{EmployeeStatus, WorkdayStatus};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub company: String,
    pub status: EmployeeStatus,
    pub date_of_joining: Option<NaiveDate>,
    pub relieving_date: Option<NaiveDate>,
}

/// An attendance record; the workday form may link one for the same employee and date.
#[derive(Debug, Clone, Serialize)]
pub struct Attendance {
    pub id: i64,
    pub employee: String,
    pub attendance_date: NaiveDate,
    pub status: WorkdayStatus,
}
