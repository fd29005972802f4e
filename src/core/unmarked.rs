//! Days that still lack a workday record.

use crate::db::employees::{get_employee, holidays_between};
use crate::db::workdays::marked_dates;
use crate::errors::AppResult;
use crate::utils::date::{all_days_of_month, days_between};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::collections::HashSet;

/// Dates in `[from, to]` without a workday for `employee`.
pub fn get_unmarked_range(
    conn: &Connection,
    employee: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<NaiveDate>> {
    let marked: HashSet<NaiveDate> = marked_dates(conn, employee, from, to)?.into_iter().collect();

    Ok(days_between(from, to)
        .into_iter()
        .filter(|d| !marked.contains(d))
        .collect())
}

/// Unmarked days of a month, before `today`.
///
/// The month is clipped to the employee's joining and relieving dates.
/// With `exclude_holidays` the employee's holidays are treated as marked.
pub fn get_unmarked_days(
    conn: &Connection,
    employee_id: &str,
    month: u32,
    year: i32,
    exclude_holidays: bool,
    today: NaiveDate,
) -> AppResult<Vec<NaiveDate>> {
    let employee = get_employee(conn, employee_id)?;

    let days: Vec<NaiveDate> = all_days_of_month(year, month)
        .into_iter()
        .filter(|d| employee.date_of_joining.is_none_or(|j| *d >= j))
        .filter(|d| employee.relieving_date.is_none_or(|r| *d <= r))
        .take_while(|d| *d < today)
        .collect();

    let (Some(first), Some(last)) = (days.first().copied(), days.last().copied()) else {
        return Ok(Vec::new());
    };

    let mut marked: HashSet<NaiveDate> = marked_dates(conn, employee_id, first, last)?
        .into_iter()
        .collect();

    if exclude_holidays {
        marked.extend(holidays_between(conn, employee_id, first, last)?);
    }

    Ok(days.into_iter().filter(|d| !marked.contains(d)).collect())
}
