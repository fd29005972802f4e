use super::{date_col, date_to_db};
use crate::errors::AppResult;
use crate::models::timesheet_entry::{Timesheet, TimesheetEntry};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Timesheet> {
    Ok(Timesheet {
        id: row.get("id")?,
        employee: row.get("employee")?,
        start_date: date_col(row, "start_date")?,
        end_date: date_col(row, "end_date")?,
        entry: TimesheetEntry {
            total_hours: row.get("total_hours")?,
            break_hours: row.get("break_hours")?,
            target_hours: row.get("target_hours")?,
            actual_working_hours: row.get("actual_working_hours")?,
        },
    })
}

pub fn insert_timesheet(
    conn: &Connection,
    employee: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    entry: &TimesheetEntry,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO timesheet
            (employee, start_date, end_date, total_hours, break_hours,
             target_hours, actual_working_hours, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            employee,
            date_to_db(start_date),
            date_to_db(end_date),
            entry.total_hours,
            entry.break_hours,
            entry.target_hours,
            entry.actual_working_hours,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Timesheets of `employee` whose `[start_date, end_date]` contains `date`.
pub fn timesheets_for_date(
    conn: &Connection,
    employee: &str,
    date: NaiveDate,
) -> AppResult<Vec<Timesheet>> {
    let d = date_to_db(date);

    let mut stmt = conn.prepare_cached(
        "SELECT * FROM timesheet
         WHERE employee = ?1 AND start_date <= ?2 AND end_date >= ?2
         ORDER BY start_date ASC, id ASC",
    )?;
    let rows = stmt.query_map(params![employee, d], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
