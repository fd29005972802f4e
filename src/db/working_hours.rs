//! Weekly working hours: a validity range per employee with one detail row per weekday.

use super::date_to_db;
use crate::errors::AppResult;
use crate::utils::date::weekday_name;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

/// Store a weekly schedule; `days` holds (weekday name, hours).
pub fn insert_weekly_hours(
    conn: &Connection,
    employee: &str,
    valid_from: NaiveDate,
    valid_to: NaiveDate,
    days: &[(String, f64)],
) -> AppResult<i64> {
    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO weekly_working_hours (employee, valid_from, valid_to) VALUES (?1, ?2, ?3)",
        params![employee, date_to_db(valid_from), date_to_db(valid_to)],
    )?;
    let parent = tx.last_insert_rowid();

    {
        let mut stmt =
            tx.prepare("INSERT INTO daily_hours_detail (parent, day, hours) VALUES (?1, ?2, ?3)")?;
        for (day, hours) in days {
            stmt.execute(params![parent, day, hours])?;
        }
    }

    tx.commit()?;
    Ok(parent)
}

/// Target hours of `employee` on `date`: the detail row for the weekday of the
/// first schedule valid on that date, 0 when there is none.
pub fn get_target_hours(conn: &Connection, employee: &str, date: NaiveDate) -> AppResult<f64> {
    let d = date_to_db(date);

    let parent: Option<i64> = conn
        .query_row(
            "SELECT id FROM weekly_working_hours
             WHERE employee = ?1 AND valid_from <= ?2 AND valid_to >= ?2
             ORDER BY valid_from ASC, id ASC
             LIMIT 1",
            params![employee, d],
            |row| row.get(0),
        )
        .optional()?;

    let Some(parent) = parent else {
        return Ok(0.0);
    };

    let hours: Option<f64> = conn
        .query_row(
            "SELECT hours FROM daily_hours_detail
             WHERE parent = ?1 AND day = ?2
             ORDER BY id ASC
             LIMIT 1",
            params![parent, weekday_name(date)],
            |row| row.get(0),
        )
        .optional()?;

    Ok(hours.unwrap_or(0.0))
}
