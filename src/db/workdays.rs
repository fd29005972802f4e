use super::{date_to_db, opt_date_col};
use crate::errors::{AppError, AppResult};
use crate::models::status::WorkdayStatus;
use crate::models::workday::Workday;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<Workday> {
    let status_str: String = row.get("status")?;
    let status = WorkdayStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Workday {
        id: row.get("id")?,
        name: row.get::<_, Option<String>>("name")?.unwrap_or_default(),
        employee: row.get("employee")?,
        log_date: opt_date_col(row, "log_date")?,
        company: row.get("company")?,
        attendance: row.get("attendance")?,
        status,
        hours_worked: row.get("hours_worked")?,
        break_hours: row.get("break_hours")?,
        total_work_seconds: row.get("total_work_seconds")?,
        total_break_seconds: row.get("total_break_seconds")?,
        target_hours: row.get("target_hours")?,
        total_target_seconds: row.get("total_target_seconds")?,
        expected_break_hours: row.get("expected_break_hours")?,
        actual_working_hours: row.get("actual_working_hours")?,
        first_checkin: row.get("first_checkin")?,
        last_checkout: row.get("last_checkout")?,
        docstatus: row.get("docstatus")?,
    })
}

/// Insert a new workday; assigns `id` and the `WD-00001` style name.
pub fn insert_workday(conn: &Connection, wd: &mut Workday) -> AppResult<()> {
    let (employee, log_date) = match (&wd.employee, wd.log_date) {
        (Some(e), Some(d)) => (e.clone(), d),
        _ => {
            return Err(AppError::InvalidDate(
                "workday requires employee and log date".into(),
            ));
        }
    };

    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO workday
            (employee, log_date, company, attendance, status,
             hours_worked, break_hours, total_work_seconds, total_break_seconds,
             target_hours, total_target_seconds, expected_break_hours, actual_working_hours,
             first_checkin, last_checkout, docstatus, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        params![
            employee,
            date_to_db(log_date),
            wd.company,
            wd.attendance,
            wd.status.to_db_str(),
            wd.hours_worked,
            wd.break_hours,
            wd.total_work_seconds,
            wd.total_break_seconds,
            wd.target_hours,
            wd.total_target_seconds,
            wd.expected_break_hours,
            wd.actual_working_hours,
            wd.first_checkin,
            wd.last_checkout,
            wd.docstatus,
            Local::now().to_rfc3339(),
        ],
    )?;

    let id = tx.last_insert_rowid();
    let name = format!("WD-{id:05}");
    tx.execute(
        "UPDATE workday SET name = ?1 WHERE id = ?2",
        params![name, id],
    )?;
    tx.commit()?;

    wd.id = id;
    wd.name = name;
    Ok(())
}

pub fn find_workday(conn: &Connection, name: &str) -> AppResult<Option<Workday>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM workday WHERE name = ?1")?;
    Ok(stmt.query_row([name], map_row).optional()?)
}

/// Mark a workday as cancelled (docstatus 2); it disappears from reports.
pub fn cancel_workday(conn: &Connection, name: &str) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE workday SET docstatus = 2 WHERE name = ?1",
        [name],
    )?;
    if n == 0 {
        return Err(AppError::WorkdayNotFound(name.to_string()));
    }
    Ok(())
}

/// Non-cancelled workdays of `employee` in `[from, to]`, by date.
pub fn workdays_between(
    conn: &Connection,
    employee: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<Workday>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM workday
         WHERE docstatus < 2 AND employee = ?1 AND log_date BETWEEN ?2 AND ?3
         ORDER BY log_date ASC, id ASC",
    )?;
    let rows = stmt.query_map(
        params![employee, date_to_db(from), date_to_db(to)],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Dates in `[from, to]` that already have a workday for `employee`.
pub fn marked_dates(
    conn: &Connection,
    employee: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<NaiveDate>> {
    let mut dates: Vec<NaiveDate> = workdays_between(conn, employee, from, to)?
        .into_iter()
        .filter_map(|w| w.log_date)
        .collect();
    dates.dedup();
    Ok(dates)
}
