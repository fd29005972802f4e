//! Employee master data plus the per-employee attendance and holiday lists.

use super::{date_col, date_to_db, opt_date_col};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Attendance, Employee};
use crate::models::status::{EmployeeStatus, WorkdayStatus};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

// ---------------------------
// Employee
// ---------------------------

fn map_employee(row: &Row) -> rusqlite::Result<Employee> {
    let status_str: String = row.get("status")?;
    let status = EmployeeStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        company: row.get("company")?,
        status,
        date_of_joining: opt_date_col(row, "date_of_joining")?,
        relieving_date: opt_date_col(row, "relieving_date")?,
    })
}

/// Insert or replace an employee.
pub fn upsert_employee(conn: &Connection, e: &Employee) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employee (id, name, company, status, date_of_joining, relieving_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            company = excluded.company,
            status = excluded.status,
            date_of_joining = excluded.date_of_joining,
            relieving_date = excluded.relieving_date",
        params![
            e.id,
            e.name,
            e.company,
            e.status.to_db_str(),
            e.date_of_joining.map(date_to_db),
            e.relieving_date.map(date_to_db),
        ],
    )?;
    Ok(())
}

pub fn find_employee(conn: &Connection, id: &str) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM employee WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_employee).optional()?)
}

pub fn get_employee(conn: &Connection, id: &str) -> AppResult<Employee> {
    find_employee(conn, id)?.ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employee ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Attendance
// ---------------------------

fn map_attendance(row: &Row) -> rusqlite::Result<Attendance> {
    let status_str: String = row.get("status")?;
    let status = WorkdayStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Attendance {
        id: row.get("id")?,
        employee: row.get("employee")?,
        attendance_date: date_col(row, "attendance_date")?,
        status,
    })
}

pub fn insert_attendance(
    conn: &Connection,
    employee: &str,
    date: NaiveDate,
    status: WorkdayStatus,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance (employee, attendance_date, status) VALUES (?1, ?2, ?3)",
        params![employee, date_to_db(date), status.to_db_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Attendance records of `employee` on `date`.
pub fn attendance_for(
    conn: &Connection,
    employee: &str,
    date: NaiveDate,
) -> AppResult<Vec<Attendance>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM attendance
         WHERE employee = ?1 AND attendance_date = ?2
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map(params![employee, date_to_db(date)], map_attendance)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Holidays
// ---------------------------

pub fn insert_holiday(
    conn: &Connection,
    employee: &str,
    date: NaiveDate,
    description: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO holiday (employee, holiday_date, description)
         VALUES (?1, ?2, ?3)",
        params![employee, date_to_db(date), description],
    )?;
    Ok(())
}

pub fn is_holiday(conn: &Connection, employee: &str, date: NaiveDate) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM holiday WHERE employee = ?1 AND holiday_date = ?2 LIMIT 1",
    )?;
    Ok(stmt.exists(params![employee, date_to_db(date)])?)
}

pub fn holidays_between(
    conn: &Connection,
    employee: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn.prepare_cached(
        "SELECT holiday_date FROM holiday
         WHERE employee = ?1 AND holiday_date BETWEEN ?2 AND ?3
         ORDER BY holiday_date ASC",
    )?;
    let rows = stmt.query_map(
        params![employee, date_to_db(from), date_to_db(to)],
        |row| date_col(row, "holiday_date"),
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
