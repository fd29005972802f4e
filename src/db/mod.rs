pub mod client;
pub mod employees;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod timesheets;
pub mod workdays;
pub mod working_hours;

use crate::errors::AppError;
use chrono::NaiveDate;
use rusqlite::Row;

pub(crate) fn date_to_db(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Read a `YYYY-MM-DD` TEXT column into a date.
pub(crate) fn date_col(row: &Row, name: &str) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(name)?;
    parse_db_date(&raw)
}

pub(crate) fn opt_date_col(row: &Row, name: &str) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(name)?;
    match raw {
        Some(s) if !s.trim().is_empty() => parse_db_date(&s).map(Some),
        _ => Ok(None),
    }
}

fn parse_db_date(raw: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}
