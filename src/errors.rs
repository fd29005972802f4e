//! Unified application error type.
//! Everything around the pure core (db, form, bulk, report, cli) returns
//! AppError so that error handling stays uniform.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid workday status: {0}")]
    InvalidStatus(String),

    #[error("Invalid daily hours '{0}' (expected Weekday:hours)")]
    InvalidDailyHours(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("{0} is not active")]
    InactiveEmployee(String),

    #[error("Please select a date")]
    NoDatesSelected,

    #[error("Attendance {0} does not belong to employee {1} on {2}")]
    AttendanceMismatch(i64, String, String),

    #[error("Workday not found: {0}")]
    WorkdayNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
