//! Versioned schema migrations.
//!
//! Every migration is applied once and recorded in the `log` table with
//! operation `migration_applied` and the version as target.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250110_0001_base_schema",
        description: "Created employee, timesheet, attendance, holiday and working hours tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employee (
            id               TEXT PRIMARY KEY,
            name             TEXT NOT NULL,
            company          TEXT NOT NULL DEFAULT '',
            status           TEXT NOT NULL DEFAULT 'Active'
                             CHECK(status IN ('Active','Inactive','Left')),
            date_of_joining  TEXT,
            relieving_date   TEXT
        );

        CREATE TABLE IF NOT EXISTS timesheet (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            employee              TEXT NOT NULL,
            start_date            TEXT NOT NULL,
            end_date              TEXT NOT NULL,
            total_hours           REAL NOT NULL DEFAULT 0,
            break_hours           REAL NOT NULL DEFAULT 0,
            target_hours          REAL NOT NULL DEFAULT 0,
            actual_working_hours  REAL NOT NULL DEFAULT 0,
            created_at            TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_timesheet_emp_dates
            ON timesheet(employee, start_date, end_date);

        CREATE TABLE IF NOT EXISTS attendance (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            employee         TEXT NOT NULL,
            attendance_date  TEXT NOT NULL,
            status           TEXT NOT NULL DEFAULT 'Present'
        );
        CREATE INDEX IF NOT EXISTS idx_attendance_emp_date
            ON attendance(employee, attendance_date);

        CREATE TABLE IF NOT EXISTS holiday (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee      TEXT NOT NULL,
            holiday_date  TEXT NOT NULL,
            description   TEXT NOT NULL DEFAULT '',
            UNIQUE(employee, holiday_date)
        );

        CREATE TABLE IF NOT EXISTS weekly_working_hours (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee    TEXT NOT NULL,
            valid_from  TEXT NOT NULL,
            valid_to    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS daily_hours_detail (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            parent  INTEGER NOT NULL REFERENCES weekly_working_hours(id) ON DELETE CASCADE,
            day     TEXT NOT NULL,
            hours   REAL NOT NULL DEFAULT 0
        );
        "#,
    },
    Migration {
        version: "20250110_0002_workday",
        description: "Created workday table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS workday (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            name                  TEXT UNIQUE,
            employee              TEXT NOT NULL,
            log_date              TEXT NOT NULL,
            company               TEXT NOT NULL DEFAULT '',
            attendance            INTEGER,
            status                TEXT NOT NULL DEFAULT 'Present',
            hours_worked          REAL NOT NULL DEFAULT 0,
            break_hours           REAL NOT NULL DEFAULT 0,
            total_work_seconds    REAL NOT NULL DEFAULT 0,
            total_break_seconds   REAL NOT NULL DEFAULT 0,
            target_hours          REAL NOT NULL DEFAULT 0,
            total_target_seconds  REAL NOT NULL DEFAULT 0,
            expected_break_hours  REAL NOT NULL DEFAULT 0,
            actual_working_hours  REAL NOT NULL DEFAULT 0,
            docstatus             INTEGER NOT NULL DEFAULT 0,
            created_at            TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_workday_emp_date ON workday(employee, log_date);
        "#,
    },
    Migration {
        version: "20250302_0003_workday_checkin",
        description: "Added first_checkin / last_checkout to workday",
        sql: r#"
        ALTER TABLE workday ADD COLUMN first_checkin TEXT NOT NULL DEFAULT '';
        ALTER TABLE workday ADD COLUMN last_checkout TEXT NOT NULL DEFAULT '';
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {e}", m.version)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Public entry point: run all pending migrations. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    Ok(applied)
}

/// Versions not yet applied to this database.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}
