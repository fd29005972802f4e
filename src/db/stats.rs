use crate::db::migrate::pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    Ok(pool.conn.query_row(&sql, [], |row| row.get(0))?)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{CYAN}• File:{RESET} {YELLOW}{db_path}{RESET}");
    println!("{CYAN}• Size:{RESET} {file_mb:.2} MB");

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("Employees", "employee"),
        ("Timesheets", "timesheet"),
        ("Attendance", "attendance"),
        ("Holidays", "holiday"),
        ("Workdays", "workday"),
    ] {
        println!("{CYAN}• {label}:{RESET} {GREEN}{}{RESET}", count(pool, table)?);
    }

    //
    // 3) WORKDAY DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(log_date), MAX(log_date) FROM workday WHERE docstatus < 2",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let placeholder = format!("{GREY}--{RESET}");
    println!(
        "{CYAN}• Workday range:{RESET} {} → {}",
        first.unwrap_or_else(|| placeholder.clone()),
        last.unwrap_or(placeholder)
    );

    //
    // 4) MIGRATIONS
    //
    let pending = pending_migrations(&pool.conn)?;
    if pending.is_empty() {
        println!("{CYAN}• Migrations:{RESET} {GREEN}up to date{RESET}");
    } else {
        println!(
            "{CYAN}• Migrations:{RESET} {YELLOW}{} pending{RESET}",
            pending.len()
        );
    }

    println!();
    Ok(())
}
