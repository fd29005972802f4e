use crate::cli::parser::{Commands, HoursAction};
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::working_hours::insert_weekly_hours;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::{normalize_weekday, parse_date};

/// Parse "Monday:8" / "fri:6.5".
pub fn parse_daily_hours(s: &str) -> AppResult<(String, f64)> {
    let (day, hours) = s
        .split_once(':')
        .ok_or_else(|| AppError::InvalidDailyHours(s.to_string()))?;

    let day = normalize_weekday(day).ok_or_else(|| AppError::InvalidDailyHours(s.to_string()))?;
    let hours: f64 = hours
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidDailyHours(s.to_string()))?;

    Ok((day.to_string(), hours))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Hours {
        action: HoursAction::Add {
            employee,
            from,
            to,
            days,
        },
    } = cmd
    else {
        return Ok(());
    };

    let valid_from = parse_date(from)?;
    let valid_to = parse_date(to)?;
    let details = days
        .iter()
        .map(|d| parse_daily_hours(d))
        .collect::<AppResult<Vec<_>>>()?;

    let pool = DbPool::new(&cfg.database)?;
    let id = insert_weekly_hours(&pool.conn, employee, valid_from, valid_to, &details)?;

    ttlog_or_warn(
        &pool.conn,
        "hours_add",
        employee,
        &format!("Weekly working hours {id}: {valid_from}..{valid_to}"),
    );
    success(format!(
        "Weekly working hours saved for {employee} ({} day(s)).",
        details.len()
    ));
    Ok(())
}
