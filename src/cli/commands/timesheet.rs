use crate::cli::parser::{Commands, TimesheetAction};
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::timesheets::insert_timesheet;
use crate::errors::{AppError, AppResult};
use crate::models::timesheet_entry::TimesheetEntry;
use crate::ui::messages::success;
use crate::utils::date::{parse_date, parse_optional_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Timesheet {
        action:
            TimesheetAction::Add {
                employee,
                start,
                end,
                total,
                break_hours,
                target,
                actual,
            },
    } = cmd
    else {
        return Ok(());
    };

    let start_date = parse_date(start)?;
    let end_date = parse_optional_date(end.as_ref())?.unwrap_or(start_date);
    if end_date < start_date {
        return Err(AppError::InvalidDate(format!(
            "end date {end_date} is before start date {start_date}"
        )));
    }

    let entry = TimesheetEntry::new(
        *total,
        *break_hours,
        *target,
        actual.unwrap_or(total - break_hours),
    );

    let pool = DbPool::new(&cfg.database)?;
    let id = insert_timesheet(&pool.conn, employee, start_date, end_date, &entry)?;

    ttlog_or_warn(
        &pool.conn,
        "timesheet_add",
        employee,
        &format!("Timesheet {id}: {start_date}..{end_date}, {total}h"),
    );
    success(format!("Timesheet {id} added for {employee}."));
    Ok(())
}
