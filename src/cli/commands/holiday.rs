use crate::cli::parser::{Commands, HolidayAction};
use crate::config::Config;
use crate::db::employees::insert_holiday;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Holiday {
        action: HolidayAction::Add {
            employee,
            date,
            description,
        },
    } = cmd
    else {
        return Ok(());
    };

    let d = parse_date(date)?;

    let pool = DbPool::new(&cfg.database)?;
    insert_holiday(&pool.conn, employee, d, description)?;

    ttlog_or_warn(&pool.conn, "holiday_add", employee, &format!("Holiday on {d}"));
    success(format!("Holiday {d} added for {employee}."));
    Ok(())
}
