use crate::cli::parser::{AttendanceAction, Commands};
use crate::config::Config;
use crate::db::employees::insert_attendance;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::status::WorkdayStatus;
use crate::ui::messages::success;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Attendance {
        action: AttendanceAction::Add {
            employee,
            date,
            status,
        },
    } = cmd
    else {
        return Ok(());
    };

    let d = parse_date(date)?;
    let st = WorkdayStatus::from_cli(status).ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

    let pool = DbPool::new(&cfg.database)?;
    let id = insert_attendance(&pool.conn, employee, d, st)?;

    ttlog_or_warn(
        &pool.conn,
        "attendance_add",
        employee,
        &format!("Attendance {id} on {d}: {}", st.to_db_str()),
    );
    success(format!("Attendance {id} added ({}).", st.to_db_str()));
    Ok(())
}
