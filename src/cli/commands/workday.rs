use crate::cli::parser::{Commands, WorkdayAction};
use crate::config::Config;
use crate::core::bulk::bulk_process_workdays;
use crate::core::form::{FieldChange, FormNotice, WorkdayForm};
use crate::core::formatter::{format_duration, seconds_from_f64};
use crate::core::unmarked::{get_unmarked_days, get_unmarked_range};
use crate::db::client::SqliteClient;
use crate::db::employees::get_employee;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::workdays::{cancel_workday, find_workday, insert_workday};
use crate::errors::{AppError, AppResult};
use crate::models::status::WorkdayStatus;
use crate::models::workday::{NumericField, Workday};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::{
    month_from_name, parse_date, parse_date_list, parse_range, today, weekday_name,
};
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Workday { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    match action {
        WorkdayAction::New {
            employee,
            date,
            attendance,
            status,
            company,
            dry_run,
        } => new_workday(
            &pool,
            cfg,
            employee,
            date,
            *attendance,
            status.as_deref(),
            company.as_deref(),
            *dry_run,
        ),

        WorkdayAction::Bulk {
            employee,
            days,
            range,
        } => {
            let dates = match (days, range) {
                (Some(list), _) => parse_date_list(list)?,
                (None, Some(r)) => {
                    let (from, to) = parse_range(r)?;
                    get_unmarked_range(&pool.conn, employee, from, to)?
                }
                (None, None) => Vec::new(),
            };

            let outcome = bulk_process_workdays(&pool.conn, employee, &dates)?;

            for wd in &outcome.created {
                success(format!(
                    "{} {} ({}): {}",
                    wd.name,
                    wd.log_date_str(),
                    wd.status.to_db_str(),
                    format_duration(seconds_from_f64(wd.total_work_seconds), false)
                ));
            }
            for d in &outcome.skipped {
                info(format!("{d}: no timesheets, skipped"));
            }
            for (d, msg) in &outcome.failed {
                warning(format!("{d}: {msg}"));
            }

            info(format!(
                "{} created, {} skipped, {} failed",
                outcome.created.len(),
                outcome.skipped.len(),
                outcome.failed.len()
            ));
            Ok(())
        }

        WorkdayAction::Unmarked {
            employee,
            month,
            year,
            exclude_holidays,
            range,
        } => {
            let dates = match (month, range) {
                (_, Some(r)) => {
                    let (from, to) = parse_range(r)?;
                    get_unmarked_range(&pool.conn, employee, from, to)?
                }
                (Some(m), None) => {
                    let month = month_from_name(m)?;
                    let now = today();
                    let year = year.unwrap_or(now.year());
                    get_unmarked_days(&pool.conn, employee, month, year, *exclude_holidays, now)?
                }
                (None, None) => {
                    return Err(AppError::InvalidMonth(
                        "use --month <name> or --range FROM:TO".to_string(),
                    ));
                }
            };

            print_unmarked(employee, &dates);
            Ok(())
        }

        WorkdayAction::Cancel { name } => {
            let wd = find_workday(&pool.conn, name)?
                .ok_or_else(|| AppError::WorkdayNotFound(name.clone()))?;
            if wd.is_cancelled() {
                warning(format!("Workday {name} is already cancelled."));
                return Ok(());
            }

            cancel_workday(&pool.conn, name)?;
            ttlog_or_warn(&pool.conn, "workday_cancel", name, "Workday cancelled");
            success(format!("Workday {name} cancelled."));
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn new_workday(
    pool: &DbPool,
    cfg: &Config,
    employee: &str,
    date: &str,
    attendance: Option<i64>,
    status: Option<&str>,
    company: Option<&str>,
    dry_run: bool,
) -> AppResult<()> {
    let log_date = parse_date(date)?;
    let emp = get_employee(&pool.conn, employee)?;

    let company = company
        .map(str::to_string)
        .or_else(|| (!emp.company.is_empty()).then(|| emp.company.clone()))
        .unwrap_or_else(|| cfg.default_company.clone());

    let status = status
        .map(|s| WorkdayStatus::from_cli(s).ok_or_else(|| AppError::InvalidStatus(s.to_string())))
        .transpose()?;

    let client = SqliteClient::new(&pool.conn);
    let mut doc = Workday::new(employee, log_date, &company);
    doc.employee = None;
    doc.log_date = None;
    let mut form = WorkdayForm::new(&client, doc);

    let mut notices = form.update(FieldChange::Employee(employee.to_string()))?;
    notices.extend(form.update(FieldChange::LogDate(log_date))?);
    if attendance.is_some() {
        notices.extend(form.update(FieldChange::Attendance(attendance))?);
    }
    if let Some(s) = status {
        notices.extend(form.update(FieldChange::Status(s))?);
    }

    for n in &notices {
        match n {
            FormNotice::Holiday(_) | FormNotice::NoTimesheets(_) => warning(n),
            _ => info(n),
        }
    }

    let mut wd = form.into_doc();
    print_workday(&wd);

    if dry_run {
        info("Dry run: workday not saved.");
        return Ok(());
    }

    insert_workday(&pool.conn, &mut wd)?;
    ttlog_or_warn(
        &pool.conn,
        "workday_new",
        &wd.name,
        &format!("Workday for {employee} on {log_date}"),
    );
    success(format!("Workday {} saved.", wd.name));
    Ok(())
}

fn print_workday(wd: &Workday) {
    header(format!(
        "{} {} ({})",
        wd.employee.as_deref().unwrap_or_default(),
        wd.log_date_str(),
        wd.status.to_db_str()
    ));

    for f in NumericField::ALL {
        let v = wd.number(f);
        let shown = if f.fieldname().ends_with("_seconds") {
            format_duration(seconds_from_f64(v), false)
        } else {
            format!("{v:.2}")
        };
        println!("  {:<22} {shown}", f.fieldname());
    }
}

fn print_unmarked(employee: &str, dates: &[NaiveDate]) {
    if dates.is_empty() {
        success(format!("No unmarked days for {employee}."));
        return;
    }

    header(format!("Unmarked days for {employee}"));
    for d in dates {
        println!("  {d} {}", weekday_name(*d));
    }
    info(format!("{} day(s)", dates.len()));
}
