use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportColumn, ReportFilters, ReportStyle, WorkHourReport};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::ui::messages::{header, info};
use crate::utils::date::today;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report {
        month,
        year,
        employee,
        style,
        details,
        format,
        file,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let filters = ReportFilters::new(month, year.unwrap_or(today().year()), employee)?;
    let style = ReportStyle::parse(style.as_deref().unwrap_or(&cfg.report_style))?;

    let pool = DbPool::new(&cfg.database)?;
    let mut data = WorkHourReport::execute(&pool.conn, &filters)?;
    if *details {
        data = data.with_columns(&ReportColumn::DETAILED);
    }

    if let (Some(fmt), Some(path)) = (format, file) {
        ExportLogic::export_report(&data, *fmt, path, *force)?;
        ttlog_or_warn(
            &pool.conn,
            "report_export",
            employee,
            &format!("{} report exported to {path}", fmt.as_str()),
        );
        return Ok(());
    }

    if data.rows.is_empty() {
        info(format!("No workdays for {}.", filters.title()));
        return Ok(());
    }

    header(filters.title());
    print!("{}", data.render(style, &cfg.date_format));
    Ok(())
}
