//! Work hour report: monthly workdays of one employee with worked, target and
//! difference columns rendered as coloured durations.

use crate::core::formatter::{
    ColoredDuration, format_plain, format_with_color, seconds_from_f64,
};
use crate::db::workdays::workdays_between;
use crate::errors::{AppError, AppResult};
use crate::models::workday::Workday;
use crate::models::workday_summary::SECONDS_PER_HOUR;
use crate::utils::colors::colorize_optional;
use crate::utils::date::{
    all_days_of_month, format_date, month_from_name, month_name, weekday_name,
};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ReportFilters {
    pub month: u32,
    pub year: i32,
    pub employee: String,
}

impl ReportFilters {
    pub fn new(month: &str, year: i32, employee: &str) -> AppResult<Self> {
        Ok(Self {
            month: month_from_name(month)?,
            year,
            employee: employee.to_string(),
        })
    }

    pub fn title(&self) -> String {
        format!(
            "Work hours of {} for {} {}",
            self.employee,
            month_name(self.month),
            self.year
        )
    }
}

/// One report line. `log_date == None` marks the totals row.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ReportRow {
    pub name: String,
    pub log_date: Option<NaiveDate>,
    pub employee: String,
    pub attendance: Option<i64>,
    pub status: String,
    pub total_work_seconds: f64,
    pub total_break_seconds: f64,
    pub actual_working_seconds: f64,
    /// expected break hours expressed in seconds
    pub expected_break_hours: f64,
    pub target_hours: f64,
    pub total_target_seconds: f64,
    pub diff_log: f64,
    pub actual_diff_log: f64,
    pub first_in: String,
    pub last_out: String,
}

fn time_part(datetime: &str) -> String {
    match datetime.trim().split_once(' ') {
        Some((_, t)) => t.to_string(),
        None => datetime.trim().to_string(),
    }
}

impl From<&Workday> for ReportRow {
    fn from(w: &Workday) -> Self {
        let actual_working_seconds = w.actual_working_hours * SECONDS_PER_HOUR;
        Self {
            name: w.name.clone(),
            log_date: w.log_date,
            employee: w.employee.clone().unwrap_or_default(),
            attendance: w.attendance,
            status: w.status.to_db_str().to_string(),
            total_work_seconds: w.total_work_seconds,
            total_break_seconds: w.total_break_seconds,
            actual_working_seconds,
            expected_break_hours: w.expected_break_hours * SECONDS_PER_HOUR,
            target_hours: w.target_hours,
            total_target_seconds: w.total_target_seconds,
            diff_log: w.total_work_seconds - w.total_target_seconds,
            actual_diff_log: actual_working_seconds - w.total_target_seconds,
            first_in: time_part(&w.first_checkin),
            last_out: time_part(&w.last_checkout),
        }
    }
}

impl ReportRow {
    pub fn is_total(&self) -> bool {
        self.log_date.is_none()
    }

    fn totals(rows: &[ReportRow]) -> ReportRow {
        let mut t = ReportRow {
            name: "Total".to_string(),
            ..ReportRow::default()
        };
        for r in rows {
            t.total_work_seconds += r.total_work_seconds;
            t.total_break_seconds += r.total_break_seconds;
            t.actual_working_seconds += r.actual_working_seconds;
            t.expected_break_hours += r.expected_break_hours;
            t.target_hours += r.target_hours;
            t.total_target_seconds += r.total_target_seconds;
            t.diff_log += r.diff_log;
            t.actual_diff_log += r.actual_diff_log;
        }
        t
    }
}

/// Columns of the report and how each cell is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportColumn {
    LogDate,
    Name,
    Status,
    TotalWorkSeconds,
    TotalBreakSeconds,
    ActualWorkingSeconds,
    TotalTargetSeconds,
    ExpectedBreakHours,
    DiffLog,
    ActualDiffLog,
    FirstIn,
    LastOut,
}

impl ReportColumn {
    pub const DEFAULT: [ReportColumn; 5] = [
        ReportColumn::LogDate,
        ReportColumn::Name,
        ReportColumn::TotalWorkSeconds,
        ReportColumn::TotalTargetSeconds,
        ReportColumn::ActualDiffLog,
    ];

    pub const DETAILED: [ReportColumn; 12] = [
        ReportColumn::LogDate,
        ReportColumn::Name,
        ReportColumn::Status,
        ReportColumn::FirstIn,
        ReportColumn::LastOut,
        ReportColumn::TotalWorkSeconds,
        ReportColumn::TotalBreakSeconds,
        ReportColumn::ActualWorkingSeconds,
        ReportColumn::TotalTargetSeconds,
        ReportColumn::ExpectedBreakHours,
        ReportColumn::DiffLog,
        ReportColumn::ActualDiffLog,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportColumn::LogDate => "Date",
            ReportColumn::Name => "Workday",
            ReportColumn::Status => "Status",
            ReportColumn::TotalWorkSeconds => "Worked",
            ReportColumn::TotalBreakSeconds => "Breaks",
            ReportColumn::ActualWorkingSeconds => "Actual",
            ReportColumn::TotalTargetSeconds => "Target",
            ReportColumn::ExpectedBreakHours => "Exp. break",
            ReportColumn::DiffLog => "Diff",
            ReportColumn::ActualDiffLog => "Difference",
            ReportColumn::FirstIn => "In",
            ReportColumn::LastOut => "Out",
        }
    }

    pub fn is_duration(&self) -> bool {
        !matches!(
            self,
            ReportColumn::LogDate
                | ReportColumn::Name
                | ReportColumn::Status
                | ReportColumn::FirstIn
                | ReportColumn::LastOut
        )
    }

    /// Format one cell of `row`.
    pub fn format(&self, row: &ReportRow, ctx: &FormatContext) -> Cell {
        let secs = |v: f64| Some(seconds_from_f64(v));

        match self {
            ReportColumn::LogDate => Cell::Text(match row.log_date {
                Some(d) => format!("{}, {}", weekday_name(d), format_date(d, &ctx.date_format)),
                None => ctx.year.to_string(),
            }),
            ReportColumn::Name => Cell::Text(row.name.clone()),
            ReportColumn::Status => Cell::Text(row.status.clone()),
            ReportColumn::FirstIn => Cell::Text(row.first_in.clone()),
            ReportColumn::LastOut => Cell::Text(row.last_out.clone()),

            ReportColumn::TotalWorkSeconds => {
                Cell::Duration(format_with_color(secs(row.total_work_seconds), false))
            }
            ReportColumn::TotalBreakSeconds => {
                Cell::Duration(format_with_color(secs(row.total_break_seconds), false))
            }
            ReportColumn::ActualWorkingSeconds => {
                Cell::Duration(format_with_color(secs(row.actual_working_seconds), false))
            }

            ReportColumn::DiffLog => Cell::Duration(format_with_color(secs(row.diff_log), true)),
            ReportColumn::ActualDiffLog => {
                Cell::Duration(format_with_color(secs(row.actual_diff_log), true))
            }

            ReportColumn::TotalTargetSeconds => {
                Cell::Text(format_plain(secs(row.total_target_seconds)))
            }
            ReportColumn::ExpectedBreakHours => {
                Cell::Text(format_plain(secs(row.expected_break_hours)))
            }
        }
    }
}

pub struct FormatContext {
    pub date_format: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Duration(ColoredDuration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    Ansi,
    Html,
    Plain,
}

impl ReportStyle {
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "ansi" => Ok(ReportStyle::Ansi),
            "html" => Ok(ReportStyle::Html),
            "plain" | "text" => Ok(ReportStyle::Plain),
            other => Err(AppError::Config(format!("unknown report style: {other}"))),
        }
    }
}

impl Cell {
    pub fn render(&self, style: ReportStyle) -> String {
        match (self, style) {
            (Cell::Text(t), ReportStyle::Ansi) => colorize_optional(t),
            (Cell::Text(t), _) => t.clone(),
            (Cell::Duration(d), ReportStyle::Ansi) => {
                if d.text.is_empty() {
                    colorize_optional("")
                } else {
                    d.to_ansi()
                }
            }
            (Cell::Duration(d), ReportStyle::Html) => d.to_html(),
            (Cell::Duration(d), ReportStyle::Plain) => d.text.clone(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Cell::Text(t) => t,
            Cell::Duration(d) => &d.text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportData {
    pub filters: ReportFilters,
    pub columns: Vec<ReportColumn>,
    pub rows: Vec<ReportRow>,
    pub total: Option<ReportRow>,
}

pub struct WorkHourReport;

impl WorkHourReport {
    /// Load the non-cancelled workdays of the filtered month, ordered by date,
    /// plus a totals row when there is at least one row.
    pub fn execute(conn: &Connection, filters: &ReportFilters) -> AppResult<ReportData> {
        let days = all_days_of_month(filters.year, filters.month);
        let (Some(first), Some(last)) = (days.first().copied(), days.last().copied()) else {
            return Err(AppError::InvalidMonth(format!(
                "{}-{}",
                filters.year, filters.month
            )));
        };

        let rows: Vec<ReportRow> = workdays_between(conn, &filters.employee, first, last)?
            .iter()
            .map(ReportRow::from)
            .collect();

        let total = (!rows.is_empty()).then(|| ReportRow::totals(&rows));

        Ok(ReportData {
            filters: filters.clone(),
            columns: ReportColumn::DEFAULT.to_vec(),
            rows,
            total,
        })
    }
}

impl ReportData {
    pub fn with_columns(mut self, columns: &[ReportColumn]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    fn all_rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().chain(self.total.iter())
    }

    /// Formatted cells, one vector per row (totals last).
    pub fn cells(&self, date_format: &str) -> Vec<Vec<Cell>> {
        let ctx = FormatContext {
            date_format: date_format.to_string(),
            year: self.filters.year,
        };
        self.all_rows()
            .map(|r| self.columns.iter().map(|c| c.format(r, &ctx)).collect())
            .collect()
    }

    pub fn render(&self, style: ReportStyle, date_format: &str) -> String {
        match style {
            ReportStyle::Html => self.render_html(date_format),
            _ => self.render_table(style, date_format),
        }
    }

    fn render_table(&self, style: ReportStyle, date_format: &str) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                if c.is_duration() {
                    Column::right(c.label())
                } else {
                    Column::left(c.label())
                }
            })
            .collect();

        let mut table = Table::new(columns);
        for row in self.cells(date_format) {
            table.add_row(row.iter().map(|c| c.render(style)).collect());
        }
        table.render()
    }

    fn render_html(&self, date_format: &str) -> String {
        let mut out = String::from("<table>\n<tr>");
        for c in &self.columns {
            out.push_str(&format!("<th>{}</th>", c.label()));
        }
        out.push_str("</tr>\n");

        for row in self.cells(date_format) {
            out.push_str("<tr>");
            for cell in row {
                out.push_str(&format!("<td>{}</td>", cell.render(ReportStyle::Html)));
            }
            out.push_str("</tr>\n");
        }

        out.push_str("</table>\n");
        out
    }
}
