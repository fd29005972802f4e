// src/export/model.rs

use crate::core::formatter::seconds_from_f64;
use crate::core::report::{ReportColumn, ReportData, ReportRow};
use crate::utils::date::weekday_name;
use serde::Serialize;

/// Flat report line for CSV / JSON / XLSX: raw seconds plus their rendered text.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub date: String,
    pub weekday: String,
    pub workday: String,
    pub status: String,
    pub worked_seconds: i64,
    pub worked: String,
    pub break_seconds: i64,
    pub target_seconds: i64,
    pub target: String,
    pub difference_seconds: i64,
    pub difference: String,
}

impl ReportExport {
    /// `cells` are the rendered DEFAULT columns of the same row.
    fn from_row(row: &ReportRow, cells: &[String], year: i32) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        Self {
            date: row
                .log_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| year.to_string()),
            weekday: row.log_date.map(weekday_name).unwrap_or("").to_string(),
            workday: row.name.clone(),
            status: row.status.clone(),
            worked_seconds: seconds_from_f64(row.total_work_seconds),
            worked: cell(2),
            break_seconds: seconds_from_f64(row.total_break_seconds),
            target_seconds: seconds_from_f64(row.total_target_seconds),
            target: cell(3),
            difference_seconds: seconds_from_f64(row.actual_diff_log),
            difference: cell(4),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "weekday",
        "workday",
        "status",
        "worked_seconds",
        "worked",
        "break_seconds",
        "target_seconds",
        "target",
        "difference_seconds",
        "difference",
    ]
}

pub(crate) fn export_to_row(e: &ReportExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.weekday.clone(),
        e.workday.clone(),
        e.status.clone(),
        e.worked_seconds.to_string(),
        e.worked.clone(),
        e.break_seconds.to_string(),
        e.target_seconds.to_string(),
        e.target.clone(),
        e.difference_seconds.to_string(),
        e.difference.clone(),
    ]
}

/// Flatten the report (totals row included) using the default columns.
pub fn report_to_export(data: &ReportData) -> Vec<ReportExport> {
    let plain = data
        .clone()
        .with_columns(&ReportColumn::DEFAULT);
    let cells = plain.cells("%Y-%m-%d");

    data.rows
        .iter()
        .chain(data.total.iter())
        .zip(cells)
        .map(|(row, cells)| {
            let texts: Vec<String> = cells.iter().map(|c| c.text().to_string()).collect();
            ReportExport::from_row(row, &texts, data.filters.year)
        })
        .collect()
}
