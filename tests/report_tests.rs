mod common;
use chrono::NaiveDate;
use common::memory_pool;
use hrworkday::core::report::{
    Cell, ReportColumn, ReportFilters, ReportStyle, WorkHourReport,
};
use hrworkday::db::workdays::{cancel_workday, insert_workday};
use hrworkday::export::model::report_to_export;
use hrworkday::models::workday::Workday;
use rusqlite::Connection;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn add_workday(conn: &Connection, date: &str, worked_h: f64, target_h: f64) -> Workday {
    let mut wd = Workday::new("EMP-1", d(date), "ACME");
    wd.hours_worked = worked_h;
    wd.total_work_seconds = worked_h * 3600.0;
    wd.actual_working_hours = worked_h;
    wd.target_hours = target_h;
    wd.total_target_seconds = target_h * 3600.0;
    insert_workday(conn, &mut wd).unwrap();
    wd
}

#[test]
fn test_filters_parse_month_name() {
    let f = ReportFilters::new("September", 2025, "EMP-1").unwrap();
    assert_eq!(f.month, 9);
    assert!(f.title().contains("September 2025"));

    assert!(ReportFilters::new("Smarch", 2025, "EMP-1").is_err());
}

#[test]
fn test_report_rows_and_totals() {
    let pool = memory_pool();
    let conn = &pool.conn;

    add_workday(conn, "2025-09-02", 9.0, 8.0);
    add_workday(conn, "2025-09-01", 7.0, 8.0);
    let cancelled = add_workday(conn, "2025-09-03", 4.0, 8.0);
    cancel_workday(conn, &cancelled.name).unwrap();
    add_workday(conn, "2025-10-01", 8.0, 8.0);

    let filters = ReportFilters::new("September", 2025, "EMP-1").unwrap();
    let data = WorkHourReport::execute(conn, &filters).unwrap();

    assert_eq!(data.rows.len(), 2);
    assert_eq!(data.rows[0].log_date, Some(d("2025-09-01")));
    assert_eq!(data.rows[1].log_date, Some(d("2025-09-02")));
    assert_eq!(data.rows[0].actual_diff_log, -3600.0);
    assert_eq!(data.rows[1].diff_log, 3600.0);

    let total = data.total.as_ref().unwrap();
    assert!(total.is_total());
    assert_eq!(total.total_work_seconds, 16.0 * 3600.0);
    assert_eq!(total.actual_diff_log, 0.0);
}

#[test]
fn test_report_cells_are_coloured() {
    let pool = memory_pool();
    let conn = &pool.conn;
    add_workday(conn, "2025-09-01", 7.0, 8.0);
    add_workday(conn, "2025-09-02", 9.5, 8.0);

    let filters = ReportFilters::new("sep", 2025, "EMP-1").unwrap();
    let data = WorkHourReport::execute(conn, &filters).unwrap();
    let cells = data.cells("%d.%m.%Y");

    // columns: date, name, worked, target, difference
    assert_eq!(cells[0][0].text(), "Monday, 01.09.2025");
    assert_eq!(cells[0][2].text(), "7h");
    assert_eq!(cells[0][3].text(), "8h");
    assert_eq!(
        cells[0][4].render(ReportStyle::Html),
        "<span style='color:red'>-1h</span>"
    );
    assert_eq!(
        cells[1][4].render(ReportStyle::Html),
        "<span style='color:green'>1h 30m</span>"
    );

    // target is never coloured
    assert!(matches!(cells[0][3], Cell::Text(_)));

    // totals row shows the year in the date column
    assert_eq!(cells[2][0].text(), "2025");
}

#[test]
fn test_report_render_styles() {
    let pool = memory_pool();
    add_workday(&pool.conn, "2025-09-01", 7.0, 8.0);

    let filters = ReportFilters::new("September", 2025, "EMP-1").unwrap();
    let data = WorkHourReport::execute(&pool.conn, &filters)
        .unwrap()
        .with_columns(&ReportColumn::DETAILED);

    let html = data.render(ReportStyle::Html, "%Y-%m-%d");
    assert!(html.starts_with("<table>"));
    assert!(html.contains("<th>Difference</th>"));
    assert!(html.contains("color:red"));

    let plain = data.render(ReportStyle::Plain, "%Y-%m-%d");
    assert!(plain.contains("Monday, 2025-09-01"));
    assert!(!plain.contains('\x1b'));

    // an invalid pattern falls back to ISO dates
    let plain = data.render(ReportStyle::Plain, "%Q");
    assert!(plain.contains("2025-09-01"));

    assert!(ReportStyle::parse("markdown").is_err());
}

#[test]
fn test_report_export_rows() {
    let pool = memory_pool();
    add_workday(&pool.conn, "2025-09-01", 7.0, 8.0);

    let filters = ReportFilters::new("September", 2025, "EMP-1").unwrap();
    let data = WorkHourReport::execute(&pool.conn, &filters).unwrap();
    let rows = report_to_export(&data);

    assert!(!rows.is_empty());
    assert_eq!(rows[0].difference_seconds, -3600);
}

#[test]
fn test_report_empty_month() {
    let pool = memory_pool();
    let filters = ReportFilters::new("February", 2024, "EMP-1").unwrap();
    let data = WorkHourReport::execute(&pool.conn, &filters).unwrap();

    assert!(data.rows.is_empty());
    assert!(data.total.is_none());
}
