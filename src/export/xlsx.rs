// src/export/xlsx.rs

use crate::core::formatter::Tone;
use crate::errors::{AppError, AppResult};
use crate::export::model::{export_to_row, get_headers};
use crate::export::{ReportExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Columns whose text follows the tone of `difference_seconds`.
const TONED_COLUMNS: [usize; 2] = [9, 10];

/// Export XLSX with banded rows, auto column widths and red/green differences.
pub(crate) fn export_xlsx(rows: &[ReportExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, item) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };
        let tone = Tone::of(item.difference_seconds);

        for (col, value) in export_to_row(item).iter().enumerate() {
            let font = if TONED_COLUMNS.contains(&col) {
                tone_color(tone)
            } else {
                None
            };

            write_cell(worksheet, row, col as u16, value, band, font)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Negative => Some(Color::RGB(0xC00000)),
        Tone::Positive => Some(Color::RGB(0x00A000)),
        Tone::Neutral => None,
    }
}

/// Write one cell: integers as numbers, everything else as text.
fn write_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    font: Option<Color>,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if let Some(c) = font {
        fmt = fmt.set_font_color(c);
    }

    if let Ok(num) = s.parse::<i64>() {
        worksheet
            .write_with_format(row, col, num as f64, &fmt.set_align(FormatAlign::Right))
            .map_err(to_export_error)?;
    } else {
        worksheet
            .write_with_format(row, col, s, &fmt)
            .map_err(to_export_error)?;
    }

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
