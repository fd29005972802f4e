// src/export/logic.rs

use crate::core::report::ReportData;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::report_to_export;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High level export of a work hour report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `data` to `file` in `format`.
    ///
    /// The path must be absolute after `~` expansion. An existing file is only
    /// replaced with `force` or after confirmation.
    pub fn export_report(
        data: &ReportData,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let rows = report_to_export(data);

        if rows.is_empty() {
            warning("No workdays found for the selected month.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path),
            ExportFormat::Json => export_json(&rows, &path),
            ExportFormat::Xlsx => export_xlsx(&rows, &path),
        }
    }
}
