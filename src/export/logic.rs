use crate::core::report::{build_report, report_filename};
use crate::db::pool::DbPool;
use crate::db::queries::load_document;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ExportGuard, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::entries_to_exports;
use crate::export::pdf_export::export_pdf;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;
use std::path::PathBuf;

/// High-level export dispatch.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the current document.
    ///
    /// - `file`: output path; when omitted it is derived from the format
    ///   and the report month
    /// - `month`: `YYYY-MM`; doubles as the report month and the engine's
    ///   current-month reference; defaults to today's month
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: Option<&String>,
        month: Option<&String>,
        force: bool,
    ) -> AppResult<()> {
        let month = resolve_month(month)?;

        let path: PathBuf = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_filename(&format, month)),
        };

        ensure_writable(&path, force)?;

        // one export per target at a time
        let _guard = ExportGuard::acquire(&path)?;

        let doc = load_document(&pool.conn)?;

        if doc.entries.is_empty() {
            warning("No entries to export yet.");
        }

        let rows = entries_to_exports(&doc.entries);

        match format {
            ExportFormat::Json => export_json(&doc, &path)?,
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Pdf => {
                let report = build_report(&doc, month);
                export_pdf(&report, &rows, &path)?;
            }
        }

        Ok(())
    }
}

pub(crate) fn resolve_month(month: Option<&String>) -> AppResult<NaiveDate> {
    match month {
        Some(m) => date::parse_month(m),
        None => Ok(date::today()),
    }
}

fn default_filename(format: &ExportFormat, month: NaiveDate) -> String {
    match format {
        ExportFormat::Pdf => report_filename(month),
        ExportFormat::Json => format!("stundenzettel_{}.json", month.format("%Y-%m")),
        ExportFormat::Csv => format!("stundenzettel_{}.csv", month.format("%Y-%m")),
    }
}
