use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::export::model::{EntryExport, exports_to_table, get_headers};
use crate::export::pdf::PdfManager;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Render the report (summary block + entry table) to a PDF file.
pub(crate) fn export_pdf(report: &Report, rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let table = exports_to_table(rows);

    let mut pdf = PdfManager::new();
    pdf.write_report(&report.title, &report.summary_lines, &headers, &table);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
