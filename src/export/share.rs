//! Share bundle: one zip with the PDF report and the JSON document,
//! ready for handoff to mail, chat or a file share.

use crate::core::report::{build_report, report_filename};
use crate::db::pool::DbPool;
use crate::db::queries::load_document;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ExportGuard, ensure_writable};
use crate::export::model::{entries_to_exports, exports_to_table, get_headers};
use crate::export::pdf::PdfManager;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct ShareLogic;

impl ShareLogic {
    /// Produce `stundenzettel_bundle_YYYY-MM.zip` in `dir`, containing
    /// the report PDF and the document JSON.
    ///
    /// The target directory is verified up front — before any artifact is
    /// rendered — and a declined overwrite prompt ends the operation
    /// without error.
    pub fn share(pool: &mut DbPool, dir: &str, month: NaiveDate, force: bool) -> AppResult<()> {
        let dir = Path::new(dir);

        // verify the target can take the bundle before doing any work
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        if !dir.is_dir() {
            return Err(AppError::Export(format!(
                "share target '{}' is not a directory",
                dir.display()
            )));
        }

        let bundle_path = dir.join(format!("stundenzettel_bundle_{}.zip", month.format("%Y-%m")));

        match ensure_writable(&bundle_path, force) {
            Ok(()) => {}
            Err(AppError::Export(_)) => {
                // user declined the overwrite: terminal, but not an error
                info("Share cancelled.");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        let _guard = ExportGuard::acquire(&bundle_path)?;

        let doc = load_document(&pool.conn)?;

        // render both artifacts in memory, then write the bundle at once
        let report = build_report(&doc, month);
        let rows = entries_to_exports(&doc.entries);

        let mut pdf = PdfManager::new();
        pdf.write_report(
            &report.title,
            &report.summary_lines,
            &get_headers(),
            &exports_to_table(&rows),
        );
        let pdf_bytes = pdf.into_bytes();

        let json_data = doc.to_json_pretty()?;

        let file = fs::File::create(&bundle_path)?;
        let mut zip = ZipWriter::new(file);
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file(report_filename(month), options)
            .map_err(std::io::Error::other)?;
        zip.write_all(&pdf_bytes)?;

        zip.start_file(
            format!("stundenzettel_{}.json", month.format("%Y-%m")),
            options,
        )
        .map_err(std::io::Error::other)?;
        zip.write_all(json_data.as_bytes())?;

        zip.finish().map_err(std::io::Error::other)?;

        let _ = crate::db::log::ttlog(
            &pool.conn,
            "share",
            &bundle_path.to_string_lossy(),
            "Share bundle created",
        );

        notify_export_success("Bundle", &bundle_path);
        Ok(())
    }
}
