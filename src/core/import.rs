use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::document::TimesheetDocument;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Import a JSON document, replacing the current one wholesale.
    ///
    /// All-or-nothing: the document is fully parsed and validated before
    /// anything is written, and the write itself is one transaction.
    /// Declining the confirmation prompt leaves everything untouched and
    /// is not an error.
    pub fn apply(pool: &mut DbPool, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::Import(format!("cannot read '{}': {e}", path.display())))?;

        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| AppError::Import(format!("malformed JSON: {e}")))?;

        let doc = TimesheetDocument::from_json(&value)?;

        if !force
            && !crate::ui::messages::ask_confirmation(&format!(
                "Importing '{}' will replace the current document ({} entries incoming).",
                path.display(),
                doc.entries.len()
            ))
        {
            info("Import cancelled.");
            return Ok(());
        }

        crate::db::queries::replace_document(&mut pool.conn, &doc)?;

        let _ = ttlog(
            &pool.conn,
            "import",
            file,
            &format!("Document imported ({} entries)", doc.entries.len()),
        );

        success(format!(
            "Imported {} entries from {}.",
            doc.entries.len(),
            path.display()
        ));
        Ok(())
    }
}
