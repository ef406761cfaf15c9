use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_entries, replace_document};
use crate::errors::AppResult;
use crate::models::document::TimesheetDocument;
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { entries_only } = cmd {
        let prompt = if *entries_only {
            "Delete ALL entries? Settings and saved locations are kept."
        } else {
            "Reset the WHOLE document (entries, settings, saved locations)?"
        };

        if !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if *entries_only {
            clear_entries(&pool.conn)?;
            let _ = ttlog(&pool.conn, "reset", "entries", "All entries cleared");
            success("All entries have been cleared.");
        } else {
            replace_document(&mut pool.conn, &TimesheetDocument::default())?;
            let _ = ttlog(&pool.conn, "reset", "document", "Document reset");
            success("Document has been reset.");
        }
    }
    Ok(())
}
