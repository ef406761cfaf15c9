//! Operation audit log, kept in the database next to the data it audits.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one row to the internal log table.
/// Callers treat this as best-effort: a failed log write never aborts
/// the operation being logged.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
        params![now, operation, target, message],
    )?;
    Ok(())
}
