//! Schema migration engine.
//! Every migration is applied at most once; applied migrations are
//! recorded in the log table (`operation = 'migration_applied'`).

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, params};

const MIGRATIONS: &[(&str, &str)] = &[(
    "v1_initial_schema",
    r#"
    CREATE TABLE IF NOT EXISTS entries (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        date        TEXT NOT NULL,
        location    TEXT NOT NULL,
        start_time  TEXT NOT NULL DEFAULT '',
        end_time    TEXT NOT NULL DEFAULT '',
        child_sick  INTEGER NOT NULL DEFAULT 0,
        created_at  TEXT NOT NULL DEFAULT ''
    );

    CREATE TABLE IF NOT EXISTS deployments (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        entry_id    INTEGER NOT NULL REFERENCES entries(id) ON DELETE CASCADE,
        location    TEXT NOT NULL,
        start_time  TEXT NOT NULL DEFAULT '',
        end_time    TEXT NOT NULL DEFAULT ''
    );

    CREATE INDEX IF NOT EXISTS idx_deployments_entry ON deployments(entry_id);
    CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);

    CREATE TABLE IF NOT EXISTS settings (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS saved_locations (
        name TEXT PRIMARY KEY
    );
    "#,
)];

/// Make sure the log table exists before anything else: the migration
/// ledger itself lives there.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(stmt.exists(params![name])?)
}

fn record_applied(conn: &Connection, name: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, 'Migration applied')",
        params![now, name],
    )?;
    Ok(())
}

/// Apply all migrations that have not been applied yet.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (name, sql) in MIGRATIONS {
        if is_applied(conn, name)? {
            continue;
        }

        conn.execute_batch(sql)
            .map_err(|e| AppError::Migration(format!("{name}: {e}")))?;

        record_applied(conn, name)?;
    }

    Ok(())
}
