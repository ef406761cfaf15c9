//! All SQL for entries, deployments, document settings and saved
//! locations. Times and dates are stored as zero-padded TEXT
//! (`YYYY-MM-DD`, `HH:MM`, empty string for "no time").

use crate::errors::{AppError, AppResult};
use crate::models::deployment::Deployment;
use crate::models::document::TimesheetDocument;
use crate::models::entry::Entry;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::BTreeSet;

pub const SETTING_EMPLOYEE_NAME: &str = "employee_name";
pub const SETTING_BASE_OVERTIME: &str = "base_overtime";

fn parse_db_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_db_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

fn time_to_db(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

fn map_entry_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let date: String = row.get(1)?;
    let start: String = row.get(3)?;
    let end: String = row.get(4)?;

    Ok(Entry {
        id: row.get(0)?,
        date: parse_db_date(&date)?,
        location: row.get(2)?,
        start: parse_db_time(&start),
        end: parse_db_time(&end),
        child_sick: row.get::<_, i64>(5)? != 0,
        deployments: Vec::new(),
    })
}

fn map_deployment_row(row: &Row<'_>) -> rusqlite::Result<(i64, Deployment)> {
    let start: String = row.get(3)?;
    let end: String = row.get(4)?;

    Ok((
        row.get(1)?,
        Deployment {
            id: row.get(0)?,
            location: row.get(2)?,
            start: parse_db_time(&start),
            end: parse_db_time(&end),
        },
    ))
}

// ------------------------------------------------
// Entries
// ------------------------------------------------

fn insert_deployments(conn: &Connection, entry_id: i64, deployments: &[Deployment]) -> AppResult<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO deployments (entry_id, location, start_time, end_time)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for dep in deployments {
        stmt.execute(params![
            entry_id,
            dep.location,
            time_to_db(dep.start),
            time_to_db(dep.end)
        ])?;
    }
    Ok(())
}

/// Insert a new entry (id assigned by the database) and its deployments.
/// Returns the assigned id.
pub fn insert_entry(conn: &Connection, entry: &Entry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (date, location, start_time, end_time, child_sick, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.date_str(),
            entry.location,
            time_to_db(entry.start),
            time_to_db(entry.end),
            entry.child_sick as i64,
            Local::now().to_rfc3339(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    insert_deployments(conn, id, &entry.deployments)?;
    Ok(id)
}

/// Insert an entry keeping the id it already carries (import path).
/// A duplicate id fails the primary key constraint, which rolls the
/// surrounding import transaction back.
pub fn insert_entry_with_id(conn: &Connection, entry: &Entry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (id, date, location, start_time, end_time, child_sick, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.id,
            entry.date_str(),
            entry.location,
            time_to_db(entry.start),
            time_to_db(entry.end),
            entry.child_sick as i64,
            Local::now().to_rfc3339(),
        ],
    )?;
    insert_deployments(conn, entry.id, &entry.deployments)?;
    Ok(())
}

/// Update an existing entry in place, replacing its deployment list.
pub fn update_entry(conn: &Connection, entry: &Entry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE entries
         SET date = ?1, location = ?2, start_time = ?3, end_time = ?4, child_sick = ?5
         WHERE id = ?6",
        params![
            entry.date_str(),
            entry.location,
            time_to_db(entry.start),
            time_to_db(entry.end),
            entry.child_sick as i64,
            entry.id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(entry.id));
    }

    // deployments have no independent lifecycle: replace the whole list
    conn.execute("DELETE FROM deployments WHERE entry_id = ?1", params![entry.id])?;
    insert_deployments(conn, entry.id, &entry.deployments)?;
    Ok(())
}

/// Delete an entry; its deployments go with it (cascade).
pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Entry> {
    let entry = conn
        .query_row(
            "SELECT id, date, location, start_time, end_time, child_sick
             FROM entries WHERE id = ?1",
            params![id],
            map_entry_row,
        )
        .optional()?
        .ok_or(AppError::EntryNotFound(id))?;

    let mut entry = entry;
    let mut stmt = conn.prepare(
        "SELECT id, entry_id, location, start_time, end_time
         FROM deployments WHERE entry_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map(params![id], map_deployment_row)?;
    for r in rows {
        entry.deployments.push(r?.1);
    }
    Ok(entry)
}

/// Load the whole entry collection with deployments attached.
pub fn load_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut entries = Vec::new();

    {
        let mut stmt = conn.prepare(
            "SELECT id, date, location, start_time, end_time, child_sick
             FROM entries ORDER BY date ASC, start_time ASC, id ASC",
        )?;
        let rows = stmt.query_map([], map_entry_row)?;
        for r in rows {
            entries.push(r?);
        }
    }

    let mut stmt = conn.prepare(
        "SELECT id, entry_id, location, start_time, end_time
         FROM deployments ORDER BY entry_id ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_deployment_row)?;
    for r in rows {
        let (entry_id, dep) = r?;
        if let Some(entry) = entries.iter_mut().find(|e| e.id == entry_id) {
            entry.deployments.push(dep);
        }
    }

    Ok(entries)
}

pub fn clear_entries(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM deployments", [])?;
    conn.execute("DELETE FROM entries", [])?;
    Ok(())
}

// ------------------------------------------------
// Settings
// ------------------------------------------------

pub fn get_setting(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn employee_name(conn: &Connection) -> AppResult<String> {
    Ok(get_setting(conn, SETTING_EMPLOYEE_NAME)?.unwrap_or_default())
}

pub fn base_overtime(conn: &Connection) -> AppResult<f64> {
    Ok(get_setting(conn, SETTING_BASE_OVERTIME)?
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0))
}

// ------------------------------------------------
// Saved locations
// ------------------------------------------------

pub fn add_saved_location(conn: &Connection, name: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO saved_locations (name) VALUES (?1)",
        params![name],
    )?;
    Ok(())
}

pub fn load_saved_locations(conn: &Connection) -> AppResult<BTreeSet<String>> {
    let mut stmt = conn.prepare("SELECT name FROM saved_locations ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = BTreeSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

// ------------------------------------------------
// Whole document
// ------------------------------------------------

pub fn load_document(conn: &Connection) -> AppResult<TimesheetDocument> {
    Ok(TimesheetDocument {
        employee_name: employee_name(conn)?,
        entries: load_entries(conn)?,
        saved_locations: load_saved_locations(conn)?,
        base_overtime: base_overtime(conn)?,
    })
}

/// Replace the stored document wholesale, all-or-nothing.
/// Used by import and full reset: any failure rolls everything back and
/// the previous document stays untouched.
pub fn replace_document(conn: &mut Connection, doc: &TimesheetDocument) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM deployments", [])?;
    tx.execute("DELETE FROM entries", [])?;
    tx.execute("DELETE FROM saved_locations", [])?;
    tx.execute("DELETE FROM settings", [])?;

    tx.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)",
        params![SETTING_EMPLOYEE_NAME, doc.employee_name],
    )?;
    tx.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)",
        params![SETTING_BASE_OVERTIME, doc.base_overtime.to_string()],
    )?;

    for name in &doc.saved_locations {
        tx.execute(
            "INSERT OR IGNORE INTO saved_locations (name) VALUES (?1)",
            params![name],
        )?;
    }

    for entry in &doc.entries {
        if entry.id > 0 {
            insert_entry_with_id(&tx, entry)?;
        } else {
            insert_entry(&tx, entry)?;
        }
    }

    tx.commit()?;
    Ok(())
}
