use crate::core::store::validate_entry;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{add_saved_location, insert_entry, load_entry, update_entry};
use crate::errors::{AppError, AppResult};
use crate::models::deployment::Deployment;
use crate::models::entry::Entry;
use crate::models::kind::Kind;
use crate::ui::messages::success;
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveTime};

/// Parse a `--deployment` argument: `LOCATION,HH:MM,HH:MM`.
pub fn parse_deployment_spec(spec: &str) -> AppResult<Deployment> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(AppError::Validation(format!(
            "invalid deployment '{spec}': expected LOCATION,HH:MM,HH:MM"
        )));
    }

    let start = parse_time(parts[1]).ok_or_else(|| AppError::InvalidTime(parts[1].into()))?;
    let end = parse_time(parts[2]).ok_or_else(|| AppError::InvalidTime(parts[2].into()))?;

    Ok(Deployment::new(parts[0], Some(start), Some(end)))
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        location: String,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        child_sick: bool,
        deployments: Vec<Deployment>,
    ) -> AppResult<i64> {
        let mut entry = Entry::new(date, location);
        entry.start = start;
        entry.end = end;
        entry.child_sick = child_sick;
        entry.deployments = deployments;

        validate_entry(&entry)?;

        let id = insert_entry(&pool.conn, &entry)?;

        // remember plain work locations for later suggestions
        if entry.kind() == Kind::Regular {
            add_saved_location(&pool.conn, entry.location.trim())?;
        }

        let _ = ttlog(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("{} entry on {}", entry.kind().as_str(), entry.date_str()),
        );

        success(format!(
            "Added {} entry #{} on {}.",
            entry.kind().as_str(),
            id,
            entry.date_str()
        ));

        Ok(id)
    }
}

/// High-level business logic for the `edit` command.
/// Unset options keep the stored value; any `--deployment` replaces the
/// whole deployment list.
pub struct EditLogic;

#[derive(Debug, Default)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub child_sick: Option<bool>,
    pub deployments: Option<Vec<Deployment>>,
}

impl EditLogic {
    pub fn apply(pool: &mut DbPool, id: i64, patch: EntryPatch) -> AppResult<()> {
        let mut entry = load_entry(&pool.conn, id)?;

        if let Some(d) = patch.date {
            entry.date = d;
        }
        if let Some(loc) = patch.location {
            entry.location = loc;
        }

        let times_given = patch.start.is_some() || patch.end.is_some();
        if let Some(t) = patch.start {
            entry.start = Some(t);
        }
        if let Some(t) = patch.end {
            entry.end = Some(t);
        }
        if let Some(cs) = patch.child_sick {
            entry.child_sick = cs;
        }

        let deployments_given = patch.deployments.is_some();
        if let Some(deps) = patch.deployments {
            entry.deployments = deps;
        }

        // A location change can flip the derived kind. Stored fields that
        // the new kind cannot carry are dropped, unless the user supplied
        // them in this very edit (then validation rejects the edit).
        let kind = entry.kind();
        if kind.is_special() && !times_given {
            entry.start = None;
            entry.end = None;
        }
        if !kind.allows_deployments() && !deployments_given {
            entry.deployments.clear();
        }

        validate_entry(&entry)?;
        update_entry(&pool.conn, &entry)?;

        let _ = ttlog(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("{} entry on {}", kind.as_str(), entry.date_str()),
        );

        success(format!("Entry #{} updated.", id));
        Ok(())
    }
}
