//! Entry store rules: what may be stored, and in which order entries are
//! shown. The durable collection itself lives behind `db::queries`; every
//! write path goes through [`validate_entry`] first so invalid spans are
//! never stored.

use crate::core::time_calc::elapsed_hours;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::kind::Kind;

/// Validate an entry before insert/update. Nothing is mutated on failure.
pub fn validate_entry(entry: &Entry) -> AppResult<()> {
    if entry.location.trim().is_empty() {
        return Err(AppError::Validation("location must not be blank".into()));
    }

    let kind = entry.kind();

    if kind.requires_times() && elapsed_hours(entry.start, entry.end) <= 0.0 {
        return Err(AppError::Validation(
            "end time must be later than start time".into(),
        ));
    }

    // time inputs are disabled for special kinds in the editing contract
    if kind.is_special() && (entry.start.is_some() || entry.end.is_some()) {
        return Err(AppError::Validation(format!(
            "{} entries carry no start/end times",
            kind.as_str()
        )));
    }

    if !entry.deployments.is_empty() && !kind.allows_deployments() {
        return Err(AppError::Validation(
            "deployments are only allowed on on-call entries".into(),
        ));
    }

    for dep in &entry.deployments {
        if dep.location.trim().is_empty() {
            return Err(AppError::Validation(
                "deployment location must not be blank".into(),
            ));
        }
        if elapsed_hours(dep.start, dep.end) <= 0.0 {
            return Err(AppError::Validation(
                "deployment end time must be later than its start time".into(),
            ));
        }
    }

    Ok(())
}

/// Canonical display order: on-call entries after all other entries
/// regardless of date; within each partition ascending by date, then by
/// start time (entries without a start time first).
pub fn sort_for_display(entries: &mut [Entry]) {
    entries.sort_by_key(|e| (e.kind() == Kind::OnCall, e.date, e.start));
}
