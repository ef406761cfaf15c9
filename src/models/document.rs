use super::entry::Entry;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// The persisted unit: everything a timesheet file contains.
///
/// Created empty on first run, mutated by every edit, replaced wholesale
/// on import and cleared on reset.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetDocument {
    pub employee_name: String,
    pub entries: Vec<Entry>,
    pub saved_locations: BTreeSet<String>,
    pub base_overtime: f64,
}

impl TimesheetDocument {
    /// Parse a document from imported JSON.
    ///
    /// The contract is deliberately lenient to stay forward-compatible:
    /// `entries` must be present and an array (otherwise the import is
    /// rejected and the caller leaves the current state untouched), while
    /// every other field falls back to its default when absent or
    /// wrong-typed.
    pub fn from_json(value: &Value) -> AppResult<Self> {
        let entries_value = value
            .get("entries")
            .ok_or_else(|| AppError::Import("missing 'entries' array".into()))?;

        if !entries_value.is_array() {
            return Err(AppError::Import("'entries' is not an array".into()));
        }

        let entries: Vec<Entry> = serde_json::from_value(entries_value.clone())
            .map_err(|e| AppError::Import(format!("malformed entry: {e}")))?;

        let employee_name = value
            .get("employeeName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let saved_locations: BTreeSet<String> = value
            .get("savedLocations")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let base_overtime = value
            .get("baseOvertime")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);

        Ok(Self {
            employee_name,
            entries,
            saved_locations,
            base_overtime,
        })
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
    }
}
