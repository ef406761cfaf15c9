use super::deployment::Deployment;
use super::kind::Kind;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One logged day-record: regular work, vacation, sick, on-call or pause.
///
/// Identity is the `id`, unique across the whole collection. The semantic
/// kind is derived from `location` and never stored (see [`Kind`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: i64,
    pub date: NaiveDate, // "YYYY-MM-DD", no time zone
    pub location: String,
    #[serde(default, rename = "startTime", with = "super::timefmt")]
    pub start: Option<NaiveTime>,
    #[serde(default, rename = "endTime", with = "super::timefmt")]
    pub end: Option<NaiveTime>,
    #[serde(default, rename = "isChildSick")]
    pub child_sick: bool,
    #[serde(default)]
    pub deployments: Vec<Deployment>,
}

impl Entry {
    pub fn new(date: NaiveDate, location: impl Into<String>) -> Self {
        Self {
            id: 0,
            date,
            location: location.into(),
            start: None,
            end: None,
            child_sick: false,
            deployments: Vec::new(),
        }
    }

    /// Derived kind, recomputed from the location text on every call.
    pub fn kind(&self) -> Kind {
        Kind::classify(&self.location)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
    }

    pub fn end_str(&self) -> String {
        self.end.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
    }
}
