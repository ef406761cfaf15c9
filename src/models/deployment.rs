use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A sub-interval of work nested under an on-call entry.
/// Deployments are exclusively owned by their parent entry: they are
/// deleted with it and have no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    #[serde(default)]
    pub id: i64,
    pub location: String,
    #[serde(default, rename = "startTime", with = "super::timefmt")]
    pub start: Option<NaiveTime>,
    #[serde(default, rename = "endTime", with = "super::timefmt")]
    pub end: Option<NaiveTime>,
}

impl Deployment {
    pub fn new(location: impl Into<String>, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        Self {
            id: 0,
            location: location.into(),
            start,
            end,
        }
    }

    pub fn start_str(&self) -> String {
        self.start.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
    }

    pub fn end_str(&self) -> String {
        self.end.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
    }
}
