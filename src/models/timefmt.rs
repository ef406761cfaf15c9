//! Serde helper for optional `HH:MM` times.
//! Special-kind entries keep empty time fields in the JSON document, so
//! `None` maps to `""` and back.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
        None => serializer.serialize_str(""),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map(Some)
        .map_err(serde::de::Error::custom)
}
