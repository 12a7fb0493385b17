//! Lenient ISO-8601 timestamp parsing for request payloads.
//!
//! Accepts RFC 3339 values with a `Z` or `±HH:MM` offset, a `T` or space
//! separator, optional fractional seconds, and `T`-separated times without
//! seconds. Offsets are dropped and the wall-clock time is kept.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, de};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 timestamp: {raw:?}")))
}
