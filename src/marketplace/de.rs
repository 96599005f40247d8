//! Lenient scalar decoding for marketplace payloads.
//!
//! Numbers arrive either as JSON numbers or as numeric strings,
//! flags as `0`/`1`, and datetimes with or without seconds. Anything
//! else is a decode error.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO 8601 local datetime. An offset, if present, is
/// dropped in favor of the wall-clock time it was written in.
pub fn parse_local_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    to_f64(&value).ok_or_else(|| D::Error::custom(format!("expected a number, got {value}")))
}

pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_blank(&value) {
        return Ok(None);
    }
    to_f64(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected a number, got {value}")))
}

/// Whole hours such as `minimumHour`; `null` and `""` are unset.
pub fn opt_hours<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_blank(&value) {
        return Ok(None);
    }
    let parsed = match &value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected whole hours, got {value}")))
}

/// Star rating from 1 to 5, sent as a number or a numeric string.
pub fn rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u8>().ok(),
        _ => None,
    };
    parsed
        .filter(|stars| (1..=5).contains(stars))
        .ok_or_else(|| D::Error::custom(format!("expected a rating from 1 to 5, got {value}")))
}

/// Counts such as a page number, lenient like `opt_hours`.
pub fn opt_count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_hours(deserializer)?.map(|n| n as usize))
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(s) => match s.trim() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            _ => Err(D::Error::custom(format!("expected a flag, got {value}"))),
        },
        _ => Err(D::Error::custom(format!("expected a flag, got {value}"))),
    }
}

pub fn local_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_local_datetime(&value)
        .ok_or_else(|| D::Error::custom(format!("invalid datetime: {value}")))
}

pub fn opt_local_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse_local_datetime(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid datetime: {value}"))),
    }
}

/// Server timestamps (`createdAt`). Values without an offset are UTC.
pub fn opt_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(value.trim()) {
                return Ok(Some(dt.with_timezone(&Utc)));
            }
            LOCAL_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
                .map(|naive| Some(naive.and_utc()))
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {value}")))
        }
    }
}

/// Timestamps compared against the local calendar day. Values with an
/// offset are moved to local time, values without one are already
/// local.
pub fn opt_wall_clock<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(value.trim()) {
                return Ok(Some(dt.with_timezone(&Local).naive_local()));
            }
            LOCAL_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {value}")))
        }
    }
}
