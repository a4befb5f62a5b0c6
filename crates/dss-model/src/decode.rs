//! Lenient field decoding from a JSON object tree.
//!
//! A value that is missing, `null`, or of the wrong shape decodes as absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Offset-free date-time layouts, read as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

pub(crate) fn field<T: DeserializeOwned>(record: &Map<String, Value>, key: &str) -> Option<T> {
    match record.get(key)? {
        Value::Null => None,
        value => T::deserialize(value).ok(),
    }
}

/// Decode every well-formed entry of an array field, skipping the rest.
pub(crate) fn list<T: DeserializeOwned>(record: &Map<String, Value>, key: &str) -> Vec<T> {
    match record.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Timestamp field; see [`parse_timestamp`].
pub(crate) fn timestamp(record: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    parse_timestamp(record.get(key)?.as_str()?)
}

/// Parse RFC 3339, falling back to offset-free date-times and plain dates
/// (midnight), both taken as UTC.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Nested record, if the field holds an object.
pub(crate) fn record<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    record.get(key)?.as_object()
}

/// String list with duplicates removed, first occurrence wins.
pub(crate) fn unique_strings(record: &Map<String, Value>, key: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in list::<String>(record, key) {
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}
