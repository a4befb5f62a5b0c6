//! ISO 8601 durations for temporal resolutions.
//!
//! Duration format: PnYnMnDTnHnMnS or PnW
//! Where:
//! - P = period designator (required)
//! - nY = years, nM = months (before T), nD = days
//! - T = time separator
//! - nH = hours, nM = minutes (after T), nS = seconds
//! - nW = weeks (cannot mix with other components)
//!
//! Resolutions entered as clock time (`01:30`) or as text (`2 hours`,
//! `30min`) are normalized to the ISO form on decode.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a value cannot be read as a duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a duration: '{0}'")]
pub struct DurationError(pub String);

/// A temporal resolution stored as a normalized ISO 8601 duration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemporalResolution(String);

impl TemporalResolution {
    /// Parse a duration from ISO 8601, `HH:MM` clock notation, or text.
    pub fn parse(value: &str) -> Result<Self, DurationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DurationError(value.to_string()));
        }
        if is_iso8601_duration(trimmed) {
            return Ok(Self(trimmed.to_string()));
        }
        try_parse_clock(trimmed)
            .or_else(|| try_parse_text_duration(trimmed))
            .map(Self)
            .ok_or_else(|| DurationError(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemporalResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TemporalResolution {
    type Error = DurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TemporalResolution> for String {
    fn from(value: TemporalResolution) -> Self {
        value.0
    }
}

/// Check if a string is a well-formed ISO 8601 duration.
///
/// Components must appear in order and at least one must be present.
fn is_iso8601_duration(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('P') else {
        return false;
    };

    // Week format: PnW
    if let Some(stripped) = rest.strip_suffix('W') {
        return is_number(stripped);
    }

    let (date, time) = match rest.split_once('T') {
        Some((date, time)) => {
            if time.is_empty() {
                return false;
            }
            (date, Some(time))
        }
        None => (rest, None),
    };

    let date_ok = components_in_order(date, &['Y', 'M', 'D']);
    let time_ok = time.is_none_or(|t| components_in_order(t, &['H', 'M', 'S']));
    date_ok && time_ok && (!date.is_empty() || time.is_some())
}

/// Validate `<number><designator>` pairs appearing in the given order.
fn components_in_order(value: &str, designators: &[char]) -> bool {
    let mut remaining = value;
    let mut next = 0usize;
    while !remaining.is_empty() {
        let Some(pos) = remaining.find(|c: char| c.is_ascii_alphabetic()) else {
            return false;
        };
        let designator = remaining[pos..].chars().next().unwrap_or_default();
        let Some(offset) = designators[next..].iter().position(|d| *d == designator) else {
            return false;
        };
        if !is_number(&remaining[..pos]) {
            return false;
        }
        next += offset + 1;
        remaining = &remaining[pos + designator.len_utf8()..];
    }
    true
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.parse::<f64>().is_ok()
}

/// Parse clock notation `HH:MM` or `HH:MM:SS`.
fn try_parse_clock(value: &str) -> Option<String> {
    let parts: Vec<&str> = value.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }
    let mut numbers = [0i64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }
    let [hours, minutes, seconds] = numbers;
    build_iso8601_duration(0, 0, 0, 0, hours, minutes, seconds)
}

/// Try to parse text duration description.
fn try_parse_text_duration(value: &str) -> Option<String> {
    let lower = value.to_lowercase();
    let mut components = [0i64; 7];

    // Split by spaces and parse each component
    let parts: Vec<&str> = lower.split_whitespace().collect();
    let mut i = 0;
    let mut matched = false;

    while i < parts.len() {
        let part = parts[i];

        if let Ok(num) = part.parse::<i64>()
            && let Some(unit) = parts.get(i + 1)
            && let Some(slot) = unit_slot(unit)
        {
            components[slot] = components[slot].checked_add(num)?;
            matched = true;
            i += 2;
            continue;
        }

        // Combined format like "5days" or "2h"
        let split = part.find(|c: char| !c.is_ascii_digit())?;
        let (num, unit) = part.split_at(split);
        let num = num.parse::<i64>().ok()?;
        let slot = unit_slot(unit)?;
        components[slot] = components[slot].checked_add(num)?;
        matched = true;
        i += 1;
    }

    if !matched {
        return None;
    }
    let [years, months, weeks, days, hours, minutes, seconds] = components;
    build_iso8601_duration(years, months, weeks, days, hours, minutes, seconds)
}

/// Map a unit word to its component slot (years .. seconds).
fn unit_slot(unit: &str) -> Option<usize> {
    let slot = match unit {
        u if u.starts_with("year") || u == "y" => 0,
        u if u.starts_with("month") => 1,
        u if u.starts_with("week") || u == "w" => 2,
        u if u.starts_with("day") || u == "d" => 3,
        "h" | "hr" | "hrs" => 4,
        u if u.starts_with("hour") => 4,
        "m" | "min" | "mins" => 5,
        u if u.starts_with("minute") => 5,
        "s" | "sec" | "secs" => 6,
        u if u.starts_with("second") => 6,
        _ => return None,
    };
    Some(slot)
}

/// Build ISO 8601 duration string from components.
fn build_iso8601_duration(
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
) -> Option<String> {
    // If weeks only, use week format
    if weeks != 0
        && years == 0
        && months == 0
        && days == 0
        && hours == 0
        && minutes == 0
        && seconds == 0
    {
        return Some(format!("P{weeks}W"));
    }

    let has_date = years != 0 || months != 0 || days != 0 || weeks != 0;
    let has_time = hours != 0 || minutes != 0 || seconds != 0;

    if !has_date && !has_time {
        return None;
    }

    let mut result = String::from("P");

    if years != 0 {
        result.push_str(&format!("{years}Y"));
    }
    if months != 0 {
        result.push_str(&format!("{months}M"));
    }
    // Convert weeks to days
    let total_days = weeks.checked_mul(7)?.checked_add(days)?;
    if total_days != 0 {
        result.push_str(&format!("{total_days}D"));
    }

    if has_time {
        result.push('T');
        if hours != 0 {
            result.push_str(&format!("{hours}H"));
        }
        if minutes != 0 {
            result.push_str(&format!("{minutes}M"));
        }
        if seconds != 0 {
            result.push_str(&format!("{seconds}S"));
        }
    }

    Some(result)
}
