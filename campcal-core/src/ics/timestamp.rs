//! Local date-time tokens for DTSTART/DTEND.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{CampCalError, CampCalResult};

/// Leading HH:MM of a time field such as "19:00 🔥".
static TIME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}:\d{2})").expect("valid time regex"));

/// Parse a schedule date and time into a naive local date-time.
pub(crate) fn parse_local(date: &str, time: &str) -> CampCalResult<NaiveDateTime> {
    let clean_time = TIME_PREFIX
        .captures(time)
        .and_then(|caps| caps.get(1))
        .map_or(time.trim(), |m| m.as_str());

    NaiveDateTime::parse_from_str(&format!("{date} {clean_time}"), "%Y-%m-%d %H:%M").map_err(
        |_| CampCalError::InvalidDateTime {
            date: date.to_string(),
            time: time.to_string(),
        },
    )
}

/// Format as `YYYYMMDDTHHMMSS`. The timezone is attached by the caller.
pub fn format_timestamp(date: &str, time: &str) -> CampCalResult<String> {
    Ok(parse_local(date, time)?.format("%Y%m%dT%H%M%S").to_string())
}

/// The HH:MM token used in UIDs, or the raw time if it has none.
pub(crate) fn time_token(time: &str) -> &str {
    TIME_PREFIX
        .captures(time)
        .and_then(|caps| caps.get(1))
        .map_or(time, |m| m.as_str())
}
