//! Timestamp codec for the created/updated fields
//!
//! Timestamps are local wall-clock values without a zone.

use chrono::{Local, NaiveDateTime, Timelike};

/// Pattern used inside header fields (`YYYY/MM/DD HH:mm:ss`)
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render a timestamp for a header field
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp written by [`format_timestamp`]
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT)
}

/// Drop sub-second precision, which the header cannot hold
pub fn truncate(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}

/// Current local time, to the second
pub fn now() -> NaiveDateTime {
    truncate(Local::now().naive_local())
}
