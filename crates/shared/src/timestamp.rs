//! Wall-clock timestamps as stored in the event log.

use chrono::{Local, NaiveDateTime};

/// Column format of the log's timestamp cells, e.g. `2024-09-01 18:30:05`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp the way the log stores it.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current server-local time, truncated to whole seconds by the format.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}
