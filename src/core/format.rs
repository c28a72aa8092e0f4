// ChromaLog - core/format.rs
//
// Entry rendering and parameter sanitisation. Pure text transforms, fully
// deterministic given the entry (the timestamp is part of the entry, not
// read here).

use crate::core::model::LogEntry;
use chrono::{DateTime, Local};
use std::fmt::Display;

/// Timestamp prefix in 12-hour form with millisecond precision,
/// e.g. "03:25:07.412 PM".
pub fn timestamp_prefix(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%I:%M:%S%.3f %p").to_string()
}

/// Rendered form of an entry: timestamp, category glyph, body, and the
/// entry-terminating newline.
pub fn render(entry: &LogEntry) -> String {
    format!(
        "{} {} {}\n",
        timestamp_prefix(&entry.timestamp),
        entry.category.glyph(),
        entry.body
    )
}

/// Sanitise a parameter's text form: newlines and carriage returns are
/// removed first, then every occurrence of two consecutive spaces is removed
/// (so three spaces leave one, four leave none).
pub fn sanitise_param(raw: &str) -> String {
    raw.replace('\n', "").replace('\r', "").replace("  ", "")
}

/// Extend `body` with a rendered parameter list.
///
/// Absent parameters render as the literal "null"; present parameters are
/// sanitised via [`sanitise_param`]. Each item is followed by one newline.
/// An empty slice returns the body unchanged.
pub fn body_with_params<T: Display>(body: &str, params: &[Option<T>]) -> String {
    if params.is_empty() {
        return body.to_string();
    }
    let mut out = format!("{body} With parameters: ");
    for param in params {
        match param {
            Some(value) => out.push_str(&sanitise_param(&value.to_string())),
            None => out.push_str("null"),
        }
        out.push('\n');
    }
    out
}
