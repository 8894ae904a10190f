//! Reference-instant resolution for relative date expressions.
//!
//! Callers may pass an ISO-8601 timestamp. Anything missing or
//! unparsable silently falls back to the current local time.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Offset-aware layouts. `Z` is accepted as UTC.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Naive layouts, tried after the offset-aware ones.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a caller-supplied timestamp.
///
/// Offset-aware timestamps keep the wall-clock time of their own offset,
/// so "2025-08-22T23:30:00-05:00" resolves to August 22.
pub fn parse_reference(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    let with_offset = match trimmed.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => trimmed.to_string(),
    };
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, fmt) {
            return Some(dt.naive_local());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Resolve the reference instant for a request, falling back to now.
pub fn resolve_reference(raw: Option<&str>) -> NaiveDateTime {
    match raw.and_then(parse_reference) {
        Some(instant) => instant,
        None => {
            if let Some(value) = raw {
                tracing::debug!(len = value.len(), "Unparsable reference date, using now");
            }
            Local::now().naive_local()
        }
    }
}
