//! Custom serde helpers for the catalog's wire formats.

use chrono::{DateTime, Utc};

/// Format the catalog uses for `modified`, `start`, `end` and comic dates,
/// e.g. `2013-09-18T15:54:04-0400`.
const CATALOG_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a catalog timestamp into UTC.
///
/// Returns `None` for placeholders the upstream uses for unknown dates
/// (`-0001-11-30T00:00:00-0500`) and for anything else that doesn't parse.
pub fn parse_catalog_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with('-') {
        return None;
    }
    DateTime::parse_from_str(raw, CATALOG_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Event `start`/`end` use a plain `YYYY-MM-DD HH:MM:SS` form without offset.
pub fn parse_catalog_datetime(raw: &str) -> Option<DateTime<Utc>> {
    parse_catalog_date(raw).or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    })
}

/// Collapse missing, `null` and whitespace-only strings to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}
