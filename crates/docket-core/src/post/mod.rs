//! Post model for docket
//!
//! Posts are JSON documents published by the authoring pipeline. Field
//! names on the wire are camelCase; the model round-trips unknown-free
//! so a loaded document can be re-emitted unchanged.

mod types;

pub use types::{Attachment, Post};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a post date string leniently.
///
/// Accepts RFC 3339 timestamps, naive datetimes, and bare dates
/// (treated as midnight UTC). Returns `None` for anything else;
/// an unparseable date is never an error, it just contributes no
/// recency to ranking.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}
