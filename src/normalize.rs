use crate::types::EventDate;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

// Characters allowed to survive date cleaning: digits, separators, colons,
// whitespace and ASCII letters (month names, weekday names, am/pm markers).
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Za-z/\-\s:]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M",
    "%B %d %Y %I:%M %p",
    "%b %d %Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m/%d/%y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%A %B %d %Y",
    "%A %d %B %Y",
];

/// Converts raw date text into an [`EventDate`].
///
/// Empty input yields `None`. Otherwise the text is stripped down to the
/// permitted character set, whitespace is collapsed, and an ordered list of
/// formats is tried. When nothing matches, the original text is carried
/// through unchanged as `Unparsed` so callers still have something to show.
pub fn normalize_date(raw: &str) -> Option<EventDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // ISO instants would not survive cleaning (the fractional dot and zone
    // offset get stripped), so try them on the raw text first.
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(EventDate::Parsed(instant.with_timezone(&Utc)));
    }

    let stripped = DISALLOWED.replace_all(trimmed, " ");
    let cleaned = WHITESPACE.replace_all(stripped.trim(), " ").to_string();

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(&cleaned, format) {
            return Some(EventDate::Parsed(Utc.from_utc_datetime(&datetime)));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(EventDate::Parsed(Utc.from_utc_datetime(&midnight)));
        }
    }

    Some(EventDate::Unparsed(trimmed.to_string()))
}

/// Resolves a possibly-relative link against a source's base URL.
///
/// Absolute URLs pass through unchanged, which makes repeated application a
/// no-op. Relative paths are joined with exactly one separating slash.
pub fn normalize_url(path: Option<&str>, base_url: &str) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    Some(format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}
