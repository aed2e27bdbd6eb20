use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Lenient calendar-date parsing for feed-supplied strings.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps, and
/// plain `YYYY-MM-DD` dates. The time-of-day component is discarded so that
/// classification compares date-only values and cannot drift across an
/// intraday reference time. Returns `None` for anything unparsable.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// `"YYYY-MM"` bucket key for trend grouping, `None` when unparsable.
/// Lexicographic order of these keys is chronological order.
pub fn year_month_key(raw: &str) -> Option<String> {
    parse_calendar_date(raw).map(|date| date.format("%Y-%m").to_string())
}
