// Small string/date helpers shared by the loader and the console summary.
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Length of the `YYYY-MM-DD` prefix of an update timestamp.
pub const DATE_LEN: usize = 10;

/// First ten characters of a timestamp. Shorter values come back whole.
///
/// Counts characters rather than bytes so a malformed value with
/// multi-byte text cannot split a code point.
pub fn date_part(timestamp: &str) -> &str {
    match timestamp.char_indices().nth(DATE_LEN) {
        Some((idx, _)) => &timestamp[..idx],
        None => timestamp,
    }
}

pub fn parse_date_safe(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
