//! Date-key helpers. Keys are timezone-naive `YYYY-MM-DD` strings; parsing
//! goes through explicit calendar components so a stored key can never shift
//! by a day under the viewer's timezone.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

const DATE_KEY_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_FORMAT: &[FormatItem<'static>] =
    format_description!("[weekday repr:short], [month repr:short] [day padding:none]");

/// Parse a canonical `YYYY-MM-DD` key into a calendar date.
pub fn parse_date_key(key: &str) -> Option<Date> {
    Date::parse(key, DATE_KEY_FORMAT).ok()
}

/// Render a date key as e.g. `"Fri, Jan 5"`. A key that does not parse is
/// returned unchanged so a malformed server value still displays something.
pub fn format_for_display(key: &str) -> String {
    match parse_date_key(key) {
        Some(date) => date
            .format(DISPLAY_FORMAT)
            .unwrap_or_else(|_| key.to_string()),
        None => key.to_string(),
    }
}

/// Canonical key for a calendar date.
pub fn date_key(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Canonical key for today's local calendar date. Falls back to UTC when the
/// local offset cannot be determined (e.g. in a multithreaded environment).
pub fn today_key() -> String {
    let now = OffsetDateTime::now_utc();
    let local = match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(_) => now,
    };
    date_key(local.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_keys_only() {
        assert!(parse_date_key("2024-01-05").is_some());
        assert!(parse_date_key("2024-1-5").is_none());
        assert!(parse_date_key("01/05/2024").is_none());
        assert!(parse_date_key("2024-13-01").is_none());
        assert!(parse_date_key("").is_none());
    }

    #[test]
    fn display_format_matches_calendar_day() {
        // January 5, 2024 was a Friday, whatever timezone this test runs in.
        assert_eq!(format_for_display("2024-01-05"), "Fri, Jan 5");
        assert_eq!(format_for_display("2024-12-25"), "Wed, Dec 25");
    }

    #[test]
    fn malformed_keys_display_verbatim() {
        assert_eq!(format_for_display("not-a-date"), "not-a-date");
    }

    #[test]
    fn date_key_round_trips() {
        let date = parse_date_key("2023-02-28").unwrap();
        assert_eq!(date_key(date), "2023-02-28");
    }

    #[test]
    fn today_key_is_canonical() {
        let key = today_key();
        assert!(parse_date_key(&key).is_some(), "bad key: {key}");
    }
}
