//! Pure helpers that turn one log event into text.
//!
//! Nothing here touches shared state: every call returns a freshly owned
//! `String`, so concurrent dispatches can never interleave each other's
//! timestamp or tag.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::log::{constants::NO_COLOR, log_level::Level};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock time as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn render_timestamp() -> String {
    render_timestamp_at(&Local::now())
}

/// Formats an arbitrary instant with the same layout as [`render_timestamp`].
#[must_use]
pub fn render_timestamp_at<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The text placed between the brackets: the bare name, or the name wrapped in
/// the level's color and the reset escape.
#[must_use]
pub fn render_level_tag(level: &Level, color_enabled: bool) -> String {
    if color_enabled {
        format!("{}{}{}", level.color_code, level.name, NO_COLOR)
    } else {
        level.name.clone()
    }
}

/// `"{timestamp} {file}:{line} [{level_tag}] - {message}\n"`
#[must_use]
pub fn render_line(
    timestamp: &str,
    file: &str,
    line: u32,
    level_tag: &str,
    message: &str,
) -> String {
    format!("{timestamp} {file}:{line} [{level_tag}] - {message}\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::{constants::YELLOW, log_level::WARN};
    use chrono::{NaiveDate, Utc};

    fn warn_level() -> Level {
        Level::new("WARN", YELLOW, WARN)
    }

    #[test]
    fn timestamp_is_zero_padded() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(4, 5, 9))
            .expect("valid date")
            .and_utc();
        assert_eq!(render_timestamp_at(&at), "2024-03-07 04:05:09");
    }

    #[test]
    fn early_years_keep_four_digits() {
        let at = Utc.with_ymd_and_hms(987, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(render_timestamp_at(&at), "0987-12-31 23:59:59");
    }

    #[test]
    fn current_timestamp_has_fixed_layout() {
        let ts = render_timestamp();
        assert_eq!(ts.len(), 19, "unexpected timestamp: {ts}");
        let bytes = ts.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
    }

    #[test]
    fn tag_with_color() {
        let tag = render_level_tag(&warn_level(), true);
        assert_eq!(tag, "\x1b[0;33mWARN\x1b[0;m");
        assert!(tag.starts_with(YELLOW));
        assert!(tag.ends_with(NO_COLOR));
    }

    #[test]
    fn tag_without_color_is_bare_name() {
        let tag = render_level_tag(&warn_level(), false);
        assert_eq!(tag, "WARN");
        assert!(!tag.contains('\x1b'));
    }

    #[test]
    fn line_template() {
        let line = render_line("2024-01-02 03:04:05", "src/main.rs", 42, "INFO", "ready");
        assert_eq!(line, "2024-01-02 03:04:05 src/main.rs:42 [INFO] - ready\n");
    }
}
