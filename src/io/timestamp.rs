//! Locale timestamp parsing and display formatting
//!
//! The clock export writes timestamps as `25/11/2025 7:34:48 a. m.` with
//! Spanish AM/PM markers. Output cells use the same shape with a leading
//! apostrophe so spreadsheet clients keep them as text instead of
//! reinterpreting them as numeric dates.

use chrono::{NaiveDateTime, Timelike};

/// Spanish locale meridiem markers as they appear in the clock export
const MARKER_AM: &str = "a. m.";
const MARKER_PM: &str = "p. m.";

/// Parse a clock timestamp, `DD/MM/YYYY H:MM:SS a. m.|p. m.`.
///
/// Returns `None` for anything that does not match; the caller treats such
/// rows as unparseable observations. Plain `AM`/`PM` markers are accepted
/// as well since normalization leaves them untouched.
pub fn parse_mark(text: &str) -> Option<NaiveDateTime> {
    let normalized = text.trim().replace(MARKER_AM, "AM").replace(MARKER_PM, "PM");
    NaiveDateTime::parse_from_str(&normalized, "%d/%m/%Y %I:%M:%S %p").ok()
}

/// Render a timestamp for an output cell: leading apostrophe, day-first
/// date, 12-hour clock without a leading zero, locale meridiem marker.
pub fn format_mark(ts: NaiveDateTime) -> String {
    let (is_pm, hour) = ts.time().hour12();
    let marker = if is_pm { MARKER_PM } else { MARKER_AM };
    format!(
        "'{} {}:{:02}:{:02} {}",
        ts.format("%d/%m/%Y"),
        hour,
        ts.minute(),
        ts.second(),
        marker
    )
}

/// Render an optional slot value; empty slots become the empty string.
pub fn format_slot(ts: Option<NaiveDateTime>) -> String {
    ts.map(format_mark).unwrap_or_default()
}

/// Render an unclassified list, ascending order assumed, joined with ", ".
pub fn format_unclassified(timestamps: &[NaiveDateTime]) -> String {
    timestamps.iter().map(|ts| format_mark(*ts)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 25).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn parses_locale_morning_mark() {
        assert_eq!(parse_mark("25/11/2025 7:34:48 a. m."), Some(at(7, 34, 48)));
    }

    #[test]
    fn parses_locale_afternoon_mark() {
        assert_eq!(parse_mark("25/11/2025 6:05:09 p. m."), Some(at(18, 5, 9)));
    }

    #[test]
    fn parses_plain_am_pm_markers() {
        assert_eq!(parse_mark("25/11/2025 7:34:48 AM"), Some(at(7, 34, 48)));
    }

    #[test]
    fn rejects_garbage_and_iso_text() {
        assert_eq!(parse_mark("not a date"), None);
        assert_eq!(parse_mark("2025-11-25 07:34:48"), None);
        assert_eq!(parse_mark(""), None);
    }

    #[test]
    fn formats_with_apostrophe_and_no_leading_zero() {
        assert_eq!(format_mark(at(7, 34, 48)), "'25/11/2025 7:34:48 a. m.");
        assert_eq!(format_mark(at(18, 5, 9)), "'25/11/2025 6:05:09 p. m.");
    }

    #[test]
    fn noon_and_midnight_render_as_twelve() {
        assert_eq!(format_mark(at(0, 0, 1)), "'25/11/2025 12:00:01 a. m.");
        assert_eq!(format_mark(at(12, 0, 1)), "'25/11/2025 12:00:01 p. m.");
    }

    #[test]
    fn parse_format_agree_on_a_mark() {
        let text = "25/11/2025 1:02:03 p. m.";
        let ts = parse_mark(text).unwrap();
        assert_eq!(format_mark(ts), format!("'{text}"));
    }

    #[test]
    fn empty_slot_renders_empty() {
        assert_eq!(format_slot(None), "");
    }

    #[test]
    fn unclassified_list_joins_with_comma() {
        let joined = format_unclassified(&[at(8, 0, 10), at(8, 0, 30)]);
        assert_eq!(joined, "'25/11/2025 8:00:10 a. m., '25/11/2025 8:00:30 a. m.");
    }
}
