//! Human-readable strings for date specifiers.
//!
//! Absolute instants use one fixed layout: unpadded day, abbreviated month,
//! four-digit year, then a 12-hour clock time (`"15 Jan 2024, 3:45 PM"`).
//! The text before the first comma is the date portion;
//! [`DateTimeRange::range_string_for_ui`](crate::DateTimeRange::range_string_for_ui)
//! relies on that.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use chrono_tz::Tz;

use crate::clock::Timestamp;
use crate::specifier::DateSpecifier;

/// `strftime` layout for absolute instants.
pub const ABSOLUTE_FORMAT: &str = "%-d %b %Y, %-I:%M %p";

/// Which timezone absolute instants are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The host's local timezone.
    #[default]
    Local,
    /// A fixed IANA timezone.
    Named(Tz),
}

/// Options for [`format_date_string_for_ui_with`] and
/// [`DateTimeRange::range_string_for_ui_with`](crate::DateTimeRange::range_string_for_ui_with).
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub timezone: DisplayZone,
}

impl FormatOptions {
    pub fn in_timezone(tz: Tz) -> Self {
        Self {
            timezone: DisplayZone::Named(tz),
        }
    }
}

/// Format a single endpoint for display, in the local timezone.
///
/// # Examples
///
/// ```
/// use timerange::{format_date_string_for_ui, DateSpecifier, TimeUnit};
///
/// assert_eq!(format_date_string_for_ui(&DateSpecifier::now()), "now");
/// assert_eq!(
///     format_date_string_for_ui(&DateSpecifier::relative(TimeUnit::Day, 2)),
///     "2 days ago"
/// );
/// ```
pub fn format_date_string_for_ui(spec: &DateSpecifier) -> String {
    format_date_string_for_ui_with(spec, &FormatOptions::default())
}

/// Format a single endpoint for display.
///
/// - Relative `0` → `"now"`
/// - Relative `n` → `"{n} {unit} ago"`, with the unit pluralized when `n > 1`
/// - Absolute → [`ABSOLUTE_FORMAT`] in the configured timezone
pub fn format_date_string_for_ui_with(spec: &DateSpecifier, options: &FormatOptions) -> String {
    match *spec {
        DateSpecifier::Relative { value: 0, .. } => "now".to_string(),
        DateSpecifier::Relative { unit, value } => {
            format!("{value} {unit}{} ago", plural_suffix(value))
        }
        DateSpecifier::Absolute { instant } => format_instant_in(instant, options.timezone),
    }
}

fn format_instant_in(instant: Timestamp, zone: DisplayZone) -> String {
    match zone {
        DisplayZone::Local => format_instant(&instant.with_timezone(&Local)),
        DisplayZone::Named(tz) => format_instant(&instant.with_timezone(&tz)),
    }
}

/// Render a datetime with [`ABSOLUTE_FORMAT`] in its own timezone.
pub fn format_instant<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: fmt::Display,
{
    dt.format(ABSOLUTE_FORMAT).to_string()
}

/// `"s"` when `value` needs a plural unit, otherwise empty.
pub(crate) fn plural_suffix(value: u32) -> &'static str {
    if value > 1 {
        "s"
    } else {
        ""
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specifier::TimeUnit;
    use chrono::Utc;
    use proptest::prelude::*;

    fn utc() -> FormatOptions {
        FormatOptions::in_timezone(chrono_tz::Tz::UTC)
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateSpecifier {
        DateSpecifier::absolute(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn test_relative_zero_is_now() {
        for unit in [TimeUnit::Minute, TimeUnit::Hour, TimeUnit::Day] {
            assert_eq!(
                format_date_string_for_ui(&DateSpecifier::relative(unit, 0)),
                "now"
            );
        }
    }

    #[test]
    fn test_relative_one_is_singular() {
        let spec = DateSpecifier::relative(TimeUnit::Minute, 1);
        assert_eq!(format_date_string_for_ui(&spec), "1 minute ago");
    }

    #[test]
    fn test_relative_many_is_plural() {
        let spec = DateSpecifier::relative(TimeUnit::Hour, 12);
        assert_eq!(format_date_string_for_ui(&spec), "12 hours ago");
    }

    #[test]
    fn test_absolute_afternoon() {
        let s = format_date_string_for_ui_with(&at(2024, 1, 15, 15, 45), &utc());
        assert_eq!(s, "15 Jan 2024, 3:45 PM");
    }

    #[test]
    fn test_absolute_minutes_are_padded() {
        let s = format_date_string_for_ui_with(&at(2024, 3, 5, 9, 5), &utc());
        assert_eq!(s, "5 Mar 2024, 9:05 AM");
    }

    #[test]
    fn test_absolute_midnight_and_noon() {
        let midnight = format_date_string_for_ui_with(&at(2024, 12, 31, 0, 0), &utc());
        let noon = format_date_string_for_ui_with(&at(2024, 12, 31, 12, 0), &utc());
        assert_eq!(midnight, "31 Dec 2024, 12:00 AM");
        assert_eq!(noon, "31 Dec 2024, 12:00 PM");
    }

    #[test]
    fn test_absolute_in_named_timezone() {
        // 20:45 UTC in January is 15:45 EST.
        let options = FormatOptions::in_timezone(chrono_tz::America::New_York);
        let s = format_date_string_for_ui_with(&at(2024, 1, 15, 20, 45), &options);
        assert_eq!(s, "15 Jan 2024, 3:45 PM");
    }

    #[test]
    fn test_absolute_timezone_can_change_the_date() {
        let options = FormatOptions::in_timezone(chrono_tz::Asia::Tokyo);
        let s = format_date_string_for_ui_with(&at(2024, 1, 15, 20, 45), &options);
        assert_eq!(s, "16 Jan 2024, 5:45 AM");
    }

    #[test]
    fn test_absolute_local_has_date_portion() {
        let s = format_date_string_for_ui(&at(2024, 6, 15, 12, 0));
        assert!(s.contains(", "), "got: {s}");
        assert!(s.contains("2024"), "got: {s}");
    }

    proptest! {
        #[test]
        fn prop_relative_format(value in 1u32..100_000, unit_idx in 0usize..3) {
            let unit = [TimeUnit::Minute, TimeUnit::Hour, TimeUnit::Day][unit_idx];
            let s = format_date_string_for_ui(&DateSpecifier::relative(unit, value));
            let suffix = if value > 1 { "s" } else { "" };
            prop_assert_eq!(s, format!("{} {}{} ago", value, unit.as_str(), suffix));
        }
    }
}
