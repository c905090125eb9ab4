//! [`DateTimeRange`]: a "from" and "to" specifier plus the range-level
//! display string and resolution.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::Timestamp;
use crate::error::{RangeError, Result};
use crate::format::{format_date_string_for_ui_with, plural_suffix, FormatOptions};
use crate::specifier::{DateSpecifier, Position, TimeUnit};

/// Separator between the two endpoints in [`DateTimeRange::range_string_for_ui`].
pub const RANGE_SEPARATOR: &str = " → ";

/// A pair of endpoints.
///
/// Nothing checks that `from` comes before `to`; call
/// [`validate`](Self::validate) when that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimeRange {
    from: DateSpecifier,
    to: DateSpecifier,
}

/// A range evaluated against a concrete anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Default for DateTimeRange {
    /// The last hour, ending now.
    fn default() -> Self {
        Self {
            from: DateSpecifier::relative(TimeUnit::Hour, 1),
            to: DateSpecifier::now(),
        }
    }
}

impl DateTimeRange {
    /// Build a range; a missing side takes its [`Default`] value.
    pub fn new(from: Option<DateSpecifier>, to: Option<DateSpecifier>) -> Self {
        let default = Self::default();
        Self {
            from: from.unwrap_or(default.from),
            to: to.unwrap_or(default.to),
        }
    }

    pub fn from(&self) -> &DateSpecifier {
        &self.from
    }

    pub fn to(&self) -> &DateSpecifier {
        &self.to
    }

    /// The `from` endpoint for [`Position::From`], the `to` endpoint otherwise.
    pub fn date_for_position(&self, position: Position) -> &DateSpecifier {
        if position == Position::From {
            &self.from
        } else {
            &self.to
        }
    }

    /// Replace the `from` endpoint for [`Position::From`], the `to` endpoint otherwise.
    pub fn set_date_for_position(&mut self, date: DateSpecifier, position: Position) {
        if position == Position::From {
            self.from = date;
        } else {
            self.to = date;
        }
    }

    /// The display string for the whole range, in the local timezone.
    ///
    /// # Examples
    ///
    /// ```
    /// use timerange::{DateSpecifier, DateTimeRange, TimeUnit};
    ///
    /// assert_eq!(DateTimeRange::default().range_string_for_ui(), "Last 1 hour");
    ///
    /// let range = DateTimeRange::new(Some(DateSpecifier::relative(TimeUnit::Day, 2)), None);
    /// assert_eq!(range.range_string_for_ui(), "Last 2 days");
    /// ```
    pub fn range_string_for_ui(&self) -> String {
        self.range_string_for_ui_with(&FormatOptions::default())
    }

    /// The display string for the whole range.
    ///
    /// A relative range ending "now" renders as a trailing window
    /// (`"Last 3 hours"`). Anything else renders both endpoints joined by
    /// [`RANGE_SEPARATOR`], with the `to` endpoint's date portion dropped when
    /// it repeats the `from` endpoint's date portion. That comparison is
    /// textual: the text before the first comma of `from`, followed by a
    /// comma, is removed from the first place it occurs in `to`.
    pub fn range_string_for_ui_with(&self, options: &FormatOptions) -> String {
        if let (
            DateSpecifier::Relative { unit, value },
            DateSpecifier::Relative { value: 0, .. },
        ) = (self.from, self.to)
        {
            return format!("Last {value} {unit}{}", plural_suffix(value));
        }

        let from = format_date_string_for_ui_with(&self.from, options);
        let to = format_date_string_for_ui_with(&self.to, options);
        let to = strip_repeated_date(&from, &to);
        trace!(%from, %to, "formatted range endpoints");
        format!("{from}{RANGE_SEPARATOR}{to}")
    }

    /// Both endpoints as instants, evaluated at `anchor`.
    pub fn resolve(&self, anchor: Timestamp) -> ResolvedRange {
        let resolved = ResolvedRange {
            start: self.from.resolve(anchor),
            end: self.to.resolve(anchor),
        };
        trace!(%anchor, start = %resolved.start, end = %resolved.end, "resolved range");
        resolved
    }

    /// [`resolve`](Self::resolve) against the current time.
    pub fn resolve_now(&self) -> ResolvedRange {
        self.resolve(Utc::now())
    }

    /// Check that the range does not run backwards when evaluated at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Inverted`] if the resolved start is after the
    /// resolved end. An empty range (start equal to end) is accepted.
    pub fn validate(&self, anchor: Timestamp) -> Result<ResolvedRange> {
        let resolved = self.resolve(anchor);
        if resolved.start > resolved.end {
            debug!(start = %resolved.start, end = %resolved.end, "rejecting inverted range");
            return Err(RangeError::Inverted {
                start: resolved.start.to_rfc3339(),
                end: resolved.end.to_rfc3339(),
            });
        }
        Ok(resolved)
    }
}

/// Remove `from`'s date portion (plus its comma) from the first place it
/// appears in `to`.
fn strip_repeated_date(from: &str, to: &str) -> String {
    let date = from.split(',').next().unwrap_or(from);
    to.replacen(&format!("{date},"), "", 1)
}

// ── Tests ───────────────────────────────────────────────────────────────────
