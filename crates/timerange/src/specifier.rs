//! Date specifiers: one endpoint of a [`DateTimeRange`](crate::DateTimeRange).
//!
//! A [`DateSpecifier`] is either *relative* ("3 hours ago", "now"), which is
//! re-resolved against the clock every time it is used, or *absolute*, a
//! fixed instant.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{date_hours_ago, Timestamp, DEFAULT_HOURS_AGO};

// ── TimeUnit ────────────────────────────────────────────────────────────────

/// Granularity of a relative specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// The singular display name (`"minute"`, `"hour"`, `"day"`).
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
        }
    }

    /// `value` of this unit as a duration.
    pub fn duration(self, value: u32) -> Duration {
        let value = i64::from(value);
        match self {
            TimeUnit::Minute => Duration::minutes(value),
            TimeUnit::Hour => Duration::hours(value),
            TimeUnit::Day => Duration::days(value),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Position ────────────────────────────────────────────────────────────────

/// Which end of a range is being read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    From,
    To,
}

impl Position {
    /// Map an untyped label to a position: `"from"` is [`Position::From`],
    /// every other label is [`Position::To`].
    ///
    /// Use [`str::parse`] instead to reject unknown labels.
    pub fn from_label(label: &str) -> Self {
        if label == Position::From.as_str() {
            Position::From
        } else {
            Position::To
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::From => "from",
            Position::To => "to",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DateSpecifier ───────────────────────────────────────────────────────────

/// One endpoint of a range.
///
/// Serialized with an explicit `"kind"` tag:
///
/// ```
/// use timerange::{DateSpecifier, TimeUnit};
///
/// let spec = DateSpecifier::relative(TimeUnit::Hour, 3);
/// let json = serde_json::to_string(&spec).unwrap();
/// assert_eq!(json, r#"{"kind":"relative","unit":"hour","value":3}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DateSpecifier {
    /// `value` units before the moment of evaluation. `value == 0` is "now".
    Relative { unit: TimeUnit, value: u32 },
    /// A fixed instant.
    Absolute { instant: Timestamp },
}

impl DateSpecifier {
    pub fn relative(unit: TimeUnit, value: u32) -> Self {
        DateSpecifier::Relative { unit, value }
    }

    /// The relative "now" (zero minutes ago).
    pub fn now() -> Self {
        DateSpecifier::Relative {
            unit: TimeUnit::Minute,
            value: 0,
        }
    }

    pub fn absolute(instant: Timestamp) -> Self {
        DateSpecifier::Absolute { instant }
    }

    /// An absolute specifier one wall-clock hour before now.
    ///
    /// The instant is captured here, once; it does not drift afterwards.
    pub fn absolute_default() -> Self {
        DateSpecifier::Absolute {
            instant: date_hours_ago(DEFAULT_HOURS_AGO),
        }
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, DateSpecifier::Relative { .. })
    }

    /// The concrete instant this specifier denotes when evaluated at `anchor`.
    ///
    /// Relative offsets that would leave chrono's representable range
    /// saturate at the earliest representable instant.
    pub fn resolve(&self, anchor: Timestamp) -> Timestamp {
        match *self {
            DateSpecifier::Relative { unit, value } => anchor
                .checked_sub_signed(unit.duration(value))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            DateSpecifier::Absolute { instant } => instant,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
