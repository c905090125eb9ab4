//! Text input for specifiers, units and positions.
//!
//! Accepted [`DateSpecifier`] forms:
//!
//! - `"now"`
//! - `"N unit ago"` (`"3 hours ago"`, `"1 day ago"`, `"90 min ago"`)
//! - shorthand `"Nm"`, `"Nh"`, `"Nd"` (`"15m"`, `"3h"`)
//! - an RFC 3339 instant (`"2024-01-15T15:45:00Z"`)

use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::clock::Timestamp;
use crate::error::RangeError;
use crate::specifier::{DateSpecifier, Position, TimeUnit};

impl FromStr for TimeUnit {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minute),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            _ => Err(RangeError::InvalidUnit(format!("'{}'", s.trim()))),
        }
    }
}

impl FromStr for Position {
    type Err = RangeError;

    /// Strict counterpart of [`Position::from_label`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "from" => Ok(Position::From),
            "to" => Ok(Position::To),
            _ => Err(RangeError::InvalidPosition(format!("'{}'", s.trim()))),
        }
    }
}

impl FromStr for DateSpecifier {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_lowercase();

        let spec = try_now(&normalized)
            .or_else(|| try_ago(&normalized))
            .or_else(|| try_shorthand(&normalized))
            .or_else(|| try_rfc3339(trimmed))
            .ok_or_else(|| {
                RangeError::InvalidSpecifier(format!("cannot parse specifier: '{trimmed}'"))
            })?;

        trace!(input = trimmed, ?spec, "parsed date specifier");
        Ok(spec)
    }
}

fn try_now(s: &str) -> Option<DateSpecifier> {
    (s == "now").then(DateSpecifier::now)
}

/// `"N unit ago"`, with any amount of whitespace between the words.
fn try_ago(s: &str) -> Option<DateSpecifier> {
    let rest = s.strip_suffix("ago")?;
    let mut words = rest.split_whitespace();
    let value = words.next()?.parse::<u32>().ok()?;
    let unit = words.next()?.parse::<TimeUnit>().ok()?;
    if words.next().is_some() {
        return None;
    }
    Some(DateSpecifier::relative(unit, value))
}

/// `"15m"`, `"3h"`, `"2d"`.
fn try_shorthand(s: &str) -> Option<DateSpecifier> {
    let split = s.find(|c: char| !c.is_ascii_digit())?;
    let (digits, unit) = s.split_at(split);
    if digits.is_empty() || !matches!(unit, "m" | "h" | "d") {
        return None;
    }
    let value = digits.parse::<u32>().ok()?;
    let unit = unit.parse::<TimeUnit>().ok()?;
    Some(DateSpecifier::relative(unit, value))
}

fn try_rfc3339(s: &str) -> Option<DateSpecifier> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| DateSpecifier::absolute(dt.with_timezone(&Utc)))
        .ok()
}

/// Parse an RFC 3339 string into a [`Timestamp`].
///
/// # Errors
///
/// Returns [`RangeError::InvalidDatetime`] if `s` is not RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<Timestamp, RangeError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RangeError::InvalidDatetime(format!("'{}': {}", s.trim(), e)))
}

// ── Tests ───────────────────────────────────────────────────────────────────
