//! # timerange
//!
//! Date ranges for UI pickers: each end of a range is either relative
//! ("3 hours ago", "now") or absolute (a fixed instant). The crate renders
//! ranges as short human strings and resolves them to concrete instants.
//!
//! ## Modules
//!
//! - [`specifier`] — [`TimeUnit`], [`Position`] and the [`DateSpecifier`] sum type
//! - [`range`] — [`DateTimeRange`]: the from/to pair, its display string and resolution
//! - [`format`] — Per-endpoint display strings and [`FormatOptions`]
//! - [`parse`] — `FromStr` for specifiers, units and positions
//! - [`clock`] — [`Timestamp`] and wall-clock "hours ago" arithmetic
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use timerange::{DateSpecifier, DateTimeRange, Position, TimeUnit};
//!
//! let mut range = DateTimeRange::default();
//! assert_eq!(range.range_string_for_ui(), "Last 1 hour");
//!
//! range.set_date_for_position(DateSpecifier::relative(TimeUnit::Minute, 30), Position::From);
//! assert_eq!(range.range_string_for_ui(), "Last 30 minutes");
//! ```

pub mod clock;
pub mod error;
pub mod format;
pub mod parse;
pub mod range;
pub mod specifier;

pub use clock::{date_hours_ago, date_hours_ago_from, Timestamp};
pub use error::RangeError;
pub use format::{
    format_date_string_for_ui, format_date_string_for_ui_with, DisplayZone, FormatOptions,
};
pub use parse::parse_timestamp;
pub use range::{DateTimeRange, ResolvedRange};
pub use specifier::{DateSpecifier, Position, TimeUnit};
