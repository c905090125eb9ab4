//! Error types for timerange operations.
//!
//! The model itself never fails; these only surface from text parsing and
//! from the opt-in [`DateTimeRange::validate`](crate::DateTimeRange::validate) check.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid time unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid date specifier: {0}")]
    InvalidSpecifier(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Inverted range: start {start} is after end {end}")]
    Inverted { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, RangeError>;
