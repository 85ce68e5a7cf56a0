//! Error types for birth date and time parsing.

use thiserror::Error;

/// Errors from parsing a calendar date or time of day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DateError {
    /// Input did not have the expected `YYYY-MM-DD` / `HH:MM` shape.
    #[error("expected {expected}, got {input:?}")]
    Shape {
        expected: &'static str,
        input: String,
    },
    /// A component was not a decimal number.
    #[error("invalid number in {field}: {value:?}")]
    Number { field: &'static str, value: String },
    /// Month outside 1..=12.
    #[error("month {0} out of range")]
    Month(u32),
    /// Day outside the month's length.
    #[error("day {day} out of range for month {month}")]
    Day { month: u32, day: u32 },
    /// Hour or minute outside the 24-hour clock.
    #[error("time {hour:02}:{minute:02} out of range")]
    Time { hour: u32, minute: u32 },
}
