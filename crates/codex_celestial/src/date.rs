//! Birth date and time of day.
//!
//! `BirthDate` accepts ISO-like `YYYY-MM-DD` (month and day may be one or
//! two digits) and rejects dates that do not exist on the Gregorian
//! calendar. `hour_offset` is the lenient reader used for bearing angles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Gregorian calendar date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Construct a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::Month(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateError::Day { month, day });
        }
        Ok(Self { year, month, day })
    }
}

impl FromStr for BirthDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::Shape {
                expected: "YYYY-MM-DD",
                input: s.to_string(),
            });
        };
        if month.len() > 2 || day.len() > 2 {
            return Err(DateError::Shape {
                expected: "YYYY-MM-DD",
                input: s.to_string(),
            });
        }
        Self::new(
            parse_digits("year", year)?,
            parse_digits("month", month)?,
            parse_digits("day", day)?,
        )
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// 24-hour time of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BirthTime {
    pub hour: u32,
    pub minute: u32,
}

impl BirthTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, DateError> {
        if hour > 23 || minute > 59 {
            return Err(DateError::Time { hour, minute });
        }
        Ok(Self { hour, minute })
    }
}

impl FromStr for BirthTime {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((hour, minute)) = s.split_once(':') else {
            return Err(DateError::Shape {
                expected: "HH:MM",
                input: s.to_string(),
            });
        };
        Self::new(parse_digits("hour", hour)?, parse_digits("minute", minute)?)
    }
}

impl std::fmt::Display for BirthTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Hour component of a time-of-birth string, for bearing offsets.
///
/// Reads the leading (optionally signed) integer of the text before the
/// first `:`. No range check is applied; `"25:00"` yields 25. Anything
/// without a leading integer yields 0.
pub fn hour_offset(time_of_birth: &str) -> i64 {
    let head = time_of_birth.split(':').next().unwrap_or_default().trim_start();
    let (sign, digits) = match head.as_bytes().first() {
        Some(b'-') => (-1, &head[1..]),
        Some(b'+') => (1, &head[1..]),
        _ => (1, head),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|h| sign * h).unwrap_or(0)
}

/// Gregorian leap year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`. 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn parse_digits<T: FromStr>(field: &'static str, value: &str) -> Result<T, DateError> {
    let invalid = || DateError::Number {
        field,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}
