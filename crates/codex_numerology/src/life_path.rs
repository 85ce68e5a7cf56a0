//! Life Path number from a birth date.
//!
//! Life Path = (month + day) + reduce_to_digit(year digit sum). The final
//! sum is never reduced, so values such as 33 or 40 are expected.

use tracing::warn;

use crate::reduce::reduce_to_digit;

/// Life Path from already-split date components.
///
/// `year` is the literal year text; its digits are summed and reduced to a
/// single digit. An empty year contributes 0. Returns `None` if `year`
/// contains a non-digit.
pub fn life_path_from_parts(year: &str, month: u32, day: u32) -> Option<u32> {
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year_sum: u32 = year.bytes().map(|b| u32::from(b - b'0')).sum();
    Some(
        month
            .saturating_add(day)
            .saturating_add(reduce_to_digit(year_sum)),
    )
}

/// Life Path from a `YYYY-MM-DD` string.
///
/// Fewer than three `-`separated components, or a component that does not
/// parse, yields 0.
pub fn calculate_life_path(date_of_birth: &str) -> u32 {
    match parse_components(date_of_birth) {
        Some(value) => value,
        None => {
            warn!(date_of_birth, "malformed birth date, life path defaults to 0");
            0
        }
    }
}

fn parse_components(date_of_birth: &str) -> Option<u32> {
    let mut parts = date_of_birth.trim().split('-');
    let year = parts.next()?;
    let month = leading_int(parts.next()?)?;
    let day = leading_int(parts.next()?)?;
    life_path_from_parts(year, month, day)
}

/// Leading unsigned integer of `s`, after trimming whitespace.
fn leading_int(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}
