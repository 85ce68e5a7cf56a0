//! Destiny number from a full name (Pythagorean letter table).
//!
//! ```text
//! 1  2  3  4  5  6  7  8  9
//! a  b  c  d  e  f  g  h  i
//! j  k  l  m  n  o  p  q  r
//! s  t  u  v  w  x  y  z
//! ```

use tracing::debug;

use crate::reduce::reduce_keeping_masters;

/// Pythagorean value of a letter, case-insensitive. Anything else is 0.
pub const fn letter_value(c: char) -> u32 {
    match c.to_ascii_lowercase() {
        c @ 'a'..='z' => (c as u32 - 'a' as u32) % 9 + 1,
        _ => 0,
    }
}

/// Raw (unreduced) letter sum of a name.
pub fn name_letter_sum(full_name: &str) -> u32 {
    full_name.chars().map(letter_value).sum()
}

/// Destiny number: letter sum reduced by digit sum unless it lands on a
/// master number. Empty or letter-free names yield 0.
pub fn calculate_destiny(full_name: &str) -> u32 {
    let raw = name_letter_sum(full_name);
    if raw == 0 {
        debug!("name has no letters, destiny defaults to 0");
    }
    reduce_keeping_masters(raw)
}
