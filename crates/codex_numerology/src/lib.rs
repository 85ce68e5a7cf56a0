//! Numerology reduction for the business codex.
//!
//! This crate provides:
//! - Decimal digit sums and single-digit reduction
//! - Life Path from a `YYYY-MM-DD` birth date (month + day + reduced year)
//! - Destiny from a full name via the Pythagorean letter table, keeping
//!   master numbers 11, 22, 33 and 44 intact
//! - Business archetype classification from the combined numbers
//!
//! Every entry point is total: malformed input yields 0, never an error.

pub mod archetype;
pub mod destiny;
pub mod life_path;
pub mod reduce;

pub use archetype::{ALL_ARCHETYPES, BusinessArchetype};
pub use destiny::{calculate_destiny, letter_value, name_letter_sum};
pub use life_path::{calculate_life_path, life_path_from_parts};
pub use reduce::{MASTER_NUMBERS, digit_sum, is_master_number, reduce_keeping_masters, reduce_to_digit};
