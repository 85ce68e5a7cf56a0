//! Celestial bearings for the business codex.
//!
//! This crate provides:
//! - `BirthDate` / `BirthTime` parsing with calendar validation
//! - Tropical sun sign lookup from month and day
//! - The four bearings (Sun, Moon, Rising, Jupiter) as angles in `[0, 360)`
//!
//! Lookups never fail: a malformed date resolves to [`SunSign::DEFAULT`]
//! and an unparsable time of birth contributes an hour offset of 0.

pub mod bearing;
pub mod date;
pub mod error;
pub mod sun_sign;
pub mod util;

pub use bearing::{
    ALL_BEARINGS, Bearing, BearingAngles, jupiter_angle, moon_angle, rising_angle,
};
pub use date::{BirthDate, BirthTime, days_in_month, hour_offset, is_leap_year};
pub use error::DateError;
pub use sun_sign::{ALL_SIGNS, SunSign, SunSignInfo, get_sun_sign, sun_sign_from_month_day};
pub use util::normalize_360;
