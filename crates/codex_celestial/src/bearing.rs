//! The four bearings radiating from the canvas center.
//!
//! Sun is the reference direction and always sits at 0. The other three are
//! seeded by the numerology values and the hour of birth:
//!
//! ```text
//! moon    = (destiny * 33 + hour * 10) mod 360
//! rising  = (life_path * 11 + hour * 5) mod 360
//! jupiter = ((life_path + destiny) * 7) mod 360
//! ```
//!
//! The modulo is Euclidean so a negative hour offset still lands in `[0, 360)`.

use serde::{Deserialize, Serialize};

/// One of the four bearings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bearing {
    Sun,
    Moon,
    Rising,
    Jupiter,
}

/// All bearings in drawing order.
pub const ALL_BEARINGS: [Bearing; 4] = [Bearing::Sun, Bearing::Moon, Bearing::Rising, Bearing::Jupiter];

impl Bearing {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Rising => "Rising",
            Self::Jupiter => "Jupiter",
        }
    }
}

/// Moon bearing in degrees.
pub fn moon_angle(destiny: u32, hour_offset: i64) -> f64 {
    wrap(i64::from(destiny) * 33 + hour_offset.rem_euclid(360) * 10)
}

/// Rising bearing in degrees.
pub fn rising_angle(life_path: u32, hour_offset: i64) -> f64 {
    wrap(i64::from(life_path) * 11 + hour_offset.rem_euclid(360) * 5)
}

/// Jupiter bearing in degrees, from the codex value (life path + destiny).
pub fn jupiter_angle(codex_value: u32) -> f64 {
    wrap(i64::from(codex_value) * 7)
}

fn wrap(deg: i64) -> f64 {
    deg.rem_euclid(360) as f64
}

/// Bearing angles of a profile, in degrees.
///
/// `None` marks a bearing that has not been calibrated yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingAngles {
    pub sun: f64,
    pub moon: Option<f64>,
    pub rising: Option<f64>,
    pub jupiter: Option<f64>,
}

impl BearingAngles {
    /// Only the Sun reference is known.
    pub const fn uncalibrated() -> Self {
        Self {
            sun: 0.0,
            moon: None,
            rising: None,
            jupiter: None,
        }
    }

    /// Derive all four bearings from the numerology values and hour offset.
    pub fn derive(life_path: u32, destiny: u32, hour_offset: i64) -> Self {
        Self {
            sun: 0.0,
            moon: Some(moon_angle(destiny, hour_offset)),
            rising: Some(rising_angle(life_path, hour_offset)),
            jupiter: Some(jupiter_angle(life_path.saturating_add(destiny))),
        }
    }

    /// Angle of a single bearing.
    pub fn get(&self, bearing: Bearing) -> Option<f64> {
        match bearing {
            Bearing::Sun => Some(self.sun),
            Bearing::Moon => self.moon,
            Bearing::Rising => self.rising,
            Bearing::Jupiter => self.jupiter,
        }
    }

    /// Present bearings with their angles, in [`ALL_BEARINGS`] order.
    pub fn present(&self) -> impl Iterator<Item = (Bearing, f64)> + '_ {
        ALL_BEARINGS
            .into_iter()
            .filter_map(|b| self.get(b).map(|angle| (b, angle)))
    }
}

impl Default for BearingAngles {
    fn default() -> Self {
        Self::uncalibrated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ann_lee_bearings() {
        // life path 21, destiny 6, hour 8
        let b = BearingAngles::derive(21, 6, 8);
        assert_eq!(b.sun, 0.0);
        assert_eq!(b.moon, Some(278.0)); // 198 + 80
        assert_eq!(b.rising, Some(271.0)); // 231 + 40
        assert_eq!(b.jupiter, Some(189.0)); // 27 * 7
    }

    #[test]
    fn angles_wrap() {
        // 44 * 33 = 1452 -> 12; + 230 -> 242
        assert_eq!(moon_angle(44, 23), 242.0);
        assert_eq!(jupiter_angle(88), (88 * 7 % 360) as f64);
    }

    #[test]
    fn negative_hour_stays_in_range() {
        let a = moon_angle(0, -3);
        assert_eq!(a, 330.0);
        let r = rising_angle(0, -100);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn extreme_hours_do_not_overflow() {
        for h in [i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1] {
            for d in [0, 44, u32::MAX] {
                let m = moon_angle(d, h);
                let r = rising_angle(d, h);
                assert!((0.0..360.0).contains(&m));
                assert!((0.0..360.0).contains(&r));
                assert_eq!(m, moon_angle(d, h.rem_euclid(360)));
                assert_eq!(r, rising_angle(d, h.rem_euclid(360)));
            }
        }
    }

    #[test]
    fn always_in_range() {
        for lp in 0..60 {
            for d in [0, 1, 9, 11, 22, 33, 44] {
                for h in -30..30 {
                    let b = BearingAngles::derive(lp, d, h);
                    for (_, angle) in b.present() {
                        assert!((0.0..360.0).contains(&angle));
                    }
                }
            }
        }
    }

    #[test]
    fn uncalibrated_has_only_sun() {
        let b = BearingAngles::uncalibrated();
        let present: Vec<_> = b.present().collect();
        assert_eq!(present, vec![(Bearing::Sun, 0.0)]);
        assert_eq!(BearingAngles::default(), b);
    }
}
