//! Tropical sun sign from the calendar date of birth.
//!
//! Each sign owns a fixed calendar range (inclusive on both ends) and a
//! 30-degree step angle starting from Aries at 0. The year is ignored.
//!
//! | Sign        | Range           | Angle |
//! |-------------|-----------------|-------|
//! | Aries       | Mar 21 - Apr 19 | 0     |
//! | Taurus      | Apr 20 - May 20 | 30    |
//! | Gemini      | May 21 - Jun 20 | 60    |
//! | Cancer      | Jun 21 - Jul 22 | 90    |
//! | Leo         | Jul 23 - Aug 22 | 120   |
//! | Virgo       | Aug 23 - Sep 22 | 150   |
//! | Libra       | Sep 23 - Oct 22 | 180   |
//! | Scorpio     | Oct 23 - Nov 21 | 210   |
//! | Sagittarius | Nov 22 - Dec 21 | 240   |
//! | Capricorn   | Dec 22 - Jan 19 | 270   |
//! | Aquarius    | Jan 20 - Feb 18 | 300   |
//! | Pisces      | Feb 19 - Mar 20 | 330   |

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::date::BirthDate;

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [SunSign; 12] = [
    SunSign::Aries,
    SunSign::Taurus,
    SunSign::Gemini,
    SunSign::Cancer,
    SunSign::Leo,
    SunSign::Virgo,
    SunSign::Libra,
    SunSign::Scorpio,
    SunSign::Sagittarius,
    SunSign::Capricorn,
    SunSign::Aquarius,
    SunSign::Pisces,
];

/// First day of each sign, in calendar order from January.
/// Dates before the first entry (Jan 1-19) belong to Capricorn.
const CUSPS: [(u32, u32, SunSign); 12] = [
    (1, 20, SunSign::Aquarius),
    (2, 19, SunSign::Pisces),
    (3, 21, SunSign::Aries),
    (4, 20, SunSign::Taurus),
    (5, 21, SunSign::Gemini),
    (6, 21, SunSign::Cancer),
    (7, 23, SunSign::Leo),
    (8, 23, SunSign::Virgo),
    (9, 23, SunSign::Libra),
    (10, 23, SunSign::Scorpio),
    (11, 22, SunSign::Sagittarius),
    (12, 22, SunSign::Capricorn),
];

impl SunSign {
    /// Sign reported when the birth date cannot be resolved.
    pub const DEFAULT: SunSign = SunSign::Pisces;

    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Bearing angle of the sign, `index * 30`.
    pub const fn angle_deg(self) -> u32 {
        self.index() as u32 * 30
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [SunSign; 12] {
        &ALL_SIGNS
    }
}

impl std::fmt::Display for SunSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sun sign lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunSignInfo {
    pub sign: SunSign,
    /// Sign angle in degrees (0..=330, step 30).
    pub angle: u32,
    /// False when the date was unusable and [`SunSign::DEFAULT`] was substituted.
    pub resolved: bool,
}

impl SunSignInfo {
    fn from_sign(sign: SunSign, resolved: bool) -> Self {
        Self {
            sign,
            angle: sign.angle_deg(),
            resolved,
        }
    }
}

/// Sun sign for a month (1-12) and day.
///
/// Total over every `(month, day)` pair; values outside the calendar fall
/// through to the sign whose cusp precedes them.
pub fn sun_sign_from_month_day(month: u32, day: u32) -> SunSign {
    CUSPS
        .iter()
        .rev()
        .find(|&&(m, d, _)| (month, day) >= (m, d))
        .map_or(SunSign::Capricorn, |&(_, _, sign)| sign)
}

/// Sun sign for a `YYYY-MM-DD` birth date.
///
/// An unparsable or impossible date resolves to [`SunSign::DEFAULT`] with
/// `resolved = false`.
pub fn get_sun_sign(date_of_birth: &str) -> SunSignInfo {
    match date_of_birth.parse::<BirthDate>() {
        Ok(date) => SunSignInfo::from_sign(sun_sign_from_month_day(date.month, date.day), true),
        Err(e) => {
            warn!(date_of_birth, error = %e, "unresolvable birth date, using default sun sign");
            SunSignInfo::from_sign(SunSign::DEFAULT, false)
        }
    }
}
