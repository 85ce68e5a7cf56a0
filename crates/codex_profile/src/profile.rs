//! The derived user profile.
//!
//! A profile is built in one step from an [`OnboardingInput`] and never
//! edited afterwards; recalibration builds a new one. Fields are private so
//! the derived values (codex value, activation strength, circle band) cannot
//! drift from the Life Path / Destiny pair they come from. Deserialization
//! recomputes them and rejects a record that disagrees.

use codex_celestial::{Bearing, BearingAngles, SunSign, get_sun_sign, hour_offset};
use codex_numerology::{BusinessArchetype, calculate_destiny, calculate_life_path};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProfileError;
use crate::input::OnboardingInput;
use crate::numbers::CodexNumbers;

/// Derived profile consumed by the geometry engine and narrative layer.
///
/// Serializes with camelCase keys (`sunRelAngle`, `businessCodexValue`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfileRecord")]
pub struct UserProfile {
    name: String,
    /// `None` only for the placeholder profile.
    sun_sign: Option<SunSign>,
    sun_rel_angle: f64,
    moon_rel_angle: Option<f64>,
    rising_rel_angle: Option<f64>,
    jupiter_rel_angle: Option<f64>,
    life_path_number: u32,
    destiny_number: u32,
    business_codex_value: u32,
    activation_strength: f64,
    circle_band: u8,
    /// Not derived; always `None`.
    moon_sign: Option<SunSign>,
}

impl UserProfile {
    fn assemble(
        name: String,
        sun_sign: Option<SunSign>,
        bearings: BearingAngles,
        numbers: CodexNumbers,
    ) -> Self {
        Self {
            name,
            sun_sign,
            sun_rel_angle: bearings.sun,
            moon_rel_angle: bearings.moon,
            rising_rel_angle: bearings.rising,
            jupiter_rel_angle: bearings.jupiter,
            life_path_number: numbers.life_path,
            destiny_number: numbers.destiny,
            business_codex_value: numbers.business_codex_value(),
            activation_strength: numbers.activation_strength(),
            circle_band: numbers.circle_band(),
            moon_sign: None,
        }
    }

    /// Uncalibrated profile shown before onboarding completes.
    ///
    /// Only the Sun bearing is present; all numbers are zero.
    pub fn placeholder() -> Self {
        Self::assemble(
            "...".to_string(),
            None,
            BearingAngles::uncalibrated(),
            CodexNumbers::default(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sun_sign(&self) -> Option<SunSign> {
        self.sun_sign
    }

    /// Moon sign derivation is not implemented; always `None`.
    pub fn moon_sign(&self) -> Option<SunSign> {
        self.moon_sign
    }

    pub fn sun_rel_angle(&self) -> f64 {
        self.sun_rel_angle
    }

    pub fn moon_rel_angle(&self) -> Option<f64> {
        self.moon_rel_angle
    }

    pub fn rising_rel_angle(&self) -> Option<f64> {
        self.rising_rel_angle
    }

    pub fn jupiter_rel_angle(&self) -> Option<f64> {
        self.jupiter_rel_angle
    }

    /// All four bearings.
    pub fn bearings(&self) -> BearingAngles {
        BearingAngles {
            sun: self.sun_rel_angle,
            moon: self.moon_rel_angle,
            rising: self.rising_rel_angle,
            jupiter: self.jupiter_rel_angle,
        }
    }

    pub fn bearing(&self, bearing: Bearing) -> Option<f64> {
        self.bearings().get(bearing)
    }

    pub fn numbers(&self) -> CodexNumbers {
        CodexNumbers::new(self.life_path_number, self.destiny_number)
    }

    pub fn life_path_number(&self) -> u32 {
        self.life_path_number
    }

    pub fn destiny_number(&self) -> u32 {
        self.destiny_number
    }

    pub fn business_codex_value(&self) -> u32 {
        self.business_codex_value
    }

    pub fn activation_strength(&self) -> f64 {
        self.activation_strength
    }

    pub fn circle_band(&self) -> u8 {
        self.circle_band
    }

    pub fn archetype(&self) -> BusinessArchetype {
        self.numbers().archetype()
    }

    /// Whether every bearing has been derived.
    pub fn is_calibrated(&self) -> bool {
        self.moon_rel_angle.is_some()
            && self.rising_rel_angle.is_some()
            && self.jupiter_rel_angle.is_some()
    }
}

/// Wire form of [`UserProfile`], checked before it becomes one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRecord {
    name: String,
    sun_sign: Option<SunSign>,
    sun_rel_angle: f64,
    moon_rel_angle: Option<f64>,
    rising_rel_angle: Option<f64>,
    jupiter_rel_angle: Option<f64>,
    life_path_number: u32,
    destiny_number: u32,
    business_codex_value: u32,
    activation_strength: f64,
    circle_band: u8,
    moon_sign: Option<SunSign>,
}

impl TryFrom<ProfileRecord> for UserProfile {
    type Error = ProfileError;

    fn try_from(r: ProfileRecord) -> Result<Self, Self::Error> {
        let numbers = CodexNumbers::new(r.life_path_number, r.destiny_number);
        if r.business_codex_value != numbers.business_codex_value() {
            return Err(derived_mismatch(
                "businessCodexValue",
                r.business_codex_value,
                numbers.business_codex_value(),
            ));
        }
        if r.circle_band != numbers.circle_band() {
            return Err(derived_mismatch("circleBand", r.circle_band, numbers.circle_band()));
        }
        if (r.activation_strength - numbers.activation_strength()).abs() > 1e-9 {
            return Err(derived_mismatch(
                "activationStrength",
                r.activation_strength,
                numbers.activation_strength(),
            ));
        }
        if r.sun_rel_angle != 0.0 {
            return Err(ProfileError::SunBearing(r.sun_rel_angle));
        }
        for (field, angle) in [
            ("moonRelAngle", r.moon_rel_angle),
            ("risingRelAngle", r.rising_rel_angle),
            ("jupiterRelAngle", r.jupiter_rel_angle),
        ] {
            if let Some(angle) = angle.filter(|a| !(0.0..360.0).contains(a)) {
                return Err(ProfileError::Bearing { field, angle });
            }
        }
        if r.moon_sign.is_some() {
            return Err(ProfileError::MoonSign);
        }
        let bearings = BearingAngles {
            sun: r.sun_rel_angle,
            moon: r.moon_rel_angle,
            rising: r.rising_rel_angle,
            jupiter: r.jupiter_rel_angle,
        };
        Ok(Self::assemble(r.name, r.sun_sign, bearings, numbers))
    }
}

fn derived_mismatch(
    field: &'static str,
    found: impl ToString,
    expected: impl ToString,
) -> ProfileError {
    ProfileError::Derived {
        field,
        found: found.to_string(),
        expected: expected.to_string(),
    }
}

/// Build the profile for one onboarding submission.
///
/// Deterministic and total: malformed fields fall back to zero numbers,
/// hour offset 0, and the default sun sign.
pub fn derive_profile(input: &OnboardingInput) -> UserProfile {
    let numbers = CodexNumbers::new(
        calculate_life_path(&input.date_of_birth),
        calculate_destiny(&input.full_name),
    );
    let sun = get_sun_sign(&input.date_of_birth);
    let hour = hour_offset(&input.time_of_birth);
    let bearings = BearingAngles::derive(numbers.life_path, numbers.destiny, hour);

    debug!(
        life_path = numbers.life_path,
        destiny = numbers.destiny,
        sun_sign = %sun.sign,
        hour,
        "derived profile"
    );

    UserProfile::assemble(input.full_name.clone(), Some(sun.sign), bearings, numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann_lee() -> OnboardingInput {
        OnboardingInput::new("Ann Lee", "1990-05-15", "08:30")
    }

    #[test]
    fn ann_lee_profile() {
        let p = derive_profile(&ann_lee());
        assert_eq!(p.name(), "Ann Lee");
        assert_eq!(p.life_path_number(), 21);
        assert_eq!(p.destiny_number(), 6);
        assert_eq!(p.business_codex_value(), 27);
        assert!((p.activation_strength() - 27.0 / 44.0).abs() < 1e-12);
        assert_eq!(p.circle_band(), 1);
        assert_eq!(p.sun_sign(), Some(SunSign::Taurus));
        assert_eq!(p.sun_rel_angle(), 0.0);
        assert_eq!(p.moon_rel_angle(), Some(278.0));
        assert_eq!(p.rising_rel_angle(), Some(271.0));
        assert_eq!(p.jupiter_rel_angle(), Some(189.0));
        assert_eq!(p.moon_sign(), None);
        assert!(p.is_calibrated());
    }

    #[test]
    fn deterministic() {
        assert_eq!(derive_profile(&ann_lee()), derive_profile(&ann_lee()));
    }

    #[test]
    fn malformed_input_degrades() {
        let p = derive_profile(&OnboardingInput::new("", "not a date", "??"));
        assert_eq!(p.life_path_number(), 0);
        assert_eq!(p.destiny_number(), 0);
        assert_eq!(p.business_codex_value(), 0);
        assert_eq!(p.activation_strength(), 0.0);
        assert_eq!(p.circle_band(), 0);
        assert_eq!(p.sun_sign(), Some(SunSign::DEFAULT));
        assert_eq!(p.moon_rel_angle(), Some(0.0));
        assert_eq!(p.rising_rel_angle(), Some(0.0));
        assert_eq!(p.jupiter_rel_angle(), Some(0.0));
    }

    #[test]
    fn placeholder_is_uncalibrated() {
        let p = UserProfile::placeholder();
        assert!(!p.is_calibrated());
        assert_eq!(p.sun_sign(), None);
        assert_eq!(p.bearings(), BearingAngles::uncalibrated());
        assert_eq!(p.bearing(Bearing::Sun), Some(0.0));
        assert_eq!(p.bearing(Bearing::Moon), None);
    }

    #[test]
    fn archetype_matches_numbers() {
        let p = derive_profile(&ann_lee());
        assert_eq!(p.archetype(), BusinessArchetype::UniversalLegacy);
    }
}
