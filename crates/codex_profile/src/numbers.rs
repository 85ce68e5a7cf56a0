//! Life Path / Destiny pair and the values derived from it.

use codex_numerology::BusinessArchetype;
use serde::{Deserialize, Serialize};

/// Codex value at which activation saturates.
pub const ACTIVATION_DIVISOR: f64 = 44.0;

/// Highest circle band.
pub const MAX_CIRCLE_BAND: u8 = 3;

/// The two numerology inputs. Everything else is computed from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CodexNumbers {
    pub life_path: u32,
    pub destiny: u32,
}

impl CodexNumbers {
    pub const fn new(life_path: u32, destiny: u32) -> Self {
        Self { life_path, destiny }
    }

    /// `life_path + destiny`.
    pub const fn business_codex_value(self) -> u32 {
        self.life_path.saturating_add(self.destiny)
    }

    /// `min(1, codex / 44)`, in `[0, 1]`.
    pub fn activation_strength(self) -> f64 {
        (f64::from(self.business_codex_value()) / ACTIVATION_DIVISOR).min(1.0)
    }

    /// `min(3, floor(life_path / 11))`, in `{0, 1, 2, 3}`.
    pub fn circle_band(self) -> u8 {
        (self.life_path / 11).min(u32::from(MAX_CIRCLE_BAND)) as u8
    }

    pub const fn archetype(self) -> BusinessArchetype {
        BusinessArchetype::from_numbers(self.business_codex_value(), self.life_path, self.destiny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codex_is_sum() {
        let n = CodexNumbers::new(21, 6);
        assert_eq!(n.business_codex_value(), 27);
    }

    #[test]
    fn activation_saturates() {
        assert!((CodexNumbers::new(21, 6).activation_strength() - 27.0 / 44.0).abs() < 1e-12);
        assert_eq!(CodexNumbers::new(33, 11).activation_strength(), 1.0);
        assert_eq!(CodexNumbers::new(50, 44).activation_strength(), 1.0);
        assert_eq!(CodexNumbers::default().activation_strength(), 0.0);
    }

    #[test]
    fn circle_band_steps() {
        assert_eq!(CodexNumbers::new(10, 0).circle_band(), 0);
        assert_eq!(CodexNumbers::new(11, 0).circle_band(), 1);
        assert_eq!(CodexNumbers::new(21, 0).circle_band(), 1);
        assert_eq!(CodexNumbers::new(22, 0).circle_band(), 2);
        assert_eq!(CodexNumbers::new(33, 0).circle_band(), 3);
        assert_eq!(CodexNumbers::new(999, 0).circle_band(), 3);
    }

    #[test]
    fn archetype_from_pair() {
        assert_eq!(
            CodexNumbers::new(21, 6).archetype(),
            BusinessArchetype::UniversalLegacy
        );
    }
}
