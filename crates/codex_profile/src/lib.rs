//! Profile synthesis: onboarding input in, `UserProfile` out.
//!
//! # Quick start
//!
//! ```rust
//! use codex_profile::{OnboardingInput, derive_profile};
//!
//! let input = OnboardingInput::new("Ann Lee", "1990-05-15", "08:30");
//! let profile = derive_profile(&input);
//! assert_eq!(profile.life_path_number(), 21);
//! assert_eq!(profile.destiny_number(), 6);
//! assert_eq!(profile.business_codex_value(), 27);
//! ```

pub mod error;
pub mod input;
pub mod numbers;
pub mod profile;

pub use error::ProfileError;
pub use input::OnboardingInput;
pub use numbers::{ACTIVATION_DIVISOR, CodexNumbers, MAX_CIRCLE_BAND};
pub use profile::{UserProfile, derive_profile};

// Re-export the celestial and numerology types that appear in the profile.
pub use codex_celestial::{Bearing, BearingAngles, SunSign};
pub use codex_numerology::BusinessArchetype;
