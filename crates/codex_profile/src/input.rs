//! Raw onboarding form input.

use serde::{Deserialize, Serialize};

/// What the user typed into the onboarding form.
///
/// Strings are kept verbatim; all interpretation happens in
/// [`derive_profile`](crate::derive_profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingInput {
    pub full_name: String,
    /// `YYYY-MM-DD`.
    #[serde(alias = "dob")]
    pub date_of_birth: String,
    /// `HH:MM`, 24-hour.
    #[serde(alias = "tob")]
    pub time_of_birth: String,
}

impl OnboardingInput {
    pub fn new(
        full_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        time_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            date_of_birth: date_of_birth.into(),
            time_of_birth: time_of_birth.into(),
        }
    }

    /// Every field is filled in. The form only submits complete input.
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.date_of_birth.trim().is_empty()
            && !self.time_of_birth.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness() {
        assert!(OnboardingInput::new("Ann Lee", "1990-05-15", "08:30").is_complete());
        assert!(!OnboardingInput::new("Ann Lee", "1990-05-15", " ").is_complete());
        assert!(!OnboardingInput::new("", "1990-05-15", "08:30").is_complete());
    }
}
