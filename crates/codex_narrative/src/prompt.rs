//! Prompt rendering and fallback text.

use codex_profile::UserProfile;
use serde::{Deserialize, Serialize};

use crate::config::NarrativeConfig;

/// What the mentor panel is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeKind {
    /// Four-phase reading shown right after onboarding.
    InitialCalibration,
    /// Long-form five-chapter report.
    PremiumBlueprint,
    /// Refreshed legacy-focused analysis.
    ProfileNarrative,
    /// One-line executive directive.
    MentorAdvice,
}

pub const ALL_KINDS: [NarrativeKind; 4] = [
    NarrativeKind::InitialCalibration,
    NarrativeKind::PremiumBlueprint,
    NarrativeKind::ProfileNarrative,
    NarrativeKind::MentorAdvice,
];

impl NarrativeKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::InitialCalibration => "initial_calibration",
            Self::PremiumBlueprint => "premium_blueprint",
            Self::ProfileNarrative => "profile_narrative",
            Self::MentorAdvice => "mentor_advice",
        }
    }
}

impl std::str::FromStr for NarrativeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .into_iter()
            .find(|k| k.name() == s.replace('-', "_"))
            .ok_or_else(|| format!("unknown narrative kind: {s}"))
    }
}

/// Profile fields exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptVars {
    pub name: String,
    pub sun_sign: String,
    pub life_path: u32,
    pub destiny: u32,
    pub codex: u32,
    pub archetype: String,
}

impl PromptVars {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name().to_string(),
            sun_sign: profile
                .sun_sign()
                .map_or_else(|| "Uncalibrated".to_string(), |s| s.name().to_string()),
            life_path: profile.life_path_number(),
            destiny: profile.destiny_number(),
            codex: profile.business_codex_value(),
            archetype: profile.archetype().title().to_string(),
        }
    }
}

/// Substitute `{name}`, `{sun_sign}`, `{life_path}`, `{destiny}`, `{codex}`
/// and `{archetype}`. Other braces pass through untouched.
pub fn render_template(template: &str, vars: &PromptVars) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let v = match &after[..close] {
                "name" => vars.name.clone(),
                "sun_sign" => vars.sun_sign.clone(),
                "life_path" => vars.life_path.to_string(),
                "destiny" => vars.destiny.to_string(),
                "codex" => vars.codex.to_string(),
                "archetype" => vars.archetype.clone(),
                _ => return None,
            };
            Some((v, close))
        });
        match value {
            Some((v, close)) => {
                out.push_str(&v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Prompt text for `kind` from the configured template.
pub fn render_prompt(kind: NarrativeKind, profile: &UserProfile, config: &NarrativeConfig) -> String {
    render_template(config.templates.get(kind), &PromptVars::from_profile(profile))
}

/// Static text shown when generation fails. Mentor advice has none.
pub fn fallback_text(kind: NarrativeKind, profile: &UserProfile) -> Option<String> {
    let vars = PromptVars::from_profile(profile);
    match kind {
        NarrativeKind::InitialCalibration => Some(format!(
            "Calibration complete. Your Master Identity {} is active. As a {} with {} path, \
             you hold the frequency of {}. Please provide your email to unlock the premium blueprint.",
            vars.codex, vars.sun_sign, vars.life_path, vars.archetype
        )),
        NarrativeKind::PremiumBlueprint => Some(
            "Error generating premium blueprint. Please contact executive support.".to_string(),
        ),
        NarrativeKind::ProfileNarrative => Some(format!(
            "Your frequency is established at the {} level.",
            vars.codex
        )),
        NarrativeKind::MentorAdvice => None,
    }
}
