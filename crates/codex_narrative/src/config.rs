//! Explicit configuration for narrative and speech requests.
//!
//! Every field has a default, so a TOML file only needs the keys it wants
//! to override:
//!
//! ```toml
//! text_model = "my-model"
//!
//! [speech]
//! voice = "Kore"
//!
//! [templates]
//! mentor_advice = "Advice for {name}, codex {codex}."
//! ```
//!
//! Unknown keys are rejected so typos surface instead of being ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::prompt::NarrativeKind;

/// Parameters for every narrative and speech request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NarrativeConfig {
    /// Model identity for text generation.
    pub text_model: String,
    /// Reasoning budget passed with text requests. Default: 0 (disabled).
    pub thinking_budget: u32,
    pub speech: SpeechConfig,
    pub templates: PromptTemplates,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            text_model: "gemini-3-pro-preview".to_string(),
            thinking_budget: 0,
            speech: SpeechConfig::default(),
            templates: PromptTemplates::default(),
        }
    }
}

impl NarrativeConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.text_model.trim().is_empty() {
            return Err(ConfigError::Invalid("text_model must not be empty"));
        }
        if self.speech.model.trim().is_empty() {
            return Err(ConfigError::Invalid("speech.model must not be empty"));
        }
        if self.speech.sample_rate_hz == 0 {
            return Err(ConfigError::Invalid("speech.sample_rate_hz must be positive"));
        }
        if self.speech.channels == 0 {
            return Err(ConfigError::Invalid("speech.channels must be positive"));
        }
        Ok(())
    }
}

/// Speech synthesis parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeechConfig {
    /// Model identity for speech synthesis.
    pub model: String,
    /// Prebuilt voice name.
    pub voice: String,
    /// PCM sample rate of returned audio. Default: 24000.
    pub sample_rate_hz: u32,
    /// PCM channel count. Default: 1.
    pub channels: u16,
    /// Style instruction prepended to the text being read.
    pub style_preamble: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash-preview-tts".to_string(),
            voice: "Zephyr".to_string(),
            sample_rate_hz: 24_000,
            channels: 1,
            style_preamble: "In a calm, professional, and slightly futuristic executive voice, \
                       read the following calibration: "
                .to_string(),
        }
    }
}

/// Prompt template per narrative kind.
///
/// Placeholders: `{name}`, `{sun_sign}`, `{life_path}`, `{destiny}`,
/// `{codex}`, `{archetype}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptTemplates {
    pub initial_calibration: String,
    pub premium_blueprint: String,
    pub profile_narrative: String,
    pub mentor_advice: String,
}

impl PromptTemplates {
    pub fn get(&self, kind: NarrativeKind) -> &str {
        match kind {
            NarrativeKind::InitialCalibration => &self.initial_calibration,
            NarrativeKind::PremiumBlueprint => &self.premium_blueprint,
            NarrativeKind::ProfileNarrative => &self.profile_narrative,
            NarrativeKind::MentorAdvice => &self.mentor_advice,
        }
    }
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            initial_calibration: INITIAL_CALIBRATION.to_string(),
            premium_blueprint: PREMIUM_BLUEPRINT.to_string(),
            profile_narrative: PROFILE_NARRATIVE.to_string(),
            mentor_advice: MENTOR_ADVICE.to_string(),
        }
    }
}

const INITIAL_CALIBRATION: &str = "\
You are a world-class Executive Business Mentor.
Deliver a comprehensive \"Initial Business Calibration Reading\" for {name} following this exact 4-phase structure:

1. THE RUNDOWN: Start with a brief, high-level rundown of the self-discovery process they are about to undergo, mapping their energetic bearings to business outcomes.
2. DETAILED ARCHETYPAL PILLARS: Explain the individual components.
   - Describe the {sun_sign} Sun Sign's specific business traits.
   - Explain the Numerology (Life Path {life_path} and Destiny {destiny}). If 11, 22, 33, or 44 appear, describe them as \"Master Teacher,\" \"Global Architect,\" or \"Illuminator.\" Explain what these specific frequencies mean for their leadership.
3. THE SYNTHESIS: Synthesize all of this into the final \"{archetype}\" profile. Explain how the Sun Sign and Numbers merge to create this specific business identity.
4. THE CLOSING & UPGRADE: Conclude by summarizing their current trajectory and then ask for their executive email to purchase a full Premium Reading/Blueprint that goes 50 pages deeper.

Tone: Sophisticated, calm, visionary, professional. Approx 250 words.";

const PREMIUM_BLUEPRINT: &str = "\
Generate a 5-Chapter Premium Executive Business Blueprint for {name}.
Identity: {archetype} (Value: {codex})
Data: Sun Sign {sun_sign}, Life Path {life_path}, Destiny {destiny}.

Chapters:
1. THE PSYCHOLOGICAL BLUEPRINT: Core motivators and energetic drivers.
2. STRATEGIC EXECUTION: How this archetype handles high-stakes decisions.
3. WEALTH ANCHORING: The industries and legacy types most aligned with this frequency.
4. SHADOW TRAITS: Blindspots and mitigation strategies.
5. THE 10-YEAR LEGACY ROADMAP: A decade-long trajectory.

Format: Use Markdown headers for chapters. Long-form, analytical, and executive-ready.";

const PROFILE_NARRATIVE: &str = "\
Provide a detailed business analysis for {name}, who is a {archetype} (Value: {codex}). Focus on long-term legacy.";

const MENTOR_ADVICE: &str = "\
Professional Business Mentor advice for {name}: LP: {life_path}, DS: {destiny}. 20 words max executive directive.";
