//! Business archetype classification.
//!
//! Precedence, first match wins:
//! 1. codex value >= 44 -> Titan
//! 2. life path 33 -> Master Influencer
//! 3. life path or destiny 22 -> Master Builder
//! 4. life path or destiny 11 -> Visionary Catalyst
//! 5. otherwise by `codex mod 9` (0 counts as 9)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessArchetype {
    Titan,
    MasterInfluencer,
    MasterBuilder,
    VisionaryCatalyst,
    IndependentPioneer,
    StrategicDiplomat,
    CreativeEvangelist,
    SystemicFoundation,
    ChangeArchitect,
    BenevolentExecutive,
    AnalyticalMystic,
    SovereignAuthority,
    UniversalLegacy,
}

/// The nine base archetypes indexed by `base - 1`.
const BASE_ARCHETYPES: [BusinessArchetype; 9] = [
    BusinessArchetype::IndependentPioneer,
    BusinessArchetype::StrategicDiplomat,
    BusinessArchetype::CreativeEvangelist,
    BusinessArchetype::SystemicFoundation,
    BusinessArchetype::ChangeArchitect,
    BusinessArchetype::BenevolentExecutive,
    BusinessArchetype::AnalyticalMystic,
    BusinessArchetype::SovereignAuthority,
    BusinessArchetype::UniversalLegacy,
];

/// All archetypes, master archetypes first.
pub const ALL_ARCHETYPES: [BusinessArchetype; 13] = [
    BusinessArchetype::Titan,
    BusinessArchetype::MasterInfluencer,
    BusinessArchetype::MasterBuilder,
    BusinessArchetype::VisionaryCatalyst,
    BusinessArchetype::IndependentPioneer,
    BusinessArchetype::StrategicDiplomat,
    BusinessArchetype::CreativeEvangelist,
    BusinessArchetype::SystemicFoundation,
    BusinessArchetype::ChangeArchitect,
    BusinessArchetype::BenevolentExecutive,
    BusinessArchetype::AnalyticalMystic,
    BusinessArchetype::SovereignAuthority,
    BusinessArchetype::UniversalLegacy,
];

impl BusinessArchetype {
    /// Classify from the codex value and its two components.
    pub const fn from_numbers(codex_value: u32, life_path: u32, destiny: u32) -> Self {
        if codex_value >= 44 {
            return Self::Titan;
        }
        if life_path == 33 {
            return Self::MasterInfluencer;
        }
        if life_path == 22 || destiny == 22 {
            return Self::MasterBuilder;
        }
        if life_path == 11 || destiny == 11 {
            return Self::VisionaryCatalyst;
        }
        let base = match codex_value % 9 {
            0 => 9,
            b => b,
        };
        BASE_ARCHETYPES[(base - 1) as usize]
    }

    /// Display title used in narrative prompts.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Titan => "The Architect of Destiny (Titan)",
            Self::MasterInfluencer => "The Master Influencer (Radiant Leader)",
            Self::MasterBuilder => "The Master Builder (Global Architect)",
            Self::VisionaryCatalyst => "The Visionary Catalyst (Instinctive Seer)",
            Self::IndependentPioneer => "The Independent Pioneer",
            Self::StrategicDiplomat => "The Strategic Diplomat",
            Self::CreativeEvangelist => "The Creative Evangelist",
            Self::SystemicFoundation => "The Systemic Foundation",
            Self::ChangeArchitect => "The Change Architect",
            Self::BenevolentExecutive => "The Benevolent Executive",
            Self::AnalyticalMystic => "The Analytical Mystic",
            Self::SovereignAuthority => "The Sovereign Authority",
            Self::UniversalLegacy => "The Universal Legacy",
        }
    }

    /// Whether this archetype comes from a master-number rule.
    pub const fn is_master(self) -> bool {
        matches!(
            self,
            Self::Titan | Self::MasterInfluencer | Self::MasterBuilder | Self::VisionaryCatalyst
        )
    }
}

impl std::fmt::Display for BusinessArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
