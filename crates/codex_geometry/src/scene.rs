//! Scene description for the presentation layer.
//!
//! Collects everything the renderer needs for one frame of the
//! constellation: the ring, the bearing rays, the glow nodes, and the
//! mode-dependent opacities. Nothing here draws.

use codex_celestial::Bearing;
use codex_profile::UserProfile;
use serde::{Deserialize, Serialize};

use crate::canvas::{CENTER, Point, RingCircle, point_at_radius, ring_circles};
use crate::intersection::{GeometryConfig, GlowNode, calculate_nodes};

/// Display mode of the constellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// Near-invisible skeleton, used behind the onboarding form.
    Logo,
    #[default]
    Aura,
    Explain,
}

impl AppMode {
    /// Opacity of the etched ring skeleton.
    pub const fn skeleton_opacity(self) -> f64 {
        match self {
            Self::Logo => 0.005,
            Self::Aura | Self::Explain => 0.03,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Aura => "aura",
            Self::Explain => "explain",
        }
    }
}

impl std::str::FromStr for AppMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "logo" => Ok(Self::Logo),
            "aura" => Ok(Self::Aura),
            "explain" => Ok(Self::Explain),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// A bearing drawn from the canvas center to the outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingRay {
    pub bearing: Bearing,
    pub angle_deg: f64,
    pub from: Point,
    pub to: Point,
}

/// One frame's worth of constellation geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub mode: AppMode,
    pub center: Point,
    pub outer_radius: f64,
    pub ring: Vec<RingCircle>,
    /// Only bearings the profile has; an uncalibrated profile shows the Sun alone.
    pub bearings: Vec<BearingRay>,
    pub nodes: Vec<GlowNode>,
    pub skeleton_opacity: f64,
    /// `activation * 0.4 + 0.1`.
    pub color_wheel_opacity: f64,
}

/// Build the scene for a profile in a given mode.
pub fn build_scene(profile: &UserProfile, mode: AppMode, config: &GeometryConfig) -> Scene {
    let bearings = profile.bearings();
    let rays = bearings
        .present()
        .map(|(bearing, angle_deg)| BearingRay {
            bearing,
            angle_deg,
            from: CENTER,
            to: point_at_radius(angle_deg, config.outer_radius),
        })
        .collect();

    Scene {
        mode,
        center: CENTER,
        outer_radius: config.outer_radius,
        ring: ring_circles(config.circle_count, config.ring_radius, config.circle_radius),
        bearings: rays,
        nodes: calculate_nodes(&bearings, profile.activation_strength(), config),
        skeleton_opacity: mode.skeleton_opacity(),
        color_wheel_opacity: profile.activation_strength() * 0.4 + 0.1,
    }
}
