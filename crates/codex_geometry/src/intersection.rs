//! Ray / circle intersection engine.
//!
//! For every (bearing, ring circle) pair the bearing ray from the canvas
//! center is intersected with the circle. Parameterizing the ray by its
//! distance `r` from the center gives
//!
//! ```text
//! r^2 + B r + C = 0
//! B = -2 * R_ring * cos(theta_bearing - alpha_circle)
//! C = R_ring^2 - R_circle^2
//! D = B^2 - 4C
//! ```
//!
//! A negative discriminant means the ray misses the circle. Each real root
//! with `min_distance < r < outer_radius` becomes a glow node. The node's
//! weight comes from the bearing's density: how many bearings (itself
//! included) point within `density_tolerance_deg` of it.

use codex_celestial::{Bearing, BearingAngles, normalize_360};
use codex_profile::UserProfile;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::canvas::{R_OUTER, R_RING, RING_CIRCLE_COUNT, point_at_radius, ring_circles};

/// Tunable parameters of the intersection engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
    /// Number of circles in the ring. Default: 8.
    pub circle_count: usize,
    /// Distance of each circle's center from the canvas center. Default: 220.
    pub ring_radius: f64,
    /// Radius of each ring circle. Default: 220.
    pub circle_radius: f64,
    /// Roots at or beyond this distance are discarded. Default: 460.
    pub outer_radius: f64,
    /// Roots at or below this distance are discarded. Default: 10.
    pub min_distance: f64,
    /// Bearings within this many degrees count toward density. Default: 5.
    pub density_tolerance_deg: f64,
    /// Density at which intensity saturates on its own. Default: 4.
    pub density_divisor: f64,
    /// Share of activation strength added to intensity. Default: 0.3.
    pub activation_weight: f64,
    /// Glow radius at density 0 and per density step. Default: 25 / 15.
    pub glow_base: f64,
    pub glow_step: f64,
    /// Core radius at density 0 and per density step. Default: 4 / 2.
    pub core_base: f64,
    pub core_step: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            circle_count: RING_CIRCLE_COUNT,
            ring_radius: R_RING,
            circle_radius: R_RING,
            outer_radius: R_OUTER,
            min_distance: 10.0,
            density_tolerance_deg: 5.0,
            density_divisor: 4.0,
            activation_weight: 0.3,
            glow_base: 25.0,
            glow_step: 15.0,
            core_base: 4.0,
            core_step: 2.0,
        }
    }
}

impl GeometryConfig {
    /// `min(1, density / divisor + activation * weight)`.
    pub fn intensity(&self, density: u32, activation_strength: f64) -> f64 {
        (f64::from(density) / self.density_divisor + activation_strength * self.activation_weight)
            .min(1.0)
    }

    pub fn glow_radius(&self, density: u32) -> f64 {
        self.glow_base + f64::from(density) * self.glow_step
    }

    pub fn core_radius(&self, density: u32) -> f64 {
        self.core_base + f64::from(density) * self.core_step
    }
}

/// A lit intersection point handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlowNode {
    /// Absolute canvas position.
    pub x: f64,
    pub y: f64,
    /// In `[0, 1]`.
    pub intensity: f64,
    pub core_radius: f64,
    pub glow_radius: f64,
    /// Bearing whose ray produced the node.
    pub bearing: Bearing,
    /// Index of the ring circle it crosses.
    pub circle: usize,
    /// Distance from the canvas center along the bearing.
    pub distance: f64,
}

/// Distances along the ray at `bearing_deg` where it meets the ring circle
/// centered at `circle_deg`, as `[near, far]`.
///
/// Roots may be negative or zero; the caller filters them. `None` when the
/// line misses the circle.
pub fn ray_circle_roots(
    bearing_deg: f64,
    circle_deg: f64,
    ring_radius: f64,
    circle_radius: f64,
) -> Option<[f64; 2]> {
    let b = -2.0 * ring_radius * (bearing_deg - circle_deg).to_radians().cos();
    let c = ring_radius * ring_radius - circle_radius * circle_radius;
    let d = b * b - 4.0 * c;
    if !d.is_finite() || d < 0.0 {
        return None;
    }
    let sq = d.sqrt();
    Some([(-b - sq) / 2.0, (-b + sq) / 2.0])
}

/// Smallest angle between two directions, in `[0, 180]`.
pub fn angular_distance(a_deg: f64, b_deg: f64) -> f64 {
    let d = normalize_360(a_deg - b_deg);
    d.min(360.0 - d)
}

/// Number of `angles` within `tolerance_deg` of `angle_deg`.
pub fn bearing_density(angle_deg: f64, angles: &[f64], tolerance_deg: f64) -> u32 {
    angles
        .iter()
        .filter(|&&other| angular_distance(angle_deg, other) <= tolerance_deg)
        .count() as u32
}

/// Glow nodes for a set of bearings.
///
/// Absent bearings are skipped. The result is deterministic for identical
/// inputs; its order (bearing, then circle, then near root first) carries
/// no meaning.
pub fn calculate_nodes(
    bearings: &BearingAngles,
    activation_strength: f64,
    config: &GeometryConfig,
) -> Vec<GlowNode> {
    let ring = ring_circles(config.circle_count, config.ring_radius, config.circle_radius);
    let present: Vec<(Bearing, f64)> = bearings.present().collect();
    let angles: Vec<f64> = present.iter().map(|&(_, angle)| angle).collect();

    let mut nodes = Vec::new();
    for &(bearing, angle) in &present {
        let density = bearing_density(angle, &angles, config.density_tolerance_deg);
        let intensity = config.intensity(density, activation_strength);
        let glow_radius = config.glow_radius(density);
        let core_radius = config.core_radius(density);

        for circle in &ring {
            let Some(roots) = ray_circle_roots(
                angle,
                circle.angle_deg,
                config.ring_radius,
                config.circle_radius,
            ) else {
                continue;
            };
            // a tangent ray yields one point, not two
            let distinct = if roots[0] == roots[1] { &roots[..1] } else { &roots[..] };
            for &r in distinct {
                if r <= config.min_distance || r >= config.outer_radius {
                    continue;
                }
                let p = point_at_radius(angle, r);
                nodes.push(GlowNode {
                    x: p.x,
                    y: p.y,
                    intensity,
                    core_radius,
                    glow_radius,
                    bearing,
                    circle: circle.index,
                    distance: r,
                });
            }
        }
    }

    trace!(bearings = present.len(), nodes = nodes.len(), "computed glow nodes");
    nodes
}

/// Glow nodes for a profile with the default geometry.
pub fn calculate_node_config(profile: &UserProfile) -> Vec<GlowNode> {
    calculate_nodes(
        &profile.bearings(),
        profile.activation_strength(),
        &GeometryConfig::default(),
    )
}
