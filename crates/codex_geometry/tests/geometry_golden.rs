//! Golden values for the intersection engine.

use codex_geometry::{
    CENTER, GeometryConfig, GlowNode, calculate_node_config, calculate_nodes, ray_circle_roots,
};
use codex_profile::{Bearing, BearingAngles, OnboardingInput, UserProfile, derive_profile};

fn ann_lee() -> UserProfile {
    derive_profile(&OnboardingInput::new("Ann Lee", "1990-05-15", "08:30"))
}

fn sorted(mut nodes: Vec<GlowNode>) -> Vec<GlowNode> {
    nodes.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    nodes
}

#[test]
fn bearing_on_circle_center_roots() {
    for i in 0..8 {
        let angle = i as f64 * 45.0;
        let [near, far] = ray_circle_roots(angle, angle, 220.0, 220.0).unwrap();
        assert!(near.abs() < 1e-9, "R_ring - R_circle");
        assert!((far - 440.0).abs() < 1e-9, "R_ring + R_circle");
    }
}

#[test]
fn ann_lee_nodes() {
    // Bearings: sun 0, moon 278, rising 271, jupiter 189.
    // Rays reach circles within ~88.7 degrees of their direction:
    // sun 3, moon 4, rising 3, jupiter 4.
    let nodes = calculate_node_config(&ann_lee());
    assert_eq!(nodes.len(), 14);

    let per = |b: Bearing| nodes.iter().filter(|n| n.bearing == b).count();
    assert_eq!(per(Bearing::Sun), 3);
    assert_eq!(per(Bearing::Moon), 4);
    assert_eq!(per(Bearing::Rising), 3);
    assert_eq!(per(Bearing::Jupiter), 4);

    // moon and rising are 7 degrees apart: outside the 5 degree window
    let expected = 0.25 + (27.0 / 44.0) * 0.3;
    for n in &nodes {
        assert!((n.intensity - expected).abs() < 1e-12);
        assert_eq!(n.glow_radius, 40.0);
        assert_eq!(n.core_radius, 6.0);
    }
}

#[test]
fn node_positions_lie_on_their_ray_and_circle() {
    let cfg = GeometryConfig::default();
    for n in calculate_node_config(&ann_lee()) {
        let dx = n.x - CENTER.x;
        let dy = n.y - CENTER.y;
        assert!(((dx * dx + dy * dy).sqrt() - n.distance).abs() < 1e-9);

        let circle_angle = (n.circle as f64 * 45.0 - 90.0).to_radians();
        let cx = CENTER.x + cfg.ring_radius * circle_angle.cos();
        let cy = CENTER.y + cfg.ring_radius * circle_angle.sin();
        let r = ((n.x - cx).powi(2) + (n.y - cy).powi(2)).sqrt();
        assert!((r - cfg.circle_radius).abs() < 1e-9);
    }
}

#[test]
fn coincident_bearings_raise_density() {
    let b = BearingAngles {
        sun: 0.0,
        moon: Some(2.0),
        rising: Some(358.0),
        jupiter: Some(180.0),
    };
    let nodes = calculate_nodes(&b, 0.0, &GeometryConfig::default());
    for n in nodes.iter().filter(|n| n.bearing == Bearing::Sun) {
        assert_eq!(n.intensity, 0.75);
        assert_eq!(n.glow_radius, 70.0);
        assert_eq!(n.core_radius, 10.0);
    }
    // moon and rising are 4 degrees apart, both within 5 of each other and of sun
    for n in nodes.iter().filter(|n| n.bearing == Bearing::Jupiter) {
        assert_eq!(n.intensity, 0.25);
    }
}

#[test]
fn identical_profiles_identical_nodes() {
    let inputs = [
        OnboardingInput::new("Ann Lee", "1990-05-15", "08:30"),
        OnboardingInput::new("Ada Lovelace", "1815-12-10", "13:00"),
        OnboardingInput::new("", "garbage", ""),
    ];
    for input in inputs {
        let a = sorted(calculate_node_config(&derive_profile(&input)));
        let b = sorted(calculate_node_config(&derive_profile(&input)));
        assert_eq!(a, b);
    }
}

#[test]
fn placeholder_never_fails() {
    let nodes = calculate_node_config(&UserProfile::placeholder());
    assert_eq!(nodes.len(), 3);
}

#[test]
fn glow_node_serializes_camel_case() {
    let node = calculate_node_config(&ann_lee())[0];
    let json = serde_json::to_value(node).unwrap();
    assert!(json.get("coreRadius").is_some());
    assert!(json.get("glowRadius").is_some());
    assert!(json.get("intensity").is_some());
}
