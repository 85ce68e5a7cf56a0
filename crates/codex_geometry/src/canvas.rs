//! Fixed canvas constants and the angle-to-point primitive.

use serde::{Deserialize, Serialize};

/// Canvas width and height.
pub const CANVAS_SIZE: f64 = 1000.0;

/// Canvas center.
pub const CENTER: Point = Point { x: 500.0, y: 500.0 };

/// Outer boundary radius; bearing rays end here.
pub const R_OUTER: f64 = 460.0;

/// Distance of each ring circle's center from the canvas center. The ring
/// circles use the same value as their own radius.
pub const R_RING: f64 = 220.0;

/// Circles in the ring, spaced every 45 degrees.
pub const RING_CIRCLE_COUNT: usize = 8;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Point at distance `r` from [`CENTER`] along compass angle `angle_deg`.
///
/// `rad = (angle - 90) * pi / 180`, so 0 points up and 90 points right.
pub fn point_at_radius(angle_deg: f64, r: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point {
        x: CENTER.x + r * rad.cos(),
        y: CENTER.y + r * rad.sin(),
    }
}

/// One circle of the background ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingCircle {
    pub index: usize,
    /// Direction of the circle's center from the canvas center.
    pub angle_deg: f64,
    pub center: Point,
    pub radius: f64,
}

/// The ring of circles: `count` circles whose centers sit `ring_radius`
/// from the canvas center at evenly spaced angles starting from 0.
pub fn ring_circles(count: usize, ring_radius: f64, circle_radius: f64) -> Vec<RingCircle> {
    let step = 360.0 / count.max(1) as f64;
    (0..count)
        .map(|i| {
            let angle_deg = i as f64 * step;
            RingCircle {
                index: i,
                angle_deg,
                center: point_at_radius(angle_deg, ring_radius),
                radius: circle_radius,
            }
        })
        .collect()
}
