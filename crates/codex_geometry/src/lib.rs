//! Constellation geometry.
//!
//! Four bearings leave the canvas center; a ring of eight circles surrounds
//! it. Wherever a bearing ray crosses one of those circles inside the outer
//! boundary, a glow node is placed. Nodes on bearings that crowd together
//! (within a few degrees of each other) burn brighter and larger.
//!
//! Coordinates live in a fixed 1000x1000 canvas with the center at
//! `(500, 500)`. Angles follow the compass convention: 0 points up and
//! angles grow clockwise on screen.

pub mod canvas;
pub mod intersection;
pub mod scene;

pub use canvas::{
    CANVAS_SIZE, CENTER, Point, R_OUTER, R_RING, RING_CIRCLE_COUNT, RingCircle,
    point_at_radius, ring_circles,
};
pub use intersection::{
    GeometryConfig, GlowNode, angular_distance, bearing_density, calculate_node_config,
    calculate_nodes, ray_circle_roots,
};
pub use scene::{AppMode, BearingRay, Scene, build_scene};
