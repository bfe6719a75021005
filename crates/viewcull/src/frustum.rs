//! 2D field-of-view trapezoid.
//!
//! The apex is the camera; the facing angle is `atan2(dy, dx)` towards the
//! look-at point. Vertices are emitted near-left, near-right, far-right,
//! far-left ("left" is counterclockwise of the facing direction), which gives
//! a simple quadrilateral for `point_in_polygon`.

use serde::{Deserialize, Serialize};

use crate::cfg::{FRUSTUM_CUTOFF, FRUSTUM_HALF_ANGLE, FRUSTUM_LENGTH};
use crate::geom2::{Polygon, Vertex};

/// Frustum shape: half-angle in radians, near and far offsets from the apex.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrustumCfg {
    pub half_angle: f64,
    pub cutoff: f64,
    pub length: f64,
}

impl Default for FrustumCfg {
    fn default() -> Self {
        Self {
            half_angle: FRUSTUM_HALF_ANGLE,
            cutoff: FRUSTUM_CUTOFF,
            length: FRUSTUM_LENGTH,
        }
    }
}

#[inline]
fn polar(apex: Vertex, angle: f64, r: f64) -> Vertex {
    apex + Vertex::new(angle.cos(), angle.sin()) * r
}

/// Facing angle from `apex` to `look_at`. Coincident points give 0.
#[inline]
pub fn facing_angle(apex: Vertex, look_at: Vertex) -> f64 {
    let d = look_at - apex;
    d.y.atan2(d.x)
}

/// Frustum with the default shape.
pub fn build_frustum(apex: Vertex, look_at: Vertex) -> Polygon {
    build_frustum_with(apex, look_at, &FrustumCfg::default())
}

pub fn build_frustum_with(apex: Vertex, look_at: Vertex, cfg: &FrustumCfg) -> Polygon {
    let theta = facing_angle(apex, look_at);
    let left = theta + cfg.half_angle;
    let right = theta - cfg.half_angle;
    Polygon::new(vec![
        polar(apex, left, cfg.cutoff),
        polar(apex, right, cfg.cutoff),
        polar(apex, right, cfg.length),
        polar(apex, left, cfg.length),
    ])
}
