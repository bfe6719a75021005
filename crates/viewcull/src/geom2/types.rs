//! Basic 2D types and tolerances shared by predicates, MEC and visibility.
//!
//! - `GeomCfg`: centralizes the near-segment epsilon and the hover radius.
//! - `Polygon`: ordered vertex list, implicitly closed.
//! - `Circle`: center + radius; `Circle::null()` is the empty-set fallback.
//! - `Ray`: origin + unit direction, built with `Ray::through`.
//!
//! Code cross-refs: `predicates`, `crate::mec::welzl`, `crate::visibility`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::{HOVER_RADIUS, NEAR_SEGMENT_EPS};

/// 2D point in the normalized [-1, 1]² editor space (y up).
pub type Vertex = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// Slack for the ellipse test in `point_near_segment`.
    pub near_segment_eps: f64,
    /// Pick radius around the pointer for vertex hovering (strict test).
    pub hover_radius: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            near_segment_eps: NEAR_SEGMENT_EPS,
            hover_radius: HOVER_RADIUS,
        }
    }
}

/// Ordered vertex sequence; the last edge connects the final vertex to the first.
///
/// Fewer than three vertices means no interior. Such polygons still get a
/// bounding circle (point, segment or null circle).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    #[inline]
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Closed edge list `(v[i], v[i+1 mod n])`. Empty for fewer than two vertices.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
}

/// Circle with `radius >= 0` (for finite inputs).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vertex,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Vertex, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Zero-radius circle at the origin; the MEC of the empty set.
    #[inline]
    pub fn null() -> Self {
        Self {
            center: Vertex::zeros(),
            radius: 0.0,
        }
    }

    /// False when a degenerate support set (collinear triple) produced NaN/inf.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.x.is_finite() && self.center.y.is_finite() && self.radius.is_finite()
    }
}

/// Half-line `origin + t·direction`. Predicates treat it as an infinite line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vertex,
    /// Expected unit length.
    pub direction: Vertex,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vertex, direction: Vertex) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` towards `target`; NaN direction when the two coincide.
    #[inline]
    pub fn through(origin: Vertex, target: Vertex) -> Self {
        Self {
            origin,
            direction: super::predicates::direction(origin, target),
        }
    }

    #[inline]
    pub fn at(&self, t: f64) -> Vertex {
        self.origin + self.direction * t
    }
}
