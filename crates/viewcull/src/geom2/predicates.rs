//! Stateless geometric predicates over `Vertex`, `Circle`, `Ray` and `Polygon`.
//!
//! Purpose
//! - Provide the point/segment/circle/ray tests used by the MEC solver, the
//!   frustum test, occlusion and editor hit-testing.
//!
//! Numerics
//! - Plain IEEE `f64`, no exact arithmetic. Degenerate inputs (zero-length
//!   directions, coincident points) propagate NaN instead of being clamped;
//!   every comparison against NaN is false, so such tests report "no hit".
//!
//! Code cross-refs: `types::{Circle, Ray, Polygon, GeomCfg}`

use super::types::{Circle, Polygon, Ray, Vertex};

/// Euclidean distance.
#[inline]
pub fn distance(a: Vertex, b: Vertex) -> f64 {
    (a - b).norm()
}

/// Unit vector from `from` to `to` (subtract, then normalize).
///
/// Pre: `from != to`. Coincident points yield a NaN vector.
#[inline]
pub fn direction(from: Vertex, to: Vertex) -> Vertex {
    let d = to - from;
    d / d.norm()
}

/// Inclusive point-in-circle: `|v - c|² <= r²`. Support test of the MEC solver.
#[inline]
pub fn inside_of(v: Vertex, c: &Circle) -> bool {
    (v - c.center).norm_squared() <= c.radius * c.radius
}

/// Strict point-in-circle: `|v - c|² < r²`. Used for hit-testing.
#[inline]
pub fn strictly_inside(v: Vertex, c: &Circle) -> bool {
    (v - c.center).norm_squared() < c.radius * c.radius
}

/// Even-odd (crossing-number) test over the implicitly closed edge set.
///
/// An edge toggles membership when it crosses the height of `p` and `p` is
/// left of the edge at that height. Crossing is half-open: an edge spans
/// `p.y` when exactly one endpoint lies strictly above it, so an endpoint at
/// exactly `p.y` counts as below. This is not the "strictly between both
/// endpoints" rule: when `p.y` equals a vertex height, the two edges meeting
/// there are counted once rather than both skipped, and a point level with an
/// apex is classified correctly.
/// The straddle condition excludes horizontal edges, so the division is safe.
pub fn point_in_polygon(poly: &Polygon, p: Vertex) -> bool {
    let mut inside = false;
    for (a, b) in poly.edges() {
        if (a.y > p.y) != (b.y > p.y) {
            let x_at = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_at {
                inside = !inside;
            }
        }
    }
    inside
}

/// Ellipse approximation of "p is near segment AB":
/// `| |A-p| + |p-B| - |A-B| | <= eps`.
///
/// This is not the perpendicular distance. Points beyond an endpoint by `d`
/// score about `2d`, points beside the middle score much less.
#[inline]
pub fn point_near_segment(a: Vertex, b: Vertex, p: Vertex, eps: f64) -> bool {
    (distance(a, p) + distance(p, b) - distance(a, b)).abs() <= eps
}

/// Segment AB touches the open disk of `c`.
///
/// Endpoints strictly inside hit immediately. Otherwise the center is
/// projected onto the line AB; when that foot is not near the segment (per
/// `point_near_segment`) the result is false, else the foot must be strictly
/// closer than the radius. Zero-length segments reduce to the endpoint test.
pub fn segment_circle_intersects(a: Vertex, b: Vertex, c: &Circle, eps: f64) -> bool {
    if strictly_inside(a, c) || strictly_inside(b, c) {
        return true;
    }
    let ab = b - a;
    let t = (c.center - a).dot(&ab) / ab.norm_squared();
    let foot = a + ab * t;
    if !point_near_segment(a, b, foot, eps) {
        return false;
    }
    distance(foot, c.center) < c.radius
}

/// The line carrying `ray` passes strictly within `c.radius` of the center.
///
/// No `t >= 0` clamp: circles behind the origin count as hits.
/// Pre: `ray.direction` has unit length.
#[inline]
pub fn ray_circle_intersects(ray: &Ray, c: &Circle) -> bool {
    let t = ray.direction.dot(&(c.center - ray.origin));
    distance(ray.at(t), c.center) < c.radius
}
