//! 2D primitives and predicates.
//!
//! Purpose
//! - Provide `Vertex`, `Polygon`, `Circle`, `Ray` and the tolerance bundle
//!   `GeomCfg` as plain data.
//! - Keep every predicate a free, stateless function (`predicates`), so the
//!   MEC solver, the frustum test and occlusion share one implementation.
//!
//! Code cross-refs: `crate::mec`, `crate::frustum`, `crate::visibility`

mod predicates;
pub mod rand;
mod types;

pub use predicates::{
    direction, distance, inside_of, point_in_polygon, point_near_segment, ray_circle_intersects,
    segment_circle_intersects, strictly_inside,
};
pub use types::{Circle, GeomCfg, Polygon, Ray, Vertex};
