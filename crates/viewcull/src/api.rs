//! Curated surface for the editor and renderer collaborators.
//!
//! The renderer consumes `Frame` (frustum, render list, overlay outlines);
//! the editor produces `Scene` snapshots. Everything else is reachable
//! through the module tree when finer control is needed.

// Geometry
pub use crate::geom2::{
    direction, distance, inside_of, point_in_polygon, point_near_segment, ray_circle_intersects,
    segment_circle_intersects, strictly_inside, Circle, GeomCfg, Polygon, Ray, Vertex,
};
// Minimum enclosing circle
pub use crate::mec::{
    bounding_circle, bounding_circle_with_rng, circumcircle, enclosing_circle_with_rng,
    polygonize, welzl, SupportSet,
};
// Frustum and visibility
pub use crate::frustum::{build_frustum, build_frustum_with, facing_angle, FrustumCfg};
pub use crate::visibility::{
    build_frame, circle_in_frustum, compute_visibility, compute_visibility_with, fully_occluded,
    Frame, OcclusionRule, Renderable, ViewCfg,
};
// Editor side
pub use crate::editor::{to_normalized, Editor, EditorEvent, Owner, VertexHandle};
pub use crate::geom2::rand::{
    draw_polygon_radial, draw_scene, RadialCfg, ReplayToken, SceneCfg, VertexCount,
};
pub use crate::scene::{Scene, SceneError};
