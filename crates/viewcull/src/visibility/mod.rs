//! Per-frame visibility: frustum culling, back-to-front order, occlusion.
//!
//! Purpose
//! - Turn a polygon list plus camera into a render list the renderer can draw
//!   with the painter's algorithm, hiding objects outside the frustum or fully
//!   behind another object's bounding circle.
//!
//! Pipeline (recomputed from scratch every call)
//! 1. Bounding circle per polygon (`mec`), distance camera→center.
//! 2. Visible iff the circle center is inside the frustum or the circle
//!    crosses a frustum edge.
//! 3. Stable sort by descending distance (farthest first).
//! 4. Occlusion sweep in that order (`occlusion`).
//!
//! The only non-determinism is the MEC shuffle; pass a seeded generator to
//! `compute_visibility_with` for reproducible frames.
//!
//! Code cross-refs: `mec::bounding_circle_with_rng`, `frustum::build_frustum_with`,
//! `geom2::{point_in_polygon, segment_circle_intersects, ray_circle_intersects}`

mod occlusion;
mod types;

pub use occlusion::fully_occluded;
pub use types::{Frame, OcclusionRule, Renderable, ViewCfg};

use rand::Rng;

use crate::frustum::build_frustum_with;
use crate::geom2::{distance, point_in_polygon, segment_circle_intersects, Circle, Polygon, Vertex};
use crate::mec::{bounding_circle_with_rng, polygonize};
use crate::scene::Scene;

/// Circle center inside `frustum`, or the circle crossing one of its edges.
pub fn circle_in_frustum(circle: &Circle, frustum: &Polygon, eps: f64) -> bool {
    point_in_polygon(frustum, circle.center)
        || frustum
            .edges()
            .any(|(a, b)| segment_circle_intersects(a, b, circle, eps))
}

/// Render list with default tolerances and a non-deterministic shuffle.
pub fn compute_visibility<'a>(
    polygons: &'a [Polygon],
    camera: Vertex,
    frustum: &Polygon,
) -> Vec<Renderable<'a>> {
    compute_visibility_with(
        polygons,
        camera,
        frustum,
        &ViewCfg::default(),
        &mut rand::thread_rng(),
    )
}

/// Render list, farthest first. Polygons are borrowed, never mutated.
pub fn compute_visibility_with<'a, R: Rng + ?Sized>(
    polygons: &'a [Polygon],
    camera: Vertex,
    frustum: &Polygon,
    cfg: &ViewCfg,
    rng: &mut R,
) -> Vec<Renderable<'a>> {
    let eps = cfg.geom.near_segment_eps;
    let mut out: Vec<Renderable<'a>> = polygons
        .iter()
        .enumerate()
        .map(|(index, polygon)| {
            let circle = bounding_circle_with_rng(polygon, rng);
            Renderable {
                index,
                polygon,
                circle,
                distance: distance(camera, circle.center),
                visible: circle_in_frustum(&circle, frustum, eps),
            }
        })
        .collect();
    // total_cmp keeps the order total when a degenerate circle yields NaN.
    out.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    occlusion::resolve_occlusion(&mut out, camera, cfg.occlusion);
    out
}

/// Frustum from the scene's camera and pointer, render list, and (when
/// `overlay` is set) one outline per finite bounding circle.
pub fn build_frame<'a, R: Rng + ?Sized>(
    scene: &'a Scene,
    overlay: bool,
    cfg: &ViewCfg,
    rng: &mut R,
) -> Frame<'a> {
    let frustum = build_frustum_with(scene.camera, scene.pointer, &cfg.frustum);
    let renderables = compute_visibility_with(&scene.polygons, scene.camera, &frustum, cfg, rng);
    let outlines = if overlay {
        renderables
            .iter()
            .filter_map(|r| {
                if r.circle.is_finite() {
                    Some(polygonize(&r.circle, cfg.outline_segments))
                } else {
                    tracing::trace!(index = r.index, "skipping non-finite bounding circle");
                    None
                }
            })
            .collect()
    } else {
        Vec::new()
    };
    let frame = Frame {
        frustum,
        renderables,
        outlines,
    };
    tracing::debug!(
        polygons = scene.polygons.len(),
        visible = frame.visible_count(),
        outlines = frame.outlines.len(),
        "frame"
    );
    frame
}
