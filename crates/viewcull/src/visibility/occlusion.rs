//! Mutual occlusion between bounding circles.
//!
//! A target is fully occluded by a circle when the ray from the camera through
//! every one of its vertices hits that circle. The sweep visits objects in the
//! order given (far to near after sorting); invisible objects are skipped both
//! as occluders and as targets.

use crate::geom2::{ray_circle_intersects, Circle, Polygon, Ray, Vertex};

use super::types::{OcclusionRule, Renderable};

/// Every camera-to-vertex ray of `target` hits `occluder`.
///
/// A polygon without vertices is never occluded. A vertex at the camera gives
/// a NaN ray, which never hits.
pub fn fully_occluded(target: &Polygon, camera: Vertex, occluder: &Circle) -> bool {
    !target.is_empty()
        && target
            .vertices
            .iter()
            .all(|&v| ray_circle_intersects(&Ray::through(camera, v), occluder))
}

/// Single pass over `objects`, clearing `visible` on every occluded target.
pub(crate) fn resolve_occlusion(objects: &mut [Renderable<'_>], camera: Vertex, rule: OcclusionRule) {
    for i in 0..objects.len() {
        if !objects[i].visible {
            continue;
        }
        let occluder = objects[i].circle;
        let occluder_distance = objects[i].distance;
        for j in 0..objects.len() {
            if j == i || !objects[j].visible {
                continue;
            }
            if rule == OcclusionRule::NearerOnly && occluder_distance >= objects[j].distance {
                continue;
            }
            if fully_occluded(objects[j].polygon, camera, &occluder) {
                objects[j].visible = false;
            }
        }
    }
}
