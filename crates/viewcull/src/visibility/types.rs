//! Pipeline configuration and per-frame output records.
//!
//! Output records borrow from the caller's polygon list; they never own polygons.

use serde::{Deserialize, Serialize};

use crate::cfg::OUTLINE_SEGMENTS;
use crate::frustum::FrustumCfg;
use crate::geom2::{Circle, GeomCfg, Polygon};

/// Which visible objects may occlude a given target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcclusionRule {
    /// One far-to-near sweep; any still-visible object occludes any other,
    /// whatever their distance relation.
    #[default]
    SinglePassSweep,
    /// Same sweep, but an occluder must be strictly nearer than its target.
    NearerOnly,
}

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewCfg {
    pub geom: GeomCfg,
    pub frustum: FrustumCfg,
    pub occlusion: OcclusionRule,
    /// Sides of each overlay outline.
    pub outline_segments: usize,
}

impl Default for ViewCfg {
    fn default() -> Self {
        Self {
            geom: GeomCfg::default(),
            frustum: FrustumCfg::default(),
            occlusion: OcclusionRule::default(),
            outline_segments: OUTLINE_SEGMENTS,
        }
    }
}

/// One polygon annotated for the renderer.
///
/// `distance` is measured from the camera to the bounding-circle center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Renderable<'a> {
    /// Position in the input polygon list.
    pub index: usize,
    pub polygon: &'a Polygon,
    pub circle: Circle,
    pub distance: f64,
    pub visible: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame<'a> {
    pub frustum: Polygon,
    /// Back-to-front (farthest first).
    pub renderables: Vec<Renderable<'a>>,
    /// Bounding-circle outlines, only when the overlay is enabled.
    pub outlines: Vec<Polygon>,
}

impl<'a> Frame<'a> {
    pub fn visible(&self) -> impl Iterator<Item = &Renderable<'a>> + '_ {
        self.renderables.iter().filter(|r| r.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }
}
