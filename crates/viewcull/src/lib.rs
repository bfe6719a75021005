//! 2D visibility engine: minimum enclosing circles, frustum culling and
//! bounding-circle occlusion for an interactive polygon editor.
//!
//! Layout
//! - `geom2`: primitives and stateless predicates (plus a random scene sampler).
//! - `mec`: Welzl minimum enclosing circle and circle sampling.
//! - `frustum`: field-of-view trapezoid from camera and pointer.
//! - `visibility`: per-frame render list (frustum test, back-to-front order,
//!   occlusion) and the optional bounding-circle overlay.
//! - `scene`, `editor`: the editor-side snapshot and the headless editor.
//!
//! Everything is single-threaded and recomputed per call; nothing is cached.

mod cfg;

pub mod api;
pub mod editor;
pub mod frustum;
pub mod geom2;
pub mod mec;
pub mod scene;
pub mod visibility;

pub use cfg::OUTLINE_SEGMENTS;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::editor::{Editor, EditorEvent};
    pub use crate::frustum::{build_frustum, build_frustum_with, FrustumCfg};
    pub use crate::geom2::{Circle, GeomCfg, Polygon, Ray, Vertex};
    pub use crate::mec::{bounding_circle, bounding_circle_with_rng, polygonize};
    pub use crate::scene::{Scene, SceneError};
    pub use crate::visibility::{
        build_frame, compute_visibility, compute_visibility_with, Frame, OcclusionRule, Renderable,
        ViewCfg,
    };
}
