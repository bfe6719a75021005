//! Fixed defaults (internal).
//!
//! Policy
//! - These seed `GeomCfg::default()` and `FrustumCfg::default()`; callers that
//!   need other values override the config structs rather than these constants.

/// Slack for `point_near_segment`, in normalized [-1, 1] units.
pub(crate) const NEAR_SEGMENT_EPS: f64 = 0.1;
/// Pointer pick radius for vertex hovering.
pub(crate) const HOVER_RADIUS: f64 = 0.035;

/// Frustum half-angle: a quarter-π total field of view.
pub(crate) const FRUSTUM_HALF_ANGLE: f64 = std::f64::consts::FRAC_PI_8;
/// Distance from the apex to the near edge.
pub(crate) const FRUSTUM_CUTOFF: f64 = 0.1;
/// Distance from the apex to the far edge.
pub(crate) const FRUSTUM_LENGTH: f64 = 3.0;

/// Sides of the regular polygon used to draw bounding-circle outlines.
pub const OUTLINE_SEGMENTS: usize = 32;
