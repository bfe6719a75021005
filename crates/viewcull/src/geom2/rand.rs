//! Random star-shaped polygons and scenes (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for editor-like scenes used by
//!   benches, property tests and the CLI `demo` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, sort by angle and emit the vertices in that order. The
//!   result is star-shaped around its center (not necessarily convex).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `crate::scene::Scene`, `crate::mec::bounding_circle`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Polygon, Vertex};
use crate::scene::{Scene, SceneError};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius around the polygon center.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 8 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.4,
            base_radius: 0.12,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped polygon centered at `center`.
pub fn draw_polygon_radial(cfg: RadialCfg, center: Vertex, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let vertices = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            center + Vertex::new(th.cos(), th.sin()) * r
        })
        .collect();
    Polygon::new(vertices)
}

/// Scene sampler configuration: polygon count, shape and placement extent.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    pub polygons: usize,
    pub shape: RadialCfg,
    /// Polygon centers are uniform in `[-extent, extent]²`.
    pub extent: f64,
}
impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            polygons: 12,
            shape: RadialCfg::default(),
            extent: 0.8,
        }
    }
}

impl SceneCfg {
    fn validate(&self) -> Result<(), SceneError> {
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(SceneError::invalid("extent must be finite and > 0"));
        }
        if !(self.shape.base_radius.is_finite() && self.shape.radial_jitter.is_finite()) {
            return Err(SceneError::invalid("shape radii must be finite"));
        }
        Ok(())
    }
}

/// Draw a reproducible scene: polygon `i` uses replay token `(seed, i)`.
///
/// Camera starts at the origin and the pointer one unit to its right.
pub fn draw_scene(cfg: SceneCfg, seed: u64) -> Result<Scene, SceneError> {
    cfg.validate()?;
    let mut placement = StdRng::seed_from_u64(seed);
    let polygons = (0..cfg.polygons)
        .map(|i| {
            let center = Vertex::new(
                placement.gen_range(-cfg.extent..=cfg.extent),
                placement.gen_range(-cfg.extent..=cfg.extent),
            );
            draw_polygon_radial(
                cfg.shape,
                center,
                ReplayToken {
                    seed,
                    index: i as u64,
                },
            )
        })
        .collect();
    Ok(Scene {
        polygons,
        camera: Vertex::zeros(),
        pointer: Vertex::new(1.0, 0.0),
    })
}
