//! Print a few seeded frames for a quick sanity check of culling counts.
//!
//! Usage:
//!   cargo run -p viewcull --example frame_summary -- [seed]
//!
//! Sweeps the pointer around the camera and reports visible/total per step.

use rand::{rngs::StdRng, SeedableRng};
use viewcull::geom2::rand::{draw_scene, SceneCfg};
use viewcull::geom2::Vertex;
use viewcull::visibility::{build_frame, ViewCfg};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let mut scene = match draw_scene(SceneCfg::default(), seed) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("scene: {e}");
            return;
        }
    };
    let cfg = ViewCfg::default();
    let mut rng = StdRng::seed_from_u64(seed);
    for step in 0..8 {
        let angle = std::f64::consts::TAU * (step as f64) / 8.0;
        scene.pointer = scene.camera + Vertex::new(angle.cos(), angle.sin());
        let frame = build_frame(&scene, false, &cfg, &mut rng);
        println!(
            "step {step}: facing {:>5.1}°, visible {}/{}",
            angle.to_degrees(),
            frame.visible_count(),
            frame.renderables.len()
        );
    }
}
