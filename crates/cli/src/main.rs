use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use viewcull::editor::{Editor, EditorEvent};
use viewcull::frustum::FrustumCfg;
use viewcull::geom2::rand::{draw_scene, SceneCfg};
use viewcull::geom2::{Circle, GeomCfg};
use viewcull::mec::{bounding_circle_with_rng, polygonize};
use viewcull::scene::Scene;
use viewcull::visibility::{build_frame, OcclusionRule, ViewCfg};

mod provenance;

use provenance::Sidecar;

#[derive(Parser)]
#[command(name = "viewcull")]
#[command(about = "Bounding-circle frustum culling and occlusion over polygon scenes")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Knobs shared by commands that build frames.
#[derive(Args, Clone, Debug)]
struct ViewArgs {
    /// Frustum half-angle in degrees
    #[arg(long, default_value_t = 22.5)]
    half_angle_deg: f64,
    /// Near offset of the frustum from the camera
    #[arg(long, default_value_t = 0.1)]
    cutoff: f64,
    /// Far offset of the frustum from the camera
    #[arg(long, default_value_t = 3.0)]
    length: f64,
    /// Only let strictly nearer objects occlude
    #[arg(long)]
    nearer_only: bool,
    /// Tolerance for the near-segment test
    #[arg(long, default_value_t = 0.1)]
    near_segment_eps: f64,
}

impl ViewArgs {
    fn to_cfg(&self) -> ViewCfg {
        ViewCfg {
            geom: GeomCfg {
                near_segment_eps: self.near_segment_eps,
                ..GeomCfg::default()
            },
            frustum: FrustumCfg {
                half_angle: self.half_angle_deg.to_radians(),
                cutoff: self.cutoff,
                length: self.length,
            },
            occlusion: if self.nearer_only {
                OcclusionRule::NearerOnly
            } else {
                OcclusionRule::SinglePassSweep
            },
            ..ViewCfg::default()
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute one frame (frustum, render list, optional overlay) for a scene
    Frame {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Shuffle seed; random when omitted (the chosen seed is logged)
        #[arg(long)]
        seed: Option<u64>,
        /// Emit bounding-circle outlines
        #[arg(long)]
        overlay: bool,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print the bounding circle of every polygon in a scene
    Mec {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
        /// Also print an n-gon approximation per circle (n >= 3)
        #[arg(long)]
        segments: Option<usize>,
    },
    /// Write a reproducible random scene
    Demo {
        #[arg(long, default_value_t = 12)]
        polygons: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Replay an editor event log (JSON array) into a scene
    Edit {
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Frame {
            scene,
            out,
            seed,
            overlay,
            view,
        } => frame(&scene, &out, seed, overlay, &view, cmd.label),
        Action::Mec {
            scene,
            seed,
            segments,
        } => mec(&scene, seed, segments),
        Action::Demo {
            polygons,
            seed,
            out,
        } => demo(polygons, seed, &out, cmd.label),
        Action::Edit { events, out } => edit(&events, &out, cmd.label),
        Action::Report => report(cmd.label),
    }
}

fn read_scene(path: &Path) -> Result<Scene> {
    let bytes = fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
    let scene: Scene = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing scene {}", path.display()))?;
    scene
        .validate()
        .with_context(|| format!("validating scene {}", path.display()))?;
    Ok(scene)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

fn frame(
    scene_path: &Path,
    out: &Path,
    seed: Option<u64>,
    overlay: bool,
    view: &ViewArgs,
    label: Option<String>,
) -> Result<()> {
    let scene = read_scene(scene_path)?;
    let seed = resolve_seed(seed);
    let cfg = view.to_cfg();
    tracing::info!(
        scene = %scene_path.display(),
        polygons = scene.polygons.len(),
        seed,
        overlay,
        label = ?label,
        "frame"
    );
    let frame = build_frame(&scene, overlay, &cfg, &mut StdRng::seed_from_u64(seed));
    let visible = frame.visible_count();
    tracing::info!(visible, culled = frame.renderables.len() - visible, "frame_done");
    write_json(out, &frame)?;
    let params = json!({
        "scene": scene_path.to_string_lossy(),
        "seed": seed,
        "overlay": overlay,
        "cfg": cfg,
    });
    Sidecar::new("frame", params, label).write_for(out)?;
    Ok(())
}

#[derive(Serialize)]
struct MecRow {
    index: usize,
    circle: Circle,
    #[serde(skip_serializing_if = "Option::is_none")]
    outline: Option<viewcull::geom2::Polygon>,
}

fn mec(scene_path: &Path, seed: Option<u64>, segments: Option<usize>) -> Result<()> {
    let scene = read_scene(scene_path)?;
    let seed = resolve_seed(seed);
    tracing::info!(scene = %scene_path.display(), seed, "mec");
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<MecRow> = scene
        .polygons
        .iter()
        .enumerate()
        .map(|(index, poly)| {
            let circle = bounding_circle_with_rng(poly, &mut rng);
            if !circle.is_finite() {
                tracing::warn!(index, "degenerate bounding circle");
            }
            MecRow {
                index,
                circle,
                outline: segments.map(|n| polygonize(&circle, n)),
            }
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn demo(polygons: usize, seed: u64, out: &Path, label: Option<String>) -> Result<()> {
    tracing::info!(polygons, seed, out = %out.display(), "demo");
    let scene = draw_scene(
        SceneCfg {
            polygons,
            ..SceneCfg::default()
        },
        seed,
    )?;
    write_json(out, &scene)?;
    let params = json!({ "polygons": polygons, "seed": seed });
    Sidecar::new("demo", params, label).write_for(out)?;
    Ok(())
}

fn edit(events_path: &Path, out: &Path, label: Option<String>) -> Result<()> {
    let bytes = fs::read(events_path)
        .with_context(|| format!("reading events {}", events_path.display()))?;
    let events: Vec<EditorEvent> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing events {}", events_path.display()))?;
    tracing::info!(events = events.len(), out = %out.display(), "edit");
    let mut editor = Editor::new();
    let count = events.len();
    editor.apply_all(events);
    if let Some(cur) = editor.current() {
        tracing::warn!(vertices = cur.len(), "uncommitted polygon left out of the scene");
    }
    let scene = editor.snapshot();
    write_json(out, &scene)?;
    let params = json!({
        "events": events_path.to_string_lossy(),
        "event_count": count,
        "overlay": editor.overlay_enabled(),
    });
    Sidecar::new("edit", params, label).write_for(out)?;
    Ok(())
}

fn report(label: Option<String>) -> Result<()> {
    let sidecar = Sidecar::new("report", json!({}), label);
    println!("{}", serde_json::to_string_pretty(&sidecar)?);
    Ok(())
}
