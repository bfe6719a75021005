//! Headless polygon editor driven by input events.
//!
//! Purpose
//! - Hold the editable state (committed polygons, the polygon being drawn,
//!   camera, pointer, hover/selection, overlay flag) and update it from
//!   device-independent `EditorEvent`s. Window polling maps raw input onto
//!   these events; `to_normalized` does the pixel → [-1, 1]² mapping.
//!
//! Model
//! - Vertices are addressed by `VertexHandle { owner, index }`, never by
//!   reference. Any structural change (commit, undo, delete) clears hover and
//!   selection, so a handle never outlives the vertex it names.
//! - Hovering picks the nearest vertex strictly inside the hover radius;
//!   committed polygons are scanned before the in-progress one.
//!
//! Code cross-refs: `scene::Scene`, `geom2::strictly_inside`

use serde::{Deserialize, Serialize};

use crate::geom2::{distance, strictly_inside, Circle, GeomCfg, Polygon, Vertex};
use crate::scene::Scene;

/// Device-independent editor input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    /// Pointer position in normalized coordinates.
    PointerMoved { at: Vertex },
    /// Primary button down.
    PointerPressed,
    /// Primary button up.
    PointerReleased,
    /// Secondary button: move the camera to the pointer.
    SetCamera,
    /// Close the in-progress polygon and add it to the list.
    Commit,
    /// Drop the last in-progress vertex (or the empty in-progress polygon).
    Undo,
    /// Remove the most recently committed polygon.
    DeleteLast,
    /// Flip the bounding-circle overlay.
    ToggleOverlay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Committed(usize),
    Current,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexHandle {
    pub owner: Owner,
    pub index: usize,
}

/// Map a window pixel position to normalized [-1, 1]² space with y up.
#[inline]
pub fn to_normalized(px: f64, py: f64, width: f64, height: f64) -> Vertex {
    Vertex::new(px / width * 2.0 - 1.0, 1.0 - py / height * 2.0)
}

#[derive(Clone, Debug, Default)]
pub struct Editor {
    polygons: Vec<Polygon>,
    current: Option<Polygon>,
    pointer: Vertex,
    camera: Vertex,
    pressed: bool,
    hovered: Option<VertexHandle>,
    selected: Option<VertexHandle>,
    overlay: bool,
    cfg: GeomCfg,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: GeomCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::PointerMoved { at } => self.pointer_moved(at),
            EditorEvent::PointerPressed => self.pointer_pressed(),
            EditorEvent::PointerReleased => {
                self.pressed = false;
                self.selected = None;
            }
            EditorEvent::SetCamera => self.camera = self.pointer,
            EditorEvent::Commit => {
                if self.current.as_ref().is_some_and(|p| !p.is_empty()) {
                    self.polygons.extend(self.current.take());
                    self.clear_handles();
                }
            }
            EditorEvent::Undo => {
                if let Some(cur) = self.current.as_mut() {
                    if cur.vertices.pop().is_none() {
                        self.current = None;
                    }
                    self.clear_handles();
                }
            }
            EditorEvent::DeleteLast => {
                if self.polygons.pop().is_some() {
                    self.clear_handles();
                }
            }
            EditorEvent::ToggleOverlay => self.overlay = !self.overlay,
        }
    }

    pub fn apply_all<I: IntoIterator<Item = EditorEvent>>(&mut self, events: I) {
        for e in events {
            self.apply(e);
        }
    }

    fn pointer_moved(&mut self, at: Vertex) {
        self.pointer = at;
        if self.pressed {
            if let Some(h) = self.selected {
                if let Some(v) = self.vertex_mut(h) {
                    *v = at;
                }
            }
        } else {
            self.hovered = self.pick(at);
        }
    }

    fn pointer_pressed(&mut self) {
        if self.pressed {
            return;
        }
        self.pressed = true;
        if self.hovered.is_some() {
            self.selected = self.hovered;
        } else {
            let at = self.pointer;
            self.current.get_or_insert_with(Polygon::default).vertices.push(at);
        }
    }

    fn clear_handles(&mut self) {
        self.hovered = None;
        self.selected = None;
    }

    fn owned(&self) -> impl Iterator<Item = (Owner, &Polygon)> + '_ {
        self.polygons
            .iter()
            .enumerate()
            .map(|(i, p)| (Owner::Committed(i), p))
            .chain(self.current.iter().map(|p| (Owner::Current, p)))
    }

    /// Nearest vertex strictly within the hover radius of `at`.
    pub fn pick(&self, at: Vertex) -> Option<VertexHandle> {
        let mut best = None;
        let mut radius = self.cfg.hover_radius;
        for (owner, poly) in self.owned() {
            for (index, &v) in poly.vertices.iter().enumerate() {
                if strictly_inside(v, &Circle::new(at, radius)) {
                    radius = distance(at, v);
                    best = Some(VertexHandle { owner, index });
                }
            }
        }
        best
    }

    pub fn vertex(&self, h: VertexHandle) -> Option<Vertex> {
        let poly = match h.owner {
            Owner::Committed(i) => self.polygons.get(i)?,
            Owner::Current => self.current.as_ref()?,
        };
        poly.vertices.get(h.index).copied()
    }

    fn vertex_mut(&mut self, h: VertexHandle) -> Option<&mut Vertex> {
        let poly = match h.owner {
            Owner::Committed(i) => self.polygons.get_mut(i)?,
            Owner::Current => self.current.as_mut()?,
        };
        poly.vertices.get_mut(h.index)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn current(&self) -> Option<&Polygon> {
        self.current.as_ref()
    }

    pub fn camera(&self) -> Vertex {
        self.camera
    }

    pub fn pointer(&self) -> Vertex {
        self.pointer
    }

    pub fn hovered(&self) -> Option<VertexHandle> {
        self.hovered
    }

    pub fn selected(&self) -> Option<VertexHandle> {
        self.selected
    }

    pub fn overlay_enabled(&self) -> bool {
        self.overlay
    }

    /// Frame input: committed polygons only; the in-progress polygon is not culled.
    pub fn snapshot(&self) -> Scene {
        Scene {
            polygons: self.polygons.clone(),
            camera: self.camera,
            pointer: self.pointer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn click(ed: &mut Editor, at: Vertex) {
        ed.apply_all([
            EditorEvent::PointerMoved { at },
            EditorEvent::PointerPressed,
            EditorEvent::PointerReleased,
        ]);
    }

    fn triangle(ed: &mut Editor, at: Vertex) {
        click(ed, at);
        click(ed, at + vector![0.5, 0.0]);
        click(ed, at + vector![0.0, 0.5]);
    }

    #[test]
    fn pixel_mapping() {
        assert_eq!(to_normalized(0.0, 0.0, 800.0, 600.0), vector![-1.0, 1.0]);
        assert_eq!(to_normalized(400.0, 300.0, 800.0, 600.0), vector![0.0, 0.0]);
        assert_eq!(to_normalized(800.0, 600.0, 800.0, 600.0), vector![1.0, -1.0]);
    }

    #[test]
    fn draw_and_commit() {
        let mut ed = Editor::new();
        triangle(&mut ed, Vertex::zeros());
        assert_eq!(ed.current().map(Polygon::len), Some(3));
        assert!(ed.polygons().is_empty());
        ed.apply(EditorEvent::Commit);
        assert!(ed.current().is_none());
        assert_eq!(ed.polygons().len(), 1);
        assert_eq!(ed.snapshot().polygons[0].vertices[2], vector![0.0, 0.5]);
        // committing nothing is a no-op
        ed.apply(EditorEvent::Commit);
        assert_eq!(ed.polygons().len(), 1);
    }

    #[test]
    fn clicking_a_vertex_selects_and_drags_it() {
        let mut ed = Editor::new();
        triangle(&mut ed, Vertex::zeros());
        ed.apply(EditorEvent::Commit);
        ed.apply(EditorEvent::PointerMoved {
            at: vector![0.51, 0.01],
        });
        let h = ed.hovered().expect("hover");
        assert_eq!(
            h,
            VertexHandle {
                owner: Owner::Committed(0),
                index: 1
            }
        );
        ed.apply(EditorEvent::PointerPressed);
        assert_eq!(ed.selected(), Some(h));
        ed.apply(EditorEvent::PointerMoved {
            at: vector![0.8, -0.2],
        });
        assert_eq!(ed.vertex(h), Some(vector![0.8, -0.2]));
        ed.apply(EditorEvent::PointerReleased);
        assert!(ed.selected().is_none());
        // no vertex was added by the selecting click
        assert!(ed.current().is_none());
    }

    #[test]
    fn hover_picks_the_nearest_inside_the_radius() {
        let mut ed = Editor::new();
        click(&mut ed, vector![0.0, 0.0]);
        click(&mut ed, vector![0.3, 0.0]);
        // 0.03 away from the second vertex, 0.27 from the first
        assert_eq!(
            ed.pick(vector![0.27, 0.0]),
            Some(VertexHandle {
                owner: Owner::Current,
                index: 1
            })
        );
        assert_eq!(ed.pick(vector![0.15, 0.0]), None);
        // boundary is exclusive
        let r = GeomCfg::default().hover_radius;
        assert_eq!(ed.pick(vector![-r, 0.0]), None);
    }

    #[test]
    fn hover_radius_is_configurable() {
        let mut ed = Editor::with_cfg(GeomCfg {
            hover_radius: 0.2,
            ..GeomCfg::default()
        });
        click(&mut ed, vector![0.0, 0.0]);
        assert!(ed.pick(vector![0.1, 0.1]).is_some());
        assert!(Editor::new().pick(vector![0.1, 0.1]).is_none());
    }

    #[test]
    fn undo_and_delete() {
        let mut ed = Editor::new();
        triangle(&mut ed, Vertex::zeros());
        ed.apply(EditorEvent::Undo);
        assert_eq!(ed.current().map(Polygon::len), Some(2));
        ed.apply_all([EditorEvent::Undo, EditorEvent::Undo]);
        assert_eq!(ed.current().map(Polygon::len), Some(0));
        ed.apply(EditorEvent::Undo);
        assert!(ed.current().is_none());

        triangle(&mut ed, Vertex::zeros());
        ed.apply(EditorEvent::Commit);
        // away from the first triangle, or the clicks would select its vertices
        triangle(&mut ed, vector![-0.9, -0.9]);
        ed.apply(EditorEvent::Commit);
        assert_eq!(ed.polygons().len(), 2);
        ed.apply(EditorEvent::DeleteLast);
        assert_eq!(ed.polygons().len(), 1);
    }

    #[test]
    fn structural_changes_clear_handles() {
        let mut ed = Editor::new();
        triangle(&mut ed, Vertex::zeros());
        ed.apply(EditorEvent::Commit);
        ed.apply(EditorEvent::PointerMoved {
            at: vector![0.0, 0.5],
        });
        assert!(ed.hovered().is_some());
        ed.apply(EditorEvent::DeleteLast);
        assert!(ed.hovered().is_none());
        // the next press starts a new polygon instead of selecting a stale handle
        ed.apply(EditorEvent::PointerPressed);
        assert_eq!(ed.current().map(Polygon::len), Some(1));
    }

    #[test]
    fn camera_overlay_and_snapshot() {
        let mut ed = Editor::new();
        assert!(!ed.overlay_enabled());
        ed.apply_all([
            EditorEvent::PointerMoved {
                at: vector![-0.4, 0.2],
            },
            EditorEvent::SetCamera,
            EditorEvent::PointerMoved {
                at: vector![0.6, 0.2],
            },
            EditorEvent::ToggleOverlay,
        ]);
        assert!(ed.overlay_enabled());
        let scene = ed.snapshot();
        assert_eq!(scene.camera, vector![-0.4, 0.2]);
        assert_eq!(scene.pointer, vector![0.6, 0.2]);
        assert_eq!(ed.camera(), scene.camera);
        assert_eq!(ed.pointer(), scene.pointer);
    }

    #[test]
    fn events_from_json() {
        let json = r#"[
            {"event": "pointer_moved", "at": [0.1, 0.2]},
            {"event": "pointer_pressed"},
            {"event": "pointer_released"},
            {"event": "commit"}
        ]"#;
        let events: Vec<EditorEvent> = serde_json::from_str(json).unwrap();
        let mut ed = Editor::new();
        ed.apply_all(events);
        assert_eq!(ed.polygons(), &[Polygon::new(vec![vector![0.1, 0.2]])]);
    }
}
