//! Per-frame editor snapshot consumed by the visibility pipeline.
//!
//! A `Scene` is what the editor hands over each frame: the committed polygons,
//! the camera and the pointer. It (de)serializes with serde so the CLI can read
//! and write it as JSON; vertices are `[x, y]` arrays.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geom2::{Polygon, Vertex};

/// Error type for scene validation and scene sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    InvalidParams { reason: String },
    NonFinite { what: String },
}

impl SceneError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn non_finite(what: impl Into<String>) -> Self {
        Self::NonFinite { what: what.into() }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid scene params: {reason}"),
            Self::NonFinite { what } => write!(f, "non-finite coordinate in {what}"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Read-only frame input: polygons, camera position and pointer (look-at) position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub polygons: Vec<Polygon>,
    pub camera: Vertex,
    pub pointer: Vertex,
}

#[inline]
fn finite(v: &Vertex) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

impl Scene {
    /// Reject NaN/inf coordinates; the geometry core assumes finite input.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !finite(&self.camera) {
            return Err(SceneError::non_finite("camera"));
        }
        if !finite(&self.pointer) {
            return Err(SceneError::non_finite("pointer"));
        }
        for (i, poly) in self.polygons.iter().enumerate() {
            if let Some(k) = poly.vertices.iter().position(|v| !finite(v)) {
                return Err(SceneError::non_finite(format!("polygon {i}, vertex {k}")));
            }
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.polygons.iter().map(Polygon::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn json_shape() {
        let json = r#"{
            "polygons": [{"vertices": [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]}],
            "camera": [-0.5, 0.0],
            "pointer": [0.5, 0.25]
        }"#;
        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.polygons.len(), 1);
        assert_eq!(scene.vertex_count(), 3);
        assert_eq!(scene.camera, vector![-0.5, 0.0]);
        assert_eq!(scene.pointer, vector![0.5, 0.25]);
        assert!(scene.validate().is_ok());

        let back: Scene = serde_json::from_str(&serde_json::to_string(&scene).unwrap()).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn polygons_default_to_empty() {
        let scene: Scene =
            serde_json::from_str(r#"{"camera": [0.0, 0.0], "pointer": [1.0, 0.0]}"#).unwrap();
        assert!(scene.polygons.is_empty());
    }

    #[test]
    fn validate_reports_the_offending_coordinate() {
        let mut scene = Scene {
            polygons: vec![Polygon::new(vec![vector![0.0, 0.0], vector![f64::NAN, 1.0]])],
            camera: vector![0.0, 0.0],
            pointer: vector![1.0, 0.0],
        };
        let err = scene.validate().unwrap_err();
        assert_eq!(err.to_string(), "non-finite coordinate in polygon 0, vertex 1");

        scene.polygons.clear();
        scene.camera.x = f64::INFINITY;
        assert_eq!(
            scene.validate(),
            Err(SceneError::NonFinite {
                what: "camera".into()
            })
        );
    }
}
