//! `<stem>.provenance.json` sidecars next to written scene and frame files.
//!
//! A sidecar records which build produced the artifact (`code_rev`,
//! `version`), which subcommand and parameters were used, and the size of
//! the artifact at the time it was written.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Output {
    pub path: String,
    pub bytes: u64,
}

#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub version: &'static str,
    pub command: &'static str,
    pub label: Option<String>,
    pub params: Value,
    pub outputs: Vec<Output>,
}

impl Sidecar {
    pub fn new(command: &'static str, params: Value, label: Option<String>) -> Self {
        Self {
            code_rev: code_rev(),
            version: viewcull::VERSION,
            command,
            label,
            params,
            outputs: Vec::new(),
        }
    }

    /// Record `artifact` (already on disk) and write the sidecar beside it.
    pub fn write_for(mut self, artifact: &Path) -> Result<PathBuf> {
        let meta = fs::metadata(artifact)
            .with_context(|| format!("inspecting artifact {}", artifact.display()))?;
        self.outputs.push(Output {
            path: artifact.to_string_lossy().into_owned(),
            bytes: meta.len(),
        });
        let path = sidecar_path(artifact);
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), command = self.command, "provenance");
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit the binary was built from: `GIT_COMMIT` at build time, then at run
/// time, then `git rev-parse HEAD`, else "unknown".
pub fn code_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout).ok().map(|s| s.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/frame.json")),
            Path::new("/tmp/output/frame.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("scene")),
            Path::new("scene.provenance.json")
        );
    }

    #[test]
    fn write_for_records_command_and_artifact_size() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("scene.json");
        fs::write(&artifact, r#"{"polygons": []}"#).unwrap();
        let sidecar = Sidecar::new("demo", json!({"seed": 3}), Some("smoke".into()));
        let path = sidecar.write_for(&artifact).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "demo");
        assert_eq!(parsed["label"], "smoke");
        assert_eq!(parsed["params"]["seed"], 3);
        assert_eq!(parsed["version"], viewcull::VERSION);
        assert_eq!(parsed["outputs"][0]["path"], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["outputs"][0]["bytes"], 16);
    }

    #[test]
    fn missing_artifact_is_an_error() {
        let dir = tempdir().unwrap();
        let err = Sidecar::new("frame", json!({}), None)
            .write_for(&dir.path().join("nope.json"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }
}
