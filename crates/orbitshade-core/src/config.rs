//! JSON viewer configuration.
//!
//! Every section is optional; missing sections fall back to the defaults below. Relative shader
//! paths resolve against the directory of the config file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::EngineError;

/// Identifier of the vertex shader resource.
pub const VERT_ID: &str = "vert";
/// Identifier of the fragment shader resource.
pub const FRAG_ID: &str = "frag";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "orbitshade".to_string(),
            width: 960,
            height: 540,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FpsConfig {
    pub enabled: bool,
    /// Averaging window for the readout, in milliseconds.
    pub window_ms: u64,
}

impl Default for FpsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    /// Shader identifier -> file path.
    pub shaders: BTreeMap<String, PathBuf>,
    pub fps: FpsConfig,
    pub vsync: bool,

    /// Directory relative shader paths resolve against. Set by the loader, never read from JSON.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let mut shaders = BTreeMap::new();
        shaders.insert(VERT_ID.to_string(), PathBuf::from("shaders/quad.vert"));
        shaders.insert(FRAG_ID.to_string(), PathBuf::from("shaders/orbit.frag"));
        Self {
            window: WindowConfig::default(),
            shaders,
            fps: FpsConfig::default(),
            vsync: true,
            base_dir: PathBuf::from("."),
        }
    }
}

impl ViewerConfig {
    /// Point `id` at `path` (used for command-line overrides).
    pub fn set_shader(&mut self, id: &str, path: impl Into<PathBuf>) {
        self.shaders.insert(id.to_string(), path.into());
    }

    /// Resolve a shader identifier to a loadable path.
    pub fn resolve_shader(&self, id: &str) -> Result<PathBuf, EngineError> {
        let path = self
            .shaders
            .get(id)
            .ok_or_else(|| EngineError::UnknownShader(id.to_string()))?;
        if path.is_absolute() {
            Ok(path.clone())
        } else {
            Ok(self.base_dir.join(path))
        }
    }

    /// Check the invariants serde cannot express. `origin` is only used in error messages.
    pub fn validate(&self, origin: &Path) -> Result<(), EngineError> {
        let invalid = |msg: String| EngineError::InvalidConfig {
            path: origin.to_path_buf(),
            msg,
        };

        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.fps.window_ms == 0 {
            return Err(invalid("fps.window_ms must be greater than 0".to_string()));
        }
        for id in [VERT_ID, FRAG_ID] {
            match self.shaders.get(id) {
                None => return Err(invalid(format!("shaders.{id} is missing"))),
                Some(p) if p.as_os_str().is_empty() => {
                    return Err(invalid(format!("shaders.{id} is empty")))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Parse a config from JSON text. Relative paths resolve against `base_dir`.
pub fn parse_viewer_config(
    text: &str,
    origin: &Path,
    base_dir: &Path,
) -> Result<ViewerConfig, EngineError> {
    let mut cfg: ViewerConfig = serde_json::from_str(text).map_err(|source| EngineError::Json {
        path: origin.to_path_buf(),
        source,
    })?;
    cfg.base_dir = base_dir.to_path_buf();
    cfg.validate(origin)?;
    Ok(cfg)
}

/// Read and parse a config file.
pub fn load_viewer_config(path: &Path) -> Result<ViewerConfig, EngineError> {
    let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let cfg = parse_viewer_config(&text, path, &base_dir)?;
    tracing::debug!(
        path = %path.display(),
        shaders = cfg.shaders.len(),
        "loaded viewer config"
    );
    Ok(cfg)
}
