//! Shader resource loading.
//!
//! Shaders are referenced by identifier (`vert`, `frag`); the host decides where an identifier
//! points. The stock implementation reads files named by the viewer config.

use std::fs;

use orbitshade_core::{EngineError, ViewerConfig, FRAG_ID, VERT_ID};
use tracing::debug;

/// Retrieves the text of a shader resource by identifier.
pub trait ShaderLoader {
    fn load(&self, id: &str) -> Result<String, EngineError>;

    /// Human-readable location of `id`, for logs. `None` if unknown.
    fn describe(&self, _id: &str) -> Option<String> {
        None
    }
}

/// Loads shaders from the paths in a [`ViewerConfig`]'s shader table.
#[derive(Debug, Clone, Copy)]
pub struct FileShaderLoader<'a> {
    config: &'a ViewerConfig,
}

impl<'a> FileShaderLoader<'a> {
    pub fn new(config: &'a ViewerConfig) -> Self {
        Self { config }
    }
}

impl ShaderLoader for FileShaderLoader<'_> {
    fn load(&self, id: &str) -> Result<String, EngineError> {
        let path = self.config.resolve_shader(id)?;
        let text = fs::read_to_string(&path).map_err(|source| EngineError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(id, path = %path.display(), bytes = text.len(), "loaded shader source");
        Ok(text)
    }

    fn describe(&self, id: &str) -> Option<String> {
        self.config
            .resolve_shader(id)
            .ok()
            .map(|p| p.display().to_string())
    }
}

/// Vertex + fragment source text.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub vert: String,
    pub frag: String,
    /// Optional human-friendly origin (paths/labels) for logs.
    pub origin: Option<String>,
}

/// Load the vertex and fragment sources. The first failure aborts; nothing is retried.
pub fn load_shader_pair(loader: &dyn ShaderLoader) -> Result<ShaderSource, EngineError> {
    let vert = loader.load(VERT_ID)?;
    let frag = loader.load(FRAG_ID)?;
    let origin = match (loader.describe(VERT_ID), loader.describe(FRAG_ID)) {
        (Some(v), Some(f)) => Some(format!("{v} + {f}")),
        _ => None,
    };
    Ok(ShaderSource { vert, frag, origin })
}
