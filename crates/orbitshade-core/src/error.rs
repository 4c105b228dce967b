use std::fmt;
use std::path::PathBuf;

/// Shader pipeline stage, used to tag compile/link diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Engine-level errors used across orbitshade crates.
///
/// Every failure is terminal for the session: setup aborts and the host reports it.
#[derive(Debug)]
pub enum EngineError {
    // ---- Config / shader resources ----
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    InvalidConfig {
        path: PathBuf,
        msg: String,
    },

    /// A shader identifier has no entry in the shader table.
    UnknownShader(String),

    // ---- Runtime-facing (backend) ----
    VertexCompile(String),
    FragmentCompile(String),
    Link(String),
    /// Linking was requested without a compiled shader for this stage.
    MissingShader(ShaderStage),
    GlCreate(String),

    // ---- Fallback ----
    Other(String),
}

impl EngineError {
    pub fn other<T: Into<String>>(s: T) -> Self {
        EngineError::Other(s.into())
    }

    pub fn compile(stage: ShaderStage, log: String) -> Self {
        match stage {
            ShaderStage::Vertex => EngineError::VertexCompile(log),
            ShaderStage::Fragment => EngineError::FragmentCompile(log),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Io { path, source } => {
                write!(f, "io error at {}: {}", path.display(), source)
            }
            EngineError::Json { path, source } => {
                write!(f, "json parse error at {}: {}", path.display(), source)
            }
            EngineError::InvalidConfig { path, msg } => {
                write!(f, "invalid config at {}: {}", path.display(), msg)
            }
            EngineError::UnknownShader(id) => {
                write!(f, "no shader resource registered for id '{id}'")
            }

            EngineError::VertexCompile(msg) => write!(f, "vertex shader compile error: {msg}"),
            EngineError::FragmentCompile(msg) => write!(f, "fragment shader compile error: {msg}"),
            EngineError::Link(msg) => write!(f, "program link error: {msg}"),
            EngineError::MissingShader(stage) => {
                write!(f, "cannot link program: {stage} shader is missing")
            }
            EngineError::GlCreate(msg) => write!(f, "graphics backend unavailable: {msg}"),

            EngineError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io { source, .. } => Some(source),
            EngineError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn compile_constructor_tags_stage() {
        let v = EngineError::compile(ShaderStage::Vertex, "bad".into());
        let f = EngineError::compile(ShaderStage::Fragment, "worse".into());
        assert!(matches!(v, EngineError::VertexCompile(ref s) if s == "bad"));
        assert!(matches!(f, EngineError::FragmentCompile(ref s) if s == "worse"));
    }

    #[test]
    fn missing_shader_names_the_stage() {
        let msg = EngineError::MissingShader(ShaderStage::Fragment).to_string();
        assert!(msg.contains("fragment"), "unexpected message: {msg}");
    }

    #[test]
    fn io_error_exposes_source() {
        let err = EngineError::Io {
            path: PathBuf::from("shaders/missing.frag"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("shaders/missing.frag"));
    }
}
