//! Shader compilation, program linking and name binding.

use glow::HasContext;
use tracing::{debug, error, warn};

use crate::{EngineError, ShaderStage};

/// Vertex attribute names the quad geometry feeds.
pub const ATTR_POSITION: &str = "a_position";
pub const ATTR_UV: &str = "a_uv";

/// Uniform names pushed every frame.
pub const UNIFORM_RESOLUTION: &str = "u_resolution";
pub const UNIFORM_TIME: &str = "u_time";
pub const UNIFORM_CAMERA_ROTATION: &str = "u_cameraRotation";
pub const UNIFORM_CAMERA_ZOOM: &str = "u_cameraZoom";

fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// Compile one shader stage.
///
/// On failure the driver's info log is logged and returned; no shader object survives.
pub unsafe fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    src: &str,
) -> Result<glow::NativeShader, EngineError> {
    let shader = gl
        .create_shader(gl_stage(stage))
        .map_err(|e| EngineError::GlCreate(format!("create_shader({stage}) failed: {e:?}")))?;
    gl.shader_source(shader, src);
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        error!(%stage, "could not compile shader:\n{log}");
        gl.delete_shader(shader);
        return Err(EngineError::compile(stage, log));
    }
    debug!(%stage, bytes = src.len(), "compiled shader");
    Ok(shader)
}

/// Link a program from two compiled stages.
///
/// Either stage may be absent (its compile failed); that is reported as
/// [`EngineError::MissingShader`] instead of handing the driver an incomplete program. The shader
/// objects that were supplied are always released.
pub unsafe fn link_program(
    gl: &glow::Context,
    vs: Option<glow::NativeShader>,
    fs: Option<glow::NativeShader>,
) -> Result<glow::NativeProgram, EngineError> {
    let (vs, fs) = match (vs, fs) {
        (Some(vs), Some(fs)) => (vs, fs),
        (vs, fs) => {
            for s in [vs, fs].into_iter().flatten() {
                gl.delete_shader(s);
            }
            let stage = if vs.is_none() {
                ShaderStage::Vertex
            } else {
                ShaderStage::Fragment
            };
            error!(%stage, "refusing to link program without a {stage} shader");
            return Err(EngineError::MissingShader(stage));
        }
    };

    let program = gl
        .create_program()
        .map_err(|e| EngineError::GlCreate(format!("create_program failed: {e:?}")))?;
    gl.attach_shader(program, vs);
    gl.attach_shader(program, fs);
    gl.link_program(program);

    gl.detach_shader(program, vs);
    gl.detach_shader(program, fs);
    gl.delete_shader(vs);
    gl.delete_shader(fs);

    if !gl.get_program_link_status(program) {
        let log = gl.get_program_info_log(program);
        error!("could not link program:\n{log}");
        gl.delete_program(program);
        return Err(EngineError::Link(log));
    }

    Ok(program)
}

/// Compile both stages, then link.
///
/// Both stages are compiled even if the first fails so every diagnostic reaches the log; the
/// first compile error is the one returned.
pub unsafe fn compile_program(
    gl: &glow::Context,
    vert_src: &str,
    frag_src: &str,
) -> Result<glow::NativeProgram, EngineError> {
    let vs = compile_shader(gl, ShaderStage::Vertex, vert_src);
    let fs = compile_shader(gl, ShaderStage::Fragment, frag_src);

    match (vs, fs) {
        (Ok(vs), Ok(fs)) => link_program(gl, Some(vs), Some(fs)),
        (vs, fs) => {
            release_compiled(gl, [vs.as_ref().ok(), fs.as_ref().ok()]);
            Err(first_error(vs, fs))
        }
    }
}

/// Delete the stages that did compile when the other one failed.
unsafe fn release_compiled(gl: &glow::Context, shaders: [Option<&glow::NativeShader>; 2]) {
    for s in shaders.into_iter().flatten() {
        gl.delete_shader(*s);
    }
}

/// The vertex error when both stages failed, otherwise whichever stage did.
fn first_error<S>(vs: Result<S, EngineError>, fs: Result<S, EngineError>) -> EngineError {
    match (vs, fs) {
        (Err(e), _) | (Ok(_), Err(e)) => e,
        (Ok(_), Ok(_)) => EngineError::other("no shader stage failed"),
    }
}

/// Attribute and uniform locations resolved once after linking.
///
/// A `None` location means the driver optimised the name away (or the shader never declared
/// it); the renderer skips it.
#[derive(Debug, Clone)]
pub struct ProgramBindings {
    pub a_position: Option<u32>,
    pub a_uv: Option<u32>,
    pub u_resolution: Option<glow::NativeUniformLocation>,
    pub u_time: Option<glow::NativeUniformLocation>,
    pub u_camera_rotation: Option<glow::NativeUniformLocation>,
    pub u_camera_zoom: Option<glow::NativeUniformLocation>,
}

impl ProgramBindings {
    pub unsafe fn resolve(gl: &glow::Context, program: glow::NativeProgram) -> Self {
        let attrib = |name: &str| {
            let loc = gl.get_attrib_location(program, name);
            if loc.is_none() {
                warn!(attribute = name, "not active in program");
            }
            loc
        };
        let uniform = |name: &str| {
            let loc = gl.get_uniform_location(program, name);
            if loc.is_none() {
                warn!(uniform = name, "not active in program");
            }
            loc
        };

        Self {
            a_position: attrib(ATTR_POSITION),
            a_uv: attrib(ATTR_UV),
            u_resolution: uniform(UNIFORM_RESOLUTION),
            u_time: uniform(UNIFORM_TIME),
            u_camera_rotation: uniform(UNIFORM_CAMERA_ROTATION),
            u_camera_zoom: uniform(UNIFORM_CAMERA_ZOOM),
        }
    }
}

/// A linked program plus its resolved bindings.
#[derive(Debug)]
pub struct ShaderProgram {
    pub program: glow::NativeProgram,
    pub bindings: ProgramBindings,
}

impl ShaderProgram {
    pub unsafe fn new(
        gl: &glow::Context,
        vert_src: &str,
        frag_src: &str,
    ) -> Result<Self, EngineError> {
        let program = compile_program(gl, vert_src, frag_src)?;
        let bindings = ProgramBindings::resolve(gl, program);
        Ok(Self { program, bindings })
    }

    pub unsafe fn destroy(self, gl: &glow::Context) {
        gl.delete_program(self.program);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_error_wins_when_both_stages_fail() {
        let err = first_error::<u32>(
            Err(EngineError::compile(ShaderStage::Vertex, "v".into())),
            Err(EngineError::compile(ShaderStage::Fragment, "f".into())),
        );
        assert!(matches!(err, EngineError::VertexCompile(ref log) if log == "v"));
    }

    #[test]
    fn fragment_error_is_reported_when_vertex_compiled() {
        let err = first_error(
            Ok(7u32),
            Err(EngineError::compile(ShaderStage::Fragment, "f".into())),
        );
        assert!(matches!(err, EngineError::FragmentCompile(ref log) if log == "f"));
    }

    #[test]
    fn stages_map_to_gl_enums() {
        assert_eq!(gl_stage(ShaderStage::Vertex), glow::VERTEX_SHADER);
        assert_eq!(gl_stage(ShaderStage::Fragment), glow::FRAGMENT_SHADER);
    }
}
