//! orbitshade runtime (glow/OpenGL backend)
//
// This crate contains only the GL side of the viewer:
// - compile/link the shader pair and resolve its attribute/uniform names
// - upload the static quad
// - draw one frame from precomputed `FrameUniforms`
//
// It does NOT create windows or contexts, read files, or handle input.
#![allow(clippy::missing_safety_doc)]

pub mod program;
pub mod quad;
pub mod renderer;

pub use orbitshade_core::{EngineError, ShaderStage};

pub use program::{
    compile_program, compile_shader, link_program, ProgramBindings, ShaderProgram, ATTR_POSITION,
    ATTR_UV, UNIFORM_CAMERA_ROTATION, UNIFORM_CAMERA_ZOOM, UNIFORM_RESOLUTION, UNIFORM_TIME,
};
pub use quad::{QuadGeometry, QUAD_INDICES, QUAD_VERTICES};
pub use renderer::QuadRenderer;
