use glow::HasContext;

use orbitshade_core::{FrameUniforms, SurfaceSize};

use crate::program::ShaderProgram;
use crate::quad::QuadGeometry;
use crate::EngineError;

/// The single program + quad pair drawn every frame.
///
/// Built once during setup; the render loop only ever borrows it immutably.
#[derive(Debug)]
pub struct QuadRenderer {
    program: ShaderProgram,
    quad: QuadGeometry,
}

impl QuadRenderer {
    pub unsafe fn new(
        gl: &glow::Context,
        vert_src: &str,
        frag_src: &str,
    ) -> Result<Self, EngineError> {
        let program = ShaderProgram::new(gl, vert_src, frag_src)?;
        let quad = match QuadGeometry::new(gl, &program.bindings) {
            Ok(q) => q,
            Err(e) => {
                program.destroy(gl);
                return Err(e);
            }
        };
        Ok(Self { program, quad })
    }

    /// Draw one frame into the currently bound default framebuffer.
    pub unsafe fn render(&self, gl: &glow::Context, size: SurfaceSize, u: &FrameUniforms) {
        gl.bind_framebuffer(glow::FRAMEBUFFER, None);
        gl.viewport(0, 0, size.width as i32, size.height as i32);

        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT);

        gl.use_program(Some(self.program.program));

        let b = &self.program.bindings;
        if let Some(loc) = b.u_resolution.as_ref() {
            gl.uniform_2_f32(Some(loc), u.resolution[0], u.resolution[1]);
        }
        if let Some(loc) = b.u_time.as_ref() {
            gl.uniform_1_f32(Some(loc), u.time);
        }
        if let Some(loc) = b.u_camera_rotation.as_ref() {
            gl.uniform_2_f32(Some(loc), u.camera_rotation[0], u.camera_rotation[1]);
        }
        if let Some(loc) = b.u_camera_zoom.as_ref() {
            gl.uniform_1_f32(Some(loc), u.camera_zoom);
        }

        self.quad.draw(gl);

        gl.use_program(None);
    }

    pub unsafe fn destroy(self, gl: &glow::Context) {
        self.quad.destroy(gl);
        self.program.destroy(gl);
    }
}
