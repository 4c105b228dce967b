// Full-screen quad: 4 interleaved (x, y, u, v) vertices, 2 indexed triangles.
//
// Uploaded once with STATIC_DRAW. `QuadGeometry` has no method that writes to its buffers after
// construction; the only way to change the geometry is to drop it and build another.

use glow::HasContext;

use crate::program::ProgramBindings;
use crate::EngineError;

pub const FLOATS_PER_VERTEX: usize = 4;
/// Bytes between consecutive vertices.
pub const VERTEX_STRIDE: i32 = (FLOATS_PER_VERTEX * core::mem::size_of::<f32>()) as i32;
/// Byte offset of `a_position` within a vertex.
pub const POSITION_OFFSET: i32 = 0;
/// Byte offset of `a_uv` within a vertex.
pub const UV_OFFSET: i32 = (2 * core::mem::size_of::<f32>()) as i32;

#[rustfmt::skip]
pub const QUAD_VERTICES: [f32; 16] = [
    // x     y     u    v
    -1.0, -1.0,  0.0, 0.0,
     1.0, -1.0,  1.0, 0.0,
     1.0,  1.0,  1.0, 1.0,
    -1.0,  1.0,  0.0, 1.0,
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[derive(Debug)]
pub struct QuadGeometry {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    ebo: glow::NativeBuffer,
}

impl QuadGeometry {
    /// Upload the quad and record the attribute layout for `bindings` in a vertex array.
    ///
    /// Attributes the program does not use are left disabled.
    pub unsafe fn new(
        gl: &glow::Context,
        bindings: &ProgramBindings,
    ) -> Result<Self, EngineError> {
        let vao = gl
            .create_vertex_array()
            .map_err(|e| EngineError::GlCreate(format!("create_vertex_array: {e}")))?;
        let vbo = gl
            .create_buffer()
            .map_err(|e| EngineError::GlCreate(format!("create_buffer(vbo): {e}")))?;
        let ebo = gl
            .create_buffer()
            .map_err(|e| EngineError::GlCreate(format!("create_buffer(ebo): {e}")))?;

        gl.bind_vertex_array(Some(vao));

        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&QUAD_VERTICES),
            glow::STATIC_DRAW,
        );

        for (loc, offset) in [
            (bindings.a_position, POSITION_OFFSET),
            (bindings.a_uv, UV_OFFSET),
        ] {
            if let Some(loc) = loc {
                gl.enable_vertex_attrib_array(loc);
                gl.vertex_attrib_pointer_f32(loc, 2, glow::FLOAT, false, VERTEX_STRIDE, offset);
            }
        }

        // The element binding is recorded in the VAO, so it must stay bound until the VAO is
        // unbound.
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(&QUAD_INDICES),
            glow::STATIC_DRAW,
        );

        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

        Ok(Self { vao, vbo, ebo })
    }

    pub fn index_count(&self) -> i32 {
        QUAD_INDICES.len() as i32
    }

    /// Bind, draw both triangles, unbind.
    pub unsafe fn draw(&self, gl: &glow::Context) {
        gl.bind_vertex_array(Some(self.vao));
        gl.draw_elements(glow::TRIANGLES, self.index_count(), glow::UNSIGNED_SHORT, 0);
        gl.bind_vertex_array(None);
    }

    pub unsafe fn destroy(self, gl: &glow::Context) {
        gl.delete_vertex_array(self.vao);
        gl.delete_buffer(self.vbo);
        gl.delete_buffer(self.ebo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_interleaved_vec2_pairs() {
        assert_eq!(VERTEX_STRIDE, 16);
        assert_eq!(POSITION_OFFSET, 0);
        assert_eq!(UV_OFFSET, 8);
        assert_eq!(QUAD_VERTICES.len(), 4 * FLOATS_PER_VERTEX);
    }

    #[test]
    fn uv_tracks_position() {
        for v in QUAD_VERTICES.chunks_exact(FLOATS_PER_VERTEX) {
            let (x, y, u, w) = (v[0], v[1], v[2], v[3]);
            assert_eq!(u, (x + 1.0) * 0.5);
            assert_eq!(w, (y + 1.0) * 0.5);
        }
    }

    #[test]
    fn indices_cover_two_counter_clockwise_triangles() {
        let pos = |i: u16| {
            let base = i as usize * FLOATS_PER_VERTEX;
            (QUAD_VERTICES[base], QUAD_VERTICES[base + 1])
        };
        for tri in QUAD_INDICES.chunks_exact(3) {
            let (a, b, c) = (pos(tri[0]), pos(tri[1]), pos(tri[2]));
            let area2 = (b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1);
            assert!(area2 > 0.0, "triangle {tri:?} is not CCW");
        }
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < 4));
    }

    #[test]
    fn index_bytes_are_u16() {
        let bytes: &[u8] = bytemuck::cast_slice(&QUAD_INDICES);
        assert_eq!(bytes.len(), 12);
    }
}
