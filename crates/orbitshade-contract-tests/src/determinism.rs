#![forbid(unsafe_code)]

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use orbitshade_core::{CameraState, FrameUniforms, SurfaceSize, SurfaceTracker};
    use orbitshade_runtime_glow::quad::VERTEX_STRIDE;
    use orbitshade_runtime_glow::{QUAD_INDICES, QUAD_VERTICES};

    /// Resize contract: syncing the same size twice only reallocates once.
    #[test]
    fn surface_sync_is_idempotent() {
        let mut t = SurfaceTracker::new(SurfaceSize::new(800, 600));
        assert!(!t.sync(SurfaceSize::new(800, 600)));
        assert!(t.sync(SurfaceSize::new(1024, 768)));
        assert!(!t.sync(SurfaceSize::new(1024, 768)));
        assert_eq!(t.current(), SurfaceSize::new(1024, 768));
    }

    /// Geometry contract: the quad covers clip space exactly.
    #[test]
    fn quad_geometry_is_fixed() {
        assert_eq!(QUAD_VERTICES.len(), 16);
        assert_eq!(QUAD_INDICES, [0, 1, 2, 0, 2, 3]);
        assert_eq!(VERTEX_STRIDE, 16);

        let positions: Vec<[f32; 2]> = QUAD_VERTICES
            .chunks_exact(4)
            .map(|v| [v[0], v[1]])
            .collect();
        for corner in [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]] {
            assert!(positions.contains(&corner), "missing corner {corner:?}");
        }
    }

    /// Uniform contract: the same inputs give the same per-frame values.
    #[test]
    fn frame_uniforms_are_a_pure_function_of_inputs() {
        let cam = CameraState::new();
        let size = SurfaceSize::new(640, 480);
        let a = FrameUniforms::new(size, Duration::from_millis(1500), &cam);
        let b = FrameUniforms::new(size, Duration::from_millis(1500), &cam);
        assert_eq!(a, b);
        assert_eq!(a.resolution, [640.0, 480.0]);
        assert!((a.time - 1.5).abs() < 1e-6);
        assert_eq!(a.camera_zoom, 2.0);
    }
}
