//! Per-frame values computed by the render loop before touching the backend.

use std::time::{Duration, Instant};

use crate::camera::CameraState;

// -------------------------------------------------------------------------------------------------
// Uniforms
// -------------------------------------------------------------------------------------------------

/// Values pushed to the four shader uniforms once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// `u_resolution`: drawable width/height in physical pixels.
    pub resolution: [f32; 2],
    /// `u_time`: seconds since the first frame.
    pub time: f32,
    /// `u_cameraRotation`: (pitch, yaw).
    pub camera_rotation: [f32; 2],
    /// `u_cameraZoom`.
    pub camera_zoom: f32,
}

impl FrameUniforms {
    pub fn new(size: SurfaceSize, elapsed: Duration, camera: &CameraState) -> Self {
        Self {
            resolution: [size.width as f32, size.height as f32],
            time: elapsed.as_secs_f32(),
            camera_rotation: camera.rotation(),
            camera_zoom: camera.zoom(),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Surface sizing
// -------------------------------------------------------------------------------------------------

/// Drawable size in physical pixels. Both dimensions are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

/// Tracks the last size applied to the drawing surface so the per-frame resize step only
/// reaches the backend when the window actually changed size.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceTracker {
    current: SurfaceSize,
}

impl SurfaceTracker {
    pub fn new(initial: SurfaceSize) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> SurfaceSize {
        self.current
    }

    /// Record `size` as current. Returns `true` if it differs from the previous size.
    pub fn sync(&mut self, size: SurfaceSize) -> bool {
        if size == self.current {
            return false;
        }
        self.current = size;
        true
    }
}

// -------------------------------------------------------------------------------------------------
// FPS readout
// -------------------------------------------------------------------------------------------------

/// Frame counter averaged over a rolling window.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    window: Duration,
    window_start: Instant,
    frames: u32,
    last: Option<u32>,
}

impl FpsMeter {
    pub fn new(window: Duration, now: Instant) -> Self {
        Self {
            window: window.max(Duration::from_millis(1)),
            window_start: now,
            frames: 0,
            last: None,
        }
    }

    /// Count one frame. Returns the new reading whenever a window closes.
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.window {
            return None;
        }
        let fps = (self.frames as f64 / elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.window_start = now;
        self.last = Some(fps);
        self.last
    }

    pub fn last(&self) -> Option<u32> {
        self.last
    }
}
