//! Orbit camera parameters fed to the fragment shader.

/// Lower bound of the camera zoom (closest).
pub const ZOOM_MIN: f32 = 0.5;
/// Upper bound of the camera zoom (farthest).
pub const ZOOM_MAX: f32 = 5.0;
/// Zoom at startup.
pub const ZOOM_DEFAULT: f32 = 2.0;

/// Radians of rotation per logical pixel of drag.
pub const ROTATE_SENSITIVITY: f32 = 0.005;
/// Zoom units per logical pixel of pinch distance change.
pub const PINCH_SENSITIVITY: f32 = 0.01;
/// Zoom units per unit of wheel `delta_y`.
pub const WHEEL_SENSITIVITY: f32 = 0.01;

pub fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Camera state pushed as `u_cameraRotation` / `u_cameraZoom`.
///
/// `rotation_x` is pitch (driven by vertical motion), `rotation_y` is yaw (driven by
/// horizontal motion). `zoom` always lies in `[ZOOM_MIN, ZOOM_MAX]`; the only mutators keep it
/// there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    rotation_x: f32,
    rotation_y: f32,
    zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            zoom: ZOOM_DEFAULT,
        }
    }
}

impl CameraState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation_x(&self) -> f32 {
        self.rotation_x
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// `[rotation_x, rotation_y]` in the order the shader expects.
    pub fn rotation(&self) -> [f32; 2] {
        [self.rotation_x, self.rotation_y]
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Apply a pointer delta in logical pixels: horizontal motion drives yaw, vertical drives pitch.
    pub fn rotate_by(&mut self, dx: f32, dy: f32) {
        self.rotation_x += dy * ROTATE_SENSITIVITY;
        self.rotation_y += dx * ROTATE_SENSITIVITY;
    }

    /// Add a wheel delta (browser `deltaY` convention: positive moves away).
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        self.set_zoom(self.zoom + delta_y * WHEEL_SENSITIVITY);
    }

    /// Set zoom, clamped. Non-finite input leaves zoom unchanged.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = clamp_zoom(zoom);
        }
    }
}
