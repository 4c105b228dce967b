//! winit `WindowEvent` -> orbitshade `InputEvent`.

use orbitshade_core::{InputEvent, Point};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

use crate::touch::TouchTracker;

/// Browser-equivalent pixel distance of one wheel "line".
pub const WHEEL_LINE_PIXELS: f32 = 100.0;

/// Input bookkeeping the raw event stream does not carry: cursor position (button events have
/// none) and the set of active touches.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: Option<Point>,
    touches: TouchTracker,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` for events the orbit controller does not consume.
    pub fn translate(&mut self, scale_factor: f64, event: &WindowEvent<'_>) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let p = to_logical(*position, scale_factor);
                self.cursor = Some(p);
                Some(InputEvent::PointerMove(p))
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                Some(InputEvent::PointerLeave)
            }

            WindowEvent::MouseInput { state, .. } => match state {
                // A press before any CursorMoved has no position to anchor the drag to.
                ElementState::Pressed => self.cursor.map(InputEvent::PointerDown),
                ElementState::Released => Some(InputEvent::PointerUp),
            },

            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
                delta_y: wheel_delta_y(delta, scale_factor),
            }),

            WindowEvent::Touch(touch) => {
                let p = to_logical(touch.location, scale_factor);
                self.touches.apply(touch.id, touch.phase, p)
            }

            _ => None,
        }
    }
}

pub fn to_logical(pos: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    let logical = pos.to_logical::<f64>(scale_factor);
    Point::new(logical.x as f32, logical.y as f32)
}

/// Convert a winit scroll delta to a browser `deltaY` (positive = scroll down).
///
/// winit reports positive `y` for scrolling up in both delta kinds, so both are negated.
pub fn wheel_delta_y(delta: &MouseScrollDelta, scale_factor: f64) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PIXELS,
        MouseScrollDelta::PixelDelta(p) => -(p.y / scale_factor) as f32,
    }
}
