//! Platform-agnostic input events consumed by the orbit controller.
//!
//! Hosts translate their native events into this stream. Positions are logical pixels with the
//! origin at the top-left of the drawable surface.

/// A position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Normalized input event.
///
/// Touch events carry the full list of touches that are active *after* the event, in the order
/// they went down (the browser `TouchEvent.touches` convention).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,

    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    TouchEnd { touches: Vec<Point> },

    /// Scroll amount, positive when scrolling down / towards the user.
    Wheel { delta_y: f32 },
}
