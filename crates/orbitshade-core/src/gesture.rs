//! Orbit gesture state machine.
//!
//! Mouse and touch are separate channels: a mouse drag and a touch gesture can be in flight at the
//! same time and each is started and ended only by its own events. Mouse drag and single-touch
//! drag rotate the camera, a two-finger pinch zooms it, and the wheel zooms it at any time without
//! touching either channel.

use crate::camera::{CameraState, PINCH_SENSITIVITY};
use crate::input::{InputEvent, Point};

/// Touch channel state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Single-finger rotate; `last` is rebased on every move so deltas are incremental.
    Dragging { last: Point },
    /// Two-finger zoom relative to the distance/zoom captured at touch-start.
    Pinching {
        pinch_baseline: f32,
        zoom_baseline: f32,
    },
}

/// Application context for camera control: owns the camera and both input channels.
///
/// Input handlers call [`OrbitController::handle`]; the render loop reads
/// [`OrbitController::camera`] once per frame.
#[derive(Debug, Clone, Default)]
pub struct OrbitController {
    camera: CameraState,
    /// Last pointer position while the mouse button is held.
    mouse_drag: Option<Point>,
    touch: GestureState,
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_camera(camera: CameraState) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    /// Touch channel state.
    pub fn gesture(&self) -> GestureState {
        self.touch
    }

    /// Anchor of the mouse drag in progress, if any.
    pub fn mouse_drag(&self) -> Option<Point> {
        self.mouse_drag
    }

    pub fn handle(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown(p) => self.mouse_drag = Some(*p),

            InputEvent::PointerMove(p) => {
                if let Some(last) = self.mouse_drag.as_mut() {
                    self.camera.rotate_by(p.x - last.x, p.y - last.y);
                    *last = *p;
                }
            }

            InputEvent::PointerUp | InputEvent::PointerLeave => self.mouse_drag = None,

            InputEvent::TouchStart { touches } => match touches.as_slice() {
                [only] => self.touch = GestureState::Dragging { last: *only },
                [a, b] => {
                    self.touch = GestureState::Pinching {
                        pinch_baseline: a.distance(*b),
                        zoom_baseline: self.camera.zoom(),
                    };
                }
                _ => {}
            },

            InputEvent::TouchMove { touches } => match (touches.as_slice(), &mut self.touch) {
                ([only], GestureState::Dragging { last }) => {
                    self.camera.rotate_by(only.x - last.x, only.y - last.y);
                    *last = *only;
                }
                (
                    [a, b],
                    GestureState::Pinching {
                        pinch_baseline,
                        zoom_baseline,
                    },
                ) => {
                    let delta = a.distance(*b) - *pinch_baseline;
                    self.camera.set_zoom(*zoom_baseline - delta * PINCH_SENSITIVITY);
                }
                _ => {}
            },

            // Lifting one finger of a pinch keeps the state; only the last finger ends it.
            InputEvent::TouchEnd { touches } => {
                if touches.is_empty() {
                    self.touch = GestureState::Idle;
                }
            }

            InputEvent::Wheel { delta_y } => self.camera.zoom_by_wheel(*delta_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{ZOOM_MAX, ZOOM_MIN};

    fn touches(pts: &[(f32, f32)]) -> Vec<Point> {
        pts.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn mouse_move_without_press_does_nothing() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::PointerMove(Point::new(50.0, 50.0)));
        assert_eq!(c.camera(), CameraState::default());
        assert_eq!(c.gesture(), GestureState::Idle);
    }

    #[test]
    fn mouse_drag_rotates_incrementally() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::PointerDown(Point::new(10.0, 10.0)));
        c.handle(&InputEvent::PointerMove(Point::new(30.0, 10.0)));
        c.handle(&InputEvent::PointerMove(Point::new(30.0, 50.0)));

        let cam = c.camera();
        assert!((cam.rotation_y() - 20.0 * 0.005).abs() < 1e-6);
        assert!((cam.rotation_x() - 40.0 * 0.005).abs() < 1e-6);
        assert_eq!(c.mouse_drag(), Some(Point::new(30.0, 50.0)));
        assert_eq!(c.gesture(), GestureState::Idle);
    }

    #[test]
    fn pointer_leave_ends_mouse_drag() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::PointerDown(Point::new(0.0, 0.0)));
        c.handle(&InputEvent::PointerLeave);
        c.handle(&InputEvent::PointerMove(Point::new(100.0, 100.0)));
        assert_eq!(c.camera().rotation(), [0.0, 0.0]);
    }

    #[test]
    fn single_touch_drag_rotates() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0)]),
        });
        c.handle(&InputEvent::TouchMove {
            touches: touches(&[(-20.0, 10.0)]),
        });
        let cam = c.camera();
        assert!((cam.rotation_y() + 0.1).abs() < 1e-6);
        assert!((cam.rotation_x() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn touch_moves_do_not_feed_a_mouse_drag() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::PointerDown(Point::new(0.0, 0.0)));
        c.handle(&InputEvent::TouchMove {
            touches: touches(&[(100.0, 0.0)]),
        });
        assert_eq!(c.camera().rotation(), [0.0, 0.0]);
    }

    #[test]
    fn pinch_inward_zooms_out() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0), (100.0, 0.0)]),
        });
        c.handle(&InputEvent::TouchMove {
            touches: touches(&[(0.0, 0.0), (50.0, 0.0)]),
        });
        assert!((c.camera().zoom() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn pinch_is_relative_to_its_baseline_not_the_previous_move() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0), (100.0, 0.0)]),
        });
        for d in [120.0, 140.0, 150.0] {
            c.handle(&InputEvent::TouchMove {
                touches: touches(&[(0.0, 0.0), (d, 0.0)]),
            });
        }
        assert!((c.camera().zoom() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn one_finger_left_after_pinch_does_not_rotate() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0)]),
        });
        c.handle(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0), (100.0, 0.0)]),
        });
        c.handle(&InputEvent::TouchEnd {
            touches: touches(&[(0.0, 0.0)]),
        });
        c.handle(&InputEvent::TouchMove {
            touches: touches(&[(80.0, 80.0)]),
        });
        assert_eq!(c.camera().rotation(), [0.0, 0.0]);
        assert!(matches!(c.gesture(), GestureState::Pinching { .. }));
    }

    #[test]
    fn three_finger_start_is_ignored() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]),
        });
        assert_eq!(c.gesture(), GestureState::Idle);
    }

    #[test]
    fn wheel_is_independent_of_drag() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::PointerDown(Point::new(0.0, 0.0)));
        c.handle(&InputEvent::Wheel { delta_y: 1_000.0 });
        assert_eq!(c.camera().zoom(), ZOOM_MAX);
        c.handle(&InputEvent::Wheel { delta_y: -1_000.0 });
        assert_eq!(c.camera().zoom(), ZOOM_MIN);
        assert!(c.mouse_drag().is_some());
    }

    #[test]
    fn touch_gesture_does_not_end_a_held_mouse_drag() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::PointerDown(Point::new(0.0, 0.0)));
        c.handle(&InputEvent::TouchStart {
            touches: touches(&[(5.0, 5.0)]),
        });
        c.handle(&InputEvent::TouchEnd { touches: vec![] });
        c.handle(&InputEvent::PointerMove(Point::new(100.0, 0.0)));

        assert_eq!(c.gesture(), GestureState::Idle);
        assert!((c.camera().rotation_y() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn mouse_press_does_not_cancel_a_pinch() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0), (100.0, 0.0)]),
        });
        c.handle(&InputEvent::PointerDown(Point::new(10.0, 10.0)));
        c.handle(&InputEvent::TouchMove {
            touches: touches(&[(0.0, 0.0), (50.0, 0.0)]),
        });

        assert!((c.camera().zoom() - 2.5).abs() < 1e-6);
        assert!(matches!(c.gesture(), GestureState::Pinching { .. }));
        assert_eq!(c.mouse_drag(), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn pointer_up_leaves_touch_drag_running() {
        let mut c = OrbitController::new();
        c.handle(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0)]),
        });
        c.handle(&InputEvent::PointerUp);
        c.handle(&InputEvent::TouchMove {
            touches: touches(&[(40.0, 0.0)]),
        });
        assert!((c.camera().rotation_y() - 0.2).abs() < 1e-6);
    }
}
