//! Per-finger winit touch events -> browser-style active touch lists.

use orbitshade_core::{InputEvent, Point};
use winit::event::TouchPhase;

/// Active touches in the order they went down.
#[derive(Debug, Default, Clone)]
pub struct TouchTracker {
    active: Vec<(u64, Point)>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn snapshot(&self) -> Vec<Point> {
        self.active.iter().map(|&(_, p)| p).collect()
    }

    /// Apply one finger's update and return the event carrying the touches active afterwards.
    ///
    /// Moves/ends for an id we never saw start are dropped.
    pub fn apply(&mut self, id: u64, phase: TouchPhase, pos: Point) -> Option<InputEvent> {
        let slot = self.active.iter().position(|&(tid, _)| tid == id);
        match (phase, slot) {
            (TouchPhase::Started, Some(i)) => {
                self.active[i].1 = pos;
                Some(InputEvent::TouchStart {
                    touches: self.snapshot(),
                })
            }
            (TouchPhase::Started, None) => {
                self.active.push((id, pos));
                Some(InputEvent::TouchStart {
                    touches: self.snapshot(),
                })
            }
            (TouchPhase::Moved, Some(i)) => {
                self.active[i].1 = pos;
                Some(InputEvent::TouchMove {
                    touches: self.snapshot(),
                })
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, Some(i)) => {
                self.active.remove(i);
                Some(InputEvent::TouchEnd {
                    touches: self.snapshot(),
                })
            }
            (_, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn second_finger_start_reports_both_in_order() {
        let mut t = TouchTracker::new();
        t.apply(7, TouchPhase::Started, p(1.0, 1.0));
        let ev = t.apply(3, TouchPhase::Started, p(2.0, 2.0));
        assert_eq!(
            ev,
            Some(InputEvent::TouchStart {
                touches: vec![p(1.0, 1.0), p(2.0, 2.0)]
            })
        );
    }

    #[test]
    fn move_updates_only_that_finger() {
        let mut t = TouchTracker::new();
        t.apply(1, TouchPhase::Started, p(0.0, 0.0));
        t.apply(2, TouchPhase::Started, p(10.0, 0.0));
        let ev = t.apply(2, TouchPhase::Moved, p(20.0, 5.0));
        assert_eq!(
            ev,
            Some(InputEvent::TouchMove {
                touches: vec![p(0.0, 0.0), p(20.0, 5.0)]
            })
        );
    }

    #[test]
    fn end_and_cancel_remove_the_finger() {
        let mut t = TouchTracker::new();
        t.apply(1, TouchPhase::Started, p(0.0, 0.0));
        t.apply(2, TouchPhase::Started, p(10.0, 0.0));

        let ev = t.apply(1, TouchPhase::Ended, p(0.0, 0.0));
        assert_eq!(
            ev,
            Some(InputEvent::TouchEnd {
                touches: vec![p(10.0, 0.0)]
            })
        );

        let ev = t.apply(2, TouchPhase::Cancelled, p(10.0, 0.0));
        assert_eq!(ev, Some(InputEvent::TouchEnd { touches: vec![] }));
        assert!(t.is_empty());
    }

    #[test]
    fn unknown_finger_updates_are_dropped() {
        let mut t = TouchTracker::new();
        assert_eq!(t.apply(9, TouchPhase::Moved, p(0.0, 0.0)), None);
        assert_eq!(t.apply(9, TouchPhase::Ended, p(0.0, 0.0)), None);
        assert_eq!(t.len(), 0);
    }
}
