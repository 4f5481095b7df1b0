//! Gesture state machine: contact cardinality selects the mode.
//!
//! | contacts | mode  | move emits                     |
//! |----------|-------|--------------------------------|
//! | 0        | Idle  | nothing                        |
//! | 1        | Drag  | `Rotate` with consecutive delta |
//! | 2        | Pinch | `Zoom` with negated distance change |
//!
//! Only the first two contacts observed are tracked. Later contacts are
//! ignored until they lift.

use glam::Vec2;
use tracing::trace;

use crate::{PointerEvent, PointerId};

const MAX_TRACKED: usize = 2;

/// Current gesture mode, derived from the number of tracked contacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    Idle,
    SinglePointDrag,
    TwoPointPinch,
}

/// Camera command produced by a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureCommand {
    /// Orbit the camera by a screen-space pixel delta.
    Rotate { delta: Vec2 },
    /// Zoom by a signed amount. Positive moves the camera closer.
    Zoom { delta: f32 },
}

#[derive(Clone, Copy, Debug)]
struct Contact {
    id: PointerId,
    position: Vec2,
}

/// Interprets raw pointer events into [`GestureCommand`]s.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    contacts: Vec<Contact>,
    pinch_distance: f32,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GestureMode {
        match self.contacts.len() {
            0 => GestureMode::Idle,
            1 => GestureMode::SinglePointDrag,
            _ => GestureMode::TwoPointPinch,
        }
    }

    /// Current pinch baseline. Zero outside pinch mode.
    pub fn pinch_distance(&self) -> f32 {
        self.pinch_distance
    }

    /// Feed one event. Returns the command it produces, if any.
    pub fn handle(&mut self, event: PointerEvent) -> Option<GestureCommand> {
        match event {
            PointerEvent::Down { id, position } => {
                self.on_down(id, position);
                None
            }
            PointerEvent::Move { id, position } => self.on_move(id, position),
            PointerEvent::Up { id } | PointerEvent::Cancel { id } => {
                self.on_up(id);
                None
            }
            PointerEvent::Wheel { delta } if delta != 0.0 => Some(GestureCommand::Zoom { delta }),
            PointerEvent::Wheel { .. } => None,
        }
    }

    /// Drop all contacts, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        self.contacts.clear();
        self.pinch_distance = 0.0;
    }

    fn on_down(&mut self, id: PointerId, position: Vec2) {
        if let Some(contact) = self.contacts.iter_mut().find(|c| c.id == id) {
            contact.position = position;
        } else if self.contacts.len() < MAX_TRACKED {
            self.contacts.push(Contact { id, position });
        } else {
            trace!(id = id, "ignoring extra contact");
            return;
        }
        self.rebase();
    }

    fn on_up(&mut self, id: PointerId) {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        if self.contacts.len() != before {
            self.rebase();
        }
    }

    fn on_move(&mut self, id: PointerId, position: Vec2) -> Option<GestureCommand> {
        let idx = self.contacts.iter().position(|c| c.id == id)?;
        match self.contacts.len() {
            1 => {
                let delta = position - self.contacts[idx].position;
                self.contacts[idx].position = position;
                (delta != Vec2::ZERO).then_some(GestureCommand::Rotate { delta })
            }
            _ => {
                self.contacts[idx].position = position;
                let distance = self.separation();
                // Fingers closing shrinks the distance; that zooms in.
                let delta = -(distance - self.pinch_distance);
                self.pinch_distance = distance;
                (delta != 0.0).then_some(GestureCommand::Zoom { delta })
            }
        }
    }

    /// Reset the per-mode baseline after the contact set changed.
    fn rebase(&mut self) {
        self.pinch_distance = if self.contacts.len() == MAX_TRACKED {
            self.separation()
        } else {
            0.0
        };
    }

    fn separation(&self) -> f32 {
        match self.contacts.as_slice() {
            [a, b] => a.position.distance(b.position),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(id: PointerId, x: f32, y: f32) -> PointerEvent {
        PointerEvent::Down {
            id,
            position: Vec2::new(x, y),
        }
    }

    fn mv(id: PointerId, x: f32, y: f32) -> PointerEvent {
        PointerEvent::Move {
            id,
            position: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_first_down_enters_drag() {
        let mut g = GestureController::new();
        assert_eq!(g.mode(), GestureMode::Idle);
        assert_eq!(g.handle(down(1, 10.0, 10.0)), None);
        assert_eq!(g.mode(), GestureMode::SinglePointDrag);
    }

    #[test]
    fn test_drag_deltas_are_consecutive() {
        let mut g = GestureController::new();
        g.handle(down(1, 100.0, 100.0));
        assert_eq!(
            g.handle(mv(1, 110.0, 95.0)),
            Some(GestureCommand::Rotate {
                delta: Vec2::new(10.0, -5.0)
            })
        );
        assert_eq!(
            g.handle(mv(1, 115.0, 95.0)),
            Some(GestureCommand::Rotate {
                delta: Vec2::new(5.0, 0.0)
            })
        );
    }

    #[test]
    fn test_up_returns_to_idle() {
        let mut g = GestureController::new();
        g.handle(down(1, 0.0, 0.0));
        g.handle(PointerEvent::Up { id: 1 });
        assert_eq!(g.mode(), GestureMode::Idle);
        assert_eq!(g.handle(mv(1, 5.0, 5.0)), None);
    }

    #[test]
    fn test_hover_without_contact_emits_nothing() {
        let mut g = GestureController::new();
        assert_eq!(g.handle(mv(crate::MOUSE_POINTER_ID, 5.0, 5.0)), None);
    }

    #[test]
    fn test_second_contact_enters_pinch_with_baseline() {
        let mut g = GestureController::new();
        g.handle(down(1, 0.0, 0.0));
        g.handle(down(2, 100.0, 0.0));
        assert_eq!(g.mode(), GestureMode::TwoPointPinch);
        assert!((g.pinch_distance() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_pinch_in_emits_positive_zoom() {
        let mut g = GestureController::new();
        g.handle(down(1, 0.0, 0.0));
        g.handle(down(2, 100.0, 0.0));
        let cmd = g.handle(mv(2, 60.0, 0.0));
        assert_eq!(cmd, Some(GestureCommand::Zoom { delta: 40.0 }));
        assert!((g.pinch_distance() - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_pinch_out_emits_negative_zoom_and_rebaselines() {
        let mut g = GestureController::new();
        g.handle(down(1, 0.0, 0.0));
        g.handle(down(2, 0.0, 50.0));
        assert_eq!(
            g.handle(mv(1, 0.0, -30.0)),
            Some(GestureCommand::Zoom { delta: -30.0 })
        );
        assert_eq!(
            g.handle(mv(1, 0.0, -40.0)),
            Some(GestureCommand::Zoom { delta: -10.0 })
        );
    }

    #[test]
    fn test_lifting_one_finger_resumes_drag_from_current_position() {
        let mut g = GestureController::new();
        g.handle(down(1, 0.0, 0.0));
        g.handle(down(2, 100.0, 0.0));
        g.handle(mv(2, 80.0, 0.0));
        g.handle(PointerEvent::Up { id: 1 });
        assert_eq!(g.mode(), GestureMode::SinglePointDrag);
        assert_eq!(g.pinch_distance(), 0.0);
        assert_eq!(
            g.handle(mv(2, 85.0, 0.0)),
            Some(GestureCommand::Rotate {
                delta: Vec2::new(5.0, 0.0)
            })
        );
    }

    #[test]
    fn test_third_contact_ignored() {
        let mut g = GestureController::new();
        g.handle(down(1, 0.0, 0.0));
        g.handle(down(2, 100.0, 0.0));
        g.handle(down(3, 500.0, 500.0));
        assert_eq!(g.mode(), GestureMode::TwoPointPinch);
        assert_eq!(g.handle(mv(3, 0.0, 0.0)), None);
        g.handle(PointerEvent::Up { id: 3 });
        assert_eq!(g.mode(), GestureMode::TwoPointPinch);
        assert!((g.pinch_distance() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_cancel_behaves_like_up() {
        let mut g = GestureController::new();
        g.handle(down(7, 0.0, 0.0));
        g.handle(PointerEvent::Cancel { id: 7 });
        assert_eq!(g.mode(), GestureMode::Idle);
    }

    #[test]
    fn test_wheel_zooms_in_any_mode() {
        let mut g = GestureController::new();
        assert_eq!(
            g.handle(PointerEvent::Wheel { delta: 40.0 }),
            Some(GestureCommand::Zoom { delta: 40.0 })
        );
        assert_eq!(g.handle(PointerEvent::Wheel { delta: 0.0 }), None);
    }

    #[test]
    fn test_reset_clears_contacts() {
        let mut g = GestureController::new();
        g.handle(down(1, 0.0, 0.0));
        g.handle(down(2, 10.0, 0.0));
        g.reset();
        assert_eq!(g.mode(), GestureMode::Idle);
        assert_eq!(g.pinch_distance(), 0.0);
    }
}
