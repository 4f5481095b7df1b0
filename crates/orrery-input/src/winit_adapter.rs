//! Translation of winit window events into [`PointerEvent`]s.
//!
//! Forward window events through [`PointerTranslator::translate`] and pass
//! the result to a [`GestureController`](crate::GestureController).

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};

use crate::{MOUSE_POINTER_ID, PointerEvent, PointerId};

/// Pixels per wheel line. Pixel deltas from touchpads pass through unchanged.
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Stateful adapter tracking cursor position and left-button state.
#[derive(Debug, Clone, Default)]
pub struct PointerTranslator {
    cursor: Vec2,
    button_down: bool,
}

impl PointerTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event. Unrelated events yield `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.on_cursor_moved(position.x, position.y))
            }
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_button(*button, *state),
            WindowEvent::MouseWheel { delta, .. } => Some(self.on_wheel(*delta)),
            WindowEvent::Touch(touch) => Some(self.on_touch(
                touch.phase,
                touch.id,
                touch.location.x,
                touch.location.y,
            )),
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => self.on_cursor_lost(),
            _ => None,
        }
    }

    // ── Event handlers ──────────────────────────────────────────────

    /// Process a `CursorMoved` event.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> PointerEvent {
        self.cursor = Vec2::new(x as f32, y as f32);
        PointerEvent::Move {
            id: MOUSE_POINTER_ID,
            position: self.cursor,
        }
    }

    /// Process a `MouseInput` event. Only the left button drives gestures.
    pub fn on_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }
        match state {
            ElementState::Pressed => {
                self.button_down = true;
                Some(PointerEvent::Down {
                    id: MOUSE_POINTER_ID,
                    position: self.cursor,
                })
            }
            ElementState::Released => {
                self.button_down = false;
                Some(PointerEvent::Up {
                    id: MOUSE_POINTER_ID,
                })
            }
        }
    }

    /// Process a `MouseWheel` event. Scrolling up zooms in.
    pub fn on_wheel(&mut self, delta: MouseScrollDelta) -> PointerEvent {
        let delta = match delta {
            MouseScrollDelta::LineDelta(_x, y) => y * PIXELS_PER_LINE,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        PointerEvent::Wheel { delta }
    }

    /// Process a `Touch` event.
    pub fn on_touch(&mut self, phase: TouchPhase, id: PointerId, x: f64, y: f64) -> PointerEvent {
        let position = Vec2::new(x as f32, y as f32);
        match phase {
            TouchPhase::Started => PointerEvent::Down { id, position },
            TouchPhase::Moved => PointerEvent::Move { id, position },
            TouchPhase::Ended => PointerEvent::Up { id },
            TouchPhase::Cancelled => PointerEvent::Cancel { id },
        }
    }

    /// Cursor left the window or focus was lost: release a held drag.
    fn on_cursor_lost(&mut self) -> Option<PointerEvent> {
        if !self.button_down {
            return None;
        }
        self.button_down = false;
        Some(PointerEvent::Cancel {
            id: MOUSE_POINTER_ID,
        })
    }

    /// Whether the left button is currently held.
    #[must_use]
    pub fn is_button_down(&self) -> bool {
        self.button_down
    }
}
