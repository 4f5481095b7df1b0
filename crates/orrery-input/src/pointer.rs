//! Unified pointer/touch contact events.

use glam::Vec2;

/// Stable per-contact identifier supplied by the input source.
pub type PointerId = u64;

/// Contact id used for the mouse. Chosen outside the range touch ids use.
pub const MOUSE_POINTER_ID: PointerId = u64::MAX;

/// One raw input event in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A contact started (mouse button pressed or finger down).
    Down { id: PointerId, position: Vec2 },
    /// A contact moved. Also sent for mouse hover with no button held.
    Move { id: PointerId, position: Vec2 },
    /// A contact ended normally.
    Up { id: PointerId },
    /// A contact was cancelled by the platform.
    Cancel { id: PointerId },
    /// Scroll wheel in pixels. Positive zooms in.
    Wheel { delta: f32 },
}
