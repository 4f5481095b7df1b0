//! Pointer and touch input: a unified contact event model, the gesture state
//! machine that turns contacts into camera rotate/zoom commands, and an
//! adapter from winit window events.

pub mod gesture;
pub mod pointer;
pub mod winit_adapter;

pub use gesture::{GestureCommand, GestureController, GestureMode};
pub use pointer::{MOUSE_POINTER_ID, PointerEvent, PointerId};
pub use winit_adapter::{PIXELS_PER_LINE, PointerTranslator};
