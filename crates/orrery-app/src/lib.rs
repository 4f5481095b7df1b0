//! Orrery application core: the scene context, UI commands, the frame
//! scheduler and the rendering boundary, plus a headless host loop.

pub mod command;
pub mod error;
pub mod host;
pub mod render;
pub mod scene;
pub mod scheduler;

pub use command::UiCommand;
pub use error::AppError;
pub use host::{RunLimits, run, spawn_console};
pub use render::{FrameScene, ObjectId, RenderBackend, RenderError, RenderObject, TracingRenderer};
pub use scene::{PlaybackState, Scene};
pub use scheduler::FrameScheduler;
