//! Camera state, eased fly-to transitions, orbit controls driven by gestures,
//! preset views, and the navigator that ties them together.

pub mod camera;
pub mod controls;
pub mod navigator;
pub mod presenter;
pub mod transition;
pub mod view;

pub use camera::CameraState;
pub use controls::{OrbitControls, POLE_EPSILON};
pub use navigator::{CameraNavigator, NavigatorSettings};
pub use presenter::{InfoPresenter, Presentation, RecordingPresenter, TracingPresenter};
pub use transition::{EasingFunction, ParseEasingError, Transition, TransitionSample};
pub use view::{ParseViewModeError, ViewMode, ViewPreset};
