//! Camera position, look-at target and the optional in-flight transition.

use glam::{Mat4, Vec3};

use crate::Transition;

/// The camera as seen by the core. The renderer derives matrices from it.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    /// World position.
    pub position: Vec3,
    /// Point the camera looks at. Defaults to the scene origin.
    pub target: Vec3,
    pub(crate) transition: Option<Transition>,
}

impl CameraState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            transition: None,
        }
    }

    /// The active transition, if any.
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Distance from the scene origin.
    pub fn distance(&self) -> f32 {
        self.position.length()
    }

    /// Right-handed view matrix looking from `position` at `target`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 80.0, 200.0))
    }
}
