//! Camera navigator: the single owner of camera state.
//!
//! Two paths write to the camera. Gesture commands move it immediately,
//! and view switches or body focus start a timed transition that
//! [`CameraNavigator::advance`] steps each frame. A gesture arriving while a
//! transition is in flight cancels it, and the command applies from wherever
//! the camera is at that moment.

use glam::Vec3;
use tracing::{debug, trace};

use orrery_celestial::CelestialRegistry;
use orrery_input::GestureCommand;

use crate::{CameraState, EasingFunction, InfoPresenter, OrbitControls, Transition, ViewMode};

/// Tuning for the navigator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigatorSettings {
    pub controls: OrbitControls,
    /// Seconds per fly-to.
    pub transition_duration: f64,
    /// Offset from an orbiting body's position when focusing it.
    pub focus_offset: Vec3,
    /// Offset used for the central body.
    pub central_focus_offset: Vec3,
    pub easing: EasingFunction,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            controls: OrbitControls::default(),
            transition_duration: 2.0,
            focus_offset: Vec3::new(0.0, 8.0, 24.0),
            central_focus_offset: Vec3::new(0.0, 30.0, 120.0),
            easing: EasingFunction::EaseOut,
        }
    }
}

pub struct CameraNavigator {
    camera: CameraState,
    settings: NavigatorSettings,
    view: ViewMode,
}

impl CameraNavigator {
    /// Start at the solar preset with no transition.
    pub fn new(settings: NavigatorSettings) -> Self {
        let position = ViewMode::Solar
            .preset()
            .map(|p| p.position)
            .unwrap_or(Vec3::new(0.0, 80.0, 200.0));
        Self {
            camera: CameraState::new(position),
            settings,
            view: ViewMode::Solar,
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn settings(&self) -> &NavigatorSettings {
        &self.settings
    }

    /// The most recently selected view.
    pub fn view(&self) -> &ViewMode {
        &self.view
    }

    pub fn is_transitioning(&self) -> bool {
        self.camera.transition.is_some()
    }

    /// Fly from the current position to `to`, replacing any in-flight
    /// transition.
    pub fn start_transition(&mut self, to: Vec3, to_target: Vec3, now: f64) {
        if let Some(previous) = &self.camera.transition {
            trace!(to = ?previous.to, "replacing in-flight transition");
        }
        self.camera.transition = Some(Transition {
            from: self.camera.position,
            to,
            from_target: self.camera.target,
            to_target,
            start_time: now,
            duration: self.settings.transition_duration.max(0.0),
            easing: self.settings.easing,
        });
    }

    /// Step the active transition to clock time `now`.
    ///
    /// Returns `true` if the camera moved.
    pub fn advance(&mut self, now: f64) -> bool {
        let Some(transition) = &self.camera.transition else {
            return false;
        };
        let sample = transition.sample(now);
        self.camera.position = sample.position;
        self.camera.target = sample.target;
        if sample.finished {
            self.camera.transition = None;
            debug!(position = ?self.camera.position, "transition complete");
        }
        true
    }

    /// Apply a gesture command immediately, cancelling any transition.
    pub fn apply(&mut self, command: GestureCommand) {
        if self.camera.transition.take().is_some() {
            debug!("transition cancelled by direct manipulation");
        }
        match command {
            GestureCommand::Rotate { delta } => {
                self.settings.controls.rotate(&mut self.camera, delta)
            }
            GestureCommand::Zoom { delta } => self.settings.controls.zoom(&mut self.camera, delta),
        }
    }

    /// Fly to a scale view and describe it.
    ///
    /// A [`ViewMode::Focus`] has no preset and is ignored here. Use
    /// [`CameraNavigator::focus_body`] for it.
    pub fn switch_view(&mut self, mode: ViewMode, now: f64, presenter: &mut dyn InfoPresenter) {
        let Some(preset) = mode.preset() else {
            debug!(view = %mode, "view has no preset");
            return;
        };
        debug!(view = %mode, to = ?preset.position, "switching view");
        self.start_transition(preset.position, Vec3::ZERO, now);
        self.view = mode;
        presenter.present_view(preset.title, preset.description_html);
    }

    /// Fly to a body and describe it. An unknown id changes nothing and
    /// returns `false`.
    pub fn focus_body(
        &mut self,
        registry: &CelestialRegistry,
        id: &str,
        now: f64,
        presenter: &mut dyn InfoPresenter,
    ) -> bool {
        let Some(body) = registry.get(id) else {
            debug!(id, "focus on unknown body ignored");
            return false;
        };
        let offset = if body.is_central() {
            self.settings.central_focus_offset
        } else {
            self.settings.focus_offset
        };
        let to = body.position() + offset;
        debug!(id, to = ?to, "focusing body");
        self.start_transition(to, Vec3::ZERO, now);
        self.view = ViewMode::Focus(id.to_string());
        let info = body.info();
        presenter.present_body(&info.title, &info.summary, &info.facts);
        true
    }

    /// Same as switching to the solar view.
    pub fn reset_view(&mut self, now: f64, presenter: &mut dyn InfoPresenter) {
        self.switch_view(ViewMode::Solar, now, presenter);
    }
}

impl Default for CameraNavigator {
    fn default() -> Self {
        Self::new(NavigatorSettings::default())
    }
}
