//! The owned scene context: everything the scheduler ticks and the host
//! mutates between ticks.

use glam::{UVec2, Vec3};
use tracing::{debug, info, warn};

use orrery_camera::{
    CameraNavigator, EasingFunction, InfoPresenter, NavigatorSettings, OrbitControls,
};
use orrery_celestial::{
    AsteroidBelt, BeltParams, CelestialRegistry, advance_orbits, default_bodies, load_body_table,
};
use orrery_config::{Config, ConfigError};
use orrery_input::{GestureController, PointerEvent};

use crate::{AppError, UiCommand};

/// Whether orbits advance, and how fast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackState {
    pub running: bool,
    time_scale: f32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            running: true,
            time_scale: 1.0,
        }
    }
}

impl PlaybackState {
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Set the multiplier. Non-positive or non-finite values are ignored.
    pub fn set_time_scale(&mut self, scale: f32) -> bool {
        if !scale.is_finite() || scale <= 0.0 {
            warn!(scale, kept = self.time_scale, "ignoring invalid time scale");
            return false;
        }
        self.time_scale = scale;
        true
    }
}

/// Surface size used until the host reports one.
pub const DEFAULT_VIEWPORT: UVec2 = UVec2::new(1280, 720);

pub struct Scene {
    pub registry: CelestialRegistry,
    pub belt: AsteroidBelt,
    pub navigator: CameraNavigator,
    pub playback: PlaybackState,
    pub gestures: GestureController,
    /// Surface size handed to the renderer with each frame.
    pub viewport: UVec2,
}

impl Scene {
    pub fn new(
        registry: CelestialRegistry,
        belt: AsteroidBelt,
        settings: NavigatorSettings,
    ) -> Self {
        Self {
            registry,
            belt,
            navigator: CameraNavigator::new(settings),
            playback: PlaybackState::default(),
            gestures: GestureController::new(),
            viewport: DEFAULT_VIEWPORT,
        }
    }

    /// Build the scene from settings: body table (or the built-in catalog),
    /// belt sized by the device budget, camera tuning and initial playback.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let sim = &config.simulation;
        let defs = match &sim.body_table {
            Some(path) => {
                info!(path = %path.display(), "loading body table");
                load_body_table(path)?
            }
            None => default_bodies(),
        };
        let registry = CelestialRegistry::from_defs(defs)?;

        let belt = AsteroidBelt::generate(BeltParams {
            count: sim.asteroid_budget(),
            inner_radius: sim.belt_inner_radius,
            outer_radius: sim.belt_outer_radius,
            seed: sim.belt_seed,
        });

        let cam = &config.camera;
        let easing = cam
            .transition_easing
            .parse::<EasingFunction>()
            .map_err(|e| ConfigError::UnknownEasing(e.0))?;
        let settings = NavigatorSettings {
            controls: OrbitControls {
                rotate_sensitivity: cam.rotate_sensitivity,
                zoom_sensitivity: cam.zoom_sensitivity,
                min_distance: cam.min_distance,
                max_distance: cam.max_distance,
            },
            transition_duration: f64::from(cam.transition_duration_s),
            focus_offset: Vec3::from_array(cam.focus_offset),
            central_focus_offset: Vec3::from_array(cam.central_focus_offset),
            easing,
        };

        let mut scene = Self::new(registry, belt, settings);
        scene.playback.set_time_scale(sim.time_scale);
        scene.playback.running = !sim.start_paused;
        scene.resize(config.window.width, config.window.height);
        info!(
            bodies = scene.registry.len(),
            asteroids = scene.belt.len(),
            time_scale = scene.playback.time_scale(),
            running = scene.playback.running,
            "scene ready"
        );
        Ok(scene)
    }

    /// Record a new surface size, e.g. from a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = UVec2::new(width, height);
        debug!(width, height, "viewport resized");
    }

    /// Advance every orbit by one tick if playback is running.
    pub fn simulate(&mut self) {
        if self.playback.running {
            let scale = self.playback.time_scale();
            advance_orbits(&mut self.registry, &mut self.belt, scale);
        }
    }

    /// Feed one pointer event through the gesture controller into the camera.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let Some(command) = self.gestures.handle(event) {
            self.navigator.apply(command);
        }
    }

    /// Apply a UI command at clock time `now`.
    pub fn apply_command(
        &mut self,
        command: UiCommand,
        now: f64,
        presenter: &mut dyn InfoPresenter,
    ) {
        debug!(?command, now, "ui command");
        match command {
            UiCommand::SwitchView(mode) => self.navigator.switch_view(mode, now, presenter),
            UiCommand::FocusBody(id) => {
                self.navigator.focus_body(&self.registry, &id, now, presenter);
            }
            UiCommand::SetTimeScale(scale) => {
                self.playback.set_time_scale(scale);
            }
            UiCommand::TogglePlayback => self.playback.toggle(),
            UiCommand::SetPlaying(running) => self.playback.running = running,
            UiCommand::ResetView => self.navigator.reset_view(now, presenter),
        }
    }
}
