//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "orrery";

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Frame pacing settings.
    pub render: RenderConfig,
    /// Orbit simulation and scene population settings.
    pub simulation: SimulationConfig,
    /// Camera navigation settings.
    pub camera: CameraConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Frame pacing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Target frame rate for the host loop (0 = unpaced).
    pub target_fps: u32,
}

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Initial time-scale multiplier. Must be positive.
    pub time_scale: f32,
    /// Start with playback halted.
    pub start_paused: bool,
    /// Asteroid belt size on capable devices.
    pub asteroid_count: usize,
    /// Asteroid belt size on constrained devices.
    pub constrained_asteroid_count: usize,
    /// Treat the host as a constrained device.
    pub constrained_device: bool,
    /// Inner edge of the asteroid belt band.
    pub belt_inner_radius: f32,
    /// Outer edge of the asteroid belt band.
    pub belt_outer_radius: f32,
    /// Seed for asteroid belt generation.
    pub belt_seed: u64,
    /// Optional RON body table replacing the built-in catalog.
    pub body_table: Option<PathBuf>,
}

/// Camera navigation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Radians of orbit per pixel of drag.
    pub rotate_sensitivity: f32,
    /// Distance units per unit of zoom delta.
    pub zoom_sensitivity: f32,
    /// Closest allowed distance from the scene origin.
    pub min_distance: f32,
    /// Farthest allowed distance from the scene origin.
    pub max_distance: f32,
    /// Duration of fly-to transitions in seconds.
    pub transition_duration_s: f32,
    /// Camera offset from a focused body.
    pub focus_offset: [f32; 3],
    /// Camera offset from the focused central body.
    pub central_focus_offset: [f32; 3],
    /// Easing curve for fly-to transitions, one of [`EASING_NAMES`].
    pub transition_easing: String,
}

/// Accepted values for `camera.transition_easing`.
pub const EASING_NAMES: &[&str] = &["linear", "ease_in", "ease_out", "ease_in_out"];

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Orrery".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            start_paused: false,
            asteroid_count: 2000,
            constrained_asteroid_count: 500,
            constrained_device: false,
            belt_inner_radius: 75.0,
            belt_outer_radius: 90.0,
            belt_seed: 42,
            body_table: None,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rotate_sensitivity: 0.005,
            zoom_sensitivity: 0.5,
            min_distance: 10.0,
            max_distance: 3000.0,
            transition_duration_s: 2.0,
            focus_offset: [0.0, 8.0, 24.0],
            central_focus_offset: [0.0, 30.0, 120.0],
            transition_easing: "ease_out".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Number of belt entries allowed by the device-capability budget.
    pub fn asteroid_budget(&self) -> usize {
        if self.constrained_device {
            self.constrained_asteroid_count.min(self.asteroid_count)
        } else {
            self.asteroid_count
        }
    }
}

/// Platform configuration directory for the orrery, if the OS exposes one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// File name of the persisted settings inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
    ron::from_str(&text).map_err(ConfigError::ParseError)
}

impl Config {
    /// Read `config.ron` from `config_dir`, writing the defaults there first
    /// if the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Wrote default orrery settings to {}", path.display());
            return Ok(config);
        }
        let config = read_config(&path)?;
        log::info!("Loaded orrery settings from {}", path.display());
        Ok(config)
    }

    /// Write the settings as pretty RON, creating the directory if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(config_dir.join(CONFIG_FILE_NAME), text).map_err(ConfigError::WriteError)
    }

    /// Re-read the file. `Some` only when it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = read_config(&config_dir.join(CONFIG_FILE_NAME))?;
        if fresh == *self {
            return Ok(None);
        }
        log::info!("Settings changed on disk");
        Ok(Some(fresh))
    }

    /// Reject settings the simulation cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.simulation.time_scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidTimeScale(scale));
        }
        let (min, max) = (self.camera.min_distance, self.camera.max_distance);
        if min.is_nan() || max.is_nan() || min <= 0.0 || min > max {
            return Err(ConfigError::InvalidDistanceRange { min, max });
        }
        let (inner, outer) = (
            self.simulation.belt_inner_radius,
            self.simulation.belt_outer_radius,
        );
        if !inner.is_finite() || !outer.is_finite() || inner < 0.0 || outer < 0.0 {
            return Err(ConfigError::InvalidBeltBand { inner, outer });
        }
        let duration = self.camera.transition_duration_s;
        if !duration.is_finite() || duration < 0.0 {
            return Err(ConfigError::InvalidTransitionDuration(duration));
        }
        let easing = &self.camera.transition_easing;
        if !EASING_NAMES.contains(&easing.as_str()) {
            return Err(ConfigError::UnknownEasing(easing.clone()));
        }
        Ok(())
    }
}
