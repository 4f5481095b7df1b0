//! Configuration system for the orrery.
//!
//! Runtime settings persist to disk as `config.ron`. CLI arguments parsed with
//! clap override loaded values, and unknown or missing fields fall back to
//! defaults so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CameraConfig, Config, DebugConfig, EASING_NAMES, RenderConfig,
    SimulationConfig, WindowConfig, default_config_dir,
};
pub use error::ConfigError;
