//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Animated orbital visualization")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Initial time-scale multiplier.
    #[arg(long)]
    pub time_scale: Option<f32>,

    /// Asteroid belt size.
    #[arg(long)]
    pub asteroids: Option<usize>,

    /// Use the reduced asteroid budget for constrained devices.
    #[arg(long)]
    pub constrained: bool,

    /// Start with playback halted.
    #[arg(long)]
    pub paused: bool,

    /// Target frame rate (0 = unpaced).
    #[arg(long)]
    pub target_fps: Option<u32>,

    /// Stop after this many frames (runs until terminated when omitted).
    #[arg(long)]
    pub frames: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// RON body table replacing the built-in catalog.
    #[arg(long)]
    pub bodies: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(scale) = args.time_scale {
            self.simulation.time_scale = scale;
        }
        if let Some(count) = args.asteroids {
            self.simulation.asteroid_count = count;
        }
        if args.constrained {
            self.simulation.constrained_device = true;
        }
        if args.paused {
            self.simulation.start_paused = true;
        }
        if let Some(fps) = args.target_fps {
            self.render.target_fps = fps;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref path) = args.bodies {
            self.simulation.body_table = Some(path.clone());
        }
    }
}
