//! Headless orrery host.
//!
//! Runs the simulation against the tracing renderer and reads commands such
//! as `view galaxy` or `focus earth` from stdin.
//!
//! Run with: `cargo run -p orrery-app -- --frames 600`

use clap::Parser;
use orrery_app::{AppError, FrameScheduler, RunLimits, Scene, TracingRenderer};
use orrery_camera::TracingPresenter;
use orrery_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().or_else(default_config_dir);

    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    orrery_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run(&config, args.frames) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &Config, frames: Option<u64>) -> Result<(), AppError> {
    config.validate()?;
    info!("Orrery");
    info!(
        "Window: {}x{} | Title: {}",
        config.window.width, config.window.height, config.window.title
    );

    let mut scene = Scene::from_config(config)?;
    let interval = u64::from(config.render.target_fps.max(1));
    let mut scheduler = FrameScheduler::new(|| Ok(TracingRenderer::new(interval)))?;
    let console = orrery_app::spawn_console();
    let limits = RunLimits {
        frames,
        target_fps: config.render.target_fps,
    };
    orrery_app::run(
        &mut scheduler,
        &mut scene,
        &console,
        &mut TracingPresenter,
        limits,
    )
}
