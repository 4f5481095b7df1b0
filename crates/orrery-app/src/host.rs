//! Headless host: paces scheduler ticks and feeds console commands into the
//! scene between them.

use std::io::BufRead;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, TryRecvError};
use tracing::{debug, info, warn};

use orrery_camera::InfoPresenter;

use crate::render::RenderBackend;
use crate::{AppError, FrameScheduler, Scene, UiCommand};

/// When the host loop stops on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunLimits {
    /// Stop after this many frames.
    pub frames: Option<u64>,
    /// Ticks per second. Zero runs unpaced.
    pub target_fps: u32,
}

/// Spawn a thread that forwards stdin lines. The channel closes on EOF.
pub fn spawn_console() -> Receiver<String> {
    let (tx, rx) = crossbeam_channel::unbounded();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Drive the scene until a limit is hit or the console sends `quit`.
pub fn run<R: RenderBackend>(
    scheduler: &mut FrameScheduler<R>,
    scene: &mut Scene,
    console: &Receiver<String>,
    presenter: &mut dyn InfoPresenter,
    limits: RunLimits,
) -> Result<(), AppError> {
    let frame_budget = if limits.target_fps > 0 {
        Some(Duration::from_secs_f64(1.0 / f64::from(limits.target_fps)))
    } else {
        None
    };
    let mut console_open = true;
    let mut previous = Instant::now();

    info!(frames = ?limits.frames, target_fps = limits.target_fps, "host loop starting");
    loop {
        if limits.frames.is_some_and(|n| scheduler.frame_count() >= n) {
            break;
        }
        if console_open {
            let now = scheduler.now();
            if !drain_console(console, now, scene, presenter, &mut console_open) {
                info!("quit requested");
                break;
            }
        }

        let frame_start = Instant::now();
        let dt = frame_start.duration_since(previous).as_secs_f64();
        previous = frame_start;
        scheduler.tick(scene, dt)?;

        if let Some(budget) = frame_budget {
            let spent = frame_start.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
    }
    info!(frames = scheduler.frame_count(), clock = scheduler.now(), "host loop finished");
    Ok(())
}

/// Apply every pending console line. Returns `false` on `quit`.
fn drain_console(
    console: &Receiver<String>,
    now: f64,
    scene: &mut Scene,
    presenter: &mut dyn InfoPresenter,
    console_open: &mut bool,
) -> bool {
    loop {
        match console.try_recv() {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if matches!(line, "quit" | "exit") {
                    return false;
                }
                match line.parse::<UiCommand>() {
                    Ok(command) => scene.apply_command(command, now, presenter),
                    Err(e) => warn!("{e}"),
                }
            }
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => {
                debug!("console closed");
                *console_open = false;
                return true;
            }
        }
    }
}
