//! Per-frame driver. Each tick advances the clock, runs the orbit step if
//! playback is on, steps the camera transition, then submits the frame.

use tracing::{info, warn};

use crate::render::{FrameScene, RenderBackend, RenderError};
use crate::{AppError, Scene};

/// Frames longer than this are logged as stalls.
pub const LONG_FRAME_TIME: f64 = 0.25;

pub struct FrameScheduler<R> {
    renderer: R,
    clock: f64,
    frame_count: u64,
}

impl<R: RenderBackend> FrameScheduler<R> {
    /// Bring up the renderer. If the factory fails no scheduler exists.
    pub fn new<F>(factory: F) -> Result<Self, AppError>
    where
        F: FnOnce() -> Result<R, RenderError>,
    {
        let renderer = factory().map_err(|e| AppError::RendererUnavailable(e.to_string()))?;
        info!("frame scheduler ready");
        Ok(Self {
            renderer,
            clock: 0.0,
            frame_count: 0,
        })
    }

    /// Run one frame. `dt` is the elapsed real time in seconds. Negative or
    /// non-finite values count as zero.
    pub fn tick(&mut self, scene: &mut Scene, dt: f64) -> Result<(), AppError> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if dt > LONG_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds {:.1}ms",
                dt * 1000.0,
                LONG_FRAME_TIME * 1000.0
            );
        }
        self.clock += dt;

        scene.simulate();
        scene.navigator.advance(self.clock);

        let frame = FrameScene::capture(
            scene.viewport,
            scene.navigator.camera(),
            &scene.registry,
            &scene.belt,
        );
        self.renderer.render(&frame)?;
        self.frame_count += 1;
        Ok(())
    }

    /// Scheduler clock in seconds.
    pub fn now(&self) -> f64 {
        self.clock
    }

    /// Frames submitted so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
