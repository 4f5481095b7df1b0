//! Boundary to the rendering backend.
//!
//! The core describes each frame as plain data. Backends own every GPU or
//! window handle and match scene objects to their own resources by
//! [`ObjectId`].

use glam::{UVec2, Vec3};
use tracing::{debug, trace};

use orrery_camera::CameraState;
use orrery_celestial::{AsteroidBelt, CelestialRegistry};

/// Color given to every belt entry.
pub const ASTEROID_COLOR: u32 = 0x8a8178;

/// Stable key joining scene objects to backend resources.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectId {
    Body(String),
    /// Index into the belt pool.
    Asteroid(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderObject {
    pub id: ObjectId,
    pub position: Vec3,
    /// Self-rotation about the local Y axis, radians.
    pub rotation: f32,
    pub radius: f32,
    pub color: u32,
}

/// Everything a backend needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScene {
    /// Target surface size in pixels.
    pub viewport: UVec2,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub objects: Vec<RenderObject>,
}

impl FrameScene {
    /// Snapshot the camera, all bodies and all belt entries.
    pub fn capture(
        viewport: UVec2,
        camera: &CameraState,
        registry: &CelestialRegistry,
        belt: &AsteroidBelt,
    ) -> Self {
        let mut objects = Vec::with_capacity(registry.len() + belt.len());
        objects.extend(registry.iter().map(|body| RenderObject {
            id: ObjectId::Body(body.id().to_string()),
            position: body.position(),
            rotation: body.rotation(),
            radius: body.radius(),
            color: body.color(),
        }));
        objects.extend(belt.iter().enumerate().map(|(i, rock)| RenderObject {
            id: ObjectId::Asteroid(i),
            position: rock.position(),
            rotation: 0.0,
            radius: rock.size,
            color: ASTEROID_COLOR,
        }));
        Self {
            viewport,
            camera_position: camera.position,
            camera_target: camera.target,
            objects,
        }
    }

    /// Width over height. A degenerate viewport reports 1.
    pub fn aspect_ratio(&self) -> f32 {
        if self.viewport.x == 0 || self.viewport.y == 0 {
            return 1.0;
        }
        self.viewport.x as f32 / self.viewport.y as f32
    }

    pub fn object(&self, id: &ObjectId) -> Option<&RenderObject> {
        self.objects.iter().find(|o| &o.id == id)
    }

    /// Lookup by body id.
    pub fn body(&self, id: &str) -> Option<&RenderObject> {
        self.objects
            .iter()
            .find(|o| matches!(&o.id, ObjectId::Body(b) if b == id))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The backend could not be brought up.
    #[error("backend init failed: {0}")]
    Init(String),
    /// A frame could not be drawn.
    #[error("frame submission failed: {0}")]
    Frame(String),
}

/// Implemented by the host's renderer.
pub trait RenderBackend {
    fn render(&mut self, frame: &FrameScene) -> Result<(), RenderError>;
}

/// Headless backend that logs frame summaries.
#[derive(Debug, Default)]
pub struct TracingRenderer {
    frames: u64,
    /// Emit a `debug!` summary every this many frames. Zero disables it.
    pub summary_interval: u64,
}

impl TracingRenderer {
    pub fn new(summary_interval: u64) -> Self {
        Self {
            frames: 0,
            summary_interval,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for TracingRenderer {
    fn render(&mut self, frame: &FrameScene) -> Result<(), RenderError> {
        self.frames += 1;
        trace!(frame = self.frames, objects = frame.objects.len(), "render");
        if self.summary_interval > 0 && self.frames % self.summary_interval == 0 {
            debug!(
                frame = self.frames,
                objects = frame.objects.len(),
                viewport = ?frame.viewport,
                camera = ?frame.camera_position,
                "frame summary"
            );
        }
        Ok(())
    }
}
