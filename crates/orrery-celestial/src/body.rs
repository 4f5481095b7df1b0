//! Body definitions loaded from configuration and the runtime body entity.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::orbit::{Orbit, wrap_angle};

/// Descriptive metadata surfaced when a body is focused.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyInfo {
    /// Display title.
    pub title: String,
    /// One-paragraph description.
    pub summary: String,
    /// Ordered list of short facts.
    pub facts: Vec<String>,
}

/// Static definition of one named body, as written in a body table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyDef {
    /// Unique, stable key.
    pub id: String,
    /// Visual radius.
    pub radius: f32,
    /// Distance from the scene origin. Zero for the central body.
    pub orbital_radius: f32,
    /// Base color as 0xRRGGBB.
    pub color: u32,
    /// Self-rotation in radians per tick at unit time-scale.
    pub rotation_speed: f32,
    /// Orbital advance in radians per tick at unit time-scale.
    pub orbital_speed: f32,
    /// Starting orbital angle in radians.
    #[serde(default)]
    pub initial_angle: f32,
    /// Fixed vertical offset.
    #[serde(default)]
    pub height: f32,
    /// Descriptive metadata.
    #[serde(default)]
    pub info: BodyInfo,
}

/// A named body in the registry.
///
/// Only `orbit.angle` and `rotation` change after creation.
#[derive(Clone, Debug)]
pub struct CelestialBody {
    id: String,
    radius: f32,
    color: u32,
    rotation_speed: f32,
    rotation: f32,
    orbit: Orbit,
    info: BodyInfo,
}

impl CelestialBody {
    /// Build a body from a definition that already passed validation.
    pub(crate) fn from_def(def: BodyDef) -> Self {
        Self {
            orbit: Orbit::new(
                def.orbital_radius,
                def.orbital_speed,
                def.initial_angle,
                def.height,
            ),
            id: def.id,
            radius: def.radius,
            color: def.color,
            rotation_speed: def.rotation_speed,
            rotation: 0.0,
            info: def.info,
        }
    }

    /// Advance orbit and self-rotation by one tick.
    pub fn advance(&mut self, time_scale: f32) {
        self.orbit.advance(time_scale);
        self.rotation = wrap_angle(self.rotation + self.rotation_speed * time_scale);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// Current self-rotation angle in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    /// Current orbital angle in radians.
    pub fn angle(&self) -> f32 {
        self.orbit.angle
    }

    /// Current world position.
    pub fn position(&self) -> Vec3 {
        self.orbit.position()
    }

    /// Whether this body sits at the scene origin (orbital radius 0).
    pub fn is_central(&self) -> bool {
        self.orbit.radius == 0.0
    }

    pub fn info(&self) -> &BodyInfo {
        &self.info
    }
}
