//! Fixed-radius circular orbits advanced by a constant per-tick increment.
//!
//! Increments are scaled by the user time-scale only, never by wall-clock
//! frame time, so the animation speed is tied to the tick count.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::{AsteroidBelt, CelestialRegistry};

/// Circular orbital path around the scene origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Distance from the origin in the XZ plane. Zero means stationary.
    pub radius: f32,
    /// Radians advanced per tick at unit time-scale.
    pub angular_speed: f32,
    /// Current angle in radians, kept in `[0, TAU)`.
    pub angle: f32,
    /// Fixed vertical offset.
    pub height: f32,
}

impl Orbit {
    /// Create an orbit starting at `angle` (wrapped into `[0, TAU)`).
    pub fn new(radius: f32, angular_speed: f32, angle: f32, height: f32) -> Self {
        Self {
            radius,
            angular_speed,
            angle: wrap_angle(angle),
            height,
        }
    }

    /// Advance one tick. Stationary orbits keep their angle.
    pub fn advance(&mut self, time_scale: f32) {
        if self.radius > 0.0 {
            self.angle = wrap_angle(self.angle + self.angular_speed * time_scale);
        }
    }

    /// Position on the path for the current angle.
    pub fn position(&self) -> Vec3 {
        if self.radius > 0.0 {
            Vec3::new(
                self.angle.cos() * self.radius,
                self.height,
                self.angle.sin() * self.radius,
            )
        } else {
            Vec3::new(0.0, self.height, 0.0)
        }
    }
}

/// Wrap an angle into `[0, TAU)`.
pub(crate) fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Advance every named body and belt entry by one tick.
///
/// Bodies orbit and spin. Belt entries only orbit.
pub fn advance_orbits(registry: &mut CelestialRegistry, belt: &mut AsteroidBelt, time_scale: f32) {
    for body in registry.iter_mut() {
        body.advance(time_scale);
    }
    for asteroid in belt.iter_mut() {
        asteroid.orbit.advance(time_scale);
    }
}
