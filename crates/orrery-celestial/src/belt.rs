//! Asteroid belt: a bounded pool of anonymous orbiting rocks generated once
//! from a seed and a device-capability budget.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::Orbit;

/// Orbital speed band for belt entries, radians per tick.
const SPEED_RANGE: (f32, f32) = (0.002, 0.008);
/// Vertical scatter around the orbital plane.
const HEIGHT_SCATTER: f32 = 1.5;
/// Visual size band.
const SIZE_RANGE: (f32, f32) = (0.1, 0.4);

/// Generation parameters for an [`AsteroidBelt`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeltParams {
    /// Number of entries to generate.
    pub count: usize,
    /// Inner edge of the band.
    pub inner_radius: f32,
    /// Outer edge of the band.
    pub outer_radius: f32,
    /// RNG seed. Equal seeds yield identical belts.
    pub seed: u64,
}

/// One belt entry. Carries no descriptive metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    pub orbit: Orbit,
    pub size: f32,
}

impl Asteroid {
    pub fn position(&self) -> Vec3 {
        self.orbit.position()
    }
}

/// Fixed-size pool of belt entries.
#[derive(Clone, Debug, Default)]
pub struct AsteroidBelt {
    asteroids: Vec<Asteroid>,
}

impl AsteroidBelt {
    /// Generate a belt. An inverted, empty or non-finite band collapses onto
    /// the inner radius, and a non-finite inner radius onto the origin.
    pub fn generate(params: BeltParams) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let inner = if params.inner_radius.is_finite() {
            params.inner_radius.max(0.0)
        } else {
            0.0
        };
        let outer = params.outer_radius;

        let asteroids = (0..params.count)
            .map(|_| {
                let radius = if outer.is_finite() && outer > inner {
                    rng.random_range(inner..outer)
                } else {
                    inner
                };
                let speed = rng.random_range(SPEED_RANGE.0..SPEED_RANGE.1);
                let angle = rng.random::<f32>() * TAU;
                let height = (rng.random::<f32>() * 2.0 - 1.0) * HEIGHT_SCATTER;
                let size = rng.random_range(SIZE_RANGE.0..SIZE_RANGE.1);
                Asteroid {
                    orbit: Orbit::new(radius, speed, angle, height),
                    size,
                }
            })
            .collect::<Vec<_>>();

        debug!(count = asteroids.len(), inner, outer, "generated asteroid belt");
        Self { asteroids }
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Asteroid> {
        self.asteroids.iter_mut()
    }
}
