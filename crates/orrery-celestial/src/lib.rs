//! Celestial bodies, the registry that owns them, the asteroid belt pool, and
//! the per-tick circular orbit update.

pub mod belt;
pub mod body;
pub mod catalog;
pub mod error;
pub mod orbit;
pub mod registry;

pub use belt::{Asteroid, AsteroidBelt, BeltParams};
pub use body::{BodyDef, BodyInfo, CelestialBody};
pub use catalog::default_bodies;
pub use error::RegistryError;
pub use orbit::{Orbit, advance_orbits};
pub use registry::{CelestialRegistry, load_body_table};
