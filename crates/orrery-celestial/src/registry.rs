//! Celestial registry: the authoritative, validated set of named bodies.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::{BodyDef, CelestialBody, RegistryError};

/// Registry of all named bodies in the scene.
///
/// Built once from configuration. Lookup is by id. Iteration order matches
/// the order of the definitions.
#[derive(Clone, Debug, Default)]
pub struct CelestialRegistry {
    bodies: Vec<CelestialBody>,
    id_index: HashMap<String, usize>,
}

impl CelestialRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a full body table, rejecting it on the first
    /// invalid definition.
    pub fn from_defs(defs: impl IntoIterator<Item = BodyDef>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Register a new body. Returns the body's index on success.
    ///
    /// # Errors
    ///
    /// Returns an error for a duplicate id, a negative (or NaN) orbital
    /// radius, or a non-positive radius. Rejected definitions leave the
    /// registry unchanged.
    pub fn register(&mut self, def: BodyDef) -> Result<usize, RegistryError> {
        if self.id_index.contains_key(&def.id) {
            return Err(RegistryError::DuplicateId(def.id));
        }
        if def.orbital_radius.is_nan() || def.orbital_radius < 0.0 {
            return Err(RegistryError::NegativeOrbitalRadius {
                id: def.id,
                radius: def.orbital_radius,
            });
        }
        if def.radius.is_nan() || def.radius <= 0.0 {
            return Err(RegistryError::NonPositiveRadius {
                id: def.id,
                radius: def.radius,
            });
        }

        let idx = self.bodies.len();
        debug!(id = %def.id, orbital_radius = def.orbital_radius, "registered body");
        self.id_index.insert(def.id.clone(), idx);
        self.bodies.push(CelestialBody::from_def(def));
        Ok(idx)
    }

    /// Look up a body by id.
    pub fn get(&self, id: &str) -> Option<&CelestialBody> {
        self.id_index.get(id).map(|&idx| &self.bodies[idx])
    }

    /// First body at the scene origin, if any.
    pub fn central(&self) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.is_central())
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over all registered bodies.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CelestialBody> {
        self.bodies.iter_mut()
    }
}

/// Read a RON list of body definitions from disk.
pub fn load_body_table(path: &Path) -> Result<Vec<BodyDef>, RegistryError> {
    let contents = std::fs::read_to_string(path).map_err(RegistryError::Read)?;
    ron::from_str(&contents).map_err(RegistryError::Parse)
}
