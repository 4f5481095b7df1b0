//! View modes and the static table of preset camera positions.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

/// What the camera is currently framing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The planets and belt.
    #[default]
    Solar,
    /// The system as a speck in the galaxy.
    Galaxy,
    /// The widest zoom.
    Universe,
    /// A single body, by id.
    Focus(String),
}

/// Camera placement and descriptive text for a scale view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewPreset {
    pub position: Vec3,
    pub title: &'static str,
    pub description_html: &'static str,
}

const SOLAR: ViewPreset = ViewPreset {
    position: Vec3::new(0.0, 80.0, 200.0),
    title: "Solar System",
    description_html: "<p>Eight planets and an asteroid belt circle a single star. \
        Drag to orbit, pinch or scroll to zoom, and pick a body to fly to it.</p>",
};

const GALAXY: ViewPreset = ViewPreset {
    position: Vec3::new(0.0, 200.0, 800.0),
    title: "Galaxy",
    description_html: "<p>Our star is one of a few hundred billion in a barred spiral \
        galaxy about 100,000 light-years across.</p>",
};

const UNIVERSE: ViewPreset = ViewPreset {
    position: Vec3::new(0.0, 600.0, 2400.0),
    title: "Observable Universe",
    description_html: "<p>Galaxies gather into clusters and filaments spanning \
        93 billion light-years of observable space.</p>",
};

impl ViewMode {
    /// Preset for the scale views. `None` for [`ViewMode::Focus`].
    pub fn preset(&self) -> Option<&'static ViewPreset> {
        match self {
            ViewMode::Solar => Some(&SOLAR),
            ViewMode::Galaxy => Some(&GALAXY),
            ViewMode::Universe => Some(&UNIVERSE),
            ViewMode::Focus(_) => None,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Solar => f.write_str("solar"),
            ViewMode::Galaxy => f.write_str("galaxy"),
            ViewMode::Universe => f.write_str("universe"),
            ViewMode::Focus(id) => write!(f, "focus:{id}"),
        }
    }
}

/// A view name that is not one of the scale views.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view mode '{0}'")]
pub struct ParseViewModeError(pub String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solar" => Ok(ViewMode::Solar),
            "galaxy" => Ok(ViewMode::Galaxy),
            "universe" => Ok(ViewMode::Universe),
            _ => Err(ParseViewModeError(s.to_string())),
        }
    }
}
