//! Built-in body table used when no external table is configured.

use crate::{BodyDef, BodyInfo};

struct Entry {
    id: &'static str,
    radius: f32,
    orbital_radius: f32,
    color: u32,
    rotation_speed: f32,
    orbital_speed: f32,
    title: &'static str,
    summary: &'static str,
    facts: &'static [&'static str],
}

const CATALOG: &[Entry] = &[
    Entry {
        id: "sun",
        radius: 10.0,
        orbital_radius: 0.0,
        color: 0xffaa00,
        rotation_speed: 0.002,
        orbital_speed: 0.0,
        title: "The Sun",
        summary: "A G-type main-sequence star holding the whole system together.",
        facts: &[
            "Contains 99.86% of the system's mass",
            "Surface temperature about 5,500 °C",
            "Light takes 8 minutes to reach Earth",
        ],
    },
    Entry {
        id: "mercury",
        radius: 1.0,
        orbital_radius: 20.0,
        color: 0x8c7853,
        rotation_speed: 0.004,
        orbital_speed: 0.08,
        title: "Mercury",
        summary: "The smallest planet and the closest to the Sun.",
        facts: &[
            "A year lasts 88 Earth days",
            "No moons",
            "Temperatures swing from -180 °C to 430 °C",
        ],
    },
    Entry {
        id: "venus",
        radius: 1.8,
        orbital_radius: 30.0,
        color: 0xffc649,
        rotation_speed: 0.002,
        orbital_speed: 0.05,
        title: "Venus",
        summary: "A rocky world wrapped in a thick, toxic atmosphere.",
        facts: &[
            "Hottest planet at about 465 °C",
            "Rotates backwards",
            "A day is longer than its year",
        ],
    },
    Entry {
        id: "earth",
        radius: 2.0,
        orbital_radius: 45.0,
        color: 0x6b93d6,
        rotation_speed: 0.02,
        orbital_speed: 0.03,
        title: "Earth",
        summary: "The only known world with liquid surface water and life.",
        facts: &[
            "71% of the surface is water",
            "One natural satellite",
            "Protected by a strong magnetic field",
        ],
    },
    Entry {
        id: "mars",
        radius: 1.4,
        orbital_radius: 60.0,
        color: 0xc1440e,
        rotation_speed: 0.018,
        orbital_speed: 0.024,
        title: "Mars",
        summary: "The red planet, home to the tallest volcano in the system.",
        facts: &[
            "Olympus Mons stands 21 km high",
            "Two small moons, Phobos and Deimos",
            "A day lasts 24.6 hours",
        ],
    },
    Entry {
        id: "jupiter",
        radius: 5.5,
        orbital_radius: 110.0,
        color: 0xd8ca9d,
        rotation_speed: 0.04,
        orbital_speed: 0.013,
        title: "Jupiter",
        summary: "A gas giant more massive than all other planets combined.",
        facts: &[
            "The Great Red Spot is a centuries-old storm",
            "Dozens of known moons",
            "Shortest day of any planet at under 10 hours",
        ],
    },
    Entry {
        id: "saturn",
        radius: 4.6,
        orbital_radius: 145.0,
        color: 0xfad5a5,
        rotation_speed: 0.038,
        orbital_speed: 0.009,
        title: "Saturn",
        summary: "A gas giant encircled by a bright system of ice rings.",
        facts: &[
            "Less dense than water",
            "Rings span up to 282,000 km",
            "Titan has a thick atmosphere",
        ],
    },
    Entry {
        id: "uranus",
        radius: 3.2,
        orbital_radius: 180.0,
        color: 0x4fd0e7,
        rotation_speed: 0.03,
        orbital_speed: 0.006,
        title: "Uranus",
        summary: "An ice giant that orbits tipped on its side.",
        facts: &[
            "Axial tilt of 98 degrees",
            "Coldest planetary atmosphere",
            "Faint dark rings",
        ],
    },
    Entry {
        id: "neptune",
        radius: 3.1,
        orbital_radius: 210.0,
        color: 0x4b70dd,
        rotation_speed: 0.032,
        orbital_speed: 0.005,
        title: "Neptune",
        summary: "The outermost planet, swept by the fastest winds measured.",
        facts: &[
            "Winds reach 2,100 km/h",
            "A year lasts 165 Earth years",
            "Triton orbits backwards",
        ],
    },
];

/// The default sun-plus-eight-planets table.
pub fn default_bodies() -> Vec<BodyDef> {
    CATALOG
        .iter()
        .map(|e| BodyDef {
            id: e.id.to_string(),
            radius: e.radius,
            orbital_radius: e.orbital_radius,
            color: e.color,
            rotation_speed: e.rotation_speed,
            orbital_speed: e.orbital_speed,
            initial_angle: 0.0,
            height: 0.0,
            info: BodyInfo {
                title: e.title.to_string(),
                summary: e.summary.to_string(),
                facts: e.facts.iter().map(|f| f.to_string()).collect(),
            },
        })
        .collect()
}
