//! Preset scenario definitions.

use bevy::math::DVec2;

use super::{BodySpec, RoleSpec, Scenario};
use crate::types::{G, SECONDS_PER_HOUR};

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[SUN_EARTH_MOON, SUN_EARTH, BINARY_STARS];

const SUN: BodySpec = BodySpec {
    name: "Sun",
    mass: 1.989e30,
    position: DVec2::ZERO,
    velocity: DVec2::ZERO,
    role: RoleSpec::Star { temperature: 5778.0 },
};

const EARTH: BodySpec = BodySpec {
    name: "Earth",
    mass: 5.972e24,
    position: DVec2::new(1.496e11, 0.0),
    velocity: DVec2::new(0.0, 29780.0),
    role: RoleSpec::Planet { has_atmosphere: true },
};

/// Scenario 1: Sun, Earth and Moon
///
/// The Moon starts one lunar distance outside Earth, moving 1022 m/s faster
/// than Earth. 500 one-hour steps cover about three weeks.
pub const SUN_EARTH_MOON: Scenario = Scenario {
    id: "sun_earth_moon",
    name: "Sun, Earth and Moon",
    description: "Earth and its Moon orbiting the Sun, one hour per step.",
    bodies: &[
        SUN,
        EARTH,
        BodySpec {
            name: "Moon",
            mass: 7.348e22,
            position: DVec2::new(1.496e11 + 384_400_000.0, 0.0),
            velocity: DVec2::new(0.0, 29780.0 + 1022.0),
            role: RoleSpec::Satellite { parent: "Earth" },
        },
    ],
    gravitational_constant: G,
    dt: SECONDS_PER_HOUR,
    steps: Some(500),
};

/// Scenario 2: Sun and Earth
///
/// The two-body reference case. Run for a full year of one-hour steps.
pub const SUN_EARTH: Scenario = Scenario {
    id: "sun_earth",
    name: "Sun and Earth",
    description: "Earth on a near-circular orbit around the Sun.",
    bodies: &[SUN, EARTH],
    gravitational_constant: G,
    dt: SECONDS_PER_HOUR,
    steps: Some(24 * 365),
};

/// Scenario 3: Binary Stars
///
/// Two equal stars 2e11 m apart circling their common center of mass.
/// Orbital speed v = sqrt(G·m / 4d) ≈ 18267 m/s for m = 2e30 kg, d = 1e11 m.
pub const BINARY_STARS: Scenario = Scenario {
    id: "binary_stars",
    name: "Binary Stars",
    description: "Two equal-mass stars on a mutual circular orbit.",
    bodies: &[
        BodySpec {
            name: "Alpha",
            mass: 2e30,
            position: DVec2::new(-1e11, 0.0),
            velocity: DVec2::new(0.0, -18267.0),
            role: RoleSpec::Star { temperature: 5800.0 },
        },
        BodySpec {
            name: "Beta",
            mass: 2e30,
            position: DVec2::new(1e11, 0.0),
            velocity: DVec2::new(0.0, 18267.0),
            role: RoleSpec::Star { temperature: 4500.0 },
        },
    ],
    gravitational_constant: G,
    dt: 2.0 * SECONDS_PER_HOUR,
    steps: None,
};
