//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use orbitsim::{Body, Simulation};

pub const SUN_MASS: f64 = 1.989e30;
pub const EARTH_MASS: f64 = 5.972e24;
pub const EARTH_DISTANCE: f64 = 1.496e11;
pub const EARTH_SPEED: f64 = 29780.0;

pub fn sun() -> Body {
    Body::star("Sun", SUN_MASS, DVec2::ZERO, DVec2::ZERO, 5778.0).unwrap()
}

pub fn earth() -> Body {
    Body::planet(
        "Earth",
        EARTH_MASS,
        DVec2::new(EARTH_DISTANCE, 0.0),
        DVec2::new(0.0, EARTH_SPEED),
        true,
    )
    .unwrap()
}

pub fn moon() -> Body {
    Body::satellite(
        "Moon",
        7.348e22,
        DVec2::new(EARTH_DISTANCE + 384_400_000.0, 0.0),
        DVec2::new(0.0, EARTH_SPEED + 1022.0),
        "Earth",
    )
    .unwrap()
}

/// Sun and Earth with the default gravitational constant.
pub fn sun_earth() -> Simulation {
    Simulation::new(vec![sun(), earth()]).unwrap()
}

/// Total angular momentum about the origin (2D scalar).
///
/// L = Σ m (x·vy - y·vx)
pub fn angular_momentum(sim: &Simulation) -> f64 {
    sim.bodies()
        .iter()
        .map(|b| b.mass() * b.position().perp_dot(b.velocity()))
        .sum()
}

/// |final - initial| / |initial|
pub fn relative_drift(initial: f64, final_value: f64) -> f64 {
    ((final_value - initial) / initial).abs()
}
