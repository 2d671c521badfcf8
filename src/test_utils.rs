//! Test utilities for simulation tests.
//!
//! Provides fixtures for commonly used bodies and assertions for verifying
//! physical invariants like momentum and energy conservation.

use bevy::math::DVec2;

use crate::body::Body;

/// Fixtures for creating test bodies.
pub mod fixtures {
    use super::*;

    /// A planet-role body at rest at the given position.
    pub fn body_at(name: &str, mass: f64, pos: DVec2) -> Body {
        moving_body(name, mass, pos, DVec2::ZERO)
    }

    /// A planet-role body with an initial velocity.
    pub fn moving_body(name: &str, mass: f64, pos: DVec2, vel: DVec2) -> Body {
        Body::planet(name, mass, pos, vel, false).expect("fixture body must be valid")
    }

    /// Sun at the origin and Earth at 1.496e11 m moving at 29780 m/s along +y.
    pub fn sun_and_earth() -> (Body, Body) {
        let sun = Body::star("Sun", 1.989e30, DVec2::ZERO, DVec2::ZERO, 5778.0)
            .expect("valid sun");
        let earth = Body::planet(
            "Earth",
            5.972e24,
            DVec2::new(1.496e11, 0.0),
            DVec2::new(0.0, 29780.0),
            true,
        )
        .expect("valid earth");
        (sun, earth)
    }

    /// Two bodies of equal mass at rest at (±d, 0).
    pub fn symmetric_pair(mass: f64, d: f64) -> Vec<Body> {
        vec![
            body_at("West", mass, DVec2::new(-d, 0.0)),
            body_at("East", mass, DVec2::new(d, 0.0)),
        ]
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Compute specific orbital energy around a fixed central mass.
    ///
    /// E = v²/2 - μ/r
    pub fn specific_orbital_energy(pos: DVec2, vel: DVec2, mu: f64) -> f64 {
        0.5 * vel.length_squared() - mu / pos.length()
    }

    /// Σ m·v over all bodies.
    pub fn total_momentum(bodies: &[Body]) -> DVec2 {
        bodies.iter().map(Body::momentum).sum()
    }

    /// Assert two vectors agree within a relative tolerance of `scale`.
    ///
    /// # Panics
    /// Panics if either component differs by more than `tolerance * scale`.
    pub fn assert_vec_close(actual: DVec2, expected: DVec2, scale: f64, tolerance: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff.x <= tolerance * scale && diff.y <= tolerance * scale,
            "Vectors differ: actual={actual:?}, expected={expected:?}, scale={scale:.3e}, tolerance={tolerance:.3e}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symmetric_pair_has_zero_momentum() {
        let pair = fixtures::symmetric_pair(1e24, 1e9);
        assert_eq!(assertions::total_momentum(&pair), DVec2::ZERO);
        assert_eq!(pair[0].position(), -pair[1].position());
    }

    #[test]
    fn test_earth_orbit_is_bound() {
        let (sun, earth) = fixtures::sun_and_earth();
        let mu = crate::types::G * sun.mass();
        let energy = assertions::specific_orbital_energy(earth.position(), earth.velocity(), mu);
        assert!(energy < 0.0, "Earth should be bound to the Sun");
    }

    #[test]
    fn test_total_momentum_sums_bodies() {
        let (sun, earth) = fixtures::sun_and_earth();
        let p = assertions::total_momentum(&[sun, earth]);
        assert_relative_eq!(p.y, 5.972e24 * 29780.0);
        assert_eq!(p.x, 0.0);
    }
}
