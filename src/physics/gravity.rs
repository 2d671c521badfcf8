//! Pairwise Newtonian gravity between simulated bodies.
//!
//! Every ordered pair (i, j) with i ≠ j is evaluated, so each unordered pair
//! is computed twice: once accumulating into i and once into j. Summation
//! follows body order, which keeps results bit-for-bit reproducible.

use bevy::log::debug;
use bevy::math::DVec2;

use crate::body::Body;

/// Gravitational force exerted on `target` by `source`.
///
/// # Arguments
/// * `target` - Body the force acts on
/// * `source` - Body doing the pulling
/// * `g` - Gravitational constant (m³·kg⁻¹·s⁻²)
///
/// # Returns
/// Force vector in newtons pointing from `target` toward `source`, or zero
/// when the two bodies occupy exactly the same position.
#[inline]
pub fn pairwise_force(target: &Body, source: &Body, g: f64) -> DVec2 {
    let delta = source.position() - target.position();
    let distance = delta.length();

    // Coincident bodies have no defined direction; the pair is skipped.
    if distance == 0.0 {
        return DVec2::ZERO;
    }

    // F = G·m1·m2/d² along delta/d
    let magnitude = g * target.mass() * source.mass() / (distance * distance);
    delta * magnitude / distance
}

/// Accumulate the gravitational force of every other body into each body's
/// force accumulator.
///
/// Accumulators are expected to be zero on entry.
pub fn compute_gravitational_forces(bodies: &mut [Body], g: f64) {
    let n = bodies.len();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if bodies[i].position() == bodies[j].position() {
                debug!(
                    "Skipping coincident pair '{}' / '{}'",
                    bodies[i].name(),
                    bodies[j].name()
                );
                continue;
            }
            let force = pairwise_force(&bodies[i], &bodies[j], g);
            bodies[i].apply_force(force);
        }
    }
}
