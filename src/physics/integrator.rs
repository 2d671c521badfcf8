//! Fixed-step integrator for the N-body simulation.
//!
//! Uses semi-implicit (symplectic) Euler: the velocity is kicked by the
//! accumulated force first, then the position drifts with the *new*
//! velocity.
//!
//!   v_{n+1} = v_n + (F_n / m) * dt
//!   x_{n+1} = x_n + v_{n+1} * dt

use bevy::math::DVec2;

use crate::body::Body;
use crate::physics::{SimulationError, StateQuantity};
use crate::types::is_finite;

/// Advance one body by `dt` seconds using the force currently accumulated on it.
///
/// `step` is the 1-based index of the step being taken and only feeds the
/// error report. The force accumulator is left untouched.
///
/// # Returns
/// The body's new position, or [`SimulationError::NumericInstability`] if the
/// velocity or position stopped being finite.
pub fn advance(body: &mut Body, dt: f64, step: u64) -> Result<DVec2, SimulationError> {
    body.update_velocity(dt)?;
    if !is_finite(body.velocity()) {
        return Err(instability(body, StateQuantity::Velocity, step));
    }

    body.update_position(dt);
    if !is_finite(body.position()) {
        return Err(instability(body, StateQuantity::Position, step));
    }

    Ok(body.position())
}

fn instability(body: &Body, quantity: StateQuantity, step: u64) -> SimulationError {
    SimulationError::NumericInstability {
        name: body.name().to_owned(),
        quantity,
        step,
    }
}

// =============================================================================
// Tests
// =============================================================================
