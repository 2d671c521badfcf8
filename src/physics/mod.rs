//! Physics core and the fixed-timestep driver that advances it.
//!
//! The core ([`Simulation`], [`gravity`], [`integrator`]) is plain Rust and
//! can be stepped directly. [`SimulationPlugin`] wraps it for Bevy: it steps
//! the `Simulation` resource once per `FixedUpdate` tick, like an animation
//! timer calling `step(dt)` every frame.

mod error;
pub mod gravity;
pub mod integrator;
mod simulation;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use error::{InvalidBodyReason, SimulationError, StateQuantity};
pub use gravity::{compute_gravitational_forces, pairwise_force};
pub use simulation::Simulation;

use crate::types::{SECONDS_PER_HOUR, meters_to_au, seconds_to_days, to_km_per_s};

/// Plugin stepping the [`Simulation`] resource at a fixed real-time interval.
///
/// Insert [`SimulationSettings`] before adding the plugin to override the
/// defaults; the tick interval is read once at build time.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationSettings>()
            .init_resource::<SimulationStatus>();

        let interval = app.world().resource::<SimulationSettings>().frame_interval;
        app.insert_resource(Time::<Fixed>::from_seconds(interval))
            .add_systems(FixedUpdate, physics_step);
    }
}

/// Configuration for driving the simulation.
#[derive(Resource, Clone, Debug)]
pub struct SimulationSettings {
    /// Simulated seconds per step. Default: 3600 (1 hour).
    pub dt: f64,
    /// Stop after this many steps. `None` runs forever. Default: 500.
    pub max_steps: Option<u64>,
    /// Real seconds between steps. Default: 0.05.
    pub frame_interval: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            dt: SECONDS_PER_HOUR,
            max_steps: Some(500),
            frame_interval: 0.05,
        }
    }
}

/// Run state of the driver loop.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub enum SimulationStatus {
    #[default]
    Running,
    Paused,
    /// The step budget in [`SimulationSettings::max_steps`] was used up.
    Completed,
    /// A step failed; the loop stops until a new simulation is installed.
    Halted(SimulationError),
}

impl SimulationStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, SimulationStatus::Running)
    }

    /// Flip between running and paused. Finished or halted runs stay put.
    pub fn toggle_pause(&mut self) {
        *self = match self {
            SimulationStatus::Running => SimulationStatus::Paused,
            SimulationStatus::Paused => SimulationStatus::Running,
            _ => return,
        };
    }
}

/// Advance the simulation by one step per fixed tick.
///
/// Failures are never retried: the error is logged and the loop halts.
pub fn physics_step(
    simulation: Option<ResMut<Simulation>>,
    settings: Res<SimulationSettings>,
    mut status: ResMut<SimulationStatus>,
) {
    if !status.is_running() {
        return;
    }
    let Some(mut simulation) = simulation else {
        return;
    };

    if settings
        .max_steps
        .is_some_and(|max| simulation.step_count() >= max)
    {
        info!(
            "Simulation completed {} steps ({:.1} days)",
            simulation.step_count(),
            seconds_to_days(simulation.elapsed())
        );
        for body in simulation.bodies() {
            let position = meters_to_au(body.position());
            debug!(
                "  {} at ({:.4}, {:.4}) AU, {:.2} km/s",
                body.name(),
                position.x,
                position.y,
                to_km_per_s(body.velocity()).length()
            );
        }
        *status = SimulationStatus::Completed;
        return;
    }

    if simulation.is_empty() {
        warn!("Stepping a simulation with no bodies");
    }

    if let Err(err) = simulation.step(settings.dt) {
        error!("Simulation halted: {}", err);
        *status = SimulationStatus::Halted(err);
    }
}
