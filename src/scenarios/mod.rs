//! Preset initial configurations.
//!
//! A [`Scenario`] is a static description of a set of bodies plus the step
//! size and step budget to run them with. Building it validates the bodies
//! and produces a ready-to-step [`Simulation`].

pub mod presets;

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::{Body, BodyRole};
use crate::physics::{Simulation, SimulationError, SimulationSettings, SimulationStatus};

pub use presets::SCENARIOS;

/// Role of a preset body, with `'static` data so presets can be constants.
#[derive(Clone, Copy, Debug)]
pub enum RoleSpec {
    Star { temperature: f64 },
    Planet { has_atmosphere: bool },
    Satellite { parent: &'static str },
}

impl From<RoleSpec> for BodyRole {
    fn from(spec: RoleSpec) -> Self {
        match spec {
            RoleSpec::Star { temperature } => BodyRole::Star { temperature },
            RoleSpec::Planet { has_atmosphere } => BodyRole::Planet { has_atmosphere },
            RoleSpec::Satellite { parent } => BodyRole::Satellite {
                parent: parent.to_owned(),
            },
        }
    }
}

/// Initial conditions for one body of a preset.
#[derive(Clone, Copy, Debug)]
pub struct BodySpec {
    pub name: &'static str,
    /// Mass (kg).
    pub mass: f64,
    /// Initial position (meters).
    pub position: DVec2,
    /// Initial velocity (m/s).
    pub velocity: DVec2,
    pub role: RoleSpec,
}

impl BodySpec {
    pub fn build(&self) -> Result<Body, SimulationError> {
        Body::new(
            self.name,
            self.mass,
            self.position,
            self.velocity,
            self.role.into(),
        )
    }
}

/// A predefined scenario configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Bodies in simulation order.
    pub bodies: &'static [BodySpec],
    /// Gravitational constant (m³·kg⁻¹·s⁻²).
    pub gravitational_constant: f64,
    /// Step size (seconds).
    pub dt: f64,
    /// Step budget. None = unbounded.
    pub steps: Option<u64>,
}

impl Scenario {
    /// Validate the bodies and build the simulation.
    pub fn build(&self) -> Result<Simulation, SimulationError> {
        let bodies = self
            .bodies
            .iter()
            .map(BodySpec::build)
            .collect::<Result<Vec<_>, _>>()?;
        Simulation::with_gravitational_constant(bodies, self.gravitational_constant)
    }

    /// Driver settings matching this scenario's step size and budget.
    pub fn settings(&self) -> SimulationSettings {
        SimulationSettings {
            dt: self.dt,
            max_steps: self.steps,
            ..default()
        }
    }

    /// Replace the running simulation with a fresh copy of this scenario.
    pub fn install(&'static self, commands: &mut Commands) -> Result<(), SimulationError> {
        let simulation = self.build()?;
        info!("Loading scenario: {} ({})", self.name, self.id);

        commands.insert_resource(simulation);
        commands.insert_resource(self.settings());
        commands.insert_resource(SimulationStatus::Running);
        commands.insert_resource(CurrentScenario { scenario: self });
        Ok(())
    }
}

/// Look up a preset by id.
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// Resource tracking the active scenario.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CurrentScenario {
    pub scenario: &'static Scenario,
}

impl Default for CurrentScenario {
    fn default() -> Self {
        Self {
            scenario: &SCENARIOS[0],
        }
    }
}
