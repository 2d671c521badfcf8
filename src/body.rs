//! Point-mass bodies and their descriptive roles.
//!
//! A [`Body`] carries the physical state the integrator works on plus a
//! [`BodyRole`] that only rendering and classification care about. The role
//! never feeds back into the dynamics.

use bevy::math::DVec2;

use crate::physics::{InvalidBodyReason, SimulationError, StateQuantity};
use crate::types::is_finite;

/// Classification of a body, with the data specific to each kind.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyRole {
    /// A star with its surface temperature in Kelvin.
    Star { temperature: f64 },
    /// A planet, with or without an atmosphere.
    Planet { has_atmosphere: bool },
    /// A satellite of another body.
    ///
    /// The parent is referenced by name and resolved on demand through
    /// [`Simulation::parent_of`](crate::physics::Simulation::parent_of).
    Satellite { parent: String },
}

impl BodyRole {
    /// Human readable kind of body.
    pub fn label(&self) -> &'static str {
        match self {
            BodyRole::Star { .. } => "Star",
            BodyRole::Planet { .. } => "Planet",
            BodyRole::Satellite { .. } => "Satellite",
        }
    }

    /// Name of the parent body, for satellites.
    pub fn parent(&self) -> Option<&str> {
        match self {
            BodyRole::Satellite { parent } => Some(parent),
            _ => None,
        }
    }
}

/// Physical state of a body in the simulation.
/// Uses f64 (DVec2) for physics accuracy over solar system scales.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    name: String,
    /// Mass in kilograms, always positive and finite.
    mass: f64,
    /// Position in meters
    position: DVec2,
    /// Velocity in meters per second
    velocity: DVec2,
    /// Net force accumulated during the current step, in newtons.
    force: DVec2,
    role: BodyRole,
}

impl Body {
    /// Create a body at rest with respect to its accumulated force.
    ///
    /// Fails with [`SimulationError::InvalidBody`] if the mass is not a
    /// positive finite number or the initial state is not finite.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: DVec2,
        velocity: DVec2,
        role: BodyRole,
    ) -> Result<Self, SimulationError> {
        let name = name.into();

        if !(mass > 0.0 && mass.is_finite()) {
            return Err(SimulationError::invalid_body(
                &name,
                InvalidBodyReason::NonPositiveMass(mass),
            ));
        }
        if !is_finite(position) {
            return Err(SimulationError::invalid_body(
                &name,
                InvalidBodyReason::NonFiniteState(StateQuantity::Position),
            ));
        }
        if !is_finite(velocity) {
            return Err(SimulationError::invalid_body(
                &name,
                InvalidBodyReason::NonFiniteState(StateQuantity::Velocity),
            ));
        }

        Ok(Self {
            name,
            mass,
            position,
            velocity,
            force: DVec2::ZERO,
            role,
        })
    }

    /// Create a star with the given surface temperature (Kelvin).
    pub fn star(
        name: impl Into<String>,
        mass: f64,
        position: DVec2,
        velocity: DVec2,
        temperature: f64,
    ) -> Result<Self, SimulationError> {
        Self::new(name, mass, position, velocity, BodyRole::Star { temperature })
    }

    pub fn planet(
        name: impl Into<String>,
        mass: f64,
        position: DVec2,
        velocity: DVec2,
        has_atmosphere: bool,
    ) -> Result<Self, SimulationError> {
        Self::new(
            name,
            mass,
            position,
            velocity,
            BodyRole::Planet { has_atmosphere },
        )
    }

    /// Create a satellite of the body named `parent`.
    pub fn satellite(
        name: impl Into<String>,
        mass: f64,
        position: DVec2,
        velocity: DVec2,
        parent: impl Into<String>,
    ) -> Result<Self, SimulationError> {
        Self::new(
            name,
            mass,
            position,
            velocity,
            BodyRole::Satellite {
                parent: parent.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn force(&self) -> DVec2 {
        self.force
    }

    pub fn role(&self) -> &BodyRole {
        &self.role
    }

    /// Kind of body as a display string ("Star", "Planet" or "Satellite").
    pub fn type_info(&self) -> &'static str {
        self.role.label()
    }

    /// Linear momentum (kg·m/s).
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy (J).
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Add a contribution to the force accumulator.
    #[inline]
    pub(crate) fn apply_force(&mut self, force: DVec2) {
        self.force += force;
    }

    /// v += (F / m) * dt
    pub fn update_velocity(&mut self, dt: f64) -> Result<(), SimulationError> {
        if !(self.mass > 0.0) {
            return Err(SimulationError::InvalidState {
                name: self.name.clone(),
                mass: self.mass,
            });
        }
        let acc = self.force / self.mass;
        self.velocity += acc * dt;
        Ok(())
    }

    /// x += v * dt
    pub fn update_position(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    pub fn reset_force(&mut self) {
        self.force = DVec2::ZERO;
    }

    /// Put back a previously saved kinematic state and clear the accumulator.
    pub(crate) fn restore(&mut self, position: DVec2, velocity: DVec2) {
        self.position = position;
        self.velocity = velocity;
        self.force = DVec2::ZERO;
    }
}
