//! The simulation: exclusive owner of all bodies and their trajectories.

use std::collections::{HashMap, HashSet};

use bevy::log::{debug, info};
use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::body::Body;
use crate::physics::gravity::compute_gravitational_forces;
use crate::physics::integrator;
use crate::physics::{InvalidBodyReason, SimulationError, StateQuantity};
use crate::types::{G, is_finite};

/// A set of bodies advanced together under mutual gravitation.
///
/// Body state is only ever mutated by [`Simulation::step`]; callers get
/// shared references through the accessors. Each completed step appends the
/// new position of every body to its trace.
#[derive(Resource, Clone, Debug)]
pub struct Simulation {
    bodies: Vec<Body>,
    g: f64,
    traces: HashMap<String, Vec<DVec2>>,
    steps: u64,
    elapsed: f64,
}

impl Simulation {
    /// Build a simulation using the standard gravitational constant.
    pub fn new(bodies: Vec<Body>) -> Result<Self, SimulationError> {
        Self::with_gravitational_constant(bodies, G)
    }

    /// Build a simulation with a custom gravitational constant.
    ///
    /// Body names must be unique; they key the trace lookup.
    pub fn with_gravitational_constant(
        bodies: Vec<Body>,
        g: f64,
    ) -> Result<Self, SimulationError> {
        if !g.is_finite() {
            return Err(SimulationError::InvalidGravitationalConstant(g));
        }

        let mut seen = HashSet::with_capacity(bodies.len());
        for body in &bodies {
            if !seen.insert(body.name()) {
                return Err(SimulationError::invalid_body(
                    body.name(),
                    InvalidBodyReason::DuplicateName,
                ));
            }
        }

        let traces = bodies
            .iter()
            .map(|b| (b.name().to_owned(), Vec::new()))
            .collect();

        info!("Simulation created with {} bodies (G = {:e})", bodies.len(), g);

        Ok(Self {
            bodies,
            g,
            traces,
            steps: 0,
            elapsed: 0.0,
        })
    }

    /// Advance every body by `dt` seconds.
    ///
    /// Per step: forces for all bodies are computed first, then each body in
    /// order is kicked, drifted, recorded in its trace, and has its force
    /// cleared.
    ///
    /// A failed step is rolled back: positions, velocities, traces and
    /// counters are left as they were before the call.
    pub fn step(&mut self, dt: f64) -> Result<(), SimulationError> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(SimulationError::InvalidTimeStep(dt));
        }
        let step = self.steps + 1;

        compute_gravitational_forces(&mut self.bodies, self.g);
        if let Some(body) = self.bodies.iter().find(|b| !is_finite(b.force())) {
            let err = SimulationError::NumericInstability {
                name: body.name().to_owned(),
                quantity: StateQuantity::Force,
                step,
            };
            self.bodies.iter_mut().for_each(Body::reset_force);
            return Err(err);
        }

        let checkpoint: Vec<(DVec2, DVec2)> = self
            .bodies
            .iter()
            .map(|b| (b.position(), b.velocity()))
            .collect();

        for index in 0..self.bodies.len() {
            let body = &mut self.bodies[index];
            match integrator::advance(body, dt, step) {
                Ok(position) => {
                    if let Some(trace) = self.traces.get_mut(body.name()) {
                        trace.push(position);
                    }
                    body.reset_force();
                }
                Err(err) => {
                    self.rollback(&checkpoint);
                    return Err(err);
                }
            }
        }

        self.steps = step;
        self.elapsed += dt;
        debug!("Step {} complete (t = {:.0} s)", self.steps, self.elapsed);
        Ok(())
    }

    /// Take `steps` consecutive steps, stopping at the first failure.
    pub fn run(&mut self, dt: f64, steps: u64) -> Result<(), SimulationError> {
        for _ in 0..steps {
            self.step(dt)?;
        }
        Ok(())
    }

    fn rollback(&mut self, checkpoint: &[(DVec2, DVec2)]) {
        let len = self.steps as usize;
        for (body, &(position, velocity)) in self.bodies.iter_mut().zip(checkpoint) {
            body.restore(position, velocity);
            if let Some(trace) = self.traces.get_mut(body.name()) {
                trace.truncate(len);
            }
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Look up a body by name.
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    /// Resolve a satellite's parent by name.
    ///
    /// Returns `None` for non-satellites and for parents that are not part
    /// of this simulation.
    pub fn parent_of(&self, name: &str) -> Option<&Body> {
        let parent = self.body(name)?.role().parent()?;
        self.body(parent)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.g
    }

    /// Positions recorded for `name`, one per completed step.
    pub fn trace(&self, name: &str) -> Option<&[DVec2]> {
        self.traces.get(name).map(Vec::as_slice)
    }

    pub fn traces(&self) -> &HashMap<String, Vec<DVec2>> {
        &self.traces
    }

    /// Number of completed steps.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds covered by the completed steps.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Σ m·v (kg·m/s)
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Σ ½·m·v² (J)
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// -Σ G·mi·mj/r over unordered pairs (J). Coincident pairs are skipped.
    pub fn potential_energy(&self) -> f64 {
        let mut energy = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[i + 1..] {
                let r = (b.position() - a.position()).length();
                if r > 0.0 {
                    energy -= self.g * a.mass() * b.mass() / r;
                }
            }
        }
        energy
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Mass-weighted mean position, or `None` for an empty simulation.
    pub fn center_of_mass(&self) -> Option<DVec2> {
        let total_mass: f64 = self.bodies.iter().map(Body::mass).sum();
        if total_mass <= 0.0 {
            return None;
        }
        let weighted: DVec2 = self
            .bodies
            .iter()
            .map(|b| b.position() * b.mass())
            .sum();
        Some(weighted / total_mass)
    }
}
