//! Orbitsim - Newtonian N-body Simulator
//!
//! A library crate providing a fixed-step gravitational simulation core
//! plus the Bevy plugins that drive and draw it.

pub mod body;
pub mod camera;
pub mod input;
pub mod physics;
pub mod render;
pub mod scenarios;
pub mod types;

pub use body::{Body, BodyRole};
pub use physics::{Simulation, SimulationError};

#[cfg(test)]
pub mod test_utils;
