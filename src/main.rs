//! Orbitsim - Newtonian N-body Simulator
//!
//! Opens a window and animates the Sun, Earth and Moon, one simulated hour
//! per frame, drawing each body's trace as it goes.

use bevy::prelude::*;

use orbitsim::SimulationError;
use orbitsim::camera::CameraPlugin;
use orbitsim::input::InputPlugin;
use orbitsim::physics::SimulationPlugin;
use orbitsim::render::RenderPlugin;
use orbitsim::scenarios::CurrentScenario;

fn main() -> Result<(), SimulationError> {
    let current = CurrentScenario::default();
    let simulation = current.scenario.build()?;
    let settings = current.scenario.settings();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbital Simulation".into(),
                ..default()
            }),
            ..default()
        }))
        // Insert resources before plugins that depend on them
        .insert_resource(simulation)
        .insert_resource(settings)
        .insert_resource(current)
        // Add simulation plugins
        .add_plugins((CameraPlugin, SimulationPlugin, RenderPlugin, InputPlugin))
        .run();

    Ok(())
}
