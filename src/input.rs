//! Keyboard shortcuts for driving the simulation.
//!
//! - Space: pause / resume
//! - R: restart the current scenario
//! - 1..9: load the preset scenario with that number

use bevy::prelude::*;

use crate::physics::SimulationStatus;
use crate::scenarios::{CurrentScenario, SCENARIOS, Scenario};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentScenario>()
            .add_systems(Update, keyboard_shortcuts);
    }
}

const SCENARIO_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut status: ResMut<SimulationStatus>,
    current: Res<CurrentScenario>,
) {
    if keys.just_pressed(KeyCode::Space) {
        status.toggle_pause();
        info!("Simulation {:?}", *status);
    }

    let mut requested: Option<&'static Scenario> = None;
    if keys.just_pressed(KeyCode::KeyR) {
        requested = Some(current.scenario);
    }
    for (key, scenario) in SCENARIO_KEYS.iter().zip(SCENARIOS) {
        if keys.just_pressed(*key) {
            requested = Some(scenario);
        }
    }

    if let Some(scenario) = requested {
        if let Err(err) = scenario.install(&mut commands) {
            error!("Cannot load scenario '{}': {}", scenario.id, err);
        }
    }
}
