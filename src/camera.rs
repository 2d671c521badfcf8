//! Camera for the orbital simulation view.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Render scale: 1 render unit (pixel) = 1/RENDER_SCALE meters.
/// Maps ±2e11 m onto ±300 units, enough for Earth's orbit with margin.
pub const RENDER_SCALE: f64 = 1.5e-9;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Spawn a 2D camera centered on the origin.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Convert a simulation position (meters) to render coordinates.
#[inline]
pub fn to_render(pos: DVec2) -> Vec2 {
    (pos * RENDER_SCALE).as_vec2()
}
