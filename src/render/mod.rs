//! Rendering of bodies and their traces using Bevy Gizmos.
//!
//! Reads the [`Simulation`] resource every frame and never writes to it.

use bevy::prelude::*;

use crate::body::BodyRole;
use crate::camera::to_render;
use crate::physics::Simulation;

/// Plugin drawing bodies and traces.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RenderSettings>()
            .add_systems(Update, (draw_traces, draw_bodies).chain());
    }
}

/// Settings for body and trace rendering.
#[derive(Resource, Clone, Debug)]
pub struct RenderSettings {
    /// Whether to draw traces.
    pub show_traces: bool,
    /// Alpha value for trace color.
    pub trace_alpha: f32,
    /// Draw only every Nth trace point (trace decimation).
    pub trace_stride: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_traces: true,
            trace_alpha: 0.5,
            trace_stride: 1,
        }
    }
}

/// Marker radius (render units) by role.
pub fn marker_radius(role: &BodyRole) -> f32 {
    match role {
        BodyRole::Star { .. } => 10.0,
        BodyRole::Planet { .. } => 5.0,
        BodyRole::Satellite { .. } => 2.5,
    }
}

/// Color by role. Hotter stars render whiter.
pub fn role_color(role: &BodyRole, alpha: f32) -> Color {
    match role {
        BodyRole::Star { temperature } => {
            let t = ((temperature - 3000.0) / 7000.0).clamp(0.0, 1.0) as f32;
            Color::srgba(1.0, 0.6 + 0.35 * t, 0.2 + 0.6 * t, alpha)
        }
        BodyRole::Planet {
            has_atmosphere: true,
        } => Color::srgba(0.2, 0.5, 0.8, alpha),
        BodyRole::Planet {
            has_atmosphere: false,
        } => Color::srgba(0.8, 0.4, 0.2, alpha),
        BodyRole::Satellite { .. } => Color::srgba(0.7, 0.7, 0.7, alpha),
    }
}

fn draw_bodies(mut gizmos: Gizmos, simulation: Option<Res<Simulation>>) {
    let Some(simulation) = simulation else {
        return;
    };

    for body in simulation.bodies() {
        let center = to_render(body.position());
        gizmos.circle_2d(
            Isometry2d::from_translation(center),
            marker_radius(body.role()),
            role_color(body.role(), 1.0),
        );
    }
}

fn draw_traces(
    mut gizmos: Gizmos,
    simulation: Option<Res<Simulation>>,
    settings: Res<RenderSettings>,
) {
    if !settings.show_traces {
        return;
    }
    let Some(simulation) = simulation else {
        return;
    };

    let stride = settings.trace_stride.max(1);
    for body in simulation.bodies() {
        let Some(trace) = simulation.trace(body.name()) else {
            continue;
        };
        if trace.len() < 2 {
            continue;
        }
        let color = role_color(body.role(), settings.trace_alpha);
        gizmos.linestrip_2d(trace.iter().step_by(stride).map(|&p| to_render(p)), color);
    }
}
