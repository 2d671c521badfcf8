//! Physical constants and unit helpers shared across the simulator.

use bevy::math::DVec2;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.495978707e11;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Position in AU.
pub fn meters_to_au(pos: DVec2) -> DVec2 {
    pos * METERS_TO_AU
}

/// Velocity in km/s.
pub fn to_km_per_s(vel: DVec2) -> DVec2 {
    vel * 0.001
}

/// Elapsed simulation seconds expressed in days.
pub fn seconds_to_days(seconds: f64) -> f64 {
    seconds / SECONDS_PER_DAY
}

/// Whether both components of a vector are finite.
#[inline]
pub fn is_finite(v: DVec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
