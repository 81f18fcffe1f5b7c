//! Forward kinematics: the five observables derived from a launch velocity.
//!
//! These are the algebraic counterparts of the closed-form solvers. All
//! functions require gravity > 0, which `solve` enforces before any
//! velocity can exist.

use serde::Serialize;

use crate::velocity::Velocity;

/// Time from launch to landing at the release height (s).
pub fn time_of_flight(velocity: &Velocity, gravity: f64) -> f64 {
    2.0 * velocity.vy() / gravity
}

/// Horizontal distance covered over the full flight (m).
pub fn horizontal_range(velocity: &Velocity, gravity: f64) -> f64 {
    2.0 * velocity.vx() * velocity.vy() / gravity
}

/// Height of the trajectory apex above the release point (m).
pub fn max_height(velocity: &Velocity, gravity: f64) -> f64 {
    velocity.vy() * velocity.vy() / (2.0 * gravity)
}

/// Launch speed (m/s).
pub fn initial_speed(velocity: &Velocity) -> f64 {
    velocity.magnitude()
}

/// Release angle above the horizontal (degrees).
pub fn release_angle_deg(velocity: &Velocity) -> f64 {
    velocity.angle_rad().to_degrees()
}

/// All five observables derived from one launch velocity.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub vx: f64,
    pub vy: f64,
    pub initial_speed: f64,
    pub time_of_flight: f64,
    pub horizontal_range: f64,
    pub release_angle_deg: f64,
    pub max_height: f64,
}

impl FlightSummary {
    /// Derive every observable from `velocity`. Requires gravity > 0.
    pub fn from_velocity(velocity: &Velocity, gravity: f64) -> FlightSummary {
        FlightSummary {
            vx: velocity.vx(),
            vy: velocity.vy(),
            initial_speed: initial_speed(velocity),
            time_of_flight: time_of_flight(velocity, gravity),
            horizontal_range: horizontal_range(velocity, gravity),
            release_angle_deg: release_angle_deg(velocity),
            max_height: max_height(velocity, gravity),
        }
    }
}
