//! # Launch Kinematics
//!
//! Closed-form inverse kinematics for projectile motion under constant
//! uniform gravity: given any two of the five observable parameters
//! (initial speed, time of flight, horizontal range, release angle,
//! maximum height) plus gravity, recover the launch velocity vector and
//! derive the remaining observables from it.

// Re-export the main types and functions
pub use derived::{
    horizontal_range, initial_speed, max_height, release_angle_deg, time_of_flight,
    FlightSummary,
};
pub use error::SolveError;
pub use parameters::{Parameter, ParameterPair};
pub use solver::{solve, solve_pair, Known};
pub use velocity::Velocity;

// Module declarations
pub mod constants;
mod derived;
mod error;
mod parameters;
mod solver;
mod velocity;
