//! Closed-form inversion of two known observables into a launch velocity.
//!
//! Each of the ten parameter pairs has its own algebraic solver; dispatch
//! is an exhaustive match over [`ParameterPair`], so every combination is
//! checked at compile time. Angles cross this boundary in degrees and are
//! converted to radians internally.

use crate::constants::MIN_DIVISION_THRESHOLD;
use crate::error::SolveError;
use crate::parameters::{Parameter, ParameterPair};
use crate::velocity::Velocity;

/// A known observable and its supplied value.
///
/// Angles are in degrees; everything else is in SI base units.
#[derive(Debug, Clone, Copy)]
pub struct Known {
    pub parameter: Parameter,
    pub value: f64,
}

impl Known {
    pub fn new(parameter: Parameter, value: f64) -> Known {
        Known { parameter, value }
    }
}

/// Solve for the launch velocity from two known observables.
///
/// The knowns may be supplied in either order; they are canonicalized to
/// ascending rank before dispatch, so argument order never changes the
/// result. Gravity must be strictly positive.
pub fn solve(gravity: f64, a: Known, b: Known) -> Result<Velocity, SolveError> {
    if !gravity.is_finite() || gravity <= 0.0 {
        return Err(SolveError::NonPositiveGravity(gravity));
    }
    let pair = ParameterPair::new(a.parameter, b.parameter)?;
    let (first, second) = if a.parameter.rank() <= b.parameter.rank() {
        (a.value, b.value)
    } else {
        (b.value, a.value)
    };
    solve_pair(pair, first, second, gravity)
}

/// Dispatch a canonical pair to its closed-form solver.
///
/// `first` and `second` must be in the pair's canonical ascending-rank
/// order; [`solve`] takes care of that for callers holding unordered
/// input.
pub fn solve_pair(
    pair: ParameterPair,
    first: f64,
    second: f64,
    gravity: f64,
) -> Result<Velocity, SolveError> {
    match pair {
        ParameterPair::SpeedTime => speed_and_time(first, second, gravity),
        ParameterPair::SpeedRange => speed_and_range(first, second, gravity),
        ParameterPair::SpeedAngle => speed_and_angle(first, second),
        ParameterPair::SpeedHeight => speed_and_height(first, second, gravity),
        ParameterPair::TimeRange => time_and_range(first, second, gravity),
        ParameterPair::TimeAngle => time_and_angle(first, second, gravity),
        ParameterPair::TimeHeight => time_and_height(first, second, gravity),
        ParameterPair::RangeAngle => range_and_angle(first, second, gravity),
        ParameterPair::RangeHeight => range_and_height(first, second, gravity),
        ParameterPair::AngleHeight => angle_and_height(first, second, gravity),
    }
}

fn speed_and_time(v0: f64, t: f64, g: f64) -> Result<Velocity, SolveError> {
    let vy = g * t / 2.0;
    let vx = horizontal_from_speed(v0, vy)?;
    Ok(Velocity::new(vx, vy))
}

fn speed_and_range(v0: f64, r: f64, g: f64) -> Result<Velocity, SolveError> {
    if v0.abs() < MIN_DIVISION_THRESHOLD {
        return Err(SolveError::domain(
            "an initial speed of zero cannot cover any range",
        ));
    }
    // vx² and vy² are the roots of u² - v0²·u + (Rg/2)² = 0; taking the
    // larger root for vx selects the flat (θ ≤ 45°) solution of the two
    // complementary launch angles that share this range.
    let half_rg = r * g / 2.0;
    let discriminant = v0.powi(4) - 4.0 * half_rg * half_rg;
    if discriminant < 0.0 {
        return Err(SolveError::domain(format!(
            "initial speed {v0} m/s is too small to reach a range of {r} m"
        )));
    }
    let vx = ((v0 * v0 + discriminant.sqrt()) / 2.0).sqrt();
    Ok(Velocity::new(vx, half_rg / vx))
}

fn speed_and_angle(v0: f64, angle_deg: f64) -> Result<Velocity, SolveError> {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Ok(Velocity::new(v0 * cos, v0 * sin))
}

fn speed_and_height(v0: f64, h: f64, g: f64) -> Result<Velocity, SolveError> {
    let vy = vertical_from_height(h, g)?;
    let vx = horizontal_from_speed(v0, vy)?;
    Ok(Velocity::new(vx, vy))
}

fn time_and_range(t: f64, r: f64, g: f64) -> Result<Velocity, SolveError> {
    if t.abs() < MIN_DIVISION_THRESHOLD {
        return Err(SolveError::domain(
            "a flight time of zero cannot cover any range",
        ));
    }
    Ok(Velocity::new(r / t, g * t / 2.0))
}

fn time_and_angle(t: f64, angle_deg: f64, g: f64) -> Result<Velocity, SolveError> {
    let (sin, cos) = nondegenerate_angle(angle_deg)?;
    let vy = g * t / 2.0;
    Ok(Velocity::new(vy * cos / sin, vy))
}

// T and H both pin the vertical component; the horizontal slot takes
// √(2gH) by convention.
fn time_and_height(t: f64, h: f64, g: f64) -> Result<Velocity, SolveError> {
    let vy = g * t / 2.0;
    let vx = vertical_from_height(h, g)?;
    Ok(Velocity::new(vx, vy))
}

fn range_and_angle(r: f64, angle_deg: f64, g: f64) -> Result<Velocity, SolveError> {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    if sin * cos <= MIN_DIVISION_THRESHOLD {
        return Err(SolveError::domain(format!(
            "release angle {angle_deg}° cannot produce a forward range"
        )));
    }
    // R = 2·vx²·tanθ / g, inverted for vx
    let radicand = r * g * cos / (2.0 * sin);
    if radicand < 0.0 {
        return Err(SolveError::domain(format!("range {r} m is negative")));
    }
    let vx = radicand.sqrt();
    Ok(Velocity::new(vx, vx * sin / cos))
}

fn range_and_height(r: f64, h: f64, g: f64) -> Result<Velocity, SolveError> {
    let vy = vertical_from_height(h, g)?;
    if vy < MIN_DIVISION_THRESHOLD {
        return Err(SolveError::domain(
            "a maximum height of zero leaves the horizontal component undefined",
        ));
    }
    Ok(Velocity::new(r * g / (2.0 * vy), vy))
}

fn angle_and_height(angle_deg: f64, h: f64, g: f64) -> Result<Velocity, SolveError> {
    let (sin, cos) = nondegenerate_angle(angle_deg)?;
    let vy = vertical_from_height(h, g)?;
    Ok(Velocity::new(vy * cos / sin, vy))
}

/// vx = sqrt(v0² - vy²), the shared radicand of the speed-based solvers.
fn horizontal_from_speed(v0: f64, vy: f64) -> Result<f64, SolveError> {
    let radicand = v0 * v0 - vy * vy;
    if radicand < 0.0 {
        return Err(SolveError::domain(format!(
            "initial speed {v0} m/s is less than the required vertical component {vy} m/s"
        )));
    }
    Ok(radicand.sqrt())
}

/// vy = sqrt(2gH) from the apex condition.
fn vertical_from_height(h: f64, g: f64) -> Result<f64, SolveError> {
    let radicand = 2.0 * g * h;
    if radicand < 0.0 {
        return Err(SolveError::domain(format!(
            "maximum height {h} m is negative"
        )));
    }
    Ok(radicand.sqrt())
}

/// Sine and cosine of the angle, rejecting the 0° and 90° degeneracies
/// where the horizontal component is undefined.
fn nondegenerate_angle(angle_deg: f64) -> Result<(f64, f64), SolveError> {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    if sin.abs() < MIN_DIVISION_THRESHOLD || cos.abs() < MIN_DIVISION_THRESHOLD {
        return Err(SolveError::domain(format!(
            "release angle {angle_deg}° leaves the horizontal component undefined"
        )));
    }
    Ok((sin, cos))
}
