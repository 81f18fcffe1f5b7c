use std::ops::Add;

use nalgebra::Vector2;

/// Launch velocity in the vertical plane of flight.
///
/// `vx` is the horizontal component and `vy` the vertical component at
/// release (positive upward). A `Velocity` is immutable once produced and
/// is the sole source of truth for every derived observable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(Vector2<f64>);

impl Velocity {
    pub fn new(vx: f64, vy: f64) -> Velocity {
        Velocity(Vector2::new(vx, vy))
    }

    /// Horizontal component (m/s).
    pub fn vx(&self) -> f64 {
        self.0.x
    }

    /// Vertical component at release (m/s).
    pub fn vy(&self) -> f64 {
        self.0.y
    }

    /// Speed: sqrt(vx² + vy²).
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Signed angle above the horizontal, radians.
    pub fn angle_rad(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }

    /// Polar form: (magnitude, angle in radians).
    pub fn polar(&self) -> (f64, f64) {
        (self.magnitude(), self.angle_rad())
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_is_signed() {
        let up = Velocity::new(1.0, 1.0);
        let down = Velocity::new(1.0, -1.0);
        assert!((up.angle_rad() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((down.angle_rad() + std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_polar_matches_accessors() {
        let v = Velocity::new(17.3205, 10.0);
        let (magnitude, angle) = v.polar();
        assert!((magnitude - v.magnitude()).abs() < 1e-12);
        assert!((angle - v.angle_rad()).abs() < 1e-12);
    }

    #[test]
    fn test_add_is_componentwise() {
        let sum = Velocity::new(1.0, 2.0) + Velocity::new(3.0, -5.0);
        assert_eq!(sum, Velocity::new(4.0, -3.0));
    }
}
