/// Physical constants used in launch-velocity calculations

/// Standard gravitational acceleration in m/s²
///
/// Default gravity for the CLI; the library takes gravity explicitly on
/// every call and never assumes this value.
pub const G_ACCEL_MPS2: f64 = 9.80665;

/// Minimum threshold for preventing division by zero in general calculations
///
/// Also used to detect the degenerate release angles (0° and 90°) whose
/// sine or cosine never reaches exactly zero in floating point.
pub const MIN_DIVISION_THRESHOLD: f64 = 1e-12;
