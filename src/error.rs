use std::error::Error;
use std::fmt;

use crate::parameters::Parameter;

/// Error type for launch-velocity solving.
///
/// Every failure here is a deterministic function of the inputs; nothing
/// is transient, so no retry logic applies anywhere in the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The inputs are physically inconsistent for the chosen formula,
    /// e.g. a negative radicand or a degenerate-angle division.
    Domain(String),
    /// The same parameter was supplied twice instead of two distinct ones.
    DuplicateParameter(Parameter),
    /// Gravity must be strictly positive.
    NonPositiveGravity(f64),
}

impl SolveError {
    pub(crate) fn domain(message: impl Into<String>) -> SolveError {
        SolveError::Domain(message.into())
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Domain(message) => {
                write!(f, "no physical solution: {message}")
            }
            SolveError::DuplicateParameter(parameter) => {
                write!(f, "parameter '{parameter}' supplied twice; two distinct parameters are required")
            }
            SolveError::NonPositiveGravity(gravity) => {
                write!(f, "gravity must be positive, got {gravity}")
            }
        }
    }
}

impl Error for SolveError {}
