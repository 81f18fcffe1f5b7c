use std::fmt;
use std::str::FromStr;

use crate::error::SolveError;

/// The five observable motion parameters, ranked 1-5.
///
/// The rank fixes the canonical ordering of parameter pairs and matches
/// the numeric menu identifiers the interactive front end accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    InitialSpeed,
    TimeOfFlight,
    Range,
    Angle,
    MaxHeight,
}

impl Parameter {
    /// All parameters in rank order.
    pub const ALL: [Parameter; 5] = [
        Parameter::InitialSpeed,
        Parameter::TimeOfFlight,
        Parameter::Range,
        Parameter::Angle,
        Parameter::MaxHeight,
    ];

    /// Ordinal rank (1-5) used for canonical pair ordering.
    pub fn rank(self) -> u8 {
        match self {
            Parameter::InitialSpeed => 1,
            Parameter::TimeOfFlight => 2,
            Parameter::Range => 3,
            Parameter::Angle => 4,
            Parameter::MaxHeight => 5,
        }
    }

    /// Look up a parameter by its ordinal rank.
    pub fn from_rank(rank: u8) -> Option<Parameter> {
        match rank {
            1 => Some(Parameter::InitialSpeed),
            2 => Some(Parameter::TimeOfFlight),
            3 => Some(Parameter::Range),
            4 => Some(Parameter::Angle),
            5 => Some(Parameter::MaxHeight),
            _ => None,
        }
    }

    /// Kebab-case name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Parameter::InitialSpeed => "initial-speed",
            Parameter::TimeOfFlight => "time-of-flight",
            Parameter::Range => "range",
            Parameter::Angle => "angle",
            Parameter::MaxHeight => "max-height",
        }
    }

    /// Display unit for the parameter's value.
    pub fn unit(self) -> &'static str {
        match self {
            Parameter::InitialSpeed => "m/s",
            Parameter::TimeOfFlight => "s",
            Parameter::Range => "m",
            Parameter::Angle => "deg",
            Parameter::MaxHeight => "m",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = String;

    /// Accepts the kebab-case name or the numeric rank (1-5).
    fn from_str(s: &str) -> Result<Parameter, String> {
        if let Ok(rank) = s.parse::<u8>() {
            return Parameter::from_rank(rank)
                .ok_or_else(|| format!("parameter rank must be 1-5, got {rank}"));
        }
        Parameter::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown parameter '{s}'"))
    }
}

/// One of the ten unordered pairs of distinct parameters.
///
/// Construction canonicalizes to ascending rank, so the two identifiers
/// may arrive in either order. Making the ten combinations a closed enum
/// lets the solver dispatch on an exhaustive match, with no runtime
/// "missing solver" case left to guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterPair {
    SpeedTime,
    SpeedRange,
    SpeedAngle,
    SpeedHeight,
    TimeRange,
    TimeAngle,
    TimeHeight,
    RangeAngle,
    RangeHeight,
    AngleHeight,
}

impl ParameterPair {
    /// All ten pairs in canonical order.
    pub const ALL: [ParameterPair; 10] = [
        ParameterPair::SpeedTime,
        ParameterPair::SpeedRange,
        ParameterPair::SpeedAngle,
        ParameterPair::SpeedHeight,
        ParameterPair::TimeRange,
        ParameterPair::TimeAngle,
        ParameterPair::TimeHeight,
        ParameterPair::RangeAngle,
        ParameterPair::RangeHeight,
        ParameterPair::AngleHeight,
    ];

    /// Canonicalize two parameters into a pair, rejecting duplicates.
    pub fn new(a: Parameter, b: Parameter) -> Result<ParameterPair, SolveError> {
        use Parameter::*;
        match (a, b) {
            (InitialSpeed, TimeOfFlight) | (TimeOfFlight, InitialSpeed) => Ok(ParameterPair::SpeedTime),
            (InitialSpeed, Range) | (Range, InitialSpeed) => Ok(ParameterPair::SpeedRange),
            (InitialSpeed, Angle) | (Angle, InitialSpeed) => Ok(ParameterPair::SpeedAngle),
            (InitialSpeed, MaxHeight) | (MaxHeight, InitialSpeed) => Ok(ParameterPair::SpeedHeight),
            (TimeOfFlight, Range) | (Range, TimeOfFlight) => Ok(ParameterPair::TimeRange),
            (TimeOfFlight, Angle) | (Angle, TimeOfFlight) => Ok(ParameterPair::TimeAngle),
            (TimeOfFlight, MaxHeight) | (MaxHeight, TimeOfFlight) => Ok(ParameterPair::TimeHeight),
            (Range, Angle) | (Angle, Range) => Ok(ParameterPair::RangeAngle),
            (Range, MaxHeight) | (MaxHeight, Range) => Ok(ParameterPair::RangeHeight),
            (Angle, MaxHeight) | (MaxHeight, Angle) => Ok(ParameterPair::AngleHeight),
            // only the five duplicate combinations remain
            (duplicate, _) => Err(SolveError::DuplicateParameter(duplicate)),
        }
    }

    /// The pair's parameters in canonical ascending-rank order.
    pub fn parameters(self) -> (Parameter, Parameter) {
        use Parameter::*;
        match self {
            ParameterPair::SpeedTime => (InitialSpeed, TimeOfFlight),
            ParameterPair::SpeedRange => (InitialSpeed, Range),
            ParameterPair::SpeedAngle => (InitialSpeed, Angle),
            ParameterPair::SpeedHeight => (InitialSpeed, MaxHeight),
            ParameterPair::TimeRange => (TimeOfFlight, Range),
            ParameterPair::TimeAngle => (TimeOfFlight, Angle),
            ParameterPair::TimeHeight => (TimeOfFlight, MaxHeight),
            ParameterPair::RangeAngle => (Range, Angle),
            ParameterPair::RangeHeight => (Range, MaxHeight),
            ParameterPair::AngleHeight => (Angle, MaxHeight),
        }
    }
}

impl fmt::Display for ParameterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.parameters();
        write!(f, "{first} + {second}")
    }
}
