//! Time unit normalization.
//!
//! Harnesses report timings in whatever unit reads best for the
//! measurement. Everything downstream works in nanoseconds.

use crate::utils::error::UnitError;
use std::fmt;
use std::str::FromStr;

/// A time unit label accepted from harness output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Secs,
}

impl TimeUnit {
    /// Nanoseconds in one unit
    pub fn nanos_per_unit(self) -> f64 {
        match self {
            Self::Nanos => 1.0,
            Self::Micros => 1e3,
            Self::Millis => 1e6,
            Self::Secs => 1e9,
        }
    }

    /// Canonical label as printed by harnesses
    pub fn label(self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Micros => "µs",
            Self::Millis => "ms",
            Self::Secs => "s",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" => Ok(Self::Nanos),
            "µs" => Ok(Self::Micros),
            "ms" => Ok(Self::Millis),
            "s" => Ok(Self::Secs),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Convert `value` expressed in `unit` to nanoseconds
///
/// **Public** - used by the aggregator for every sample
///
/// # Errors
/// * `UnitError::UnknownUnit` - the label is not one of `ns`, `µs`, `ms`, `s`.
///   There is no fallback factor.
pub fn normalize(value: f64, unit: &str) -> Result<f64, UnitError> {
    let unit: TimeUnit = unit.parse()?;
    Ok(value * unit.nanos_per_unit())
}
