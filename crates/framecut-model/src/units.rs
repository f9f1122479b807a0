//! Unit systems and the fixed inch/millimetre conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Millimetres per inch. Exact by definition.
pub const MM_PER_INCH: f64 = 25.4;

/// Active measurement system. Imperial is the primary mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Decimal inches.
    #[default]
    Imperial,
    /// Millimetres.
    Metric,
}

impl UnitSystem {
    /// Parse a unit system from user text (`imperial`, `in`, `metric`, `mm`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "imperial" | "in" | "inch" | "inches" => Some(Self::Imperial),
            "metric" | "mm" | "millimetre" | "millimeter" | "millimetres" | "millimeters" => {
                Some(Self::Metric)
            }
            _ => None,
        }
    }

    /// Short suffix appended to formatted lengths.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Imperial => "in",
            Self::Metric => "mm",
        }
    }

    /// Decimal places used when raw input text is re-rendered after a unit switch.
    pub fn input_decimals(self) -> usize {
        match self {
            Self::Imperial => 3,
            Self::Metric => 2,
        }
    }

    /// Re-express `value` (measured in `self`) in `target`.
    pub fn convert(self, value: f64, target: UnitSystem) -> f64 {
        match (self, target) {
            (Self::Imperial, Self::Metric) => value * MM_PER_INCH,
            (Self::Metric, Self::Imperial) => value / MM_PER_INCH,
            _ => value,
        }
    }

    pub fn to_inches(self, value: f64) -> f64 {
        self.convert(value, Self::Imperial)
    }

    pub fn from_inches(self, inches: f64) -> f64 {
        Self::Imperial.convert(inches, self)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "imperial"),
            Self::Metric => write!(f, "metric"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::UnknownUnit(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_systems() {
        assert_eq!(UnitSystem::Imperial.convert(1.0, UnitSystem::Metric), 25.4);
        assert_eq!(UnitSystem::Metric.convert(25.4, UnitSystem::Imperial), 1.0);
        assert_eq!(UnitSystem::Metric.convert(12.0, UnitSystem::Metric), 12.0);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!(UnitSystem::parse(" MM "), Some(UnitSystem::Metric));
        assert_eq!(UnitSystem::parse("inches"), Some(UnitSystem::Imperial));
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }
}
