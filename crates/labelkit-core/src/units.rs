//! Unit conversion utilities
//!
//! Label geometry is stored in points (1/72 inch). Template sizes may be
//! written in points, inches, millimetres, centimetres or picas and are
//! converted on the way in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Points per inch.
pub const PTS_PER_INCH: f64 = 72.0;
/// Points per millimetre.
pub const PTS_PER_MM: f64 = PTS_PER_INCH / 25.4;
/// Points per centimetre.
pub const PTS_PER_CM: f64 = PTS_PER_MM * 10.0;
/// Points per pica.
pub const PTS_PER_PICA: f64 = 12.0;

/// Length units understood by templates and configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Points (1/72 inch)
    #[default]
    Pt,
    /// Inches
    In,
    /// Millimetres
    Mm,
    /// Centimetres
    Cm,
    /// Picas (12 points)
    Pc,
}

impl Units {
    /// Number of points in one of this unit.
    pub fn points_per_unit(self) -> f64 {
        match self {
            Units::Pt => 1.0,
            Units::In => PTS_PER_INCH,
            Units::Mm => PTS_PER_MM,
            Units::Cm => PTS_PER_CM,
            Units::Pc => PTS_PER_PICA,
        }
    }

    /// Short unit label ("pt", "in", ...)
    pub fn label(self) -> &'static str {
        match self {
            Units::Pt => "pt",
            Units::In => "in",
            Units::Mm => "mm",
            Units::Cm => "cm",
            Units::Pc => "pc",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Units {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "point" | "points" => Ok(Units::Pt),
            "in" | "inch" | "inches" => Ok(Units::In),
            "mm" => Ok(Units::Mm),
            "cm" => Ok(Units::Cm),
            "pc" | "pica" | "picas" => Ok(Units::Pc),
            _ => Err(ConfigError::UnknownUnits(s.trim().to_string())),
        }
    }
}

/// A length stored in points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Distance(f64);

impl Distance {
    /// Zero length.
    pub const ZERO: Distance = Distance(0.0);

    /// Builds a distance from a value in the given units.
    pub fn new(value: f64, units: Units) -> Self {
        Self(value * units.points_per_unit())
    }

    pub fn pt(value: f64) -> Self {
        Self(value)
    }

    pub fn inch(value: f64) -> Self {
        Self::new(value, Units::In)
    }

    pub fn mm(value: f64) -> Self {
        Self::new(value, Units::Mm)
    }

    /// Value in points.
    pub fn to_pt(self) -> f64 {
        self.0
    }

    /// Value in the given units.
    pub fn in_units(self, units: Units) -> f64 {
        self.0 / units.points_per_unit()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}pt", self.0)
    }
}

/// Parses a length such as `"2.5in"`, `"54 mm"` or `"72"` (points) into a
/// [`Distance`].
pub fn parse_distance(input: &str) -> Result<Distance, ConfigError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ConfigError::InvalidLength {
            input: String::new(),
            reason: "empty".to_string(),
        });
    }

    let split = input
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);

    let value = number
        .trim()
        .parse::<f64>()
        .map_err(|e| ConfigError::InvalidLength {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
    let units = if unit.trim().is_empty() {
        Units::Pt
    } else {
        unit.parse::<Units>()?
    };

    Ok(Distance::new(value, units))
}

/// Format a point value in the given units for display
pub fn format_distance(value_pt: f64, units: Units) -> String {
    format!("{:.3}{}", value_pt / units.points_per_unit(), units.label())
}
