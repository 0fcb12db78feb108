//! Five-band colour classification of per-state values.

use std::fmt;

use crate::render::Rgb;

/// Colour class for a state's value. Variants are ordered from no data to the highest band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorClass {
    NoData,
    VeryLow,
    Low,
    Medium,
    High,
}

impl ColorClass {
    /// All classes, in legend order (bands first, then no data).
    pub const LEGEND: [ColorClass; 5] = [Self::VeryLow, Self::Low, Self::Medium, Self::High, Self::NoData];

    /// Classify a possibly missing value. NaN counts as missing.
    pub fn of(value: Option<f64>) -> Self {
        match value {
            None => Self::NoData,
            Some(v) if v.is_nan() => Self::NoData,
            Some(v) if v < 1.0 => Self::VeryLow,
            Some(v) if v <= 5.0 => Self::Low,
            Some(v) if v <= 10.0 => Self::Medium,
            Some(_) => Self::High,
        }
    }

    /// Fixed fill colour.
    pub fn fill(self) -> Rgb {
        match self {
            Self::NoData => Rgb::new(0xf0, 0xf0, 0xf0),
            Self::VeryLow => Rgb::new(0xd7, 0x30, 0x27),
            Self::Low => Rgb::new(0xfe, 0xe0, 0x8b),
            Self::Medium => Rgb::new(0xa6, 0xd9, 0x6a),
            Self::High => Rgb::new(0x1a, 0x98, 0x50),
        }
    }

    /// Human-readable band description used in the legend.
    pub fn description(self) -> &'static str {
        match self {
            Self::NoData => "No Data",
            Self::VeryLow => "< 1 Charger",
            Self::Low => "1-5 Chargers",
            Self::Medium => "5-10 Chargers",
            Self::High => "10+ Chargers",
        }
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoData => "no data",
            Self::VeryLow => "very low",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}
