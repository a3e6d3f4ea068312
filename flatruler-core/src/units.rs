//! Distance units a [`Ruler`](crate::Ruler) can be calibrated in.
//!
//! Every factor is the number of units in one kilometer.

use std::fmt;
use std::str::FromStr;

use crate::error::RulerError;

/// Unit name → units per kilometer.
pub const UNITS: &[(&str, f64)] = &[
    ("kilometers", 1.0),
    ("miles", 1000.0 / 1609.344),
    ("nauticalmiles", 1000.0 / 1852.0),
    ("meters", 1000.0),
    ("yards", 1000.0 / 0.9144),
    ("feet", 1000.0 / 0.3048),
    ("inches", 1000.0 / 0.0254),
];

/// Look up a raw conversion factor by unit name.
///
/// Names are matched the same way as [`Unit`]'s `FromStr`: case-insensitive,
/// surrounding whitespace ignored, `metres` accepted for `meters`.
///
/// # Example
///
/// ```
/// use flatruler_core::units::unit_factor;
///
/// assert_eq!(unit_factor("kilometers"), Some(1.0));
/// assert_eq!(unit_factor("meters"), Some(1000.0));
/// assert_eq!(unit_factor("Metres"), Some(1000.0));
/// assert_eq!(unit_factor("furlongs"), None);
/// ```
pub fn unit_factor(name: &str) -> Option<f64> {
    name.parse::<Unit>().ok().map(Unit::factor)
}

pub(crate) fn unit_names() -> String {
    UNITS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
    Meters,
    Yards,
    Feet,
    Inches,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::Kilometers,
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Meters,
        Unit::Yards,
        Unit::Feet,
        Unit::Inches,
    ];

    /// Name as it appears in [`UNITS`].
    pub fn name(self) -> &'static str {
        UNITS[self as usize].0
    }

    /// Units per kilometer.
    pub fn factor(self) -> f64 {
        UNITS[self as usize].1
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = RulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let wanted = match lower.as_str() {
            "metres" => "meters",
            other => other,
        };
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == wanted)
            .ok_or_else(|| RulerError::UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_order_matches_table() {
        for (unit, (name, factor)) in Unit::ALL.iter().zip(UNITS) {
            assert_eq!(unit.name(), *name);
            assert_eq!(unit.factor(), *factor);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Miles".parse::<Unit>().unwrap(), Unit::Miles);
        assert_eq!(" NAUTICALMILES ".parse::<Unit>().unwrap(), Unit::NauticalMiles);
    }

    #[test]
    fn metres_alias() {
        assert_eq!("metres".parse::<Unit>().unwrap(), Unit::Meters);
    }

    #[test]
    fn unknown_unit_lists_names() {
        let err = "furlongs".parse::<Unit>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("furlongs"), "got: {msg}");
        assert!(msg.contains("nauticalmiles"), "got: {msg}");
    }

    #[test]
    fn display_round_trips() {
        for unit in Unit::ALL {
            assert_eq!(unit.to_string().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn table_lookup_agrees_with_parser() {
        for name in ["metres", "METERS", " feet", "NauticalMiles", "furlongs"] {
            assert_eq!(
                unit_factor(name),
                name.parse::<Unit>().ok().map(Unit::factor),
                "{name}"
            );
        }
        assert_eq!(unit_factor("metres"), Some(1000.0));
    }

    #[test]
    fn miles_per_kilometer() {
        assert!((1.0 / Unit::Miles.factor() - 1.609344).abs() < 1e-12);
    }
}
