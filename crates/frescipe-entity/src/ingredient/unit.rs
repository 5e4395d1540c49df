//! Measurement units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitDimension {
    /// Weight units.
    Mass,
    /// Volume units.
    Volume,
    /// Countable pieces and packages.
    Count,
    /// Imprecise culinary amounts.
    Descriptive,
}

/// Closed set of units an item quantity can be recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementUnit {
    /// Gram.
    #[serde(rename = "g")]
    Gram,
    /// Kilogram.
    #[serde(rename = "kg")]
    Kilogram,
    /// Pound.
    #[serde(rename = "lb")]
    Pound,
    /// Ounce.
    #[serde(rename = "oz")]
    Ounce,
    /// Millilitre.
    #[serde(rename = "ml")]
    Milliliter,
    /// Litre.
    #[serde(rename = "l")]
    Liter,
    /// US cup.
    #[serde(rename = "cup")]
    Cup,
    /// Tablespoon.
    #[serde(rename = "tbsp")]
    Tablespoon,
    /// Teaspoon.
    #[serde(rename = "tsp")]
    Teaspoon,
    /// US fluid ounce.
    #[serde(rename = "fl_oz")]
    FluidOunce,
    /// US pint.
    #[serde(rename = "pint")]
    Pint,
    /// US quart.
    #[serde(rename = "quart")]
    Quart,
    /// US gallon.
    #[serde(rename = "gallon")]
    Gallon,
    /// Whole piece.
    #[serde(rename = "piece")]
    Piece,
    /// Slice.
    #[serde(rename = "slice")]
    Slice,
    /// Garlic clove and similar.
    #[serde(rename = "clove")]
    Clove,
    /// Bunch of herbs or greens.
    #[serde(rename = "bunch")]
    Bunch,
    /// Package.
    #[serde(rename = "package")]
    Package,
    /// Can.
    #[serde(rename = "can")]
    Can,
    /// Bottle.
    #[serde(rename = "bottle")]
    Bottle,
    /// Pinch.
    #[serde(rename = "pinch")]
    Pinch,
    /// Dash.
    #[serde(rename = "dash")]
    Dash,
    /// Seasoning to taste.
    #[serde(rename = "to_taste")]
    ToTaste,
}

impl MeasurementUnit {
    /// Every unit, in declaration order.
    pub const ALL: [Self; 23] = [
        Self::Gram,
        Self::Kilogram,
        Self::Pound,
        Self::Ounce,
        Self::Milliliter,
        Self::Liter,
        Self::Cup,
        Self::Tablespoon,
        Self::Teaspoon,
        Self::FluidOunce,
        Self::Pint,
        Self::Quart,
        Self::Gallon,
        Self::Piece,
        Self::Slice,
        Self::Clove,
        Self::Bunch,
        Self::Package,
        Self::Can,
        Self::Bottle,
        Self::Pinch,
        Self::Dash,
        Self::ToTaste,
    ];

    /// Return the unit code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Pound => "lb",
            Self::Ounce => "oz",
            Self::Milliliter => "ml",
            Self::Liter => "l",
            Self::Cup => "cup",
            Self::Tablespoon => "tbsp",
            Self::Teaspoon => "tsp",
            Self::FluidOunce => "fl_oz",
            Self::Pint => "pint",
            Self::Quart => "quart",
            Self::Gallon => "gallon",
            Self::Piece => "piece",
            Self::Slice => "slice",
            Self::Clove => "clove",
            Self::Bunch => "bunch",
            Self::Package => "package",
            Self::Can => "can",
            Self::Bottle => "bottle",
            Self::Pinch => "pinch",
            Self::Dash => "dash",
            Self::ToTaste => "to_taste",
        }
    }

    /// The dimension this unit measures.
    pub fn dimension(&self) -> UnitDimension {
        match self {
            Self::Gram | Self::Kilogram | Self::Pound | Self::Ounce => UnitDimension::Mass,
            Self::Milliliter
            | Self::Liter
            | Self::Cup
            | Self::Tablespoon
            | Self::Teaspoon
            | Self::FluidOunce
            | Self::Pint
            | Self::Quart
            | Self::Gallon => UnitDimension::Volume,
            Self::Piece
            | Self::Slice
            | Self::Clove
            | Self::Bunch
            | Self::Package
            | Self::Can
            | Self::Bottle => UnitDimension::Count,
            Self::Pinch | Self::Dash | Self::ToTaste => UnitDimension::Descriptive,
        }
    }

    /// Size of one unit in the dimension's base unit (grams or millilitres).
    ///
    /// `None` for count and descriptive units, which have no fixed size.
    pub fn base_factor(&self) -> Option<f64> {
        let factor = match self {
            Self::Gram => 1.0,
            Self::Kilogram => 1000.0,
            Self::Pound => 453.592_37,
            Self::Ounce => 28.349_523_125,
            Self::Milliliter => 1.0,
            Self::Liter => 1000.0,
            Self::Cup => 236.588,
            Self::Tablespoon => 236.588 / 16.0,
            Self::Teaspoon => 236.588 / 48.0,
            Self::FluidOunce => 236.588 / 8.0,
            Self::Pint => 236.588 * 2.0,
            Self::Quart => 236.588 * 4.0,
            Self::Gallon => 236.588 * 16.0,
            _ => return None,
        };
        Some(factor)
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasurementUnit {
    type Err = frescipe_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|u| u.as_str() == needle)
            .ok_or_else(|| {
                frescipe_core::AppError::validation(format!("Invalid measurement unit: '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for unit in MeasurementUnit::ALL {
            assert_eq!(unit.as_str().parse::<MeasurementUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&MeasurementUnit::FluidOunce).unwrap();
        assert_eq!(json, "\"fl_oz\"");
        let parsed: MeasurementUnit = serde_json::from_str("\"tbsp\"").unwrap();
        assert_eq!(parsed, MeasurementUnit::Tablespoon);
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(MeasurementUnit::Pound.dimension(), UnitDimension::Mass);
        assert_eq!(MeasurementUnit::Cup.dimension(), UnitDimension::Volume);
        assert_eq!(MeasurementUnit::Clove.dimension(), UnitDimension::Count);
        assert!(MeasurementUnit::Pinch.base_factor().is_none());
    }
}
