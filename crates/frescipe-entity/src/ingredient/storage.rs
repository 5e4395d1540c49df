//! Storage method enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an item is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMethod {
    /// Kept at room temperature.
    RoomTemperature,
    /// Kept in the fridge.
    Refrigerated,
    /// Kept in the freezer.
    Frozen,
    /// Kept in the pantry.
    Pantry,
    /// Kept in a cool, dry place.
    CoolDryPlace,
}

impl StorageMethod {
    /// Return the method as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoomTemperature => "room_temperature",
            Self::Refrigerated => "refrigerated",
            Self::Frozen => "frozen",
            Self::Pantry => "pantry",
            Self::CoolDryPlace => "cool_dry_place",
        }
    }
}

impl fmt::Display for StorageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageMethod {
    type Err = frescipe_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "room_temperature" => Ok(Self::RoomTemperature),
            "refrigerated" => Ok(Self::Refrigerated),
            "frozen" => Ok(Self::Frozen),
            "pantry" => Ok(Self::Pantry),
            "cool_dry_place" => Ok(Self::CoolDryPlace),
            _ => Err(frescipe_core::AppError::validation(format!(
                "Invalid storage method: '{s}'. Expected one of: room_temperature, refrigerated, frozen, pantry, cool_dry_place"
            ))),
        }
    }
}
