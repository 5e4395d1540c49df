//! Ingredient category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog category of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Vegetables.
    Vegetables,
    /// Fruits.
    Fruits,
    /// Meat.
    Meat,
    /// Fish and shellfish.
    Seafood,
    /// Milk, cheese, yoghurt.
    Dairy,
    /// Rice, flour, pasta.
    Grains,
    /// Beans and pulses.
    Legumes,
    /// Nuts and seeds.
    NutsSeeds,
    /// Herbs and spices.
    HerbsSpices,
    /// Oils and fats.
    OilsFats,
    /// Sauces and seasonings.
    Condiments,
    /// Drinks.
    Beverages,
    /// Baking ingredients.
    Baking,
    /// Frozen food.
    Frozen,
    /// Canned food.
    Canned,
    /// Snacks.
    Snacks,
    /// Anything else.
    Other,
}

impl IngredientCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::Vegetables,
        Self::Fruits,
        Self::Meat,
        Self::Seafood,
        Self::Dairy,
        Self::Grains,
        Self::Legumes,
        Self::NutsSeeds,
        Self::HerbsSpices,
        Self::OilsFats,
        Self::Condiments,
        Self::Beverages,
        Self::Baking,
        Self::Frozen,
        Self::Canned,
        Self::Snacks,
        Self::Other,
    ];

    /// Return the category as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Meat => "meat",
            Self::Seafood => "seafood",
            Self::Dairy => "dairy",
            Self::Grains => "grains",
            Self::Legumes => "legumes",
            Self::NutsSeeds => "nuts_seeds",
            Self::HerbsSpices => "herbs_spices",
            Self::OilsFats => "oils_fats",
            Self::Condiments => "condiments",
            Self::Beverages => "beverages",
            Self::Baking => "baking",
            Self::Frozen => "frozen",
            Self::Canned => "canned",
            Self::Snacks => "snacks",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IngredientCategory {
    type Err = frescipe_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| {
                frescipe_core::AppError::validation(format!("Invalid ingredient category: '{s}'"))
            })
    }
}
