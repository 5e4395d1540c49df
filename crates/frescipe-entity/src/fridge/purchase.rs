//! Purchase metadata.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where and for how much an item was bought.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct PurchaseInfo {
    /// Shop name.
    #[validate(length(max = 100))]
    pub store: Option<String>,
    /// Price paid for the whole original quantity.
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,
    /// ISO currency code of `price`.
    #[serde(default = "default_currency")]
    #[validate(length(min = 3, max = 3))]
    pub currency: String,
    /// Producer batch or lot number.
    pub batch_number: Option<String>,
    /// Organic produce.
    #[serde(default)]
    pub organic: bool,
    /// Brand name.
    #[validate(length(max = 100))]
    pub brand: Option<String>,
}

fn default_currency() -> String {
    "KRW".to_string()
}
