//! Query parameters for the item listing.

use serde::{Deserialize, Serialize};

use frescipe_core::types::PageRequest;
use frescipe_core::types::pagination::DEFAULT_PAGE_SIZE;

/// Query parameters for `GET /api/fridge/items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItemsParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Include consumed items.
    #[serde(default)]
    pub include_consumed: bool,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl ListItemsParams {
    /// Converts to a clamped `PageRequest`.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}
