//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use frescipe_core::types::PageResponse;
use frescipe_entity::fridge::FridgeItem;
use frescipe_entity::ingredient::MeasurementUnit;

/// Standard success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// Payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Create a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A stored item plus values derived at response time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FridgeItemResponse {
    /// The stored item.
    #[serde(flatten)]
    pub item: FridgeItem,
    /// Whole days until the printed expiry, rounded up.
    pub days_until_expiry: Option<i64>,
    /// Within the reminder window and not yet expired.
    pub is_expiring_soon: bool,
    /// Past the printed expiry.
    pub is_expired: bool,
    /// Share of the original quantity used so far, 0 to 100.
    pub usage_percentage: f64,
    /// Remaining quantity is at or below the low level.
    pub is_low_quantity: bool,
}

impl FridgeItemResponse {
    /// Project `item` at `now`. Stored freshness is returned unchanged.
    pub fn at(item: FridgeItem, now: DateTime<Utc>) -> Self {
        Self {
            days_until_expiry: item.days_until_expiry(now),
            is_expiring_soon: item.is_expiring_soon(now),
            is_expired: item.is_expired(now),
            usage_percentage: item.usage_percentage(),
            is_low_quantity: item.is_low_quantity(),
            item,
        }
    }

    /// Project every item of a page.
    pub fn page(page: PageResponse<FridgeItem>, now: DateTime<Utc>) -> PageResponse<Self> {
        let items = page
            .items
            .into_iter()
            .map(|item| Self::at(item, now))
            .collect();
        PageResponse::new(items, page.page, page.page_size, page.total_items)
    }
}

/// Result of a unit conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// Amount that was converted.
    pub amount: f64,
    /// Source unit.
    pub from: MeasurementUnit,
    /// Target unit.
    pub to: MeasurementUnit,
    /// `amount` expressed in `to`.
    pub result: f64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Seconds since the state was built.
    pub uptime_seconds: u64,
    /// `connected`, `unavailable`, or `memory` when no database is attached.
    pub database: String,
}
