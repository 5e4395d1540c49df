//! Per-item alert preferences.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which alerts an item raises and when.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct NotificationSettings {
    /// Raise expiring-soon alerts.
    #[serde(default = "default_true")]
    pub expiry_reminder: bool,
    /// Raise low-quantity alerts.
    #[serde(default = "default_true")]
    pub low_quantity_alert: bool,
    /// Days before expiry an item counts as expiring soon.
    #[serde(default = "default_reminder_days")]
    #[validate(range(min = 1, max = 30, message = "reminder_days must be between 1 and 30"))]
    pub reminder_days: u32,
    /// Fraction of the original quantity at or below which an item is low.
    #[serde(default = "default_low_quantity_threshold")]
    #[validate(range(
        min = 0.0,
        max = 1.0,
        message = "low_quantity_threshold must be between 0 and 1"
    ))]
    pub low_quantity_threshold: f64,
}

impl NotificationSettings {
    /// Settings with both alerts enabled and the given thresholds.
    pub fn with_defaults(reminder_days: u32, low_quantity_threshold: f64) -> Self {
        Self {
            expiry_reminder: true,
            low_quantity_alert: true,
            reminder_days,
            low_quantity_threshold,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self::with_defaults(default_reminder_days(), default_low_quantity_threshold())
    }
}

fn default_true() -> bool {
    true
}

fn default_reminder_days() -> u32 {
    3
}

fn default_low_quantity_threshold() -> f64 {
    0.2
}
