//! Fridge engine defaults.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Defaults and limits applied by the fridge inventory engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FridgeConfig {
    /// Days added to the opening instant to derive an estimated expiry.
    #[serde(default = "default_opened_shelf_life")]
    pub opened_shelf_life_days: u32,
    /// Reminder window applied to new items that do not specify one.
    #[serde(default = "default_reminder_days")]
    pub default_reminder_days: u32,
    /// Low-quantity fraction applied to new items that do not specify one.
    #[serde(default = "default_low_quantity_threshold")]
    pub default_low_quantity_threshold: f64,
    /// Window used by the expiring-items query when no `days` is given.
    #[serde(default = "default_expiring_window")]
    pub default_expiring_window_days: u32,
    /// Largest accepted expiring-items window.
    #[serde(default = "default_max_expiring_window")]
    pub max_expiring_window_days: u32,
    /// Capacity of the in-process event bus.
    #[serde(default = "default_event_buffer")]
    pub event_buffer_size: usize,
}

impl Default for FridgeConfig {
    fn default() -> Self {
        Self {
            opened_shelf_life_days: default_opened_shelf_life(),
            default_reminder_days: default_reminder_days(),
            default_low_quantity_threshold: default_low_quantity_threshold(),
            default_expiring_window_days: default_expiring_window(),
            max_expiring_window_days: default_max_expiring_window(),
            event_buffer_size: default_event_buffer(),
        }
    }
}

impl FridgeConfig {
    /// Validate ranges that mirror the per-item notification constraints.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=30).contains(&self.default_reminder_days) {
            return Err(AppError::configuration(format!(
                "fridge.default_reminder_days must be within 1..=30, got {}",
                self.default_reminder_days
            )));
        }
        if !(0.0..=1.0).contains(&self.default_low_quantity_threshold) {
            return Err(AppError::configuration(format!(
                "fridge.default_low_quantity_threshold must be within 0..=1, got {}",
                self.default_low_quantity_threshold
            )));
        }
        if self.default_expiring_window_days > self.max_expiring_window_days {
            return Err(AppError::configuration(
                "fridge.default_expiring_window_days exceeds max_expiring_window_days",
            ));
        }
        if self.event_buffer_size == 0 {
            return Err(AppError::configuration(
                "fridge.event_buffer_size must be positive",
            ));
        }
        Ok(())
    }
}

fn default_opened_shelf_life() -> u32 {
    7
}

fn default_reminder_days() -> u32 {
    3
}

fn default_low_quantity_threshold() -> f64 {
    0.2
}

fn default_expiring_window() -> u32 {
    3
}

fn default_max_expiring_window() -> u32 {
    365
}

fn default_event_buffer() -> usize {
    256
}
