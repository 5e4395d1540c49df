//! Alert signal derivation.

use chrono::{DateTime, Utc};

use frescipe_core::events::AlertEvent;
use frescipe_entity::fridge::FridgeItem;

/// Decides which alerts an item raises, honoring its notification settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertRules;

impl AlertRules {
    /// Creates the alert rules.
    pub fn new() -> Self {
        Self
    }

    /// Alerts for one item at `now`. Consumed items raise nothing.
    pub fn evaluate(&self, item: &FridgeItem, now: DateTime<Utc>) -> Vec<AlertEvent> {
        let mut alerts = Vec::new();
        if item.is_consumed {
            return alerts;
        }

        if let Some(alert) = self.expiry_alert(item, now) {
            alerts.push(alert);
        }
        if let Some(alert) = self.low_quantity_alert(item) {
            alerts.push(alert);
        }
        alerts
    }

    /// Expiring-soon signal, also raised for already expired items.
    pub fn expiry_alert(&self, item: &FridgeItem, now: DateTime<Utc>) -> Option<AlertEvent> {
        if !item.notifications.expiry_reminder {
            return None;
        }
        let expiry_date = item.expiry_date?;
        let days_until_expiry = item.days_until_expiry(now)?;
        if !(item.is_expiring_soon(now) || item.is_expired(now)) {
            return None;
        }
        Some(AlertEvent::ExpiringSoon {
            item_id: item.id,
            ingredient_name: item.ingredient_name.clone(),
            expiry_date,
            days_until_expiry,
        })
    }

    /// Low-quantity signal.
    pub fn low_quantity_alert(&self, item: &FridgeItem) -> Option<AlertEvent> {
        if !item.notifications.low_quantity_alert || !item.is_low_quantity() {
            return None;
        }
        Some(AlertEvent::LowQuantity {
            item_id: item.id,
            ingredient_name: item.ingredient_name.clone(),
            quantity: item.quantity,
            threshold_quantity: item.low_quantity_level(),
        })
    }
}
