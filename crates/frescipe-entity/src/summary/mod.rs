//! Read-time aggregates over a user's fridge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use frescipe_core::types::{IngredientId, UserId};

use crate::fridge::{FreshnessStatus, FridgeItem};
use crate::ingredient::IngredientCategory;

/// Aggregate view of a user's non-consumed items. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FridgeSummary {
    /// Owner.
    pub user_id: UserId,
    /// Non-consumed items.
    pub total_items: u64,
    /// Items within their reminder window.
    pub expiring_soon_count: u64,
    /// Items past their printed expiry.
    pub expired_count: u64,
    /// Items at or below their low-quantity level.
    pub low_quantity_count: u64,
    /// Item count per catalog category.
    pub categories: BTreeMap<IngredientCategory, u64>,
    /// Items whose ingredient could not be resolved to a category.
    pub unresolved_items: u64,
    /// Item count per read-time freshness status.
    pub freshness_breakdown: BTreeMap<FreshnessStatus, u64>,
    /// Estimated value of the remaining quantities.
    pub total_value: f64,
    /// When the summary was computed.
    pub last_updated: DateTime<Utc>,
}

impl FridgeSummary {
    /// Aggregate `items` at `now`.
    ///
    /// Consumed items are skipped. Items whose ingredient is missing from
    /// `categories` count towards every total except the category breakdown.
    pub fn build(
        user_id: UserId,
        items: &[FridgeItem],
        categories: &HashMap<IngredientId, IngredientCategory>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut summary = Self {
            user_id,
            total_items: 0,
            expiring_soon_count: 0,
            expired_count: 0,
            low_quantity_count: 0,
            categories: BTreeMap::new(),
            unresolved_items: 0,
            freshness_breakdown: BTreeMap::new(),
            total_value: 0.0,
            last_updated: now,
        };

        for item in items.iter().filter(|i| !i.is_consumed) {
            summary.total_items += 1;

            if item.is_expired(now) {
                summary.expired_count += 1;
            } else if item.is_expiring_soon(now) {
                summary.expiring_soon_count += 1;
            }

            if item.is_low_quantity() {
                summary.low_quantity_count += 1;
            }

            match categories.get(&item.ingredient_id) {
                Some(category) => *summary.categories.entry(*category).or_default() += 1,
                None => summary.unresolved_items += 1,
            }

            let status = item.evaluate_freshness(now).status;
            *summary.freshness_breakdown.entry(status).or_default() += 1;

            summary.total_value += item.estimated_value();
        }

        summary
    }
}

/// Non-consumed items sharing one catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// The category.
    pub category: IngredientCategory,
    /// Number of items in the group.
    pub count: u64,
    /// The items.
    pub items: Vec<FridgeItem>,
}

impl CategoryGroup {
    /// Group non-consumed items by category, optionally keeping one category.
    ///
    /// Items without a resolved category are dropped. Groups come back in
    /// category order, items in input order.
    pub fn group(
        items: Vec<FridgeItem>,
        categories: &HashMap<IngredientId, IngredientCategory>,
        only: Option<IngredientCategory>,
    ) -> Vec<Self> {
        let mut groups: BTreeMap<IngredientCategory, Vec<FridgeItem>> = BTreeMap::new();
        for item in items.into_iter().filter(|i| !i.is_consumed) {
            let Some(category) = categories.get(&item.ingredient_id).copied() else {
                continue;
            };
            if only.is_some_and(|wanted| wanted != category) {
                continue;
            }
            groups.entry(category).or_default().push(item);
        }

        groups
            .into_iter()
            .map(|(category, items)| Self {
                category,
                count: items.len() as u64,
                items,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fridge::{CreateFridgeItem, PurchaseInfo, UseIngredient};
    use crate::ingredient::{MeasurementUnit, StorageMethod};
    use chrono::{Duration, TimeZone};
    use frescipe_core::config::FridgeConfig;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    fn item(
        user: UserId,
        ingredient: IngredientId,
        expiry_in_days: Option<i64>,
        price: Option<f64>,
    ) -> FridgeItem {
        let mut input = CreateFridgeItem::new(
            ingredient,
            "Item",
            100.0,
            MeasurementUnit::Gram,
            StorageMethod::Refrigerated,
        );
        input.purchase_date = Some(now() - Duration::days(1));
        input.expiry_date = expiry_in_days.map(|d| now() + Duration::days(d));
        input.purchase_info = price.map(|p| PurchaseInfo {
            price: Some(p),
            currency: "KRW".into(),
            ..Default::default()
        });
        FridgeItem::new(user, input, &FridgeConfig::default(), now() - Duration::days(1)).unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let user = UserId::new();
        let carrot = IngredientId::new();
        let milk = IngredientId::new();
        let unknown = IngredientId::new();

        let mut low = item(user, carrot, None, Some(1000.0));
        low.use_ingredient(UseIngredient::new(90.0, MeasurementUnit::Gram), now())
            .unwrap();
        let mut consumed = item(user, milk, Some(1), None);
        consumed.mark_consumed();

        let items = vec![
            item(user, carrot, Some(-2), None),
            item(user, milk, Some(2), Some(500.0)),
            item(user, milk, Some(20), None),
            item(user, unknown, Some(0), None),
            low,
            consumed,
        ];
        let categories = HashMap::from([
            (carrot, IngredientCategory::Vegetables),
            (milk, IngredientCategory::Dairy),
        ]);

        let summary = FridgeSummary::build(user, &items, &categories, now());

        assert_eq!(summary.total_items, 5);
        assert_eq!(summary.expired_count, 1);
        assert_eq!(summary.expiring_soon_count, 2);
        assert_eq!(summary.low_quantity_count, 1);
        assert_eq!(summary.unresolved_items, 1);
        assert_eq!(summary.categories[&IngredientCategory::Vegetables], 2);
        assert_eq!(summary.categories[&IngredientCategory::Dairy], 2);
        assert!((summary.total_value - 600.0).abs() < 1e-9);
        assert_eq!(summary.freshness_breakdown.values().sum::<u64>(), 5);
        assert_eq!(summary.last_updated, now());
    }

    #[test]
    fn test_summary_of_empty_fridge() {
        let summary = FridgeSummary::build(UserId::new(), &[], &HashMap::new(), now());
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_value, 0.0);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn test_summary_serializes_category_keys() {
        let user = UserId::new();
        let carrot = IngredientId::new();
        let items = vec![item(user, carrot, None, None)];
        let categories = HashMap::from([(carrot, IngredientCategory::Vegetables)]);
        let summary = FridgeSummary::build(user, &items, &categories, now());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["categories"]["vegetables"], 1);
        assert_eq!(json["freshness_breakdown"]["excellent"], 1);
    }

    #[test]
    fn test_group_by_category() {
        let user = UserId::new();
        let carrot = IngredientId::new();
        let milk = IngredientId::new();
        let unknown = IngredientId::new();
        let mut consumed = item(user, carrot, None, None);
        consumed.mark_consumed();

        let items = vec![
            item(user, milk, None, None),
            item(user, carrot, None, None),
            item(user, unknown, None, None),
            item(user, milk, None, None),
            consumed,
        ];
        let categories = HashMap::from([
            (carrot, IngredientCategory::Vegetables),
            (milk, IngredientCategory::Dairy),
        ]);

        let groups = CategoryGroup::group(items.clone(), &categories, None);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, IngredientCategory::Vegetables);
        assert_eq!(groups[0].count, 1);
        assert_eq!(groups[1].category, IngredientCategory::Dairy);
        assert_eq!(groups[1].count, 2);

        let dairy = CategoryGroup::group(items, &categories, Some(IngredientCategory::Dairy));
        assert_eq!(dairy.len(), 1);
        assert_eq!(dairy[0].count, 2);
    }
}
