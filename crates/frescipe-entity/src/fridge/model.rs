//! Fridge item entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use frescipe_core::config::FridgeConfig;
use frescipe_core::types::{FridgeItemId, IngredientId, UserId};
use frescipe_core::{AppError, AppResult};

use super::freshness::{Freshness, FreshnessInputs, FreshnessStatus, MILLIS_PER_DAY};
use super::notification::NotificationSettings;
use super::purchase::PurchaseInfo;
use super::rejected;
use super::usage::{UsageOutcome, UsageRecord, UseIngredient};
use crate::ingredient::{MeasurementUnit, StorageMethod};

/// Quantities at or below this are treated as zero.
pub const QUANTITY_EPSILON: f64 = 1e-9;

/// One stored instance of an ingredient held by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FridgeItem {
    /// Item ID.
    pub id: FridgeItemId,
    /// Owner.
    pub user_id: UserId,
    /// Catalog ingredient.
    pub ingredient_id: IngredientId,
    /// Ingredient name, denormalized for search.
    pub ingredient_name: String,
    /// Current quantity, `0..=original_quantity`.
    pub quantity: f64,
    /// Quantity at creation. Never changes.
    pub original_quantity: f64,
    /// Unit of both quantities.
    pub unit: MeasurementUnit,
    /// How the item is stored.
    pub storage_method: StorageMethod,
    /// Shelf or drawer.
    pub location: Option<String>,
    /// Container description.
    pub container: Option<String>,
    /// When the item was bought.
    pub purchase_date: DateTime<Utc>,
    /// Printed expiry.
    pub expiry_date: Option<DateTime<Utc>>,
    /// When the item was first opened.
    pub opened_date: Option<DateTime<Utc>>,
    /// Expiry estimated on opening when no printed expiry exists.
    pub estimated_expiry_date: Option<DateTime<Utc>>,
    /// Derived score, recomputed on every save.
    pub freshness_score: u8,
    /// Band of `freshness_score`.
    pub freshness_status: FreshnessStatus,
    /// Whether the item has been opened.
    pub is_opened: bool,
    /// Whether the item is used up.
    pub is_consumed: bool,
    /// Purchase metadata.
    pub purchase_info: Option<PurchaseInfo>,
    /// Append-only usage log.
    pub usage_history: Vec<UsageRecord>,
    /// Alert preferences.
    pub notifications: NotificationSettings,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Tags, unique, in order of first appearance.
    pub tags: Vec<String>,
    /// Image URIs.
    pub images: Vec<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last persisted mutation.
    pub updated_at: DateTime<Utc>,
    /// Last time the owner confirmed the item is still there.
    pub last_checked_at: Option<DateTime<Utc>>,
    /// Optimistic concurrency version, bumped by the store on each update.
    pub version: i64,
}

/// Data required to add an item to a fridge.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFridgeItem {
    /// Catalog ingredient.
    pub ingredient_id: IngredientId,
    /// Ingredient name.
    #[validate(length(min = 1, max = 100, message = "ingredient_name must be 1 to 100 characters"))]
    pub ingredient_name: String,
    /// Starting quantity.
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,
    /// Unit of `quantity`.
    pub unit: MeasurementUnit,
    /// How the item is stored.
    pub storage_method: StorageMethod,
    /// Shelf or drawer.
    #[serde(default)]
    #[validate(length(max = 100))]
    pub location: Option<String>,
    /// Container description.
    #[serde(default)]
    #[validate(length(max = 100))]
    pub container: Option<String>,
    /// Purchase time. Defaults to now.
    #[serde(default)]
    pub purchase_date: Option<DateTime<Utc>>,
    /// Printed expiry.
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    /// Purchase metadata.
    #[serde(default)]
    #[validate(nested)]
    pub purchase_info: Option<PurchaseInfo>,
    /// Alert preferences. Defaults come from configuration.
    #[serde(default)]
    #[validate(nested)]
    pub notifications: Option<NotificationSettings>,
    /// Free-text notes.
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image URIs.
    #[serde(default)]
    pub images: Vec<String>,
}

impl CreateFridgeItem {
    /// Minimal input: everything optional left empty.
    pub fn new(
        ingredient_id: IngredientId,
        ingredient_name: impl Into<String>,
        quantity: f64,
        unit: MeasurementUnit,
        storage_method: StorageMethod,
    ) -> Self {
        Self {
            ingredient_id,
            ingredient_name: ingredient_name.into(),
            quantity,
            unit,
            storage_method,
            location: None,
            container: None,
            purchase_date: None,
            expiry_date: None,
            purchase_info: None,
            notifications: None,
            notes: None,
            tags: Vec::new(),
            images: Vec::new(),
        }
    }
}

impl FridgeItem {
    /// Build a new item from validated input.
    ///
    /// The item starts at full quantity, sealed, and is already prepared
    /// for its first save.
    pub fn new(
        user_id: UserId,
        input: CreateFridgeItem,
        config: &FridgeConfig,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        input.validate().map_err(rejected)?;
        if !input.quantity.is_finite() {
            return Err(AppError::validation("quantity must be a finite number"));
        }
        if input.ingredient_name.trim().is_empty() {
            return Err(AppError::validation("ingredient_name must not be blank"));
        }

        let notifications = input.notifications.unwrap_or_else(|| {
            NotificationSettings::with_defaults(
                config.default_reminder_days,
                config.default_low_quantity_threshold,
            )
        });

        let mut item = Self {
            id: FridgeItemId::new(),
            user_id,
            ingredient_id: input.ingredient_id,
            ingredient_name: input.ingredient_name.trim().to_string(),
            quantity: input.quantity,
            original_quantity: input.quantity,
            unit: input.unit,
            storage_method: input.storage_method,
            location: input.location,
            container: input.container,
            purchase_date: input.purchase_date.unwrap_or(now),
            expiry_date: input.expiry_date,
            opened_date: None,
            estimated_expiry_date: None,
            freshness_score: Freshness::FRESH.score,
            freshness_status: Freshness::FRESH.status,
            is_opened: false,
            is_consumed: input.quantity <= QUANTITY_EPSILON,
            purchase_info: input.purchase_info,
            usage_history: Vec::new(),
            notifications,
            notes: input.notes,
            tags: input.tags,
            images: input.images,
            created_at: now,
            updated_at: now,
            last_checked_at: None,
            version: 0,
        };
        item.prepare_for_save(now);
        Ok(item)
    }

    /// Inputs of the freshness model.
    pub fn freshness_inputs(&self) -> FreshnessInputs {
        FreshnessInputs {
            purchase_date: self.purchase_date,
            expiry_date: self.expiry_date,
            opened_date: if self.is_opened {
                self.opened_date
            } else {
                None
            },
        }
    }

    /// Freshness at `now` without touching the stored fields.
    pub fn evaluate_freshness(&self, now: DateTime<Utc>) -> Freshness {
        self.freshness_inputs().evaluate(now)
    }

    /// Overwrite the derived freshness fields with their value at `now`.
    pub fn refresh_freshness(&mut self, now: DateTime<Utc>) {
        let freshness = self.evaluate_freshness(now);
        self.freshness_score = freshness.score;
        self.freshness_status = freshness.status;
    }

    /// Copy carrying read-time freshness values.
    pub fn with_freshness_at(&self, now: DateTime<Utc>) -> Self {
        let mut copy = self.clone();
        copy.refresh_freshness(now);
        copy
    }

    /// Normalize derived state before a write. Every persisted mutation
    /// passes through here.
    pub fn prepare_for_save(&mut self, now: DateTime<Utc>) {
        if self.is_consumed {
            self.quantity = 0.0;
        }
        self.tags = dedupe_tags(std::mem::take(&mut self.tags));
        self.refresh_freshness(now);
        self.updated_at = now;
    }

    /// Take `input.amount` from the item.
    ///
    /// On error the item is left untouched.
    pub fn use_ingredient(
        &mut self,
        input: UseIngredient,
        now: DateTime<Utc>,
    ) -> AppResult<UsageOutcome> {
        input.validate().map_err(rejected)?;
        if !input.amount.is_finite() || input.amount <= 0.0 {
            return Err(AppError::validation("amount must be a positive number"));
        }
        if input.unit != self.unit {
            return Err(AppError::unit_mismatch(self.unit, input.unit));
        }
        if input.amount > self.quantity {
            return Err(AppError::insufficient_quantity(input.amount, self.quantity));
        }

        let was_low = self.is_low_quantity();
        let was_consumed = self.is_consumed;

        self.quantity -= input.amount;
        if self.quantity <= QUANTITY_EPSILON {
            self.quantity = 0.0;
            self.is_consumed = true;
        }
        self.usage_history.push(UsageRecord {
            amount_used: input.amount,
            unit: input.unit,
            recipe_id: input.recipe_id,
            recipe_name: input.recipe_name,
            used_date: now,
            notes: input.notes,
        });

        Ok(UsageOutcome {
            remaining: self.quantity,
            became_consumed: self.is_consumed && !was_consumed,
            became_low: !self.is_consumed && !was_low && self.is_low_quantity(),
        })
    }

    /// Mark the item opened. Returns `false` if it already was.
    ///
    /// Items without any expiry get an estimate `shelf_life` after opening.
    pub fn mark_opened(&mut self, now: DateTime<Utc>, shelf_life: Duration) -> bool {
        if self.is_opened {
            return false;
        }
        self.is_opened = true;
        self.opened_date = Some(now);
        if self.expiry_date.is_none() && self.estimated_expiry_date.is_none() {
            self.estimated_expiry_date = Some(now + shelf_life);
        }
        true
    }

    /// Mark the remainder consumed. Returns `false` if it already was.
    pub fn mark_consumed(&mut self) -> bool {
        if self.is_consumed {
            return false;
        }
        self.is_consumed = true;
        true
    }

    /// Stamp the last-checked time.
    pub fn mark_checked(&mut self, now: DateTime<Utc>) {
        self.last_checked_at = Some(now);
    }

    /// Whole days until the printed expiry, rounded up.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expiry_date.map(|expiry| {
            let millis = (expiry - now).num_milliseconds() as f64;
            (millis / MILLIS_PER_DAY).ceil() as i64
        })
    }

    /// Past the printed expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.days_until_expiry(now).is_some_and(|d| d < 0)
    }

    /// Within the reminder window and not yet expired.
    pub fn is_expiring_soon(&self, now: DateTime<Utc>) -> bool {
        self.days_until_expiry(now)
            .is_some_and(|d| (0..=i64::from(self.notifications.reminder_days)).contains(&d))
    }

    /// Share of the original quantity used so far, in percent.
    pub fn usage_percentage(&self) -> f64 {
        if self.original_quantity <= 0.0 {
            return 0.0;
        }
        (self.original_quantity - self.quantity) / self.original_quantity * 100.0
    }

    /// Quantity at which the item counts as low.
    pub fn low_quantity_level(&self) -> f64 {
        self.original_quantity * self.notifications.low_quantity_threshold
    }

    /// At or below the low-quantity level.
    pub fn is_low_quantity(&self) -> bool {
        self.quantity <= self.low_quantity_level()
    }

    /// Price of the remaining share. Zero without a price.
    pub fn estimated_value(&self) -> f64 {
        match self.purchase_info.as_ref().and_then(|p| p.price) {
            Some(price) if self.original_quantity > 0.0 => {
                price * self.quantity / self.original_quantity
            }
            _ => 0.0,
        }
    }

    /// Whether `user_id` owns the item.
    pub fn belongs_to(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

fn dedupe_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !unique.iter().any(|t| t == tag) {
            unique.push(tag.to_string());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use frescipe_core::ErrorKind;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn milk(quantity: f64) -> CreateFridgeItem {
        CreateFridgeItem::new(
            IngredientId::new(),
            "Milk",
            quantity,
            MeasurementUnit::Milliliter,
            StorageMethod::Refrigerated,
        )
    }

    fn create(input: CreateFridgeItem, now: DateTime<Utc>) -> FridgeItem {
        FridgeItem::new(UserId::new(), input, &FridgeConfig::default(), now).unwrap()
    }

    #[test]
    fn test_new_item_defaults() {
        let item = create(milk(1000.0), t0());
        assert_eq!(item.quantity, 1000.0);
        assert_eq!(item.original_quantity, 1000.0);
        assert_eq!(item.purchase_date, t0());
        assert_eq!(item.freshness_score, 100);
        assert_eq!(item.freshness_status, FreshnessStatus::Excellent);
        assert!(!item.is_opened);
        assert!(!item.is_consumed);
        assert_eq!(item.notifications, NotificationSettings::default());
        assert_eq!(item.version, 0);
    }

    #[test]
    fn test_new_item_backdated_purchase_is_scored() {
        let mut input = milk(500.0);
        input.purchase_date = Some(t0() - Duration::days(5));
        input.expiry_date = Some(t0() + Duration::days(5));
        let item = create(input, t0());
        assert_eq!(item.freshness_score, 50);
        assert_eq!(item.freshness_status, FreshnessStatus::Fair);
    }

    #[test]
    fn test_new_item_with_zero_quantity_is_consumed() {
        let item = create(milk(0.0), t0());
        assert!(item.is_consumed);
        assert_eq!(item.quantity, 0.0);
    }

    #[test]
    fn test_new_item_validation() {
        let config = FridgeConfig::default();
        let err = FridgeItem::new(UserId::new(), milk(-1.0), &config, t0()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = FridgeItem::new(UserId::new(), milk(f64::INFINITY), &config, t0()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let mut input = milk(1.0);
        input.ingredient_name = "   ".into();
        let err = FridgeItem::new(UserId::new(), input, &config, t0()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let mut input = milk(1.0);
        input.notifications = Some(NotificationSettings::with_defaults(45, 0.2));
        let err = FridgeItem::new(UserId::new(), input, &config, t0()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_tags_deduplicated_in_order() {
        let mut input = milk(1.0);
        input.tags = vec!["dairy".into(), " breakfast ".into(), "dairy".into(), "".into()];
        let item = create(input, t0());
        assert_eq!(item.tags, vec!["dairy".to_string(), "breakfast".to_string()]);
    }

    #[test]
    fn test_use_whole_quantity_consumes() {
        let mut item = FridgeItem::new(
            UserId::new(),
            CreateFridgeItem::new(
                IngredientId::new(),
                "Flour",
                300.0,
                MeasurementUnit::Gram,
                StorageMethod::Pantry,
            ),
            &FridgeConfig::default(),
            t0(),
        )
        .unwrap();

        let outcome = item
            .use_ingredient(UseIngredient::new(300.0, MeasurementUnit::Gram), t0())
            .unwrap();

        assert!(outcome.became_consumed);
        assert!(!outcome.became_low);
        assert_eq!(item.quantity, 0.0);
        assert!(item.is_consumed);
        assert_eq!(item.usage_history.len(), 1);
        assert_eq!(item.usage_history[0].amount_used, 300.0);
        assert_eq!(item.usage_history[0].used_date, t0());
    }

    #[test]
    fn test_use_float_remainder_snaps_to_zero() {
        let mut item = create(milk(1.0), t0());
        let outcome = item
            .use_ingredient(
                UseIngredient::new(1.0 - 1e-12, MeasurementUnit::Milliliter),
                t0(),
            )
            .unwrap();
        assert_eq!(outcome.remaining, 0.0);
        assert!(outcome.became_consumed);
        assert_eq!(item.quantity, 0.0);
        assert!(item.is_consumed);
    }

    #[test]
    fn test_use_with_other_unit_is_rejected_unchanged() {
        let mut item = create(milk(1000.0), t0());
        let before = item.clone();
        let err = item
            .use_ingredient(UseIngredient::new(1.0, MeasurementUnit::Liter), t0())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnitMismatch);
        assert_eq!(item, before);
    }

    #[test]
    fn test_use_more_than_available_is_rejected_unchanged() {
        let mut item = create(milk(100.0), t0());
        let before = item.clone();
        let err = item
            .use_ingredient(UseIngredient::new(100.5, MeasurementUnit::Milliliter), t0())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
        assert_eq!(item, before);
    }

    #[test]
    fn test_use_slightly_more_than_available_is_rejected() {
        let mut item = create(milk(5.0), t0());
        let before = item.clone();
        let err = item
            .use_ingredient(
                UseIngredient::new(5.0 + 1e-10, MeasurementUnit::Milliliter),
                t0(),
            )
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
        assert_eq!(item, before);
    }

    #[test]
    fn test_use_on_consumed_item_is_rejected_unchanged() {
        let mut item = create(milk(300.0), t0());
        item.use_ingredient(UseIngredient::new(300.0, MeasurementUnit::Milliliter), t0())
            .unwrap();
        assert!(item.is_consumed);

        let before = item.clone();
        let err = item
            .use_ingredient(UseIngredient::new(5e-10, MeasurementUnit::Milliliter), t0())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientQuantity);
        assert_eq!(item, before);
        assert_eq!(item.usage_history.len(), 1);
    }

    #[test]
    fn test_use_non_positive_amount_is_rejected() {
        let mut item = create(milk(100.0), t0());
        for amount in [0.0, -5.0, f64::NAN] {
            let err = item
                .use_ingredient(UseIngredient::new(amount, MeasurementUnit::Milliliter), t0())
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
        assert!(item.usage_history.is_empty());
    }

    #[test]
    fn test_quantity_stays_within_bounds() {
        let mut item = create(milk(10.0), t0());
        for _ in 0..20 {
            let _ = item.use_ingredient(UseIngredient::new(0.7, MeasurementUnit::Milliliter), t0());
            assert!(item.quantity >= 0.0);
            assert!(item.quantity <= item.original_quantity);
        }
    }

    #[test]
    fn test_use_reports_crossing_low_threshold() {
        let mut item = create(milk(100.0), t0());
        let first = item
            .use_ingredient(UseIngredient::new(50.0, MeasurementUnit::Milliliter), t0())
            .unwrap();
        assert!(!first.became_low);
        let second = item
            .use_ingredient(UseIngredient::new(35.0, MeasurementUnit::Milliliter), t0())
            .unwrap();
        assert!(second.became_low);
        let third = item
            .use_ingredient(UseIngredient::new(5.0, MeasurementUnit::Milliliter), t0())
            .unwrap();
        assert!(!third.became_low);
    }

    #[test]
    fn test_open_without_expiry_estimates() {
        let mut item = create(milk(1.0), t0());
        let opened_at = t0() + Duration::days(1);
        assert!(item.mark_opened(opened_at, Duration::days(7)));
        assert!(item.is_opened);
        assert_eq!(item.opened_date, Some(opened_at));
        assert_eq!(item.estimated_expiry_date, Some(opened_at + Duration::days(7)));
    }

    #[test]
    fn test_open_with_expiry_keeps_estimate_empty() {
        let mut input = milk(1.0);
        input.expiry_date = Some(t0() + Duration::days(10));
        let mut item = create(input, t0());
        assert!(item.mark_opened(t0(), Duration::days(7)));
        assert!(item.estimated_expiry_date.is_none());
    }

    #[test]
    fn test_reopen_is_noop() {
        let mut item = create(milk(1.0), t0());
        item.mark_opened(t0(), Duration::days(7));
        let before = item.clone();
        assert!(!item.mark_opened(t0() + Duration::days(3), Duration::days(7)));
        assert_eq!(item, before);
    }

    #[test]
    fn test_opened_scenario_scores_poor() {
        let mut input = milk(1.0);
        input.purchase_date = Some(t0());
        input.expiry_date = Some(t0() + Duration::days(10));
        let mut item = create(input, t0());
        item.mark_opened(t0() + Duration::days(2), Duration::days(7));
        item.prepare_for_save(t0() + Duration::days(5));
        assert_eq!(item.freshness_score, 35);
        assert_eq!(item.freshness_status, FreshnessStatus::Poor);
    }

    #[test]
    fn test_consume_remainder_zeroes_on_save() {
        let mut item = create(milk(400.0), t0());
        assert!(item.mark_consumed());
        assert!(!item.mark_consumed());
        item.prepare_for_save(t0());
        assert_eq!(item.quantity, 0.0);
        assert!(item.is_consumed);
    }

    #[test]
    fn test_days_until_expiry_rounds_up() {
        let mut input = milk(1.0);
        input.expiry_date = Some(t0() + Duration::hours(30));
        let item = create(input, t0());
        assert_eq!(item.days_until_expiry(t0()), Some(2));
        assert!(item.is_expiring_soon(t0()));
        assert!(!item.is_expired(t0()));

        // 30 hours past expiry: ceil(-1.25) = -1.
        let later = t0() + Duration::hours(60);
        assert_eq!(item.days_until_expiry(later), Some(-1));
        assert!(item.is_expired(later));
        assert!(!item.is_expiring_soon(later));
    }

    #[test]
    fn test_expiring_soon_respects_reminder_days() {
        let mut input = milk(1.0);
        input.expiry_date = Some(t0() + Duration::days(5));
        let item = create(input, t0());
        assert!(!item.is_expiring_soon(t0()));
        assert!(item.is_expiring_soon(t0() + Duration::days(2)));
    }

    #[test]
    fn test_usage_percentage_and_value() {
        let mut input = milk(200.0);
        input.purchase_info = Some(PurchaseInfo {
            price: Some(3000.0),
            currency: "KRW".into(),
            ..Default::default()
        });
        let mut item = create(input, t0());
        item.use_ingredient(UseIngredient::new(50.0, MeasurementUnit::Milliliter), t0())
            .unwrap();
        assert_eq!(item.usage_percentage(), 25.0);
        assert_eq!(item.estimated_value(), 2250.0);

        let empty = create(milk(0.0), t0());
        assert_eq!(empty.usage_percentage(), 0.0);
        assert_eq!(empty.estimated_value(), 0.0);
    }

    #[test]
    fn test_with_freshness_at_does_not_mutate() {
        let item = create(milk(1.0), t0());
        let projected = item.with_freshness_at(t0() + Duration::days(10));
        assert_eq!(projected.freshness_score, 80);
        assert_eq!(item.freshness_score, 100);
    }
}
