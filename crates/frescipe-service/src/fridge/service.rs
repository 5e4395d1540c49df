//! Fridge item lifecycle and queries.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use frescipe_core::config::FridgeConfig;
use frescipe_core::error::AppError;
use frescipe_core::events::{AlertEvent, DomainEvent, FridgeEvent};
use frescipe_core::result::AppResult;
use frescipe_core::traits::{Clock, EventPublisher};
use frescipe_core::types::{FridgeItemId, IngredientId, PageRequest, PageResponse};
use frescipe_database::store::{FridgeItemStore, IngredientCatalog};
use frescipe_entity::fridge::{CreateFridgeItem, FridgeItem, UseIngredient};
use frescipe_entity::ingredient::IngredientCategory;
use frescipe_entity::summary::{CategoryGroup, FridgeSummary};

use super::alerts::AlertRules;
use crate::context::RequestContext;

/// Orchestrates every fridge item operation for the calling user.
///
/// Each mutation loads the item, applies the change on the value, runs
/// [`FridgeItem::prepare_for_save`], and writes through the store's
/// conditional update. A lost race surfaces as `PersistenceConflict`; the
/// service never retries.
#[derive(Debug, Clone)]
pub struct FridgeService {
    /// Item persistence.
    items: Arc<dyn FridgeItemStore>,
    /// Ingredient reference data.
    catalog: Arc<dyn IngredientCatalog>,
    /// Sink for lifecycle events and alert signals.
    publisher: Arc<dyn EventPublisher>,
    /// Source of `now`.
    clock: Arc<dyn Clock>,
    /// Alert derivation.
    rules: AlertRules,
    /// Engine defaults.
    config: FridgeConfig,
}

impl FridgeService {
    /// Creates a new fridge service.
    pub fn new(
        items: Arc<dyn FridgeItemStore>,
        catalog: Arc<dyn IngredientCatalog>,
        publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        config: FridgeConfig,
    ) -> Self {
        Self {
            items,
            catalog,
            publisher,
            clock,
            rules: AlertRules::new(),
            config,
        }
    }

    /// Engine configuration in effect.
    pub fn config(&self) -> &FridgeConfig {
        &self.config
    }

    /// Adds a new item to the caller's fridge.
    pub async fn create_item(
        &self,
        ctx: &RequestContext,
        input: CreateFridgeItem,
    ) -> AppResult<FridgeItem> {
        let now = self.clock.now();
        let item = FridgeItem::new(ctx.user_id, input, &self.config, now)?;
        let item = self.items.insert(&item).await?;

        info!(
            user_id = %ctx.user_id,
            item_id = %item.id,
            ingredient = %item.ingredient_name,
            quantity = item.quantity,
            unit = %item.unit,
            "Fridge item added"
        );

        self.emit(
            ctx,
            now,
            FridgeEvent::ItemAdded {
                item_id: item.id,
                ingredient_id: item.ingredient_id,
                ingredient_name: item.ingredient_name.clone(),
                quantity: item.quantity,
                unit: item.unit.to_string(),
            },
        );
        Ok(item)
    }

    /// Gets one of the caller's items.
    pub async fn get_item(&self, ctx: &RequestContext, id: FridgeItemId) -> AppResult<FridgeItem> {
        self.items
            .find_by_id(id)
            .await?
            .filter(|item| item.belongs_to(ctx.user_id))
            .ok_or_else(|| AppError::not_found(format!("Fridge item {id} not found")))
    }

    /// Lists the caller's items, newest first.
    pub async fn list_items(
        &self,
        ctx: &RequestContext,
        include_consumed: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<FridgeItem>> {
        self.items
            .list_by_user(ctx.user_id, include_consumed, page)
            .await
    }

    /// Deletes one of the caller's items.
    pub async fn delete_item(&self, ctx: &RequestContext, id: FridgeItemId) -> AppResult<()> {
        let item = self.get_item(ctx, id).await?;
        if !self.items.delete(item.id).await? {
            return Err(AppError::not_found(format!("Fridge item {id} not found")));
        }

        info!(user_id = %ctx.user_id, item_id = %id, "Fridge item removed");
        self.emit(ctx, self.clock.now(), FridgeEvent::ItemRemoved { item_id: id });
        Ok(())
    }

    /// Takes an amount from an item and records it in the usage history.
    pub async fn use_item(
        &self,
        ctx: &RequestContext,
        id: FridgeItemId,
        input: UseIngredient,
    ) -> AppResult<FridgeItem> {
        let now = self.clock.now();
        let mut item = self.get_item(ctx, id).await?;
        let recipe_id = input.recipe_id;

        let outcome = item.use_ingredient(input, now).inspect_err(|e| {
            debug!(item_id = %id, error = %e, "Usage rejected");
        })?;
        let amount = item
            .usage_history
            .last()
            .map(|record| record.amount_used)
            .unwrap_or_default();

        let item = self.save(item, now).await?;

        info!(
            user_id = %ctx.user_id,
            item_id = %id,
            amount,
            remaining = outcome.remaining,
            consumed = item.is_consumed,
            "Fridge item used"
        );

        self.emit(
            ctx,
            now,
            FridgeEvent::ItemUsed {
                item_id: id,
                amount,
                unit: item.unit.to_string(),
                remaining: outcome.remaining,
                recipe_id,
            },
        );
        if outcome.became_consumed {
            self.emit(
                ctx,
                now,
                FridgeEvent::ItemConsumed {
                    item_id: id,
                    ingredient_name: item.ingredient_name.clone(),
                },
            );
        }
        if outcome.became_low {
            if let Some(alert) = self.rules.low_quantity_alert(&item) {
                self.alert(ctx, now, alert);
            }
        }
        Ok(item)
    }

    /// Marks an item opened. Opening an opened item changes nothing.
    pub async fn open_item(&self, ctx: &RequestContext, id: FridgeItemId) -> AppResult<FridgeItem> {
        let now = self.clock.now();
        let mut item = self.get_item(ctx, id).await?;

        let shelf_life = Duration::days(i64::from(self.config.opened_shelf_life_days));
        if !item.mark_opened(now, shelf_life) {
            debug!(item_id = %id, "Item already opened");
            return Ok(item);
        }

        let item = self.save(item, now).await?;
        info!(
            user_id = %ctx.user_id,
            item_id = %id,
            estimated_expiry = ?item.estimated_expiry_date,
            "Fridge item opened"
        );
        self.emit(ctx, now, FridgeEvent::ItemOpened { item_id: id });
        Ok(item)
    }

    /// Marks the remainder of an item consumed. Idempotent.
    pub async fn consume_item(
        &self,
        ctx: &RequestContext,
        id: FridgeItemId,
    ) -> AppResult<FridgeItem> {
        let now = self.clock.now();
        let mut item = self.get_item(ctx, id).await?;
        if !item.mark_consumed() {
            return Ok(item);
        }

        let item = self.save(item, now).await?;
        info!(user_id = %ctx.user_id, item_id = %id, "Fridge item consumed");
        self.emit(
            ctx,
            now,
            FridgeEvent::ItemConsumed {
                item_id: id,
                ingredient_name: item.ingredient_name.clone(),
            },
        );
        Ok(item)
    }

    /// Stamps the item as checked by its owner.
    pub async fn mark_checked(
        &self,
        ctx: &RequestContext,
        id: FridgeItemId,
    ) -> AppResult<FridgeItem> {
        let now = self.clock.now();
        let mut item = self.get_item(ctx, id).await?;
        item.mark_checked(now);
        self.save(item, now).await
    }

    /// Recomputes and persists an item's freshness.
    pub async fn refresh_freshness(
        &self,
        ctx: &RequestContext,
        id: FridgeItemId,
    ) -> AppResult<FridgeItem> {
        let now = self.clock.now();
        let item = self.get_item(ctx, id).await?;
        let item = self.save(item, now).await?;
        debug!(
            item_id = %id,
            score = item.freshness_score,
            status = %item.freshness_status,
            "Freshness refreshed"
        );
        Ok(item)
    }

    /// Aggregates the caller's non-consumed items.
    pub async fn summary(&self, ctx: &RequestContext) -> AppResult<FridgeSummary> {
        let now = self.clock.now();
        let items = self.items.find_by_user(ctx.user_id, false).await?;
        let categories = self.resolve_categories(&items).await;
        Ok(FridgeSummary::build(ctx.user_id, &items, &categories, now))
    }

    /// Non-consumed items expiring within `days` (configured default when
    /// `None`), soonest first.
    ///
    /// With `refresh` the returned copies carry freshness evaluated now.
    /// Nothing is written either way.
    pub async fn expiring_items(
        &self,
        ctx: &RequestContext,
        days: Option<u32>,
        refresh: bool,
    ) -> AppResult<Vec<FridgeItem>> {
        let days = days.unwrap_or(self.config.default_expiring_window_days);
        if days > self.config.max_expiring_window_days {
            return Err(AppError::validation(format!(
                "days must be at most {}, got {days}",
                self.config.max_expiring_window_days
            )));
        }

        let now = self.clock.now();
        let until = now + Duration::days(i64::from(days));
        let items = self.items.find_expiring(ctx.user_id, now, until).await?;

        Ok(if refresh {
            items.iter().map(|item| item.with_freshness_at(now)).collect()
        } else {
            items
        })
    }

    /// Groups the caller's non-consumed items by catalog category.
    pub async fn items_by_category(
        &self,
        ctx: &RequestContext,
        category: Option<IngredientCategory>,
    ) -> AppResult<Vec<CategoryGroup>> {
        let items = self.items.find_by_user(ctx.user_id, false).await?;
        let categories = self.resolve_categories(&items).await;
        Ok(CategoryGroup::group(items, &categories, category))
    }

    /// Alerts currently raised by the caller's items. Each is also published.
    pub async fn pending_alerts(&self, ctx: &RequestContext) -> AppResult<Vec<AlertEvent>> {
        let now = self.clock.now();
        let items = self.items.find_by_user(ctx.user_id, false).await?;

        let alerts: Vec<AlertEvent> = items
            .iter()
            .flat_map(|item| self.rules.evaluate(item, now))
            .collect();

        for alert in &alerts {
            self.alert(ctx, now, alert.clone());
        }
        debug!(user_id = %ctx.user_id, count = alerts.len(), "Pending alerts evaluated");
        Ok(alerts)
    }

    /// Look up the category of every distinct ingredient once.
    ///
    /// Unresolvable ingredients are logged and left out of the map.
    async fn resolve_categories(
        &self,
        items: &[FridgeItem],
    ) -> HashMap<IngredientId, IngredientCategory> {
        let distinct: HashSet<IngredientId> = items.iter().map(|i| i.ingredient_id).collect();
        let mut categories = HashMap::with_capacity(distinct.len());

        for ingredient_id in distinct {
            match self.catalog.find(ingredient_id).await {
                Ok(Some(ingredient)) => {
                    categories.insert(ingredient_id, ingredient.category);
                }
                Ok(None) => {
                    let err = AppError::ingredient_unresolved(format!(
                        "Ingredient {ingredient_id} is not in the catalog"
                    ));
                    warn!(ingredient_id = %ingredient_id, error = %err, "Ingredient unresolved");
                }
                Err(e) => {
                    warn!(
                        ingredient_id = %ingredient_id,
                        error = %e,
                        "Ingredient unresolved, catalog lookup failed"
                    );
                }
            }
        }
        categories
    }

    async fn save(&self, mut item: FridgeItem, now: DateTime<Utc>) -> AppResult<FridgeItem> {
        item.prepare_for_save(now);
        self.items.update(&item).await.inspect_err(|e| {
            if e.kind.is_retryable() {
                warn!(item_id = %item.id, version = item.version, "Concurrent fridge item update");
            }
        })
    }

    fn emit(&self, ctx: &RequestContext, now: DateTime<Utc>, event: FridgeEvent) {
        self.publisher
            .publish(DomainEvent::fridge(ctx.user_id, now, event));
    }

    fn alert(&self, ctx: &RequestContext, now: DateTime<Utc>, alert: AlertEvent) {
        self.publisher
            .publish(DomainEvent::alert(ctx.user_id, now, alert));
    }
}
