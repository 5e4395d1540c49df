//! Fridge item repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use frescipe_core::error::{AppError, ErrorKind};
use frescipe_core::result::AppResult;
use frescipe_core::types::{FridgeItemId, IngredientId, PageRequest, PageResponse, UserId};
use frescipe_entity::fridge::{
    FridgeItem, NotificationSettings, PurchaseInfo, UsageRecord,
};

use crate::store::FridgeItemStore;

/// Row shape of `fridge_items`. Enums are stored as their wire strings and
/// nested values as JSONB.
#[derive(Debug, FromRow)]
struct FridgeItemRow {
    id: FridgeItemId,
    user_id: UserId,
    ingredient_id: IngredientId,
    ingredient_name: String,
    quantity: f64,
    original_quantity: f64,
    unit: String,
    storage_method: String,
    location: Option<String>,
    container: Option<String>,
    purchase_date: DateTime<Utc>,
    expiry_date: Option<DateTime<Utc>>,
    opened_date: Option<DateTime<Utc>>,
    estimated_expiry_date: Option<DateTime<Utc>>,
    freshness_score: i16,
    freshness_status: String,
    is_opened: bool,
    is_consumed: bool,
    purchase_info: Option<Json<PurchaseInfo>>,
    usage_history: Json<Vec<UsageRecord>>,
    notifications: Json<NotificationSettings>,
    notes: Option<String>,
    tags: Vec<String>,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    last_checked_at: Option<DateTime<Utc>>,
    version: i64,
}

impl TryFrom<FridgeItemRow> for FridgeItem {
    type Error = AppError;

    fn try_from(row: FridgeItemRow) -> Result<Self, Self::Error> {
        let score = u8::try_from(row.freshness_score)
            .ok()
            .filter(|s| *s <= 100)
            .ok_or_else(|| {
                AppError::database(format!(
                    "Stored freshness score {} out of range for item {}",
                    row.freshness_score, row.id
                ))
            })?;

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            ingredient_id: row.ingredient_id,
            ingredient_name: row.ingredient_name,
            quantity: row.quantity,
            original_quantity: row.original_quantity,
            unit: row.unit.parse()?,
            storage_method: row.storage_method.parse()?,
            location: row.location,
            container: row.container,
            purchase_date: row.purchase_date,
            expiry_date: row.expiry_date,
            opened_date: row.opened_date,
            estimated_expiry_date: row.estimated_expiry_date,
            freshness_score: score,
            freshness_status: row.freshness_status.parse()?,
            is_opened: row.is_opened,
            is_consumed: row.is_consumed,
            purchase_info: row.purchase_info.map(|Json(info)| info),
            usage_history: row.usage_history.0,
            notifications: row.notifications.0,
            notes: row.notes,
            tags: row.tags,
            images: row.images,
            created_at: row.created_at,
            updated_at: row.updated_at,
            last_checked_at: row.last_checked_at,
            version: row.version,
        })
    }
}

fn into_items(rows: Vec<FridgeItemRow>) -> AppResult<Vec<FridgeItem>> {
    rows.into_iter().map(FridgeItem::try_from).collect()
}

/// PostgreSQL-backed [`FridgeItemStore`].
#[derive(Debug, Clone)]
pub struct FridgeItemRepository {
    pool: PgPool,
}

impl FridgeItemRepository {
    /// Create a new fridge item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: FridgeItemId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM fridge_items WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check item", e))
    }
}

#[async_trait]
impl FridgeItemStore for FridgeItemRepository {
    async fn insert(&self, item: &FridgeItem) -> AppResult<FridgeItem> {
        let row = sqlx::query_as::<_, FridgeItemRow>(
            "INSERT INTO fridge_items (id, user_id, ingredient_id, ingredient_name, quantity, \
             original_quantity, unit, storage_method, location, container, purchase_date, \
             expiry_date, opened_date, estimated_expiry_date, freshness_score, freshness_status, \
             is_opened, is_consumed, purchase_info, usage_history, notifications, notes, tags, \
             images, created_at, updated_at, last_checked_at, version) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
             $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28) RETURNING *",
        )
        .bind(item.id)
        .bind(item.user_id)
        .bind(item.ingredient_id)
        .bind(&item.ingredient_name)
        .bind(item.quantity)
        .bind(item.original_quantity)
        .bind(item.unit.as_str())
        .bind(item.storage_method.as_str())
        .bind(&item.location)
        .bind(&item.container)
        .bind(item.purchase_date)
        .bind(item.expiry_date)
        .bind(item.opened_date)
        .bind(item.estimated_expiry_date)
        .bind(i16::from(item.freshness_score))
        .bind(item.freshness_status.as_str())
        .bind(item.is_opened)
        .bind(item.is_consumed)
        .bind(item.purchase_info.as_ref().map(Json))
        .bind(Json(&item.usage_history))
        .bind(Json(&item.notifications))
        .bind(&item.notes)
        .bind(&item.tags)
        .bind(&item.images)
        .bind(item.created_at)
        .bind(item.updated_at)
        .bind(item.last_checked_at)
        .bind(item.version)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert fridge item", e))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: FridgeItemId) -> AppResult<Option<FridgeItem>> {
        sqlx::query_as::<_, FridgeItemRow>("SELECT * FROM fridge_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find fridge item", e))?
            .map(FridgeItem::try_from)
            .transpose()
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
        include_consumed: bool,
    ) -> AppResult<Vec<FridgeItem>> {
        let rows = sqlx::query_as::<_, FridgeItemRow>(
            "SELECT * FROM fridge_items WHERE user_id = $1 AND ($2 OR is_consumed = FALSE) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(include_consumed)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list fridge items", e))?;

        into_items(rows)
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
        include_consumed: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<FridgeItem>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM fridge_items WHERE user_id = $1 AND ($2 OR is_consumed = FALSE)",
        )
        .bind(user_id)
        .bind(include_consumed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count fridge items", e))?;

        let rows = sqlx::query_as::<_, FridgeItemRow>(
            "SELECT * FROM fridge_items WHERE user_id = $1 AND ($2 OR is_consumed = FALSE) \
             ORDER BY created_at DESC, id LIMIT $3 OFFSET $4",
        )
        .bind(user_id)
        .bind(include_consumed)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list fridge items", e))?;

        Ok(PageResponse::new(
            into_items(rows)?,
            page.page,
            page.page_size,
            total.max(0) as u64,
        ))
    }

    async fn find_expiring(
        &self,
        user_id: UserId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> AppResult<Vec<FridgeItem>> {
        let rows = sqlx::query_as::<_, FridgeItemRow>(
            "SELECT * FROM fridge_items WHERE user_id = $1 AND is_consumed = FALSE \
             AND expiry_date >= $2 AND expiry_date <= $3 ORDER BY expiry_date ASC",
        )
        .bind(user_id)
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find expiring items", e)
        })?;

        into_items(rows)
    }

    async fn update(&self, item: &FridgeItem) -> AppResult<FridgeItem> {
        let row = sqlx::query_as::<_, FridgeItemRow>(
            "UPDATE fridge_items SET quantity = $3, storage_method = $4, location = $5, \
             container = $6, expiry_date = $7, opened_date = $8, estimated_expiry_date = $9, \
             freshness_score = $10, freshness_status = $11, is_opened = $12, is_consumed = $13, \
             purchase_info = $14, usage_history = $15, notifications = $16, notes = $17, \
             tags = $18, images = $19, updated_at = $20, last_checked_at = $21, \
             version = version + 1 \
             WHERE id = $1 AND version = $2 RETURNING *",
        )
        .bind(item.id)
        .bind(item.version)
        .bind(item.quantity)
        .bind(item.storage_method.as_str())
        .bind(&item.location)
        .bind(&item.container)
        .bind(item.expiry_date)
        .bind(item.opened_date)
        .bind(item.estimated_expiry_date)
        .bind(i16::from(item.freshness_score))
        .bind(item.freshness_status.as_str())
        .bind(item.is_opened)
        .bind(item.is_consumed)
        .bind(item.purchase_info.as_ref().map(Json))
        .bind(Json(&item.usage_history))
        .bind(Json(&item.notifications))
        .bind(&item.notes)
        .bind(&item.tags)
        .bind(&item.images)
        .bind(item.updated_at)
        .bind(item.last_checked_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update fridge item", e))?;

        match row {
            Some(row) => row.try_into(),
            None if self.exists(item.id).await? => {
                debug!(item_id = %item.id, version = item.version, "Stale fridge item version");
                Err(AppError::persistence_conflict(format!(
                    "Fridge item {} was modified concurrently",
                    item.id
                )))
            }
            None => Err(AppError::not_found(format!("Fridge item {} not found", item.id))),
        }
    }

    async fn delete(&self, id: FridgeItemId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM fridge_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete fridge item", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
