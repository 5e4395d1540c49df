//! Read-only fridge inspection commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use frescipe_core::error::AppError;
use frescipe_core::types::UserId;
use frescipe_entity::fridge::FridgeItem;
use frescipe_service::RequestContext;

use crate::output::{self, OutputFormat};

/// Arguments for the summary command
#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Owner of the fridge
    #[arg(short, long)]
    pub user: UserId,
}

/// Arguments for the expiring command
#[derive(Debug, Args)]
pub struct ExpiringArgs {
    /// Owner of the fridge
    #[arg(short, long)]
    pub user: UserId,

    /// Window in days; defaults to the configured window
    #[arg(short, long)]
    pub days: Option<u32>,
}

/// Item display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    id: String,
    ingredient: String,
    quantity: String,
    expires: String,
    freshness: String,
}

impl From<&FridgeItem> for ItemRow {
    fn from(item: &FridgeItem) -> Self {
        Self {
            id: item.id.to_string(),
            ingredient: item.ingredient_name.clone(),
            quantity: format!("{} {}", item.quantity, item.unit),
            expires: item
                .expiry_date
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            freshness: format!("{} ({})", item.freshness_score, item.freshness_status),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct CountRow {
    group: String,
    items: u64,
}

/// Execute the summary command
pub async fn summary(
    args: &SummaryArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let service = super::fridge_service(&config, &db);

    let summary = service.summary(&RequestContext::new(args.user)).await?;
    db.close().await;

    if format == OutputFormat::Json {
        output::print_json(&summary);
        return Ok(());
    }

    output::print_kv("User", summary.user_id);
    output::print_kv("Items", summary.total_items);
    output::print_kv("Expiring soon", summary.expiring_soon_count);
    output::print_kv("Expired", summary.expired_count);
    output::print_kv("Low quantity", summary.low_quantity_count);
    output::print_kv("Uncategorized", summary.unresolved_items);
    output::print_kv("Estimated value", format!("{:.2}", summary.total_value));

    let rows: Vec<CountRow> = summary
        .categories
        .iter()
        .map(|(category, count)| CountRow {
            group: category.to_string(),
            items: *count,
        })
        .chain(summary.freshness_breakdown.iter().map(|(status, count)| CountRow {
            group: format!("freshness: {status}"),
            items: *count,
        }))
        .collect();
    println!();
    output::print_list(&rows, format);
    Ok(())
}

/// Execute the expiring command
pub async fn expiring(
    args: &ExpiringArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let service = super::fridge_service(&config, &db);

    let items = service
        .expiring_items(&RequestContext::new(args.user), args.days, true)
        .await?;
    db.close().await;

    let rows: Vec<ItemRow> = items.iter().map(ItemRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
