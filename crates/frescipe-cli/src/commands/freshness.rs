//! Offline freshness calculator.

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use frescipe_core::error::AppError;
use frescipe_entity::fridge::{Freshness, FreshnessInputs};

use crate::output::{self, OutputFormat};

/// Arguments for the freshness command
#[derive(Debug, Args)]
pub struct FreshnessArgs {
    /// Purchase time (RFC 3339)
    #[arg(long)]
    pub purchased: DateTime<Utc>,

    /// Printed expiry (RFC 3339)
    #[arg(long)]
    pub expires: Option<DateTime<Utc>>,

    /// When the item was opened (RFC 3339)
    #[arg(long)]
    pub opened: Option<DateTime<Utc>>,

    /// Evaluation instant; defaults to the current time
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct FreshnessReport {
    evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    freshness: Freshness,
}

/// Execute the freshness command
pub fn execute(args: &FreshnessArgs, format: OutputFormat) -> Result<(), AppError> {
    let now = args.now.unwrap_or_else(Utc::now);
    if args.opened.is_some_and(|opened| opened < args.purchased) {
        return Err(AppError::validation("--opened must not precede --purchased"));
    }

    let freshness = FreshnessInputs {
        purchase_date: args.purchased,
        expiry_date: args.expires,
        opened_date: args.opened,
    }
    .evaluate(now);

    match format {
        OutputFormat::Json => output::print_json(&FreshnessReport {
            evaluated_at: now,
            freshness,
        }),
        OutputFormat::Table => {
            output::print_kv("Evaluated at", now.to_rfc3339());
            output::print_kv("Score", freshness.score);
            output::print_kv("Status", freshness.status);
        }
    }
    Ok(())
}
