//! Unit conversion command.

use clap::Args;
use serde::Serialize;

use frescipe_core::error::AppError;
use frescipe_entity::ingredient::{MeasurementUnit, convert};

use crate::output::{self, OutputFormat};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Amount to convert
    pub amount: f64,
    /// Source unit code (e.g. `kg`, `cup`)
    pub from: MeasurementUnit,
    /// Target unit code
    pub to: MeasurementUnit,
}

#[derive(Debug, Serialize)]
struct Conversion {
    amount: f64,
    from: MeasurementUnit,
    to: MeasurementUnit,
    result: f64,
}

/// Execute the convert command
pub fn execute(args: &ConvertArgs, format: OutputFormat) -> Result<(), AppError> {
    let result = convert(args.amount, args.from, args.to)?;

    match format {
        OutputFormat::Json => output::print_json(&Conversion {
            amount: args.amount,
            from: args.from,
            to: args.to,
            result,
        }),
        OutputFormat::Table => println!("{} {} = {} {}", args.amount, args.from, result, args.to),
    }
    Ok(())
}
