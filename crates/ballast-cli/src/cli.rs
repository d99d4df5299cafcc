//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;

use crate::loader::DEFAULT_PORTFOLIO_PATH;

/// Ballast - contribution-only portfolio rebalancing CLI
#[derive(Parser)]
#[command(name = "ballast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cash amount to contribute toward rebalancing
    // Negative values parse as amounts; the engine rejects them.
    #[arg(short, long, allow_negative_numbers = true)]
    pub contribution: Decimal,

    /// Path to the portfolio JSON file
    #[arg(short, long, default_value = DEFAULT_PORTFOLIO_PATH)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with a summary table
    #[default]
    Table,
    /// JSON object with totals and allocations
    Json,
    /// CSV rows of asset name and allocation
    Csv,
}
