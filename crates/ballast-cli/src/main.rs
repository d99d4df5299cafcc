//! Ballast CLI - contribution-only portfolio rebalancing.
//!
//! # Usage
//!
//! ```bash
//! # Split a $500 contribution across portfolio.json
//! ballast --contribution 500
//!
//! # Use a specific portfolio file
//! ballast --contribution 250 --file retirement.json
//!
//! # Machine-readable output
//! ballast --contribution 500 --format json
//! ```

use anyhow::Result;
use ballast_core::calculate_rebalance;
use clap::Parser;

mod cli;
mod error;
mod loader;
mod output;
mod report;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let portfolio = loader::load_portfolio(&cli.file)?;
    let allocations = calculate_rebalance(&portfolio, cli.contribution)?;
    report::render(&portfolio, cli.contribution, &allocations, cli.format)?;

    Ok(())
}
