//! Rebalance report rendering.

use std::collections::BTreeMap;

use ballast_core::Portfolio;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::output::{format_money, print_header, print_success};

/// One asset line of the table report.
#[derive(Debug, Tabled)]
struct AllocationRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Current Balance")]
    current_balance: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Contribution")]
    contribution: String,
}

/// Machine-readable report for JSON output.
#[derive(Debug, Serialize)]
struct RebalanceReport<'a> {
    current_value: Decimal,
    contribution: Decimal,
    new_total_value: Decimal,
    allocations: &'a BTreeMap<String, Decimal>,
}

/// One asset line of the CSV report.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    asset: &'a str,
    allocation: Decimal,
}

/// Renders the rebalance result in the requested format.
///
/// Table and CSV output list assets in portfolio declaration order; the
/// JSON object carries the allocation map keyed by asset name.
pub fn render(
    portfolio: &Portfolio,
    contribution: Decimal,
    allocations: &BTreeMap<String, Decimal>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => render_table(portfolio, contribution, allocations),
        OutputFormat::Json => render_json(portfolio, contribution, allocations),
        OutputFormat::Csv => render_csv(portfolio, allocations),
    }
}

fn render_table(
    portfolio: &Portfolio,
    contribution: Decimal,
    allocations: &BTreeMap<String, Decimal>,
) -> anyhow::Result<()> {
    print_header("Portfolio Rebalance Report");
    println!("Current value:   {}", format_money(portfolio.total_value()));
    println!("Contribution:    {}", format_money(contribution));
    println!(
        "Projected total: {}",
        format_money(portfolio.total_value() + contribution)
    );
    println!();

    let rows: Vec<AllocationRow> = portfolio
        .assets
        .iter()
        .map(|asset| AllocationRow {
            asset: asset.name.clone(),
            current_balance: format_money(asset.current_balance),
            target: format_percent(asset.target_allocation),
            contribution: format_money(allocation_for(allocations, &asset.name)),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();
    println!("{table}");

    print_success("Rebalancing complete.");
    Ok(())
}

fn render_json(
    portfolio: &Portfolio,
    contribution: Decimal,
    allocations: &BTreeMap<String, Decimal>,
) -> anyhow::Result<()> {
    let report = RebalanceReport {
        current_value: portfolio.total_value(),
        contribution,
        new_total_value: portfolio.total_value() + contribution,
        allocations,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn render_csv(
    portfolio: &Portfolio,
    allocations: &BTreeMap<String, Decimal>,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for asset in &portfolio.assets {
        wtr.serialize(CsvRow {
            asset: &asset.name,
            allocation: allocation_for(allocations, &asset.name),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Looks up an asset's allocation, defaulting to zero.
fn allocation_for(allocations: &BTreeMap<String, Decimal>, name: &str) -> Decimal {
    allocations.get(name).copied().unwrap_or(Decimal::ZERO)
}

/// Formats a target weight as a percentage string.
fn format_percent(value: Decimal) -> String {
    format!("{}%", (value * dec!(100)).normalize())
}
