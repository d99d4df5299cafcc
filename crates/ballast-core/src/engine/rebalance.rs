//! Contribution allocation calculation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{RebalanceError, RebalanceResult};
use crate::portfolio::Portfolio;

/// Decimal places of returned allocations (currency cents).
const CENT_PRECISION: u32 = 2;

/// Calculates how to split `contribution` across the portfolio's asset
/// classes so each moves toward its target allocation.
///
/// The calculation is a pure function of its inputs:
///
/// 1. The hypothetical post-contribution total is the current total value
///    plus the contribution.
/// 2. Each asset's dollar gap to its target share of that total is
///    computed and clamped at zero. An asset at or above target receives
///    nothing: money is only ever added, never moved out.
/// 3. The contribution is split across assets in proportion to their gaps
///    and rounded to cents, so the sum of allocations can differ from the
///    contribution by up to half a cent per asset.
///
/// When every asset is at or above target (total gap zero) the result
/// maps every asset name to zero; there is no fallback to distributing
/// by target weight. Likewise, when the contribution exceeds the total
/// gap, each gap is over-funded in proportion to its size rather than
/// the surplus being spread by target weight.
///
/// The returned map is keyed by asset name; duplicate names collapse to
/// a single entry (last wins). Map order is alphabetical, so render in
/// `portfolio.assets` order when declaration order matters.
///
/// # Errors
///
/// - [`RebalanceError::InvalidPortfolio`] when target allocations do not
///   sum to 1.0 within tolerance. This gate runs before anything else.
/// - [`RebalanceError::InvalidContribution`] when `contribution` is
///   negative. Zero is allowed and yields an all-zero result.
///
/// # Example
///
/// ```rust
/// use ballast_core::prelude::*;
///
/// let portfolio = Portfolio::new(vec![
///     AssetClass::new("US Equities", dec!(0.6), dec!(4_000)),
///     AssetClass::new("Bonds", dec!(0.4), dec!(1_000)),
/// ]);
///
/// let allocations = calculate_rebalance(&portfolio, dec!(500))?;
/// assert_eq!(allocations["Bonds"], dec!(500.00));
/// assert_eq!(allocations["US Equities"], dec!(0));
/// # Ok::<(), RebalanceError>(())
/// ```
pub fn calculate_rebalance(
    portfolio: &Portfolio,
    contribution: Decimal,
) -> RebalanceResult<BTreeMap<String, Decimal>> {
    if !portfolio.validate() {
        return Err(RebalanceError::InvalidPortfolio {
            total_allocation: portfolio.total_target_allocation(),
        });
    }

    if contribution < Decimal::ZERO {
        return Err(RebalanceError::InvalidContribution {
            amount: contribution,
        });
    }

    let new_total_value = portfolio.total_value() + contribution;

    // Dollar shortfall of each asset against its target share of the
    // post-contribution total, clamped at zero. Duplicate names must
    // collapse here, before the total gap is summed, so an overwritten
    // entry's gap cannot inflate the denominator.
    let mut gaps: BTreeMap<&str, Decimal> = BTreeMap::new();
    for asset in &portfolio.assets {
        let target_amount = new_total_value * asset.target_allocation;
        let gap = target_amount - asset.current_balance;
        gaps.insert(asset.name.as_str(), gap.max(Decimal::ZERO));
    }

    let total_gap: Decimal = gaps.values().sum();

    // Everything at or above target: nothing to allocate, and no division
    // by zero below.
    if total_gap.is_zero() {
        return Ok(gaps
            .into_keys()
            .map(|name| (name.to_string(), Decimal::ZERO))
            .collect());
    }

    let scaling_factor = contribution / total_gap;

    Ok(gaps
        .into_iter()
        .map(|(name, gap)| {
            let allocation = (gap * scaling_factor).round_dp(CENT_PRECISION);
            (name.to_string(), allocation)
        })
        .collect())
}
