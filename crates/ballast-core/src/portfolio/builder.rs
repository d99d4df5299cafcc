//! Portfolio builder.

use crate::types::AssetClass;

use super::Portfolio;

/// Builder for constructing a [`Portfolio`] incrementally.
///
/// Asset classes can be staged one at a time or in batches. `build` never
/// fails: the 100%-sum invariant is checked lazily by
/// [`Portfolio::validate`] rather than enforced at construction, so a
/// half-assembled portfolio is a legal value.
///
/// # Example
///
/// ```rust
/// use ballast_core::{AssetClass, Portfolio};
/// use rust_decimal_macros::dec;
///
/// let portfolio = Portfolio::builder()
///     .add_asset(AssetClass::new("Stocks", dec!(0.7), dec!(7_000)))
///     .add_asset(AssetClass::new("Bonds", dec!(0.3), dec!(2_000)))
///     .build();
///
/// assert_eq!(portfolio.asset_count(), 2);
/// assert!(portfolio.validate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    assets: Vec<AssetClass>,
}

impl PortfolioBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single asset class.
    #[must_use]
    pub fn add_asset(mut self, asset: AssetClass) -> Self {
        self.assets.push(asset);
        self
    }

    /// Adds multiple asset classes.
    #[must_use]
    pub fn add_assets(mut self, assets: impl IntoIterator<Item = AssetClass>) -> Self {
        self.assets.extend(assets);
        self
    }

    /// Builds the portfolio.
    #[must_use]
    pub fn build(self) -> Portfolio {
        Portfolio::new(self.assets)
    }
}
