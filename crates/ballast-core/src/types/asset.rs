//! Asset class representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single investment bucket within a portfolio.
///
/// Carries the bucket's target share of total portfolio value and the
/// amount currently held in it. No range checking happens at construction:
/// the 100%-sum invariant across a whole portfolio is checked lazily by
/// [`Portfolio::validate`](crate::Portfolio::validate), which the engine
/// consults before calculating anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetClass {
    /// Display name, used as the key of the engine's output mapping.
    ///
    /// Uniqueness within a portfolio is not enforced; duplicate names
    /// collide silently and the last entry wins.
    pub name: String,

    /// Desired fraction of total portfolio value, e.g. 0.60 for 60%.
    pub target_allocation: Decimal,

    /// Amount currently held in this asset class.
    pub current_balance: Decimal,
}

impl AssetClass {
    /// Creates a new asset class.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the asset class
    /// * `target_allocation` - Desired fraction of total value, as a decimal
    /// * `current_balance` - Amount currently held
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        target_allocation: Decimal,
        current_balance: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            target_allocation,
            current_balance,
        }
    }
}
