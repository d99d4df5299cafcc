//! Core portfolio type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RebalanceError, RebalanceResult};
use crate::types::AssetClass;

/// The full set of asset classes under management.
///
/// Asset order is preserved for display purposes only; it carries no
/// weight in the rebalance calculation. A portfolio may exist in an
/// invalid state (targets not summing to 100%): validity is a lazy query
/// through [`Portfolio::validate`], and the engine refuses an invalid
/// portfolio before computing anything. This keeps staged construction
/// cheap, whether through the builder or from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    /// Asset classes, in declaration order.
    pub assets: Vec<AssetClass>,
}

impl Portfolio {
    /// Creates a portfolio from a list of asset classes.
    #[must_use]
    pub fn new(assets: Vec<AssetClass>) -> Self {
        Self { assets }
    }

    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder() -> super::PortfolioBuilder {
        super::PortfolioBuilder::new()
    }

    /// Returns the number of asset classes.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the portfolio has no asset classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Returns the total value across all asset classes.
    ///
    /// Computed on demand, never cached. Zero for an empty portfolio.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.assets.iter().map(|a| a.current_balance).sum()
    }

    /// Returns the sum of all target allocations.
    #[must_use]
    pub fn total_target_allocation(&self) -> Decimal {
        self.assets.iter().map(|a| a.target_allocation).sum()
    }

    /// Returns true iff the target allocations sum to 100%.
    ///
    /// The sum is rounded to 4 decimal places before comparing against
    /// 1.0, so targets entered as repeating fractions (thirds, sevenths)
    /// still validate while a genuine mis-specification does not. Pure
    /// query: no error, no side effects.
    #[must_use]
    pub fn validate(&self) -> bool {
        self.total_target_allocation().round_dp(4) == Decimal::ONE
    }

    /// Builds a portfolio from a deserialized JSON document.
    ///
    /// The document is an object with an `assets` array; each entry is an
    /// object carrying `name`, `target_allocation` and `current_balance`.
    /// A document without an `assets` key yields an empty portfolio. No
    /// numeric range checking happens here; the 100%-sum invariant stays
    /// deferred to [`Portfolio::validate`].
    ///
    /// # Errors
    ///
    /// - [`RebalanceError::InvalidSource`] when `assets` is not an array
    ///   or an entry is not an object
    /// - [`RebalanceError::MissingField`] when a required field is absent
    ///   from an entry
    /// - [`RebalanceError::InvalidField`] when a field has the wrong type
    ///   or its number cannot be represented
    pub fn from_value(value: &Value) -> RebalanceResult<Self> {
        let entries = match value.get("assets") {
            None => return Ok(Self::default()),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(RebalanceError::invalid_source(format!(
                    "'assets' must be an array, got {}",
                    json_kind(other)
                )))
            }
        };

        let mut assets = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if !entry.is_object() {
                return Err(RebalanceError::invalid_source(format!(
                    "asset entry {index} must be an object, got {}",
                    json_kind(entry)
                )));
            }
            let name = string_field(entry, "name", index)?;
            let target_allocation = decimal_field(entry, "target_allocation", index)?;
            let current_balance = decimal_field(entry, "current_balance", index)?;
            assets.push(AssetClass::new(name, target_allocation, current_balance));
        }

        Ok(Self::new(assets))
    }
}

/// Extracts a required string field from an asset entry.
fn string_field(entry: &Value, field: &'static str, index: usize) -> RebalanceResult<String> {
    match entry.get(field) {
        None => Err(RebalanceError::missing_field(field, index)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(RebalanceError::invalid_field(
            field,
            index,
            format!("expected a string, got {}", json_kind(other)),
        )),
    }
}

/// Extracts a required numeric field from an asset entry as an exact decimal.
fn decimal_field(entry: &Value, field: &'static str, index: usize) -> RebalanceResult<Decimal> {
    let raw = entry
        .get(field)
        .ok_or_else(|| RebalanceError::missing_field(field, index))?;
    match raw {
        // Parse the number's decimal text so 0.1 stays exactly 0.1
        // instead of picking up binary float noise.
        Value::Number(n) => {
            let text = n.to_string();
            text.parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(&text))
                .map_err(|_| RebalanceError::invalid_field(field, index, "number out of range"))
        }
        other => Err(RebalanceError::invalid_field(
            field,
            index,
            format!("expected a number, got {}", json_kind(other)),
        )),
    }
}

/// Human-readable JSON value kind for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
