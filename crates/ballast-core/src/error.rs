//! Error types for portfolio rebalancing.
//!
//! This module defines the error types used throughout the core crate.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for rebalancing operations.
pub type RebalanceResult<T> = Result<T, RebalanceError>;

/// Errors that can occur during portfolio construction or rebalancing.
#[derive(Error, Debug, Clone)]
pub enum RebalanceError {
    /// Target allocations do not sum to 100%.
    #[error("Portfolio target allocations must sum to 1.0 (100%), got {total_allocation}")]
    InvalidPortfolio {
        /// The actual sum of the target allocations.
        total_allocation: Decimal,
    },

    /// The contribution amount is negative.
    #[error("Contribution must be non-negative, got {amount}")]
    InvalidContribution {
        /// The rejected contribution amount.
        amount: Decimal,
    },

    /// A required field is absent from an asset entry.
    #[error("Missing required field '{field}' in asset entry {index}")]
    MissingField {
        /// The name of the missing field.
        field: String,
        /// Zero-based index of the asset entry.
        index: usize,
    },

    /// A field in an asset entry is present but unusable.
    #[error("Invalid field '{field}' in asset entry {index}: {reason}")]
    InvalidField {
        /// The name of the invalid field.
        field: String,
        /// Zero-based index of the asset entry.
        index: usize,
        /// The reason the value was rejected.
        reason: String,
    },

    /// The external representation is not shaped like a portfolio.
    #[error("Invalid portfolio source: {reason}")]
    InvalidSource {
        /// The reason the source was rejected.
        reason: String,
    },
}

impl RebalanceError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>, index: usize) -> Self {
        Self::MissingField {
            field: field.into(),
            index,
        }
    }

    /// Create an invalid field error.
    #[must_use]
    pub fn invalid_field(field: impl Into<String>, index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            index,
            reason: reason.into(),
        }
    }

    /// Create an invalid source error.
    #[must_use]
    pub fn invalid_source(reason: impl Into<String>) -> Self {
        Self::InvalidSource {
            reason: reason.into(),
        }
    }
}
