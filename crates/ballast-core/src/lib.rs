//! # Ballast Core
//!
//! Contribution-only portfolio rebalancing.
//!
//! This crate decides how to split a new cash contribution across the
//! asset classes of a portfolio so the portfolio moves toward its target
//! percentage allocations without selling anything.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: the engine is a stateless calculation with explicit inputs
//! - **Lazy validation**: a [`Portfolio`] may hold invalid targets;
//!   [`Portfolio::validate`] is a query and the engine gates on it first
//! - **Decimal arithmetic**: amounts are [`rust_decimal::Decimal`], rounded to
//!   cents only at the final step
//! - **Contribution-only**: overweight assets simply receive nothing; a sell is
//!   never recommended
//!
//! ## Quick Start
//!
//! ```rust
//! use ballast_core::prelude::*;
//!
//! let portfolio = Portfolio::new(vec![
//!     AssetClass::new("US Equities", dec!(0.6), dec!(4_000)),
//!     AssetClass::new("Bonds", dec!(0.4), dec!(1_000)),
//! ]);
//!
//! let allocations = calculate_rebalance(&portfolio, dec!(500))?;
//! assert_eq!(allocations["Bonds"], dec!(500.00));
//! assert_eq!(allocations["US Equities"], dec!(0));
//! # Ok::<(), RebalanceError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`engine`] - The rebalance calculation
//! - [`error`] - Error and result types
//! - [`portfolio`] - Portfolio and builder types
//! - [`types`] - Core types (AssetClass)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod engine;
pub mod error;
pub mod portfolio;
pub mod types;

// Re-export error types at crate root
pub use error::{RebalanceError, RebalanceResult};

// Re-export main types
pub use types::AssetClass;

// Re-export portfolio types
pub use portfolio::{Portfolio, PortfolioBuilder};

// Re-export the engine entry point
pub use engine::calculate_rebalance;

/// Prelude module for convenient imports.
///
/// ```rust
/// use ballast_core::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{RebalanceError, RebalanceResult};

    // Core types
    pub use crate::types::AssetClass;

    // Portfolio
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    // Engine
    pub use crate::engine::calculate_rebalance;

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
