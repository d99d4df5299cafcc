//! Domain types for the rebalancing core.
//!
//! This module provides the building blocks of a portfolio:
//! - [`AssetClass`]: one investment bucket with a target weight and balance

mod asset;

pub use asset::AssetClass;
