//! The rebalancing engine.
//!
//! A single pure operation, [`calculate_rebalance`], maps a portfolio and
//! a cash contribution to per-asset allocation amounts. No I/O, no state.

mod rebalance;

pub use rebalance::calculate_rebalance;
