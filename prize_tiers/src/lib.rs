//! # Prize Tiers
//!
//! Splits a prize pool and a number of winners across up to five ranked
//! tiers (Diamond, Platinum, Gold, Silver, Bronze) without losing or
//! double-counting a single winner or penny.
//!
//! Winner counts are apportioned with the largest-remainder method after
//! every tier is guaranteed one winner. Money is converted once to integer
//! minor units and stays there; each tier's per-player payout is a whole
//! number of pence and anything that cannot be split evenly is reported as
//! `leftover` instead of being dropped.
//!
//! ## Core Modules
//!
//! - [`allocation`]: configuration, the engine, apportionment and weights
//! - [`constants`]: tier vocabulary and currency scale
//!
//! ## Example
//!
//! ```
//! use prize_tiers::{compute, AllocationConfig};
//!
//! let allocation = compute(&AllocationConfig::default()).unwrap();
//! assert_eq!(allocation.total_winners, 10);
//! ```

/// Allocation engine and its data model.
pub mod allocation;
pub use allocation::{
    Allocation, AllocationConfig, AllocationError, AllocationResult, DistributionStyle,
    ErrorReport, Tier, TierName, WinnerMode, apportion, compute,
};

pub mod constants;
pub use constants::{MAX_POOL_MINOR_UNITS, MAX_TIERS, MINOR_UNITS_PER_MAJOR, TIER_NAMES};
