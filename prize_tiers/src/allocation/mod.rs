//! Tiered prize allocation.
//!
//! This module provides:
//! - The configuration record and result types
//! - Per-tier weighting for the player and prize passes
//! - Largest-remainder apportionment of integer totals
//! - The allocation engine that ties them together
//!
//! ## Example
//!
//! ```
//! use prize_tiers::allocation::{compute, AllocationConfig, DistributionStyle, WinnerMode};
//!
//! let config = AllocationConfig::new(100.0, 10)
//!     .with_winners(WinnerMode::PercentOfPlayers, 100.0)
//!     .with_tiers(3)
//!     .with_prize_style(DistributionStyle::Linear, 1.0);
//!
//! let allocation = compute(&config).unwrap();
//! assert_eq!(allocation.total_winners, 10);
//! assert_eq!(
//!     allocation.distributed_minor() + allocation.leftover,
//!     allocation.total_minor_units
//! );
//! ```

pub mod apportion;
pub mod engine;
pub mod errors;
pub mod models;
pub mod weights;

pub use apportion::apportion;
pub use engine::{
    PrizeSplit, active_tier_count, compute, derive_total_winners, distribute_players,
    distribute_prize, to_minor_units,
};
pub use errors::{AllocationError, AllocationResult, ErrorReport};
pub use models::{
    Allocation, AllocationConfig, DistributionStyle, ParseStyleError, Tier, TierName, WinnerMode,
};
