//! Fixed tables shared by the allocator.

use crate::allocation::TierName;

/// Minor currency units per major unit (pence per pound).
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// Most tiers a single allocation can open.
pub const MAX_TIERS: usize = 5;

/// Tier vocabulary in rank order, highest first.
pub const TIER_NAMES: [TierName; MAX_TIERS] = [
    TierName::Diamond,
    TierName::Platinum,
    TierName::Gold,
    TierName::Silver,
    TierName::Bronze,
];

/// Largest pool, in minor units, that stays exact through `f64` arithmetic (2^53).
pub const MAX_POOL_MINOR_UNITS: u64 = 1 << 53;
