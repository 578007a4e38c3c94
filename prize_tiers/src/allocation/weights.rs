//! Per-tier weights for the player and prize passes.
//!
//! Player weights grow toward the lower tiers (more bulk winners at the
//! bottom); prize weights grow toward the top (the highest tier pays most
//! per player). Index 0 is always the highest-ranked tier.

use super::models::DistributionStyle;

/// `base ^ exponent` where an exponent of 0 yields 1 for every base, 0 included.
pub fn geometric(base: f64, exponent: usize) -> f64 {
    if exponent == 0 {
        return 1.0;
    }
    base.powi(exponent as i32)
}

/// Player-count weight for each of `num_tiers` tiers.
pub fn player_weights(style: DistributionStyle, mult: f64, num_tiers: usize) -> Vec<f64> {
    (0..num_tiers)
        .map(|i| match style {
            DistributionStyle::Equal => 1.0,
            DistributionStyle::Linear => (i + 1) as f64,
            DistributionStyle::Multiplier => geometric(mult, i),
        })
        .collect()
}

/// Per-player prize weight for each of `num_tiers` tiers.
pub fn prize_weights(style: DistributionStyle, mult: f64, num_tiers: usize) -> Vec<f64> {
    (0..num_tiers)
        .map(|i| match style {
            DistributionStyle::Equal => 1.0,
            DistributionStyle::Linear => (num_tiers - i) as f64,
            DistributionStyle::Multiplier => geometric(mult, num_tiers - 1 - i),
        })
        .collect()
}
