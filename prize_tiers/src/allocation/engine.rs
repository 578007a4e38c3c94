//! Allocation engine: turns an [`AllocationConfig`] into an [`Allocation`].
//!
//! The computation runs in five steps:
//! 1. Validate the pool, the player count and any multiplier in use.
//! 2. Derive the winner count, clamped into `1..=players`.
//! 3. Open `min(tiers_requested, winners)` tiers.
//! 4. Give every tier one winner, then apportion the rest by player weight.
//! 5. Convert the pool to minor units and pay each tier a whole number of
//!    units per player, reporting whatever cannot be split as leftover.

use super::apportion::apportion;
use super::errors::{AllocationError, AllocationResult};
use super::models::{Allocation, AllocationConfig, DistributionStyle, Tier, WinnerMode};
use super::weights::{player_weights, prize_weights};
use crate::constants::{MAX_POOL_MINOR_UNITS, MAX_TIERS, MINOR_UNITS_PER_MAJOR, TIER_NAMES};

/// Per-player payouts in minor units plus the unassigned remainder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeSplit {
    pub payouts_minor: Vec<u64>,
    pub leftover: u64,
}

/// Run a full allocation.
///
/// # Errors
///
/// * [`AllocationError::InvalidInput`] - non-positive or non-finite prize, a
///   prize above `MAX_POOL_MINOR_UNITS` pence, zero players, or an unusable
///   multiplier for a multiplier style
/// * [`AllocationError::ZeroShares`] - weighted shares do not sum to a
///   positive finite value
///
/// # Examples
///
/// ```
/// use prize_tiers::allocation::{compute, AllocationConfig, WinnerMode};
///
/// let config = AllocationConfig::new(1000.0, 100)
///     .with_winners(WinnerMode::FixedCount, 10.0)
///     .with_tiers(5);
/// let allocation = compute(&config).unwrap();
///
/// assert_eq!(allocation.total_winners, 10);
/// assert!(allocation.tiers.iter().all(|t| t.count == 2 && t.payout_minor == 10_000));
/// assert_eq!(allocation.leftover, 0);
/// ```
pub fn compute(config: &AllocationConfig) -> AllocationResult<Allocation> {
    validate(config)?;

    let total_winners = derive_total_winners(config);
    let num_tiers = active_tier_count(config.tiers_requested, total_winners);

    let player_w = player_weights(config.player_style, config.player_mult, num_tiers);
    ensure_finite(&player_w, "player_mult")?;
    let counts = distribute_players(total_winners, &player_w)?;

    let prize_w = prize_weights(config.prize_style, config.prize_mult, num_tiers);
    ensure_finite(&prize_w, "prize_mult")?;
    let total_minor_units = to_minor_units(config.prize);
    let split = distribute_prize(total_minor_units, &counts, &prize_w)?;

    let tiers: Vec<Tier> = TIER_NAMES
        .iter()
        .zip(counts)
        .zip(prize_w)
        .zip(split.payouts_minor)
        .map(|(((&name, count), weight), payout_minor)| Tier {
            name,
            count,
            weight,
            payout: payout_minor as f64 / MINOR_UNITS_PER_MAJOR as f64,
            payout_minor,
        })
        .collect();

    log::debug!(
        "Allocated {} minor units across {} winners in {} tiers, {} left over",
        total_minor_units,
        total_winners,
        tiers.len(),
        split.leftover
    );

    Ok(Allocation {
        prize: config.prize,
        players: config.players,
        total_winners,
        total_minor_units,
        tiers,
        leftover: split.leftover,
    })
}

fn validate(config: &AllocationConfig) -> AllocationResult<()> {
    if !config.prize.is_finite() || config.prize <= 0.0 {
        return Err(AllocationError::invalid_input(
            "prize",
            format!("must be a positive amount, got {}", config.prize),
        ));
    }

    if config.prize * MINOR_UNITS_PER_MAJOR as f64 > MAX_POOL_MINOR_UNITS as f64 {
        return Err(AllocationError::invalid_input(
            "prize",
            format!(
                "must not exceed {} minor units, got {}",
                MAX_POOL_MINOR_UNITS, config.prize
            ),
        ));
    }

    if config.players == 0 {
        return Err(AllocationError::invalid_input(
            "players",
            "must be greater than 0",
        ));
    }

    if config.prize_style == DistributionStyle::Multiplier {
        validate_multiplier("prize_mult", config.prize_mult)?;
    }
    if config.player_style == DistributionStyle::Multiplier {
        validate_multiplier("player_mult", config.player_mult)?;
    }

    Ok(())
}

fn validate_multiplier(field: &'static str, mult: f64) -> AllocationResult<()> {
    if !mult.is_finite() || mult < 0.0 {
        return Err(AllocationError::invalid_input(
            field,
            format!("must be a finite non-negative number, got {mult}"),
        ));
    }
    Ok(())
}

fn ensure_finite(weights: &[f64], field: &'static str) -> AllocationResult<()> {
    if weights.iter().any(|w| !w.is_finite()) {
        return Err(AllocationError::invalid_input(
            field,
            "too large, tier weights overflow",
        ));
    }
    Ok(())
}

/// Winner count from the configured mode, clamped into `1..=players`.
pub fn derive_total_winners(config: &AllocationConfig) -> u64 {
    let raw = match config.winner_mode {
        WinnerMode::PercentOfPlayers => {
            (config.players as f64 * config.winners_val / 100.0).floor()
        }
        WinnerMode::FixedCount => config.winners_val.floor(),
    };

    let max = config.players.max(1) as f64;
    if raw.is_nan() || raw < 1.0 || raw > max {
        log::warn!(
            "Requested winner count {} outside 1..={}, clamping",
            raw,
            config.players
        );
    }

    if raw.is_nan() {
        return 1;
    }
    raw.clamp(1.0, max) as u64
}

/// Tiers opened for `total_winners`: never more than requested, never more
/// than there are winners to fill them, always between 1 and `MAX_TIERS`.
pub fn active_tier_count(tiers_requested: usize, total_winners: u64) -> usize {
    let winners_cap = total_winners.clamp(1, MAX_TIERS as u64) as usize;
    tiers_requested.clamp(1, MAX_TIERS).min(winners_cap)
}

/// Head count per tier: one guaranteed winner each, the rest apportioned by
/// `weights`. `weights.len()` is the number of active tiers.
pub fn distribute_players(total_winners: u64, weights: &[f64]) -> AllocationResult<Vec<u64>> {
    let mut counts = vec![1u64; weights.len()];

    let remaining = total_winners.saturating_sub(weights.len() as u64);
    if remaining == 0 {
        return Ok(counts);
    }

    let extra = apportion(remaining, weights)?;
    for (count, add) in counts.iter_mut().zip(extra) {
        *count += add;
    }

    Ok(counts)
}

/// Pool in whole minor units, `round(prize * 100)`.
pub fn to_minor_units(prize: f64) -> u64 {
    (prize * MINOR_UNITS_PER_MAJOR as f64).round() as u64
}

/// Split `total_minor_units` across tiers with head counts `counts` and
/// per-player weights `weights`.
///
/// Every player in a tier is paid `floor(unit_per_share * weight)` minor
/// units, where `unit_per_share = floor(total / Σ count * weight)`. The
/// payouts never sum past the pool.
pub fn distribute_prize(
    total_minor_units: u64,
    counts: &[u64],
    weights: &[f64],
) -> AllocationResult<PrizeSplit> {
    let total_shares: f64 = counts
        .iter()
        .zip(weights)
        .map(|(&count, &w)| count as f64 * w)
        .sum();

    if !total_shares.is_finite() || total_shares <= 0.0 {
        return Err(AllocationError::ZeroShares { total_shares });
    }

    let mut unit_per_share = (total_minor_units as f64 / total_shares).floor();
    loop {
        let payouts_minor: Vec<u64> = weights
            .iter()
            .map(|&w| (unit_per_share * w).floor() as u64)
            .collect();

        let distributed: u128 = payouts_minor
            .iter()
            .zip(counts)
            .map(|(&pay, &count)| pay as u128 * count as u128)
            .sum();

        if distributed <= total_minor_units as u128 || unit_per_share <= 0.0 {
            let leftover = (total_minor_units as u128).saturating_sub(distributed) as u64;
            return Ok(PrizeSplit {
                payouts_minor,
                leftover,
            });
        }

        log::debug!(
            "Unit per share {} overshoots pool of {}, stepping down",
            unit_per_share,
            total_minor_units
        );
        // Past 2^53 a step of one is lost to rounding.
        let stepped = unit_per_share - 1.0;
        unit_per_share = if stepped < unit_per_share {
            stepped
        } else {
            (unit_per_share * 0.5).floor()
        };
    }
}
