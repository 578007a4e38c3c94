//! Prize pool conservation tests for tier allocation.
//!
//! These tests verify that every winner slot and every penny of the pool is
//! accounted for: tier head counts sum to the winner count, and per-player
//! payouts times head counts plus the leftover sum to the pool in minor units.

#![allow(clippy::unreadable_literal)]

use prize_tiers::{Allocation, AllocationConfig, DistributionStyle, WinnerMode, compute};

const STYLES: [DistributionStyle; 3] = [
    DistributionStyle::Equal,
    DistributionStyle::Linear,
    DistributionStyle::Multiplier,
];

fn assert_conserved(allocation: &Allocation, label: &str) {
    let head_count: u64 = allocation.tiers.iter().map(|t| t.count).sum();
    assert_eq!(
        head_count, allocation.total_winners,
        "{label}: tier counts sum to {head_count}, expected {} winners",
        allocation.total_winners
    );

    assert_eq!(
        allocation.distributed_minor() + allocation.leftover,
        allocation.total_minor_units,
        "{label}: {} distributed + {} leftover != {} pool",
        allocation.distributed_minor(),
        allocation.leftover,
        allocation.total_minor_units
    );

    for tier in &allocation.tiers {
        assert!(tier.count >= 1, "{label}: {} tier is empty", tier.name);
    }
}

#[test]
fn test_conservation_across_styles() {
    let test_cases = vec![
        (1000.0, 100, 10.0),
        (999.99, 57, 13.0),
        (0.01, 3, 3.0),
        (12345.67, 1000, 250.0),
        (50.0, 7, 7.0),
        (1.0, 1, 1.0),
    ];

    for (prize, players, winners) in test_cases {
        for prize_style in STYLES {
            for player_style in STYLES {
                let config = AllocationConfig::new(prize, players)
                    .with_winners(WinnerMode::FixedCount, winners)
                    .with_prize_style(prize_style, 2.0)
                    .with_player_style(player_style, 1.5);
                let allocation = compute(&config).unwrap();

                assert_conserved(
                    &allocation,
                    &format!(
                        "£{prize} / {players} players / {winners} winners / \
                         prize {prize_style} / players {player_style}"
                    ),
                );
            }
        }
    }
}

#[test]
fn test_conservation_every_tier_count() {
    for tiers in 1..=5 {
        for winners in 1..=40u64 {
            let config = AllocationConfig::new(777.77, 40)
                .with_winners(WinnerMode::FixedCount, winners as f64)
                .with_tiers(tiers)
                .with_prize_style(DistributionStyle::Linear, 1.0)
                .with_player_style(DistributionStyle::Linear, 1.0);
            let allocation = compute(&config).unwrap();

            assert_eq!(allocation.num_tiers(), tiers.min(winners as usize));
            assert_conserved(&allocation, &format!("{tiers} tiers / {winners} winners"));
        }
    }
}

#[test]
fn test_percent_mode_conservation() {
    for percent in [1.0, 5.0, 12.5, 33.3, 50.0, 99.9, 100.0] {
        let config = AllocationConfig::new(2500.0, 333)
            .with_winners(WinnerMode::PercentOfPlayers, percent)
            .with_prize_style(DistributionStyle::Multiplier, 3.0)
            .with_player_style(DistributionStyle::Multiplier, 2.0);
        let allocation = compute(&config).unwrap();

        assert!(allocation.total_winners >= 1);
        assert!(allocation.total_winners <= 333);
        assert_conserved(&allocation, &format!("{percent}% of 333"));
    }
}

#[test]
fn test_edge_case_small_pools() {
    // Pools smaller than the share count leave everything as leftover.
    let test_cases = vec![(0.01, 10.0), (0.05, 10.0), (0.09, 5.0), (0.99, 100.0)];

    for (prize, winners) in test_cases {
        let config = AllocationConfig::new(prize, 100)
            .with_winners(WinnerMode::FixedCount, winners)
            .with_prize_style(DistributionStyle::Linear, 1.0);
        let allocation = compute(&config).unwrap();

        assert_conserved(&allocation, &format!("£{prize} pool"));
    }
}

#[test]
fn test_edge_case_large_pools() {
    let test_cases = vec![
        (1_000_000.0, 10_000),
        (25_000_000.0, 100_000),
        (999_999_999.99, 1_000_000),
    ];

    for (prize, players) in test_cases {
        let config = AllocationConfig::new(prize, players)
            .with_winners(WinnerMode::PercentOfPlayers, 15.0)
            .with_prize_style(DistributionStyle::Multiplier, 4.0)
            .with_player_style(DistributionStyle::Multiplier, 3.0);
        let allocation = compute(&config).unwrap();

        assert_conserved(&allocation, &format!("£{prize} / {players} players"));
    }
}

#[test]
fn test_payout_ordering() {
    // Linear and multiplier (mult >= 1) prize styles never pay a lower tier more.
    for (style, mult) in [
        (DistributionStyle::Linear, 1.0),
        (DistributionStyle::Multiplier, 1.0),
        (DistributionStyle::Multiplier, 2.5),
    ] {
        let config = AllocationConfig::new(5000.0, 200)
            .with_winners(WinnerMode::FixedCount, 60.0)
            .with_prize_style(style, mult)
            .with_player_style(DistributionStyle::Linear, 1.0);
        let allocation = compute(&config).unwrap();

        for pair in allocation.tiers.windows(2) {
            assert!(
                pair[0].payout_minor >= pair[1].payout_minor,
                "{style}: {} pays {} but {} pays {}",
                pair[0].name,
                pair[0].payout_minor,
                pair[1].name,
                pair[1].payout_minor
            );
        }
    }
}

#[test]
fn test_payout_display_matches_minor_units() {
    let allocation = compute(&AllocationConfig::new(1234.56, 50).with_tiers(4)).unwrap();

    for tier in &allocation.tiers {
        let expected = tier.payout_minor as f64 / 100.0;
        assert!((tier.payout - expected).abs() < 1e-9);
    }
}
