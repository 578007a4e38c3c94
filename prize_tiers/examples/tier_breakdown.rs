//! Tier Breakdown Example
//!
//! Shows how the same pool splits under each distribution style.

use prize_tiers::{AllocationConfig, DistributionStyle, WinnerMode, compute};

fn main() {
    println!("=== Prize Tier Breakdown ===\n");

    let styles = [
        ("Equal", DistributionStyle::Equal),
        ("Linear", DistributionStyle::Linear),
        ("Multiplier x2", DistributionStyle::Multiplier),
    ];

    for (label, style) in styles {
        let config = AllocationConfig::new(1000.0, 120)
            .with_winners(WinnerMode::PercentOfPlayers, 20.0)
            .with_tiers(4)
            .with_prize_style(style, 2.0)
            .with_player_style(style, 2.0);

        match compute(&config) {
            Ok(allocation) => {
                println!("{label}: {} winners", allocation.total_winners);
                for tier in &allocation.tiers {
                    println!(
                        "  {:<9} {:>3} x {:>8.2} = {:>8.2}",
                        tier.name.to_string(),
                        tier.count,
                        tier.payout,
                        tier.total()
                    );
                }
                if allocation.leftover > 0 {
                    println!("  unassigned: {}p", allocation.leftover);
                }
                println!();
            }
            Err(e) => println!("{label}: {e}\n"),
        }
    }
}
