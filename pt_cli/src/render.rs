//! Result presentation: the tier table, the plain-text export and JSON records.

use prize_tiers::{
    Allocation, AllocationConfig, AllocationResult, DistributionStyle, ErrorReport,
    MINOR_UNITS_PER_MAJOR,
};
use std::fmt::Write;

/// Format minor units as pounds, e.g. `123456` -> `£1,234.56`.
pub fn format_gbp(minor: u64) -> String {
    let pounds = minor / MINOR_UNITS_PER_MAJOR;
    let pence = minor % MINOR_UNITS_PER_MAJOR;
    format!("£{}.{pence:02}", group_thousands(pounds))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Tier table with summary header and, when any pennies stayed unassigned,
/// a rounding row.
pub fn render_table(allocation: &Allocation) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Pool: {}", format_gbp(allocation.total_minor_units));
    let _ = writeln!(
        out,
        "{} Winners / {} Players",
        allocation.total_winners, allocation.players
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<10} {:>8} {:>14} {:>16}",
        "Tier", "Players", "Per player", "Tier total"
    );

    for tier in &allocation.tiers {
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>14} {:>16}",
            tier.name.to_string(),
            tier.count,
            format_gbp(tier.payout_minor),
            format_gbp(tier.total_minor())
        );
    }

    if allocation.leftover > 0 {
        let _ = writeln!(
            out,
            "{:<34} {:>16}",
            "Unassigned pennies (rounding)",
            format_gbp(allocation.leftover)
        );
    }

    out
}

/// Plain-text summary for pasting into chat or email.
pub fn export_text(allocation: &Allocation) -> String {
    let mut txt = String::from("🏆 PRIZE DISTRIBUTION\n");
    let _ = writeln!(
        txt,
        "Pool: {} | Winners: {}",
        format_gbp(allocation.total_minor_units),
        allocation.total_winners
    );
    txt.push('\n');

    for tier in allocation.tiers.iter().filter(|t| t.count > 0) {
        let _ = writeln!(
            txt,
            "{}: {}x @ {}",
            tier.name,
            tier.count,
            format_gbp(tier.payout_minor)
        );
    }
    txt
}

/// One-line description of the chosen strategy.
pub fn strategy_summary(config: &AllocationConfig) -> String {
    use DistributionStyle::{Equal, Linear, Multiplier};

    match (config.prize_style, config.player_style) {
        (Multiplier, Multiplier) => format!(
            "Multiplier: Tier 1 pays {}x more than Tier 2. Tier 2 has {}x more players than Tier 1.",
            config.prize_mult, config.player_mult
        ),
        (Linear, _) | (_, Linear) => {
            "Linear: Values increase/decrease by a fixed step (e.g. 1, 2, 3, 4).".to_string()
        }
        (Equal, Equal) => {
            "Equal: Every tier gets the same prize and player count (where possible).".to_string()
        }
        _ => "Custom strategy selected.".to_string(),
    }
}

/// JSON record for either outcome: the allocation, or `{"error": ...}`.
pub fn render_json(outcome: &AllocationResult<Allocation>) -> serde_json::Result<String> {
    match outcome {
        Ok(allocation) => serde_json::to_string_pretty(allocation),
        Err(err) => serde_json::to_string_pretty(&ErrorReport::from(err)),
    }
}
