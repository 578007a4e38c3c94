//! Allocation data models: the configuration record, tiers and the result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::MINOR_UNITS_PER_MAJOR;

/// How `winners_val` is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinnerMode {
    /// `winners_val` is the number of winners
    #[serde(rename = "fixed")]
    FixedCount,
    /// `winners_val` is a percentage of `players`
    #[serde(rename = "percent")]
    PercentOfPlayers,
}

impl fmt::Display for WinnerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinnerMode::FixedCount => write!(f, "fixed"),
            WinnerMode::PercentOfPlayers => write!(f, "percent"),
        }
    }
}

impl FromStr for WinnerMode {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(WinnerMode::FixedCount),
            "percent" => Ok(WinnerMode::PercentOfPlayers),
            _ => Err(ParseStyleError::WinnerMode(s.to_string())),
        }
    }
}

/// Weighting strategy across tiers, shared by the player and prize passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionStyle {
    /// Same weight for every tier
    Equal,
    /// Weight grows by one per rank step
    Linear,
    /// Weight grows geometrically by the configured multiplier
    Multiplier,
}

impl fmt::Display for DistributionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionStyle::Equal => write!(f, "equal"),
            DistributionStyle::Linear => write!(f, "linear"),
            DistributionStyle::Multiplier => write!(f, "multiplier"),
        }
    }
}

impl FromStr for DistributionStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equal" => Ok(DistributionStyle::Equal),
            "linear" => Ok(DistributionStyle::Linear),
            "multiplier" => Ok(DistributionStyle::Multiplier),
            _ => Err(ParseStyleError::DistributionStyle(s.to_string())),
        }
    }
}

/// Unknown mode or style name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStyleError {
    #[error("Unknown winner mode '{0}', expected 'fixed' or 'percent'")]
    WinnerMode(String),

    #[error("Unknown distribution style '{0}', expected 'equal', 'linear' or 'multiplier'")]
    DistributionStyle(String),
}

/// Tier names, highest rank first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TierName {
    Diamond,
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TierName::Diamond => "Diamond",
            TierName::Platinum => "Platinum",
            TierName::Gold => "Gold",
            TierName::Silver => "Silver",
            TierName::Bronze => "Bronze",
        };
        f.write_str(name)
    }
}

/// Allocation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationConfig {
    /// Total pool in major currency units
    pub prize: f64,
    /// Total participant count
    pub players: u64,
    /// How `winners_val` is interpreted
    pub winner_mode: WinnerMode,
    /// Winner count or percentage of players
    pub winners_val: f64,
    /// Upper bound on the number of tiers (at most 5)
    pub tiers_requested: usize,
    /// Per-player prize weighting across tiers
    pub prize_style: DistributionStyle,
    /// Ratio between adjacent tiers' payouts (multiplier style only)
    pub prize_mult: f64,
    /// Player count weighting across tiers
    pub player_style: DistributionStyle,
    /// Ratio between adjacent tiers' head counts (multiplier style only)
    pub player_mult: f64,
}

impl AllocationConfig {
    /// Create a configuration with equal weighting and the winner count set
    /// to `players`
    pub fn new(prize: f64, players: u64) -> Self {
        Self {
            prize,
            players,
            winner_mode: WinnerMode::FixedCount,
            winners_val: players as f64,
            tiers_requested: crate::constants::MAX_TIERS,
            prize_style: DistributionStyle::Equal,
            prize_mult: 1.0,
            player_style: DistributionStyle::Equal,
            player_mult: 1.0,
        }
    }

    pub fn with_winners(mut self, mode: WinnerMode, value: f64) -> Self {
        self.winner_mode = mode;
        self.winners_val = value;
        self
    }

    pub fn with_tiers(mut self, tiers_requested: usize) -> Self {
        self.tiers_requested = tiers_requested;
        self
    }

    /// Set the prize style. `mult` is only read by [`DistributionStyle::Multiplier`].
    pub fn with_prize_style(mut self, style: DistributionStyle, mult: f64) -> Self {
        self.prize_style = style;
        self.prize_mult = mult;
        self
    }

    /// Set the player style. `mult` is only read by [`DistributionStyle::Multiplier`].
    pub fn with_player_style(mut self, style: DistributionStyle, mult: f64) -> Self {
        self.player_style = style;
        self.player_mult = mult;
        self
    }
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self::new(1000.0, 100).with_winners(WinnerMode::FixedCount, 10.0)
    }
}

/// One active rank of winners sharing a payout level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub name: TierName,
    /// Players assigned to this tier (always at least 1)
    pub count: u64,
    /// Per-player prize weight
    pub weight: f64,
    /// Per-player payout in major units, for display
    pub payout: f64,
    /// Per-player payout in minor units, used for all accounting
    pub payout_minor: u64,
}

impl Tier {
    /// Minor units paid out across every player in the tier
    pub fn total_minor(&self) -> u64 {
        self.payout_minor * self.count
    }

    /// Major-unit total for display
    pub fn total(&self) -> f64 {
        self.total_minor() as f64 / MINOR_UNITS_PER_MAJOR as f64
    }
}

/// Outcome of one allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub prize: f64,
    pub players: u64,
    pub total_winners: u64,
    /// `round(prize * 100)`
    pub total_minor_units: u64,
    /// Active tiers in rank order
    pub tiers: Vec<Tier>,
    /// Minor units left over after per-share rounding
    pub leftover: u64,
}

impl Allocation {
    pub fn num_tiers(&self) -> usize {
        self.tiers.len()
    }

    /// Minor units assigned to tiers
    pub fn distributed_minor(&self) -> u64 {
        self.tiers.iter().map(Tier::total_minor).sum()
    }

    pub fn tier(&self, name: TierName) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.name == name)
    }
}
