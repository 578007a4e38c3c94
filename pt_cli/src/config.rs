//! Calculator input collection.
//!
//! Values come from command-line flags first, then `PT_*` environment
//! variables, then built-in defaults. Numeric values keep their leading
//! number (`"12abc"` is 12) and values with none are coerced the way the
//! calculator form does it (0 for amounts and counts, 1 for multipliers)
//! rather than rejected; the engine then reports anything that is still
//! unusable.

use prize_tiers::{AllocationConfig, DistributionStyle, WinnerMode};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_PRIZE: f64 = 1000.0;
pub const DEFAULT_PLAYERS: u64 = 100;
pub const DEFAULT_WINNERS: f64 = 10.0;
pub const DEFAULT_TIERS: usize = 5;
pub const DEFAULT_MULT: f64 = 2.0;

/// Raw values as typed on the command line, before any parsing
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub prize: Option<String>,
    pub players: Option<String>,
    pub winner_mode: Option<String>,
    pub winners: Option<String>,
    pub tiers: Option<String>,
    pub prize_style: Option<String>,
    pub prize_mult: Option<String>,
    pub player_style: Option<String>,
    pub player_mult: Option<String>,
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Failed to read input file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input file {path} is not a valid configuration record: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl RawInputs {
    /// Flags given on the command line, by name.
    pub fn supplied_flags(&self) -> Vec<&'static str> {
        [
            ("--prize", &self.prize),
            ("--players", &self.players),
            ("--winner-mode", &self.winner_mode),
            ("--winners", &self.winners),
            ("--tiers", &self.tiers),
            ("--prize-style", &self.prize_style),
            ("--prize-mult", &self.prize_mult),
            ("--player-style", &self.player_style),
            ("--player-mult", &self.player_mult),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(flag, _)| flag)
        .collect()
    }

    /// Resolve every field against `env` and the defaults.
    ///
    /// `env` looks up an environment variable by name; pass
    /// `|key| std::env::var(key).ok()` for the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unknown winner mode or
    /// distribution style name.
    pub fn resolve<F>(&self, env: F) -> Result<AllocationConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |flag: &Option<String>, var: &str| flag.clone().or_else(|| env(var));

        let prize = pick(&self.prize, "PT_PRIZE")
            .map_or(DEFAULT_PRIZE, |v| coerce("PT_PRIZE", &v, 0.0));
        let players = pick(&self.players, "PT_PLAYERS")
            .map_or(DEFAULT_PLAYERS, |v| coerce("PT_PLAYERS", &v, 0));
        let winners_val = pick(&self.winners, "PT_WINNERS")
            .map_or(DEFAULT_WINNERS, |v| coerce("PT_WINNERS", &v, 0.0));
        let tiers_requested = pick(&self.tiers, "PT_TIERS")
            .map_or(DEFAULT_TIERS, |v| coerce("PT_TIERS", &v, DEFAULT_TIERS));
        let prize_mult = pick(&self.prize_mult, "PT_PRIZE_MULT")
            .map_or(DEFAULT_MULT, |v| coerce("PT_PRIZE_MULT", &v, 1.0));
        let player_mult = pick(&self.player_mult, "PT_PLAYER_MULT")
            .map_or(DEFAULT_MULT, |v| coerce("PT_PLAYER_MULT", &v, 1.0));

        let winner_mode = pick(&self.winner_mode, "PT_WINNER_MODE")
            .map(|v| parse_named::<WinnerMode>("PT_WINNER_MODE", &v))
            .transpose()?
            .unwrap_or(WinnerMode::FixedCount);
        let prize_style = pick(&self.prize_style, "PT_PRIZE_STYLE")
            .map(|v| parse_named::<DistributionStyle>("PT_PRIZE_STYLE", &v))
            .transpose()?
            .unwrap_or(DistributionStyle::Equal);
        let player_style = pick(&self.player_style, "PT_PLAYER_STYLE")
            .map(|v| parse_named::<DistributionStyle>("PT_PLAYER_STYLE", &v))
            .transpose()?
            .unwrap_or(DistributionStyle::Equal);

        Ok(AllocationConfig {
            prize,
            players,
            winner_mode,
            winners_val,
            tiers_requested,
            prize_style,
            prize_mult,
            player_style,
            player_mult,
        })
    }
}

/// Read a JSON configuration record from `path`.
pub fn load_input_file(path: &Path) -> Result<AllocationConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the longest numeric prefix of `value` (`"12abc"` reads as 12),
/// falling back to `fallback` when there is none
fn coerce<T>(var: &str, value: &str, fallback: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match leading_number(value) {
        Some((number, rest)) => {
            if !rest.trim().is_empty() {
                log::warn!("{var}: ignoring trailing '{rest}' after {number}");
            }
            number
        }
        None => {
            log::warn!("{var}: '{value}' is not a number, using {fallback}");
            fallback
        }
    }
}

fn leading_number<T: FromStr>(value: &str) -> Option<(T, &str)> {
    let trimmed = value.trim_start();
    trimmed
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| {
            trimmed[..end]
                .parse()
                .ok()
                .map(|number| (number, &trimmed[end..]))
        })
}

fn parse_named<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: var.to_string(),
        reason: e.to_string(),
    })
}
