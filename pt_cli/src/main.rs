//! Prize tier calculator.
//!
//! Collects a configuration from flags, environment or a JSON file, runs the
//! allocation and prints the tier table, a plain-text export or JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{error, info, warn};
use pico_args::Arguments;
use prize_tiers::compute;
use pt_cli::{
    config::{RawInputs, load_input_file},
    render::{export_text, render_json, render_table, strategy_summary},
};

const HELP: &str = "\
Split a prize pool across ranked winner tiers

USAGE:
  pt_cli [OPTIONS]

OPTIONS:
  --prize         AMOUNT   Total prize pool in pounds        [default: env PT_PRIZE or 1000]
  --players       N        Total number of players           [default: env PT_PLAYERS or 100]
  --winner-mode   MODE     fixed | percent                   [default: env PT_WINNER_MODE or fixed]
  --winners       VALUE    Winner count, or percent of players [default: env PT_WINNERS or 10]
  --tiers         N        Tiers to open, 1 to 5             [default: env PT_TIERS or 5]
  --prize-style   STYLE    equal | linear | multiplier       [default: env PT_PRIZE_STYLE or equal]
  --prize-mult    X        Payout ratio between tiers        [default: env PT_PRIZE_MULT or 2]
  --player-style  STYLE    equal | linear | multiplier       [default: env PT_PLAYER_STYLE or equal]
  --player-mult   X        Head count ratio between tiers    [default: env PT_PLAYER_MULT or 2]
  --input         FILE     Read the configuration record from a JSON file

FLAGS:
  --json                   Print the result (or error) record as JSON
  --export                 Print the plain-text export only
  -h, --help               Print help information
";

struct Args {
    raw: RawInputs,
    input: Option<PathBuf>,
    json: bool,
    export: bool,
}

fn main() -> Result<ExitCode> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(ExitCode::SUCCESS);
    }

    env_logger::builder().format_target(false).init();

    let args = Args {
        json: pargs.contains("--json"),
        export: pargs.contains("--export"),
        input: pargs.opt_value_from_str("--input")?,
        raw: RawInputs {
            prize: pargs.opt_value_from_str("--prize")?,
            players: pargs.opt_value_from_str("--players")?,
            winner_mode: pargs.opt_value_from_str("--winner-mode")?,
            winners: pargs.opt_value_from_str("--winners")?,
            tiers: pargs.opt_value_from_str("--tiers")?,
            prize_style: pargs.opt_value_from_str("--prize-style")?,
            prize_mult: pargs.opt_value_from_str("--prize-mult")?,
            player_style: pargs.opt_value_from_str("--player-style")?,
            player_mult: pargs.opt_value_from_str("--player-mult")?,
        },
    };

    let unused = pargs.finish();
    if !unused.is_empty() {
        warn!("Ignoring unrecognised arguments: {unused:?}");
    }

    run(args)
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.input {
        Some(path) => {
            let overridden = args.raw.supplied_flags();
            if !overridden.is_empty() {
                warn!(
                    "--input {} given, ignoring flags: {}",
                    path.display(),
                    overridden.join(", ")
                );
            }
            load_input_file(path)?
        }
        None => args
            .raw
            .resolve(|key| std::env::var(key).ok())
            .context("Failed to build calculator configuration")?,
    };
    info!(
        "Allocating {} across {} players ({} {})",
        config.prize, config.players, config.winners_val, config.winner_mode
    );

    let outcome = compute(&config);

    if args.json {
        println!("{}", render_json(&outcome).context("Failed to encode result")?);
        return Ok(if outcome.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    match outcome {
        Ok(allocation) => {
            if args.export {
                print!("{}", export_text(&allocation));
            } else {
                print!("{}", render_table(&allocation));
                println!();
                println!("{}", strategy_summary(&config));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Allocation failed: {e}");
            eprintln!("{}", e.client_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
