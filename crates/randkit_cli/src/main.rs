//! randkit CLI - Command Line Access to Engines and Distributions
//!
//! # Commands
//!
//! - `randkit draw --kind u64|f64|f64oo` - Print raw engine output
//! - `randkit sample <distribution> <p1> <p2>` - Print distribution variates
//! - `randkit state save --out <file>` / `randkit state resume --input <file>`
//!   - Persist an engine and continue its sequence later
//! - `randkit histogram <distribution> <p1> <p2>` - Print a star histogram
//!
//! # Configuration
//!
//! Engine, seed, count and log level come from CLI flags, then `RANDKIT_*`
//! environment variables, then the `--config` TOML file, then defaults.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use randkit_engines::EngineKind;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::draw::DrawKind;
use commands::DistributionKind;
use config::{build_config, CliArgs};

/// randkit random number engines and distributions CLI
#[derive(Parser)]
#[command(name = "randkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Engine family (splitmix64, mt19937, xorshift128plus, xorshift1024star, xoroshiro128plus)
    #[arg(short, long, global = true)]
    engine: Option<EngineKind>,

    /// Seed (0 selects a time-derived seed)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of values to print
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print raw engine output
    Draw {
        /// Draw function
        #[arg(short, long, value_enum, default_value_t = DrawKind::U64)]
        kind: DrawKind,

        /// Draws to discard first
        #[arg(long, default_value_t = 0)]
        skip: u64,
    },

    /// Print variates from a distribution
    Sample {
        /// Distribution family
        #[arg(value_enum)]
        distribution: DistributionKind,

        /// First parameter (lower bound, mean, location or log-mean)
        #[arg(allow_negative_numbers = true)]
        p1: f64,

        /// Second parameter (upper bound, deviation or scale)
        #[arg(allow_negative_numbers = true)]
        p2: f64,
    },

    /// Save or resume engine state
    State {
        #[command(subcommand)]
        action: StateAction,
    },

    /// Print a histogram of ten unit-width bins over [0, 10)
    Histogram {
        /// Distribution family
        #[arg(value_enum)]
        distribution: DistributionKind,

        /// First parameter
        #[arg(allow_negative_numbers = true)]
        p1: f64,

        /// Second parameter
        #[arg(allow_negative_numbers = true)]
        p2: f64,

        /// Number of variates to bin
        #[arg(short, long, default_value_t = 10_000)]
        draws: usize,
    },
}

#[derive(Subcommand)]
enum StateAction {
    /// Write the engine state to a file
    Save {
        /// Output file
        #[arg(short, long)]
        out: PathBuf,

        /// Draws to discard before saving
        #[arg(long, default_value_t = 0)]
        skip: u64,
    },

    /// Restore an engine from a file and continue drawing
    Resume {
        /// State file written by `state save`
        #[arg(short, long)]
        input: PathBuf,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            engine: cli.engine,
            seed: cli.seed,
            count: cli.count,
            log_level: cli.log_level.clone(),
        }
    }
}

/// Initialise tracing, preferring `RUST_LOG` over the configured level.
fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        engine = %config.engine,
        seed = config.seed,
        count = config.count,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Draw { kind, skip } => commands::draw::run(&config, kind, skip, &mut out)?,
        Commands::Sample {
            distribution,
            p1,
            p2,
        } => commands::sample::run(&config, distribution, p1, p2, &mut out)?,
        Commands::State { action } => match action {
            StateAction::Save { out: path, skip } => commands::state::save(&config, skip, &path)?,
            StateAction::Resume { input } => commands::state::resume(&config, &input, &mut out)?,
        },
        Commands::Histogram {
            distribution,
            p1,
            p2,
            draws,
        } => commands::histogram::run(&config, distribution, p1, p2, draws, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sample_with_negative_parameters() {
        let cli = Cli::try_parse_from([
            "randkit", "--engine", "mt19937", "sample", "cauchy", "-3.5", "3.5",
        ])
        .unwrap();
        assert_eq!(cli.engine, Some(EngineKind::Mt19937));
        match cli.command {
            Commands::Sample {
                distribution,
                p1,
                p2,
            } => {
                assert_eq!(distribution, DistributionKind::Cauchy);
                assert_eq!((p1, p2), (-3.5, 3.5));
            }
            _ => panic!("expected sample"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["randkit", "draw", "--kind", "f64oo", "-n", "3", "-s", "7"])
            .unwrap();
        let args = CliArgs::from(&cli);
        assert_eq!(args.count, Some(3));
        assert_eq!(args.seed, Some(7));
        assert!(matches!(
            cli.command,
            Commands::Draw {
                kind: DrawKind::F64Open,
                skip: 0
            }
        ));
    }

    #[test]
    fn test_parse_state_resume() {
        let cli = Cli::try_parse_from(["randkit", "state", "resume", "--input", "rng.state"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::State {
                action: StateAction::Resume { .. }
            }
        ));
    }

    #[test]
    fn test_unknown_engine_rejected() {
        assert!(Cli::try_parse_from(["randkit", "--engine", "pcg", "draw"]).is_err());
    }
}
