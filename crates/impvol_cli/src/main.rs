//! impvol - Implied Volatility Calculator
//!
//! Command-line front end for the `impvol_models` implied volatility solver.
//!
//! # Commands
//!
//! - `impvol solve --input <csv> --output <csv>` - Solve every row of an options file
//! - `impvol price ... --volatility <vol>` - Price one option at a given volatility
//! - `impvol implied ... --market-price <price>` - Solve one option given on the command line
//!
//! Solver settings come from `impvol.toml`, `IMPVOL_*` environment variables
//! and the global flags below, in increasing order of precedence.

use std::path::Path;

use clap::{Args, Parser, Subcommand};
use impvol_core::math::solvers::RootFindMethod;
use impvol_models::instruments::{InstrumentKind, OptionSide, VolConvention};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::{CliOverrides, ImpvolConfig};
pub use error::{CliError, Result};

/// Implied volatility calculator
#[derive(Parser)]
#[command(name = "impvol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "impvol.toml")]
    config: String,

    /// Root-finding method (bisection, dekker)
    #[arg(short, long, global = true)]
    method: Option<RootFindMethod>,

    /// Convergence tolerance on volatility
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Iteration cap for the root finder
    #[arg(long, global = true)]
    max_iterations: Option<usize>,

    /// Lower end of the volatility bracket
    #[arg(long, global = true)]
    bracket_low: Option<f64>,

    /// Upper end of the volatility bracket
    #[arg(long, global = true)]
    bracket_high: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

/// One option described on the command line
#[derive(Args, Debug, Clone)]
pub struct OptionArgs {
    /// Underlying type (stock, future)
    #[arg(short = 'u', long, default_value = "stock")]
    pub underlying_type: InstrumentKind,

    /// Volatility convention (blackscholes, bachelier)
    #[arg(short = 't', long, default_value = "blackscholes")]
    pub model_type: VolConvention,

    /// Option side (call, put)
    #[arg(short = 's', long, default_value = "call")]
    pub side: OptionSide,

    /// Spot price, or futures price for futures
    #[arg(long, allow_negative_numbers = true)]
    pub underlying: f64,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Calendar days to expiry
    #[arg(short, long)]
    pub days: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value = "0.0", allow_negative_numbers = true)]
    pub rate: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve implied volatilities for every row of a CSV file
    Solve {
        /// Input CSV file
        #[arg(short, long)]
        input: String,

        /// Output CSV file
        #[arg(short, long)]
        output: String,

        /// Text written for rows without an implied volatility
        #[arg(long)]
        na_marker: Option<String>,
    },

    /// Price one option at a given volatility
    Price {
        #[command(flatten)]
        option: OptionArgs,

        /// Volatility in the convention's units
        #[arg(long)]
        volatility: f64,
    },

    /// Solve the implied volatility of one option
    Implied {
        #[command(flatten)]
        option: OptionArgs,

        /// Observed option price
        #[arg(short = 'p', long)]
        market_price: f64,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let na_marker = match &self.command {
            Commands::Solve { na_marker, .. } => na_marker.clone(),
            _ => None,
        };
        CliOverrides {
            method: self.method,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            bracket_low: self.bracket_low,
            bracket_high: self.bracket_high,
            na_marker,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ImpvolConfig::load(Path::new(&cli.config))?
        .with_env_override()?
        .merge_with_cli(&cli.overrides());

    // Initialise tracing; RUST_LOG wins over the configured level
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "effective configuration");

    let solver = config.solver()?;

    match cli.command {
        Commands::Solve { input, output, .. } => {
            commands::solve::run(Path::new(&input), Path::new(&output), &solver, &config.na_marker)
        }
        Commands::Price { option, volatility } => commands::price::run(&option, volatility),
        Commands::Implied {
            option,
            market_price,
        } => commands::implied::run(&option, market_price, &solver, &config.na_marker),
    }
}
