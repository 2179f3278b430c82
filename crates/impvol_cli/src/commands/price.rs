//! Price command implementation
//!
//! Prices one option at a given volatility.

use tracing::info;

use super::build_option;
use crate::{OptionArgs, Result};

/// Run the price command
pub fn run(args: &OptionArgs, volatility: f64) -> Result<()> {
    let price = price(args, volatility)?;
    info!(
        "{} {} {} at volatility {}",
        args.underlying_type, args.side, args.model_type, volatility
    );
    println!("{}", price);
    Ok(())
}

/// Model price of the option described by `args`
pub fn price(args: &OptionArgs, volatility: f64) -> Result<f64> {
    let option = build_option(args, 0.0)?;
    Ok(option.price(volatility)?)
}
