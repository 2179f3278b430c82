//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod implied;
pub mod price;
pub mod solve;

use impvol_models::instruments::{create_instrument, VanillaOption};

use crate::{OptionArgs, Result};

/// Build the option described by `args`
pub(crate) fn build_option(args: &OptionArgs, market_price: f64) -> Result<VanillaOption> {
    Ok(create_instrument(
        args.underlying_type,
        market_price,
        args.underlying,
        args.strike,
        args.days,
        args.rate,
        args.side,
        args.model_type,
    )?)
}
