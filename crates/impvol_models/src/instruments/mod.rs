//! Option entity, its classifiers, and the instrument factory.
//!
//! - [`InstrumentKind`], [`OptionSide`], [`VolConvention`]: closed sets
//!   parsed from text through `FromStr`
//! - [`VanillaOption`]: validated market inputs bound to one pricing model
//! - [`create_instrument`]: factory taking the expiry as a day count
//! - [`InstrumentError`]: construction and pricing input errors

pub mod error;
pub mod kinds;
pub mod option;

pub use error::InstrumentError;
pub use kinds::{InstrumentKind, OptionSide, VolConvention};
pub use option::{create_instrument, VanillaOption};
