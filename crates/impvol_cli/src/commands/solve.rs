//! Solve command implementation
//!
//! Reads an options CSV, solves every row in parallel and writes the results.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use impvol_models::implied_vol::{
    solve_batch, ImpliedVolRecord, ImpliedVolRequest, ImpliedVolSolver,
};
use tracing::{info, warn};

use crate::{CliError, Result};

/// Output column order
pub const OUTPUT_HEADER: [&str; 9] = [
    "ID",
    "Spot",
    "Strike",
    "RiskFreeRate",
    "YearsToExpiry",
    "OptionSide",
    "ModelType",
    "ImpliedVolatility",
    "MarketPrice",
];

/// Run the solve command
pub fn run(input: &Path, output: &Path, solver: &ImpliedVolSolver, na_marker: &str) -> Result<()> {
    info!("Starting implied volatility solve...");
    info!("  Input: {}", input.display());
    info!("  Output: {}", output.display());
    info!(
        "  Method: {} (bracket [{}, {}])",
        solver.finder().method(),
        solver.bracket().low(),
        solver.bracket().high()
    );

    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    let requests = read_requests(File::open(input)?)?;
    info!("Loaded {} option rows", requests.len());

    let records = solve_batch(&requests, solver);
    let solved = records
        .iter()
        .filter(|r| r.implied_volatility.is_some())
        .count();

    write_records(File::create(output)?, &records, na_marker)?;
    info!(
        "Solved {} of {} rows ({} without implied volatility)",
        solved,
        records.len(),
        records.len() - solved
    );

    Ok(())
}

/// Read option rows from CSV.
///
/// Rows that cannot be parsed are skipped with a warning; I/O failures abort.
pub fn read_requests<R: Read>(reader: R) -> Result<Vec<ImpliedVolRequest>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    for (row, result) in reader.deserialize::<ImpliedVolRequest>().enumerate() {
        match result {
            Ok(request) => requests.push(request),
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => warn!(row, error = %err, "skipping unreadable CSV row"),
        }
    }

    Ok(requests)
}

/// Write solved rows as CSV, using `na_marker` for missing volatilities.
pub fn write_records<W: Write>(
    writer: W,
    records: &[ImpliedVolRecord],
    na_marker: &str,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(OUTPUT_HEADER)?;

    for record in records {
        let volatility = record
            .implied_volatility
            .map_or_else(|| na_marker.to_string(), |vol| vol.to_string());
        writer.write_record([
            record.id.clone().unwrap_or_default(),
            record.spot.to_string(),
            record.strike.to_string(),
            record.risk_free_rate.to_string(),
            record.years_to_expiry.to_string(),
            record.option_side.clone(),
            record.model_type.clone(),
            volatility,
            record.market_price.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
