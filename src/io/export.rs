//! CSV export for the monthly cost series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::engine::types::MonthlyCostPoint;

/// Column header for CSV series export.
const HEADER: &str = "month,generator_grid_cost,solar_cost,savings";

/// Exports the monthly series to a CSV file at the given path.
///
/// Writes a header row followed by one data row per month. Produces
/// deterministic output for identical inputs.
///
/// # Arguments
///
/// * `points` - Complete monthly cost series
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(points: &[MonthlyCostPoint], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(points, buf)
}

/// Writes the monthly series as CSV to any writer.
///
/// # Arguments
///
/// * `points` - Complete monthly cost series
/// * `writer` - Destination implementing `Write`
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(points: &[MonthlyCostPoint], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for p in points {
        wtr.write_record(&[
            p.month.to_string(),
            format!("{:.2}", p.generator_grid_cost),
            format!("{:.2}", p.solar_cost),
            format!("{:.2}", p.savings),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
