//! Console and CSV sinks.

use crate::error::Result;
use crate::record::Record;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Print one record per line, in order.
pub fn print_records<W: Write>(records: &[Record], out: &mut W) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Write `records` to a CSV file at `path`.
///
/// An empty batch writes nothing and leaves any existing file alone.
/// Returns whether a file was written.
pub fn write_csv(records: &[Record], path: &Path) -> Result<bool> {
    if records.is_empty() {
        warn!("No data to save to CSV.");
        return Ok(false);
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    info!(path = %path.display(), rows = records.len(), "Results saved to {}", path.display());
    Ok(true)
}
