//! Output formatting and persistence for graded cohorts.
//!
//! Supports CSV export of graded rows and JSON rendering of the summary.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::cohort::types::{BatchRecord, CohortSummary};

/// Writes graded rows, with a header line, to any writer.
pub fn write_records<W: Write>(writer: W, records: &[BatchRecord]) -> Result<()> {
    let mut csv = WriterBuilder::new().has_headers(true).from_writer(writer);

    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;

    Ok(())
}

/// Writes graded rows to a CSV file, replacing any existing file.
pub fn write_records_file(path: &Path, records: &[BatchRecord]) -> Result<()> {
    debug!(path = %path.display(), records = records.len(), "Writing CSV results");

    let file = File::create(path)
        .with_context(|| format!("Failed to create output {}", path.display()))?;
    write_records(file, records)
}

/// Renders a cohort summary as pretty-printed JSON.
pub fn summary_json(summary: &CohortSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
