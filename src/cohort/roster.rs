//! Reading and grading roster CSVs.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::cohort::types::{BatchRecord, RosterRow};
use crate::report::GradeReport;

/// Parses roster rows from any CSV source with a header line.
///
/// # Errors
///
/// Returns an error naming the offending record if a row cannot be parsed.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<RosterRow>> {
    let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in csv.deserialize::<RosterRow>().enumerate() {
        // Record 1 is the first line after the header.
        let row = record.with_context(|| format!("Invalid roster record {}", index + 1))?;
        rows.push(row);
    }

    debug!(rows = rows.len(), "Roster parsed");
    Ok(rows)
}

/// Opens and parses a roster CSV from disk.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_roster_file(path: &Path) -> Result<Vec<RosterRow>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open roster {}", path.display()))?;
    read_roster(file)
}

/// Grades every row. Rows with out-of-range scores become rejected records
/// instead of aborting the run.
#[tracing::instrument(skip(rows), fields(rows = rows.len()))]
pub fn grade_roster(rows: &[RosterRow]) -> Vec<BatchRecord> {
    let records: Vec<BatchRecord> = rows
        .iter()
        .map(|row| match GradeReport::new(row.inputs()) {
            Ok(report) => {
                debug!(
                    student = %row.student,
                    final_grade = report.result.final_grade,
                    mention = %report.mention,
                    "Student graded"
                );
                BatchRecord::graded(&row.student, &report)
            }
            Err(e) => {
                warn!(student = %row.student, error = %e, "Roster row rejected");
                BatchRecord::rejected(row, &e.to_string())
            }
        })
        .collect();

    let rejected = records.iter().filter(|r| r.error.is_some()).count();
    info!(graded = records.len() - rejected, rejected, "Roster graded");

    records
}
