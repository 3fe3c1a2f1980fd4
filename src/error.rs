//! Error type for the grading core.

use thiserror::Error;

/// Failures the grading core can report.
///
/// The formula itself is total; these only surface when a caller hands in
/// values outside the documented domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// A score fell outside its allowed range or was not a finite number.
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A final grade that no mention covers (negative or NaN).
    #[error("final grade {0} cannot be classified")]
    Unclassifiable(f64),
}
