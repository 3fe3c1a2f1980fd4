//! Closed-form final grade (NF) formula.
//!
//! ```text
//! NF = max( P * [1 + (T/100)^(2φ)], min(T, 110 * P) ) + L
//! ```
//!
//! `P` is the exam score, `T` the project score and `L` the list bonus.

use serde::Serialize;
use tracing::debug;

use crate::inputs::GradeInputs;

/// Multiplier on the exam score that caps the substitution term.
pub const SUBSTITUTION_CAP: f64 = 110.0;

/// The golden ratio φ = (1 + √5) / 2.
pub fn golden_ratio() -> f64 {
    (1.0 + 5f64.sqrt()) / 2.0
}

/// Every value produced while evaluating the formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub final_grade: f64,
    /// Exam score amplified by project performance.
    pub boost_term: f64,
    /// Project score, capped at 110× the exam score.
    pub substitution_term: f64,
    pub golden_ratio: f64,
}

impl CalculationResult {
    /// The larger of the two terms; the part of NF that excludes the list bonus.
    pub fn main_component(&self) -> f64 {
        self.boost_term.max(self.substitution_term)
    }
}

/// Evaluates the formula. Ranges are the caller's responsibility; see
/// [`GradeInputs::validate`].
pub fn evaluate(exam_score: f64, list_bonus: f64, project_score: f64) -> CalculationResult {
    let phi = golden_ratio();

    let boost_term = exam_score * (1.0 + (project_score / 100.0).powf(2.0 * phi));
    let substitution_term = project_score.min(SUBSTITUTION_CAP * exam_score);
    let final_grade = boost_term.max(substitution_term) + list_bonus;

    debug!(
        exam_score,
        list_bonus,
        project_score,
        boost_term,
        substitution_term,
        final_grade,
        "Formula evaluated"
    );

    CalculationResult {
        final_grade,
        boost_term,
        substitution_term,
        golden_ratio: phi,
    }
}

/// Runs [`evaluate`] on an input record.
pub fn evaluate_inputs(inputs: &GradeInputs) -> CalculationResult {
    evaluate(inputs.exam_score, inputs.list_bonus(), inputs.project_score())
}
