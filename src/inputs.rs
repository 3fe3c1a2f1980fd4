//! Raw inputs to a grade computation and their allowed ranges.

use serde::Serialize;

use crate::error::GradeError;

/// Highest attainable written exam score (P).
pub const EXAM_MAX: f64 = 110.0;

/// Highest attainable final project score (T).
pub const PROJECT_MAX: f64 = 100.0;

/// Points added when the exercise list (L) was handed in.
pub const LIST_BONUS: f64 = 10.0;

/// The three numbers a student brings to the formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GradeInputs {
    pub exam_score: f64,
    pub list_completed: bool,
    /// `None` when the student did not do the project.
    pub project_score: Option<f64>,
}

impl GradeInputs {
    pub fn new(exam_score: f64, list_completed: bool, project_score: Option<f64>) -> Self {
        Self {
            exam_score,
            list_completed,
            project_score,
        }
    }

    /// Bonus contributed by the exercise list: 10 or 0.
    pub fn list_bonus(&self) -> f64 {
        if self.list_completed { LIST_BONUS } else { 0.0 }
    }

    /// Project score as the formula sees it; a skipped project counts as 0.
    pub fn project_score(&self) -> f64 {
        self.project_score.unwrap_or(0.0)
    }

    /// Checks every score against its range.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<(), GradeError> {
        check_range("exam_score", self.exam_score, EXAM_MAX)?;
        if let Some(project) = self.project_score {
            check_range("project_score", project, PROJECT_MAX)?;
        }
        Ok(())
    }

    /// Forces every score into range instead of rejecting it. NaN becomes 0.
    pub fn clamped(&self) -> Self {
        Self {
            exam_score: clamp_score(self.exam_score, EXAM_MAX),
            list_completed: self.list_completed,
            project_score: self.project_score.map(|t| clamp_score(t, PROJECT_MAX)),
        }
    }
}

fn check_range(field: &'static str, value: f64, max: f64) -> Result<(), GradeError> {
    // NaN fails the contains check too.
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(GradeError::InvalidInput {
            field,
            value,
            min: 0.0,
            max,
        })
    }
}

fn clamp_score(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}
