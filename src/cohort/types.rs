//! Data types used by the cohort pipeline.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::inputs::GradeInputs;
use crate::mention::Mention;
use crate::report::GradeReport;

/// A single row deserialized from a roster CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterRow {
    pub student: String,
    pub exam_score: f64,
    #[serde(deserialize_with = "yes_no")]
    pub list_completed: bool,
    /// Empty when the student skipped the project.
    pub project_score: Option<f64>,
}

impl RosterRow {
    pub fn inputs(&self) -> GradeInputs {
        GradeInputs::new(self.exam_score, self.list_completed, self.project_score)
    }
}

fn yes_no<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected yes/no for list_completed, got {other:?}"
        ))),
    }
}

/// One graded row, written to the output CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    pub student: String,
    pub exam_score: f64,
    pub list_bonus: f64,
    pub project_score: Option<f64>,
    pub boost_term: Option<f64>,
    pub substitution_term: Option<f64>,
    pub final_grade: Option<f64>,
    pub mention: Option<Mention>,
    pub passed: Option<bool>,
    /// Set instead of the grade columns when the row was rejected.
    pub error: Option<String>,
}

impl BatchRecord {
    pub fn graded(student: &str, report: &GradeReport) -> Self {
        Self {
            student: student.to_string(),
            exam_score: report.inputs.exam_score,
            list_bonus: report.inputs.list_bonus(),
            project_score: report.inputs.project_score,
            boost_term: Some(report.result.boost_term),
            substitution_term: Some(report.result.substitution_term),
            final_grade: Some(report.result.final_grade),
            mention: Some(report.mention),
            passed: Some(report.passed),
            error: None,
        }
    }

    pub fn rejected(row: &RosterRow, error: &str) -> Self {
        let inputs = row.inputs();
        Self {
            student: row.student.clone(),
            exam_score: inputs.exam_score,
            list_bonus: inputs.list_bonus(),
            project_score: inputs.project_score,
            boost_term: None,
            substitution_term: None,
            final_grade: None,
            mention: None,
            passed: None,
            error: Some(error.to_string()),
        }
    }
}

/// Cohort-wide statistics over a set of [`BatchRecord`]s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    pub students: usize,
    pub graded: usize,
    pub errors: usize,
    pub passed: usize,
    /// Share of graded students who passed, 0.0–1.0.
    pub pass_rate: f64,
    pub mean_grade: f64,
    pub stddev_grade: f64,
    pub mentions: BTreeMap<Mention, usize>,
}
