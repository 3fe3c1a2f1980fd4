//! A fully evaluated grade and its human-readable rendering.

use serde::Serialize;

use crate::error::GradeError;
use crate::formula::{CalculationResult, evaluate_inputs};
use crate::inputs::GradeInputs;
use crate::mention::{Mention, classify};

/// Inputs, formula terms, mention and pass/fail status for one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub inputs: GradeInputs,
    pub result: CalculationResult,
    pub mention: Mention,
    pub passed: bool,
}

impl GradeReport {
    /// Validates `inputs`, evaluates the formula and classifies the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::InvalidInput`] for out-of-range scores.
    pub fn new(inputs: GradeInputs) -> Result<Self, GradeError> {
        inputs.validate()?;

        let result = evaluate_inputs(&inputs);
        let mention = classify(result.final_grade)?;

        Ok(Self {
            inputs,
            result,
            mention,
            passed: mention.passed(),
        })
    }

    pub fn status(&self) -> &'static str {
        if self.passed { "APPROVED" } else { "FAILED" }
    }

    /// Renders the report as plain text. `details` appends the intermediate
    /// work with four decimals.
    pub fn render_text(&self, details: bool) -> String {
        let r = &self.result;

        let mut lines = vec![
            format!("Final grade (NF): {:.2}", r.final_grade),
            format!(
                "Mention:          {} ({})",
                self.mention,
                self.mention.description()
            ),
            format!("Status:           {}", self.status()),
        ];

        if details {
            let p = self.inputs.exam_score;
            let t = self.inputs.project_score();
            let l = self.inputs.list_bonus();
            let main = r.main_component();

            lines.extend([
                String::new(),
                "NF = max(P * [1 + (T/100)^(2φ)], min(T, 110 * P)) + L".to_string(),
                format!("φ:            {:.4}", r.golden_ratio),
                format!("Boost:        {p} * [1 + ({t}/100)^(2φ)] = {:.4}", r.boost_term),
                format!("Substitution: min({t}, 110 * {p}) = {:.4}", r.substitution_term),
                format!("Maximum:      {main:.4}"),
                format!("List (L):     + {l}"),
                format!("Total:        {main:.4} + {l} = {:.4}", r.final_grade),
            ]);
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
