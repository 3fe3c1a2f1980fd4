use crate::cohort::types::{BatchRecord, CohortSummary};
use crate::mention::Mention;
use std::collections::BTreeMap;

/// Summarises graded records into a [`CohortSummary`].
///
/// Rejected records count towards `students` and `errors` only. Every
/// mention appears in the histogram, with zero when nobody earned it.
pub fn summarize(records: &[BatchRecord]) -> CohortSummary {
    let mut mentions: BTreeMap<Mention, usize> = Mention::ALL.iter().map(|m| (*m, 0)).collect();
    let mut grades = Vec::with_capacity(records.len());
    let mut passed = 0;

    for record in records {
        let (Some(grade), Some(mention)) = (record.final_grade, record.mention) else {
            continue;
        };

        grades.push(grade);
        *mentions.entry(mention).or_default() += 1;
        if mention.passed() {
            passed += 1;
        }
    }

    let graded = grades.len();
    let (mean_grade, stddev_grade) = mean_and_stddev(&grades);

    CohortSummary {
        students: records.len(),
        graded,
        errors: records.len() - graded,
        passed,
        pass_rate: if graded == 0 {
            0.0
        } else {
            passed as f64 / graded as f64
        },
        mean_grade,
        stddev_grade,
        mentions,
    }
}

/// Arithmetic mean and population standard deviation. Both are 0.0 for
/// empty input.
fn mean_and_stddev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort::types::RosterRow;
    use crate::inputs::GradeInputs;
    use crate::report::GradeReport;

    fn graded(student: &str, exam: f64, list: bool, project: Option<f64>) -> BatchRecord {
        let report = GradeReport::new(GradeInputs::new(exam, list, project)).unwrap();
        BatchRecord::graded(student, &report)
    }

    fn rejected(student: &str) -> BatchRecord {
        let row = RosterRow {
            student: student.to_string(),
            exam_score: 500.0,
            list_completed: false,
            project_score: None,
        };
        BatchRecord::rejected(&row, "exam_score out of range")
    }

    #[test]
    fn test_mean_and_stddev() {
        assert_eq!(mean_and_stddev(&[]), (0.0, 0.0));
        assert_eq!(mean_and_stddev(&[5.0]), (5.0, 0.0));

        let (mean, sd) = mean_and_stddev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(mean, 5.0);
        assert_eq!(sd, 2.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.students, 0);
        assert_eq!(summary.pass_rate, 0.0);
        assert_eq!(summary.mentions.len(), 6);
        assert!(summary.mentions.values().all(|&n| n == 0));
    }

    #[test]
    fn test_summarize_counts() {
        let records = vec![
            graded("a", 60.0, false, None),       // 60 MM
            graded("b", 50.0, true, Some(100.0)), // 110 SS
            graded("c", 0.0, true, Some(80.0)),   // 10 II
            graded("d", 0.0, false, None),        // 0 SR
            rejected("e"),
        ];

        let summary = summarize(&records);

        assert_eq!(summary.students, 5);
        assert_eq!(summary.graded, 4);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.pass_rate, 0.5);
        assert_eq!(summary.mean_grade, 45.0);
        assert_eq!(summary.mentions[&Mention::IntermediatePass], 1);
        assert_eq!(summary.mentions[&Mention::Excellent], 1);
        assert_eq!(summary.mentions[&Mention::Insufficient], 1);
        assert_eq!(summary.mentions[&Mention::None], 1);
        assert_eq!(summary.mentions[&Mention::GoodPass], 0);
    }

    #[test]
    fn test_summary_serializes_mention_codes() {
        let summary = summarize(&[graded("a", 70.0, false, None)]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["mentions"]["MS"], 1);
        assert_eq!(json["mentions"]["SS"], 0);
    }
}
