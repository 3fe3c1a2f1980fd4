use grade_solver::cohort::aggregate::summarize;
use grade_solver::cohort::roster::{grade_roster, read_roster_file};
use grade_solver::output::write_records;
use grade_solver::{GradeInputs, GradeReport, Mention, classify, evaluate};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ResultRow {
    student: String,
    final_grade: Option<f64>,
    mention: Option<Mention>,
    passed: Option<bool>,
    error: Option<String>,
}

#[test]
fn test_reference_cases() {
    let cases = [
        (0.0, 0.0, 0.0, 0.0, Mention::None),
        (60.0, 0.0, 0.0, 60.0, Mention::IntermediatePass),
        (0.0, 10.0, 80.0, 10.0, Mention::Insufficient),
        (50.0, 10.0, 100.0, 110.0, Mention::Excellent),
    ];

    for (exam, list, project, expected, mention) in cases {
        let result = evaluate(exam, list, project);
        assert_eq!(result.final_grade, expected);
        assert_eq!(classify(result.final_grade).unwrap(), mention);
    }
}

#[test]
fn test_single_student_report() {
    let report = GradeReport::new(GradeInputs::new(75.0, true, None)).unwrap();
    assert_eq!(report.result.final_grade, 85.0);
    assert_eq!(report.mention, Mention::GoodPass);
    assert!(report.passed);
}

#[test]
fn test_full_pipeline() {
    let rows = read_roster_file(Path::new("tests/fixtures/cohort.csv"))
        .expect("Failed to read roster");
    assert_eq!(rows.len(), 9);

    let records = grade_roster(&rows);

    let mut buf = Vec::new();
    write_records(&mut buf, &records).unwrap();

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let results: Vec<ResultRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(results.len(), 9);

    let by_name = |name: &str| results.iter().find(|r| r.student == name).unwrap();

    assert_eq!(by_name("alice").mention, Some(Mention::IntermediatePass));
    assert_eq!(by_name("bruno").final_grade, Some(110.0));
    assert_eq!(by_name("carla").final_grade, Some(10.0));
    assert_eq!(by_name("diego").mention, Some(Mention::None));
    assert_eq!(by_name("elena").final_grade, Some(50.0));
    assert_eq!(by_name("felipe").final_grade, Some(55.0));
    assert_eq!(by_name("gabi").mention, Some(Mention::GoodPass));
    assert_eq!(by_name("heitor").final_grade, Some(220.0));
    assert_eq!(by_name("heitor").passed, Some(true));

    let iris = by_name("iris");
    assert_eq!(iris.final_grade, None);
    assert!(iris.error.as_deref().unwrap().contains("exam_score"));

    let summary = summarize(&records);
    assert_eq!(summary.students, 9);
    assert_eq!(summary.graded, 8);
    assert_eq!(summary.errors, 1);
    // alice, bruno, elena, felipe, gabi, heitor
    assert_eq!(summary.passed, 6);
    assert_eq!(summary.mentions[&Mention::IntermediatePass], 3);
    assert_eq!(summary.mentions[&Mention::Excellent], 2);
}
