//! End-to-end analysis over a realistic HR-style table.

use datascan_core::{Column, DataType, Table, Value};
use datascan_detect::{DatasetAnalyzer, DetectionMethod, PiiType, RiskCategory};

fn hr_table() -> Table {
    let long_note = "The employee joined after a long recruitment process. \
        Their onboarding covered security training, equipment handover, and \
        a detailed review of internal policies. "
        .repeat(5);

    Table::with_columns(vec![
        Column::text(
            "employee_id",
            ["E-1001", "E-1002", "E-1003", "E-1004"],
        ),
        Column::text(
            "full_name",
            ["Ada Lovelace", "Alan Turing", "Grace Hopper", "Edsger Dijkstra"],
        ),
        Column::text(
            "email",
            [
                "ada@example.com",
                "alan@example.com",
                "grace@example.com",
                "edsger@example.com",
            ],
        ),
        Column::text(
            "ssn",
            ["123-45-6789", "987-65-4321", "111-22-3333", "222-33-4444"],
        ),
        Column::new(
            "phone",
            DataType::Text,
            vec![
                Value::from("555-123-4567"),
                Value::from("555-987-6543"),
                Value::Null,
                Value::from("555-222-3333"),
            ],
        ),
        Column::text("department", ["Engineering", "Engineering", "Research", "Research"]),
        Column::integers("age", [36, 41, 85, 72]),
        Column::text(
            "notes",
            [long_note.as_str(), long_note.as_str(), long_note.as_str(), long_note.as_str()],
        ),
    ])
    .unwrap()
}

#[test]
fn flags_expected_columns_in_source_order() {
    let report = DatasetAnalyzer::new().analyze(&hr_table());

    let flagged: Vec<&str> = report
        .findings
        .iter()
        .map(|f| f.column_name.as_str())
        .collect();
    assert_eq!(
        flagged,
        vec!["employee_id", "full_name", "email", "ssn", "phone", "age"]
    );
    assert_eq!(report.columns_scanned, 8);
}

#[test]
fn ssn_column_is_pattern_detected_and_high_risk() {
    let report = DatasetAnalyzer::new().analyze(&hr_table());
    let finding = report.finding("ssn").unwrap();

    assert_eq!(finding.pii_type, PiiType::Ssn);
    assert_eq!(finding.method, DetectionMethod::Pattern);
    assert_eq!(finding.impact, 5);
    assert!((finding.risk_score - 100.0).abs() < f64::EPSILON);
    assert_eq!(finding.risk_category, RiskCategory::High);
    assert!(finding
        .recommended_action
        .contains("Tokenization or full masking"));
}

#[test]
fn name_heuristic_covers_columns_without_value_patterns() {
    let report = DatasetAnalyzer::new().analyze(&hr_table());

    let name = report.finding("full_name").unwrap();
    assert_eq!(name.pii_type, PiiType::Name);
    assert_eq!(name.method, DetectionMethod::NameHeuristic);
    assert!((name.confidence - 0.8).abs() < f64::EPSILON);

    let id = report.finding("employee_id").unwrap();
    assert_eq!(id.pii_type, PiiType::Id);
    assert_eq!(id.method, DetectionMethod::NameHeuristic);
}

#[test]
fn excluded_and_prose_columns_are_absent() {
    let report = DatasetAnalyzer::new().analyze(&hr_table());
    assert!(report.finding("department").is_none());
    assert!(report.finding("notes").is_none());
}

#[test]
fn missing_values_are_counted_and_phone_still_flags() {
    let report = DatasetAnalyzer::new().analyze(&hr_table());
    let phone = report.finding("phone").unwrap();

    assert_eq!(phone.missing_values, 1);
    assert_eq!(phone.distinct_values, 3);
    assert_eq!(phone.pii_type, PiiType::Phone);
    // 3 of 3 non-missing values match: full ratio.
    assert!((phone.confidence - 1.0).abs() < f64::EPSILON);
}

#[test]
fn summary_aggregates_match_findings() {
    let report = DatasetAnalyzer::new().analyze(&hr_table());
    let summary = report.summary();

    assert_eq!(summary.columns_scanned, 8);
    assert_eq!(summary.flagged, report.findings.len());
    assert_eq!(
        summary.high_risk + summary.medium_risk + summary.low_risk,
        summary.flagged
    );
    assert!(summary.average_risk > 0.0);
    assert!(summary.max_risk >= summary.average_risk);
}

#[test]
fn report_serializes_to_json() {
    let report = DatasetAnalyzer::new().analyze(&hr_table());
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"pii_type\":\"ssn\""));
    assert!(json.contains("\"method\":\"pattern\""));
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_analysis_matches_sequential() {
    let analyzer = DatasetAnalyzer::new();
    let table = hr_table();

    let sequential = analyzer.analyze(&table);
    let parallel = analyzer.analyze_parallel(&table);

    assert_eq!(sequential.columns_scanned, parallel.columns_scanned);
    let seq: Vec<_> = sequential
        .findings
        .iter()
        .map(|f| (f.column_name.clone(), f.pii_type, f.risk_score))
        .collect();
    let par: Vec<_> = parallel
        .findings
        .iter()
        .map(|f| (f.column_name.clone(), f.pii_type, f.risk_score))
        .collect();
    assert_eq!(seq, par);
}
