//! # MAHC Scenario Tests
//!
//! Concrete end-to-end scenarios against the built-in MAHC table, covering
//! single-reading validation, closure decisions over a reading history, and
//! report generation.

use chrono::{TimeZone, Utc};
use poolsafe_compliance::{
    ChemicalEvaluator, MahcEvaluator, OverallCompliance, PoolStatus, ValidationStatus,
};
use poolsafe_core::{
    latest_per_parameter, ChemicalReading, PoolId, PoolsafeError, ReadingSet,
};

fn evaluator() -> MahcEvaluator {
    MahcEvaluator::default()
}

fn reading(parameter: &str, value: f64, hour: u32) -> ChemicalReading {
    ChemicalReading::new(
        PoolId::new("main-pool").unwrap(),
        parameter,
        value,
        Utc.with_ymd_and_hms(2026, 7, 4, hour, 0, 0).unwrap(),
    )
}

#[test]
fn ideal_free_chlorine_is_good() {
    let v = evaluator().validate_chemical(2.0, "freeChlorine").unwrap();
    assert_eq!(v.status, ValidationStatus::Good);
}

#[test]
fn high_ph_is_critical_and_closes() {
    let v = evaluator().validate_chemical(8.5, "ph").unwrap();
    assert_eq!(v.status, ValidationStatus::Critical);
    assert!(v.requires_closure);
}

#[test]
fn low_free_chlorine_is_critical_and_names_minimum() {
    let v = evaluator().validate_chemical(0.3, "freeChlorine").unwrap();
    assert_eq!(v.status, ValidationStatus::Critical);
    assert!(v.requires_closure);
    assert!(v.message.contains("minimum of 1.0 ppm"), "{}", v.message);
}

#[test]
fn high_calcium_is_critical_without_closure() {
    let v = evaluator().validate_chemical(450.0, "calciumHardness").unwrap();
    assert_eq!(v.status, ValidationStatus::Critical);
    assert!(!v.requires_closure);
}

#[test]
fn ideal_reading_set_is_compliant() {
    let set: ReadingSet = serde_json::from_str(r#"{"freeChlorine": 2.0, "ph": 7.4, "alkalinity": 100}"#)
        .unwrap();
    let report = evaluator().generate_compliance_report(&set).unwrap();
    assert_eq!(report.overall, OverallCompliance::Compliant);
    assert_eq!(report.passed, 3);
    assert_eq!(report.warnings, 0);
    assert_eq!(report.critical, 0);
    assert_eq!(report.emergency, 0);
    assert!(report.recommendations.is_empty());
    assert_eq!(report.pool_status(), PoolStatus::Operational);
}

#[test]
fn unknown_chemical_is_rejected() {
    match evaluator().validate_chemical(1.0, "unknownChemical") {
        Err(PoolsafeError::UnknownParameter { name }) => assert_eq!(name, "unknownChemical"),
        other => panic!("expected UnknownParameter, got {other:?}"),
    }
}

#[test]
fn closure_over_latest_readings() {
    let history = vec![
        reading("freeChlorine", 0.4, 8),
        reading("ph", 7.4, 8),
        reading("calciumHardness", 480.0, 8),
        reading("freeChlorine", 2.1, 12),
    ];

    let all: Vec<ChemicalReading> = history.clone();
    let decision = evaluator().should_close_pool(&all).unwrap();
    assert!(decision.should_close);
    assert_eq!(decision.reasons.len(), 1);
    assert!(decision.reasons[0].starts_with("Free chlorine 0.4 ppm"));

    let latest: Vec<ChemicalReading> = latest_per_parameter(&history)
        .into_iter()
        .cloned()
        .collect();
    let decision = evaluator().should_close_pool(&latest).unwrap();
    assert!(!decision.should_close, "calcium alone must not close the pool");
    assert!(decision.reasons.is_empty());
}

#[test]
fn closure_reasons_follow_evaluation_order() {
    let readings = vec![
        reading("ph", 6.9, 9),
        reading("totalAlkalinity", 40.0, 9),
        reading("freeChlorine", 0.0, 9),
    ];
    let decision = evaluator().should_close_pool(&readings).unwrap();
    assert!(decision.should_close);
    assert_eq!(decision.reasons.len(), 2);
    assert!(decision.reasons[0].starts_with("pH 6.9"));
    assert!(decision.reasons[1].starts_with("Free chlorine 0.0 ppm"));
}

#[test]
fn mixed_report_recommendations() {
    let set: ReadingSet = [
        ("freeChlorine", 1.2),
        ("ph", 7.4),
        ("calciumHardness", 450.0),
        ("cyanuricAcid", 40.0),
    ]
    .into_iter()
    .collect();
    let report = evaluator().generate_compliance_report(&set).unwrap();
    assert_eq!(report.overall, OverallCompliance::Critical);
    assert_eq!(report.passed, 2);
    assert_eq!(report.warnings, 1);
    assert_eq!(report.critical, 1);
    assert_eq!(report.emergency, 0);
    assert_eq!(report.pool_status(), PoolStatus::AttentionRequired);
    assert_eq!(
        report.recommendations,
        vec![
            "Increase free chlorine toward 1.5-2.5 ppm by adding liquid or granular chlorine"
                .to_string(),
            "Decrease calcium hardness toward 200-350 ppm by partially draining and refilling with fresh water"
                .to_string(),
        ]
    );
    assert_eq!(report.required_actions, report.recommendations);
}

#[test]
fn emergency_report_closes_pool() {
    let set: ReadingSet = [("freeChlorine", 0.3), ("ph", 8.5)].into_iter().collect();
    let report = evaluator().generate_compliance_report(&set).unwrap();
    assert_eq!(report.emergency, 2);
    assert_eq!(report.pool_status(), PoolStatus::Closed);
    assert!(report.required_actions[0].starts_with("Close the pool until free chlorine"));
}

#[test]
fn report_serializes_with_snake_case_fields() {
    let set: ReadingSet = [("ph", 7.7)].into_iter().collect();
    let report = evaluator().generate_compliance_report(&set).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["overall"], "critical");
    assert_eq!(json["details"][0]["parameter"], "ph");
    assert_eq!(json["details"][0]["verdict"]["requires_closure"], true);
}
