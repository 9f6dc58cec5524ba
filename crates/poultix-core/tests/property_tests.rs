//! Property-based tests for the numeric diagnostic path.

use proptest::prelude::*;

use poultix_core::engine::{self, range_score, NO_RISK_STATEMENT};
use poultix_core::knowledge::{default_records, knowledge_base, KnowledgeBase};
use poultix_core::models::{DiseaseCategory, DiseaseRecord, PhRange, PhStatus, Severity};
use poultix_core::DiagnosticEngine;

fn expected_status(ph: f64) -> PhStatus {
    if ph < 4.5 {
        PhStatus::SevereAcidosis
    } else if ph < 6.5 {
        PhStatus::AcidosisWarning
    } else if ph <= 7.5 {
        PhStatus::HealthyRange
    } else if ph <= 8.5 {
        PhStatus::AlkalosisWarning
    } else {
        PhStatus::SevereAlkalosis
    }
}

fn record_with_range(min: f64, max: f64) -> DiseaseRecord {
    DiseaseRecord {
        name: "Probe".into(),
        category: DiseaseCategory::Infection,
        ph_range: PhRange::new(min, max),
        aliases: vec![],
        symptoms: vec![],
        causes: vec![],
        quick_measures: vec![],
        treatment: String::new(),
        severity: Severity::Low,
        mortality: String::new(),
    }
}

#[test]
fn test_bands_partition_scale_at_tenths() {
    let mut seen = std::collections::HashSet::new();
    for tenth in 0..=140 {
        let ph = tenth as f64 / 10.0;
        let result = engine::classify(ph);
        assert!(PhStatus::ALL.contains(&result.status));
        assert_eq!(result.status, expected_status(ph), "pH {}", ph);
        seen.insert(result.status);
    }
    assert_eq!(seen.len(), PhStatus::ALL.len());
}

#[test]
fn test_embedded_table_is_valid() {
    assert!(KnowledgeBase::new(default_records()).is_ok());
}

#[test]
fn test_no_match_report_branch() {
    let empty = KnowledgeBase::new(vec![]).unwrap();
    let engine = DiagnosticEngine::new(&empty);
    for ph in [0.0, 4.4, 7.0, 8.6, 14.0] {
        let report = engine.generate_report(ph);
        assert!(report.contains(NO_RISK_STATEMENT), "pH {}", ph);
    }
}

proptest! {
    #[test]
    fn prop_status_matches_band(ph in 0.0f64..=14.0) {
        let result = engine::classify(ph);
        prop_assert_eq!(result.status, expected_status(ph));
    }

    #[test]
    fn prop_healthy_iff_in_band(ph in 0.0f64..=14.0) {
        let result = engine::classify(ph);
        prop_assert_eq!(result.is_sick, !(6.5..=7.5).contains(&ph));
    }

    #[test]
    fn prop_matches_contain_reading(ph in 0.0f64..=14.0) {
        for m in engine::match_diseases(ph) {
            prop_assert!(m.disease.ph_range.min <= ph && ph <= m.disease.ph_range.max);
        }
    }

    #[test]
    fn prop_matches_ranked_descending(ph in 0.0f64..=14.0) {
        let matches = engine::match_diseases(ph);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn prop_every_containing_record_is_returned(ph in 0.0f64..=14.0) {
        let expected = knowledge_base().records().iter().filter(|r| r.matches_ph(ph)).count();
        prop_assert_eq!(engine::match_diseases(ph).len(), expected);
    }

    #[test]
    fn prop_score_decreases_away_from_center(
        min in 0.0f64..10.0,
        width in 0.1f64..4.0,
        near in 0.0f64..0.5,
        gap in 0.05f64..0.5,
    ) {
        let record = record_with_range(min, min + width);
        let center = record.ph_range.center();
        let half = width / 2.0;

        let close = center + near * half;
        let far = center + (near + gap) * half;
        prop_assert!(range_score(&record, close) > range_score(&record, far));

        // Symmetric on the other side of the center
        let far_below = center - (near + gap) * half;
        prop_assert!(range_score(&record, close) > range_score(&record, far_below));
    }

    #[test]
    fn prop_report_is_deterministic(ph in 0.0f64..=14.0) {
        prop_assert_eq!(engine::generate_report(ph), engine::generate_report(ph));
    }

    #[test]
    fn prop_report_never_empty(ph in 0.0f64..=14.0) {
        let report = engine::generate_report(ph);
        prop_assert!(report.starts_with("pH Analysis Report"));
        prop_assert!(report.contains("Monitoring"));
    }

    #[test]
    fn prop_free_text_never_panics(text in ".*") {
        let reply = engine::match_free_text(&text);
        prop_assert!(!reply.is_empty());
    }
}
