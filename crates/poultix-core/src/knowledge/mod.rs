//! Disease knowledge base.
//!
//! The built-in table is constructed once, on first access, and shared
//! read-only for the rest of the process. Custom tables (tests, regional
//! variants) go through [`KnowledgeBase::new`], which checks the range and
//! naming invariants.

mod table;

pub use table::default_records;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use strsim::jaro_winkler;
use thiserror::Error;

use crate::models::{DiseaseCategory, DiseaseRecord};

/// Minimum Jaro-Winkler similarity for a fuzzy name lookup.
const FUZZY_LOOKUP_THRESHOLD: f64 = 0.85;

static DEFAULT_KNOWLEDGE_BASE: Lazy<KnowledgeBase> = Lazy::new(|| KnowledgeBase {
    records: default_records(),
});

/// The process-wide built-in knowledge base.
pub fn knowledge_base() -> &'static KnowledgeBase {
    &DEFAULT_KNOWLEDGE_BASE
}

/// Knowledge base errors.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Disease record has an empty name")]
    EmptyName,

    #[error("Invalid pH range for {0}")]
    InvalidRange(String),

    #[error("Duplicate disease name: {0}")]
    DuplicateName(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;

/// Flat, ordered collection of disease records.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    records: Vec<DiseaseRecord>,
}

impl KnowledgeBase {
    /// Build a knowledge base, validating every record.
    pub fn new(records: Vec<DiseaseRecord>) -> KnowledgeResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            let key = record.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(KnowledgeError::EmptyName);
            }
            if !record.ph_range.is_valid() {
                return Err(KnowledgeError::InvalidRange(record.name.clone()));
            }
            if !seen.insert(key) {
                return Err(KnowledgeError::DuplicateName(record.name.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> KnowledgeResult<Self> {
        let records: Vec<DiseaseRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// All records in table order.
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one category, in table order.
    pub fn by_category(&self, category: DiseaseCategory) -> Vec<&DiseaseRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Look up a disease by name or alias.
    ///
    /// Exact (case-insensitive) matches win; otherwise the closest name or
    /// alias above the fuzzy threshold is returned.
    pub fn find(&self, name: &str) -> Option<&DiseaseRecord> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let exact = self.records.iter().find(|r| {
            r.name.to_lowercase() == query || r.aliases.iter().any(|a| a.to_lowercase() == query)
        });
        if exact.is_some() {
            return exact;
        }

        let mut best: Option<(&DiseaseRecord, f64)> = None;
        for record in &self.records {
            let similarity = std::iter::once(record.name.to_lowercase())
                .chain(record.aliases.iter().map(|a| a.to_lowercase()))
                .map(|candidate| jaro_winkler(&query, &candidate))
                .fold(0.0_f64, f64::max);

            // Strictly greater keeps the earlier record on ties
            if best.map_or(true, |(_, s)| similarity > s) {
                best = Some((record, similarity));
            }
        }

        best.filter(|(_, s)| *s >= FUZZY_LOOKUP_THRESHOLD)
            .map(|(record, _)| record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PhRange, Severity};

    fn record(name: &str, min: f64, max: f64) -> DiseaseRecord {
        DiseaseRecord {
            name: name.into(),
            category: DiseaseCategory::Infection,
            ph_range: PhRange::new(min, max),
            aliases: vec![],
            symptoms: vec!["Coughing".into()],
            causes: vec![],
            quick_measures: vec![],
            treatment: "Rest".into(),
            severity: Severity::Low,
            mortality: "Low".into(),
        }
    }

    #[test]
    fn test_default_table_is_valid() {
        let kb = KnowledgeBase::new(default_records()).unwrap();
        assert_eq!(kb.len(), knowledge_base().len());
        assert!(!kb.is_empty());
    }

    #[test]
    fn test_default_table_leaves_healthy_band_clear() {
        for record in knowledge_base().records() {
            for tenth in 65..=75 {
                let ph = tenth as f64 / 10.0;
                assert!(
                    !record.matches_ph(ph),
                    "{} unexpectedly covers healthy pH {}",
                    record.name,
                    ph
                );
            }
        }
    }

    #[test]
    fn test_every_category_present() {
        let kb = knowledge_base();
        for category in [
            DiseaseCategory::Acidosis,
            DiseaseCategory::Alkalosis,
            DiseaseCategory::Nutritional,
            DiseaseCategory::Infection,
        ] {
            assert!(!kb.by_category(category).is_empty(), "{} empty", category);
        }
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = KnowledgeBase::new(vec![record("Backwards", 6.0, 5.0)]);
        assert!(matches!(result, Err(KnowledgeError::InvalidRange(_))));
    }

    #[test]
    fn test_rejects_out_of_scale_range() {
        let result = KnowledgeBase::new(vec![record("Too High", 12.0, 15.0)]);
        assert!(matches!(result, Err(KnowledgeError::InvalidRange(_))));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = KnowledgeBase::new(vec![record("Gapeworm", 5.0, 6.0), record("gapeworm", 7.0, 8.0)]);
        assert!(matches!(result, Err(KnowledgeError::DuplicateName(_))));
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = KnowledgeBase::new(vec![record("  ", 5.0, 6.0)]);
        assert!(matches!(result, Err(KnowledgeError::EmptyName)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "name": "Gapeworm",
            "category": "Infection",
            "ph_range": {"min": 5.0, "max": 6.0},
            "symptoms": ["Gasping"],
            "causes": ["Syngamus trachea"],
            "quick_measures": ["Deworm with flubendazole"],
            "treatment": "Flubendazole for 7 days",
            "severity": "medium",
            "mortality": "Low"
        }]"#;

        let kb = KnowledgeBase::from_json(json).unwrap();
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.records()[0].severity, Severity::Medium);
        assert!(kb.records()[0].aliases.is_empty());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            KnowledgeBase::from_json("not json"),
            Err(KnowledgeError::Json(_))
        ));
    }

    #[test]
    fn test_find_by_name_and_alias() {
        let kb = knowledge_base();
        assert_eq!(kb.find("Coccidiosis").unwrap().name, "Coccidiosis");
        assert_eq!(kb.find("COCCI").unwrap().name, "Coccidiosis");
        assert_eq!(kb.find("heat stress").unwrap().name, "Respiratory Alkalosis");
    }

    #[test]
    fn test_find_tolerates_typos() {
        let kb = knowledge_base();
        assert_eq!(kb.find("coccidiossis").unwrap().name, "Coccidiosis");
        assert_eq!(kb.find("newcastel").unwrap().name, "Newcastle Disease");
    }

    #[test]
    fn test_find_unknown() {
        let kb = knowledge_base();
        assert!(kb.find("").is_none());
        assert!(kb.find("zzzzqqqq").is_none());
    }
}
