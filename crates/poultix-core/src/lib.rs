//! Poultix Core Library
//!
//! pH-based disease diagnostics for poultry, shared by the pH reader screens
//! and the chat assistant of the Poultix mobile app.
//!
//! # Architecture
//!
//! ```text
//!   Raw input ──► Validation ──► Threshold Classifier ──► status / severity / advice
//!                                       │
//!                                       ▼
//!                               Disease Matcher ◄──── Knowledge Base (static)
//!                                       │
//!                      ┌────────────────┼────────────────┐
//!                      ▼                ▼                ▼
//!                 FeedbackResult    pH Report      Reading History
//!                  (UI, haptics)   (UI, chat)     (key-value store)
//!
//!   Chat text ──► pH token? ──yes──► pH Report
//!                     │no
//!                     ▼
//!               keyword scoring ──► disease profile / pH explainer / default
//! ```
//!
//! # Core Principle
//!
//! **The numeric path is exact and deterministic.** Identical readings always
//! produce identical results; the free-text path is best-effort only.
//!
//! # Modules
//!
//! - [`models`]: Domain types (DiseaseRecord, FeedbackResult, ReadingHistoryEntry, etc.)
//! - [`knowledge`]: Immutable disease table and lookups
//! - [`engine`]: Classifier, matcher, report formatter, free-text matcher
//! - [`store`]: Key-value stores (in-memory and SQLite)
//! - [`history`]: Capped reading history and the submit-reading flow
//! - [`config`]: Engine configuration

pub mod config;
pub mod engine;
pub mod history;
pub mod knowledge;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use config::EngineConfig;
pub use engine::{DiagnosticEngine, ValidationError};
pub use history::{HapticSink, ReadingHistory, ReadingService};
pub use knowledge::{knowledge_base, KnowledgeBase};
pub use models::{
    DiseaseCategory, DiseaseMatch, DiseaseRecord, FeedbackResult, HapticPattern, PhRange,
    PhStatus, ReadingHistoryEntry, Severity,
};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum PoultixError {
    #[error("Invalid pH value: {0}")]
    InvalidPhValue(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<ValidationError> for PoultixError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::InvalidPhValue(reason) => PoultixError::InvalidPhValue(reason),
        }
    }
}

impl From<store::StoreError> for PoultixError {
    fn from(e: store::StoreError) -> Self {
        PoultixError::StorageError(e.to_string())
    }
}

impl From<serde_json::Error> for PoultixError {
    fn from(e: serde_json::Error) -> Self {
        PoultixError::SerializationError(e.to_string())
    }
}

impl From<config::ConfigError> for PoultixError {
    fn from(e: config::ConfigError) -> Self {
        PoultixError::ConfigError(e.to_string())
    }
}

impl From<history::HistoryError> for PoultixError {
    fn from(e: history::HistoryError) -> Self {
        match e {
            history::HistoryError::Validation(v) => v.into(),
            history::HistoryError::Store(s) => s.into(),
            history::HistoryError::Json(j) => j.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for PoultixError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PoultixError::StorageError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Engine Functions (exported to FFI)
// =========================================================================

/// Classify a reading. Validate raw input with [`validate_ph_input`] first.
#[uniffi::export]
pub fn classify_ph(ph: f64) -> FfiFeedbackResult {
    engine::classify(ph).into()
}

/// Candidate diseases for a reading, best first.
#[uniffi::export]
pub fn match_diseases(ph: f64) -> Vec<FfiDiseaseMatch> {
    engine::match_diseases(ph)
        .into_iter()
        .map(|m| m.into())
        .collect()
}

/// Formatted report for a reading.
#[uniffi::export]
pub fn generate_report(ph: f64) -> String {
    engine::generate_report(ph)
}

/// Chat assistant answer for a free-text question.
#[uniffi::export]
pub fn match_free_text(text: String) -> String {
    engine::match_free_text(&text)
}

/// Parse and range-check raw user input.
#[uniffi::export]
pub fn validate_ph_input(raw: String) -> Result<f64, PoultixError> {
    Ok(engine::validate_ph_input(&raw)?)
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a history store at the given path.
#[uniffi::export]
pub fn open_history_store(
    path: String,
    config_json: Option<String>,
) -> Result<Arc<PoultixCore>, PoultixError> {
    let config = match config_json {
        Some(json) => EngineConfig::from_json(&json)?,
        None => EngineConfig::default(),
    };
    let store = SqliteStore::open(&path)?;
    Ok(Arc::new(PoultixCore::new(store, &config)))
}

/// Create an in-memory history store (for testing).
#[uniffi::export]
pub fn open_history_store_in_memory() -> Result<Arc<PoultixCore>, PoultixError> {
    let store = SqliteStore::open_in_memory()?;
    Ok(Arc::new(PoultixCore::new(store, &EngineConfig::default())))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe reading service wrapper for FFI.
#[derive(uniffi::Object)]
pub struct PoultixCore {
    service: Mutex<ReadingService<'static, SqliteStore>>,
}

impl PoultixCore {
    fn new(store: SqliteStore, config: &EngineConfig) -> Self {
        Self {
            service: Mutex::new(ReadingService::new(store, config)),
        }
    }
}

#[uniffi::export]
impl PoultixCore {
    /// Validate, classify and record a reading.
    ///
    /// The host fires the returned entry's haptic pattern.
    pub fn submit_reading(
        &self,
        raw_input: String,
        chicken_id: Option<String>,
    ) -> Result<FfiReadingEntry, PoultixError> {
        let service = self.service.lock()?;
        let entry = service.submit(&raw_input, chicken_id)?;
        Ok(entry.into())
    }

    /// Recorded readings, newest first.
    pub fn recent_readings(&self) -> Result<Vec<FfiReadingEntry>, PoultixError> {
        let service = self.service.lock()?;
        let entries = service.recent()?;
        Ok(entries.into_iter().map(|e| e.into()).collect())
    }

    /// Delete all recorded readings.
    pub fn clear_history(&self) -> Result<(), PoultixError> {
        let service = self.service.lock()?;
        service.clear_history()?;
        Ok(())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe disease record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDisease {
    pub name: String,
    pub category: String,
    pub ph_min: f64,
    pub ph_max: f64,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub quick_measures: Vec<String>,
    pub treatment: String,
    pub severity: String,
    pub mortality: String,
}

impl From<DiseaseRecord> for FfiDisease {
    fn from(record: DiseaseRecord) -> Self {
        Self {
            name: record.name,
            category: record.category.to_string(),
            ph_min: record.ph_range.min,
            ph_max: record.ph_range.max,
            symptoms: record.symptoms,
            causes: record.causes,
            quick_measures: record.quick_measures,
            treatment: record.treatment,
            severity: record.severity.to_string(),
            mortality: record.mortality,
        }
    }
}

/// FFI-safe scored candidate.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDiseaseMatch {
    pub disease: FfiDisease,
    pub score: f64,
}

impl From<DiseaseMatch> for FfiDiseaseMatch {
    fn from(m: DiseaseMatch) -> Self {
        Self {
            disease: m.disease.into(),
            score: m.score,
        }
    }
}

/// FFI-safe classification result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFeedbackResult {
    pub ph: f64,
    pub is_sick: bool,
    pub status: String,
    pub severity: String,
    pub description: String,
    pub color: String,
    pub recommendations: Vec<String>,
    pub diseases: Vec<FfiDisease>,
    pub quick_measures: Vec<String>,
    /// Vibration pattern for the host: "Success", "Warning" or "Error"
    pub haptic: String,
}

impl From<FeedbackResult> for FfiFeedbackResult {
    fn from(feedback: FeedbackResult) -> Self {
        Self {
            ph: feedback.ph,
            is_sick: feedback.is_sick,
            status: feedback.status.to_string(),
            severity: feedback.severity.to_string(),
            description: feedback.description,
            color: feedback.color,
            recommendations: feedback.recommendations,
            diseases: feedback.diseases.into_iter().map(|d| d.into()).collect(),
            quick_measures: feedback.quick_measures,
            haptic: HapticPattern::from(feedback.severity).as_str().to_string(),
        }
    }
}

/// FFI-safe history entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiReadingEntry {
    pub id: String,
    pub value: f64,
    pub timestamp: String,
    pub feedback: FfiFeedbackResult,
    pub chicken_id: Option<String>,
}

impl From<ReadingHistoryEntry> for FfiReadingEntry {
    fn from(entry: ReadingHistoryEntry) -> Self {
        Self {
            id: entry.id,
            value: entry.value,
            timestamp: entry.timestamp,
            feedback: entry.feedback.into(),
            chicken_id: entry.chicken_id,
        }
    }
}
