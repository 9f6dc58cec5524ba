//! pH diagnostic engine.
//!
//! Pipeline: Validation (caller) → Threshold Classifier → Disease Matcher → Report
//!
//! The free-text path ([`match_free_text`]) sits beside the numeric one and
//! only reuses it when the text carries a `pH <number>` token.

mod classifier;
mod free_text;
mod matcher;
mod report;
mod validation;

pub use classifier::*;
pub use free_text::{extract_ph, format_disease_profile, score_disease, DEFAULT_RESPONSE};
pub use matcher::*;
pub use report::*;
pub use validation::*;

use crate::knowledge::{knowledge_base, KnowledgeBase};
use crate::models::{DiseaseMatch, FeedbackResult};

/// Stateless engine over a knowledge base.
///
/// Cheap to construct; holds only a shared reference, so one engine can be
/// used from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEngine<'a> {
    kb: &'a KnowledgeBase,
}

impl Default for DiagnosticEngine<'static> {
    fn default() -> Self {
        Self::new(knowledge_base())
    }
}

impl<'a> DiagnosticEngine<'a> {
    /// Create an engine over a specific knowledge base.
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &'a KnowledgeBase {
        self.kb
    }

    /// Classify a reading and attach ranked candidate diseases.
    ///
    /// Expects `0 <= ph <= 14`; see [`validate_ph_input`].
    pub fn classify(&self, ph: f64) -> FeedbackResult {
        let band = band_for(ph);
        let diseases: Vec<_> = match_ph(self.kb, ph)
            .into_iter()
            .map(|m| m.disease)
            .collect();
        let quick_measures = diseases
            .first()
            .map(|d| d.quick_measures.clone())
            .unwrap_or_default();

        FeedbackResult {
            ph,
            is_sick: band.is_sick(),
            status: band.status,
            severity: band.severity,
            description: band.description.to_string(),
            color: band.color.to_string(),
            recommendations: band.recommendations.iter().map(|r| r.to_string()).collect(),
            diseases,
            quick_measures,
        }
    }

    /// Ranked candidates with their scores.
    pub fn match_diseases(&self, ph: f64) -> Vec<DiseaseMatch> {
        match_ph(self.kb, ph)
    }

    /// Full text report for a reading.
    pub fn generate_report(&self, ph: f64) -> String {
        format_report(&self.classify(ph))
    }

    /// Best-effort answer to a chat question. Never fails.
    pub fn match_free_text(&self, text: &str) -> String {
        free_text::respond(self, text)
    }
}

/// Classify a reading against the built-in knowledge base.
pub fn classify(ph: f64) -> FeedbackResult {
    DiagnosticEngine::default().classify(ph)
}

/// Ranked candidates from the built-in knowledge base.
pub fn match_diseases(ph: f64) -> Vec<DiseaseMatch> {
    DiagnosticEngine::default().match_diseases(ph)
}

/// Report for a reading against the built-in knowledge base.
pub fn generate_report(ph: f64) -> String {
    DiagnosticEngine::default().generate_report(ph)
}

/// Chat answer against the built-in knowledge base.
pub fn match_free_text(text: &str) -> String {
    DiagnosticEngine::default().match_free_text(text)
}
