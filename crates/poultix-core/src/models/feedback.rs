//! Classification results for a single pH reading.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DiseaseRecord, Severity};

/// Coarse health status chosen by the threshold bands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PhStatus {
    SevereAcidosis,
    AcidosisWarning,
    HealthyRange,
    AlkalosisWarning,
    SevereAlkalosis,
}

impl PhStatus {
    /// All statuses from most acidic to most alkaline.
    pub const ALL: [PhStatus; 5] = [
        PhStatus::SevereAcidosis,
        PhStatus::AcidosisWarning,
        PhStatus::HealthyRange,
        PhStatus::AlkalosisWarning,
        PhStatus::SevereAlkalosis,
    ];

    /// Display label shown to the farmer.
    pub fn label(&self) -> &'static str {
        match self {
            PhStatus::SevereAcidosis => "Severe Acidosis",
            PhStatus::AcidosisWarning => "Acidosis Warning",
            PhStatus::HealthyRange => "Healthy Range",
            PhStatus::AlkalosisWarning => "Alkalosis Warning",
            PhStatus::SevereAlkalosis => "Severe Alkalosis",
        }
    }
}

impl fmt::Display for PhStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A candidate disease with its relevance score (higher is better, max 100).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseMatch {
    pub disease: DiseaseRecord,
    pub score: f64,
}

/// Everything the UI needs to present a reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackResult {
    /// The classified reading
    pub ph: f64,
    /// False only inside the healthy band
    pub is_sick: bool,
    pub status: PhStatus,
    pub severity: Severity,
    /// Fixed prose for the band
    pub description: String,
    /// Hex display colour for the band
    pub color: String,
    /// Fixed band-specific advice
    pub recommendations: Vec<String>,
    /// Ranked candidate diseases
    pub diseases: Vec<DiseaseRecord>,
    /// Quick measures of the top-ranked candidate
    pub quick_measures: Vec<String>,
}

impl FeedbackResult {
    /// The highest-ranked candidate, if any matched.
    pub fn top_disease(&self) -> Option<&DiseaseRecord> {
        self.diseases.first()
    }
}

/// Vibration pattern the host fires after a reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HapticPattern {
    Success,
    Warning,
    Error,
}

impl HapticPattern {
    /// Name handed to the host across the FFI boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            HapticPattern::Success => "Success",
            HapticPattern::Warning => "Warning",
            HapticPattern::Error => "Error",
        }
    }
}

impl From<Severity> for HapticPattern {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Low => HapticPattern::Success,
            Severity::Medium | Severity::High => HapticPattern::Warning,
            Severity::Critical => HapticPattern::Error,
        }
    }
}
