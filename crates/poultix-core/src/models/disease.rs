//! Disease knowledge-base models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest value on the pH scale.
pub const PH_MIN: f64 = 0.0;

/// Highest value on the pH scale.
pub const PH_MAX: f64 = 14.0;

/// Grouping of a disease record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DiseaseCategory {
    Acidosis,
    Alkalosis,
    Nutritional,
    Infection,
}

impl DiseaseCategory {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            DiseaseCategory::Acidosis => "Acidosis",
            DiseaseCategory::Alkalosis => "Alkalosis",
            DiseaseCategory::Nutritional => "Nutritional",
            DiseaseCategory::Infection => "Infection",
        }
    }
}

impl fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All tiers, most severe first (report order).
    pub const DESCENDING: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Lowercase name as used in stored JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive pH bounds for which a disease is a candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhRange {
    pub min: f64,
    pub max: f64,
}

impl PhRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if `ph` falls inside the range (both ends inclusive).
    pub fn contains(&self, ph: f64) -> bool {
        self.min <= ph && ph <= self.max
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Bounds are ordered and lie on the 0-14 scale.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && self.min >= PH_MIN
            && self.max <= PH_MAX
    }
}

impl fmt::Display for PhRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} - {:.1}", self.min, self.max)
    }
}

/// A named entry in the disease knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseRecord {
    /// Unique display name
    pub name: String,
    pub category: DiseaseCategory,
    /// pH readings for which this disease is a candidate
    pub ph_range: PhRange,
    /// Alternative lowercase names recognised in free text
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Symptom descriptors, most characteristic first
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    /// Corrective actions, most urgent first
    pub quick_measures: Vec<String>,
    /// Treatment protocol summary
    pub treatment: String,
    pub severity: Severity,
    /// Mortality-risk descriptor (display only)
    pub mortality: String,
}

impl DiseaseRecord {
    /// Check whether this record is a candidate for the reading.
    pub fn matches_ph(&self, ph: f64) -> bool {
        self.ph_range.contains(ph)
    }

    /// The leading symptoms used in short summaries.
    pub fn key_symptoms(&self) -> &[String] {
        let end = self.symptoms.len().min(3);
        &self.symptoms[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        let range = PhRange::new(4.0, 6.0);
        assert!(range.contains(4.0));
        assert!(range.contains(6.0));
        assert!(range.contains(5.1));
        assert!(!range.contains(3.99));
        assert!(!range.contains(6.01));
    }

    #[test]
    fn test_range_geometry() {
        let range = PhRange::new(4.0, 6.0);
        assert_eq!(range.center(), 5.0);
        assert_eq!(range.width(), 2.0);
    }

    #[test]
    fn test_range_validity() {
        assert!(PhRange::new(0.0, 14.0).is_valid());
        assert!(PhRange::new(7.0, 7.0).is_valid());
        assert!(!PhRange::new(6.0, 5.0).is_valid());
        assert!(!PhRange::new(-0.5, 5.0).is_valid());
        assert!(!PhRange::new(5.0, 14.5).is_valid());
        assert!(!PhRange::new(f64::NAN, 5.0).is_valid());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert_eq!(Severity::DESCENDING[0], Severity::Critical);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
