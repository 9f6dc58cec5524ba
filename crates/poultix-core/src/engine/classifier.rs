//! Threshold classifier.
//!
//! Bands, evaluated in order (first match wins):
//! - ph < 4.5: Severe Acidosis (critical)
//! - 4.5 <= ph < 6.5: Acidosis Warning (high)
//! - 6.5 <= ph <= 7.5: Healthy Range (low)
//! - 7.5 < ph <= 8.5: Alkalosis Warning (medium)
//! - ph > 8.5: Severe Alkalosis (critical)
//!
//! Boundary edits must keep the bands a partition of 0 - 14.

use crate::models::{PhStatus, Severity};

/// Upper (exclusive) bound of the severe acidosis band.
pub const SEVERE_ACIDOSIS_BELOW: f64 = 4.5;
/// Lower (inclusive) bound of the healthy band.
pub const HEALTHY_MIN: f64 = 6.5;
/// Upper (inclusive) bound of the healthy band.
pub const HEALTHY_MAX: f64 = 7.5;
/// Upper (inclusive) bound of the alkalosis warning band.
pub const ALKALOSIS_WARNING_MAX: f64 = 8.5;

/// Fixed presentation data for one threshold band.
#[derive(Debug, Clone, PartialEq)]
pub struct PhBand {
    pub status: PhStatus,
    pub severity: Severity,
    pub color: &'static str,
    pub description: &'static str,
    pub recommendations: [&'static str; 4],
}

impl PhBand {
    /// False only for the healthy band.
    pub fn is_sick(&self) -> bool {
        self.status != PhStatus::HealthyRange
    }
}

static SEVERE_ACIDOSIS: PhBand = PhBand {
    status: PhStatus::SevereAcidosis,
    severity: Severity::Critical,
    color: "#DC2626",
    description: "pH is dangerously low. The bird is likely suffering from severe acidosis \
                  and needs immediate attention.",
    recommendations: [
        "Contact a veterinarian immediately",
        "Provide sodium bicarbonate in drinking water",
        "Isolate the affected bird from the flock",
        "Check feed for mould and spoilage",
    ],
};

static ACIDOSIS_WARNING: PhBand = PhBand {
    status: PhStatus::AcidosisWarning,
    severity: Severity::High,
    color: "#F59E0B",
    description: "pH is below the healthy range. Early signs of acidosis or digestive \
                  upset are possible.",
    recommendations: [
        "Add electrolytes to drinking water",
        "Reduce grain and increase roughage",
        "Add probiotics to support gut flora",
        "Re-test pH within 24 hours",
    ],
};

static HEALTHY_RANGE: PhBand = PhBand {
    status: PhStatus::HealthyRange,
    severity: Severity::Low,
    color: "#10B981",
    description: "pH is within the healthy range. No signs of acid-base imbalance.",
    recommendations: [
        "Continue the current feeding program",
        "Keep providing clean fresh water",
        "Maintain regular vaccination schedule",
        "Test pH weekly for ongoing monitoring",
    ],
};

static ALKALOSIS_WARNING: PhBand = PhBand {
    status: PhStatus::AlkalosisWarning,
    severity: Severity::Medium,
    color: "#3B82F6",
    description: "pH is above the healthy range. Heat stress or mineral imbalance may be \
                  developing.",
    recommendations: [
        "Improve ventilation and provide shade",
        "Check calcium and bicarbonate levels in feed",
        "Offer cool fresh water",
        "Re-test pH within 24 hours",
    ],
};

static SEVERE_ALKALOSIS: PhBand = PhBand {
    status: PhStatus::SevereAlkalosis,
    severity: Severity::Critical,
    color: "#7C3AED",
    description: "pH is dangerously high. The bird is likely suffering from severe \
                  alkalosis and needs immediate attention.",
    recommendations: [
        "Contact a veterinarian immediately",
        "Stop all alkaline supplements",
        "Provide acidified water (apple cider vinegar)",
        "Move the bird to a cool, ventilated area",
    ],
};

/// Select the band for a reading.
///
/// Callers validate `0 <= ph <= 14` first; anything the lower bands reject
/// (including NaN) lands in the last band.
pub fn band_for(ph: f64) -> &'static PhBand {
    if ph < SEVERE_ACIDOSIS_BELOW {
        &SEVERE_ACIDOSIS
    } else if ph < HEALTHY_MIN {
        &ACIDOSIS_WARNING
    } else if ph <= HEALTHY_MAX {
        &HEALTHY_RANGE
    } else if ph <= ALKALOSIS_WARNING_MAX {
        &ALKALOSIS_WARNING
    } else {
        &SEVERE_ALKALOSIS
    }
}

/// All bands from most acidic to most alkaline.
pub fn bands() -> [&'static PhBand; 5] {
    [
        &SEVERE_ACIDOSIS,
        &ACIDOSIS_WARNING,
        &HEALTHY_RANGE,
        &ALKALOSIS_WARNING,
        &SEVERE_ALKALOSIS,
    ]
}

/// Human-readable pH span of each band, in [`bands`] order.
pub fn band_ranges() -> [String; 5] {
    [
        format!("below {:.1}", SEVERE_ACIDOSIS_BELOW),
        format!("{:.1} - {:.1}", SEVERE_ACIDOSIS_BELOW, HEALTHY_MIN),
        format!("{:.1} - {:.1}", HEALTHY_MIN, HEALTHY_MAX),
        format!("{:.1} - {:.1}", HEALTHY_MAX, ALKALOSIS_WARNING_MAX),
        format!("above {:.1}", ALKALOSIS_WARNING_MAX),
    ]
}
