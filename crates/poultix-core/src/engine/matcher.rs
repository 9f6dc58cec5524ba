//! pH range matcher.
//!
//! Score for a candidate whose range contains the reading:
//! `100 - |ph - center| / width * 100`, rounded to [`SCORE_DECIMALS`] places.
//! A reading at the centre of its range scores 100, at either edge 50.

use tracing::debug;

use crate::knowledge::KnowledgeBase;
use crate::models::{DiseaseMatch, DiseaseRecord};

/// Score awarded to a zero-width range that contains the reading.
pub const POINT_MATCH_SCORE: f64 = 100.0;

/// Decimal places kept in a score. Ranges that tie exactly on paper must
/// compare equal, so float noise is rounded away.
pub const SCORE_DECIMALS: i32 = 9;

fn round_score(score: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS);
    (score * scale).round() / scale
}

/// Relevance score of `record` for `ph`, assuming the range contains it.
pub fn range_score(record: &DiseaseRecord, ph: f64) -> f64 {
    let width = record.ph_range.width();
    if width <= 0.0 {
        return POINT_MATCH_SCORE;
    }
    round_score(100.0 - ((ph - record.ph_range.center()).abs() / width * 100.0))
}

/// Every record whose range contains `ph`, best first.
///
/// Ties keep table order. Returns an empty list when nothing matches.
pub fn match_ph(kb: &KnowledgeBase, ph: f64) -> Vec<DiseaseMatch> {
    let mut matches: Vec<DiseaseMatch> = kb
        .records()
        .iter()
        .filter(|record| record.matches_ph(ph))
        .map(|record| DiseaseMatch {
            score: range_score(record, ph),
            disease: record.clone(),
        })
        .collect();

    // sort_by is stable, so equal scores stay in table order
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(ph, candidates = matches.len(), "matched diseases");
    matches
}
