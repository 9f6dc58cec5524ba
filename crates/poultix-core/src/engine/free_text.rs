//! Free-text symptom matcher for the chat assistant.
//!
//! Best-effort keyword scoring, kept apart from the numeric path:
//! - a `pH <number>` token is answered with the full pH report
//! - otherwise each disease scores +10 for its name or an alias and +2 per
//!   symptom word (longer than 3 characters) found in the text
//! - with no disease hit, pH topic explainers, then a default reply
//!
//! Misfires on ambiguous text are acceptable; panics are not.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::classifier::{
    band_ranges, bands, ALKALOSIS_WARNING_MAX, HEALTHY_MAX, HEALTHY_MIN, SEVERE_ACIDOSIS_BELOW,
};
use super::DiagnosticEngine;
use crate::models::{DiseaseRecord, PH_MAX, PH_MIN};

const NAME_MATCH_POINTS: u32 = 10;
const SYMPTOM_WORD_POINTS: u32 = 2;
const MIN_SYMPTOM_WORD_LEN: usize = 4;

static PH_TOKEN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?i)\bph\s*(?:level|value|reading)?\s*(?:of|is|was|=|:)?\s*(-?\d+(?:\.\d+)?)").ok()
});

pub const DEFAULT_RESPONSE: &str = "I can help you interpret pH readings and poultry disease \
symptoms. Try asking \"What does pH 5.2 mean?\" or describe what you see, for example \
\"bloody droppings and ruffled feathers\".";

fn acidosis_explainer() -> String {
    format!(
        "Acidosis means the pH is below the healthy range of {:.1} - {:.1}. In poultry it \
         usually follows digestive upset, fermented or mouldy feed, grain overload or \
         dehydration. Below {:.1} it is severe and needs a veterinarian. Share a reading such \
         as \"pH 5.2\" for a full assessment.",
        HEALTHY_MIN, HEALTHY_MAX, SEVERE_ACIDOSIS_BELOW
    )
}

fn alkalosis_explainer() -> String {
    format!(
        "Alkalosis means the pH is above the healthy range of {:.1} - {:.1}. It is most often \
         caused by heat stress and heavy panting, or by too much calcium or bicarbonate in the \
         ration. Above {:.1} it is severe and needs a veterinarian. Share a reading such as \
         \"pH 8.1\" for a full assessment.",
        HEALTHY_MIN, HEALTHY_MAX, ALKALOSIS_WARNING_MAX
    )
}

/// Pull the first `pH <number>` value out of the text.
pub fn extract_ph(text: &str) -> Option<f64> {
    let regex = PH_TOKEN.as_ref()?;
    let captures = regex.captures(text)?;
    captures.get(1)?.as_str().parse().ok()
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '-')
        .filter(|w| !w.is_empty())
}

/// Keyword score of a disease against lowercase text.
pub fn score_disease(record: &DiseaseRecord, text_lower: &str) -> u32 {
    let mut score = 0;

    let named = text_lower.contains(&record.name.to_lowercase())
        || record
            .aliases
            .iter()
            .any(|alias| text_lower.contains(&alias.to_lowercase()));
    if named {
        score += NAME_MATCH_POINTS;
    }

    for symptom in &record.symptoms {
        let symptom_lower = symptom.to_lowercase();
        for word in words(&symptom_lower) {
            if word.chars().count() >= MIN_SYMPTOM_WORD_LEN && text_lower.contains(word) {
                score += SYMPTOM_WORD_POINTS;
            }
        }
    }

    score
}

fn best_disease<'a>(records: &'a [DiseaseRecord], text_lower: &str) -> Option<(&'a DiseaseRecord, u32)> {
    let mut best: Option<(&DiseaseRecord, u32)> = None;
    for record in records {
        let score = score_disease(record, text_lower);
        // Strictly greater keeps the earlier record on ties
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((record, score));
        }
    }
    best
}

/// Chat-style profile of a single disease.
pub fn format_disease_profile(record: &DiseaseRecord) -> String {
    let mut out = String::new();

    out.push_str(&record.name);
    out.push('\n');
    out.push_str(&format!(
        "Category: {} | pH range: {} | Severity: {}\n",
        record.category, record.ph_range, record.severity
    ));
    out.push_str(&format!("Mortality: {}\n", record.mortality));

    out.push_str("\nKey symptoms:\n");
    for symptom in record.key_symptoms() {
        out.push_str(&format!("- {}\n", symptom));
    }

    if !record.causes.is_empty() {
        out.push_str("\nCommon causes:\n");
        for cause in &record.causes {
            out.push_str(&format!("- {}\n", cause));
        }
    }

    out.push_str("\nImmediate actions:\n");
    for (i, measure) in record.quick_measures.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, measure));
    }

    out.push_str("\nTreatment:\n");
    out.push_str(&record.treatment);
    out.push('\n');

    out
}

fn ph_explainer() -> String {
    let mut out = format!(
        "Healthy poultry pH is between {:.1} and {:.1}. Reading bands:\n",
        HEALTHY_MIN, HEALTHY_MAX
    );
    for (band, range) in bands().iter().zip(band_ranges()) {
        out.push_str(&format!(
            "- {}: {} ({})\n",
            range, band.status, band.severity
        ));
    }
    out.push_str("Share a reading such as \"pH 5.2\" for a full assessment.\n");
    out
}

fn invalid_ph_response(value: f64) -> String {
    format!(
        "pH {} is outside the 0-14 scale. Please check the reading and try again.",
        value
    )
}

fn mentions_any(tokens: &[&str], stems: &[&str]) -> bool {
    tokens
        .iter()
        .any(|token| stems.iter().any(|stem| token.starts_with(*stem)))
}

pub(crate) fn respond(engine: &DiagnosticEngine<'_>, text: &str) -> String {
    if let Some(ph) = extract_ph(text) {
        debug!(ph, "free text carries a pH reading");
        if !(PH_MIN..=PH_MAX).contains(&ph) {
            return invalid_ph_response(ph);
        }
        return engine.generate_report(ph);
    }

    let text_lower = text.to_lowercase();

    if let Some((record, score)) = best_disease(engine.knowledge_base().records(), &text_lower) {
        debug!(disease = %record.name, score, "free text matched disease");
        return format_disease_profile(record);
    }

    let tokens: Vec<&str> = words(&text_lower).collect();

    if mentions_any(&tokens, &["acidosis", "acidic"]) {
        acidosis_explainer()
    } else if mentions_any(&tokens, &["alkalosis", "alkaline"]) {
        alkalosis_explainer()
    } else if tokens.contains(&"ph") {
        ph_explainer()
    } else {
        DEFAULT_RESPONSE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::knowledge_base;
    use crate::models::{DiseaseCategory, PhRange, Severity};

    fn record(name: &str, symptoms: &[&str]) -> DiseaseRecord {
        DiseaseRecord {
            name: name.into(),
            category: DiseaseCategory::Infection,
            ph_range: PhRange::new(5.0, 6.0),
            aliases: vec![],
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            causes: vec![],
            quick_measures: vec![],
            treatment: String::new(),
            severity: Severity::Medium,
            mortality: "Low".into(),
        }
    }

    #[test]
    fn test_extract_ph_shapes() {
        assert_eq!(extract_ph("pH 5.2"), Some(5.2));
        assert_eq!(extract_ph("my chicken has a PH of 8"), Some(8.0));
        assert_eq!(extract_ph("ph=6.9 today"), Some(6.9));
        assert_eq!(extract_ph("pH: 4.4"), Some(4.4));
        assert_eq!(extract_ph("the ph level is 7.1"), Some(7.1));
        assert_eq!(extract_ph("ph5.5"), Some(5.5));
        assert_eq!(extract_ph("ph -1"), Some(-1.0));
    }

    #[test]
    fn test_extract_ph_absent() {
        assert_eq!(extract_ph("what is ph?"), None);
        assert_eq!(extract_ph("phosphorus 5 grams"), None);
        assert_eq!(extract_ph("graph 5"), None);
        assert_eq!(extract_ph(""), None);
    }

    #[test]
    fn test_name_scores_ten() {
        let kb = knowledge_base();
        let cocci = kb.find("Coccidiosis").unwrap();
        assert_eq!(score_disease(cocci, "is this coccidiosis?"), 10);
        assert_eq!(score_disease(cocci, "cocci"), 10);
    }

    #[test]
    fn test_symptom_words_score_two_each() {
        let kb = knowledge_base();
        let cocci = kb.find("Coccidiosis").unwrap();
        // "bloody" and "droppings" from the first symptom
        assert_eq!(score_disease(cocci, "i see bloody droppings"), 4);
        // Short words ("and") never count
        assert_eq!(score_disease(cocci, "and"), 0);
    }

    #[test]
    fn test_best_disease_prefers_name() {
        let kb = knowledge_base();
        let (record, _) = best_disease(kb.records(), "could this be sour crop").unwrap();
        assert_eq!(record.name, "Sour Crop");
    }

    #[test]
    fn test_best_disease_tie_goes_to_earlier_record() {
        let records = vec![
            record("Earlier", &["Watery droppings"]),
            record("Later", &["Watery droppings"]),
        ];
        let (record, score) = best_disease(&records, "watery droppings since monday").unwrap();
        assert_eq!(record.name, "Earlier");
        assert_eq!(score, 4);
    }

    #[test]
    fn test_best_disease_higher_score_beats_table_order() {
        let records = vec![
            record("Earlier", &["Watery droppings"]),
            record("Later", &["Watery droppings", "Ruffled feathers"]),
        ];
        let (record, _) = best_disease(&records, "watery droppings, ruffled feathers").unwrap();
        assert_eq!(record.name, "Later");
    }

    #[test]
    fn test_no_disease_for_unrelated_text() {
        let kb = knowledge_base();
        assert!(best_disease(kb.records(), "hello there").is_none());
    }

    #[test]
    fn test_profile_contents() {
        let kb = knowledge_base();
        let profile = format_disease_profile(kb.find("Sour Crop").unwrap());
        assert!(profile.starts_with("Sour Crop\n"));
        assert!(profile.contains("pH range: 4.0 - 6.0"));
        assert!(profile.contains("1. Withhold feed for 24 hours, water only"));
        assert!(profile.contains("Treatment:"));
    }

    #[test]
    fn test_ph_explainer_lists_all_bands() {
        let text = ph_explainer();
        for label in ["Severe Acidosis", "Acidosis Warning", "Healthy Range", "Alkalosis Warning", "Severe Alkalosis"] {
            assert!(text.contains(label), "missing {}", label);
        }
        assert!(text.contains("- below 4.5: Severe Acidosis (critical)"));
        assert!(text.contains("- 6.5 - 7.5: Healthy Range (low)"));
    }

    #[test]
    fn test_explainers_quote_band_thresholds() {
        let acid = acidosis_explainer();
        assert!(acid.contains("healthy range of 6.5 - 7.5"));
        assert!(acid.contains("Below 4.5 it is severe"));
        assert!(alkalosis_explainer().contains("Above 8.5 it is severe"));
    }
}
