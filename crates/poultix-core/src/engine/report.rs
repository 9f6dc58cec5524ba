//! Human-readable pH report.
//!
//! Layout, in order:
//! 1. pH value and status line
//! 2. Risk listing grouped by severity (critical first)
//! 3. Quick measures of the top-ranked disease
//! 4. Treatment protocol of the top-ranked disease
//! 5. Monitoring footer
//!
//! With no candidate diseases, sections 2-4 are replaced by a no-risk
//! statement and maintenance tips.

use crate::models::{FeedbackResult, Severity};

pub const REPORT_TITLE: &str = "pH Analysis Report";

pub const NO_RISK_STATEMENT: &str = "No immediate disease risk detected for this reading.";

const MAINTENANCE_TIPS: [&str; 4] = [
    "Keep feed dry and free of mould",
    "Provide clean fresh water at all times",
    "Maintain good ventilation and dry litter",
    "Follow the regular vaccination schedule",
];

const MONITORING_GUIDANCE: [&str; 3] = [
    "Re-test pH within 24 hours, or after any corrective action",
    "Record each reading to follow the trend over time",
    "Consult a veterinarian if symptoms persist beyond 48 hours",
];

fn push_heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');
}

/// Render a report from a classified reading.
pub fn format_report(feedback: &FeedbackResult) -> String {
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(REPORT_TITLE.len()));
    out.push('\n');
    out.push_str(&format!("pH Value: {:.2}\n", feedback.ph));
    out.push_str(&format!(
        "Status: {} (severity: {})\n",
        feedback.status, feedback.severity
    ));
    out.push_str(&feedback.description);
    out.push('\n');

    match feedback.top_disease() {
        Some(top) => {
            push_heading(&mut out, "Disease Risk Assessment");
            for tier in Severity::DESCENDING {
                let in_tier: Vec<_> = feedback
                    .diseases
                    .iter()
                    .filter(|d| d.severity == tier)
                    .collect();
                if in_tier.is_empty() {
                    continue;
                }
                out.push_str(&format!("{}:\n", tier.as_str().to_uppercase()));
                for disease in in_tier {
                    out.push_str(&format!(
                        "  - {} (mortality: {})\n",
                        disease.name, disease.mortality
                    ));
                }
            }

            push_heading(&mut out, &format!("Immediate Actions ({})", top.name));
            for (i, measure) in top.quick_measures.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, measure));
            }

            push_heading(&mut out, "Treatment Protocol");
            out.push_str(&top.treatment);
            out.push('\n');
        }
        None => {
            out.push('\n');
            out.push_str(NO_RISK_STATEMENT);
            out.push('\n');

            push_heading(&mut out, "Maintenance Tips");
            for tip in MAINTENANCE_TIPS {
                out.push_str(&format!("- {}\n", tip));
            }
        }
    }

    push_heading(&mut out, "Monitoring");
    for line in MONITORING_GUIDANCE {
        out.push_str(&format!("- {}\n", line));
    }

    out
}
