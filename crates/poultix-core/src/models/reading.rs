//! Reading history models.

use serde::{Deserialize, Serialize};

use super::FeedbackResult;

/// One submitted pH reading, as kept in the history store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingHistoryEntry {
    /// Local UUID
    pub id: String,
    /// The pH value that was submitted
    pub value: f64,
    /// RFC 3339 timestamp of submission
    pub timestamp: String,
    pub feedback: FeedbackResult,
    /// Bird the sample was taken from, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chicken_id: Option<String>,
}

impl ReadingHistoryEntry {
    /// Create a new entry stamped with the current time.
    pub fn new(feedback: FeedbackResult, chicken_id: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            value: feedback.ph,
            timestamp: chrono::Utc::now().to_rfc3339(),
            feedback,
            chicken_id,
        }
    }
}
