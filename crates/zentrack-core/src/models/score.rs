use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Severity;

/// The outcome of one completed assessment run.
///
/// Produced once per run and handed to the caller by value; the engine
/// that computed it does not keep a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub questionnaire_id: String,
    /// Sum of all answers, in `[0, max_score]`.
    pub total: u32,
    pub max_score: u32,
    /// `round(total / max_score * 100)`, clamped to `[0, 100]`.
    pub percentage: u8,
    pub severity: Severity,
}

impl ScoreResult {
    /// The payload the web client posts to the backend after scoring.
    pub fn submission(&self) -> ScoreSubmission {
        ScoreSubmission {
            score: self.percentage,
        }
    }
}

/// Body of the backend's score persistence call: `{ "score": 50 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreSubmission {
    pub score: u8,
}
