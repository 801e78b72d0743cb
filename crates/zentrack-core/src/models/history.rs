use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::score::ScoreResult;
use super::severity::StressLevel;

/// A scored assessment as kept in the user's history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub result: ScoreResult,
    pub stress_level: StressLevel,
    pub recorded_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(result: ScoreResult, recorded_at: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            stress_level: result.severity.stress_level(),
            result,
            recorded_at,
        }
    }
}

/// The most recent `limit` records, newest first.
pub fn recent(records: &[AssessmentRecord], limit: usize) -> Vec<AssessmentRecord> {
    let mut sorted: Vec<_> = records.to_vec();
    sorted.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    sorted.truncate(limit);
    sorted
}
