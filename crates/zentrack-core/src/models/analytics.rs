//! Dashboard analytics over a user's score history.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::history::AssessmentRecord;
use super::severity::StressLevel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StressDistribution {
    pub low: u32,
    pub moderate: u32,
    pub high: u32,
}

impl StressDistribution {
    fn record(&mut self, level: StressLevel) {
        match level {
            StressLevel::Low => self.low += 1,
            StressLevel::Moderate => self.moderate += 1,
            StressLevel::High => self.high += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimelinePoint {
    pub recorded_at: Timestamp,
    pub stress_level: StressLevel,
    pub total: u32,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StressAnalytics {
    pub total_sessions: usize,
    pub stress_distribution: StressDistribution,
    /// Mean raw total across the window, rounded to two decimals.
    pub average_score: f64,
    /// Oldest first.
    pub timeline: Vec<TimelinePoint>,
    pub period_days: u32,
}

/// Summarise the records that fall within `period_days` before `now`.
pub fn summarize(
    records: &[AssessmentRecord],
    now: Timestamp,
    period_days: u32,
) -> StressAnalytics {
    let window = SignedDuration::from_hours(i64::from(period_days) * 24);
    let start = now.checked_sub(window).unwrap_or(Timestamp::MIN);

    let mut in_window: Vec<&AssessmentRecord> = records
        .iter()
        .filter(|r| r.recorded_at >= start)
        .collect();
    in_window.sort_by_key(|r| r.recorded_at);

    let mut distribution = StressDistribution::default();
    let mut sum = 0u64;
    let mut timeline = Vec::with_capacity(in_window.len());
    for record in &in_window {
        distribution.record(record.stress_level);
        sum += u64::from(record.result.total);
        timeline.push(TimelinePoint {
            recorded_at: record.recorded_at,
            stress_level: record.stress_level,
            total: record.result.total,
            percentage: record.result.percentage,
        });
    }

    let average_score = if in_window.is_empty() {
        0.0
    } else {
        let mean = sum as f64 / in_window.len() as f64;
        (mean * 100.0).round() / 100.0
    };

    StressAnalytics {
        total_sessions: in_window.len(),
        stress_distribution: distribution,
        average_score,
        timeline,
        period_days,
    }
}
