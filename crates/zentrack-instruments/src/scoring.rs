use serde::{Deserialize, Serialize};
use ts_rs::TS;

use zentrack_core::models::severity::Severity;

/// Lowest answer value.
pub const ANSWER_MIN: u8 = 0;
/// Highest answer value. Every question offers `ANSWER_MAX + 1` options.
pub const ANSWER_MAX: u8 = 4;

/// One prompt in a questionnaire. Identified by its position.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub description: Option<String>,
}

/// Inclusive upper bound of a severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub max_total: u32,
    pub severity: Severity,
}

/// Ordered score-to-severity table.
///
/// Bands are scanned in order and the first one whose `max_total` is at
/// least the score wins; any score above every band maps to `above`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityScale {
    pub bands: Vec<SeverityBand>,
    pub above: Severity,
}

impl SeverityScale {
    pub fn classify(&self, total: u32) -> Severity {
        self.bands
            .iter()
            .find(|band| total <= band.max_total)
            .map_or(self.above, |band| band.severity)
    }

    /// True when band bounds never decrease and severities never step back.
    pub fn is_monotonic(&self) -> bool {
        let bounds_ok = self
            .bands
            .windows(2)
            .all(|w| w[0].max_total <= w[1].max_total);
        let severities_ok = self
            .bands
            .iter()
            .map(|b| b.severity)
            .chain(std::iter::once(self.above))
            .collect::<Vec<_>>()
            .windows(2)
            .all(|w| w[0] <= w[1]);
        bounds_ok && severities_ok
    }
}

/// Convert a raw total to a whole percentage of `max_score`, clamped to
/// `[0, 100]`. A zero maximum yields 0.
pub fn percentage(total: u32, max_score: u32) -> u8 {
    if max_score == 0 {
        return 0;
    }
    let pct = (f64::from(total) / f64::from(max_score) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Check an answer value against `[ANSWER_MIN, ANSWER_MAX]`.
pub fn answer_value(value: i32) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| (ANSWER_MIN..=ANSWER_MAX).contains(v))
}
