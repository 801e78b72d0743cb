use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative result of an assessment, chosen from a questionnaire's
/// ordered severity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Mild,
    Moderate,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }

    /// Collapse the four-band severity into the three-level stress scale
    /// used for recommendations and dashboard distribution.
    pub fn stress_level(self) -> StressLevel {
        match self {
            Severity::Low => StressLevel::Low,
            Severity::Mild => StressLevel::Moderate,
            Severity::Moderate | Severity::High => StressLevel::High,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-level stress classification.
///
/// On the HAM-A scale this lines up with totals below 18, 18 to 24, and
/// 25 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl From<Severity> for StressLevel {
    fn from(severity: Severity) -> Self {
        severity.stress_level()
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
        };
        f.write_str(s)
    }
}
