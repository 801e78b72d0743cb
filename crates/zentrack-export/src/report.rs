//! Human-readable text report.

use std::fmt::Write;

use jiff::Timestamp;

use zentrack_core::models::analytics::StressAnalytics;
use zentrack_core::models::history::AssessmentRecord;
use zentrack_core::models::recommendation::recommend_therapy;

/// Sessions listed individually at the end of the report.
pub const RECENT_SESSION_LIMIT: usize = 10;

const WIDTH: usize = 60;

/// Render the full report. `records` are expected newest first.
pub fn text_report(
    records: &[AssessmentRecord],
    analytics: &StressAnalytics,
    generated_at: Timestamp,
) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let mut line = |text: &str| {
        let _ = writeln!(out, "{text}");
    };

    line(&heavy);
    line("ZENTRACK - STRESS MANAGEMENT REPORT");
    line(&heavy);
    line("");
    line(&format!(
        "Report Generated: {}",
        generated_at.strftime("%Y-%m-%d %H:%M:%S UTC")
    ));
    line("");

    line(&light);
    line("SUMMARY");
    line(&light);
    line(&format!("Total Assessments: {}", records.len()));
    match records.first() {
        Some(last) => {
            line(&format!(
                "Last Assessment: {}",
                last.recorded_at.strftime("%Y-%m-%d")
            ));
            line(&format!(
                "Last Anxiety Score: {}/{}",
                last.result.total, last.result.max_score
            ));
            line(&format!(
                "Recommended: {}",
                recommend_therapy(last.stress_level).message
            ));
        }
        None => {
            line("Last Assessment: Never");
            line("Last Anxiety Score: N/A");
        }
    }
    line("");

    let dist = &analytics.stress_distribution;
    line(&light);
    line(&format!("ANALYTICS (last {} days)", analytics.period_days));
    line(&light);
    line(&format!("Total Sessions: {}", analytics.total_sessions));
    line(&format!("Average Anxiety Score: {}", analytics.average_score));
    line("");
    line("Stress Distribution:");
    line(&format!("  - Low Stress: {} sessions", dist.low));
    line(&format!("  - Moderate Stress: {} sessions", dist.moderate));
    line(&format!("  - High Stress: {} sessions", dist.high));
    line("");

    if !records.is_empty() {
        line(&light);
        line("RECENT SESSIONS");
        line(&light);
        for (i, record) in records.iter().take(RECENT_SESSION_LIMIT).enumerate() {
            line("");
            line(&format!("Session #{}", i + 1));
            line(&format!(
                "  Date: {}",
                record.recorded_at.strftime("%Y-%m-%d %H:%M:%S")
            ));
            line(&format!("  Questionnaire: {}", record.result.questionnaire_id));
            line(&format!("  Stress Level: {}", record.stress_level));
            line(&format!("  Severity: {}", record.result.severity));
            line(&format!(
                "  Anxiety Score: {} ({}%)",
                record.result.total, record.result.percentage
            ));
        }
        line("");
    }

    line(&heavy);
    line("End of Report");
    line(&heavy);
    out
}
