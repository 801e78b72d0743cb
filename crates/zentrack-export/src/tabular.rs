//! Spreadsheet-friendly CSV exports.

use csv::{Writer, WriterBuilder};
use jiff::Timestamp;

use zentrack_core::models::analytics::StressAnalytics;
use zentrack_core::models::history::AssessmentRecord;

use crate::error::ExportError;

const SESSION_HEADER: [&str; 9] = [
    "Session ID",
    "Date",
    "Time",
    "Questionnaire",
    "Stress Level",
    "Severity",
    "Anxiety Score",
    "Max Score",
    "Percentage (%)",
];

/// One row per record, in the order given.
pub fn sessions_csv(records: &[AssessmentRecord]) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(SESSION_HEADER)?;

    for record in records {
        writer.write_record([
            record.id.to_string(),
            record.recorded_at.strftime("%Y-%m-%d").to_string(),
            record.recorded_at.strftime("%H:%M:%S").to_string(),
            record.result.questionnaire_id.clone(),
            record.stress_level.to_string(),
            record.result.severity.to_string(),
            record.result.total.to_string(),
            record.result.max_score.to_string(),
            record.result.percentage.to_string(),
        ])?;
    }

    let csv = finish(writer)?;
    tracing::debug!(rows = records.len(), "sessions CSV generated");
    Ok(csv)
}

/// A sectioned report: summary statistics, stress distribution, then the
/// timeline. Sections have different widths, so rows are not uniform.
pub fn analytics_csv(
    analytics: &StressAnalytics,
    generated_at: Timestamp,
) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(["ZenTrack Stress Analytics Report"])?;
    writer.write_record([
        "Generated:".to_string(),
        generated_at.strftime("%Y-%m-%d %H:%M:%S UTC").to_string(),
    ])?;
    writer.write_record([""])?;

    writer.write_record(["Summary Statistics"])?;
    writer.write_record(["Total Sessions".to_string(), analytics.total_sessions.to_string()])?;
    writer.write_record([
        "Average Anxiety Score".to_string(),
        analytics.average_score.to_string(),
    ])?;
    writer.write_record(["Period (Days)".to_string(), analytics.period_days.to_string()])?;
    writer.write_record([""])?;

    let dist = &analytics.stress_distribution;
    writer.write_record(["Stress Distribution"])?;
    writer.write_record(["Low Stress Sessions".to_string(), dist.low.to_string()])?;
    writer.write_record(["Moderate Stress Sessions".to_string(), dist.moderate.to_string()])?;
    writer.write_record(["High Stress Sessions".to_string(), dist.high.to_string()])?;
    writer.write_record([""])?;

    writer.write_record(["Timeline Data"])?;
    writer.write_record(["Date", "Stress Level", "Anxiety Score", "Percentage (%)"])?;
    for point in &analytics.timeline {
        writer.write_record([
            point.recorded_at.to_string(),
            point.stress_level.to_string(),
            point.total.to_string(),
            point.percentage.to_string(),
        ])?;
    }

    finish(writer)
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}
