use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use zentrack_core::models::analytics::summarize;
use zentrack_core::models::history::recent;
use zentrack_export::attachment_name;
use zentrack_export::report::text_report;
use zentrack_export::tabular::{analytics_csv, sessions_csv};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_EXPORT_LIMIT: usize = 100;
const REPORT_SESSION_LIMIT: usize = 50;
const DEFAULT_PERIOD_DAYS: u32 = 30;

const CSV: &str = "text/csv; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

#[derive(Deserialize)]
pub struct SessionsExportQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct AnalyticsExportQuery {
    pub days: Option<u32>,
}

fn attachment(content_type: &str, filename: String, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        body,
    )
        .into_response()
}

/// Recorded results, newest first, as CSV.
pub async fn export_sessions_csv(
    State(state): State<AppState>,
    Query(query): Query<SessionsExportQuery>,
) -> Result<Response, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_EXPORT_LIMIT);
    let records = recent(&state.history.lock().await, limit);
    let body = sessions_csv(&records)?;

    tracing::info!(rows = records.len(), "sessions exported");
    let now = jiff::Timestamp::now();
    Ok(attachment(CSV, attachment_name("sessions", "csv", now), body))
}

pub async fn export_analytics_csv(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsExportQuery>,
) -> Result<Response, ApiError> {
    let days = query.days.unwrap_or(DEFAULT_PERIOD_DAYS);
    let now = jiff::Timestamp::now();
    let analytics = summarize(&state.history.lock().await, now, days);
    let body = analytics_csv(&analytics, now)?;

    tracing::info!(days, sessions = analytics.total_sessions, "analytics exported");
    Ok(attachment(CSV, attachment_name("analytics", "csv", now), body))
}

/// Plain-text report over the latest sessions and the last 30 days.
pub async fn export_text_report(State(state): State<AppState>) -> Response {
    let now = jiff::Timestamp::now();
    let (records, analytics) = {
        let history = state.history.lock().await;
        (
            recent(&history, REPORT_SESSION_LIMIT),
            summarize(&history, now, DEFAULT_PERIOD_DAYS),
        )
    };
    let body = text_report(&records, &analytics, now);

    tracing::info!(sessions = records.len(), "text report exported");
    attachment(TEXT, attachment_name("report", "txt", now), body)
}
