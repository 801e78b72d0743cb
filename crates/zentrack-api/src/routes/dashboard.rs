use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use zentrack_core::models::analytics::{summarize, StressAnalytics};
use zentrack_core::models::history::{recent, AssessmentRecord};
use zentrack_core::models::recommendation::{recommend_therapy, TherapyRecommendation};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: usize = 50;
const DEFAULT_PERIOD_DAYS: u32 = 30;

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct AnalyticsQuery {
    pub days: Option<u32>,
}

#[derive(Serialize)]
pub struct TrendResponse {
    pub points: Vec<u8>,
    pub capacity: usize,
    pub latest: Option<u8>,
}

pub async fn list_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<AssessmentRecord>> {
    let history = state.history.lock().await;
    Json(recent(&history, query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT)))
}

#[derive(Serialize)]
pub struct HistoryEntryResponse {
    #[serde(flatten)]
    pub record: AssessmentRecord,
    pub recommendation: TherapyRecommendation,
}

pub async fn get_history_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryEntryResponse>, ApiError> {
    let record = state
        .history
        .lock()
        .await
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("history entry not found: {id}")))?;

    Ok(Json(HistoryEntryResponse {
        recommendation: recommend_therapy(record.stress_level),
        record,
    }))
}

pub async fn get_trend(State(state): State<AppState>) -> Json<TrendResponse> {
    let trend = state.trend.lock().await;
    Json(TrendResponse {
        points: trend.points(),
        capacity: trend.capacity(),
        latest: trend.latest(),
    })
}

pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Json<StressAnalytics> {
    let history = state.history.lock().await;
    let days = query.days.unwrap_or(DEFAULT_PERIOD_DAYS);
    Json(summarize(&history, jiff::Timestamp::now(), days))
}
