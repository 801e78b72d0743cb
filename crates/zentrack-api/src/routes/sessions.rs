use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use zentrack_core::models::history::AssessmentRecord;
use zentrack_core::models::recommendation::{recommend_therapy, TherapyRecommendation};
use zentrack_core::models::score::{ScoreResult, ScoreSubmission};
use zentrack_core::models::severity::StressLevel;
use zentrack_instruments::engine::{AssessmentEngine, EngineSnapshot};
use zentrack_instruments::error::InstrumentError;
use zentrack_instruments::get_questionnaire;

use crate::error::ApiError;
use crate::state::{AppState, Session};

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub questionnaire_id: String,
    /// Progress saved by the client, restored instead of starting fresh.
    #[serde(default)]
    pub resume: Option<SavedProgress>,
}

#[derive(Deserialize)]
pub struct SavedProgress {
    pub answers: Vec<Option<i32>>,
    pub cursor: usize,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub value: i32,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    /// The client keeps the user on the assessment screen while true.
    pub blocks_navigation: bool,
    #[serde(flatten)]
    pub snapshot: EngineSnapshot,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub session_id: Uuid,
    pub result: ScoreResult,
    pub stress_level: StressLevel,
    pub recommendation: TherapyRecommendation,
    pub submission: ScoreSubmission,
    pub trend: Vec<u8>,
}

fn session_view(id: Uuid, engine: &AssessmentEngine) -> Result<SessionResponse, ApiError> {
    let snapshot = engine
        .snapshot()
        .ok_or_else(|| ApiError::Internal(format!("session {id} has no renderable run")))?;
    Ok(SessionResponse {
        session_id: id,
        blocks_navigation: engine.blocks_navigation(),
        snapshot,
    })
}

fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("session not found: {id}"))
}

pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let questionnaire = get_questionnaire(&req.questionnaire_id)
        .ok_or(InstrumentError::UnknownQuestionnaire(req.questionnaire_id))?;

    let mut engine = AssessmentEngine::with_policy(state.unset_policy);
    match req.resume {
        Some(saved) => engine.resume(questionnaire, &saved.answers, saved.cursor)?,
        None => engine.start(questionnaire),
    }

    let now = jiff::Timestamp::now();
    state.prune_idle_sessions(now).await;

    let id = Uuid::new_v4();
    let view = session_view(id, &engine)?;
    state
        .sessions
        .lock()
        .await
        .insert(id, Session::new(engine, now));

    tracing::info!(
        session_id = %id,
        questionnaire = %view.snapshot.questionnaire_id,
        "session created"
    );
    Ok(Json(view))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(session_view(id, &session.engine)?))
}

pub async fn select_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let engine = sessions
        .get_mut(&id)
        .ok_or_else(|| session_not_found(id))?
        .touch(jiff::Timestamp::now());
    engine.select_answer(req.value)?;
    Ok(Json(session_view(id, engine)?))
}

pub async fn go_to_previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let engine = sessions
        .get_mut(&id)
        .ok_or_else(|| session_not_found(id))?
        .touch(jiff::Timestamp::now());
    engine.go_to_previous()?;
    Ok(Json(session_view(id, engine)?))
}

pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let engine = sessions
        .get_mut(&id)
        .ok_or_else(|| session_not_found(id))?
        .touch(jiff::Timestamp::now());
    engine.reset()?;
    Ok(Json(session_view(id, engine)?))
}

/// Score a session, then record the result in history and the trend chart.
pub async fn compute_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let result = {
        let mut sessions = state.sessions.lock().await;
        let engine = sessions
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?
            .touch(jiff::Timestamp::now());
        engine.compute_score()?
    };

    let record = AssessmentRecord::new(result.clone(), jiff::Timestamp::now());
    let stress_level = record.stress_level;
    state.history.lock().await.push(record);

    let trend = {
        let mut trend = state.trend.lock().await;
        trend.push(result.percentage);
        trend.points()
    };

    tracing::info!(
        session_id = %id,
        total = result.total,
        percentage = result.percentage,
        stress_level = %stress_level,
        "session scored"
    );

    Ok(Json(ScoreResponse {
        session_id: id,
        submission: result.submission(),
        recommendation: recommend_therapy(stress_level),
        stress_level,
        result,
        trend,
    }))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    state
        .sessions
        .lock()
        .await
        .remove(&id)
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(()))
}
